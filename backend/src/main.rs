mod config;
mod errors;
mod schemas;
mod services;
mod state;
mod store;

use crate::config::AppConfig;
use crate::state::AppState;
use actix_web::{middleware, web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::info;
use mime_guess::from_path;
use std::io;
use std::thread;
use std::time::Duration;

/// Trunk output copied in by `build.rs`; empty when the frontend was not built.
static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Fallback for every path outside `/api`: serves the embedded asset at that
/// path, or `index.html` so the single-page app handles the route itself.
async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let cfg = AppConfig::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let schema = schemas::employee_onboarding::schema()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let store = store::open(&cfg.store).map_err(io::Error::other)?;
    let state = AppState::new(schema, store);
    let url = cfg.url();

    if cfg.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url);
        });
    }

    info!("Server running at {}", url);

    let json_limit = cfg.json_limit;
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(
                web::JsonConfig::default()
                    .limit(json_limit)
                    .error_handler(errors::json_error_handler),
            )
            .app_data(web::Data::new(state.clone()))
            .service(services::health::configure_routes())
            .service(services::form_schema::configure_routes())
            .service(services::submissions::configure_routes())
            .default_service(web::route().to(serve_embedded))
    })
    .bind((cfg.host.as_str(), cfg.port))?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test;

    #[actix_web::test]
    async fn unknown_paths_fall_back_to_the_index() {
        let app = test::init_service(App::new().default_service(web::route().to(serve_embedded))).await;
        let req = test::TestRequest::get().uri("/submissions/some-client-route").to_request();
        let resp = test::call_service(&app, req).await;

        match STATIC_DIR.get_file("index.html") {
            Some(index) => {
                assert_eq!(resp.status(), StatusCode::OK);
                let body = test::read_body(resp).await;
                assert_eq!(body.as_ref(), index.contents());
            }
            None => assert_eq!(resp.status(), StatusCode::NOT_FOUND),
        }
    }
}
