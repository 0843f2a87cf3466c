/// Builds the API routes over the onboarding schema and a fresh in-memory store.
#[cfg(test)]
macro_rules! test_app {
    () => {{
        let state = $crate::state::AppState::new(
            $crate::schemas::employee_onboarding::schema().unwrap(),
            std::sync::Arc::new($crate::store::memory::InMemorySubmissionStore::new()),
        );
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(
                    actix_web::web::JsonConfig::default()
                        .error_handler($crate::errors::json_error_handler),
                )
                .app_data(actix_web::web::Data::new(state))
                .service($crate::services::health::configure_routes())
                .service($crate::services::form_schema::configure_routes())
                .service($crate::services::submissions::configure_routes()),
        )
        .await
    }};
}

pub mod form_schema;
pub mod health;
pub mod submissions;
