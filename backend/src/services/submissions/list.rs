use actix_web::{web, HttpResponse};
use common::requests::ListSubmissionsQuery;
use common::responses::{ListSubmissionsResponse, PageMeta};

use crate::errors::ApiError;
use crate::state::AppState;

pub async fn process(
    state: web::Data<AppState>,
    query: web::Query<ListSubmissionsQuery>,
) -> Result<HttpResponse, ApiError> {
    let params = query.resolve();
    let store = state.store.clone();
    let page = web::block(move || store.list(&params)).await??;

    Ok(HttpResponse::Ok().json(ListSubmissionsResponse {
        success: true,
        data: page.data,
        meta: PageMeta {
            total: page.total,
            page: page.page,
            total_pages: page.total_pages,
        },
    }))
}
