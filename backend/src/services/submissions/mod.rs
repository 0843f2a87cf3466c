//! # Submission Service Module
//!
//! Routes under `/api/submissions`. Creation is gated by the validation engine
//! from `common::validation`, run against the deployment schema held in
//! `AppState`; listing and deletion go straight to the injected store.
//!
//! ## Registered Routes:
//!
//! *   **`POST /`**:
//!     - **Handler**: `create::process`
//!     - **Description**: Validates the JSON body. Invalid → `400` whose body is
//!       exactly the per-field error map. Valid → the record is stored and the
//!       response is `201 { success, id, createdAt }`.
//!
//! *   **`GET /`**:
//!     - **Handler**: `list::process`
//!     - **Description**: Paginated listing. Accepts `page`, `limit`, `sortBy`
//!       (always resolves to `createdAt`) and `sortOrder` (`asc` | `desc`).
//!
//! *   **`DELETE /{id}`**:
//!     - **Handler**: `delete::process`
//!     - **Description**: `204` on success, `404 { "id": "Submission not found" }`
//!       for an unknown id.

mod create;
mod delete;
mod list;

use actix_web::web::{delete, get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/submissions";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", post().to(create::process))
        .route("", get().to(list::process))
        .route("/{id}", delete().to(delete::process))
}
