//! Shared application state injected into every handler.
//!
//! `AppState` is created once in `main.rs` and registered with Actix as
//! `web::Data<AppState>`. Cloning it is cheap: every field is behind an `Arc`.

use std::sync::Arc;
use std::time::Instant;

use common::model::form_schema::FormSchema;

use crate::store::SubmissionStore;

#[derive(Clone)]
pub struct AppState {
    /// The deployment's form. Immutable for the lifetime of the process.
    pub schema: Arc<FormSchema>,

    /// Where accepted submissions are kept.
    ///
    /// A trait object so `main.rs` can choose the implementation from
    /// configuration and tests can inject isolated stores.
    pub store: Arc<dyn SubmissionStore>,

    /// Process start, reported as `uptime` by the health endpoint.
    pub started_at: Instant,
}

impl AppState {
    pub fn new(schema: FormSchema, store: Arc<dyn SubmissionStore>) -> Self {
        Self {
            schema: Arc::new(schema),
            store,
            started_at: Instant::now(),
        }
    }
}
