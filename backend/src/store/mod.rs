//! Submission storage behind an injectable interface.
//!
//! Handlers only see `Arc<dyn SubmissionStore>` (held in `AppState`), so tests
//! can build isolated stores and the process picks an implementation from
//! `AppConfig` at startup:
//!
//! - `memory::InMemorySubmissionStore`: a `Vec` behind an `RwLock`.
//! - `sqlite::SqliteSubmissionStore`: a `rusqlite` connection behind a `Mutex`.
//!
//! Stores do not validate `data`; callers run the validation engine first.
//! Every mutation takes the store's write lock, so there is at most one writer
//! at a time.

pub mod memory;
pub mod sqlite;

use std::sync::Arc;

use chrono::Utc;
use common::model::submission::Submission;
use common::requests::{ListParams, SortOrder};
use log::info;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::config::StoreKind;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("submission '{0}' not found")]
    NotFound(String),
    #[error("submission store lock poisoned")]
    Poisoned,
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("stored data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("stored timestamp is invalid: {0}")]
    Timestamp(#[from] chrono::ParseError),
}

/// One page of a listing plus the totals needed to render pagination.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionPage {
    pub data: Vec<Submission>,
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
}

pub trait SubmissionStore: Send + Sync {
    /// Persists `data` as a new submission with a fresh id and timestamp.
    fn create(&self, data: Map<String, Value>) -> Result<Submission, StoreError>;

    /// Returns the requested page, sorted by creation time.
    fn list(&self, params: &ListParams) -> Result<SubmissionPage, StoreError>;

    /// Removes a submission; `StoreError::NotFound` if the id is unknown.
    fn delete(&self, id: &str) -> Result<(), StoreError>;
}

/// Opens the store selected by the configuration.
pub fn open(kind: &StoreKind) -> Result<Arc<dyn SubmissionStore>, StoreError> {
    match kind {
        StoreKind::Memory => {
            info!("Using in-memory submission store");
            Ok(Arc::new(memory::InMemorySubmissionStore::new()))
        }
        StoreKind::Sqlite { path } => {
            info!("Using sqlite submission store at {}", path);
            Ok(Arc::new(sqlite::SqliteSubmissionStore::open(path)?))
        }
    }
}

pub(crate) fn new_submission(data: Map<String, Value>) -> Submission {
    Submission {
        id: uuid::Uuid::new_v4().to_string(),
        created_at: Utc::now(),
        data,
    }
}

/// Sorts by `created_at` (stable, so equal timestamps keep insertion order) and cuts one page.
pub(crate) fn paginate(mut all: Vec<Submission>, params: &ListParams) -> SubmissionPage {
    match params.sort_order {
        SortOrder::Asc => all.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortOrder::Desc => all.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
    }
    let total = all.len();
    let data = all
        .into_iter()
        .skip(params.offset())
        .take(params.limit)
        .collect();
    SubmissionPage {
        data,
        total,
        page: params.page,
        total_pages: params.total_pages(total),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{DateTime, TimeZone, Utc};
    use common::model::submission::Submission;
    use serde_json::{json, Map};

    pub fn at(second: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, second).unwrap()
    }

    pub fn submission(id: &str, second: u32) -> Submission {
        let mut data = Map::new();
        data.insert("fullName".into(), json!(format!("Person {id}")));
        Submission {
            id: id.to_string(),
            created_at: at(second),
            data,
        }
    }

    pub fn ids(page: &super::SubmissionPage) -> Vec<&str> {
        page.data.iter().map(|s| s.id.as_str()).collect()
    }
}
