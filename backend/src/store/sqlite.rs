//! SQLite-backed submission store.
//!
//! Rows live in a single `submissions` table. `data` is stored as JSON text and
//! `created_at` as a fixed-width RFC 3339 UTC string, so ordering the column
//! as text is ordering by time. `seq` breaks ties in insertion order.

use std::sync::Mutex;

use chrono::{DateTime, SecondsFormat, Utc};
use common::model::submission::Submission;
use common::requests::{ListParams, SortOrder};
use rusqlite::{params, Connection};
use serde_json::{Map, Value};

use super::{new_submission, StoreError, SubmissionPage, SubmissionStore};

pub struct SqliteSubmissionStore {
    conn: Mutex<Connection>,
}

impl SqliteSubmissionStore {
    /// Opens (or creates) the database at `path`; `:memory:` keeps it in RAM.
    pub fn open(path: &str) -> Result<Self, StoreError> {
        let conn = if path == ":memory:" {
            Connection::open_in_memory()?
        } else {
            Connection::open(path)?
        };
        conn.execute(
            "CREATE TABLE IF NOT EXISTS submissions (
                seq INTEGER PRIMARY KEY AUTOINCREMENT,
                id TEXT NOT NULL UNIQUE,
                created_at TEXT NOT NULL,
                data TEXT NOT NULL
            )",
            [],
        )?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub(crate) fn insert(&self, submission: Submission) -> Result<Submission, StoreError> {
        let data = serde_json::to_string(&submission.data)?;
        let conn = self.conn.lock().map_err(|_| StoreError::Poisoned)?;
        conn.execute(
            "INSERT INTO submissions (id, created_at, data) VALUES (?1, ?2, ?3)",
            params![
                &submission.id,
                submission.created_at.to_rfc3339_opts(SecondsFormat::Nanos, true),
                data
            ],
        )?;
        Ok(submission)
    }
}

impl SubmissionStore for SqliteSubmissionStore {
    fn create(&self, data: Map<String, Value>) -> Result<Submission, StoreError> {
        self.insert(new_submission(data))
    }

    fn list(&self, listing: &ListParams) -> Result<SubmissionPage, StoreError> {
        let conn = self.conn.lock().map_err(|_| StoreError::Poisoned)?;

        let total: i64 = conn.query_row("SELECT COUNT(*) FROM submissions", [], |row| row.get(0))?;

        let sql = match listing.sort_order {
            SortOrder::Asc => {
                "SELECT id, created_at, data FROM submissions
                 ORDER BY created_at ASC, seq ASC LIMIT ?1 OFFSET ?2"
            }
            SortOrder::Desc => {
                "SELECT id, created_at, data FROM submissions
                 ORDER BY created_at DESC, seq ASC LIMIT ?1 OFFSET ?2"
            }
        };
        let limit = i64::try_from(listing.limit).unwrap_or(i64::MAX);
        let offset = i64::try_from(listing.offset()).unwrap_or(i64::MAX);

        let mut stmt = conn.prepare(sql)?;
        let rows = stmt
            .query_map(params![limit, offset], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut data = Vec::with_capacity(rows.len());
        for (id, created_at, raw) in rows {
            data.push(Submission {
                id,
                created_at: DateTime::parse_from_rfc3339(&created_at)?.with_timezone(&Utc),
                data: serde_json::from_str(&raw)?,
            });
        }

        let total = usize::try_from(total).unwrap_or(0);
        Ok(SubmissionPage {
            data,
            total,
            page: listing.page,
            total_pages: listing.total_pages(total),
        })
    }

    fn delete(&self, id: &str) -> Result<(), StoreError> {
        let conn = self.conn.lock().map_err(|_| StoreError::Poisoned)?;
        let removed = conn.execute("DELETE FROM submissions WHERE id = ?1", params![id])?;
        if removed == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_support::{at, ids, submission};
    use serde_json::json;

    fn seeded() -> SqliteSubmissionStore {
        let store = SqliteSubmissionStore::open(":memory:").unwrap();
        for (id, second) in [("b", 2), ("a", 1), ("c", 3), ("tie", 3)] {
            store.insert(submission(id, second)).unwrap();
        }
        store
    }

    #[test]
    fn round_trips_data_and_timestamp() {
        let store = SqliteSubmissionStore::open(":memory:").unwrap();
        let mut data = Map::new();
        data.insert("skills".into(), json!(["React", "Node"]));
        data.insert("age".into(), json!(33));
        let created = store.create(data.clone()).unwrap();

        let page = store.list(&ListParams::default()).unwrap();
        assert_eq!(page.data, vec![created]);
        assert_eq!(page.data[0].data, data);
    }

    #[test]
    fn sorts_and_paginates_like_the_memory_store() {
        let store = seeded();
        let desc = store.list(&ListParams::default()).unwrap();
        assert_eq!(ids(&desc), ["c", "tie", "b", "a"]);
        assert_eq!(desc.data[0].created_at, at(3));

        let asc = store
            .list(&ListParams {
                page: 2,
                limit: 3,
                sort_order: SortOrder::Asc,
                ..ListParams::default()
            })
            .unwrap();
        assert_eq!(ids(&asc), ["tie"]);
        assert_eq!((asc.total, asc.total_pages), (4, 2));
    }

    #[test]
    fn delete_unknown_id_is_not_found() {
        let store = seeded();
        store.delete("a").unwrap();
        assert!(matches!(store.delete("a"), Err(StoreError::NotFound(_))));
        assert_eq!(store.list(&ListParams::default()).unwrap().total, 3);
    }

    #[test]
    fn persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("submissions.sqlite");
        let path = path.to_str().unwrap();
        {
            let store = SqliteSubmissionStore::open(path).unwrap();
            store.insert(submission("kept", 9)).unwrap();
        }
        let reopened = SqliteSubmissionStore::open(path).unwrap();
        let page = reopened.list(&ListParams::default()).unwrap();
        assert_eq!(ids(&page), ["kept"]);
    }
}
