use std::sync::RwLock;

use common::model::submission::Submission;
use common::requests::ListParams;
use serde_json::{Map, Value};

use super::{new_submission, paginate, StoreError, SubmissionPage, SubmissionStore};

/// Process-local store; contents are lost on restart.
#[derive(Default)]
pub struct InMemorySubmissionStore {
    submissions: RwLock<Vec<Submission>>,
}

impl InMemorySubmissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&self, submission: Submission) -> Result<Submission, StoreError> {
        let mut submissions = self.submissions.write().map_err(|_| StoreError::Poisoned)?;
        submissions.push(submission.clone());
        Ok(submission)
    }
}

impl SubmissionStore for InMemorySubmissionStore {
    fn create(&self, data: Map<String, Value>) -> Result<Submission, StoreError> {
        self.insert(new_submission(data))
    }

    fn list(&self, params: &ListParams) -> Result<SubmissionPage, StoreError> {
        let snapshot = self
            .submissions
            .read()
            .map_err(|_| StoreError::Poisoned)?
            .clone();
        Ok(paginate(snapshot, params))
    }

    fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut submissions = self.submissions.write().map_err(|_| StoreError::Poisoned)?;
        match submissions.iter().position(|s| s.id == id) {
            Some(index) => {
                submissions.remove(index);
                Ok(())
            }
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_support::{ids, submission};
    use common::requests::SortOrder;
    use serde_json::json;

    fn seeded() -> InMemorySubmissionStore {
        let store = InMemorySubmissionStore::new();
        for (id, second) in [("b", 2), ("a", 1), ("d", 4), ("c", 3), ("e", 5)] {
            store.insert(submission(id, second)).unwrap();
        }
        store
    }

    fn params(page: usize, limit: usize, sort_order: SortOrder) -> ListParams {
        ListParams {
            page,
            limit,
            sort_order,
            ..ListParams::default()
        }
    }

    #[test]
    fn create_assigns_id_and_timestamp_and_keeps_data() {
        let store = InMemorySubmissionStore::new();
        let mut data = Map::new();
        data.insert("age".into(), json!(30));
        let first = store.create(data.clone()).unwrap();
        let second = store.create(data.clone()).unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(first.data, data);
        assert_eq!(store.list(&ListParams::default()).unwrap().total, 2);
    }

    #[test]
    fn lists_newest_first_by_default() {
        let page = seeded().list(&params(1, 10, SortOrder::Desc)).unwrap();
        assert_eq!(ids(&page), ["e", "d", "c", "b", "a"]);
        assert_eq!((page.total, page.page, page.total_pages), (5, 1, 1));
    }

    #[test]
    fn paginates_in_ascending_order() {
        let store = seeded();
        let page = store.list(&params(2, 2, SortOrder::Asc)).unwrap();
        assert_eq!(ids(&page), ["c", "d"]);
        assert_eq!(page.total_pages, 3);
        let last = store.list(&params(3, 2, SortOrder::Asc)).unwrap();
        assert_eq!(ids(&last), ["e"]);
        let beyond = store.list(&params(9, 2, SortOrder::Asc)).unwrap();
        assert!(beyond.data.is_empty());
        assert_eq!(beyond.page, 9);
    }

    #[test]
    fn equal_timestamps_keep_insertion_order() {
        let store = InMemorySubmissionStore::new();
        store.insert(submission("first", 7)).unwrap();
        store.insert(submission("second", 7)).unwrap();
        let desc = store.list(&params(1, 10, SortOrder::Desc)).unwrap();
        assert_eq!(ids(&desc), ["first", "second"]);
    }

    #[test]
    fn empty_store_has_one_page() {
        let page = InMemorySubmissionStore::new()
            .list(&ListParams::default())
            .unwrap();
        assert_eq!((page.total, page.total_pages), (0, 1));
    }

    #[test]
    fn delete_removes_once() {
        let store = seeded();
        store.delete("c").unwrap();
        assert!(matches!(store.delete("c"), Err(StoreError::NotFound(id)) if id == "c"));
        assert_eq!(store.list(&ListParams::default()).unwrap().total, 4);
    }
}
