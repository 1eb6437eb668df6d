use std::sync::atomic::{AtomicU64, Ordering};
use crate::core::types::QueryId;

/// The id of the most recently issued search. Workers compare their own id
/// against it to find out whether they have been superseded.
#[derive(Debug, Default)]
pub struct QueryIdCell {
    current: AtomicU64,
}

impl QueryIdCell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a fresh random id and make it current. Never repeats the id it replaces.
    pub fn issue(&self) -> QueryId {
        loop {
            let id = rand::random::<u64>();
            if self.current.swap(id, Ordering::SeqCst) != id {
                return QueryId(id);
            }
        }
    }

    pub fn current(&self) -> QueryId {
        QueryId(self.current.load(Ordering::SeqCst))
    }

    pub fn is_current(&self, id: QueryId) -> bool {
        self.current.load(Ordering::SeqCst) == id.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_id_supersedes() {
        let cell = QueryIdCell::new();
        let first = cell.issue();
        assert!(cell.is_current(first));

        let second = cell.issue();
        assert_ne!(first, second);
        assert!(!cell.is_current(first));
        assert_eq!(cell.current(), second);
    }
}
