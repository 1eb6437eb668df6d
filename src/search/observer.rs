use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use parking_lot::Mutex;
use crate::core::error::Error;
use crate::core::types::SearchKind;
use crate::entry::{Entry, SourceSentence};

/// Receives search results. All methods default to doing nothing so an
/// observer only implements the shapes it cares about.
///
/// Callbacks run on a worker thread while the hub's lock is held; they must
/// not register or deregister observers.
pub trait SearchObserver: Send + Sync {
    /// `empty_query` is true when the input itself was empty
    fn on_entries(&self, _entries: &[Entry], _empty_query: bool) {}

    fn on_sentences(&self, _sentences: &[SourceSentence], _empty_query: bool) {}

    /// Called before the empty result list when the store fails
    fn on_search_failed(&self, _error: &Error) {}
}

/// Handle returned by [`ObserverHub::register`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(pub u64);

/// Registered observers, notified in registration order
pub struct ObserverHub {
    observers: Mutex<Vec<(ObserverId, Arc<dyn SearchObserver>)>>,
    next_id: AtomicU64,
}

impl Default for ObserverHub {
    fn default() -> Self {
        Self::new()
    }
}

impl ObserverHub {
    pub fn new() -> Self {
        ObserverHub {
            observers: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn register(&self, observer: Arc<dyn SearchObserver>) -> ObserverId {
        let id = ObserverId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.observers.lock().push((id, observer));
        id
    }

    /// Returns false if the observer was not registered
    pub fn deregister(&self, id: ObserverId) -> bool {
        let mut observers = self.observers.lock();
        let before = observers.len();
        observers.retain(|(registered, _)| *registered != id);
        observers.len() != before
    }

    pub fn len(&self) -> usize {
        self.observers.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.lock().is_empty()
    }

    /// Deliver entries if `still_current` holds once the lock is taken.
    /// Returns whether anything was delivered.
    pub fn notify_entries_if(
        &self,
        still_current: impl FnOnce() -> bool,
        entries: &[Entry],
        empty_query: bool,
    ) -> bool {
        let observers = self.observers.lock();
        if !still_current() {
            return false;
        }
        for (_, observer) in observers.iter() {
            observer.on_entries(entries, empty_query);
        }
        true
    }

    pub fn notify_sentences_if(
        &self,
        still_current: impl FnOnce() -> bool,
        sentences: &[SourceSentence],
        empty_query: bool,
    ) -> bool {
        let observers = self.observers.lock();
        if !still_current() {
            return false;
        }
        for (_, observer) in observers.iter() {
            observer.on_sentences(sentences, empty_query);
        }
        true
    }

    /// Report a failed search, followed by an empty result list of the
    /// shape the search would have produced
    pub fn notify_failure_if(
        &self,
        still_current: impl FnOnce() -> bool,
        error: &Error,
        kind: SearchKind,
    ) -> bool {
        let observers = self.observers.lock();
        if !still_current() {
            return false;
        }
        for (_, observer) in observers.iter() {
            observer.on_search_failed(error);
            if kind.yields_sentences() {
                observer.on_sentences(&[], false);
            } else {
                observer.on_entries(&[], false);
            }
        }
        true
    }
}
