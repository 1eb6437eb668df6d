use std::sync::Arc;
use parking_lot::{Mutex, RwLock};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use crate::core::error::Error;
use crate::core::types::{SearchQuery, SearchRequest, UniqueKey};
use crate::query::QueryBuilder;
use crate::search::mapper::ResultMapper;
use crate::search::observer::{ObserverHub, ObserverId, SearchObserver};
use crate::search::query_id::QueryIdCell;
use crate::store::DictionaryStore;

/// State shared between the coordinator and its workers
struct SearchContext {
    current: QueryIdCell,
    hub: ObserverHub,
    builder: QueryBuilder,
    mapper: ResultMapper,
}

impl SearchContext {
    fn is_current(&self, request: &SearchRequest) -> bool {
        self.current.is_current(request.id)
    }

    async fn run<S: DictionaryStore>(&self, store: Arc<S>, request: SearchRequest) {
        let built = self.builder.build(&request.query);
        debug!(id = %request.id, kind = %request.kind(), strategy = ?built.strategy, "Executing search");

        let delivered = if built.yields_sentences() {
            let rows = match store.fetch_sentences(&built).await {
                Ok(rows) => rows,
                Err(e) => return self.fail(&request, e),
            };
            if !self.is_current(&request) {
                return self.discard(&request);
            }
            let sentences = self.mapper.map_sentences(rows);
            if !self.is_current(&request) {
                return self.discard(&request);
            }
            self.hub
                .notify_sentences_if(|| self.is_current(&request), &sentences, false)
        } else {
            let rows = match store.fetch_entries(&built).await {
                Ok(rows) => rows,
                Err(e) => return self.fail(&request, e),
            };
            if !self.is_current(&request) {
                return self.discard(&request);
            }
            let entries = self.mapper.map_entries(rows);
            if !self.is_current(&request) {
                return self.discard(&request);
            }
            self.hub
                .notify_entries_if(|| self.is_current(&request), &entries, false)
        };

        if !delivered {
            self.discard(&request);
        }
    }

    fn fail(&self, request: &SearchRequest, error: Error) {
        warn!(id = %request.id, kind = %request.kind(), error = %error, "Search failed");
        self.hub
            .notify_failure_if(|| self.is_current(request), &error, request.kind());
    }

    fn discard(&self, request: &SearchRequest) {
        debug!(id = %request.id, kind = %request.kind(), "Discarding superseded results");
    }
}

/// Runs searches off the caller's thread and delivers only the results of
/// the most recently issued one.
///
/// Every call assigns a new query id, which supersedes any search still in
/// flight. Workers check their id after the store returns, after mapping,
/// and again under the observer lock before delivering.
pub struct QueryCoordinator<S: DictionaryStore> {
    runtime: Handle,
    store: RwLock<Option<Arc<S>>>,
    context: Arc<SearchContext>,
    workers: Mutex<Vec<JoinHandle<()>>>,
}

impl<S: DictionaryStore> QueryCoordinator<S> {
    /// Coordinator with no store bound; searches are ignored until one is
    pub fn new(runtime: Handle) -> Self {
        QueryCoordinator {
            runtime,
            store: RwLock::new(None),
            context: Arc::new(SearchContext {
                current: QueryIdCell::new(),
                hub: ObserverHub::new(),
                builder: QueryBuilder::new(),
                mapper: ResultMapper::new(),
            }),
            workers: Mutex::new(Vec::new()),
        }
    }

    pub fn with_store(runtime: Handle, store: S) -> Self {
        let coordinator = Self::new(runtime);
        coordinator.bind_store(Arc::new(store));
        coordinator
    }

    pub fn bind_store(&self, store: Arc<S>) {
        *self.store.write() = Some(store);
        info!("Dictionary store bound");
    }

    /// Searches already running keep their handle to the old store
    pub fn unbind_store(&self) -> Option<Arc<S>> {
        self.store.write().take()
    }

    pub fn register_observer(&self, observer: Arc<dyn SearchObserver>) -> ObserverId {
        self.context.hub.register(observer)
    }

    pub fn deregister_observer(&self, id: ObserverId) -> bool {
        self.context.hub.deregister(id)
    }

    pub fn observers(&self) -> &ObserverHub {
        &self.context.hub
    }

    pub fn search_simplified(&self, text: &str) {
        self.search(SearchQuery::Simplified(text.to_string()));
    }

    pub fn search_traditional(&self, text: &str) {
        self.search(SearchQuery::Traditional(text.to_string()));
    }

    pub fn search_jyutping(&self, text: &str) {
        self.search(SearchQuery::Jyutping(text.to_string()));
    }

    pub fn search_pinyin(&self, text: &str) {
        self.search(SearchQuery::Pinyin(text.to_string()));
    }

    pub fn search_english(&self, text: &str) {
        self.search(SearchQuery::English(text.to_string()));
    }

    /// Look up the one entry with exactly these four fields
    pub fn search_by_unique(&self, simplified: &str, traditional: &str, jyutping: &str, pinyin: &str) {
        self.search(SearchQuery::Unique(UniqueKey {
            simplified: simplified.to_string(),
            traditional: traditional.to_string(),
            jyutping: jyutping.to_string(),
            pinyin: pinyin.to_string(),
        }));
    }

    pub fn search_sentences_by_traditional(&self, text: &str) {
        self.search(SearchQuery::Sentences(text.to_string()));
    }

    /// Issue a search. Returns as soon as the worker is spawned.
    pub fn search(&self, query: SearchQuery) {
        let request = SearchRequest::new(self.context.current.issue(), query);
        let kind = request.kind();

        if request.query.is_empty() {
            debug!(id = %request.id, kind = %kind, "Empty query");
            let context = &self.context;
            if kind.yields_sentences() {
                context.hub.notify_sentences_if(|| context.is_current(&request), &[], true);
            } else {
                context.hub.notify_entries_if(|| context.is_current(&request), &[], true);
            }
            return;
        }

        let Some(store) = self.store.read().clone() else {
            warn!(id = %request.id, kind = %kind, "No database specified");
            return;
        };

        debug!(id = %request.id, kind = %kind, "Dispatching search");
        let context = Arc::clone(&self.context);
        let handle = self.runtime.spawn(async move {
            context.run(store, request).await;
        });

        let mut workers = self.workers.lock();
        workers.retain(|worker| !worker.is_finished());
        workers.push(handle);
    }

    /// Wait for every dispatched worker, including ones dispatched while waiting
    pub async fn wait_idle(&self) {
        loop {
            let pending = std::mem::take(&mut *self.workers.lock());
            if pending.is_empty() {
                return;
            }
            for worker in pending {
                if let Err(e) = worker.await {
                    if e.is_panic() {
                        warn!(error = %e, "Search worker panicked");
                    }
                }
            }
        }
    }
}

/// Dropping the coordinator aborts searches still in flight; their results
/// are never delivered. Call [`QueryCoordinator::wait_idle`] first to let
/// them finish.
impl<S: DictionaryStore> Drop for QueryCoordinator<S> {
    fn drop(&mut self) {
        for worker in self.workers.get_mut().drain(..) {
            worker.abort();
        }
    }
}
