pub mod core;
pub mod analysis;
pub mod entry;
pub mod query;
pub mod store;
pub mod search;

pub use crate::core::config::Config;
pub use crate::core::error::{Error, ErrorKind, Result};
pub use crate::core::types::{QueryId, SearchKind, SearchQuery, SearchRequest, UniqueKey};
pub use crate::entry::{Definition, DefinitionsSet, Entry, SentenceSet, SourceSentence, TargetSentence};
pub use crate::search::{ObserverHub, ObserverId, QueryCoordinator, ResultMapper, SearchObserver};
pub use crate::store::{DictionaryStore, SqliteStore};

/*
┌────────────────────────────────── RELATIONSHIPS ────────────────────────────────────────────┐
│                                                                                              │
│  caller ──search_*()──> QueryCoordinator ──issues──> QueryId (QueryIdCell)                  │
│                              │                                                              │
│                              ├──spawns──> worker (tokio task)                               │
│                              │              │                                               │
│                              │              ├──uses──> QueryBuilder ──segments_with──>      │
│                              │              │              RomanizationSegmenter ──> Token  │
│                              │              │                                               │
│                              │              ├──runs──> BuiltQuery ──on──> DictionaryStore   │
│                              │              │                              (SqliteStore)    │
│                              │              │                                               │
│                              │              ├──maps_with──> ResultMapper ──builds──>        │
│                              │              │                  Entry / SourceSentence       │
│                              │              │                                               │
│                              │              └──checks QueryId, then notifies──> ObserverHub │
│                              │                                                   │          │
│                              └──owns──> ObserverHub ──calls──> SearchObserver ───┘          │
│                                                                                              │
│  Entry ──contains──> DefinitionsSet ──contains──> Definition ──examples──> SourceSentence   │
│                                                                              │              │
│                                                  SentenceSet <──contains─────┘              │
│                                                                                              │
└──────────────────────────────────────────────────────────────────────────────────────────────┘
*/
