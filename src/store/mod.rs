//! Backend access for dictionary searches.
//!
//! The coordinator talks to a [`DictionaryStore`]; the shipped
//! implementation is [`SqliteStore`]. Rows come back raw, with aggregated
//! definitions and translations still serialised as JSON.

pub mod schema;
pub mod sqlite;

use std::future::Future;
use crate::core::error::Result;
use crate::query::BuiltQuery;

pub use sqlite::SqliteStore;

/// One matching entry before mapping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryRow {
    pub simplified: String,
    pub traditional: String,
    pub jyutping: String,
    pub pinyin: String,
    pub definitions: Option<String>, // JSON array of definition groups
}

/// One matching source sentence before mapping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentenceRow {
    pub simplified: String,
    pub traditional: String,
    pub jyutping: String,
    pub pinyin: String,
    pub language: String,
    pub translations: Option<String>, // JSON array of translations
}

/// Executes built queries. Each call may run on its own worker, so
/// implementations hand out a separate connection per call.
pub trait DictionaryStore: Send + Sync + 'static {
    fn fetch_entries(&self, query: &BuiltQuery) -> impl Future<Output = Result<Vec<EntryRow>>> + Send;

    fn fetch_sentences(&self, query: &BuiltQuery) -> impl Future<Output = Result<Vec<SentenceRow>>> + Send;
}
