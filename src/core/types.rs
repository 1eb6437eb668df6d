use std::fmt;
use serde::{Serialize, Deserialize};

/// Opaque per-request token; only ever compared for equality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueryId(pub u64);

impl QueryId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for QueryId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchKind {
    Simplified,
    Traditional,
    Jyutping,
    Pinyin,
    English,
    Unique,
    Sentences,
}

impl SearchKind {
    pub fn name(&self) -> &'static str {
        match self {
            SearchKind::Simplified => "simplified",
            SearchKind::Traditional => "traditional",
            SearchKind::Jyutping => "jyutping",
            SearchKind::Pinyin => "pinyin",
            SearchKind::English => "english",
            SearchKind::Unique => "unique",
            SearchKind::Sentences => "sentences",
        }
    }

    /// Whether results come back as source sentences rather than entries
    pub fn yields_sentences(&self) -> bool {
        matches!(self, SearchKind::Sentences)
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The four fields that identify a single dictionary entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UniqueKey {
    pub simplified: String,
    pub traditional: String,
    pub jyutping: String,
    pub pinyin: String,
}

impl UniqueKey {
    pub fn is_empty(&self) -> bool {
        self.simplified.is_empty()
            && self.traditional.is_empty()
            && self.jyutping.is_empty()
            && self.pinyin.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    Simplified(String),
    Traditional(String),
    Jyutping(String),
    Pinyin(String),
    English(String),
    Unique(UniqueKey),
    Sentences(String),
}

impl SearchQuery {
    pub fn kind(&self) -> SearchKind {
        match self {
            SearchQuery::Simplified(_) => SearchKind::Simplified,
            SearchQuery::Traditional(_) => SearchKind::Traditional,
            SearchQuery::Jyutping(_) => SearchKind::Jyutping,
            SearchQuery::Pinyin(_) => SearchKind::Pinyin,
            SearchQuery::English(_) => SearchKind::English,
            SearchQuery::Unique(_) => SearchKind::Unique,
            SearchQuery::Sentences(_) => SearchKind::Sentences,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            SearchQuery::Simplified(text)
            | SearchQuery::Traditional(text)
            | SearchQuery::Jyutping(text)
            | SearchQuery::Pinyin(text)
            | SearchQuery::English(text)
            | SearchQuery::Sentences(text) => text.is_empty(),
            SearchQuery::Unique(key) => key.is_empty(),
        }
    }
}

/// A search as handed to a worker; never mutated after dispatch
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub id: QueryId,
    pub query: SearchQuery,
}

impl SearchRequest {
    pub fn new(id: QueryId, query: SearchQuery) -> Self {
        SearchRequest { id, query }
    }

    pub fn kind(&self) -> SearchKind {
        self.query.kind()
    }
}
