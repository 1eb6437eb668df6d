use serde::{Deserialize, Serialize};
use crate::core::types::SearchKind;

/// How the store narrows down candidate rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStrategy {
    Glob,          // GLOB over one column
    FullTextGlob,  // Full-text pre-filter, then GLOB
    FullTextLike,  // Full-text phrase, then LIKE
    Like,          // LIKE only
    Equality,      // Every field compared with `=`
}

/// A query ready for the store: SQL text plus positional parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltQuery {
    pub kind: SearchKind,
    pub strategy: MatchStrategy,
    pub exact: bool,
    pub sql: String,
    pub params: Vec<String>,
}

impl BuiltQuery {
    pub fn yields_sentences(&self) -> bool {
        self.kind.yields_sentences()
    }
}

/// Match and filter terms for a Jyutping or Pinyin search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomanisationTerms {
    pub match_term: Option<String>, // Full-text pre-filter, absent when nothing usable was typed
    pub glob_term: String,
    pub exact: bool,
}

/// Match and filter terms for an English search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnglishTerms {
    pub match_term: Option<String>, // Quoted phrase, absent when the input has no words
    pub like_term: String,
    pub exact: bool,
}
