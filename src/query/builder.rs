use unicode_segmentation::UnicodeSegmentation;
use crate::analysis::normalize::normalize_pinyin;
use crate::analysis::segmenter::{Romanization, RomanizationSegmenter};
use crate::analysis::token::{Token, WILDCARD_CHARACTERS};
use crate::core::types::{SearchKind, SearchQuery, UniqueKey};
use crate::query::modifiers::{escape_glob, escape_like, fts_phrase, TermModifier};
use crate::query::sql;
use crate::query::types::{BuiltQuery, EnglishTerms, MatchStrategy, RomanisationTerms};

/// Separates syllables in the stored romanisation columns
const FIELD_SEPARATOR: &str = " ";

/// Turns a search into SQL for the dictionary store
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    jyutping: RomanizationSegmenter,
    pinyin: RomanizationSegmenter,
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryBuilder {
    pub fn new() -> Self {
        QueryBuilder {
            jyutping: RomanizationSegmenter::jyutping(),
            pinyin: RomanizationSegmenter::pinyin(),
        }
    }

    pub fn build(&self, query: &SearchQuery) -> BuiltQuery {
        match query {
            SearchQuery::Simplified(text) => {
                Self::build_characters(SearchKind::Simplified, sql::SIMPLIFIED_GLOB, text)
            }
            SearchQuery::Traditional(text) => {
                Self::build_characters(SearchKind::Traditional, sql::TRADITIONAL_GLOB, text)
            }
            SearchQuery::Jyutping(text) => self.build_romanised(Romanization::Jyutping, text),
            SearchQuery::Pinyin(text) => self.build_romanised(Romanization::Pinyin, text),
            SearchQuery::English(text) => Self::build_english(text),
            SearchQuery::Unique(key) => Self::build_unique(key),
            SearchQuery::Sentences(text) => Self::build_sentences(text),
        }
    }

    /// GLOB pattern for Simplified or Traditional input; the flag is set for quoted input
    pub fn character_glob(text: &str) -> (String, bool) {
        match TermModifier::parse(text) {
            TermModifier::Exact(inner) => (escape_glob(inner), true),
            TermModifier::Anchored(inner) => (inner.to_string(), false),
            TermModifier::Open(term) => (format!("{}*", term), false),
        }
    }

    pub fn romanisation_terms(&self, romanization: Romanization, text: &str) -> RomanisationTerms {
        let (segmenter, column) = match romanization {
            Romanization::Jyutping => (&self.jyutping, "jyutping"),
            Romanization::Pinyin => (&self.pinyin, "pinyin"),
        };

        let mut lowered = text.trim().to_lowercase();
        if romanization == Romanization::Pinyin {
            lowered = normalize_pinyin(&lowered);
        }

        let modifier = TermModifier::parse_western(&lowered);
        if let TermModifier::Exact(inner) = modifier {
            let words: Vec<&str> = inner.split_whitespace().collect();
            let glob_term = words
                .iter()
                .map(|w| escape_glob(w))
                .collect::<Vec<_>>()
                .join(FIELD_SEPARATOR);
            let phrases: Vec<String> = words
                .iter()
                .map(|w| format!("{}:{}", column, fts_phrase(w)))
                .collect();
            return RomanisationTerms {
                match_term: join_match_terms(phrases),
                glob_term,
                exact: true,
            };
        }

        let anchored = matches!(modifier, TermModifier::Anchored(_));
        let tokens = segmenter.segment(modifier.term());

        // A wildcard ahead of letters can stand for the start of a syllable,
        // which the full-text prefix operator cannot express.
        let leading_wildcard = tokens.iter().any(|t| {
            t.is_wildcard && t.text.trim_end_matches(WILDCARD_CHARACTERS).contains(WILDCARD_CHARACTERS)
        });
        let match_term = if leading_wildcard {
            None
        } else {
            let stripped = segmenter.clone().strip_wildcards(true).segment(modifier.term());
            match_expression(column, &stripped)
        };

        RomanisationTerms {
            match_term,
            glob_term: glob_pattern(&tokens, anchored),
            exact: false,
        }
    }

    pub fn english_terms(text: &str) -> EnglishTerms {
        let modifier = TermModifier::parse_western(text.trim());
        let term = modifier.term();
        let like_term = match modifier {
            TermModifier::Exact(inner) => escape_like(inner),
            _ => format!("%{}%", escape_like(term)),
        };
        let match_term = term.unicode_words().next().map(|_| fts_phrase(term));

        EnglishTerms {
            match_term,
            like_term,
            exact: modifier.is_exact(),
        }
    }

    fn build_characters(kind: SearchKind, matching: &str, text: &str) -> BuiltQuery {
        let (glob, exact) = Self::character_glob(text);
        BuiltQuery {
            kind,
            strategy: MatchStrategy::Glob,
            exact,
            sql: sql::entry_search(matching),
            params: vec![glob],
        }
    }

    fn build_romanised(&self, romanization: Romanization, text: &str) -> BuiltQuery {
        let terms = self.romanisation_terms(romanization, text);
        let (kind, hybrid, glob_only) = match romanization {
            Romanization::Jyutping => (SearchKind::Jyutping, sql::JYUTPING_MATCH_GLOB, sql::JYUTPING_GLOB),
            Romanization::Pinyin => (SearchKind::Pinyin, sql::PINYIN_MATCH_GLOB, sql::PINYIN_GLOB),
        };

        match terms.match_term {
            Some(match_term) => BuiltQuery {
                kind,
                strategy: MatchStrategy::FullTextGlob,
                exact: terms.exact,
                sql: sql::entry_search(hybrid),
                params: vec![match_term, terms.glob_term],
            },
            None => BuiltQuery {
                kind,
                strategy: MatchStrategy::Glob,
                exact: terms.exact,
                sql: sql::entry_search(glob_only),
                params: vec![terms.glob_term],
            },
        }
    }

    fn build_english(text: &str) -> BuiltQuery {
        let terms = Self::english_terms(text);
        match terms.match_term {
            Some(match_term) => BuiltQuery {
                kind: SearchKind::English,
                strategy: MatchStrategy::FullTextLike,
                exact: terms.exact,
                sql: sql::entry_search(sql::ENGLISH_MATCH_LIKE),
                params: vec![match_term, terms.like_term],
            },
            None => BuiltQuery {
                kind: SearchKind::English,
                strategy: MatchStrategy::Like,
                exact: terms.exact,
                sql: sql::entry_search(sql::ENGLISH_LIKE),
                params: vec![terms.like_term],
            },
        }
    }

    fn build_unique(key: &UniqueKey) -> BuiltQuery {
        BuiltQuery {
            kind: SearchKind::Unique,
            strategy: MatchStrategy::Equality,
            exact: true,
            sql: sql::entry_search(sql::UNIQUE_EQUALS),
            params: vec![
                key.simplified.clone(),
                key.traditional.clone(),
                key.jyutping.to_lowercase(),
                key.pinyin.to_lowercase(),
            ],
        }
    }

    fn build_sentences(text: &str) -> BuiltQuery {
        BuiltQuery {
            kind: SearchKind::Sentences,
            strategy: MatchStrategy::Like,
            exact: false,
            sql: sql::SENTENCE_SEARCH.to_string(),
            params: vec![format!("%{}%", escape_like(text))],
        }
    }
}

/// Toned syllables must match a whole token, toneless ones any token starting with them
fn match_expression(column: &str, tokens: &[Token]) -> Option<String> {
    let terms = tokens
        .iter()
        .filter(|t| !t.text.is_empty())
        .map(|t| {
            if t.has_tone() {
                format!("{}:{}", column, fts_phrase(&t.text))
            } else {
                format!("{}:{}*", column, fts_phrase(&t.text))
            }
        })
        .collect();
    join_match_terms(terms)
}

fn join_match_terms(terms: Vec<String>) -> Option<String> {
    if terms.is_empty() {
        None
    } else {
        Some(terms.join(" AND "))
    }
}

/// Toneless syllables get a one-character tone slot, the last one an open
/// suffix unless the input was anchored. A syllable already ending in a
/// wildcard is left as typed.
fn glob_pattern(tokens: &[Token], anchored: bool) -> String {
    let Some(last) = tokens.len().checked_sub(1) else {
        return if anchored { String::new() } else { "*".to_string() };
    };

    let mut glob = tokens
        .iter()
        .enumerate()
        .map(|(i, token)| {
            if token.has_tone() || token.text.ends_with(WILDCARD_CHARACTERS) {
                token.text.clone()
            } else if i < last || anchored {
                format!("{}?", token.text)
            } else {
                format!("{}*", token.text)
            }
        })
        .collect::<Vec<_>>()
        .join(FIELD_SEPARATOR);

    if !anchored && !glob.ends_with('*') {
        glob.push('*');
    }
    glob
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toneless_syllables_get_tone_slots() {
        let builder = QueryBuilder::new();
        let terms = builder.romanisation_terms(Romanization::Jyutping, "neihou");
        assert_eq!(terms.glob_term, "nei? hou*");
        assert_eq!(
            terms.match_term.as_deref(),
            Some("jyutping:\"nei\"* AND jyutping:\"hou\"*")
        );
        assert!(!terms.exact);
    }

    #[test]
    fn toned_syllables_match_whole_tokens() {
        let builder = QueryBuilder::new();
        let terms = builder.romanisation_terms(Romanization::Jyutping, "nei5 hou2");
        assert_eq!(terms.glob_term, "nei5 hou2*");
        assert_eq!(
            terms.match_term.as_deref(),
            Some("jyutping:\"nei5\" AND jyutping:\"hou2\"")
        );
    }

    #[test]
    fn anchor_drops_trailing_wildcard() {
        let builder = QueryBuilder::new();
        let terms = builder.romanisation_terms(Romanization::Jyutping, "nei hou$");
        assert_eq!(terms.glob_term, "nei? hou?");
        let terms = builder.romanisation_terms(Romanization::Jyutping, "nei5 hou2$");
        assert_eq!(terms.glob_term, "nei5 hou2");
    }

    #[test]
    fn leading_wildcard_skips_prefilter() {
        let builder = QueryBuilder::new();
        let terms = builder.romanisation_terms(Romanization::Jyutping, "*hou");
        assert_eq!(terms.match_term, None);
        let terms = builder.romanisation_terms(Romanization::Jyutping, "nei* hou");
        assert!(terms.match_term.is_some());
        let terms = builder.romanisation_terms(Romanization::Jyutping, "n?i5 hou2");
        assert_eq!(terms.match_term, None);
    }

    #[test]
    fn wildcard_syllables_keep_their_tone_slot() {
        let builder = QueryBuilder::new();
        let terms = builder.romanisation_terms(Romanization::Jyutping, "*ei hou");
        assert_eq!(terms.glob_term, "*ei? hou*");
        let terms = builder.romanisation_terms(Romanization::Jyutping, "n?i hou");
        assert_eq!(terms.glob_term, "n?i? hou*");
        let terms = builder.romanisation_terms(Romanization::Jyutping, "nei5 h?u2");
        assert_eq!(terms.glob_term, "nei5 h?u2*");
        let terms = builder.romanisation_terms(Romanization::Jyutping, "nei? hou");
        assert_eq!(terms.glob_term, "nei? hou*");
    }

    #[test]
    fn only_punctuation_is_an_open_search() {
        let builder = QueryBuilder::new();
        let terms = builder.romanisation_terms(Romanization::Pinyin, "!!");
        assert_eq!(terms.glob_term, "*");
        assert_eq!(terms.match_term, None);
    }
}
