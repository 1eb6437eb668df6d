use serde::Deserialize;
use tracing::warn;
use crate::core::error::Result;
use crate::entry::{Definition, DefinitionsSet, Entry, SentenceSet, SourceSentence, TargetSentence};
use crate::store::{EntryRow, SentenceRow};

// Shapes of the JSON aggregated by the store. Every field is optional and
// arrays may hold nulls; missing pieces become empty values.

#[derive(Debug, Deserialize)]
struct RawDefinitionGroup {
    #[serde(default)]
    source: Option<String>,
    #[serde(default)]
    definitions: Option<Vec<Option<RawDefinition>>>,
}

#[derive(Debug, Deserialize)]
struct RawDefinition {
    #[serde(default)]
    definition: Option<String>,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    sentences: Option<Vec<Option<RawSentence>>>,
}

#[derive(Debug, Deserialize)]
struct RawSentence {
    #[serde(default)]
    traditional: Option<String>,
    #[serde(default)]
    simplified: Option<String>,
    #[serde(default)]
    pinyin: Option<String>,
    #[serde(default)]
    jyutping: Option<String>,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    translations: Option<Vec<Option<RawTranslation>>>,
}

#[derive(Debug, Deserialize)]
struct RawTranslation {
    #[serde(default)]
    sentence: Option<String>,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    direct: Option<RawFlag>,
    #[serde(default)]
    source: Option<String>,
}

/// SQLite hands booleans back as integers
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawFlag {
    Bool(bool),
    Int(i64),
}

impl RawFlag {
    fn is_set(&self) -> bool {
        match self {
            RawFlag::Bool(b) => *b,
            RawFlag::Int(i) => *i != 0,
        }
    }
}

/// Converts raw store rows into entries and sentences
#[derive(Debug, Clone, Default)]
pub struct ResultMapper;

impl ResultMapper {
    pub fn new() -> Self {
        ResultMapper
    }

    /// Map every row, skipping rows whose JSON cannot be parsed
    pub fn map_entries(&self, rows: Vec<EntryRow>) -> Vec<Entry> {
        rows.into_iter()
            .filter_map(|row| {
                let key = format!("{} / {}", row.simplified, row.traditional);
                match self.map_entry(row) {
                    Ok(entry) => Some(entry),
                    Err(e) => {
                        warn!(entry = %key, error = %e, "Skipping malformed entry row");
                        None
                    }
                }
            })
            .collect()
    }

    pub fn map_entry(&self, row: EntryRow) -> Result<Entry> {
        let groups: Vec<Option<RawDefinitionGroup>> = parse_array(row.definitions.as_deref())?;
        let definitions = groups
            .into_iter()
            .flatten()
            .map(definitions_set)
            .collect();

        Ok(Entry::new(
            row.simplified,
            row.traditional,
            &row.jyutping,
            &row.pinyin,
            definitions,
        ))
    }

    pub fn map_sentences(&self, rows: Vec<SentenceRow>) -> Vec<SourceSentence> {
        rows.into_iter()
            .filter_map(|row| {
                let key = row.traditional.clone();
                match self.map_sentence(row) {
                    Ok(sentence) => Some(sentence),
                    Err(e) => {
                        warn!(sentence = %key, error = %e, "Skipping malformed sentence row");
                        None
                    }
                }
            })
            .collect()
    }

    pub fn map_sentence(&self, row: SentenceRow) -> Result<SourceSentence> {
        let translations: Vec<Option<RawTranslation>> = parse_array(row.translations.as_deref())?;
        Ok(SourceSentence::new(
            row.language,
            row.simplified,
            row.traditional,
            &row.jyutping,
            &row.pinyin,
            sentence_sets(translations),
        ))
    }
}

/// A missing, null or blank column is an empty array
fn parse_array<T: for<'de> Deserialize<'de>>(json: Option<&str>) -> Result<Vec<Option<T>>> {
    match json.map(str::trim) {
        None | Some("") | Some("null") => Ok(Vec::new()),
        Some(text) => {
            let parsed: Option<Vec<Option<T>>> = serde_json::from_str(text)?;
            Ok(parsed.unwrap_or_default())
        }
    }
}

fn definitions_set(raw: RawDefinitionGroup) -> DefinitionsSet {
    let definitions = raw
        .definitions
        .unwrap_or_default()
        .into_iter()
        .flatten()
        .map(|d| {
            let examples = d
                .sentences
                .unwrap_or_default()
                .into_iter()
                .flatten()
                .map(source_sentence)
                .collect();
            Definition::new(
                d.definition.unwrap_or_default(),
                d.label.unwrap_or_default(),
                examples,
            )
        })
        .collect();

    DefinitionsSet::new(raw.source.unwrap_or_default(), definitions)
}

fn source_sentence(raw: RawSentence) -> SourceSentence {
    SourceSentence::new(
        raw.language.unwrap_or_default(),
        raw.simplified.unwrap_or_default(),
        raw.traditional.unwrap_or_default(),
        raw.jyutping.as_deref().unwrap_or_default(),
        raw.pinyin.as_deref().unwrap_or_default(),
        sentence_sets(raw.translations.unwrap_or_default()),
    )
}

/// Group translations by source, keeping the order sources first appear in
fn sentence_sets(translations: Vec<Option<RawTranslation>>) -> Vec<SentenceSet> {
    let mut sets: Vec<SentenceSet> = Vec::new();

    for raw in translations.into_iter().flatten() {
        let source = raw.source.unwrap_or_default();
        let target = TargetSentence {
            sentence: raw.sentence.unwrap_or_default(),
            language: raw.language.unwrap_or_default(),
            direct: raw.direct.as_ref().is_none_or(RawFlag::is_set),
        };

        match sets.iter_mut().find(|set| set.source == source) {
            Some(set) => set.sentences.push(target),
            None => sets.push(SentenceSet::new(source, vec![target])),
        }
    }

    sets
}
