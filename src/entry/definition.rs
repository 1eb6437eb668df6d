use std::fmt;
use crate::entry::sentence::SourceSentence;

/// One sense of an entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub text: String,
    pub label: String,                 // Part of speech or usage label; may be empty
    pub examples: Vec<SourceSentence>, // Only filled in by sentence-linked dictionaries
}

impl Definition {
    pub fn new(text: String, label: String, examples: Vec<SourceSentence>) -> Self {
        Definition { text, label, examples }
    }
}

/// The definitions one dictionary source gives for an entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionsSet {
    pub source: String,
    pub definitions: Vec<Definition>,
}

impl DefinitionsSet {
    pub fn new(source: String, definitions: Vec<Definition>) -> Self {
        DefinitionsSet { source, definitions }
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// All definitions on one line, for result lists
    pub fn snippet(&self) -> String {
        self.definitions
            .iter()
            .map(|d| d.text.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for DefinitionsSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Source: {}", self.source)?;
        for (i, definition) in self.definitions.iter().enumerate() {
            if definition.label.is_empty() {
                writeln!(f, "  {}. {}", i + 1, definition.text)?;
            } else {
                writeln!(f, "  {}. ({}) {}", i + 1, definition.label, definition.text)?;
            }
        }
        Ok(())
    }
}
