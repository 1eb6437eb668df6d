use std::fmt;
use serde::{Serialize, Deserialize};
use crate::entry::chinese::pretty_pinyin;
use crate::entry::options::{CharacterOptions, MandarinOptions, PhoneticOptions};

/// A translation of a source sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSentence {
    pub sentence: String,
    pub language: String,
    pub direct: bool,      // Linked directly rather than through another translation
}

/// Translations of one source sentence that come from the same source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceSet {
    pub source: String,
    pub sentences: Vec<TargetSentence>,
}

impl SentenceSet {
    pub fn new(source: String, sentences: Vec<TargetSentence>) -> Self {
        SentenceSet { source, sentences }
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn snippet(&self) -> Option<&TargetSentence> {
        self.sentences.first()
    }
}

impl fmt::Display for SentenceSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Source: {}", self.source)?;
        for sentence in &self.sentences {
            writeln!(f, "  [{}] {}", sentence.language, sentence.sentence)?;
        }
        Ok(())
    }
}

/// An example sentence in the dictionary's source language with its translations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSentence {
    source_language: String,
    simplified: String,
    traditional: String,
    jyutping: String,
    pinyin: String,
    pretty_pinyin: String,
    sentence_sets: Vec<SentenceSet>,
}

impl SourceSentence {
    pub fn new(
        source_language: String,
        simplified: String,
        traditional: String,
        jyutping: &str,
        pinyin: &str,
        sentence_sets: Vec<SentenceSet>,
    ) -> Self {
        let jyutping = jyutping.to_lowercase();
        let pinyin = pinyin.to_lowercase();
        let pretty_pinyin = pretty_pinyin(&pinyin);
        SourceSentence {
            source_language,
            simplified,
            traditional,
            jyutping,
            pinyin,
            pretty_pinyin,
            sentence_sets,
        }
    }

    pub fn source_language(&self) -> &str {
        &self.source_language
    }

    pub fn simplified(&self) -> &str {
        &self.simplified
    }

    pub fn traditional(&self) -> &str {
        &self.traditional
    }

    pub fn jyutping(&self) -> &str {
        &self.jyutping
    }

    pub fn pinyin(&self) -> &str {
        &self.pinyin
    }

    pub fn pretty_pinyin(&self) -> &str {
        &self.pretty_pinyin
    }

    pub fn sentence_sets(&self) -> &[SentenceSet] {
        &self.sentence_sets
    }

    /// Sentences show a single script; there is no secondary form
    pub fn characters(&self, options: CharacterOptions) -> &str {
        match options {
            CharacterOptions::OnlySimplified | CharacterOptions::PreferSimplified => &self.simplified,
            CharacterOptions::OnlyTraditional | CharacterOptions::PreferTraditional => &self.traditional,
        }
    }

    pub fn phonetic(&self, options: PhoneticOptions, mandarin: MandarinOptions) -> &str {
        match options {
            PhoneticOptions::OnlyJyutping | PhoneticOptions::PreferJyutping => &self.jyutping,
            PhoneticOptions::OnlyPinyin | PhoneticOptions::PreferPinyin => match mandarin {
                MandarinOptions::RawPinyin => &self.pinyin,
                MandarinOptions::PrettyPinyin => &self.pretty_pinyin,
            },
        }
    }

    /// First translation of the first sentence set
    pub fn sentence_snippet(&self) -> Option<&str> {
        self.first_translation().map(|t| t.sentence.as_str())
    }

    pub fn sentence_snippet_language(&self) -> Option<&str> {
        self.first_translation().map(|t| t.language.as_str())
    }

    fn first_translation(&self) -> Option<&TargetSentence> {
        self.sentence_sets.first().and_then(SentenceSet::snippet)
    }
}

impl fmt::Display for SourceSentence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Simplified: {}", self.simplified)?;
        writeln!(f, "Traditional: {}", self.traditional)?;
        writeln!(f, "Jyutping: {}", self.jyutping)?;
        writeln!(f, "Pinyin: {}", self.pinyin)?;
        for set in &self.sentence_sets {
            write!(f, "{}", set)?;
        }
        Ok(())
    }
}
