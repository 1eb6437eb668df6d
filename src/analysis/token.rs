use serde::{Serialize, Deserialize};

pub const WILDCARD_CHARACTERS: [char; 2] = ['*', '?'];

/// One syllable (or wildcard run) of romanised input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,      // Normalised token text, tone digit included
    pub position: u32,     // Index in the token sequence
    pub is_wildcard: bool, // Contains `*` or `?`
    pub tone: Option<u8>,  // Trailing tone digit, if any
}

impl Token {
    pub fn new(text: String, position: u32, max_tone: u8) -> Self {
        let is_wildcard = text.contains(WILDCARD_CHARACTERS);
        let tone = text
            .trim_end_matches(WILDCARD_CHARACTERS)
            .chars()
            .last()
            .and_then(|c| c.to_digit(10))
            .map(|d| d as u8)
            .filter(|d| *d <= max_tone);
        Token {
            text,
            position,
            is_wildcard,
            tone,
        }
    }

    pub fn has_tone(&self) -> bool {
        self.tone.is_some()
    }

    /// Text with wildcard characters removed
    pub fn literal(&self) -> String {
        self.text.chars().filter(|c| !WILDCARD_CHARACTERS.contains(c)).collect()
    }

    /// Whether the token consists of nothing but wildcards
    pub fn is_pure_wildcard(&self) -> bool {
        !self.text.is_empty() && self.text.chars().all(|c| WILDCARD_CHARACTERS.contains(&c))
    }
}
