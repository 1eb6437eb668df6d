use serde::{Serialize, Deserialize};

/// How to show the Chinese characters of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharacterOptions {
    OnlySimplified,
    OnlyTraditional,
    PreferSimplified,
    PreferTraditional,
}

/// How to show the phonetic guide of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhoneticOptions {
    OnlyJyutping,
    OnlyPinyin,
    PreferJyutping,
    PreferPinyin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MandarinOptions {
    RawPinyin,
    PrettyPinyin,
}
