use serde::{Serialize, Deserialize};

/// Which romanisation's tones drive character colouring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColourPhonetic {
    None,
    Jyutping,
    Pinyin,
}

/// Per-tone colours, indexed by tone number (index 0 is the neutral/unknown tone)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToneColours {
    pub jyutping: Vec<String>,
    pub pinyin: Vec<String>,
}

impl Default for ToneColours {
    fn default() -> Self {
        ToneColours {
            jyutping: vec![
                "#808080".to_string(),
                "#fb4337".to_string(),
                "#ff8d0f".to_string(),
                "#1d8e00".to_string(),
                "#0095ff".to_string(),
                "#5d3eb7".to_string(),
                "#b347b0".to_string(),
            ],
            pinyin: vec![
                "#808080".to_string(),
                "#fb4337".to_string(),
                "#ff8d0f".to_string(),
                "#1d8e00".to_string(),
                "#0095ff".to_string(),
                "#808080".to_string(),
            ],
        }
    }
}

impl ToneColours {
    pub fn palette(&self, phonetic: ColourPhonetic) -> &[String] {
        match phonetic {
            ColourPhonetic::None => &[],
            ColourPhonetic::Jyutping => &self.jyutping,
            ColourPhonetic::Pinyin => &self.pinyin,
        }
    }
}
