use std::fmt;
use std::hash::{Hash, Hasher};
use crate::entry::chinese::{apply_colours, compare_strings, pretty_pinyin, tone_numbers};
use crate::entry::colour::{ColourPhonetic, ToneColours};
use crate::entry::definition::DefinitionsSet;
use crate::entry::options::{CharacterOptions, MandarinOptions, PhoneticOptions};

/// A dictionary entry. Identity is the (simplified, traditional, jyutping,
/// pinyin) tuple; definitions do not take part in equality.
#[derive(Debug, Clone)]
pub struct Entry {
    simplified: String,
    simplified_difference: String,
    traditional: String,
    traditional_difference: String,
    jyutping: String,
    pinyin: String,
    pretty_pinyin: String,
    definitions: Vec<DefinitionsSet>,
}

impl Entry {
    pub fn new(
        simplified: String,
        traditional: String,
        jyutping: &str,
        pinyin: &str,
        definitions: Vec<DefinitionsSet>,
    ) -> Self {
        let jyutping = jyutping.to_lowercase();
        let pinyin = pinyin.to_lowercase();

        // Derived once here; every render of a result list needs them
        let traditional_difference = compare_strings(&simplified, &traditional);
        let simplified_difference = compare_strings(&traditional, &simplified);
        let pretty_pinyin = pretty_pinyin(&pinyin);

        Entry {
            simplified,
            simplified_difference,
            traditional,
            traditional_difference,
            jyutping,
            pinyin,
            pretty_pinyin,
            definitions,
        }
    }

    pub fn simplified(&self) -> &str {
        &self.simplified
    }

    pub fn traditional(&self) -> &str {
        &self.traditional
    }

    /// Simplified form with characters shared with the traditional form replaced by a placeholder
    pub fn simplified_difference(&self) -> &str {
        &self.simplified_difference
    }

    /// Traditional form with characters shared with the simplified form replaced by a placeholder
    pub fn traditional_difference(&self) -> &str {
        &self.traditional_difference
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

    pub fn definitions_sets(&self) -> &[DefinitionsSet] {
        &self.definitions
    }

    pub fn characters(&self, options: CharacterOptions) -> String {
        match options {
            CharacterOptions::OnlySimplified => self.simplified.clone(),
            CharacterOptions::OnlyTraditional => self.traditional.clone(),
            CharacterOptions::PreferSimplified => {
                format!("{} [{}]", self.simplified, self.traditional_difference)
            }
            CharacterOptions::PreferTraditional => {
                format!("{} [{}]", self.traditional, self.simplified_difference)
            }
        }
    }

    pub fn characters_no_secondary(&self, options: CharacterOptions) -> &str {
        match options {
            CharacterOptions::OnlySimplified | CharacterOptions::PreferSimplified => &self.simplified,
            CharacterOptions::OnlyTraditional | CharacterOptions::PreferTraditional => &self.traditional,
        }
    }

    pub fn phonetic(&self, options: PhoneticOptions, mandarin: MandarinOptions) -> String {
        let pinyin = match mandarin {
            MandarinOptions::RawPinyin => &self.pinyin,
            MandarinOptions::PrettyPinyin => &self.pretty_pinyin,
        };
        match options {
            PhoneticOptions::OnlyJyutping => self.jyutping.clone(),
            PhoneticOptions::OnlyPinyin => pinyin.clone(),
            PhoneticOptions::PreferJyutping => format!("{} ({})", self.jyutping, pinyin),
            PhoneticOptions::PreferPinyin => format!("{} ({})", pinyin, self.jyutping),
        }
    }

    /// Jyutping tone digits; entries without Jyutping fall back to Pinyin tones
    pub fn jyutping_tones(&self) -> Vec<u8> {
        if self.jyutping.is_empty() {
            return self.pinyin_tones();
        }
        tone_numbers(&self.jyutping, 6)
    }

    pub fn pinyin_tones(&self) -> Vec<u8> {
        tone_numbers(&self.pinyin, 5)
    }

    /// Characters as HTML, each one coloured by the tone of its syllable
    pub fn coloured_characters(
        &self,
        options: CharacterOptions,
        colours: &ToneColours,
        phonetic: ColourPhonetic,
    ) -> String {
        let tones = match phonetic {
            ColourPhonetic::None => return self.characters(options),
            ColourPhonetic::Jyutping => self.jyutping_tones(),
            ColourPhonetic::Pinyin => self.pinyin_tones(),
        };
        let palette = colours.palette(phonetic);
        let colour = |text: &str| apply_colours(text, &tones, palette);

        match options {
            CharacterOptions::OnlySimplified => colour(&self.simplified),
            CharacterOptions::OnlyTraditional => colour(&self.traditional),
            CharacterOptions::PreferSimplified => {
                format!("{} [{}]", colour(&self.simplified), colour(&self.traditional_difference))
            }
            CharacterOptions::PreferTraditional => {
                format!("{} [{}]", colour(&self.traditional), colour(&self.simplified_difference))
            }
        }
    }

    /// Definitions of the first non-empty source, on one line
    pub fn definition_snippet(&self) -> String {
        self.definitions
            .iter()
            .find(|set| !set.is_empty())
            .map(DefinitionsSet::snippet)
            .unwrap_or_default()
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.simplified == other.simplified
            && self.traditional == other.traditional
            && self.jyutping == other.jyutping
            && self.pinyin == other.pinyin
    }
}

impl Eq for Entry {}

impl Hash for Entry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.simplified.hash(state);
        self.traditional.hash(state);
        self.jyutping.hash(state);
        self.pinyin.hash(state);
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Simplified: {}", self.simplified)?;
        writeln!(f, "Traditional: {}", self.traditional)?;
        writeln!(f, "Jyutping: {}", self.jyutping)?;
        writeln!(f, "Pinyin: {}", self.pinyin)?;
        for set in &self.definitions {
            write!(f, "{}", set)?;
        }
        Ok(())
    }
}
