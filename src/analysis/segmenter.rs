use serde::{Serialize, Deserialize};
use crate::analysis::normalize::{decompose_tone_mark, normalize_pinyin};
use crate::analysis::syllables::{is_jyutping_syllable, is_pinyin_syllable, MAX_SYLLABLE_CHARS};
use crate::analysis::token::{Token, WILDCARD_CHARACTERS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Romanization {
    Jyutping,
    Pinyin,
}

impl Romanization {
    pub fn max_tone(&self) -> u8 {
        match self {
            Romanization::Jyutping => 6,
            Romanization::Pinyin => 5,
        }
    }

    fn is_syllable(&self, s: &str) -> bool {
        match self {
            Romanization::Jyutping => is_jyutping_syllable(s),
            Romanization::Pinyin => is_pinyin_syllable(s),
        }
    }

    fn is_syllable_char(&self, c: char) -> bool {
        c.is_ascii_lowercase() || (*self == Romanization::Pinyin && c == ':')
    }
}

/// Splits raw Jyutping/Pinyin input into syllable tokens
#[derive(Debug, Clone)]
pub struct RomanizationSegmenter {
    pub romanization: Romanization,
    pub strip_special_characters: bool,
    pub strip_wildcard_characters: bool,
}

#[derive(Default)]
struct ChunkState {
    pieces: Vec<String>,
    run: Vec<char>,
    run_tones: Vec<Option<u8>>,
    prefix: String,  // Characters waiting to be glued onto the next syllable
    attached: bool,  // Whether the next loose character joins the last piece
    open: bool,      // The last piece ends in a wildcard that the next letters continue
}

impl ChunkState {
    fn attach(&mut self, c: char) {
        let wildcard = WILDCARD_CHARACTERS.contains(&c);
        match self.pieces.last_mut() {
            Some(last) if self.attached => {
                last.push(c);
                self.open = wildcard;
            }
            _ => self.prefix.push(c),
        }
    }

    fn last_ends_with_digit(&self) -> bool {
        self.pieces
            .last()
            .and_then(|p| p.chars().last())
            .is_some_and(|c| c.is_ascii_digit())
    }
}

impl RomanizationSegmenter {
    pub fn new(romanization: Romanization) -> Self {
        RomanizationSegmenter {
            romanization,
            strip_special_characters: true,
            strip_wildcard_characters: false,
        }
    }

    pub fn jyutping() -> Self {
        Self::new(Romanization::Jyutping)
    }

    pub fn pinyin() -> Self {
        Self::new(Romanization::Pinyin)
    }

    pub fn strip_special(mut self, strip: bool) -> Self {
        self.strip_special_characters = strip;
        self
    }

    pub fn strip_wildcards(mut self, strip: bool) -> Self {
        self.strip_wildcard_characters = strip;
        self
    }

    /// Segment `text` into syllables. Whitespace and apostrophes always
    /// separate syllables; tone digits stay with the syllable before them.
    pub fn segment(&self, text: &str) -> Vec<Token> {
        let mut normalized = text.to_lowercase();
        if self.romanization == Romanization::Pinyin {
            normalized = normalize_pinyin(&normalized);
        }

        let mut pieces = Vec::new();
        for chunk in normalized.split(|c: char| c.is_whitespace() || c == '\'' || c == '’') {
            if !chunk.is_empty() {
                self.segment_chunk(chunk, &mut pieces);
            }
        }

        let max_tone = self.romanization.max_tone();
        pieces
            .into_iter()
            .filter(|p| !p.is_empty())
            .enumerate()
            .map(|(position, text)| Token::new(text, position as u32, max_tone))
            .collect()
    }

    fn segment_chunk(&self, chunk: &str, out: &mut Vec<String>) {
        let max_tone = u32::from(self.romanization.max_tone());
        let mut state = ChunkState::default();

        for c in chunk.chars() {
            if self.romanization.is_syllable_char(c) {
                state.run.push(c);
                state.run_tones.push(None);
                continue;
            }
            if self.romanization == Romanization::Pinyin {
                if let Some((plain, tone)) = decompose_tone_mark(c) {
                    for p in plain.chars() {
                        state.run.push(p);
                        state.run_tones.push(Some(tone));
                    }
                    continue;
                }
            }

            self.flush_run(&mut state);

            let is_tone_digit = c.to_digit(10).is_some_and(|d| d <= max_tone);
            if is_tone_digit && state.attached && !state.pieces.is_empty() && !state.last_ends_with_digit() {
                if let Some(last) = state.pieces.last_mut() {
                    last.push(c);
                }
                state.open = false;
                continue;
            }

            let strip = if WILDCARD_CHARACTERS.contains(&c) {
                self.strip_wildcard_characters
            } else {
                self.strip_special_characters
            };
            if strip {
                // A stripped character still separates what surrounds it
                state.attached = false;
                state.open = false;
                continue;
            }
            state.attach(c);
        }

        self.flush_run(&mut state);
        if !state.prefix.is_empty() {
            state.pieces.push(std::mem::take(&mut state.prefix));
        }
        out.extend(state.pieces);
    }

    /// Greedy longest-match split of the pending letter run
    fn flush_run(&self, state: &mut ChunkState) {
        if state.run.is_empty() {
            return;
        }

        let n = state.run.len();
        let mut start = 0;

        // Letters after a wildcard finish the syllable the wildcard is in,
        // up to the first consonant that can begin a known syllable
        if state.open {
            let len = (1..n)
                .find(|&len| !is_vowel(state.run[len]) && self.starts_syllable(&state.run, len))
                .unwrap_or(n);
            if let Some(last) = state.pieces.last_mut() {
                last.extend(&state.run[..len]);
                let tone = state.run_tones[..len].iter().flatten().next();
                if let Some(digit) = tone.and_then(|t| char::from_digit(u32::from(*t), 10)) {
                    last.push(digit);
                }
                start = len;
            }
            state.open = false;
        }

        while start < n {
            let longest = (1..=MAX_SYLLABLE_CHARS.min(n - start)).rev().find(|len| {
                let candidate: String = state.run[start..start + len].iter().collect();
                self.romanization.is_syllable(&candidate)
            });
            // Unrecognised letters are kept together as a partial syllable
            let len = longest.unwrap_or(n - start);

            let mut piece = std::mem::take(&mut state.prefix);
            piece.extend(&state.run[start..start + len]);
            let tone = state.run_tones[start..start + len].iter().flatten().next();
            if let Some(digit) = tone.and_then(|t| char::from_digit(u32::from(*t), 10)) {
                piece.push(digit);
            }
            state.pieces.push(piece);
            start += len;
        }

        state.run.clear();
        state.run_tones.clear();
        state.attached = true;
    }

    fn starts_syllable(&self, run: &[char], at: usize) -> bool {
        (1..=MAX_SYLLABLE_CHARS.min(run.len() - at)).any(|len| {
            let candidate: String = run[at..at + len].iter().collect();
            self.romanization.is_syllable(&candidate)
        })
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}
