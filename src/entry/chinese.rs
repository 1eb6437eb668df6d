//! Text helpers shared by entries and sentences: pretty pinyin, difference
//! strings, tone numbers and tone colouring.

use unicode_segmentation::UnicodeSegmentation;

/// Stands in for a character that is identical in both scripts
pub const SAME_CHARACTER: &str = "－";

/// Convert numbered pinyin ("ni3 hao3") to its diacritic form ("nǐ hǎo")
pub fn pretty_pinyin(pinyin: &str) -> String {
    pinyin
        .split(' ')
        .map(pretty_syllable)
        .collect::<Vec<_>>()
        .join(" ")
}

fn pretty_syllable(syllable: &str) -> String {
    let (body, tone) = match syllable.char_indices().last() {
        Some((i, c)) => match c.to_digit(10) {
            Some(tone) => (&syllable[..i], tone),
            None => (syllable, 0),
        },
        None => return String::new(),
    };

    let mut chars: Vec<char> = body.replace("u:", "ü").replace('v', "ü").chars().collect();
    if !(1..=4).contains(&tone) {
        return chars.into_iter().collect();
    }

    // a and e always take the mark, then the o of "ou", then the last vowel
    let target = chars
        .iter()
        .position(|&c| c == 'a' || c == 'e')
        .or_else(|| chars.windows(2).position(|w| w[0] == 'o' && w[1] == 'u'))
        .or_else(|| chars.iter().rposition(|c| matches!(c, 'i' | 'o' | 'u' | 'ü')));

    if let Some(i) = target {
        chars[i] = tone_mark(chars[i], tone);
    }
    chars.into_iter().collect()
}

fn tone_mark(vowel: char, tone: u32) -> char {
    let marks = match vowel {
        'a' => ['ā', 'á', 'ǎ', 'à'],
        'e' => ['ē', 'é', 'ě', 'è'],
        'i' => ['ī', 'í', 'ǐ', 'ì'],
        'o' => ['ō', 'ó', 'ǒ', 'ò'],
        'u' => ['ū', 'ú', 'ǔ', 'ù'],
        'ü' => ['ǖ', 'ǘ', 'ǚ', 'ǜ'],
        _ => return vowel,
    };
    marks[(tone - 1) as usize]
}

/// Positional diff of two same-length strings: characters of `comparison`
/// that equal the one at the same position in `original` become
/// [`SAME_CHARACTER`]. Strings of different length are returned unchanged.
pub fn compare_strings(original: &str, comparison: &str) -> String {
    let original: Vec<&str> = original.graphemes(true).collect();
    let comparison_graphemes: Vec<&str> = comparison.graphemes(true).collect();

    if original.len() != comparison_graphemes.len() {
        return comparison.to_string();
    }

    original
        .iter()
        .zip(&comparison_graphemes)
        .map(|(a, b)| if a == b { SAME_CHARACTER } else { *b })
        .collect()
}

/// Tone digits of a romanisation string, in syllable order
pub fn tone_numbers(phonetic: &str, max_tone: u8) -> Vec<u8> {
    phonetic
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| d as u8)
        .filter(|d| *d <= max_tone)
        .collect()
}

/// Wrap each character of `text` in a font tag coloured by its tone.
/// Placeholders and characters without a tone are left bare.
pub fn apply_colours(text: &str, tones: &[u8], palette: &[String]) -> String {
    let mut coloured = String::with_capacity(text.len() * 4);
    for (i, grapheme) in text.graphemes(true).enumerate() {
        let colour = tones.get(i).and_then(|tone| palette.get(*tone as usize));
        match colour {
            Some(colour) if grapheme != SAME_CHARACTER => {
                coloured.push_str(&format!("<font color=\"{}\">{}</font>", colour, grapheme));
            }
            _ => coloured.push_str(grapheme),
        }
    }
    coloured
}
