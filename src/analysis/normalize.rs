/// Rewrite the informal `v` and the vowel `ü` to the `u:` digraph stored by the dictionary
pub fn normalize_pinyin(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len() + 4);
    for c in text.chars() {
        match c {
            'v' | 'ü' => normalized.push_str("u:"),
            'V' | 'Ü' => normalized.push_str("U:"),
            _ => normalized.push(c),
        }
    }
    normalized
}

/// Split a tone-marked pinyin vowel into its plain spelling and tone number
pub fn decompose_tone_mark(c: char) -> Option<(&'static str, u8)> {
    let decomposed = match c {
        'ā' => ("a", 1), 'á' => ("a", 2), 'ǎ' => ("a", 3), 'à' => ("a", 4),
        'ē' => ("e", 1), 'é' => ("e", 2), 'ě' => ("e", 3), 'è' => ("e", 4),
        'ī' => ("i", 1), 'í' => ("i", 2), 'ǐ' => ("i", 3), 'ì' => ("i", 4),
        'ō' => ("o", 1), 'ó' => ("o", 2), 'ǒ' => ("o", 3), 'ò' => ("o", 4),
        'ū' => ("u", 1), 'ú' => ("u", 2), 'ǔ' => ("u", 3), 'ù' => ("u", 4),
        'ǖ' => ("u:", 1), 'ǘ' => ("u:", 2), 'ǚ' => ("u:", 3), 'ǜ' => ("u:", 4),
        _ => return None,
    };
    Some(decomposed)
}
