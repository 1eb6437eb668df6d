/// Quote pairs that request an exact match of Chinese characters
const QUOTE_PAIRS: [(char, char); 2] = [('"', '"'), ('“', '”')];

/// Romanised and English input only treat straight quotes as exact
const WESTERN_QUOTE_PAIRS: [(char, char); 1] = [('"', '"')];

/// Marks the end of the term: no trailing wildcard
pub const END_ANCHOR: char = '$';

/// How the user asked for a term to be matched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermModifier<'a> {
    /// `"term"`: the interior only, no wildcards
    Exact(&'a str),
    /// `term$`: no trailing wildcard
    Anchored(&'a str),
    /// Plain input, matched as a prefix
    Open(&'a str),
}

impl<'a> TermModifier<'a> {
    /// Quoting is checked before the anchor. A quote pair with nothing inside
    /// is not an exact match.
    pub fn parse(text: &'a str) -> Self {
        Self::parse_quoted_by(text, &QUOTE_PAIRS)
    }

    /// Like [`TermModifier::parse`], but curly quotes are ordinary characters
    pub fn parse_western(text: &'a str) -> Self {
        Self::parse_quoted_by(text, &WESTERN_QUOTE_PAIRS)
    }

    fn parse_quoted_by(text: &'a str, pairs: &[(char, char)]) -> Self {
        if text.chars().count() >= 3 {
            for &(open, close) in pairs {
                if let Some(inner) = text.strip_prefix(open).and_then(|t| t.strip_suffix(close)) {
                    return TermModifier::Exact(inner);
                }
            }
        }

        match text.strip_suffix(END_ANCHOR) {
            Some(inner) => TermModifier::Anchored(inner),
            None => TermModifier::Open(text),
        }
    }

    pub fn term(&self) -> &'a str {
        match self {
            TermModifier::Exact(t) | TermModifier::Anchored(t) | TermModifier::Open(t) => t,
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, TermModifier::Exact(_))
    }
}

/// Make GLOB metacharacters match literally
pub fn escape_glob(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '*' => escaped.push_str("[*]"),
            '?' => escaped.push_str("[?]"),
            '[' => escaped.push_str("[[]"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escape LIKE metacharacters for use with `ESCAPE '\'`
pub fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Quote a string as a full-text phrase
pub fn fts_phrase(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoting_beats_anchor() {
        assert_eq!(TermModifier::parse("\"ab$\""), TermModifier::Exact("ab$"));
        assert_eq!(TermModifier::parse("“美国”"), TermModifier::Exact("美国"));
        assert_eq!(TermModifier::parse("美国$"), TermModifier::Anchored("美国"));
        assert_eq!(TermModifier::parse("美国"), TermModifier::Open("美国"));
    }

    #[test]
    fn western_parse_ignores_curly_quotes() {
        assert_eq!(TermModifier::parse_western("“wu6”"), TermModifier::Open("“wu6”"));
        assert_eq!(TermModifier::parse_western("\"wu6\""), TermModifier::Exact("wu6"));
    }

    #[test]
    fn bare_quote_pair_is_not_exact() {
        assert_eq!(TermModifier::parse("\"\""), TermModifier::Open("\"\""));
        assert_eq!(TermModifier::parse("\"a\""), TermModifier::Exact("a"));
    }

    #[test]
    fn escaping() {
        assert_eq!(escape_glob("a*b?[c"), "a[*]b[?][[]c");
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
        assert_eq!(fts_phrase("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
