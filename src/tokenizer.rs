use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::models::Token;

/// The full scanner pattern. Alternation order is the classification
/// priority and must not be reordered: Speaker before Time (both use a
/// colon), Pause before Word (the numeral must not be read as a word),
/// Word before the single-character punctuation rules.
///
/// Speaker only matches at the start of a physical line; the colon and the
/// pause delimiters are consumed as part of the match but never emitted.
static LABELED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?m)^(?P<speaker>[[:alpha:]]+):|(?P<time>\d{1,2}:\d{1,2})|<(?P<pause>\d+\.?\d*)>|(?P<word>\w+(?:[-'’:+]\w+)?)|(?P<hard>[.?!])|(?P<soft>[,'’"-])"#,
    )
    .expect("labeled scanner pattern is valid")
});

/// Same pattern with the speaker rule removed, for raw speech-to-text input
/// where a line-initial `word:` must not be read as a label.
static UNLABELED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?P<time>\d{1,2}:\d{1,2})|<(?P<pause>\d+\.?\d*)>|(?P<word>\w+(?:[-'’:+]\w+)?)|(?P<hard>[.?!])|(?P<soft>[,'’"-])"#,
    )
    .expect("unlabeled scanner pattern is valid")
});

/// Scan raw transcript text into tokens, left to right.
///
/// Lazy and deterministic: a fresh call re-scans from the start and yields
/// the same sequence. Characters matching no rule (whitespace, stray digits,
/// unpaired brackets) contribute no token.
pub fn tokenize(input: &str) -> impl Iterator<Item = Token> + '_ {
    LABELED.captures_iter(input).filter_map(|caps| classify(&caps))
}

/// Scan with the speaker rule disabled. Used by unlabeled assembly.
pub fn tokenize_unlabeled(input: &str) -> impl Iterator<Item = Token> + '_ {
    UNLABELED
        .captures_iter(input)
        .filter_map(|caps| classify(&caps))
}

fn classify(caps: &Captures<'_>) -> Option<Token> {
    if let Some(m) = caps.name("speaker") {
        return Some(Token::Speaker(m.as_str().to_string()));
    }
    if let Some(m) = caps.name("time") {
        return Some(Token::Time(m.as_str().to_string()));
    }
    if let Some(m) = caps.name("pause") {
        // The pattern only admits digits and one dot, so this parse
        // cannot fail; a non-parse is treated as a non-match regardless.
        return m.as_str().parse::<f64>().ok().map(Token::Pause);
    }
    if let Some(m) = caps.name("word") {
        return Some(Token::Word(m.as_str().to_string()));
    }
    if let Some(m) = caps.name("hard") {
        return m.as_str().chars().next().map(Token::Hard);
    }
    if let Some(m) = caps.name("soft") {
        return m.as_str().chars().next().map(Token::Soft);
    }
    None
}
