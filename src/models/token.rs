use serde::{Deserialize, Serialize};

/// A lexical token produced by scanning raw transcript text.
///
/// Tokens are immutable value objects emitted in left-to-right scan order;
/// their position in the stream is the only relationship between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Token {
    /// A speaker label found at the start of a physical line (colon stripped).
    Speaker(String),
    /// A clock time in `hh:mm` form, kept as written.
    Time(String),
    /// A run of word characters, possibly with one internal connector
    /// (`it's`, `well-known`).
    Word(String),
    /// A timed silence, `<2.5>` in the source. Duration in seconds.
    Pause(f64),
    /// Sentence-terminating punctuation: `.` `?` `!`.
    Hard(char),
    /// Non-terminating punctuation: `,` `-` `'` `’` `"`.
    Soft(char),
}

/// The subset of tokens that can appear inside a spoken line.
///
/// `Speaker` and `Time` are structural (they delimit lines and stand alone
/// in the transcript body); everything else is utterance-level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Utterance {
    Word(String),
    Pause(f64),
    Hard(char),
    Soft(char),
}

impl TryFrom<Token> for Utterance {
    type Error = Token;

    /// Succeeds for the four utterance kinds; returns the original token
    /// back for `Speaker` and `Time`.
    fn try_from(token: Token) -> Result<Self, Token> {
        match token {
            Token::Word(w) => Ok(Utterance::Word(w)),
            Token::Pause(d) => Ok(Utterance::Pause(d)),
            Token::Hard(c) => Ok(Utterance::Hard(c)),
            Token::Soft(c) => Ok(Utterance::Soft(c)),
            other => Err(other),
        }
    }
}

impl Utterance {
    /// Whether this utterance ends a sentence.
    pub fn is_sentence_end(&self) -> bool {
        matches!(self, Utterance::Hard(_))
    }
}
