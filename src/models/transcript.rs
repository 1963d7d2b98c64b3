use serde::{Deserialize, Serialize};

use super::Utterance;

/// One contiguous turn by a single speaker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Who is speaking. Non-empty once the line is finalized.
    pub speaker: String,
    /// What was said, in insertion order.
    pub utterances: Vec<Utterance>,
}

impl Line {
    pub fn new(speaker: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            utterances: Vec::new(),
        }
    }

    /// Number of spoken words in this line (punctuation and pauses excluded).
    pub fn word_count(&self) -> usize {
        self.utterances
            .iter()
            .filter(|u| matches!(u, Utterance::Word(_)))
            .count()
    }
}

/// A standalone clock-time marker, not attached to any line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeMarker {
    /// Time in `hh:mm` form, as written in the source.
    pub time: String,
}

/// One entry in the transcript body. Order is conversation order and is
/// preserved end-to-end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Element {
    Line(Line),
    Time(TimeMarker),
}

/// A fully assembled transcript: an ordered sequence of lines and time
/// markers, owned exclusively.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub elements: Vec<Element>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Iterate over the spoken lines, skipping time markers.
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.elements.iter().filter_map(|e| match e {
            Element::Line(line) => Some(line),
            Element::Time(_) => None,
        })
    }

    /// Distinct speakers in first-appearance order.
    pub fn speakers(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for line in self.lines() {
            if !seen.contains(&line.speaker.as_str()) {
                seen.push(line.speaker.as_str());
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(speaker: &str, words: &[&str]) -> Element {
        Element::Line(Line {
            speaker: speaker.to_string(),
            utterances: words
                .iter()
                .map(|w| Utterance::Word(w.to_string()))
                .collect(),
        })
    }

    #[test]
    fn test_lines_skip_time_markers() {
        let mut transcript = Transcript::new();
        transcript.push(line("A", &["hello"]));
        transcript.push(Element::Time(TimeMarker {
            time: "12:30".to_string(),
        }));
        transcript.push(line("B", &["hi"]));

        assert_eq!(transcript.elements.len(), 3);
        assert_eq!(transcript.lines().count(), 2);
    }

    #[test]
    fn test_speakers_in_first_appearance_order() {
        let mut transcript = Transcript::new();
        transcript.push(line("B", &["hi"]));
        transcript.push(line("A", &["hello"]));
        transcript.push(line("B", &["again"]));

        assert_eq!(transcript.speakers(), vec!["B", "A"]);
    }

    #[test]
    fn test_word_count_ignores_punctuation() {
        let mut l = Line::new("A");
        l.utterances.push(Utterance::Word("hi".to_string()));
        l.utterances.push(Utterance::Hard('!'));
        l.utterances.push(Utterance::Pause(1.0));
        l.utterances.push(Utterance::Word("there".to_string()));

        assert_eq!(l.word_count(), 2);
    }
}
