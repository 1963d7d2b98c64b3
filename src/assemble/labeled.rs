use tracing::debug;

use crate::error::AssembleError;
use crate::models::{Element, Line, TimeMarker, Token, Transcript, Utterance};
use crate::tokenizer::tokenize;

/// Assemble a transcript from text that carries explicit speaker labels.
///
/// Utterances accumulate against the current speaker; each new speaker label
/// flushes the accumulated line, and one final flush at end of input
/// guarantees the last speaker's turn is never dropped. Time markers pass
/// straight through as standalone elements.
pub fn assemble_labeled(input: &str) -> Result<Transcript, AssembleError> {
    let mut transcript = Transcript::new();
    let mut current_speaker: Option<String> = None;
    let mut pending: Vec<Utterance> = Vec::new();

    for token in tokenize(input) {
        match token {
            Token::Speaker(name) => {
                if let Some(speaker) = current_speaker.replace(name) {
                    flush(&mut transcript, speaker, &mut pending);
                }
            }
            Token::Time(time) => {
                transcript.push(Element::Time(TimeMarker { time }));
            }
            Token::Word(w) => pending.push(Utterance::Word(w)),
            Token::Pause(d) => pending.push(Utterance::Pause(d)),
            Token::Hard(c) => pending.push(Utterance::Hard(c)),
            Token::Soft(c) => pending.push(Utterance::Soft(c)),
        }
    }

    // Final flush, even when pending is empty: an empty trailing turn is
    // still a turn.
    if let Some(speaker) = current_speaker {
        flush(&mut transcript, speaker, &mut pending);
    }

    if transcript.is_empty() {
        return Err(AssembleError::EmptyTranscript);
    }
    Ok(transcript)
}

fn flush(transcript: &mut Transcript, speaker: String, pending: &mut Vec<Utterance>) {
    debug!(speaker = %speaker, utterances = pending.len(), "flushing line");
    transcript.push(Element::Line(Line {
        speaker,
        utterances: std::mem::take(pending),
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_speakers_two_lines() {
        let transcript = assemble_labeled("A: Hi. B: Bye.").unwrap();
        let lines: Vec<_> = transcript.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].speaker, "A");
        assert_eq!(lines[1].speaker, "B");
        assert_eq!(
            lines[1].utterances,
            vec![Utterance::Word("Bye".to_string()), Utterance::Hard('.')]
        );
    }

    #[test]
    fn test_last_line_is_never_dropped() {
        let transcript = assemble_labeled("A: Hi.\nB: Bye.").unwrap();
        assert_eq!(transcript.lines().count(), 2);
        assert_eq!(transcript.lines().last().unwrap().speaker, "B");
    }

    #[test]
    fn test_trailing_speaker_with_no_utterances() {
        let transcript = assemble_labeled("A: Hi.\nB:").unwrap();
        let lines: Vec<_> = transcript.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].speaker, "B");
        assert!(lines[1].utterances.is_empty());
    }

    #[test]
    fn test_time_markers_are_standalone_elements() {
        let transcript = assemble_labeled("A: morning at 9:05 already.").unwrap();
        // The time marker lands in the element sequence between the
        // utterances it interrupts; the line keeps everything else.
        assert_eq!(transcript.elements.len(), 2);
        assert!(matches!(&transcript.elements[0], Element::Time(t) if t.time == "9:05"));
        assert!(matches!(&transcript.elements[1], Element::Line(l) if l.speaker == "A"));
    }

    #[test]
    fn test_pauses_and_punctuation_kept_in_order() {
        let transcript = assemble_labeled("F: What? <2.5> What did you say??").unwrap();
        let line = transcript.lines().next().unwrap();
        assert_eq!(line.utterances[0], Utterance::Word("What".to_string()));
        assert_eq!(line.utterances[1], Utterance::Hard('?'));
        assert_eq!(line.utterances[2], Utterance::Pause(2.5));
    }

    #[test]
    fn test_empty_input_fails() {
        assert_eq!(assemble_labeled(""), Err(AssembleError::EmptyTranscript));
    }

    #[test]
    fn test_no_speaker_fails() {
        assert_eq!(
            assemble_labeled("just words, no labels."),
            Err(AssembleError::EmptyTranscript)
        );
    }
}
