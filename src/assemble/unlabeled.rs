use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::error::AssembleError;
use crate::models::{Element, Line, Token, Transcript, Utterance};
use crate::tokenizer::tokenize_unlabeled;

/// External speaker-identification source for unlabeled input.
///
/// Consulted once per sentence with the accumulated utterances and the
/// participant set. May block indefinitely (a human at a console is a valid
/// implementation). The assembler validates the answer and re-queries on
/// anything outside the participant set, so implementations do not need to
/// validate their own output.
pub trait SpeakerOracle {
    fn identify(&mut self, sentence: &[Utterance], participants: &BTreeSet<String>) -> String;
}

impl<F> SpeakerOracle for F
where
    F: FnMut(&[Utterance], &BTreeSet<String>) -> String,
{
    fn identify(&mut self, sentence: &[Utterance], participants: &BTreeSet<String>) -> String {
        self(sentence, participants)
    }
}

/// Assemble a transcript from text with no speaker labels.
///
/// Sentences are delimited by hard punctuation; the oracle attributes each
/// sentence to a participant, and consecutive sentences from the same
/// participant merge into one line. Fails with `EmptyTranscript` when the
/// input contains no sentence boundary at all.
pub fn assemble_unlabeled(
    input: &str,
    participants: &BTreeSet<String>,
    oracle: &mut dyn SpeakerOracle,
) -> Result<Transcript, AssembleError> {
    let mut transcript = Transcript::new();
    let mut pending: Vec<Utterance> = Vec::new();
    let mut previous_speaker: Option<String> = None;
    let mut sentence_count = 0usize;
    let mut current_line = Line::new("");

    for token in tokenize_unlabeled(input) {
        match token {
            Token::Word(w) => pending.push(Utterance::Word(w)),
            Token::Pause(d) => pending.push(Utterance::Pause(d)),
            Token::Soft(c) => pending.push(Utterance::Soft(c)),
            Token::Hard(c) => {
                // The sentence-ending mark belongs to the sentence it ends.
                pending.push(Utterance::Hard(c));
                let speaker = consult(oracle, &pending, participants);

                if sentence_count == 0 {
                    current_line.speaker = speaker.clone();
                    current_line.utterances.append(&mut pending);
                } else if previous_speaker.as_deref() == Some(speaker.as_str()) {
                    // Same speaker kept talking: merge into the open line.
                    current_line.utterances.append(&mut pending);
                } else {
                    debug!(speaker = %current_line.speaker, "closing line at speaker change");
                    transcript.push(Element::Line(std::mem::replace(
                        &mut current_line,
                        Line::new(speaker.clone()),
                    )));
                    current_line.utterances.append(&mut pending);
                }

                previous_speaker = Some(speaker);
                sentence_count += 1;
            }
            Token::Time(t) => {
                // Clock times have no home in unlabeled assembly; skip them
                // rather than splitting the open line.
                debug!(time = %t, "skipping time token in unlabeled input");
            }
            Token::Speaker(_) => {
                debug!("speaker rule is disabled for unlabeled input");
            }
        }
    }

    if !current_line.utterances.is_empty() {
        transcript.push(Element::Line(current_line));
    }

    if transcript.is_empty() {
        return Err(AssembleError::EmptyTranscript);
    }
    Ok(transcript)
}

/// Ask the oracle for a speaker, re-prompting until the answer is a member
/// of the participant set. An invalid answer never escapes this loop.
fn consult(
    oracle: &mut dyn SpeakerOracle,
    sentence: &[Utterance],
    participants: &BTreeSet<String>,
) -> String {
    loop {
        let answer = oracle.identify(sentence, participants);
        if participants.contains(&answer) {
            return answer;
        }
        warn!(answer = %answer, "oracle returned an unknown participant, re-prompting");
    }
}
