use crate::models::{Element, Transcript, Utterance};

/// Render a transcript back into normalized human-readable text.
///
/// Spacing is context-sensitive: hard punctuation carries its own trailing
/// space, a comma gets a space after but not before, other soft punctuation
/// sits flush against its neighbors, and pauses are set off by spaces on
/// both sides. Re-tokenizing the output yields the same structure, though
/// whitespace need not match the original input byte for byte.
pub fn render(transcript: &Transcript) -> String {
    let mut output = String::new();

    for element in &transcript.elements {
        match element {
            Element::Time(marker) => {
                output.push_str(&marker.time);
                output.push('\n');
            }
            Element::Line(line) => {
                output.push_str(&line.speaker);
                output.push_str(": ");
                output.push_str(&render_utterances(&line.utterances));
                output.push_str("\n\n");
            }
        }
    }

    output
}

/// Apply the spacing rules to a bare utterance sequence.
///
/// Also used to show a pending sentence to the speaker-identification
/// oracle.
pub fn render_utterances(utterances: &[Utterance]) -> String {
    let mut output = String::new();
    let mut last: Option<&Utterance> = None;

    for utterance in utterances {
        match utterance {
            Utterance::Word(w) => {
                // Words get a separating space after another word or a
                // comma; hard punctuation and pauses already emitted their
                // trailing space, and other soft punctuation binds tight.
                if matches!(last, Some(Utterance::Word(_)) | Some(Utterance::Soft(','))) {
                    output.push(' ');
                }
                output.push_str(w);
            }
            Utterance::Hard(c) => {
                output.push(*c);
                output.push(' ');
            }
            Utterance::Soft(c) => {
                output.push(*c);
            }
            Utterance::Pause(d) => {
                output.push_str(&format!(" <{}> ", d));
            }
        }
        last = Some(utterance);
    }

    output
}
