use std::collections::BTreeSet;
use std::io::{BufRead, Write};

use crate::assemble::SpeakerOracle;
use crate::models::Utterance;
use crate::render::render_utterances;

/// Interactive speaker-identification oracle backed by the terminal.
///
/// Shows the pending sentence and the participant set, then reads one line
/// from stdin. Validation (and re-prompting on bad answers) is the
/// assembler's job; this type only collects answers.
pub struct ConsoleOracle;

impl SpeakerOracle for ConsoleOracle {
    fn identify(&mut self, sentence: &[Utterance], participants: &BTreeSet<String>) -> String {
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();

        let names: Vec<&str> = participants.iter().map(|s| s.as_str()).collect();
        println!();
        println!("  {}", render_utterances(sentence));
        print!("Who said this? [{}]: ", names.join(", "));
        // A flush failure means the terminal is gone; an empty answer will
        // be rejected by the assembler anyway.
        let _ = stdout.flush();

        let mut answer = String::new();
        if stdin.lock().read_line(&mut answer).is_err() {
            return String::new();
        }
        answer.trim().to_string()
    }
}
