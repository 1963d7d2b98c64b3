use std::collections::HashMap;

use crate::models::{Transcript, Utterance};

/// Count how often each word is spoken by one participant.
///
/// Speaker matching is exact and case-sensitive; words are lower-cased
/// before counting. A speaker that never appears yields an empty map.
pub fn count_words(transcript: &Transcript, speaker: &str) -> HashMap<String, usize> {
    let mut frequencies = HashMap::new();

    for line in transcript.lines().filter(|l| l.speaker == speaker) {
        for utterance in &line.utterances {
            if let Utterance::Word(word) = utterance {
                *frequencies.entry(word.to_lowercase()).or_insert(0) += 1;
            }
        }
    }

    frequencies
}

/// Total spoken-word count per speaker, in first-appearance order.
pub fn speaker_word_totals(transcript: &Transcript) -> Vec<(String, usize)> {
    let mut totals: Vec<(String, usize)> = Vec::new();

    for line in transcript.lines() {
        match totals.iter_mut().find(|(name, _)| name == &line.speaker) {
            Some((_, count)) => *count += line.word_count(),
            None => totals.push((line.speaker.clone(), line.word_count())),
        }
    }

    totals
}
