use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::models::{Element, Transcript};
use crate::stats::speaker_word_totals;

/// Machine-readable view of an assembled transcript.
#[derive(Debug, Clone, Serialize)]
pub struct MachineTranscript<'a> {
    /// Lines and time markers in conversation order.
    pub elements: &'a [Element],
    /// Summary metadata about the assembly.
    pub metadata: TranscriptMetadata,
}

#[derive(Debug, Clone, Serialize)]
pub struct TranscriptMetadata {
    pub total_elements: usize,
    pub total_lines: usize,
    pub total_words: usize,
    /// Per-speaker spoken-word totals, in first-appearance order.
    pub speakers: Vec<SpeakerTotal>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SpeakerTotal {
    pub name: String,
    pub words: usize,
}

impl<'a> MachineTranscript<'a> {
    pub fn from_transcript(transcript: &'a Transcript) -> Self {
        let speakers: Vec<SpeakerTotal> = speaker_word_totals(transcript)
            .into_iter()
            .map(|(name, words)| SpeakerTotal { name, words })
            .collect();

        let metadata = TranscriptMetadata {
            total_elements: transcript.elements.len(),
            total_lines: transcript.lines().count(),
            total_words: speakers.iter().map(|s| s.words).sum(),
            speakers,
        };

        Self {
            elements: &transcript.elements,
            metadata,
        }
    }

    /// Write to a JSON file.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        serde_json::to_writer_pretty(file, self).context("Failed to write JSON")?;
        Ok(())
    }
}

/// Write rendered transcript text to a file.
pub fn write_text(path: &Path, rendered: &str) -> Result<()> {
    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create file: {:?}", path))?;
    write!(file, "{}", rendered)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble::assemble_labeled;

    #[test]
    fn test_metadata_counts() {
        let transcript = assemble_labeled("A: one two.\n9:05\nB: three.").unwrap();
        let machine = MachineTranscript::from_transcript(&transcript);

        assert_eq!(machine.metadata.total_elements, 3);
        assert_eq!(machine.metadata.total_lines, 2);
        assert_eq!(machine.metadata.total_words, 3);
        assert_eq!(machine.metadata.speakers.len(), 2);
        assert_eq!(machine.metadata.speakers[0].name, "A");
        assert_eq!(machine.metadata.speakers[0].words, 2);
    }

    #[test]
    fn test_write_json_round_trips_elements() {
        let transcript = assemble_labeled("A: Hello <1.5> there.").unwrap();
        let machine = MachineTranscript::from_transcript(&transcript);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        machine.write_json(&path).unwrap();

        let json = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["metadata"]["total_lines"], 1);
        let elements: Vec<Element> =
            serde_json::from_value(value["elements"].clone()).unwrap();
        assert_eq!(elements, transcript.elements);
    }

    #[test]
    fn test_write_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_text(&path, "A: hi\n\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "A: hi\n\n");
    }
}
