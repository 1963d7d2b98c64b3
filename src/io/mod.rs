pub mod console;
pub mod input;
pub mod output;

pub use console::ConsoleOracle;
pub use input::{parse_participants, read_transcript_file};
pub use output::{write_text, MachineTranscript, TranscriptMetadata};
