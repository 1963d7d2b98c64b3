pub mod assemble;
pub mod error;
pub mod io;
pub mod models;
pub mod render;
pub mod stats;
pub mod tokenizer;

pub use assemble::{assemble_labeled, assemble_unlabeled, SpeakerOracle};
pub use error::AssembleError;
pub use io::{parse_participants, read_transcript_file, ConsoleOracle, MachineTranscript};
pub use models::{Element, Line, TimeMarker, Token, Transcript, Utterance};
pub use render::{render, render_utterances};
pub use stats::{count_words, speaker_word_totals};
pub use tokenizer::{tokenize, tokenize_unlabeled};
