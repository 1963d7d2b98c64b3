pub mod labeled;
pub mod unlabeled;

pub use labeled::assemble_labeled;
pub use unlabeled::{assemble_unlabeled, SpeakerOracle};
