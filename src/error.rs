use thiserror::Error;

/// Errors surfaced by transcript assembly.
///
/// Invalid oracle answers are not represented here: the unlabeled assembler
/// re-prompts locally until it gets a valid participant, so they never reach
/// the caller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssembleError {
    /// Assembly produced zero elements: no speaker label was found (labeled
    /// mode) or no sentence boundary was found (unlabeled mode).
    #[error("transcript contains no elements")]
    EmptyTranscript,
}
