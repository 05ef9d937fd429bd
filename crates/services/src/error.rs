//! Shared error types for the services crate.

use thiserror::Error;

/// Rejected session operations.
///
/// Every variant leaves the session untouched; callers log and carry on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no character selected yet")]
    NotStarted,
    #[error("a character is already selected for this session")]
    AlreadyStarted,
    #[error("no character at index {index}")]
    UnknownCharacter { index: usize },
    #[error("quiz already finished")]
    Finished,
    #[error("quiz is not finished yet")]
    NotFinished,
    #[error("answer is locked after submission")]
    AnswerLocked,
    #[error("option {index} is out of range (question has {len} options)")]
    OptionOutOfRange { index: usize, len: usize },
    #[error("select an answer before submitting")]
    NoAnswerSelected,
    #[error("answer already submitted")]
    AlreadySubmitted,
}

/// Errors emitted while producing a certificate image.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExportError {
    #[error("invalid certificate: score {score} out of {total}")]
    InvalidSummary { score: u32, total: u32 },
    #[error("certificate rendering is unavailable: {0}")]
    Unavailable(String),
    #[error(transparent)]
    Encode(#[from] image::ImageError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
