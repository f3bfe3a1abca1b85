use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),

    #[error("Invalid digit: {0} (expected 0-9)")]
    InvalidDigit(u8),

    #[error("Session is already complete")]
    SessionComplete,

    #[error("Distractor pool exhausted: needed {needed}, only {available} available")]
    DistractorPoolExhausted { needed: usize, available: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
