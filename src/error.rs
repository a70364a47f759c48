use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiscForgeError {
    #[error("Invalid Answer Count: expected {expected} answers, got {actual}")]
    InvalidAnswerCount { expected: usize, actual: usize },

    #[error("Invalid Answer Element at index {index}: {reason}")]
    InvalidAnswerElement { index: usize, reason: String },

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),
}

impl DiscForgeError {
    /// True for the two input-shape errors a scoring caller can trigger.
    pub fn is_answer_error(&self) -> bool {
        matches!(
            self,
            DiscForgeError::InvalidAnswerCount { .. } | DiscForgeError::InvalidAnswerElement { .. }
        )
    }
}

pub type DfResult<T> = Result<T, DiscForgeError>;
