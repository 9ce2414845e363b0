use thiserror::Error;

#[derive(Error, Debug)]
pub enum JukeboxError {
    /// The one error a session recovers from: input that is not an integer.
    #[error("Malformed selection: {0:?}")]
    MalformedSelection(String),

    #[error("Song id 0 is reserved for the exit option")]
    ReservedId,

    #[error("Song id must be positive, got {0}")]
    InvalidId(i64),

    #[error("Duplicate song id in catalog: {0}")]
    DuplicateId(i64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl JukeboxError {
    pub fn is_malformed_selection(&self) -> bool {
        matches!(self, JukeboxError::MalformedSelection(_))
    }
}

pub type Result<T> = std::result::Result<T, JukeboxError>;
