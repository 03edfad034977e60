use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Wrong answer count: expected {expected}, got {actual}")]
    WrongAnswerCount { expected: usize, actual: usize },

    #[error("Invalid answer value: {0}")]
    InvalidAnswerToken(String),

    #[error("Malformed score vector: {0}")]
    MalformedScoreVector(String),

    #[error("Recommendation index is not ready")]
    IndexNotReady,

    #[error("Invalid reference set: {0}")]
    InvalidReferenceSet(String),

    #[error("Failed to persist index snapshot: {0}")]
    PersistenceWriteFailed(String),

    #[error("Failed to load index snapshot: {0}")]
    PersistenceLoadFailed(String),
}

impl Error {
    /// Persistence errors are recovered locally and never fail a request
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::PersistenceWriteFailed(_) | Error::PersistenceLoadFailed(_)
        )
    }
}
