use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum LedgerError {
    /// The intake adapter failed to extract anything from the image.
    /// Recovered by notifying the caller; the ledger is left untouched.
    #[error("intake extraction failed: {0}")]
    Intake(String),

    #[error("no wager or pair with id {0}")]
    NotFound(Uuid),

    #[error("pair {0} is already resolved")]
    AlreadyResolved(Uuid),

    #[error("winning index must be 0 or 1, got {0}")]
    InvalidWinningIndex(usize),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
