//! Error types for questionkv
//!
//! Provides a unified error type for the store, the adapters and the CLI.

use thiserror::Error;

/// Result type alias using QuestionError
pub type Result<T> = std::result::Result<T, QuestionError>;

/// Unified error type for questionkv operations
#[derive(Debug, Error)]
pub enum QuestionError {
    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    #[error("question {0} not found")]
    NotFound(u64),

    #[error("corrupt record: {0}")]
    CorruptRecord(String),

    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[from] redb::Error),

    #[error("id sequence exhausted")]
    SequenceExhausted,

    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    #[error("invalid input: {0}")]
    InvalidInput(String),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Network Errors
    // -------------------------------------------------------------------------
    #[error("rpc error: {}", .0.message())]
    Rpc(#[from] tonic::Status),

    #[error("transport error: {0}")]
    Transport(#[from] tonic::transport::Error),

    #[error("worker task failed: {0}")]
    Task(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl QuestionError {
    /// True for a lookup of an id that has no record
    pub fn is_not_found(&self) -> bool {
        matches!(self, QuestionError::NotFound(_))
    }
}

// redb reports each phase of a transaction with its own error type; they all
// collapse into StorageUnavailable.
macro_rules! storage_error_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for QuestionError {
                fn from(e: $ty) -> Self {
                    QuestionError::StorageUnavailable(redb::Error::from(e))
                }
            }
        )*
    };
}

storage_error_from!(
    redb::DatabaseError,
    redb::TransactionError,
    redb::TableError,
    redb::StorageError,
    redb::CommitError,
);

impl From<tokio::task::JoinError> for QuestionError {
    fn from(e: tokio::task::JoinError) -> Self {
        QuestionError::Task(e.to_string())
    }
}
