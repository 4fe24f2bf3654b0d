//! Request-scoped error kinds shared by the stores and the HTTP layer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BingoError {
    /// Malformed input: empty or out-of-range numbers, bad timestamp, etc.
    #[error("invalid input: {0}")]
    Validation(String),
    /// A card with the same external id already exists.
    #[error("card id '{0}' is already registered")]
    DuplicateKey(String),
    #[error("drawing has not been started")]
    NotDrawing,
    /// All 75 numbers have been drawn. The session has been closed.
    #[error("all numbers have already been drawn")]
    PoolExhausted,
    #[error("{0} not found")]
    NotFound(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl BingoError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

pub type BingoResult<T> = Result<T, BingoError>;
