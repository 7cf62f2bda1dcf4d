use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LarderError {
    #[error("recipe not found: {0}")]
    NotFound(String),

    #[error("recipe already exists: {0}")]
    DuplicateId(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, LarderError>;
