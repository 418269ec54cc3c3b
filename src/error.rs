use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Duplicate column id: {0}")]
    DuplicateColumnId(String),

    #[error(
        "Board store not provided. Install one with store::context::provide before reading board state."
    )]
    StoreNotProvided,

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
