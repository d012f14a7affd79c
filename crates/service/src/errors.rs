use thiserror::Error;

/// Failures reported by a storage backend.
///
/// The first three variants are the conditions services translate into
/// domain errors; `Other` is passed through opaquely.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("already exist")]
    AlreadyExists,
    #[error("invalid info")]
    InvalidInfo,
    #[error("not found")]
    NotFound,
    #[error("storage error: {0}")]
    Other(String),
}

impl StorageError {
    pub fn other(msg: impl Into<String>) -> Self { Self::Other(msg.into()) }

    pub fn is_already_exists(&self) -> bool { matches!(self, Self::AlreadyExists) }
    pub fn is_invalid_info(&self) -> bool { matches!(self, Self::InvalidInfo) }
    pub fn is_not_found(&self) -> bool { matches!(self, Self::NotFound) }
}
