use thiserror::Error;

use crate::errors::StorageError;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("item exist")]
    Exists,
    #[error("not found")]
    NotFound,
    #[error("{context}: {source}")]
    Storage {
        context: &'static str,
        #[source]
        source: StorageError,
    },
}

impl ProductError {
    pub fn code(&self) -> u16 {
        match self {
            ProductError::Exists => 2002,
            ProductError::NotFound => 2003,
            ProductError::Storage { .. } => 2200,
        }
    }

    pub fn is_exists(&self) -> bool { matches!(self, Self::Exists) }
    pub fn is_not_found(&self) -> bool { matches!(self, Self::NotFound) }
}
