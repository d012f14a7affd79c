use thiserror::Error;

use crate::errors::StorageError;

/// Business errors for user workflows
#[derive(Debug, Error)]
pub enum UserError {
    #[error("user exist")]
    UserExists,
    #[error("user invalid")]
    UserInvalid,
    #[error("hash password: {0}")]
    Hash(String),
    #[error("sign string: {0}")]
    Signing(String),
    #[error("parse token: {0}")]
    InvalidToken(String),
    #[error("{context}: {source}")]
    Storage {
        context: &'static str,
        #[source]
        source: StorageError,
    },
}

impl UserError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            UserError::UserExists => 1002,
            UserError::UserInvalid => 1004,
            UserError::Hash(_) => 1101,
            UserError::Signing(_) => 1102,
            UserError::InvalidToken(_) => 1103,
            UserError::Storage { .. } => 1200,
        }
    }

    pub fn is_user_exists(&self) -> bool { matches!(self, Self::UserExists) }
    pub fn is_user_invalid(&self) -> bool { matches!(self, Self::UserInvalid) }
}
