//! Storage contracts consumed by the services.
//!
//! Services only see these traits; `memory` provides the volatile
//! implementation used by the server.

use async_trait::async_trait;

use crate::errors::StorageError;
use crate::product::domain::Product;
use crate::user::domain::{Credentials, User};

pub mod memory;

pub use memory::{MemoryProductStorage, MemoryUserStorage};

/// User records keyed by email.
#[async_trait]
pub trait UserStorage: Send + Sync {
    /// Insert a new user; `AlreadyExists` if the email is taken.
    async fn create(&self, user: User) -> Result<(), StorageError>;
    /// `InvalidInfo` unless a user with this email exists and the password matches.
    async fn verify(&self, credentials: &Credentials) -> Result<(), StorageError>;
}

/// Product records keyed by SKU.
#[async_trait]
pub trait ProductStorage: Send + Sync {
    async fn create(&self, product: Product) -> Result<(), StorageError>;
    /// Replace every field of an existing product; `NotFound` if the SKU is absent.
    async fn update(&self, product: Product) -> Result<(), StorageError>;
    async fn delete(&self, sku: &str) -> Result<(), StorageError>;
    async fn get(&self, sku: &str) -> Result<Product, StorageError>;
    /// Snapshot of all products, in no particular order.
    async fn list(&self) -> Result<Vec<Product>, StorageError>;
}
