use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::error;

use super::{ProductStorage, UserStorage};
use crate::errors::StorageError;
use crate::product::domain::Product;
use crate::user::domain::{Credentials, User};
use crate::user::password;

/// In-memory user store guarded by a single mutex.
#[derive(Default)]
pub struct MemoryUserStorage {
    users: Mutex<HashMap<String, User>>, // key: email
}

impl MemoryUserStorage {
    pub fn new() -> Self { Self::default() }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, User>>, StorageError> {
        self.users.lock().map_err(|_| StorageError::other("user storage lock poisoned"))
    }
}

#[async_trait]
impl UserStorage for MemoryUserStorage {
    async fn create(&self, user: User) -> Result<(), StorageError> {
        let mut users = self.lock()?;
        if users.contains_key(&user.email) {
            return Err(StorageError::AlreadyExists);
        }
        users.insert(user.email.clone(), user);
        Ok(())
    }

    async fn verify(&self, credentials: &Credentials) -> Result<(), StorageError> {
        // Copy the hash out so the lock is not held while Argon2 runs.
        let hash = {
            let users = self.lock()?;
            match users.get(&credentials.email) {
                Some(u) => u.password_hash.clone(),
                None => return Err(StorageError::InvalidInfo),
            }
        };

        let presented = credentials.password.clone();
        let verified = tokio::task::spawn_blocking(move || password::verify_password(&presented, &hash))
            .await
            .map_err(|e| StorageError::other(format!("verify password: {e}")))?;

        match verified {
            Ok(true) => Ok(()),
            Ok(false) => Err(StorageError::InvalidInfo),
            Err(e) => {
                error!(email = %credentials.email, err = %e, "stored password hash unreadable");
                Err(StorageError::other(format!("verify password: {e}")))
            }
        }
    }
}

/// In-memory product store. Reads and writes share one mutex.
#[derive(Default)]
pub struct MemoryProductStorage {
    products: Mutex<HashMap<String, Product>>, // key: sku
}

impl MemoryProductStorage {
    pub fn new() -> Self { Self::default() }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, Product>>, StorageError> {
        self.products.lock().map_err(|_| StorageError::other("product storage lock poisoned"))
    }
}

#[async_trait]
impl ProductStorage for MemoryProductStorage {
    async fn create(&self, product: Product) -> Result<(), StorageError> {
        let mut products = self.lock()?;
        if products.contains_key(&product.sku) {
            return Err(StorageError::AlreadyExists);
        }
        products.insert(product.sku.clone(), product);
        Ok(())
    }

    async fn update(&self, product: Product) -> Result<(), StorageError> {
        let mut products = self.lock()?;
        match products.get_mut(&product.sku) {
            Some(slot) => {
                *slot = product;
                Ok(())
            }
            None => Err(StorageError::NotFound),
        }
    }

    async fn delete(&self, sku: &str) -> Result<(), StorageError> {
        let mut products = self.lock()?;
        products.remove(sku).map(|_| ()).ok_or(StorageError::NotFound)
    }

    async fn get(&self, sku: &str) -> Result<Product, StorageError> {
        let products = self.lock()?;
        products.get(sku).cloned().ok_or(StorageError::NotFound)
    }

    async fn list(&self) -> Result<Vec<Product>, StorageError> {
        let products = self.lock()?;
        Ok(products.values().cloned().collect())
    }
}
