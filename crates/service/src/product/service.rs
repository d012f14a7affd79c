use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::domain::Product;
use super::errors::ProductError;
use crate::errors::StorageError;
use crate::storage::ProductStorage;

/// Application service for inventory records.
/// Translates storage conditions into `ProductError`; no other rules.
pub struct ProductService<S: ProductStorage + ?Sized> {
    storage: Arc<S>,
}

fn pass_through(context: &'static str, source: StorageError) -> ProductError {
    ProductError::Storage { context, source }
}

impl<S: ProductStorage + ?Sized> ProductService<S> {
    pub fn new(storage: Arc<S>) -> Self { Self { storage } }

    #[instrument(skip(self, product), fields(sku = %product.sku))]
    pub async fn add_product(&self, product: Product) -> Result<(), ProductError> {
        match self.storage.create(product).await {
            Ok(()) => {
                info!("product_added");
                Ok(())
            }
            Err(StorageError::AlreadyExists) => {
                debug!("product exists");
                Err(ProductError::Exists)
            }
            Err(e) => Err(pass_through("create product", e)),
        }
    }

    /// Replace all non-key fields of an existing product.
    #[instrument(skip(self, product), fields(sku = %product.sku))]
    pub async fn update_product(&self, product: Product) -> Result<(), ProductError> {
        match self.storage.update(product).await {
            Ok(()) => {
                info!("product_updated");
                Ok(())
            }
            Err(StorageError::NotFound) => Err(ProductError::NotFound),
            Err(e) => Err(pass_through("update product", e)),
        }
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, sku: &str) -> Result<(), ProductError> {
        match self.storage.delete(sku).await {
            Ok(()) => {
                info!("product_deleted");
                Ok(())
            }
            Err(StorageError::NotFound) => Err(ProductError::NotFound),
            Err(e) => Err(pass_through("delete product", e)),
        }
    }

    pub async fn list_product(&self) -> Result<Vec<Product>, ProductError> {
        let products = self.storage.list().await.map_err(|e| pass_through("list product", e))?;
        debug!(count = products.len(), "list products");
        Ok(products)
    }

    /// Exact-SKU lookup.
    #[instrument(skip(self))]
    pub async fn search_product(&self, sku: &str) -> Result<Product, ProductError> {
        self.storage.get(sku).await.map_err(|e| match e {
            StorageError::NotFound => ProductError::NotFound,
            e => pass_through("search product", e),
        })
    }
}
