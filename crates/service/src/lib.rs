//! Service layer for the inventory backend.
//! - Storage contracts (`storage`) with an in-memory implementation.
//! - User registration/login with JWT issuance (`user`).
//! - Product CRUD and lookup (`product`).
//! - Services translate storage conditions into stable domain errors.

pub mod errors;
pub mod product;
pub mod storage;
pub mod user;

pub use errors::StorageError;
