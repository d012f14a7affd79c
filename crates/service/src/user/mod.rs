//! User module: domain types, password hashing, token signing and the
//! registration/login service.

pub mod domain;
pub mod errors;
pub mod password;
pub mod service;
pub mod token;

pub use errors::UserError;
pub use service::{AuthConfig, UserService};
