pub mod domain;
pub mod errors;
pub mod service;

pub use errors::ProductError;
pub use service::ProductService;
