//! Pieces shared by every crate in the workspace: response types and
//! logging bootstrap.

pub mod types;
pub mod utils;
