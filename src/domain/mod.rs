//! # Domain Layer
//!
//! Analysis result types and the error type shared by every layer.
//! This layer is independent of external frameworks and infrastructure.

mod error;
pub mod models;

pub use error::*;
pub use models::*;
