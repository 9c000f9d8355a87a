//! Application layer: services and use cases
//!
//! This layer orchestrates domain logic behind the identifier-provider seam.

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
