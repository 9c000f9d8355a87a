//! Infrastructure layer: boundary implementations and DI container
//!
//! This layer implements the identifier-provider seam, the JSON payload
//! codecs, and wires up services.

pub mod codec;
pub mod di;
pub mod error;
pub mod traits;

pub use error::{InfraError, InfraResult};
