//! Domain layer: entities and business logic
//!
//! This layer is independent of external concerns (no I/O, no identifier
//! generation).

pub mod entities;
pub mod error;
pub mod label;
pub mod reorder;

pub use entities::*;
pub use error::{DomainError, DomainResult};
pub use label::extract_related_label;
pub use reorder::reorder_items;
