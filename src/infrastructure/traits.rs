//! Boundary traits for testability
//!
//! Identifier generation is the only non-deterministic collaborator of the
//! transformation services; abstracting it lets them run against a
//! deterministic test double.

use uuid::Uuid;

/// Tree-local identifier generation and validation.
pub trait IdProvider: Send + Sync {
    /// Produce a fresh, globally-unique identifier.
    fn generate(&self) -> String;

    /// Whether `value` matches the generator's format. Used to tell a
    /// generated relation reference apart from a legacy numeric one.
    fn is_generated(&self, value: &str) -> bool;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Production identifier provider backed by UUID v4.
#[derive(Debug, Default)]
pub struct UuidIdProvider;

impl IdProvider for UuidIdProvider {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }

    fn is_generated(&self, value: &str) -> bool {
        Uuid::parse_str(value).is_ok()
    }
}
