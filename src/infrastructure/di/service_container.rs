//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::{
    PayloadTransformer, RelationLinker, TreePreparer, ViewTreeEditor,
};
use crate::infrastructure::traits::{IdProvider, UuidIdProvider};

/// Container holding all transformation services.
pub struct ServiceContainer {
    /// Identifier provider shared by all services
    pub ids: Arc<dyn IdProvider>,

    pub linker: RelationLinker,
    pub preparer: TreePreparer,
    pub editor: ViewTreeEditor,
    pub transformer: PayloadTransformer,
}

impl ServiceContainer {
    /// Create a new service container with the production identifier provider.
    pub fn new() -> Self {
        Self::with_deps(Arc::new(UuidIdProvider))
    }

    /// Create a service container with a custom identifier provider (for testing).
    pub fn with_deps(ids: Arc<dyn IdProvider>) -> Self {
        Self {
            linker: RelationLinker::new(Arc::clone(&ids)),
            preparer: TreePreparer::new(Arc::clone(&ids)),
            editor: ViewTreeEditor::new(Arc::clone(&ids)),
            transformer: PayloadTransformer::new(Arc::clone(&ids)),
            ids,
        }
    }
}

impl Default for ServiceContainer {
    fn default() -> Self {
        Self::new()
    }
}
