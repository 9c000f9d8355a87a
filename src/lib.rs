//! navtree: bidirectional transformation engine for hierarchical navigation trees.
//!
//! Converts between the flat-relational REST payload persisted by the backend
//! and the editable in-memory view tree consumed by the editor, resolving
//! relations to externally stored content entities along the way. All
//! operations are pure transforms: each call consumes its inputs and produces
//! a fresh tree, so prior versions stay valid for concurrent readers.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod util;

pub use application::services::{PayloadTransformer, RelationLinker, TreePreparer, ViewTreeEditor};
pub use application::{ApplicationError, ApplicationResult};
pub use domain::{
    extract_related_label, reorder_items, AudienceRef, ContentType, DomainError, EntityId,
    EntityRecord, ItemKind, ItemTarget, LabelFields, NavigationItem, NavigationPayload,
    RelatedDescriptor, RelatedValue, RelationConfig, RelationKey, RestItem, RestPayload,
};
pub use infrastructure::di::ServiceContainer;
pub use infrastructure::traits::{IdProvider, UuidIdProvider};
pub use infrastructure::{InfraError, InfraResult};
