//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::entities::EntityId;

/// Domain errors represent relation-resolution failures against the
/// caller-supplied registries. These are configuration errors: proceeding
/// would produce an internally inconsistent resolved relation.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("unknown content type: {0}")]
    UnknownContentType(String),

    #[error("unknown collection: {0}")]
    UnknownCollection(String),

    #[error("no content-type item with id: {0}")]
    UnknownContentTypeItem(EntityId),

    #[error("relation value is not a recognizable identifier: {0}")]
    MalformedRelationId(String),

    #[error("relation cannot be resolved: {reason}")]
    UnresolvableRelation { reason: String },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
