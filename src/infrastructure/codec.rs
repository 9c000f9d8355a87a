//! JSON boundary adapters for the two payload shapes.
//!
//! Persistence and the editing UI both speak JSON; these helpers keep the
//! serde plumbing and its error mapping in one place.

use crate::domain::entities::{NavigationPayload, RestPayload};
use crate::infrastructure::error::{InfraError, InfraResult};

/// Decode the editable-tree payload from JSON.
pub fn decode_view_payload(json: &str) -> InfraResult<NavigationPayload> {
    serde_json::from_str(json).map_err(|e| InfraError::codec("decode view payload", e))
}

/// Encode the editable-tree payload to JSON.
pub fn encode_view_payload(payload: &NavigationPayload) -> InfraResult<String> {
    serde_json::to_string(payload).map_err(|e| InfraError::codec("encode view payload", e))
}

/// Decode the persistence payload from JSON.
pub fn decode_rest_payload(json: &str) -> InfraResult<RestPayload> {
    serde_json::from_str(json).map_err(|e| InfraError::codec("decode REST payload", e))
}

/// Encode the persistence payload to JSON.
pub fn encode_rest_payload(payload: &RestPayload) -> InfraResult<String> {
    serde_json::to_string(payload).map_err(|e| InfraError::codec("encode REST payload", e))
}
