//! Label derivation for resolved relation records.

use serde_json::Value;

use crate::domain::entities::{EntityRecord, LabelFields};

/// Derive a display label for a resolved related entity.
///
/// Walks the candidate field names configured for the record's collection
/// (falling back to the default list) and returns the first non-empty value,
/// or an empty string when nothing matches.
pub fn extract_related_label(item: &EntityRecord, fields: &LabelFields) -> String {
    let candidates = item
        .collection_name
        .as_deref()
        .and_then(|collection| fields.per_collection.get(collection))
        .unwrap_or(&fields.default);

    candidates
        .iter()
        .filter_map(|name| item.fields.get(name))
        .find_map(display_value)
        .unwrap_or_default()
}

fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(number) if number.as_i64() != Some(0) => Some(number.to_string()),
        _ => None,
    }
}
