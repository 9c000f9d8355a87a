//! Shared test fixtures: deterministic id provider and entity builders.

#![allow(dead_code)]

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use navtree::{
    ContentType, EntityId, EntityRecord, IdProvider, ItemTarget, NavigationItem, RelatedValue,
    RelationConfig,
};

/// Deterministic id provider: generates "view-1", "view-2", ...
///
/// Values prefixed with "gen-" count as generated identifiers, standing in
/// for the opaque keys the production generator emits.
#[derive(Debug, Default)]
pub struct SequentialIdProvider {
    counter: AtomicU64,
}

impl IdProvider for SequentialIdProvider {
    fn generate(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        format!("view-{n}")
    }

    fn is_generated(&self, value: &str) -> bool {
        value.starts_with("view-") || value.starts_with("gen-")
    }
}

pub fn ids() -> Arc<SequentialIdProvider> {
    Arc::new(SequentialIdProvider::default())
}

pub fn internal_item(title: &str, order: Option<u32>) -> NavigationItem {
    NavigationItem {
        title: title.to_string(),
        order,
        ..Default::default()
    }
}

pub fn internal_with_relation(
    title: &str,
    related: RelatedValue,
    related_type: Option<&str>,
) -> NavigationItem {
    NavigationItem {
        title: title.to_string(),
        target: ItemTarget::Internal {
            path: Some(format!("/{}", title.to_lowercase())),
            related: Some(related),
            related_ref: None,
            related_type: related_type.map(str::to_owned),
        },
        ..Default::default()
    }
}

pub fn external_item(title: &str, url: &str) -> NavigationItem {
    NavigationItem {
        title: title.to_string(),
        target: ItemTarget::External {
            external_path: Some(url.to_string()),
        },
        ..Default::default()
    }
}

pub fn entity(id: i64, collection: &str, content_type: &str) -> EntityRecord {
    entity_with_id(EntityId::Number(id), collection, content_type)
}

pub fn entity_with_id(id: EntityId, collection: &str, content_type: &str) -> EntityRecord {
    let mut record = EntityRecord::new(id);
    record.collection_name = Some(collection.to_string());
    record.content_type = Some(content_type.to_string());
    record
}

pub fn content_type(name: &str, collection: &str, label: &str) -> ContentType {
    ContentType {
        content_type_name: name.to_string(),
        collection_name: collection.to_string(),
        label_singular: label.to_string(),
    }
}

/// A registry with two collections and three entity records.
pub fn pages_config() -> RelationConfig {
    RelationConfig {
        content_type_items: vec![
            entity(1, "pages", "Page"),
            entity(2, "pages", "Page"),
            entity(7, "posts", "Post"),
        ],
        content_types: vec![
            content_type("Page", "pages", "Page"),
            content_type("Post", "posts", "Post"),
        ],
    }
}

/// Relation fields of an item, for assertions. External items have none.
pub fn relation_fields(
    item: &NavigationItem,
) -> (
    Option<&RelatedValue>,
    Option<&EntityRecord>,
    Option<&str>,
) {
    match &item.target {
        ItemTarget::Internal {
            related,
            related_ref,
            related_type,
            ..
        } => (related.as_ref(), related_ref.as_ref(), related_type.as_deref()),
        ItemTarget::External { .. } => (None, None, None),
    }
}
