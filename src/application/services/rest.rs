//! REST payload serialization
//!
//! Flattens the editable tree back into the nested persistence shape: view
//! identifiers are stripped, ownership is re-expressed through `parent` and
//! `master`, and relations collapse to compact descriptors.

use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::{
    AudienceRef, EntityId, ItemTarget, NavigationItem, NavigationPayload, RelatedDescriptor,
    RelatedValue, RelationConfig, RestItem, RestPayload,
};
use crate::infrastructure::traits::IdProvider;

/// Relation descriptors always target the navigation join field.
const RELATED_FIELD: &str = "navigation";

/// Service serializing editable trees into the persistence shape.
pub struct PayloadTransformer {
    ids: Arc<dyn IdProvider>,
}

impl PayloadTransformer {
    pub fn new(ids: Arc<dyn IdProvider>) -> Self {
        Self { ids }
    }

    /// Serialize a whole navigation payload. Root items get no parent and the
    /// payload's own id as master.
    pub fn to_rest(&self, payload: &NavigationPayload, config: &RelationConfig) -> RestPayload {
        debug!("to_rest: name={} items={}", payload.name, payload.items.len());
        RestPayload {
            id: payload.id,
            name: payload.name.clone(),
            visible: payload.visible,
            items: payload
                .items
                .iter()
                .map(|item| self.item_to_rest(item, None, payload.id, config))
                .collect(),
        }
    }

    /// Serialize one node and its subtree.
    ///
    /// `parent` is the persisted id of the owning node; `master` is the id of
    /// the navigation tree itself and flows down unchanged. Children receive
    /// this node's own persisted id as their parent.
    pub fn item_to_rest(
        &self,
        item: &NavigationItem,
        parent: Option<i64>,
        master: Option<i64>,
        config: &RelationConfig,
    ) -> RestItem {
        let (path, external_path, related) = match &item.target {
            ItemTarget::External { external_path } => (None, external_path.clone(), Vec::new()),
            ItemTarget::Internal {
                path,
                related,
                related_type,
                ..
            } => {
                let descriptor =
                    self.related_descriptor(related.as_ref(), related_type.as_deref(), config);
                (path.clone(), None, descriptor.into_iter().collect())
            }
        };

        RestItem {
            id: item.id,
            parent,
            master,
            title: item.title.clone(),
            kind: item.target.kind(),
            updated: item.updated,
            removed: item.removed,
            order: item.order,
            ui_router_key: item.ui_router_key.clone(),
            menu_attached: item.menu_attached,
            audience: item.audience.iter().map(AudienceRef::id).collect(),
            path,
            external_path,
            related,
            items: item
                .items
                .iter()
                .map(|child| self.item_to_rest(child, item.id, master, config))
                .collect(),
        }
    }

    /// Build the compact relation descriptor for an internal node.
    ///
    /// `ref` is found by cross-referencing the registries: the entity record's
    /// collection joins against the content types, falling back to the raw
    /// `relatedType` when nothing matches. No derivable identifier means no
    /// descriptor.
    fn related_descriptor(
        &self,
        related: Option<&RelatedValue>,
        related_type: Option<&str>,
        config: &RelationConfig,
    ) -> Option<RelatedDescriptor> {
        let ref_id = self.ref_id(related?)?;
        let record = config.content_type_item(&ref_id);
        let collection = record
            .and_then(|r| r.collection_name.as_deref())
            .or(related_type);
        let ref_name = collection
            .and_then(|name| config.content_type_by_collection(name))
            .map(|ct| ct.content_type_name.clone())
            .or_else(|| related_type.map(str::to_owned));

        Some(RelatedDescriptor {
            ref_id,
            ref_name,
            field: RELATED_FIELD.to_string(),
        })
    }

    /// Extract the persisted identifier of the relation target: generated
    /// string keys pass through, everything else parses as an integer.
    fn ref_id(&self, related: &RelatedValue) -> Option<EntityId> {
        match related.single()? {
            RelatedValue::Number(id) => Some(EntityId::Number(*id)),
            RelatedValue::Text(text) if self.ids.is_generated(text) => {
                Some(EntityId::Key(text.clone()))
            }
            RelatedValue::Text(text) => text.parse::<i64>().ok().map(EntityId::Number),
            RelatedValue::Entity(entity) => Some(entity.id.clone()),
            RelatedValue::Many(_) => None,
        }
    }
}
