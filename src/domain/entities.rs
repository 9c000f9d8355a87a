//! Domain entities: the navigation data model
//!
//! Two shapes of the same tree exist side by side:
//! - the *view* shape (`NavigationItem`, `NavigationPayload`), consumed by the
//!   editing UI and addressed by `viewId`/`viewParentId`;
//! - the *REST* shape (`RestItem`, `RestPayload`), consumed by persistence and
//!   addressed by `parent`/`master`.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Closed variant tag for a navigation item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    #[serde(rename = "INTERNAL")]
    Internal,
    #[serde(rename = "EXTERNAL")]
    External,
}

/// Variant-specific fields of a navigation item.
///
/// Internal items point at content within the site and may carry a relation to
/// an external content entity; external items only carry an outbound path.
/// Modelling this as a sum type keeps the two field sets mutually exclusive:
/// an external item cannot hold relation fields at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ItemTarget {
    #[serde(rename = "INTERNAL", rename_all = "camelCase")]
    Internal {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        path: Option<String>,
        /// Raw relation reference as supplied by the API or the editor.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        related: Option<RelatedValue>,
        /// Resolved denormalized record for the related entity.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        related_ref: Option<EntityRecord>,
        /// Collection name of the relation target.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        related_type: Option<String>,
    },
    #[serde(rename = "EXTERNAL", rename_all = "camelCase")]
    External {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        external_path: Option<String>,
    },
}

impl Default for ItemTarget {
    fn default() -> Self {
        ItemTarget::Internal {
            path: None,
            related: None,
            related_ref: None,
            related_type: None,
        }
    }
}

impl ItemTarget {
    pub fn kind(&self) -> ItemKind {
        match self {
            ItemTarget::Internal { .. } => ItemKind::Internal,
            ItemTarget::External { .. } => ItemKind::External,
        }
    }

    pub fn is_external(&self) -> bool {
        self.kind() == ItemKind::External
    }
}

/// Identifier of an external entity: numeric for legacy records, a generated
/// string key for newer ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Number(i64),
    Key(String),
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Number(id) => write!(f, "{id}"),
            EntityId::Key(key) => write!(f, "{key}"),
        }
    }
}

/// Raw relation value from the wire.
///
/// Loosely typed by construction: the API delivers a list, the editor a
/// primitive id or an already-resolved entity object. Classification into a
/// usable key happens at the relation-linker boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RelatedValue {
    Number(i64),
    Text(String),
    Entity(EntityRecord),
    Many(Vec<RelatedValue>),
}

impl RelatedValue {
    /// A removed relation arrives from the API as an empty list.
    pub fn is_empty(&self) -> bool {
        matches!(self, RelatedValue::Many(values) if values.is_empty())
    }

    /// The single relation value: the first element of a list, or the value itself.
    pub fn single(&self) -> Option<&RelatedValue> {
        match self {
            RelatedValue::Many(values) => values.first(),
            other => Some(other),
        }
    }
}

impl From<EntityId> for RelatedValue {
    fn from(id: EntityId) -> Self {
        match id {
            EntityId::Number(n) => RelatedValue::Number(n),
            EntityId::Key(key) => RelatedValue::Text(key),
        }
    }
}

/// Classified relation identifier, produced at the relation-linker boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelationKey {
    Numeric(i64),
    Generated(String),
}

impl RelationKey {
    pub fn matches(&self, id: &EntityId) -> bool {
        match (self, id) {
            (RelationKey::Numeric(n), EntityId::Number(m)) => n == m,
            (RelationKey::Generated(key), EntityId::Key(other)) => key == other,
            _ => false,
        }
    }

    pub fn to_entity_id(&self) -> EntityId {
        match self {
            RelationKey::Numeric(n) => EntityId::Number(*n),
            RelationKey::Generated(key) => EntityId::Key(key.clone()),
        }
    }
}

impl fmt::Display for RelationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelationKey::Numeric(n) => write!(f, "{n}"),
            RelationKey::Generated(key) => write!(f, "{key}"),
        }
    }
}

/// An external content entity record.
///
/// Open-ended: the bookkeeping fields are known, everything else the entity
/// carries (titles, slugs, arbitrary attributes) lands in `fields`. Used both
/// for repository records and for the resolved `relatedRef`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub id: EntityId,
    #[serde(
        rename = "__collectionName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub collection_name: Option<String>,
    #[serde(
        rename = "__contentType",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub content_type: Option<String>,
    #[serde(
        rename = "labelSingular",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub label_singular: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl EntityRecord {
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            collection_name: None,
            content_type: None,
            label_singular: None,
            fields: Map::new(),
        }
    }
}

/// Schema descriptor for an external content type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentType {
    pub content_type_name: String,
    pub collection_name: String,
    pub label_singular: String,
}

/// Audience entry: a bare id or a full entity object. Entity objects are
/// flattened to bare ids on REST serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AudienceRef {
    Id(EntityId),
    Entity(EntityRecord),
}

impl AudienceRef {
    pub fn id(&self) -> EntityId {
        match self {
            AudienceRef::Id(id) => id.clone(),
            AudienceRef::Entity(record) => record.id.clone(),
        }
    }
}

/// A node of the editable navigation tree.
///
/// Raw persisted items arrive in this shape without `view_id`; the tree
/// preparer fills the view identifiers in.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationItem {
    /// Persisted identifier, absent for not-yet-saved nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Tree-local identifier, unique within the whole tree and stable until
    /// the node is removed. Absent only on nodes that have not been placed yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_id: Option<String>,
    /// `view_id` of the owning node; absent for root-level nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_parent_id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(flatten)]
    pub target: ItemTarget,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui_router_key: Option<String>,
    #[serde(default)]
    pub menu_attached: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub audience: Vec<AudienceRef>,
    /// 1-based position among siblings; contiguous 1..N after normalization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
    #[serde(default)]
    pub updated: bool,
    #[serde(default)]
    pub removed: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<NavigationItem>,
}

/// Editable-tree payload handed to and from the editing UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub visible: bool,
    #[serde(default)]
    pub items: Vec<NavigationItem>,
}

/// One element of a REST item's `related` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedDescriptor {
    pub ref_id: EntityId,
    #[serde(rename = "ref", default, skip_serializing_if = "Option::is_none")]
    pub ref_name: Option<String>,
    pub field: String,
}

/// Persistence shape of a navigation node. No view identifiers; ownership is
/// expressed through `parent` and `master` instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub master: Option<i64>,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    #[serde(default)]
    pub updated: bool,
    #[serde(default)]
    pub removed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui_router_key: Option<String>,
    #[serde(default)]
    pub menu_attached: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub audience: Vec<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_path: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related: Vec<RelatedDescriptor>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<RestItem>,
}

/// Persistence shape of a whole navigation tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub visible: bool,
    #[serde(default)]
    pub items: Vec<RestItem>,
}

/// Read-only registries supplied by the caller for relation resolution.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationConfig {
    #[serde(default)]
    pub content_type_items: Vec<EntityRecord>,
    #[serde(default)]
    pub content_types: Vec<ContentType>,
}

impl RelationConfig {
    /// Find a content type by its content-type name, case-insensitively.
    pub fn content_type_by_name(&self, name: &str) -> Option<&ContentType> {
        self.content_types
            .iter()
            .find(|ct| ct.content_type_name.eq_ignore_ascii_case(name))
    }

    /// Find a content type by its collection name, case-insensitively.
    pub fn content_type_by_collection(&self, collection: &str) -> Option<&ContentType> {
        self.content_types
            .iter()
            .find(|ct| ct.collection_name.eq_ignore_ascii_case(collection))
    }

    /// Find a content-type item by its identifier.
    pub fn content_type_item(&self, id: &EntityId) -> Option<&EntityRecord> {
        self.content_type_items.iter().find(|cti| cti.id == *id)
    }
}

/// Candidate label fields per collection, with an optional fallback list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LabelFields {
    #[serde(default)]
    pub default: Vec<String>,
    #[serde(flatten)]
    pub per_collection: HashMap<String, Vec<String>>,
}
