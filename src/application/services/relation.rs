//! Relation resolution service
//!
//! Resolves a navigation item's raw `related` reference against the
//! caller-supplied content-type registries, producing the denormalized
//! `relatedRef` record the editor displays.

use std::sync::Arc;

use tracing::debug;

use crate::application::ApplicationResult;
use crate::domain::entities::{
    EntityRecord, ItemTarget, NavigationItem, RelatedValue, RelationConfig, RelationKey,
};
use crate::domain::DomainError;
use crate::infrastructure::traits::IdProvider;

/// Relation fields of an internal item, resolved as a unit.
type RelationFields = (
    Option<RelatedValue>,
    Option<EntityRecord>,
    Option<String>,
);

/// Classified form of a single raw relation value.
enum Classified {
    Key(RelationKey),
    Entity(EntityRecord),
}

/// Service resolving item relations against read-only registries.
#[derive(Clone)]
pub struct RelationLinker {
    ids: Arc<dyn IdProvider>,
}

impl RelationLinker {
    pub fn new(ids: Arc<dyn IdProvider>) -> Self {
        Self { ids }
    }

    /// Resolve or clear the relation fields of one item.
    ///
    /// External items come back unchanged (they carry no relation by
    /// construction). Internal items without a usable `related` value come
    /// back with all relation fields cleared. Otherwise the relation is
    /// resolved to a denormalized `relatedRef`; a reference that already
    /// matches the existing `relatedRef` is left untouched. Registry lookups
    /// that yield no match are configuration errors.
    pub fn link(
        &self,
        mut item: NavigationItem,
        config: &RelationConfig,
    ) -> ApplicationResult<NavigationItem> {
        match std::mem::take(&mut item.target) {
            external @ ItemTarget::External { .. } => {
                item.target = external;
                Ok(item)
            }
            ItemTarget::Internal {
                path,
                related,
                related_ref,
                related_type,
            } => {
                debug!("link: title={}", item.title);
                let (related, related_ref, related_type) =
                    self.resolve(related, related_ref, related_type, config)?;
                item.target = ItemTarget::Internal {
                    path,
                    related,
                    related_ref,
                    related_type,
                };
                Ok(item)
            }
        }
    }

    fn resolve(
        &self,
        related: Option<RelatedValue>,
        related_ref: Option<EntityRecord>,
        related_type: Option<String>,
        config: &RelationConfig,
    ) -> ApplicationResult<RelationFields> {
        let value = related
            .as_ref()
            .filter(|value| !value.is_empty())
            .and_then(RelatedValue::single)
            .cloned();
        let Some(value) = value else {
            return Ok((None, None, None));
        };

        match self.classify(&value)? {
            Classified::Key(key) => {
                // Fast path: the reference still points at the resolved record.
                if related_ref.as_ref().is_some_and(|r| key.matches(&r.id)) {
                    return Ok((related, related_ref, related_type));
                }
                let record = self.find_by_key(&key, related_type.as_deref(), config)?;
                Ok((related, Some(record), related_type))
            }
            Classified::Entity(entity) => {
                if related_ref.as_ref().is_some_and(|r| r.id == entity.id) {
                    return Ok((related, related_ref, related_type));
                }
                self.build_from_entity(entity, config)
            }
        }
    }

    /// Lookup branch: a bare identifier plus `relatedType` locate both the
    /// entity record and its content type.
    fn find_by_key(
        &self,
        key: &RelationKey,
        related_type: Option<&str>,
        config: &RelationConfig,
    ) -> ApplicationResult<EntityRecord> {
        let collection = related_type.ok_or_else(|| DomainError::UnresolvableRelation {
            reason: format!("bare identifier {key} without a relatedType"),
        })?;
        let mut record = config
            .content_type_item(&key.to_entity_id())
            .cloned()
            .ok_or_else(|| DomainError::UnknownContentTypeItem(key.to_entity_id()))?;
        let content_type = config
            .content_type_by_collection(collection)
            .ok_or_else(|| DomainError::UnknownCollection(collection.to_string()))?;

        // The record's own bookkeeping fields win over the injected ones.
        record
            .collection_name
            .get_or_insert_with(|| collection.to_string());
        record
            .content_type
            .get_or_insert_with(|| content_type.content_type_name.clone());
        record
            .label_singular
            .get_or_insert_with(|| content_type.label_singular.clone());
        Ok(record)
    }

    /// Entity branch: the relation value is itself a resolved entity carrying
    /// a content-type tag. The matching content type is merged in and all
    /// three relation fields are rewritten.
    fn build_from_entity(
        &self,
        entity: EntityRecord,
        config: &RelationConfig,
    ) -> ApplicationResult<RelationFields> {
        let name = entity
            .content_type
            .clone()
            .ok_or_else(|| DomainError::UnresolvableRelation {
                reason: "entity relation value carries no content-type tag".to_string(),
            })?;
        let content_type = config
            .content_type_by_name(&name)
            .ok_or_else(|| DomainError::UnknownContentType(name.clone()))?;

        let mut record = entity.clone();
        record
            .collection_name
            .get_or_insert_with(|| content_type.collection_name.clone());
        record
            .label_singular
            .get_or_insert_with(|| content_type.label_singular.clone());

        Ok((
            Some(RelatedValue::from(entity.id)),
            Some(record),
            Some(content_type.collection_name.clone()),
        ))
    }

    fn classify(&self, value: &RelatedValue) -> ApplicationResult<Classified> {
        match value {
            RelatedValue::Number(id) => Ok(Classified::Key(RelationKey::Numeric(*id))),
            RelatedValue::Text(text) if self.ids.is_generated(text) => {
                Ok(Classified::Key(RelationKey::Generated(text.clone())))
            }
            RelatedValue::Text(text) => match text.parse::<i64>() {
                Ok(id) => Ok(Classified::Key(RelationKey::Numeric(id))),
                Err(_) => Err(DomainError::MalformedRelationId(text.clone()).into()),
            },
            RelatedValue::Entity(entity) => Ok(Classified::Entity(entity.clone())),
            RelatedValue::Many(_) => Err(DomainError::UnresolvableRelation {
                reason: "nested relation lists are not supported".to_string(),
            }
            .into()),
        }
    }
}
