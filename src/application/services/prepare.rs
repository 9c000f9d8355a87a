//! Initial view-tree construction
//!
//! Turns raw persisted items (no view identifiers) into an editable tree.

use std::sync::Arc;

use tracing::debug;

use crate::application::services::relation::RelationLinker;
use crate::application::ApplicationResult;
use crate::domain::entities::{NavigationItem, RelationConfig};
use crate::infrastructure::traits::IdProvider;

/// Service building an editable tree from raw persisted items.
pub struct TreePreparer {
    ids: Arc<dyn IdProvider>,
    linker: RelationLinker,
}

impl TreePreparer {
    pub fn new(ids: Arc<dyn IdProvider>) -> Self {
        let linker = RelationLinker::new(Arc::clone(&ids));
        Self { ids, linker }
    }

    /// Assign view identifiers and resolve relations, recursively.
    ///
    /// Every node receives a fresh `view_id` and a `view_parent_id` pointing
    /// at the caller-supplied parent (absent for the root call). A missing
    /// `order` defaults to the node's position and marks it updated. Children
    /// are prepared under the node's own new `view_id`.
    pub fn prepare(
        &self,
        items: Vec<NavigationItem>,
        parent_view_id: Option<&str>,
        config: &RelationConfig,
    ) -> ApplicationResult<Vec<NavigationItem>> {
        debug!(
            "prepare: {} items under parent {:?}",
            items.len(),
            parent_view_id
        );
        items
            .into_iter()
            .enumerate()
            .map(|(position, mut item)| {
                let view_id = self.ids.generate();
                item.view_id = Some(view_id.clone());
                item.view_parent_id = parent_view_id.map(str::to_owned);
                if item.order.is_none() {
                    item.order = Some(position as u32 + 1);
                    item.updated = true;
                }
                let children = std::mem::take(&mut item.items);
                let mut item = self.linker.link(item, config)?;
                item.items = self.prepare(children, Some(&view_id), config)?;
                Ok(item)
            })
            .collect()
    }
}
