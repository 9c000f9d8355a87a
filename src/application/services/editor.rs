//! View-tree editing
//!
//! Applies a single node edit (insert or replace) at arbitrary depth and
//! renumbers the touched sibling level. The input tree is consumed and a
//! wholly new tree is returned.

use std::sync::Arc;

use tracing::debug;

use crate::application::services::relation::RelationLinker;
use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::entities::{NavigationItem, RelationConfig};
use crate::domain::reorder::reorder_items;
use crate::infrastructure::traits::IdProvider;

/// Service applying a single-node edit to an editable tree.
pub struct ViewTreeEditor {
    ids: Arc<dyn IdProvider>,
    linker: RelationLinker,
}

impl ViewTreeEditor {
    pub fn new(ids: Arc<dyn IdProvider>) -> Self {
        let linker = RelationLinker::new(Arc::clone(&ids));
        Self { ids, linker }
    }

    /// Insert or replace `target` in `tree`, returning the new tree.
    ///
    /// The target is addressed by its `(view_parent_id, view_id)` pair: no
    /// parent means root level, no `view_id` means a new node to append. The
    /// touched sibling level is renumbered. An address that matches nothing
    /// in the tree is an error; the original would silently drop the node.
    pub fn apply(
        &self,
        target: NavigationItem,
        tree: Vec<NavigationItem>,
        config: &RelationConfig,
    ) -> ApplicationResult<Vec<NavigationItem>> {
        debug!(
            "apply: target viewId={:?} viewParentId={:?}",
            target.view_id, target.view_parent_id
        );
        match target.view_parent_id.clone() {
            None => self.apply_at_root(target, tree, config),
            Some(parent_id) => {
                let (tree, leftover) = self.apply_in_branch(target, tree, &parent_id, config)?;
                if leftover.is_some() {
                    return Err(ApplicationError::ParentNotFound(parent_id));
                }
                Ok(tree)
            }
        }
    }

    fn apply_at_root(
        &self,
        target: NavigationItem,
        tree: Vec<NavigationItem>,
        config: &RelationConfig,
    ) -> ApplicationResult<Vec<NavigationItem>> {
        match target.view_id.clone() {
            Some(view_id) => {
                let tree = self.replace_in_level(&view_id, target, tree, config)?;
                Ok(reorder_items(tree))
            }
            None => {
                let mut tree = reorder_items(tree);
                let order = tree.len() as u32 + 1;
                tree.push(self.new_node(target, order, config)?);
                Ok(tree)
            }
        }
    }

    /// Walk one level looking for the addressed parent; recurse into branches
    /// that do not match. Returns the rebuilt level and the target if no node
    /// on this level or below claimed it.
    fn apply_in_branch(
        &self,
        target: NavigationItem,
        level: Vec<NavigationItem>,
        parent_id: &str,
        config: &RelationConfig,
    ) -> ApplicationResult<(Vec<NavigationItem>, Option<NavigationItem>)> {
        let mut pending = Some(target);
        let mut updated_level = Vec::with_capacity(level.len());

        for mut item in level {
            let Some(current) = pending.take() else {
                updated_level.push(item);
                continue;
            };

            let children = std::mem::take(&mut item.items);
            if item.view_id.as_deref() == Some(parent_id) {
                item.items = self.place_in_children(current, children, config)?;
            } else {
                let (children, leftover) =
                    self.apply_in_branch(current, children, parent_id, config)?;
                item.items = children;
                pending = leftover;
            }
            updated_level.push(item);
        }

        Ok((reorder_items(updated_level), pending))
    }

    /// Append or replace the target within the addressed node's child list.
    fn place_in_children(
        &self,
        target: NavigationItem,
        children: Vec<NavigationItem>,
        config: &RelationConfig,
    ) -> ApplicationResult<Vec<NavigationItem>> {
        match target.view_id.clone() {
            None => {
                let mut children = reorder_items(children);
                let order = children.len() as u32 + 1;
                children.push(self.new_node(target, order, config)?);
                Ok(children)
            }
            Some(view_id) => {
                let children = self.replace_in_level(&view_id, target, children, config)?;
                Ok(reorder_items(children))
            }
        }
    }

    /// Replace the node with the given `view_id` within one sibling list.
    fn replace_in_level(
        &self,
        view_id: &str,
        target: NavigationItem,
        level: Vec<NavigationItem>,
        config: &RelationConfig,
    ) -> ApplicationResult<Vec<NavigationItem>> {
        let mut pending = Some(target);
        let mut replaced = Vec::with_capacity(level.len());

        for item in level {
            if pending.is_some() && item.view_id.as_deref() == Some(view_id) {
                if let Some(edited) = pending.take() {
                    replaced.push(self.linker.link(edited, config)?);
                    continue;
                }
            }
            replaced.push(item);
        }

        if pending.is_some() {
            return Err(ApplicationError::TargetNotFound(view_id.to_string()));
        }
        Ok(replaced)
    }

    /// Finish a brand-new node: fresh `view_id`, caller-assigned order,
    /// relation resolved.
    fn new_node(
        &self,
        mut target: NavigationItem,
        order: u32,
        config: &RelationConfig,
    ) -> ApplicationResult<NavigationItem> {
        target.view_id = Some(self.ids.generate());
        target.order = Some(order);
        self.linker.link(target, config)
    }
}
