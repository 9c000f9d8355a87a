//! Sibling order normalization.

use crate::domain::entities::NavigationItem;

/// Normalize the order of one sibling list.
///
/// Stable-sorts ascending by `order` (items without an order sort last, ties
/// keep their input position), then reassigns `order` to `position + 1`. Any
/// item whose order changed is marked `updated`; a prior `updated` flag is
/// preserved. Idempotent.
pub fn reorder_items(items: Vec<NavigationItem>) -> Vec<NavigationItem> {
    let mut items = items;
    items.sort_by_key(|item| item.order.unwrap_or(u32::MAX));
    items
        .into_iter()
        .enumerate()
        .map(|(position, mut item)| {
            let order = position as u32 + 1;
            item.updated = item.updated || item.order != Some(order);
            item.order = Some(order);
            item
        })
        .collect()
}
