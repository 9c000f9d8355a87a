//! Tests for ViewTreeEditor

mod common;

use navtree::util::testing::init_test_setup;
use navtree::{ApplicationError, NavigationItem, RelationConfig, ServiceContainer};

use common::{ids, internal_item};

fn container() -> ServiceContainer {
    init_test_setup();
    ServiceContainer::with_deps(ids())
}

fn placed(title: &str, view_id: &str, parent: Option<&str>, order: u32) -> NavigationItem {
    NavigationItem {
        title: title.to_string(),
        view_id: Some(view_id.to_string()),
        view_parent_id: parent.map(str::to_owned),
        order: Some(order),
        ..Default::default()
    }
}

/// Two roots; root "a" has children c1/c2, root "b" has child d1.
fn two_level_tree() -> Vec<NavigationItem> {
    let mut a = placed("A", "a", None, 1);
    a.items = vec![
        placed("C1", "c1", Some("a"), 1),
        placed("C2", "c2", Some("a"), 2),
    ];
    let mut b = placed("B", "b", None, 2);
    b.items = vec![placed("D1", "d1", Some("b"), 1)];
    vec![a, b]
}

#[test]
fn given_root_list_when_appending_new_item_then_order_is_len_plus_one() {
    // Arrange
    let tree = vec![placed("A", "a", None, 1), placed("B", "b", None, 2)];
    let target = internal_item("New", None);

    // Act
    let tree = container()
        .editor
        .apply(target, tree, &RelationConfig::default())
        .unwrap();

    // Assert
    assert_eq!(tree.len(), 3);
    let appended = &tree[2];
    assert_eq!(appended.title, "New");
    assert_eq!(appended.order, Some(3));
    assert_eq!(appended.view_id.as_deref(), Some("view-1"));
}

#[test]
fn given_root_item_when_replacing_then_siblings_untouched() {
    // Arrange
    let tree = vec![placed("A", "a", None, 1), placed("B", "b", None, 2)];
    let mut target = placed("A renamed", "a", None, 1);
    target.updated = true;

    // Act
    let tree = container()
        .editor
        .apply(target, tree, &RelationConfig::default())
        .unwrap();

    // Assert
    assert_eq!(tree.len(), 2);
    assert_eq!(tree[0].title, "A renamed");
    assert_eq!(tree[1].title, "B");
    assert_eq!(tree[1].order, Some(2));
    assert!(!tree[1].updated);
}

#[test]
fn given_child_address_when_appending_then_added_under_parent() {
    // Arrange
    let tree = two_level_tree();
    let mut target = internal_item("C3", None);
    target.view_parent_id = Some("a".to_string());

    // Act
    let tree = container()
        .editor
        .apply(target, tree, &RelationConfig::default())
        .unwrap();

    // Assert
    let a = &tree[0];
    assert_eq!(a.items.len(), 3);
    let appended = &a.items[2];
    assert_eq!(appended.title, "C3");
    assert_eq!(appended.order, Some(3));
    assert!(appended.view_id.is_some());
    // unrelated branch untouched
    assert_eq!(tree[1].items.len(), 1);
    assert_eq!(tree[1].items[0].title, "D1");
}

#[test]
fn given_leaf_address_when_replacing_then_only_that_leaf_changes() {
    // Arrange
    let tree = two_level_tree();
    let target = placed("C2 renamed", "c2", Some("a"), 2);

    // Act
    let tree = container()
        .editor
        .apply(target, tree, &RelationConfig::default())
        .unwrap();

    // Assert
    let a = &tree[0];
    assert_eq!(a.items[0].title, "C1");
    assert_eq!(a.items[1].title, "C2 renamed");
    let orders: Vec<_> = a.items.iter().map(|i| i.order).collect();
    assert_eq!(orders, vec![Some(1), Some(2)]);
    // the other branch is structurally unchanged
    let b = &tree[1];
    assert_eq!(b.title, "B");
    assert_eq!(b.items[0].title, "D1");
    assert!(!b.updated && !b.items[0].updated);
}

#[test]
fn given_reordering_edit_when_replacing_then_level_renormalized() {
    // Arrange: move c2 to the front by giving it order 0
    let tree = two_level_tree();
    let target = placed("C2", "c2", Some("a"), 0);

    // Act
    let tree = container()
        .editor
        .apply(target, tree, &RelationConfig::default())
        .unwrap();

    // Assert
    let a = &tree[0];
    let titles: Vec<_> = a.items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["C2", "C1"]);
    let orders: Vec<_> = a.items.iter().map(|i| i.order).collect();
    assert_eq!(orders, vec![Some(1), Some(2)]);
    assert!(a.items.iter().all(|i| i.updated));
}

#[test]
fn given_new_item_under_deep_parent_when_applying_then_found_by_descent() {
    // Arrange: address d1, which sits one level down
    let tree = two_level_tree();
    let mut target = internal_item("E1", None);
    target.view_parent_id = Some("d1".to_string());

    // Act
    let tree = container()
        .editor
        .apply(target, tree, &RelationConfig::default())
        .unwrap();

    // Assert
    let d1 = &tree[1].items[0];
    assert_eq!(d1.items.len(), 1);
    assert_eq!(d1.items[0].title, "E1");
    assert_eq!(d1.items[0].order, Some(1));
}

#[test]
fn given_unknown_parent_when_applying_then_error() {
    // Arrange
    let tree = two_level_tree();
    let mut target = internal_item("Orphan", None);
    target.view_parent_id = Some("nope".to_string());

    // Act
    let result = container()
        .editor
        .apply(target, tree, &RelationConfig::default());

    // Assert
    assert!(matches!(result, Err(ApplicationError::ParentNotFound(_))));
}

#[test]
fn given_unknown_view_id_at_root_when_replacing_then_error() {
    // Arrange
    let tree = vec![placed("A", "a", None, 1)];
    let target = placed("Ghost", "ghost", None, 1);

    // Act
    let result = container()
        .editor
        .apply(target, tree, &RelationConfig::default());

    // Assert
    assert!(matches!(result, Err(ApplicationError::TargetNotFound(_))));
}

#[test]
fn given_edit_when_applied_then_input_tree_unused_afterwards() {
    // Arrange: the editor consumes the tree and returns a fresh value; a
    // clone of the input must stay valid and unchanged
    let tree = two_level_tree();
    let snapshot = tree.clone();
    let target = placed("C2 renamed", "c2", Some("a"), 2);

    // Act
    let edited = container()
        .editor
        .apply(target, tree, &RelationConfig::default())
        .unwrap();

    // Assert
    assert_eq!(snapshot, two_level_tree());
    assert_ne!(edited, snapshot);
}
