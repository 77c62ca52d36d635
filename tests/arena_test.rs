//! Tests for the tree arena

use rstree::TreeArena;

#[test]
fn given_empty_arena_when_querying_then_no_root() {
    let arena: TreeArena<&str> = TreeArena::new();

    assert!(arena.is_empty());
    assert_eq!(arena.len(), 0);
    assert_eq!(arena.root(), None);
    assert!(arena.roots().is_empty());
}

#[test]
fn given_node_inserted_with_parent_when_querying_then_child_is_linked() {
    let mut arena = TreeArena::new();

    let a = arena.insert_node("a", None);
    let b = arena.insert_node("b", Some(a));

    assert_eq!(arena.get_node(a).unwrap().children, vec![b]);
    assert_eq!(arena.get_node(b).unwrap().parent, Some(a));
    assert_eq!(arena.roots(), &[a]);
    assert_eq!(arena.root(), Some(a));
}

#[test]
fn given_two_top_level_nodes_when_querying_root_then_returns_none() {
    let mut arena = TreeArena::new();

    let a = arena.insert_node("a", None);
    let b = arena.insert_node("b", None);

    assert_eq!(arena.roots(), &[a, b]);
    assert_eq!(arena.root(), None);
}

#[test]
fn given_parent_with_children_when_replacing_then_old_children_return_to_top_level() {
    let mut arena = TreeArena::new();

    let a = arena.insert_node("a", None);
    let b = arena.insert_node("b", Some(a));
    let c = arena.insert_node("c", None);

    arena.set_children(a, vec![c]);

    assert_eq!(arena.get_node(a).unwrap().children, vec![c]);
    assert_eq!(arena.get_node(c).unwrap().parent, Some(a));
    assert_eq!(arena.get_node(b).unwrap().parent, None);
    assert_eq!(arena.roots(), &[a, b]);
}

#[test]
fn given_node_mutated_through_arena_when_reading_then_change_is_visible() {
    let mut arena = TreeArena::new();

    let a = arena.insert_node(String::from("a"), None);
    arena.get_node_mut(a).unwrap().record.push('!');

    assert_eq!(arena.get_node(a).unwrap().record, "a!");
}
