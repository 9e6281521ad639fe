//! Tests for depth-bounded cloning: `clone_down` and `clone_up`.

use marktree_dom::{Attribute, CloneError, NodeId, Position, TagNode, TagTree};
use quickcheck_macros::quickcheck;

fn alloc_tag(tree: &mut TagTree, name: &str) -> NodeId {
    tree.alloc(TagNode::new(name, Position::START))
}

/// `a > b > c`, plus a sibling `d` under `a`.
fn chain() -> (TagTree, NodeId, NodeId, NodeId, NodeId) {
    let mut tree = TagTree::new();
    let a = alloc_tag(&mut tree, "a");
    tree.push_root(a);
    let b = alloc_tag(&mut tree, "b");
    tree.append_child(a, b);
    let c = alloc_tag(&mut tree, "c");
    tree.append_child(b, c);
    let d = alloc_tag(&mut tree, "d");
    tree.append_child(a, d);
    (tree, a, b, c, d)
}

/// Deepest level below the single root of `tree`.
fn height(tree: &TagTree) -> usize {
    let mut deepest = 0;
    let mut pending: Vec<(NodeId, usize)> = tree.roots().iter().map(|&id| (id, 0)).collect();
    while let Some((id, level)) = pending.pop() {
        deepest = deepest.max(level);
        pending.extend(tree.children(id).iter().map(|&child| (child, level + 1)));
    }
    deepest
}

fn only_root(tree: &TagTree) -> NodeId {
    assert_eq!(tree.roots().len(), 1);
    tree.roots()[0]
}

// ========== clone_down ==========

#[test]
fn test_clone_down_one_level() {
    let (tree, a, _, _, _) = chain();
    let copy = tree.clone_down(a, 1).unwrap();

    let root = only_root(&copy);
    assert_eq!(copy[root].name, "a");
    let names: Vec<&str> = copy
        .children(root)
        .iter()
        .map(|&id| copy[id].name.as_str())
        .collect();
    assert_eq!(names, vec!["b", "d"]);

    let b = copy.children(root)[0];
    assert!(copy.children(b).is_empty());
    assert_eq!(copy.parent(b), Some(root));
}

#[test]
fn test_clone_down_full_depth() {
    let (tree, a, _, _, _) = chain();
    let copy = tree.clone_down(a, 10).unwrap();
    assert_eq!(copy.len(), 4);
    assert_eq!(height(&copy), 2);
}

#[test]
fn test_clone_down_zero_is_invalid() {
    let (tree, a, _, _, _) = chain();
    assert_eq!(
        tree.clone_down(a, 0),
        Err(CloneError::InvalidDepth { depth: 0 })
    );
}

#[test]
fn test_clone_down_unknown_node() {
    let (tree, _, _, _, _) = chain();
    assert_eq!(
        tree.clone_down(NodeId(99), 1),
        Err(CloneError::UnknownNode(NodeId(99)))
    );
}

#[test]
fn test_clone_down_copies_attributes_independently() {
    let (mut tree, a, _, _, _) = chain();
    tree.get_mut(a).unwrap().set_attribute("id", "top");

    let mut copy = tree.clone_down(a, 1).unwrap();
    let root = only_root(&copy);
    copy.get_mut(root).unwrap().set_attribute("id", "changed");

    assert_eq!(tree[a].attribute("id"), Some(&Attribute::new("id", "top")));
    assert_eq!(copy[root].attribute("id").unwrap().value, "changed");
}

#[test]
fn test_clone_down_root_has_no_parent() {
    let (tree, _, b, _, _) = chain();
    let copy = tree.clone_down(b, 1).unwrap();
    let root = only_root(&copy);
    assert_eq!(copy[root].name, "b");
    assert_eq!(copy.parent(root), None);
}

// ========== clone_up ==========

#[test]
fn test_clone_up_one_level() {
    let (tree, _, _, c, _) = chain();
    let copy = tree.clone_up(c, 1, false).unwrap();

    let root = only_root(&copy);
    assert_eq!(copy[root].name, "b");
    let children = copy.children(root);
    assert_eq!(children.len(), 1);
    assert_eq!(copy[children[0]].name, "c");
}

#[test]
fn test_clone_up_includes_original_depth_and_siblings() {
    let (tree, _, _, c, _) = chain();
    let copy = tree.clone_up(c, 2, false).unwrap();

    let root = only_root(&copy);
    assert_eq!(copy[root].name, "a");
    assert_eq!(height(&copy), 2);
    assert_eq!(copy.len(), 4);
}

#[test]
fn test_clone_up_zero_copies_only_the_node() {
    let (tree, a, _, _, _) = chain();
    let copy = tree.clone_up(a, 0, false).unwrap();
    let root = only_root(&copy);
    assert_eq!(copy[root].name, "a");
    assert!(copy.children(root).is_empty());
}

#[test]
fn test_clone_up_exceeding_ancestors() {
    let (tree, _, b, _, _) = chain();
    assert_eq!(
        tree.clone_up(b, 3, false),
        Err(CloneError::DepthExceedsAncestors {
            requested: 3,
            available: 1
        })
    );
}

#[test]
fn test_clone_up_ignore_limit_stops_at_root() {
    let (tree, _, b, _, _) = chain();
    let copy = tree.clone_up(b, 3, true).unwrap();
    let root = only_root(&copy);
    assert_eq!(copy[root].name, "a");
    assert_eq!(height(&copy), 1);
}

#[test]
fn test_clone_up_ignore_limit_on_root_copies_single_node() {
    let (tree, a, _, _, _) = chain();
    let copy = tree.clone_up(a, 5, true).unwrap();
    assert_eq!(copy.len(), 1);
}

// ========== properties ==========

/// Build a linear chain of `len` nodes and clone the root down `depth` levels.
#[quickcheck]
fn prop_clone_down_never_exceeds_depth(len: u8, depth: u8) -> bool {
    let len = usize::from(len % 16) + 1;
    let depth = usize::from(depth % 16) + 1;

    let mut tree = TagTree::new();
    let root = alloc_tag(&mut tree, "n0");
    tree.push_root(root);
    let mut last = root;
    for i in 1..len {
        let next = alloc_tag(&mut tree, &format!("n{i}"));
        tree.append_child(last, next);
        last = next;
    }

    let copy = tree.clone_down(root, depth).unwrap();
    height(&copy) == depth.min(len - 1) && copy.len() == (depth + 1).min(len)
}
