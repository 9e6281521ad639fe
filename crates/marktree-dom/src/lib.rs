//! Tag tree produced by the marktree parser.
//!
//! # Design
//!
//! The tree uses arena allocation with [`NodeId`] indices for all relationships.
//! A node's `parent` is a plain index, so the only owning relationship is the
//! arena itself; the `children` list is the ordered record of which nodes hang
//! below which. This gives O(1) upward and downward navigation without
//! reference cycles between parents and children.
//!
//! Top-level nodes (those without a parent) are tracked separately in
//! [`TagTree::roots`], in document order. A document may have any number of
//! roots, including none.

use std::fmt;
use std::ops::Index;

mod attribute;
mod clone;

pub use attribute::{Attribute, AttributesMap};
pub use clone::CloneError;

/// A type-safe index into a [`TagTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// A location in the source text.
///
/// `line` and `column` are 1-based and count characters; `offset` is the
/// 0-based byte offset into the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, in characters.
    pub column: usize,
    /// Byte offset from the start of the input.
    pub offset: usize,
}

impl Position {
    /// The position of the first character of any input.
    pub const START: Self = Self {
        line: 1,
        column: 1,
        offset: 0,
    };

    /// Create a position from its parts.
    #[must_use]
    pub const fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A single tag in the tree.
///
/// The link fields are private: they are only ever set through [`TagTree`] so
/// that a node's parent always lists the node among its children.
#[derive(Debug, Clone, PartialEq)]
pub struct TagNode {
    /// Tag name, with the case it was written in.
    pub name: String,
    /// Attributes keyed by name; the last occurrence of a name wins.
    pub attributes: AttributesMap,
    /// Literal text found directly inside the tag, trimmed and concatenated.
    pub inner_text: String,
    /// Raw markup between the tag's open and close, or the literal body of a
    /// raw-text element.
    pub inner_markup: String,
    /// Set for `<tag/>` syntax and for raw-text elements. Never has children.
    pub is_self_closing: bool,
    /// Where the opening `<` was found.
    pub position: Position,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl TagNode {
    /// Create a detached node with no attributes, content, or children.
    #[must_use]
    pub fn new(name: impl Into<String>, position: Position) -> Self {
        Self {
            name: name.into(),
            attributes: AttributesMap::new(),
            inner_text: String::new(),
            inner_markup: String::new(),
            is_self_closing: false,
            position,
            parent: None,
            children: Vec::new(),
        }
    }

    /// The node this one hangs below, if any.
    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Child ids in document order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// A copy of this node's own data with no links.
    #[must_use]
    pub fn detached(&self) -> Self {
        Self {
            name: self.name.clone(),
            attributes: self.attributes.clone(),
            inner_text: self.inner_text.clone(),
            inner_markup: self.inner_markup.clone(),
            is_self_closing: self.is_self_closing,
            position: self.position,
            parent: None,
            children: Vec::new(),
        }
    }
}

/// Arena-based tag tree.
///
/// All nodes live in one vector and refer to each other by [`NodeId`].
/// Detached nodes (see [`TagTree::remove_child`]) stay in the arena and remain
/// addressable; they are simply no longer reachable from [`TagTree::roots`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagTree {
    nodes: Vec<TagNode>,
    roots: Vec<NodeId>,
}

impl TagTree {
    /// Create an empty tree.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            roots: Vec::new(),
        }
    }

    /// Top-level nodes in document order.
    #[must_use]
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Get a node by its ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&TagNode> {
        self.nodes.get(id.0)
    }

    /// Get a mutable reference to a node by its ID.
    ///
    /// Only the node's own data is reachable this way; links are managed by
    /// the tree.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut TagNode> {
        self.nodes.get_mut(id.0)
    }

    /// Number of nodes in the arena, detached ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if no node was ever allocated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a node and return its ID.
    ///
    /// Any links the node carried are dropped; the node is not yet attached.
    pub fn alloc(&mut self, mut node: TagNode) -> NodeId {
        node.parent = None;
        node.children.clear();
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Append an unattached node to the list of roots.
    pub fn push_root(&mut self, id: NodeId) {
        self.roots.push(id);
    }

    /// Appends `child` as the last child of `parent` and sets its back-reference.
    ///
    /// # Panics
    ///
    /// Panics if either id does not belong to this tree.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        debug_assert!(
            !self.nodes[parent.0].is_self_closing,
            "self-closing nodes cannot have children"
        );
        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);
    }

    /// Get the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Get all children of a node.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map_or(&[], |n| n.children.as_slice())
    }

    /// Detach `child` from `parent`.
    ///
    /// Returns `false` (and changes nothing) when `child` is not among
    /// `parent`'s children. On success the child's parent link is cleared and
    /// its subtree stays intact; use [`TagTree::subtree`] to take an owned copy.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        let Some(index) = self
            .get(parent)
            .and_then(|n| n.children.iter().position(|&c| c == child))
        else {
            return false;
        };

        let _detached = self.nodes[parent.0].children.remove(index);
        self.nodes[child.0].parent = None;
        true
    }

    /// Check if `descendant` is a descendant of `ancestor`.
    #[must_use]
    pub fn is_descendant_of(&self, descendant: NodeId, ancestor: NodeId) -> bool {
        self.ancestors(descendant).any(|id| id == ancestor)
    }

    /// Iterate over all ancestors of a node, from parent to root.
    #[must_use]
    pub fn ancestors(&self, id: NodeId) -> AncestorIterator<'_> {
        AncestorIterator {
            tree: self,
            current: self.parent(id),
        }
    }

    /// Number of ancestors above `id` (0 for a root or a detached node).
    #[must_use]
    pub fn depth(&self, id: NodeId) -> usize {
        self.ancestors(id).count()
    }

    /// Find the first node named `name` in document order, searching every root.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<NodeId> {
        let mut pending: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = pending.pop() {
            if self[id].name == name {
                return Some(id);
            }
            pending.extend(self.children(id).iter().rev().copied());
        }
        None
    }
}

impl Index<NodeId> for TagTree {
    type Output = TagNode;

    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0]
    }
}

/// Iterator over ancestors of a node.
pub struct AncestorIterator<'a> {
    tree: &'a TagTree,
    current: Option<NodeId>,
}

impl Iterator for AncestorIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.tree.parent(id);
        Some(id)
    }
}
