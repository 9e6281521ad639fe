//! Depth-bounded subtree copies.
//!
//! Every copy is a fresh [`TagTree`] whose single root is the copied node.
//! Parent links inside a copy only ever point within that copy, and attribute
//! maps are cloned, never shared.

use std::collections::VecDeque;

use thiserror::Error;

use crate::{NodeId, TagTree};

/// Invalid arguments to the clone operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CloneError {
    /// `clone_down` needs at least one level below the starting node.
    #[error("invalid clone depth {depth}: must be at least 1")]
    InvalidDepth {
        /// The rejected depth.
        depth: usize,
    },
    /// `clone_up` was asked to climb past the root.
    #[error("clone depth {requested} exceeds the {available} available ancestors")]
    DepthExceedsAncestors {
        /// Levels asked for.
        requested: usize,
        /// Ancestors the node actually has.
        available: usize,
    },
    /// The starting node is not part of the tree.
    #[error("node {0:?} does not belong to this tree")]
    UnknownNode(NodeId),
}

impl TagTree {
    /// Copy `id` and its descendants down to `max_depth` levels below it.
    ///
    /// With `max_depth == 1` the copy holds the node and its direct children,
    /// whose own children are left out.
    ///
    /// # Errors
    ///
    /// [`CloneError::InvalidDepth`] if `max_depth` is zero, and
    /// [`CloneError::UnknownNode`] if `id` is not in this tree.
    pub fn clone_down(&self, id: NodeId, max_depth: usize) -> Result<Self, CloneError> {
        if max_depth < 1 {
            return Err(CloneError::InvalidDepth { depth: max_depth });
        }
        self.copy_from(id, Some(max_depth))
            .ok_or(CloneError::UnknownNode(id))
    }

    /// Climb `max_depth` ancestors from `id`, then copy that ancestor down far
    /// enough to still include `id`'s level.
    ///
    /// When the climb stops short at a root and `ignore_depth_limit` is set,
    /// the copy starts from that root instead. If no climbing happened at all,
    /// only the node itself is copied, without children.
    ///
    /// # Errors
    ///
    /// [`CloneError::DepthExceedsAncestors`] if the node has fewer than
    /// `max_depth` ancestors and `ignore_depth_limit` is false, and
    /// [`CloneError::UnknownNode`] if `id` is not in this tree.
    pub fn clone_up(
        &self,
        id: NodeId,
        max_depth: usize,
        ignore_depth_limit: bool,
    ) -> Result<Self, CloneError> {
        if self.get(id).is_none() {
            return Err(CloneError::UnknownNode(id));
        }

        let mut top = id;
        let mut climbed = 0;
        while climbed < max_depth {
            match self.parent(top) {
                Some(parent) => {
                    top = parent;
                    climbed += 1;
                }
                None if ignore_depth_limit => break,
                None => {
                    return Err(CloneError::DepthExceedsAncestors {
                        requested: max_depth,
                        available: climbed,
                    });
                }
            }
        }

        self.copy_from(top, Some(climbed))
            .ok_or(CloneError::UnknownNode(top))
    }

    /// An owned copy of the whole subtree rooted at `id`.
    #[must_use]
    pub fn subtree(&self, id: NodeId) -> Option<Self> {
        self.copy_from(id, None)
    }

    /// Breadth-first copy with an explicit layer counter. `None` means no limit.
    fn copy_from(&self, root: NodeId, max_depth: Option<usize>) -> Option<Self> {
        let mut copy = Self::new();
        let copied_root = copy.alloc(self.get(root)?.detached());
        copy.push_root(copied_root);

        let mut queue = VecDeque::from([(root, copied_root, 0_usize)]);
        while let Some((source, target, layer)) = queue.pop_front() {
            if max_depth.is_some_and(|max| layer >= max) {
                continue;
            }
            for &child in self.children(source) {
                let copied_child = copy.alloc(self[child].detached());
                copy.append_child(target, copied_child);
                queue.push_back((child, copied_child, layer + 1));
            }
        }
        Some(copy)
    }
}
