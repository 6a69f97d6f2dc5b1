//! History tree node and id types.
//!
//! Nodes are arena-allocated: ids are indices into the tree's flat node
//! store, parents are plain (non-owning) ids, and children are owned ids.
//! This keeps the parent back-reference from forming an ownership cycle.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{BoardState, MoveRecord};

/// Index into the history tree's node arena.
///
/// Ids are monotonic and never reused; nodes are never deleted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// A node in the history tree.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MoveNode {
    /// Parent node (NONE for root). Non-owning back-reference.
    pub parent: NodeId,

    /// The move that produced this node (sentinel record for root).
    pub record: MoveRecord,

    /// Children in insertion order; each continuation ever played from here.
    /// SmallVec optimizes for the common case of few variations.
    pub children: SmallVec<[NodeId; 4]>,

    /// Index into `children` naming the main-line continuation.
    /// Meaningful only when `children` is non-empty, and always a valid
    /// index then.
    pub selected: usize,

    /// Rules-validated position after this move; attached lazily by
    /// hydration (or supplied at insertion during live play).
    pub snapshot: Option<BoardState>,

    /// Free-form commentary on this move.
    pub annotation: Option<String>,
}

impl MoveNode {
    /// Create a new node under `parent`.
    #[must_use]
    pub fn new(parent: NodeId, record: MoveRecord) -> Self {
        Self {
            parent,
            record,
            children: SmallVec::new(),
            selected: 0,
            snapshot: None,
            annotation: None,
        }
    }

    /// Create the root sentinel node.
    #[must_use]
    pub fn root() -> Self {
        Self::new(NodeId::NONE, MoveRecord::sentinel())
    }

    /// Whether this is the root sentinel.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Whether this node has any continuation.
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Whether this node has side lines (more than one child).
    #[must_use]
    pub fn has_variations(&self) -> bool {
        self.children.len() > 1
    }

    /// The main-line continuation, if any.
    #[must_use]
    pub fn selected_child(&self) -> Option<NodeId> {
        self.children.get(self.selected).copied()
    }

    /// Children that are currently side lines, in insertion order.
    pub fn side_children(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.children
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != self.selected)
            .map(|(_, &id)| id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_sentinel() {
        assert!(NodeId::NONE.is_none());
        assert!(!NodeId::new(0).is_none());
        assert_eq!(format!("{}", NodeId::new(5)), "NodeId(5)");
        assert_eq!(format!("{}", NodeId::NONE), "NodeId(NONE)");
    }

    #[test]
    fn test_root_sentinel() {
        let root = MoveNode::root();
        assert!(root.is_root());
        assert!(!root.has_children());
        assert_eq!(root.record.notation(), "");
        assert!(root.snapshot.is_none());
        assert_eq!(root.selected_child(), None);
    }

    #[test]
    fn test_side_children_skips_selected() {
        let mut node = MoveNode::root();
        node.children.push(NodeId::new(1));
        node.children.push(NodeId::new(2));
        node.children.push(NodeId::new(3));
        node.selected = 1;

        let sides: Vec<_> = node.side_children().collect();
        assert_eq!(sides, vec![NodeId::new(1), NodeId::new(3)]);
    }
}
