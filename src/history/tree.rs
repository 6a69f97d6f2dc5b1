//! Arena-based history tree with a live cursor.
//!
//! The tree records every move ever played in a game, including abandoned
//! alternatives, as a tree of [`MoveNode`]s. A live cursor marks the node
//! the game session is currently looking at; stepping backward moves the
//! cursor, it never deletes nodes.
//!
//! The **main line** is the path from root obtained by repeatedly following
//! each node's `selected` child. Inserting a new continuation re-points
//! `selected` at it ("latest wins"), demoting the previous continuation to
//! a side line.

use serde::{Deserialize, Serialize};

use super::node::{MoveNode, NodeId};
use crate::core::{BoardState, MoveRecord};

/// The variation tree of one game.
///
/// Nodes are stored in a flat vector and referenced by `NodeId` indices.
/// Cloning the tree deep-copies the arena; ids, selected indices, and
/// snapshots are preserved and the clone's cursor sits on the structurally
/// equivalent node.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HistoryTree {
    /// All nodes in the tree. Index 0 is always the root sentinel.
    nodes: Vec<MoveNode>,

    /// The root node ID (always 0).
    root: NodeId,

    /// The live cursor. Always a valid id; starts at root.
    cursor: NodeId,
}

impl HistoryTree {
    /// Create a tree holding only the root sentinel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![MoveNode::root()],
            root: NodeId::new(0),
            cursor: NodeId::new(0),
        }
    }

    /// Get the root node ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get the cursor's node ID.
    #[inline]
    #[must_use]
    pub fn cursor(&self) -> NodeId {
        self.cursor
    }

    /// Get a node by ID, if it exists in this tree.
    ///
    /// Ids are arena indices and nodes are never removed, so this is a
    /// bounds check rather than a search.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&MoveNode> {
        self.nodes.get(id.0 as usize)
    }

    /// Get a node by ID. Panics on a foreign id; internal callers only
    /// hold ids produced by this tree.
    #[inline]
    #[must_use]
    pub(crate) fn node(&self, id: NodeId) -> &MoveNode {
        &self.nodes[id.0 as usize]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut MoveNode {
        &mut self.nodes[id.0 as usize]
    }

    /// Number of nodes in the tree, root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds no moves (root only).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Iterate over all nodes in id order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &MoveNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }

    // === Insertion ===

    /// Record a move played from the cursor position.
    ///
    /// If the cursor already has a child with the same notation, the cursor
    /// moves to it and no duplicate is created; its snapshot is backfilled
    /// if missing and one is supplied. Otherwise a new child is appended and
    /// becomes both the cursor and the main-line continuation — the most
    /// recently played move wins the main line, demoting earlier children
    /// to side lines.
    ///
    /// Returns the id of the (new or existing) child.
    pub fn add_move(&mut self, record: MoveRecord, snapshot: Option<BoardState>) -> NodeId {
        let cursor = self.cursor;

        let existing = self
            .node(cursor)
            .children
            .iter()
            .copied()
            .find(|&child| self.node(child).record.notation() == record.notation());
        if let Some(child) = existing {
            if let Some(snapshot) = snapshot {
                let node = self.node_mut(child);
                if node.snapshot.is_none() {
                    node.snapshot = Some(snapshot);
                }
            }
            self.cursor = child;
            return child;
        }

        let id = NodeId::new(self.nodes.len() as u32);
        let mut node = MoveNode::new(cursor, record);
        node.snapshot = snapshot;
        self.nodes.push(node);

        let parent = self.node_mut(cursor);
        parent.children.push(id);
        parent.selected = parent.children.len() - 1;

        self.cursor = id;
        id
    }

    // === Navigation ===

    /// Move the cursor to its parent. No-op at root.
    ///
    /// Returns whether the cursor moved.
    pub fn navigate_back(&mut self) -> bool {
        let parent = self.node(self.cursor).parent;
        if parent.is_none() {
            return false;
        }
        self.cursor = parent;
        true
    }

    /// Move the cursor to its selected child. No-op at a childless node.
    ///
    /// Returns whether the cursor moved.
    pub fn navigate_forward(&mut self) -> bool {
        match self.node(self.cursor).selected_child() {
            Some(child) => {
                self.cursor = child;
                true
            }
            None => false,
        }
    }

    /// Move the cursor to a specific node.
    ///
    /// Returns false (cursor unchanged) if the id is unknown.
    pub fn navigate_to_node(&mut self, id: NodeId) -> bool {
        if (id.0 as usize) < self.nodes.len() {
            self.cursor = id;
            true
        } else {
            false
        }
    }

    /// Reset the cursor onto the main line: follow `selected` from root
    /// `index + 1` times (`index = -1` puts the cursor on the root).
    ///
    /// Always walks the main line regardless of where the cursor was;
    /// saturates at the end of the line.
    pub fn navigate_to_index(&mut self, index: isize) {
        self.cursor = self.root;
        for _ in 0..index.saturating_add(1).max(0) {
            if !self.navigate_forward() {
                break;
            }
        }
    }

    // === Queries ===

    /// Move records from the first move down to the cursor, in order.
    /// The root sentinel is excluded.
    #[must_use]
    pub fn history_line(&self) -> Vec<MoveRecord> {
        let mut records = Vec::new();
        let mut id = self.cursor;
        while !id.is_none() {
            let node = self.node(id);
            if !node.is_root() {
                records.push(node.record.clone());
            }
            id = node.parent;
        }
        records.reverse();
        records
    }

    /// Node ids of the main line, root excluded, in play order.
    #[must_use]
    pub fn main_line(&self) -> Vec<NodeId> {
        let mut line = Vec::new();
        let mut current = self.root;
        while let Some(child) = self.node(current).selected_child() {
            line.push(child);
            current = child;
        }
        line
    }

    /// The node a view is showing: `None` means the live cursor, a concrete
    /// id looks that node up.
    #[must_use]
    pub fn view_node(&self, target: Option<NodeId>) -> Option<&MoveNode> {
        match target {
            None => Some(self.node(self.cursor)),
            Some(id) => self.get(id),
        }
    }

    /// The snapshot a view is showing, if that node has been hydrated.
    #[must_use]
    pub fn view_state(&self, target: Option<NodeId>) -> Option<&BoardState> {
        self.view_node(target)?.snapshot.as_ref()
    }

    // === Owner initialization ===

    /// Attach the initial position to the root sentinel.
    pub fn init_root_snapshot(&mut self, state: BoardState) {
        self.node_mut(self.root).snapshot = Some(state);
    }

    /// Attach or replace the annotation on a node.
    ///
    /// Returns false if the id is unknown.
    pub fn annotate(&mut self, id: NodeId, text: impl Into<String>) -> bool {
        match self.nodes.get_mut(id.0 as usize) {
            Some(node) => {
                node.annotation = Some(text.into());
                true
            }
            None => false,
        }
    }
}

impl Default for HistoryTree {
    fn default() -> Self {
        Self::new()
    }
}
