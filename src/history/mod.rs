//! The variation tree: every move ever played, including abandoned lines.
//!
//! ## Overview
//!
//! - Arena storage: nodes live in a flat `Vec`, referenced by `NodeId`
//!   indices; the parent back-reference is a plain id, so there is no
//!   ownership cycle.
//! - A live cursor tracks the position the game session is looking at;
//!   stepping backward never deletes nodes.
//! - The main line follows each node's `selected` child; inserting a new
//!   continuation re-points it ("latest wins").

pub mod node;
pub mod tree;

pub use node::{MoveNode, NodeId};
pub use tree::HistoryTree;
