//! Hydration: replaying a skeletal tree into validated snapshots.
//!
//! A depth-first walk over the tree (explicit stack; import depth is
//! untrusted) decodes each node's notation, applies it to the parent's
//! snapshot through the rules engine, and attaches the successor state.
//! A node that fails to decode or is rejected by the engine truncates its
//! own branch there: nothing below it is visited, everything beside it
//! hydrates normally, and snapshots already attached stay attached.

use log::warn;
use thiserror::Error;

use crate::core::{BoardState, DecodeError, GameAction};
use crate::history::{HistoryTree, NodeId};
use crate::rules::{RulesEngine, RulesError};
use crate::setup::Setup;

/// Why one node failed to hydrate.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum HydrationError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Rules(#[from] RulesError),
}

/// One failed node and the branch-truncating reason.
#[derive(Clone, Debug)]
pub struct HydrationFailure {
    pub node: NodeId,
    pub notation: String,
    pub error: HydrationError,
}

/// Outcome of a hydration pass.
#[derive(Clone, Debug, Default)]
pub struct HydrationReport {
    /// Nodes carrying a snapshot after the pass (root excluded).
    pub hydrated: usize,
    /// Nodes whose branches were truncated, in visit order.
    pub failures: Vec<HydrationFailure>,
}

impl HydrationReport {
    /// Whether every reachable node hydrated.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Hydrate `tree` from `setup`, validating every branch against `rules`.
///
/// The root receives the setup's initial state; every other reachable node
/// receives the state produced by replaying its notation, and its record
/// is resolved with the engine's color/phase queries. Nodes that already
/// carry a snapshot keep it.
pub fn hydrate<R: RulesEngine>(
    tree: &mut HistoryTree,
    setup: &Setup,
    rules: &R,
) -> HydrationReport {
    tree.init_root_snapshot(setup.initial_state());

    let mut report = HydrationReport::default();
    let mut stack: Vec<NodeId> = Vec::new();
    push_children(tree, tree.root(), &mut stack);

    while let Some(id) = stack.pop() {
        let parent = tree.node(id).parent;
        // The parent hydrated (or we would not have pushed this node).
        let parent_state = match tree.node(parent).snapshot.clone() {
            Some(state) => state,
            None => continue,
        };

        if tree.node(id).snapshot.is_none() {
            let notation = tree.node(id).record.notation().to_string();
            match replay(rules, &parent_state, &notation) {
                Ok(mut state) => {
                    state.record_notation(&notation);
                    tree.node_mut(id).snapshot = Some(state);
                }
                Err(error) => {
                    warn!("hydration truncated branch at {id} ('{notation}'): {error}");
                    report.failures.push(HydrationFailure {
                        node: id,
                        notation,
                        error,
                    });
                    continue;
                }
            }
        }

        let record = tree.node(id).record.resolve(
            rules.current_player(parent_state.ply),
            rules.turn_phase(parent_state.ply),
        );
        tree.node_mut(id).record = record;

        report.hydrated += 1;
        push_children(tree, id, &mut stack);
    }

    report
}

/// Decode one notation token and apply it to `state`.
///
/// Attacks dispatch on the target square: a castle there makes this a
/// castle attack.
fn replay<R: RulesEngine>(
    rules: &R,
    state: &BoardState,
    notation: &str,
) -> Result<BoardState, HydrationError> {
    let action = GameAction::decode(notation)?;
    let next = match action {
        GameAction::Move { from, to } => rules.apply_move(state, from, to)?,
        GameAction::Attack { from, to } => {
            if state.castle_at(to).is_some() {
                rules.apply_castle_attack(state, from, to)?
            } else {
                rules.apply_attack(state, from, to)?
            }
        }
        GameAction::Recruit { at, unit } => rules.recruit_piece(state, at, unit)?,
        GameAction::Pledge { pledge, at } => rules.pledge(state, pledge, at)?,
        GameAction::Ability { ability, at } => rules.activate_ability(state, ability, at)?,
        GameAction::Pass => rules.pass_turn(state)?,
    };
    Ok(next)
}

fn push_children(tree: &HistoryTree, id: NodeId, stack: &mut Vec<NodeId>) {
    let node = tree.node(id);
    stack.extend(node.children.iter().rev().copied());
}
