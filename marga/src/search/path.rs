//! Path reconstruction from parent links.

use crate::node::{NodeArena, NodeId};

/// Walk parent links from `terminal` back to the start and return the states
/// in start-to-terminal order.
pub(crate) fn reconstruct_path<S: Clone, K>(arena: &NodeArena<S, K>, terminal: NodeId) -> Vec<S> {
    let mut path = Vec::new();
    let mut current = Some(terminal);

    while let Some(id) = current {
        let node = &arena[id];
        path.push(node.data.clone());
        current = node.parent;
        // A chain longer than the arena would mean a parent cycle
        debug_assert!(path.len() <= arena.len(), "parent chain is cyclic");
    }

    path.reverse();
    path
}
