//! Open set: a min-heap ordered by `f` plus a key index.
//!
//! Relaxing a node that is already open pushes a fresh heap entry instead of
//! re-sorting the heap in place. Each push stamps the index slot with a new
//! sequence number, and `pop_min` discards any entry whose sequence no longer
//! matches its slot. The heap may therefore hold more entries than there are
//! open nodes; [`Frontier::len`] reports open nodes only.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::node::NodeId;

/// Ordering among open nodes with equal `f`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Smaller `h` first, then insertion order
    #[default]
    LowestHeuristic,
    /// Insertion order only
    Fifo,
}

#[derive(Debug)]
struct HeapEntry<K> {
    f: f64,
    /// `h` under [`TieBreak::LowestHeuristic`], zero under [`TieBreak::Fifo`]
    rank: f64,
    seq: u64,
    key: K,
    id: NodeId,
}

impl<K> PartialEq for HeapEntry<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K> Eq for HeapEntry<K> {}

impl<K> Ord for HeapEntry<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.rank.total_cmp(&self.rank))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<K> PartialOrd for HeapEntry<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Clone, Copy, Debug)]
struct OpenSlot {
    id: NodeId,
    seq: u64,
}

/// Open nodes of one search, keyed by identity.
#[derive(Debug)]
pub struct Frontier<K> {
    heap: BinaryHeap<HeapEntry<K>>,
    index: HashMap<K, OpenSlot>,
    tie_break: TieBreak,
    next_seq: u64,
    stale_discarded: usize,
}

impl<K: Eq + Hash + Clone> Frontier<K> {
    pub fn new(tie_break: TieBreak) -> Self {
        Self {
            heap: BinaryHeap::new(),
            index: HashMap::new(),
            tie_break,
            next_seq: 0,
            stale_discarded: 0,
        }
    }

    /// Queue `id` under `key` with the given scores.
    ///
    /// If `key` is already open, its previous heap entry becomes stale.
    pub fn push(&mut self, key: K, id: NodeId, f: f64, h: f64) {
        let seq = self.next_seq;
        self.next_seq += 1;

        let rank = match self.tie_break {
            TieBreak::LowestHeuristic => h,
            TieBreak::Fifo => 0.0,
        };

        self.index.insert(key.clone(), OpenSlot { id, seq });
        self.heap.push(HeapEntry {
            f,
            rank,
            seq,
            key,
            id,
        });
    }

    /// Remove and return the open node with the smallest score.
    pub fn pop_min(&mut self) -> Option<(K, NodeId)> {
        while let Some(entry) = self.heap.pop() {
            match self.index.get(&entry.key) {
                Some(slot) if slot.seq == entry.seq => {
                    self.index.remove(&entry.key);
                    return Some((entry.key, entry.id));
                }
                _ => self.stale_discarded += 1,
            }
        }
        None
    }

    /// Node currently open under `key`.
    #[inline]
    pub fn get(&self, key: &K) -> Option<NodeId> {
        self.index.get(key).map(|slot| slot.id)
    }

    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Number of open nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Heap entries dropped because a later push superseded them.
    pub fn stale_discarded(&self) -> usize {
        self.stale_discarded
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Node, NodeArena};

    fn ids(n: usize) -> Vec<NodeId> {
        let mut arena = NodeArena::new();
        (0..n).map(|i| arena.alloc(Node::start(i, (), 0.0))).collect()
    }

    #[test]
    fn test_pops_in_f_order() {
        let ids = ids(3);
        let mut frontier = Frontier::new(TieBreak::default());
        frontier.push("b", ids[1], 5.0, 1.0);
        frontier.push("a", ids[0], 2.0, 1.0);
        frontier.push("c", ids[2], 9.0, 1.0);

        assert_eq!(frontier.len(), 3);
        assert_eq!(frontier.pop_min(), Some(("a", ids[0])));
        assert_eq!(frontier.pop_min(), Some(("b", ids[1])));
        assert_eq!(frontier.pop_min(), Some(("c", ids[2])));
        assert_eq!(frontier.pop_min(), None);
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_lowest_heuristic_breaks_ties() {
        let ids = ids(3);
        let mut frontier = Frontier::new(TieBreak::LowestHeuristic);
        frontier.push("far", ids[0], 4.0, 3.0);
        frontier.push("near", ids[1], 4.0, 1.0);
        frontier.push("near-late", ids[2], 4.0, 1.0);

        assert_eq!(frontier.pop_min().map(|(k, _)| k), Some("near"));
        assert_eq!(frontier.pop_min().map(|(k, _)| k), Some("near-late"));
        assert_eq!(frontier.pop_min().map(|(k, _)| k), Some("far"));
    }

    #[test]
    fn test_fifo_breaks_ties() {
        let ids = ids(3);
        let mut frontier = Frontier::new(TieBreak::Fifo);
        frontier.push("first", ids[0], 4.0, 3.0);
        frontier.push("second", ids[1], 4.0, 1.0);
        frontier.push("third", ids[2], 4.0, 0.0);

        assert_eq!(frontier.pop_min().map(|(k, _)| k), Some("first"));
        assert_eq!(frontier.pop_min().map(|(k, _)| k), Some("second"));
        assert_eq!(frontier.pop_min().map(|(k, _)| k), Some("third"));
    }

    #[test]
    fn test_repush_discards_stale_entry() {
        let ids = ids(2);
        let mut frontier = Frontier::new(TieBreak::default());
        frontier.push("x", ids[0], 10.0, 1.0);
        frontier.push("y", ids[1], 6.0, 1.0);
        // Cheaper route to x found
        frontier.push("x", ids[0], 3.0, 1.0);

        assert_eq!(frontier.len(), 2);
        assert_eq!(frontier.pop_min(), Some(("x", ids[0])));
        assert_eq!(frontier.pop_min(), Some(("y", ids[1])));
        // The old x entry (f = 10) is skipped rather than returned again
        assert_eq!(frontier.pop_min(), None);
        assert_eq!(frontier.stale_discarded(), 1);
    }

    #[test]
    fn test_lookup_by_key() {
        let ids = ids(1);
        let mut frontier = Frontier::new(TieBreak::Fifo);
        assert!(!frontier.contains(&7));
        frontier.push(7, ids[0], 1.0, 1.0);
        assert!(frontier.contains(&7));
        assert_eq!(frontier.get(&7), Some(ids[0]));

        frontier.pop_min();
        assert_eq!(frontier.get(&7), None);
    }
}
