//! Search node records and the per-call arena that owns them.

use std::ops::{Index, IndexMut};

/// Index of a node inside a [`NodeArena`].
///
/// Parent links are stored as ids rather than references, so the arena is
/// the single owner of every node discovered during one search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in its arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A discovered state and its search metadata.
#[derive(Clone, Debug)]
pub struct Node<S, K> {
    /// Identity key of `data`
    pub key: K,
    /// Caller state
    pub data: S,
    /// Best known cost from the start
    pub g: f64,
    /// Heuristic estimate to the goal
    pub h: f64,
    /// Ordering score, always `g + h`
    pub f: f64,
    /// Node that produced the best known path here (`None` for the start)
    pub parent: Option<NodeId>,
}

impl<S, K> Node<S, K> {
    /// Create the start node: zero cost, no parent.
    pub fn start(key: K, data: S, h: f64) -> Self {
        Self {
            key,
            data,
            g: 0.0,
            h,
            f: h,
            parent: None,
        }
    }

    /// Create a node discovered from `parent`.
    pub fn discovered(key: K, data: S, parent: NodeId, g: f64, h: f64) -> Self {
        Self {
            key,
            data,
            g,
            h,
            f: g + h,
            parent: Some(parent),
        }
    }

    /// Record a better path through `parent`.
    #[inline]
    pub fn relax(&mut self, parent: NodeId, g: f64, h: f64) {
        self.parent = Some(parent);
        self.g = g;
        self.h = h;
        self.f = g + h;
    }

    /// True for the start node.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Append-only storage for every node created during one search.
#[derive(Debug)]
pub struct NodeArena<S, K> {
    nodes: Vec<Node<S, K>>,
}

impl<S, K> Default for NodeArena<S, K> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<S, K> NodeArena<S, K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a node and return its id.
    pub fn alloc(&mut self, node: Node<S, K>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&Node<S, K>> {
        self.nodes.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all nodes in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node<S, K>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId(i), node))
    }
}

impl<S, K> Index<NodeId> for NodeArena<S, K> {
    type Output = Node<S, K>;

    #[inline]
    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.index()]
    }
}

impl<S, K> IndexMut<NodeId> for NodeArena<S, K> {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        &mut self.nodes[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_node() {
        let node = Node::start("a", 'a', 3.0);
        assert_eq!(node.g, 0.0);
        assert_eq!(node.f, 3.0);
        assert!(node.is_root());
    }

    #[test]
    fn test_relax_keeps_f_consistent() {
        let mut arena = NodeArena::new();
        let root = arena.alloc(Node::start(0, 0, 4.0));
        let child = arena.alloc(Node::discovered(1, 1, root, 5.0, 3.0));
        assert_eq!(arena[child].f, 8.0);

        arena[child].relax(root, 1.0, 2.5);
        assert_eq!(arena[child].g, 1.0);
        assert_eq!(arena[child].h, 2.5);
        assert_eq!(arena[child].f, 3.5);
        assert_eq!(arena[child].parent, Some(root));
    }

    #[test]
    fn test_arena_ids_are_sequential() {
        let mut arena = NodeArena::new();
        let a = arena.alloc(Node::start('a', (), 0.0));
        let b = arena.alloc(Node::start('b', (), 0.0));
        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(arena.len(), 2);
        assert!(arena.get(NodeId(2)).is_none());
        assert_eq!(arena.iter().map(|(_, n)| n.key).collect::<Vec<_>>(), ['a', 'b']);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_ids_cover_full_index_range() {
        // Ids past the 32-bit range must not wrap onto earlier nodes
        let past_u32 = u32::MAX as usize + 1;
        let id = NodeId(past_u32);
        assert_eq!(id.index(), past_u32);
        assert_ne!(id, NodeId(0));
        assert!(NodeId(0) < id);
    }
}
