//! Closed set of expanded keys.

use std::collections::HashSet;
use std::hash::Hash;

/// Keys that have been expanded. Append-only for the duration of a search.
#[derive(Debug)]
pub struct VisitedSet<K> {
    keys: HashSet<K>,
}

impl<K: Eq + Hash> Default for VisitedSet<K> {
    fn default() -> Self {
        Self {
            keys: HashSet::new(),
        }
    }
}

impl<K: Eq + Hash> VisitedSet<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Close `key`. Returns false if it was already closed.
    #[inline]
    pub fn mark(&mut self, key: K) -> bool {
        self.keys.insert(key)
    }

    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_is_idempotent() {
        let mut visited = VisitedSet::new();
        assert!(visited.mark("a"));
        assert!(!visited.mark("a"));
        assert!(visited.contains(&"a"));
        assert!(!visited.contains(&"b"));
        assert_eq!(visited.len(), 1);
    }
}
