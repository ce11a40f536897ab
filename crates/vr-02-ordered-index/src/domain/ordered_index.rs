//! Randomized multi-level ordered index (skip list)
//!
//! Nodes live in an arena (`Vec<Node<V>>`) and link to each other by
//! [`NodeId`]. The sentinel head carries no key or payload, so only its
//! forward array is stored; it always has `max_level + 1` slots.
//!
//! ```text
//! level 2: HEAD ───────────────────────→ 30001 ──→ ∅
//! level 1: HEAD ──────────→ 20003 ─────→ 30001 ──→ ∅
//! level 0: HEAD ──→ 10002 → 20003 ─────→ 30001 ──→ ∅
//! ```
//!
//! INVARIANTS:
//! - Level 0 holds every key in strictly ascending byte order
//! - Each higher level is an order-preserving subsequence of level 0
//! - `current_level <= max_level`
//! - Insert either splices the node in at every level or changes nothing
//!
//! Teardown is `Drop`: the arena owns every node, its payload and its forward
//! array, so releasing it releases everything in one step.

use std::fmt;

use super::config::IndexConfig;
use super::level::{CoinFlipLevels, LevelGenerator};
use crate::error::IndexError;

/// Arena address of a data node
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A position the search walk can stand on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slot {
    Head,
    Node(NodeId),
}

#[derive(Debug)]
struct Node<V> {
    key: String,
    payload: V,
    /// `forward.len() == level + 1`; `None` means no successor.
    forward: Vec<Option<NodeId>>,
}

/// Borrowed view of a node returned by insert, search and traversal
#[derive(Debug)]
pub struct NodeRef<'a, V> {
    id: NodeId,
    key: &'a str,
    payload: &'a V,
    level: usize,
}

impl<V> Clone for NodeRef<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for NodeRef<'_, V> {}

impl<'a, V> NodeRef<'a, V> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn key(&self) -> &'a str {
        self.key
    }

    pub fn payload(&self) -> &'a V {
        self.payload
    }

    /// Level drawn for this node at insertion
    pub fn level(&self) -> usize {
        self.level
    }
}

/// Ordered index keyed by unique strings
pub struct OrderedIndex<V, L = CoinFlipLevels> {
    /// Sentinel forward array, `max_level + 1` slots
    head: Vec<Option<NodeId>>,
    nodes: Vec<Node<V>>,
    max_level: usize,
    current_level: usize,
    levels: L,
}

impl<V> OrderedIndex<V, CoinFlipLevels> {
    /// Create an empty index whose levels come from OS entropy
    pub fn new(max_level: usize) -> Result<Self, IndexError> {
        Self::with_generator(max_level, CoinFlipLevels::from_entropy())
    }
}

impl<V, L: LevelGenerator> OrderedIndex<V, L> {
    /// Create an empty index with an explicit level generator
    pub fn with_generator(max_level: usize, levels: L) -> Result<Self, IndexError> {
        Self::from_config(&IndexConfig::new(max_level)?, levels)
    }

    pub fn from_config(config: &IndexConfig, levels: L) -> Result<Self, IndexError> {
        config.validate()?;
        let head = try_links(config.max_level + 1, "head forward array")?;

        Ok(Self {
            head,
            nodes: Vec::new(),
            max_level: config.max_level,
            current_level: 0,
            levels,
        })
    }

    /// Insert `key` with its payload
    ///
    /// Fails with [`IndexError::DuplicateKey`] when the key is already present;
    /// the index is left exactly as it was.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        payload: V,
    ) -> Result<NodeRef<'_, V>, IndexError> {
        let key = key.into();

        // update[i]: last position visited on level i before descending
        let mut update = Vec::new();
        update
            .try_reserve_exact(self.max_level + 1)
            .map_err(|_| IndexError::AllocationFailed { what: "update vector" })?;
        update.resize(self.max_level + 1, Slot::Head);
        self.find_predecessors(&key, &mut update);

        // only the level-0 successor can carry the same key
        if let Some(next) = self.next(update[0], 0) {
            if self.nodes[next.0].key == key {
                return Err(IndexError::DuplicateKey { key });
            }
        }

        let level = self.levels.random_level(self.max_level).min(self.max_level);

        // reserve everything before touching any link
        let mut forward = Vec::new();
        forward
            .try_reserve_exact(level + 1)
            .map_err(|_| IndexError::AllocationFailed { what: "node forward array" })?;
        self.nodes
            .try_reserve(1)
            .map_err(|_| IndexError::AllocationFailed { what: "node" })?;

        if level > self.current_level {
            for slot in &mut update[self.current_level + 1..=level] {
                *slot = Slot::Head;
            }
            self.current_level = level;
        }

        let id = NodeId(self.nodes.len());
        forward.extend((0..=level).map(|i| self.next(update[i], i)));
        self.nodes.push(Node { key, payload, forward });
        for (i, &slot) in update.iter().enumerate().take(level + 1) {
            self.set_next(slot, i, Some(id));
        }

        Ok(self.node_ref(id))
    }
}

impl<V, L> OrderedIndex<V, L> {
    /// Find the node holding `key`
    ///
    /// Expected O(log n); O(n) when every node sits on level 0.
    pub fn search(&self, key: &str) -> Option<NodeRef<'_, V>> {
        let mut current = Slot::Head;
        for level in (0..=self.current_level).rev() {
            current = self.advance(current, level, key);
        }

        let candidate = self.next(current, 0)?;
        (self.nodes[candidate.0].key == key).then(|| self.node_ref(candidate))
    }

    /// Payload stored under `key`
    pub fn get(&self, key: &str) -> Option<&V> {
        self.search(key).map(|node| node.payload())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.search(key).is_some()
    }

    /// Ascending traversal of level 0
    ///
    /// Each call starts a fresh, independent walk.
    pub fn iter(&self) -> Iter<'_, V, L> {
        Iter {
            index: self,
            next: self.head[0],
        }
    }

    /// Payloads in ascending key order
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|node| node.payload())
    }

    /// Keys linked on `level`, in order; empty above `current_level`
    pub fn chain(&self, level: usize) -> impl Iterator<Item = &str> + '_ {
        let mut next = self.head.get(level).copied().flatten();
        std::iter::from_fn(move || {
            let id = next?;
            let node = &self.nodes[id.0];
            next = node.forward[level];
            Some(node.key.as_str())
        })
    }

    /// Displayable per-level dump, level 0 first
    pub fn structure(&self) -> StructureView<'_, V, L> {
        StructureView { index: self }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn max_level(&self) -> usize {
        self.max_level
    }

    /// Highest level holding a data node (0 when empty)
    pub fn current_level(&self) -> usize {
        self.current_level
    }

    /// Walk `level` forward from `from` while the next key is below `key`.
    fn advance(&self, from: Slot, level: usize, key: &str) -> Slot {
        let mut current = from;
        while let Some(next) = self.next(current, level) {
            if self.nodes[next.0].key.as_str() >= key {
                break;
            }
            current = Slot::Node(next);
        }
        current
    }

    fn find_predecessors(&self, key: &str, update: &mut [Slot]) {
        let mut current = Slot::Head;
        for level in (0..=self.current_level).rev() {
            current = self.advance(current, level, key);
            update[level] = current;
        }
    }

    fn next(&self, slot: Slot, level: usize) -> Option<NodeId> {
        match slot {
            Slot::Head => self.head[level],
            Slot::Node(id) => self.nodes[id.0].forward[level],
        }
    }

    fn set_next(&mut self, slot: Slot, level: usize, to: Option<NodeId>) {
        match slot {
            Slot::Head => self.head[level] = to,
            Slot::Node(id) => self.nodes[id.0].forward[level] = to,
        }
    }

    fn node_ref(&self, id: NodeId) -> NodeRef<'_, V> {
        let node = &self.nodes[id.0];
        NodeRef {
            id,
            key: &node.key,
            payload: &node.payload,
            level: node.forward.len() - 1,
        }
    }
}

impl<V: fmt::Debug, L> fmt::Debug for OrderedIndex<V, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedIndex")
            .field("len", &self.nodes.len())
            .field("max_level", &self.max_level)
            .field("current_level", &self.current_level)
            .finish()
    }
}

fn try_links(len: usize, what: &'static str) -> Result<Vec<Option<NodeId>>, IndexError> {
    let mut links = Vec::new();
    links
        .try_reserve_exact(len)
        .map_err(|_| IndexError::AllocationFailed { what })?;
    links.resize(len, None);
    Ok(links)
}

/// Ascending level-0 traversal
pub struct Iter<'a, V, L = CoinFlipLevels> {
    index: &'a OrderedIndex<V, L>,
    next: Option<NodeId>,
}

impl<'a, V, L> Iterator for Iter<'a, V, L> {
    type Item = NodeRef<'a, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        self.next = self.index.nodes[id.0].forward[0];
        Some(self.index.node_ref(id))
    }
}

impl<'a, V, L> IntoIterator for &'a OrderedIndex<V, L> {
    type Item = NodeRef<'a, V>;
    type IntoIter = Iter<'a, V, L>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Per-level chain dump of an index, from level 0 up to `current_level`
///
/// ```text
/// Ordered index (level 1):
/// Level 0: 10002 -> 20003 -> 30001 -> NULL
/// Level 1: 20003 -> NULL
/// ```
pub struct StructureView<'a, V, L = CoinFlipLevels> {
    index: &'a OrderedIndex<V, L>,
}

impl<V, L> fmt::Display for StructureView<'_, V, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let index = self.index;
        writeln!(f, "Ordered index (level {}):", index.current_level)?;
        for level in 0..=index.current_level {
            write!(f, "Level {}: ", level)?;
            for key in index.chain(level) {
                write!(f, "{} -> ", key)?;
            }
            writeln!(f, "NULL")?;
        }
        Ok(())
    }
}
