//! Index-addressed node storage.
//!
//! Nodes refer to their parent and children by position in a single `Vec`, never by address,
//! so the vector is free to reallocate as the trie grows. The arena is the sole owner of every
//! node; parent links are plain indices and carry no ownership.

use std::ops::{Index, IndexMut};

use crate::error::{Result, TrieError};

use super::children::Edges;
use super::index::NodeIndex;
use super::symbol::TrieSymbol;

/// A single trie node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Node<C, I> {
    pub(crate) symbol: C,
    pub(crate) terminal: bool,
    pub(crate) parent: Option<I>,
    pub(crate) children: Edges<C, I>,
    /// Length of the longest symbol chain below this node; 0 for a leaf.
    pub(crate) subtree_depth: usize,
}

impl<C: TrieSymbol, I: NodeIndex> Node<C, I> {
    pub(crate) fn new(parent: Option<I>, symbol: C) -> Self {
        Node {
            symbol,
            terminal: false,
            parent,
            children: Edges::new(),
            subtree_depth: 0,
        }
    }

    /// Resets a merged-away node. It stays in the arena until the next sweep.
    pub(crate) fn tombstone(&mut self) {
        self.symbol = C::default();
        self.parent = None;
        self.children.clear();
        self.subtree_depth = 0;
    }
}

/// Contiguous store of trie nodes addressed by `I`.
#[derive(Clone, Debug)]
pub(crate) struct NodeArena<C, I> {
    nodes: Vec<Node<C, I>>,
}

impl<C, I> Default for NodeArena<C, I> {
    fn default() -> Self {
        NodeArena { nodes: Vec::new() }
    }
}

#[derive(Clone, Copy)]
enum Mark {
    Unseen,
    Open,
    Done(usize),
}

impl<C: TrieSymbol, I: NodeIndex> NodeArena<C, I> {
    /// Creates an empty arena.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Wraps nodes decoded from a stream. Positions must already fit in `I`.
    pub(crate) fn from_nodes(nodes: Vec<Node<C, I>>) -> Self {
        NodeArena { nodes }
    }

    /// Appends a node and returns its index.
    pub(crate) fn allocate(&mut self, parent: Option<I>, symbol: C) -> Result<I> {
        let index = I::from_usize(self.nodes.len()).ok_or(TrieError::CapacityExceeded {
            nodes: self.nodes.len() + 1,
        })?;
        self.nodes.push(Node::new(parent, symbol));
        Ok(index)
    }

    /// True if `extra` more nodes can be allocated without exhausting `I`.
    pub(crate) fn has_room_for(&self, extra: usize) -> bool {
        extra == 0
            || self
                .nodes
                .len()
                .checked_add(extra - 1)
                .and_then(I::from_usize)
                .is_some()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Nodes in arena order.
    #[inline]
    pub(crate) fn as_slice(&self) -> &[Node<C, I>] {
        &self.nodes
    }

    /// Nodes in arena order, paired with their index.
    pub(crate) fn indexed(&self) -> impl Iterator<Item = (I, &Node<C, I>)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(pos, node)| I::from_usize(pos).map(|index| (index, node)))
    }

    /// Drops every node flagged in `dead` and renumbers the survivors in arena order.
    ///
    /// Child edges and `root` are rewritten through the old-to-new map; parents are rebuilt
    /// with [`relink_parents`](Self::relink_parents).
    pub(crate) fn sweep(&mut self, dead: &[bool], root: &mut Edges<C, I>) {
        let mut renumbered: Vec<Option<I>> = Vec::with_capacity(self.nodes.len());
        let mut next = 0;
        for &is_dead in dead {
            if is_dead {
                renumbered.push(None);
            } else {
                renumbered.push(I::from_usize(next));
                next += 1;
            }
        }
        let lookup = |old: I| renumbered.get(old.to_usize()).copied().flatten();

        let nodes = std::mem::take(&mut self.nodes);
        self.nodes = nodes
            .into_iter()
            .zip(dead)
            .filter(|(_, is_dead)| !**is_dead)
            .map(|(mut node, _)| {
                node.children.remap(lookup);
                node
            })
            .collect();
        root.remap(lookup);
        self.relink_parents(root);
    }

    /// Rebuilds every parent link from the edges.
    ///
    /// Owners are visited in arena order, so a node reachable from several owners keeps the
    /// last one; root edges are applied afterwards and clear their target's parent. This is
    /// the same rule the deserializer follows.
    pub(crate) fn relink_parents(&mut self, root: &Edges<C, I>) {
        for node in &mut self.nodes {
            node.parent = None;
        }
        for owner in 0..self.nodes.len() {
            let Some(owner_index) = I::from_usize(owner) else {
                break;
            };
            let mut edge = 0;
            while let Some((_, target)) = self.nodes[owner].children.get(edge) {
                self.nodes[target.to_usize()].parent = Some(owner_index);
                edge += 1;
            }
        }
        for target in root.targets() {
            self.nodes[target.to_usize()].parent = None;
        }
    }

    /// Recomputes `subtree_depth` for every node from the edges alone.
    ///
    /// Fails with [`TrieError::Cycle`] if the edges do not form an acyclic graph.
    pub(crate) fn recompute_depths(&mut self) -> Result<()> {
        let mut marks = vec![Mark::Unseen; self.nodes.len()];
        let mut stack: Vec<(usize, bool)> = Vec::new();

        for start in 0..self.nodes.len() {
            if !matches!(marks[start], Mark::Unseen) {
                continue;
            }
            stack.push((start, false));
            while let Some((pos, expanded)) = stack.pop() {
                if expanded {
                    let depth = self.nodes[pos]
                        .children
                        .targets()
                        .map(|t| match marks[t.to_usize()] {
                            Mark::Done(d) => d + 1,
                            _ => 1,
                        })
                        .max()
                        .unwrap_or(0);
                    marks[pos] = Mark::Done(depth);
                    continue;
                }
                match marks[pos] {
                    Mark::Done(_) => continue,
                    Mark::Open => return Err(TrieError::Cycle(pos)),
                    Mark::Unseen => {}
                }
                marks[pos] = Mark::Open;
                stack.push((pos, true));
                for target in self.nodes[pos].children.targets() {
                    match marks[target.to_usize()] {
                        Mark::Unseen => stack.push((target.to_usize(), false)),
                        Mark::Open => return Err(TrieError::Cycle(target.to_usize())),
                        Mark::Done(_) => {}
                    }
                }
            }
        }

        for (node, mark) in self.nodes.iter_mut().zip(marks) {
            if let Mark::Done(depth) = mark {
                node.subtree_depth = depth;
            }
        }
        Ok(())
    }
}

impl<C, I: NodeIndex> Index<I> for NodeArena<C, I> {
    type Output = Node<C, I>;

    #[inline]
    fn index(&self, index: I) -> &Node<C, I> {
        &self.nodes[index.to_usize()]
    }
}

impl<C, I: NodeIndex> IndexMut<I> for NodeArena<C, I> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Node<C, I> {
        &mut self.nodes[index.to_usize()]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// Builds a -> b -> c as a plain chain.
    fn chain() -> NodeArena<char, u32> {
        let mut arena = NodeArena::new();
        let a = arena.allocate(None, 'a').unwrap();
        let b = arena.allocate(Some(a), 'b').unwrap();
        let c = arena.allocate(Some(b), 'c').unwrap();
        arena[a].children.insert('b', b);
        arena[b].children.insert('c', c);
        arena
    }

    #[test]
    fn allocate_returns_sequential_indices() {
        let arena = chain();
        assert_eq!(arena.len(), 3);
        let symbols: Vec<_> = arena.indexed().map(|(i, n)| (i, n.symbol)).collect();
        assert_eq!(symbols, [(0, 'a'), (1, 'b'), (2, 'c')]);
        assert_eq!(arena[2].parent, Some(1));
    }

    #[test]
    fn references_survive_growth() {
        let mut arena = chain();
        for _ in 0..10_000 {
            arena.allocate(None, 'z').unwrap();
        }
        assert_eq!(arena[0].children.find('b'), Some(1));
        assert_eq!(arena[1].children.find('c'), Some(2));
    }

    #[test]
    fn allocation_fails_past_index_capacity() {
        let mut arena: NodeArena<u8, u8> = NodeArena::new();
        for i in 0..=255u8 {
            arena.allocate(None, i).unwrap();
        }
        assert!(!arena.has_room_for(1));
        assert!(arena.has_room_for(0));
        assert!(matches!(
            arena.allocate(None, 0),
            Err(TrieError::CapacityExceeded { nodes: 257 })
        ));
    }

    #[test]
    fn depths_are_recomputed_from_edges() {
        let mut arena = chain();
        arena.recompute_depths().unwrap();
        let depths: Vec<_> = arena.as_slice().iter().map(|n| n.subtree_depth).collect();
        assert_eq!(depths, [2, 1, 0]);
    }

    #[test]
    fn cycles_are_detected() {
        let mut arena = chain();
        arena[2].children.insert('a', 0);
        assert!(matches!(arena.recompute_depths(), Err(TrieError::Cycle(_))));
    }

    #[test]
    fn sweep_renumbers_and_relinks() {
        let mut arena = chain();
        let x = arena.allocate(None, 'x').unwrap();
        arena[x].children.insert('c', 2);
        // Node 1 ('b') is dropped; 'a' loses its edge, 'x' keeps pointing at 'c'.
        let mut root = Edges::new();
        root.insert('a', 0);
        root.insert('x', x);
        arena.sweep(&[false, true, false, false], &mut root);

        assert_eq!(arena.len(), 3);
        assert_eq!(root.iter().collect::<Vec<_>>(), [('a', 0), ('x', 2)]);
        assert!(arena[0].children.is_empty());
        assert_eq!(arena[2].children.find('c'), Some(1));
        assert_eq!(arena[1].parent, Some(2));
        assert_eq!(arena[2].parent, None);
    }
}
