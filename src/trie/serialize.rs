//! Binary snapshot format.
//!
//! Layout, in order:
//!
//! | Field | Size |
//! |---|---|
//! | format tag `b"TRIE"` | 4 bytes |
//! | symbol width | 1 byte |
//! | compressed flag | 1 byte |
//! | node count `n` | `usize` |
//! | symbols | `n * width` bytes |
//! | terminal flags | `n` bytes |
//! | child counts | `n` x `usize` |
//! | child targets, node by node in edge order | one `usize` each |
//! | root edge count, then root targets | `usize` each |
//!
//! Integers are native-endian, so a snapshot is only portable between machines with the same
//! word size and byte order. Edge symbols are not stored; an edge is labelled with its target's
//! symbol. Subtree depths are recomputed on load.

use std::io::{Read, Write};
use std::mem::size_of;

use crate::error::{Result, TrieError};

use super::children::Edges;
use super::codec::SymbolCodec;
use super::index::NodeIndex;
use super::node_arena::{Node, NodeArena};
use super::set::Trie;
use super::symbol::TrieSymbol;

/// Tag every snapshot starts with.
pub const FORMAT_TAG: [u8; 4] = *b"TRIE";

impl<C: TrieSymbol, I: NodeIndex, S: SymbolCodec<C>> Trie<C, I, S> {
    /// Writes the trie to `out` in the snapshot format.
    ///
    /// # Errors
    ///
    /// Fails only if `out` does.
    pub fn serialize<W: Write>(&self, mut out: W) -> Result<()> {
        let nodes = self.nodes.as_slice();
        let width = self.codec.width();

        out.write_all(&FORMAT_TAG)?;
        out.write_all(&[width, u8::from(self.compressed)])?;
        write_count(&mut out, nodes.len())?;

        let mut symbol = vec![0u8; usize::from(width)];
        for node in nodes {
            self.codec.encode(node.symbol, &mut symbol);
            out.write_all(&symbol)?;
        }
        let terminals: Vec<u8> = nodes.iter().map(|n| u8::from(n.terminal)).collect();
        out.write_all(&terminals)?;
        for node in nodes {
            write_count(&mut out, node.children.len())?;
        }
        for node in nodes {
            for target in node.children.targets() {
                write_count(&mut out, target.to_usize())?;
            }
        }

        write_count(&mut out, self.root.len())?;
        for target in self.root.targets() {
            write_count(&mut out, target.to_usize())?;
        }
        out.flush()?;
        Ok(())
    }

    /// Serializes into a fresh buffer.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.serialize(&mut bytes)?;
        Ok(bytes)
    }

    /// Replaces the contents of this trie with a snapshot read from `input`.
    ///
    /// The snapshot is decoded and validated in full before anything is replaced. Parents are
    /// rebuilt from the edges: a node reachable from several owners records the last one in
    /// arena order, and nodes reachable from the root record none.
    ///
    /// # Errors
    ///
    /// On error the trie is left as it was. Fails with
    ///
    /// - [`TrieError::FormatTag`] if the stream does not start with [`FORMAT_TAG`]
    /// - [`TrieError::SymbolWidth`] if it was written by a codec of another width
    /// - [`TrieError::Io`] if reading fails or the stream ends early
    /// - [`TrieError::InvalidSymbol`] if the codec rejects a symbol payload
    /// - [`TrieError::CapacityExceeded`] if `I` cannot address every node
    /// - [`TrieError::IndexOutOfRange`], [`TrieError::DuplicateEdge`] or [`TrieError::Cycle`]
    ///   if the edges do not describe a valid trie
    pub fn unserialize<R: Read>(&mut self, mut input: R) -> Result<()> {
        let mut tag = [0u8; 4];
        input.read_exact(&mut tag)?;
        if tag != FORMAT_TAG {
            return Err(TrieError::FormatTag(tag));
        }
        let mut header = [0u8; 2];
        input.read_exact(&mut header)?;
        let [width, compressed] = header;
        let expected = self.codec.width();
        if width != expected {
            return Err(TrieError::SymbolWidth {
                expected,
                found: width,
            });
        }

        let count = read_count(&mut input)?;
        if count > 0 && I::from_usize(count - 1).is_none() {
            return Err(TrieError::CapacityExceeded { nodes: count });
        }

        // Nothing below is sized from `count` up front: a corrupt count runs into EOF rather
        // than a huge allocation.
        let mut nodes = Vec::new();
        let mut symbol = vec![0u8; usize::from(width)];
        for _ in 0..count {
            input.read_exact(&mut symbol)?;
            let decoded = self
                .codec
                .decode(&symbol)
                .ok_or(TrieError::InvalidSymbol)?;
            nodes.push(Node::new(None, decoded));
        }
        for node in &mut nodes {
            node.terminal = read_byte(&mut input)? != 0;
        }
        let mut child_counts = Vec::new();
        for _ in 0..count {
            child_counts.push(read_count(&mut input)?);
        }
        for (owner, &children) in child_counts.iter().enumerate() {
            for _ in 0..children {
                let target = read_target::<_, I>(&mut input, count)?;
                let symbol = nodes[target.to_usize()].symbol;
                if !nodes[owner].children.insert(symbol, target) {
                    return Err(TrieError::DuplicateEdge(Some(owner)));
                }
            }
        }

        let mut root = Edges::new();
        for _ in 0..read_count(&mut input)? {
            let target = read_target::<_, I>(&mut input, count)?;
            if !root.insert(nodes[target.to_usize()].symbol, target) {
                return Err(TrieError::DuplicateEdge(None));
            }
        }

        let mut arena = NodeArena::from_nodes(nodes);
        arena.recompute_depths()?;
        arena.relink_parents(&root);

        self.nodes = arena;
        self.root = root;
        self.compressed = compressed != 0;
        tracing::debug!(
            nodes = count,
            roots = self.root.len(),
            compressed = self.compressed,
            "trie unserialized"
        );
        Ok(())
    }
}

impl<C: TrieSymbol, I: NodeIndex, S: SymbolCodec<C> + Default> Trie<C, I, S> {
    /// Decodes a snapshot into a new trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtrie::trie::Trie;
    ///
    /// let trie: Trie<char> = ["one", "two"].into_iter().collect();
    /// let bytes = trie.to_bytes().unwrap();
    /// let copy: Trie<char> = Trie::from_bytes(&bytes).unwrap();
    /// assert!(copy.contains("two"));
    /// ```
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut trie = Self::new();
        trie.unserialize(bytes)?;
        Ok(trie)
    }
}

fn write_count<W: Write>(out: &mut W, value: usize) -> Result<()> {
    out.write_all(&value.to_ne_bytes())?;
    Ok(())
}

fn read_count<R: Read>(input: &mut R) -> Result<usize> {
    let mut buf = [0u8; size_of::<usize>()];
    input.read_exact(&mut buf)?;
    Ok(usize::from_ne_bytes(buf))
}

fn read_byte<R: Read>(input: &mut R) -> Result<u8> {
    let mut buf = [0u8; 1];
    input.read_exact(&mut buf)?;
    Ok(buf[0])
}

/// Reads one edge target and checks it against the node count.
fn read_target<R: Read, I: NodeIndex>(input: &mut R, count: usize) -> Result<I> {
    let index = read_count(input)?;
    if index >= count {
        return Err(TrieError::IndexOutOfRange { index, count });
    }
    I::from_usize(index).ok_or(TrieError::CapacityExceeded { nodes: count })
}
