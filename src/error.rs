use std::io;

/// Errors raised by the fallible trie operations.
///
/// Absence of a sequence is never an error: lookups report it through
/// [`Trie::end`](crate::trie::Trie::end) or an empty match set.
#[derive(Debug, thiserror::Error)]
pub enum TrieError {
    /// The underlying reader or writer failed, including a truncated stream.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The stream does not start with the trie format tag.
    #[error("unrecognized format tag {0:?}")]
    FormatTag([u8; 4]),

    /// The stream was written with a symbol codec of a different width.
    #[error("symbol width mismatch: expected {expected} bytes, found {found}")]
    SymbolWidth {
        /// Width of the codec doing the decoding.
        expected: u8,
        /// Width recorded in the stream.
        found: u8,
    },

    /// A symbol payload could not be decoded by the codec.
    #[error("symbol payload could not be decoded")]
    InvalidSymbol,

    /// An edge refers to a node past the end of the arena.
    #[error("node index {index} out of range for {count} nodes")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of nodes in the stream.
        count: usize,
    },

    /// Two edges of the same node (or of the root, `None`) carry the same symbol.
    #[error("duplicate child edge in node {0:?}")]
    DuplicateEdge(Option<usize>),

    /// The node graph loops back on itself.
    #[error("node graph contains a cycle through node {0}")]
    Cycle(usize),

    /// The node index type cannot address this many nodes.
    #[error("{nodes} nodes exceed the capacity of the node index type")]
    CapacityExceeded {
        /// Number of nodes that would be needed.
        nodes: usize,
    },
}

/// Result alias for trie operations.
pub type Result<T> = std::result::Result<T, TrieError>;
