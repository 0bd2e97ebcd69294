use log::trace;

use crate::bits::BitSequence;
use crate::histogram::{FrequencyHistogram, SYMBOL_COUNT};
use crate::node::{Node, NodeArena, NodeId};

/// A Huffman tree with one leaf for every possible byte value.
#[derive(Debug, Clone)]
pub struct HuffmanTree {
    arena: NodeArena,
    root: NodeId,
    // indexed by byte value
    leaves: Vec<NodeId>,
}

impl HuffmanTree {
    pub fn from_histogram(histogram: &FrequencyHistogram) -> Self {
        let mut arena = NodeArena::with_capacity(2 * SYMBOL_COUNT - 1);

        let leaves: Vec<NodeId> = (0..=u8::MAX)
            .map(|symbol| arena.leaf(histogram.frequency_of(symbol), symbol))
            .collect();

        let mut nodes = leaves.clone();
        while nodes.len() > 2 {
            nodes = arena.combine_least_frequent(nodes);
        }
        trace!("merged {} leaves into two subtrees", leaves.len());

        // sum of all leaf frequencies
        let root = arena.internal(1.0, nodes[0], nodes[1]);

        Self {
            arena,
            root,
            leaves,
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Leaf ids in byte-value order.
    pub fn leaves(&self) -> &[NodeId] {
        &self.leaves
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.arena[id]
    }

    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    pub fn code_of(&self, symbol: u8) -> BitSequence {
        self.arena.build_bit_sequence(self.leaves[symbol as usize])
    }
}
