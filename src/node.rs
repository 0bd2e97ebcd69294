use derivative::Derivative;
use std::ops::Index;
use total_float_wrap::TotalF64;

use crate::bits::BitSequence;

pub type NodeId = usize;

/// A Huffman tree node. Nodes compare by frequency alone.
#[derive(Debug, Clone, Derivative)]
#[derivative(PartialEq, Eq, PartialOrd, Ord)]
pub struct Node {
    frequency: TotalF64,

    #[derivative(PartialEq = "ignore")]
    #[derivative(PartialOrd = "ignore")]
    #[derivative(Ord = "ignore")]
    symbol: Option<u8>,

    #[derivative(PartialEq = "ignore")]
    #[derivative(PartialOrd = "ignore")]
    #[derivative(Ord = "ignore")]
    parent: Option<NodeId>,

    // [zero, one]
    #[derivative(PartialEq = "ignore")]
    #[derivative(PartialOrd = "ignore")]
    #[derivative(Ord = "ignore")]
    children: Option<[NodeId; 2]>,
}

impl Node {
    pub fn frequency(&self) -> f64 {
        self.frequency.0
    }

    /// The byte this leaf stands for, `None` for internal nodes.
    pub fn symbol(&self) -> Option<u8> {
        self.symbol
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn zero_child(&self) -> Option<NodeId> {
        self.children.map(|[zero, _]| zero)
    }

    pub fn one_child(&self) -> Option<NodeId> {
        self.children.map(|[_, one]| one)
    }

    pub fn has_children(&self) -> bool {
        self.children.is_some()
    }

    pub fn has_parent(&self) -> bool {
        self.parent.is_some()
    }
}

/// Owns every node of a tree. Nodes refer to each other by [`NodeId`].
#[derive(Debug, Clone, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn leaf(&mut self, frequency: f64, symbol: u8) -> NodeId {
        self.push(Node {
            frequency: TotalF64(frequency),
            symbol: Some(symbol),
            parent: None,
            children: None,
        })
    }

    /// Adds an internal node owning `zero` and `one`, and points both children
    /// back at it.
    pub fn internal(&mut self, frequency: f64, zero: NodeId, one: NodeId) -> NodeId {
        debug_assert!(zero != one, "a node cannot be both children");
        debug_assert!(!self.nodes[zero].has_parent(), "node {zero} already has a parent");
        debug_assert!(!self.nodes[one].has_parent(), "node {one} already has a parent");

        let id = self.push(Node {
            frequency: TotalF64(frequency),
            symbol: None,
            parent: None,
            children: Some([zero, one]),
        });
        self.nodes[zero].parent = Some(id);
        self.nodes[one].parent = Some(id);
        id
    }

    pub fn combine(&mut self, zero: NodeId, one: NodeId) -> NodeId {
        let frequency = self.nodes[zero].frequency() + self.nodes[one].frequency();
        self.internal(frequency, zero, one)
    }

    /// Stable ascending sort: nodes of equal frequency keep their order.
    pub fn sort_by_frequency(&self, ids: &mut [NodeId]) {
        ids.sort_by(|&a, &b| self.nodes[a].cmp(&self.nodes[b]));
    }

    /// Sorts `ids` by frequency and merges the first two into a new node, which
    /// leads the returned list. The rest follow in sorted order.
    ///
    /// # Panics
    ///
    /// Panics if `ids` holds fewer than two nodes.
    pub fn combine_least_frequent(&mut self, mut ids: Vec<NodeId>) -> Vec<NodeId> {
        assert!(ids.len() >= 2, "need at least two nodes to combine, got {}", ids.len());

        self.sort_by_frequency(&mut ids);
        let combined = self.combine(ids[0], ids[1]);

        let mut out = Vec::with_capacity(ids.len() - 1);
        out.push(combined);
        out.extend_from_slice(&ids[2..]);
        out
    }

    /// The code of `id`: one bit per edge on the path from the root, 0 for a
    /// zero-child and 1 for a one-child.
    pub fn build_bit_sequence(&self, id: NodeId) -> BitSequence {
        let mut bits = BitSequence::new();

        let mut current = id;
        while let Some(parent) = self.nodes[current].parent {
            bits.push(self.nodes[parent].zero_child() != Some(current));
            current = parent;
        }

        bits.reverse();
        bits
    }

    fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }
}

impl Index<NodeId> for NodeArena {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }
}
