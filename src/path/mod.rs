use crate::NodeID;

use std::ops::Index;

/// The cost of entering a Node, or of a whole Path
pub type Cost = usize;

/// A Path through a [`Graph`](crate::Graph), as returned by [`find_path`](crate::find_path).
///
/// The Nodes are stored in order from start to end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    nodes: Vec<NodeID>,
    cost: Cost,
}

impl Path {
    pub(crate) fn new(nodes: Vec<NodeID>, cost: Cost) -> Path {
        Path { nodes, cost }
    }

    /// The sum of the costs of all Nodes on the Path, including the start and end Node
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// The number of Nodes on the Path, including the start and end Node
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A Path always contains at least its start Node, so this is only `true` for a
    /// default-constructed Path.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[allow(missing_docs)]
    pub fn start(&self) -> Option<NodeID> {
        self.nodes.first().copied()
    }

    #[allow(missing_docs)]
    pub fn end(&self) -> Option<NodeID> {
        self.nodes.last().copied()
    }

    #[allow(missing_docs)]
    pub fn iter(&self) -> impl Iterator<Item = NodeID> + '_ {
        self.nodes.iter().copied()
    }

    #[allow(missing_docs)]
    pub fn as_slice(&self) -> &[NodeID] {
        &self.nodes
    }

    #[allow(missing_docs)]
    pub fn into_vec(self) -> Vec<NodeID> {
        self.nodes
    }
}

impl Default for Path {
    fn default() -> Path {
        Path::new(vec![], 0)
    }
}

impl Index<usize> for Path {
    type Output = NodeID;
    #[track_caller]
    fn index(&self, index: usize) -> &NodeID {
        &self.nodes[index]
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = NodeID;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, NodeID>>;
    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter().copied()
    }
}
