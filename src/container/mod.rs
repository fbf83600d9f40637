//! Open and closed lists for the A* search.
//!
//! [`find_reverse_path`](crate::find_reverse_path) only talks to its lists through
//! [`GraphOps`]. Two implementations are provided:
//! - [`SetContainer`]: a hash map, `O(1)` insert and relaxation, `O(n)` pop.
//! - [`HeapContainer`]: a binary heap, `O(log n)` insert and pop, `O(n)` relaxation and removal.
//!
//! A list does not own its Nodes, it only stores their [`NodeID`]s. All operations that need
//! to look at or modify a Node take the [`Graph`] the Node lives in.

use crate::{Cost, Graph, NodeID, Result};

mod heap;
pub use heap::HeapContainer;

mod set;
pub use set::SetContainer;

/// The priority of Nodes inserted without an estimate
pub const DEFAULT_PRIORITY: Cost = 0;

/// A process-wide unique identifier of a container.
///
/// Stored on a Node while a [`HeapContainer`] holds it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ContainerId(usize);

impl ContainerId {
    pub(crate) fn next() -> ContainerId {
        ContainerId(crate::next_unique_id())
    }
}

/// The operations the A* search needs from its open and closed lists.
///
/// "Priority" is the estimate a Node was inserted with. Implementations are free to use it
/// however they want, as long as [`pop_minimum`](GraphOps::pop_minimum) returns a Node whose
/// tracked cost plus priority is minimal among the current members.
pub trait GraphOps<P> {
    /// The number of Nodes in this list
    fn len(&self) -> usize;

    /// Checks whether this list holds no Nodes.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks whether `node` is currently in this list.
    fn contains(&self, graph: &Graph<P>, node: NodeID) -> bool;

    /// Adds `node` with [`DEFAULT_PRIORITY`]. If the Node is already in this list, this is a
    /// no-op.
    fn insert(&mut self, graph: &mut Graph<P>, node: NodeID) -> Result<()> {
        self.insert_with_priority(graph, node, DEFAULT_PRIORITY)
    }

    /// Adds `node` with a fixed priority. If the Node is already in this list, this is a no-op.
    fn insert_with_priority(&mut self, graph: &mut Graph<P>, node: NodeID, priority: Cost)
        -> Result<()>;

    /// Removes `node`. If the Node is not in this list, this is a no-op.
    fn remove(&mut self, graph: &mut Graph<P>, node: NodeID);

    /// Removes and returns one of the cheapest Nodes, or `None` if the list is empty.
    fn pop_minimum(&mut self, graph: &mut Graph<P>) -> Option<NodeID>;

    /// Calls `f` for every Node in this list, stopping at the first error.
    fn for_each(&self, f: &mut dyn FnMut(NodeID) -> Result<()>) -> Result<()>;

    /// Makes `prev` the predecessor of `node` and `cost` its tracked cost, if `cost` is lower
    /// than the Node's current tracked cost.
    fn update_if_better(&mut self, graph: &mut Graph<P>, node: NodeID, prev: NodeID, cost: Cost);
}
