use crate::{ContainerId, Cost, NodeID, NodeIDSet};

/// A vertex of a [`Graph`](super::Graph).
///
/// Besides the user data (`name`, `cost`, `payload` and the outgoing connections), a Node
/// carries the bookkeeping of the search that currently visits it. That bookkeeping is only
/// meaningful while a search is running.
#[derive(Clone, Debug)]
pub struct Node<P> {
    id: NodeID,
    name: String,
    cost: Cost,
    /// Arbitrary user data, e.g. for use in a [`Heuristic`](crate::Heuristic)
    pub payload: P,
    pub(crate) connections: NodeIDSet,
    pub(crate) tracked_cost: Cost,
    pub(crate) prev: Option<NodeID>,
    pub(crate) owner: Option<ContainerId>,
}

impl<P> Node<P> {
    pub(crate) fn new(
        id: NodeID,
        name: String,
        cost: Cost,
        expected_neighbours: usize,
        payload: P,
    ) -> Node<P> {
        Node {
            id,
            name,
            cost,
            payload,
            connections: NodeIDSet::with_capacity(expected_neighbours),
            tracked_cost: 0,
            prev: None,
            owner: None,
        }
    }

    /// The handle of this Node in its Graph
    pub fn id(&self) -> NodeID {
        self.id
    }

    /// The user-facing label of this Node. Not used by the search.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The cost of entering this Node from one of its neighbours
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Iterates over the Nodes this Node has an outgoing connection to, in no particular order.
    pub fn connections(&self) -> impl Iterator<Item = NodeID> + '_ {
        self.connections.iter().copied()
    }

    /// Checks for an outgoing connection to `other`.
    pub fn is_connected_to(&self, other: NodeID) -> bool {
        self.connections.contains(&other)
    }

    /// The cheapest cost known so far for reaching this Node from the start of the running search
    pub fn tracked_cost(&self) -> Cost {
        self.tracked_cost
    }

    /// The neighbour on the cheapest known route to this Node
    pub fn predecessor(&self) -> Option<NodeID> {
        self.prev
    }

    /// The [`HeapContainer`](crate::HeapContainer) this Node is currently stored in
    pub fn owner(&self) -> Option<ContainerId> {
        self.owner
    }

    /// Records a (cheaper) route to this Node. Meant for custom [`GraphOps`](crate::GraphOps)
    /// implementations relaxing a Node in [`update_if_better`](crate::GraphOps::update_if_better).
    pub fn record_predecessor(&mut self, prev: NodeID, tracked_cost: Cost) {
        self.prev = Some(prev);
        self.tracked_cost = tracked_cost;
    }

    pub(crate) fn set_cost(&mut self, cost: Cost) {
        self.cost = cost;
    }

    pub(crate) fn reset(&mut self) {
        self.tracked_cost = 0;
        self.prev = None;
        self.owner = None;
    }

    /// Checks whether a search left any bookkeeping on this Node.
    pub fn has_search_state(&self) -> bool {
        self.tracked_cost != 0 || self.prev.is_some() || self.owner.is_some()
    }
}

/// Converts a user-supplied cost into a [`Cost`], rejecting negative values.
pub(crate) fn checked_cost(cost: isize) -> crate::Result<Cost> {
    if cost < 0 {
        Err(crate::Error::InvalidCost(cost))
    } else {
        Ok(cost as Cost)
    }
}
