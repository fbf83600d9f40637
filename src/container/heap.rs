use super::{ContainerId, GraphOps};
use crate::{Cost, Error, Graph, Heuristic, NodeID, Result};

use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Clone, Copy, Debug)]
struct HeapElement {
    /// tracked cost + priority, refreshed when the Node is relaxed
    key: Cost,
    node: NodeID,
    /// frozen at insertion
    priority: Cost,
}

// equality has to agree with the ordering, which ignores the priority
impl PartialEq for HeapElement {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.node == other.node
    }
}
impl Eq for HeapElement {}

impl Ord for HeapElement {
    fn cmp(&self, other: &Self) -> Ordering {
        // min-heap: BinaryHeap pops the greatest element
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for HeapElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// An open or closed list backed by a binary min-heap.
///
/// Every Node is stored together with the priority it was inserted with, and that priority
/// is never recomputed. While a Node is in the heap, its [`owner`](crate::Node::owner) is
/// set to this container, which makes [`contains`](GraphOps::contains) `O(1)` and keeps a
/// Node from being stored in two heaps at once.
///
/// The heap has no decrease-key operation. [`update_if_better`](GraphOps::update_if_better)
/// and [`remove`](GraphOps::remove) find the Node with a linear scan and rebuild the heap,
/// which costs `O(n)`. This favours the far more frequent pushes and pops.
/// Nodes held by another container are never relaxed, so their keys there stay valid.
#[derive(Debug)]
pub struct HeapContainer {
    id: ContainerId,
    heap: BinaryHeap<HeapElement>,
}

impl HeapContainer {
    /// Creates an empty heap with room for `capacity` Nodes.
    pub fn new(capacity: usize) -> Self {
        Self {
            id: ContainerId::next(),
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// The identifier written into the Nodes this heap holds
    pub fn id(&self) -> ContainerId {
        self.id
    }

    /// The priority `node` was inserted with
    pub fn priority(&self, node: NodeID) -> Option<Cost> {
        self.heap
            .iter()
            .find(|element| element.node == node)
            .map(|element| element.priority)
    }

    /// Renders the members like [`Graph::render`]. Without a Heuristic, the stored
    /// priorities are appended.
    pub fn render<P>(&self, graph: &Graph<P>, heuristic: Option<&dyn Heuristic<P>>) -> String {
        graph.render_lines(self.heap.iter().map(|element| {
            let estimate = match (heuristic, graph.get(element.node)) {
                (Some(h), Some(node)) => h.estimate(node),
                _ => element.priority,
            };
            (element.node, Some(estimate))
        }))
    }
}

impl Default for HeapContainer {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<P> GraphOps<P> for HeapContainer {
    fn len(&self) -> usize {
        self.heap.len()
    }

    fn contains(&self, graph: &Graph<P>, node: NodeID) -> bool {
        graph
            .get(node)
            .map_or(false, |node| node.owner == Some(self.id))
    }

    fn insert_with_priority(&mut self, graph: &mut Graph<P>, node: NodeID, priority: Cost) -> Result<()> {
        let entry = graph.get_mut(node).ok_or(Error::NodeNotInGraph(node))?;
        match entry.owner {
            Some(owner) if owner == self.id => return Ok(()),
            Some(owner) => {
                return Err(Error::ContainerConflict {
                    node: entry.name().to_owned(),
                    owner,
                })
            }
            None => {}
        }
        entry.owner = Some(self.id);
        self.heap.push(HeapElement {
            key: entry.tracked_cost.saturating_add(priority),
            node,
            priority,
        });
        Ok(())
    }

    fn remove(&mut self, graph: &mut Graph<P>, node: NodeID) {
        if !self.contains(graph, node) {
            return;
        }
        self.heap.retain(|element| element.node != node);
        graph[node].owner = None;
    }

    fn pop_minimum(&mut self, graph: &mut Graph<P>) -> Option<NodeID> {
        let element = self.heap.pop()?;
        if let Some(node) = graph.get_mut(element.node) {
            node.owner = None;
        }
        Some(element.node)
    }

    fn for_each(&self, f: &mut dyn FnMut(NodeID) -> Result<()>) -> Result<()> {
        self.heap.iter().try_for_each(|element| f(element.node))
    }

    fn update_if_better(&mut self, graph: &mut Graph<P>, node: NodeID, prev: NodeID, cost: Cost) {
        let entry = match graph.get_mut(node) {
            Some(entry) if entry.owner == Some(self.id) && cost < entry.tracked_cost => entry,
            _ => return,
        };
        entry.record_predecessor(prev, cost);

        let mut elements = std::mem::take(&mut self.heap).into_vec();
        if let Some(element) = elements.iter_mut().find(|element| element.node == node) {
            element.key = cost.saturating_add(element.priority);
        }
        self.heap = BinaryHeap::from(elements);
    }
}
