use super::GraphOps;
use crate::{Cost, Error, Graph, Heuristic, NodeID, NodeIDMap, Result};

/// An open or closed list backed by a hash map from Node to priority.
///
/// [`pop_minimum`](GraphOps::pop_minimum) scans all members and adds each Node's current
/// tracked cost to its priority, so relaxed Nodes are ordered correctly without any extra
/// work. Among equally cheap Nodes, the one returned depends on the iteration order of the
/// map and is unspecified.
#[derive(Clone, Debug, Default)]
pub struct SetContainer {
    members: NodeIDMap<Cost>,
}

impl SetContainer {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty list with room for `capacity` Nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            members: NodeIDMap::with_capacity(capacity),
        }
    }

    /// Creates a list holding `nodes` at the default priority.
    ///
    /// ## Errors
    /// [`Error::DuplicateNodes`] if a Node appears more than once in `nodes`.
    pub fn from_nodes(nodes: &[NodeID]) -> Result<Self> {
        let mut ret = Self::with_capacity(nodes.len());
        for &node in nodes {
            if ret.members.insert(node, super::DEFAULT_PRIORITY).is_some() {
                return Err(Error::DuplicateNodes(node));
            }
        }
        Ok(ret)
    }

    /// The priority `node` was inserted with
    pub fn priority(&self, node: NodeID) -> Option<Cost> {
        self.members.get(&node).copied()
    }

    /// Renders the members like [`Graph::render`]. Without a Heuristic, the stored
    /// priorities are appended.
    pub fn render<P>(&self, graph: &Graph<P>, heuristic: Option<&dyn Heuristic<P>>) -> String {
        graph.render_lines(self.members.iter().map(|(&id, &priority)| {
            let estimate = match (heuristic, graph.get(id)) {
                (Some(h), Some(node)) => h.estimate(node),
                _ => priority,
            };
            (id, Some(estimate))
        }))
    }
}

impl<P> GraphOps<P> for SetContainer {
    fn len(&self) -> usize {
        self.members.len()
    }

    fn contains(&self, _graph: &Graph<P>, node: NodeID) -> bool {
        self.members.contains_key(&node)
    }

    fn insert_with_priority(
        &mut self,
        _graph: &mut Graph<P>,
        node: NodeID,
        priority: Cost,
    ) -> Result<()> {
        self.members.entry(node).or_insert(priority);
        Ok(())
    }

    fn remove(&mut self, _graph: &mut Graph<P>, node: NodeID) {
        self.members.remove(&node);
    }

    fn pop_minimum(&mut self, graph: &mut Graph<P>) -> Option<NodeID> {
        let (&cheapest, _) = self.members.iter().min_by_key(|&(&id, &priority)| {
            let tracked = graph.get(id).map_or(0, |node| node.tracked_cost);
            tracked.saturating_add(priority)
        })?;
        self.members.remove(&cheapest);
        Some(cheapest)
    }

    fn for_each(&self, f: &mut dyn FnMut(NodeID) -> Result<()>) -> Result<()> {
        self.members.keys().try_for_each(|&id| f(id))
    }

    fn update_if_better(&mut self, graph: &mut Graph<P>, node: NodeID, prev: NodeID, cost: Cost) {
        if let Some(entry) = graph.get_mut(node) {
            if cost < entry.tracked_cost {
                entry.record_predecessor(prev, cost);
            }
        }
    }
}
