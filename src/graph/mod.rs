use slotmap::SlotMap;

use crate::{Cost, Error, Heuristic, NodeID, NodeKey, Result};

mod node;
pub use node::Node;
pub(crate) use node::checked_cost;

/// The family of open and closed lists [`find_path`](crate::find_path) uses for a [`Graph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
    /// Hash-set lists. Cheap relaxations, but every pop scans the whole open list.
    Set,
    /// Binary-heap lists. `O(log n)` push and pop, but relaxations scan the open list.
    Heap {
        /// The number of Nodes the open list is expected to hold at once
        capacity_hint: usize,
    },
    /// Lists provided by the caller through [`find_reverse_path`](crate::find_reverse_path).
    /// [`find_path`](crate::find_path) refuses Graphs with this Backend.
    Custom,
}

/// Identifies the Graph a [`NodeID`] was created by
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct GraphId(usize);

/// A collection of [`Node`]s and the directed connections between them.
///
/// There are no guarantees for the Nodes to be connected. Ensuring that is the user's task.
#[derive(Clone, Debug)]
pub struct Graph<P> {
    id: GraphId,
    nodes: SlotMap<NodeKey, Node<P>>,
    backend: Backend,
}

impl<P> Graph<P> {
    /// Creates an empty Graph that will be searched with lists of the given Backend.
    pub fn new(backend: Backend) -> Self {
        Self::with_capacity(backend, 0)
    }

    /// Creates an empty Graph with room for `capacity` Nodes.
    pub fn with_capacity(backend: Backend, capacity: usize) -> Self {
        Self {
            id: GraphId(crate::next_unique_id()),
            nodes: SlotMap::with_capacity_and_key(capacity),
            backend,
        }
    }

    /// The family of open and closed lists searches on this Graph use
    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// The number of Nodes in this Graph
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Checks whether this Graph has no Nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Adds a new Node without any connections.
    ///
    /// `expected_neighbours` only sizes the connection set up front.
    ///
    /// ## Errors
    /// [`Error::InvalidCost`] if `cost` is negative.
    pub fn add_node(
        &mut self,
        name: impl Into<String>,
        cost: isize,
        expected_neighbours: usize,
        payload: P,
    ) -> Result<NodeID> {
        let cost = checked_cost(cost)?;
        let name = name.into();
        let graph = self.id;
        let key = self.nodes.insert_with_key(|key| {
            Node::new(NodeID { graph, key }, name, cost, expected_neighbours, payload)
        });
        Ok(NodeID { graph, key })
    }

    /// Changes the cost of entering a Node.
    pub fn set_cost(&mut self, id: NodeID, cost: isize) -> Result<()> {
        let cost = checked_cost(cost)?;
        self.node_mut(id)?.set_cost(cost);
        Ok(())
    }

    /// Removes a Node and every connection leading to it.
    pub fn remove_node(&mut self, id: NodeID) -> Option<Node<P>> {
        let key = self.key(id)?;
        let node = self.nodes.remove(key)?;
        for (_, other) in self.nodes.iter_mut() {
            other.connections.remove(&id);
        }
        Some(node)
    }

    /// Checks whether `id` refers to a Node of this Graph.
    pub fn contains(&self, id: NodeID) -> bool {
        self.key(id).map_or(false, |key| self.nodes.contains_key(key))
    }

    /// Returns the Node behind `id`, if it is part of this Graph.
    pub fn get(&self, id: NodeID) -> Option<&Node<P>> {
        self.nodes.get(self.key(id)?)
    }

    /// Returns the Node behind `id` mutably, if it is part of this Graph.
    pub fn get_mut(&mut self, id: NodeID) -> Option<&mut Node<P>> {
        let key = self.key(id)?;
        self.nodes.get_mut(key)
    }

    /// Iterates over the handles of all Nodes.
    pub fn keys(&self) -> impl Iterator<Item = NodeID> + '_ {
        let graph = self.id;
        self.nodes.keys().map(move |key| NodeID { graph, key })
    }

    /// Iterates over all Nodes.
    pub fn iter(&self) -> impl Iterator<Item = (NodeID, &Node<P>)> + '_ {
        self.nodes.iter().map(|(_, node)| (node.id(), node))
    }

    /// Adds a connection from `from` to `to`. If the connection already exists, this is a no-op.
    pub fn add_connection(&mut self, from: NodeID, to: NodeID) -> Result<()> {
        if !self.contains(to) {
            return Err(Error::NodeNotInGraph(to));
        }
        self.node_mut(from)?.connections.insert(to);
        Ok(())
    }

    /// Connects `a` to `b` and `b` back to `a`.
    pub fn add_pairwise_connection(&mut self, a: NodeID, b: NodeID) -> Result<()> {
        self.add_connection(a, b)?;
        self.add_connection(b, a)
    }

    /// Removes the connection from `from` to `to`. If there is no such connection, this is a
    /// no-op.
    pub fn remove_connection(&mut self, from: NodeID, to: NodeID) -> Result<()> {
        self.node_mut(from)?.connections.remove(&to);
        Ok(())
    }

    /// Clears the search bookkeeping of every Node.
    ///
    /// A successful [`find_path`](crate::find_path) does this on its own. After a failed
    /// search, the Graph has to be reset manually before it can be searched again.
    pub fn reset_search_state(&mut self) {
        for (_, node) in self.nodes.iter_mut() {
            node.reset();
        }
    }

    /// Checks whether any Node still carries bookkeeping from a search.
    pub fn has_search_state(&self) -> bool {
        self.nodes.values().any(Node::has_search_state)
    }

    pub(crate) fn try_for_each_node_mut(
        &mut self,
        mut f: impl FnMut(&mut Node<P>) -> Result<()>,
    ) -> Result<()> {
        self.nodes.values_mut().try_for_each(|node| f(node))
    }

    fn node_mut(&mut self, id: NodeID) -> Result<&mut Node<P>> {
        self.get_mut(id).ok_or(Error::NodeNotInGraph(id))
    }

    /// The arena slot of `id`, if `id` was created by this Graph
    fn key(&self, id: NodeID) -> Option<NodeKey> {
        (id.graph == self.id).then(|| id.key)
    }

    /// Renders a Node as `{id: <name>, cost: <cost>, con: ['<neighbour>', ...]}`, with the
    /// neighbours sorted by name.
    pub fn render_node(&self, id: NodeID) -> Option<String> {
        let node = self.get(id)?;
        let mut names: Vec<&str> = node
            .connections()
            .filter_map(|other| self.get(other))
            .map(Node::name)
            .collect();
        names.sort_unstable();
        Some(format!(
            "{{id: {}, cost: {}, con: ['{}']}}",
            node.name(),
            node.cost(),
            names.join("', '")
        ))
    }

    /// Renders every Node on its own line, sorted by name. If a Heuristic is given, its
    /// estimate for each Node is appended as ` -> <estimate>`.
    pub fn render(&self, heuristic: Option<&dyn Heuristic<P>>) -> String {
        self.render_lines(self.keys().map(|id| {
            let estimate = heuristic.map(|h| h.estimate(&self[id]));
            (id, estimate)
        }))
    }

    pub(crate) fn render_lines(&self, entries: impl Iterator<Item = (NodeID, Option<Cost>)>) -> String {
        let mut entries: Vec<_> = entries
            .filter_map(|(id, estimate)| Some((self.get(id)?.name(), id, estimate)))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        entries
            .into_iter()
            .filter_map(|(_, id, estimate)| {
                let line = self.render_node(id)?;
                Some(match estimate {
                    Some(estimate) => format!("{} -> {}", line, estimate),
                    None => line,
                })
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

use std::ops::{Index, IndexMut};
impl<P> Index<NodeID> for Graph<P> {
    type Output = Node<P>;
    #[track_caller]
    fn index(&self, index: NodeID) -> &Node<P> {
        match self.key(index) {
            Some(key) => &self.nodes[key],
            None => panic!("{:?} belongs to another graph", index),
        }
    }
}
impl<P> IndexMut<NodeID> for Graph<P> {
    #[track_caller]
    fn index_mut(&mut self, index: NodeID) -> &mut Node<P> {
        match self.key(index) {
            Some(key) => &mut self.nodes[key],
            None => panic!("{:?} belongs to another graph", index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_nodes() -> (Graph<()>, [NodeID; 3]) {
        let mut graph = Graph::new(Backend::Set);
        let a = graph.add_node("a", 1, 2, ()).unwrap();
        let b = graph.add_node("b", 2, 2, ()).unwrap();
        let c = graph.add_node("c", 3, 2, ()).unwrap();
        (graph, [a, b, c])
    }

    #[test]
    fn add_node_negative_cost() {
        let mut graph = Graph::new(Backend::Set);
        assert_eq!(graph.add_node("a", -1, 0, ()), Err(Error::InvalidCost(-1)));
        assert!(graph.is_empty());

        let a = graph.add_node("a", 0, 0, ()).unwrap();
        assert_eq!(graph.set_cost(a, -5), Err(Error::InvalidCost(-5)));
        assert_eq!(graph[a].cost(), 0);
        graph.set_cost(a, 1000).unwrap();
        assert_eq!(graph[a].cost(), 1000);
    }

    #[test]
    fn connections() {
        let (mut graph, [a, b, c]) = three_nodes();

        graph.add_connection(a, b).unwrap();
        graph.add_connection(a, b).unwrap();
        assert_eq!(graph[a].connections().count(), 1);
        assert!(graph[a].is_connected_to(b));
        // connections are directional
        assert!(!graph[b].is_connected_to(a));

        graph.add_pairwise_connection(b, c).unwrap();
        assert!(graph[b].is_connected_to(c));
        assert!(graph[c].is_connected_to(b));

        graph.remove_connection(a, b).unwrap();
        graph.remove_connection(a, b).unwrap();
        assert!(!graph[a].is_connected_to(b));
    }

    #[test]
    fn remove_node() {
        let (mut graph, [a, b, c]) = three_nodes();
        graph.add_pairwise_connection(a, b).unwrap();
        graph.add_connection(c, b).unwrap();

        let removed = graph.remove_node(b).unwrap();
        assert_eq!(removed.name(), "b");
        assert_eq!(graph.len(), 2);
        assert!(!graph.contains(b));
        assert_eq!(graph[a].connections().count(), 0);
        assert_eq!(graph[c].connections().count(), 0);

        assert!(graph.remove_node(b).is_none());
        assert_eq!(graph.add_connection(a, b), Err(Error::NodeNotInGraph(b)));
    }

    #[test]
    fn nodes_of_other_graphs() {
        let (mut graph, [a, _, _]) = three_nodes();
        let (mut other, [x, y, _]) = three_nodes();
        // both graphs used the same arena slots
        assert_ne!(a, x);

        assert!(!graph.contains(x));
        assert!(graph.get(x).is_none());
        assert!(graph.get_mut(x).is_none());
        assert_eq!(graph.add_connection(a, x), Err(Error::NodeNotInGraph(x)));
        assert_eq!(graph.add_connection(x, a), Err(Error::NodeNotInGraph(x)));
        assert_eq!(graph.set_cost(x, 4), Err(Error::NodeNotInGraph(x)));
        assert!(graph.remove_node(x).is_none());
        assert_eq!(graph.len(), 3);
        assert!(graph.keys().all(|id| !other.contains(id)));

        other.add_connection(x, y).unwrap();
        assert!(other[x].is_connected_to(y));
        assert_eq!(other[x].id(), x);
    }

    #[test]
    fn clone_keeps_handles() {
        let (graph, [a, b, _]) = three_nodes();
        let mut copy = graph.clone();
        assert!(copy.contains(a));
        copy.add_connection(a, b).unwrap();
        assert!(copy[a].is_connected_to(b));
        assert!(!graph[a].is_connected_to(b));
    }

    #[test]
    #[should_panic]
    fn index_other_graph() {
        let (graph, _) = three_nodes();
        let (_, [x, _, _]) = three_nodes();
        let _ = &graph[x];
    }

    #[test]
    fn reset_search_state() {
        let (mut graph, [a, b, _]) = three_nodes();
        assert!(!graph.has_search_state());

        graph[b].record_predecessor(a, 3);
        assert!(graph.has_search_state());

        graph.reset_search_state();
        assert!(!graph.has_search_state());
        assert_eq!(graph[b].predecessor(), None);
    }

    #[test]
    fn render() {
        let (mut graph, [a, b, c]) = three_nodes();
        graph.add_connection(a, c).unwrap();
        graph.add_connection(a, b).unwrap();

        assert_eq!(
            graph.render_node(a).unwrap(),
            "{id: a, cost: 1, con: ['b', 'c']}"
        );
        assert_eq!(graph.render_node(c).unwrap(), "{id: c, cost: 3, con: ['']}");

        let estimate = |node: &Node<()>| node.cost() * 10;
        assert_eq!(
            graph.render(Some(&estimate)),
            "{id: a, cost: 1, con: ['b', 'c']} -> 10\n\
             {id: b, cost: 2, con: ['']} -> 20\n\
             {id: c, cost: 3, con: ['']} -> 30"
        );
        assert_eq!(
            graph.render(None).lines().next().unwrap(),
            "{id: a, cost: 1, con: ['b', 'c']}"
        );
    }
}
