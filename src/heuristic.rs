use crate::{Cost, Error, Node, NodeIDMap, Result};

/// Estimates the remaining cost of reaching the end Node from any Node.
///
/// The estimate has to be provided for every Node, even ones the Heuristic knows nothing
/// about. For [`find_path`](crate::find_path) to be guaranteed to return the cheapest
/// Path, the Heuristic must be consistent: for every connection from `u` to `v`,
/// `estimate(u) <= v.cost() + estimate(v)`, and the estimate of the end Node is 0.
/// Closed Nodes are never reopened, so a Heuristic that merely never over-estimates can
/// lead to a more expensive Path. None of this is checked at runtime.
///
/// Any `Fn(&Node<P>) -> Cost` is a Heuristic, so `|_: &Node<()>| 0` turns the search into
/// a plain Dijkstra search.
pub trait Heuristic<P> {
    /// The estimated cost of getting from `node` to the end Node
    fn estimate(&self, node: &Node<P>) -> Cost;
}

impl<P, F> Heuristic<P> for F
where
    F: Fn(&Node<P>) -> Cost,
{
    fn estimate(&self, node: &Node<P>) -> Cost {
        self(node)
    }
}

/// Collects a constant estimate per Node, then [`seal`](HeuristicBuilder::seal)s them into
/// an immutable [`SealedHeuristic`].
///
/// ## Examples
/// ```
/// use astar_nodes::prelude::*;
///
/// let mut graph = Graph::new(Backend::Set);
/// let a = graph.add_node("a", 1, 0, ()).unwrap();
/// let b = graph.add_node("b", 1, 0, ()).unwrap();
///
/// let mut builder = HeuristicBuilder::new();
/// builder.add_node(&graph[a], 4).unwrap();
/// // registering the same estimate again is fine
/// builder.add_node(&graph[a], 4).unwrap();
/// assert!(builder.add_node(&graph[a], 5).is_err());
///
/// let heuristic = builder.seal(1);
/// assert_eq!(heuristic.estimate(&graph[a]), 4);
/// assert_eq!(heuristic.estimate(&graph[b]), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct HeuristicBuilder {
    estimates: NodeIDMap<Cost>,
}

impl HeuristicBuilder {
    /// Creates a builder without any estimates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder with room for `capacity` estimates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            estimates: NodeIDMap::with_capacity(capacity),
        }
    }

    /// The number of Nodes with an estimate
    pub fn len(&self) -> usize {
        self.estimates.len()
    }

    /// Checks whether no estimate was added since the last [`seal`](Self::seal).
    pub fn is_empty(&self) -> bool {
        self.estimates.is_empty()
    }

    /// Records the estimated remaining cost for `node`.
    ///
    /// ## Errors
    /// [`Error::ConflictingEstimate`] if `node` already has a different estimate.
    pub fn add_node<P>(&mut self, node: &Node<P>, estimate: Cost) -> Result<()> {
        match self.estimates.insert(node.id(), estimate) {
            Some(old) if old != estimate => {
                self.estimates.insert(node.id(), old);
                Err(Error::ConflictingEstimate {
                    node: node.name().to_owned(),
                    old,
                    new: estimate,
                })
            }
            _ => Ok(()),
        }
    }

    /// Turns the collected estimates into a Heuristic that returns `default` for every Node
    /// without an estimate.
    ///
    /// The builder is left empty, so further calls to [`add_node`](Self::add_node) start a
    /// new, independent Heuristic.
    pub fn seal(&mut self, default: Cost) -> SealedHeuristic {
        SealedHeuristic {
            estimates: std::mem::take(&mut self.estimates),
            default,
        }
    }
}

/// The immutable Heuristic produced by [`HeuristicBuilder::seal`]
#[derive(Clone, Debug)]
pub struct SealedHeuristic {
    estimates: NodeIDMap<Cost>,
    default: Cost,
}

impl SealedHeuristic {
    /// The estimate for Nodes that were never added to the builder
    pub fn default_estimate(&self) -> Cost {
        self.default
    }
}

impl<P> Heuristic<P> for SealedHeuristic {
    fn estimate(&self, node: &Node<P>) -> Cost {
        self.estimates
            .get(&node.id())
            .copied()
            .unwrap_or(self.default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Backend, Graph};

    #[test]
    fn conflicting_estimate() {
        let mut graph = Graph::new(Backend::Set);
        let a = graph.add_node("a", 0, 0, ()).unwrap();

        let mut builder = HeuristicBuilder::new();
        builder.add_node(&graph[a], 3).unwrap();
        builder.add_node(&graph[a], 3).unwrap();
        assert_eq!(
            builder.add_node(&graph[a], 4),
            Err(Error::ConflictingEstimate {
                node: "a".into(),
                old: 3,
                new: 4
            })
        );
        assert_eq!(builder.len(), 1);

        // the rejected estimate must not replace the old one
        assert_eq!(builder.seal(0).estimate(&graph[a]), 3);
    }

    #[test]
    fn seal_starts_fresh() {
        let mut graph = Graph::new(Backend::Set);
        let a = graph.add_node("a", 0, 0, ()).unwrap();
        let b = graph.add_node("b", 0, 0, ()).unwrap();

        let mut builder = HeuristicBuilder::new();
        builder.add_node(&graph[a], 1).unwrap();
        let first = builder.seal(100);
        assert!(builder.is_empty());

        // a different estimate for the same node is fine after sealing
        builder.add_node(&graph[a], 2).unwrap();
        builder.add_node(&graph[b], 5).unwrap();
        let second = builder.seal(200);

        assert_eq!(first.estimate(&graph[a]), 1);
        assert_eq!(first.estimate(&graph[b]), 100);
        assert_eq!(second.estimate(&graph[a]), 2);
        assert_eq!(second.estimate(&graph[b]), 5);
        assert_eq!(second.default_estimate(), 200);
    }

    #[test]
    fn nodes_of_other_graphs_get_default() {
        let mut graph = Graph::new(Backend::Set);
        let a = graph.add_node("a", 0, 0, ()).unwrap();
        let mut other = Graph::new(Backend::Set);
        let x = other.add_node("x", 0, 0, ()).unwrap();

        let mut builder = HeuristicBuilder::new();
        builder.add_node(&graph[a], 5).unwrap();
        let heuristic = builder.seal(9);

        assert_eq!(heuristic.estimate(&graph[a]), 5);
        // x sits in the same arena slot as a
        assert_eq!(heuristic.estimate(&other[x]), 9);
    }

    #[test]
    fn closures() {
        let mut graph = Graph::new(Backend::Set);
        let a = graph.add_node("a", 0, 0, (3usize, 4usize)).unwrap();

        let manhattan = |node: &Node<(usize, usize)>| node.payload.0 + node.payload.1;
        assert_eq!(manhattan.estimate(&graph[a]), 7);
    }
}
