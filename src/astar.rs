use crate::container::{GraphOps, HeapContainer, SetContainer};
use crate::{Backend, Error, Graph, Heuristic, Node, NodeID, Path, Result};

/// Finds the cheapest Path from `start` to `end`.
///
/// The open and closed lists of the search are of the family the Graph declares through its
/// [`Backend`]. Graphs with [`Backend::Custom`] are refused, use [`find_reverse_path`] with
/// your own [`GraphOps`] instead.
///
/// The Heuristic is evaluated when a Node is discovered and again when it is closed. If it
/// is consistent (see [`Heuristic`]), the returned Path is a cheapest one. Closed Nodes are
/// never reopened, so a Heuristic that only never over-estimates may lead to a more
/// expensive Path.
///
/// The search stores its bookkeeping in the Nodes. After a successful search, every Node
/// of the Graph is reset, so the Graph can be searched again right away. **After a failed
/// search, the bookkeeping stays in place** and the Graph has to be cleaned up with
/// [`Graph::reset_search_state`] before it is searched again.
///
/// If `start == end`, the Path only consists of `start` and nothing is searched.
///
/// ## Errors
/// - [`Error::NodeNotInGraph`] if `start` or `end` are not part of the Graph. Nothing is
///   modified in this case.
/// - [`Error::UnsupportedContainerType`] for Graphs with [`Backend::Custom`].
/// - [`Error::NoPathFound`] if `end` cannot be reached from `start`.
/// - [`Error::InvariantViolation`] and [`Error::ContainerConflict`] if the Graph still
///   carries bookkeeping from an earlier, failed search.
/// - [`Error::BrokenPredecessorChain`] if the found Path cannot be traced back.
/// - [`Error::ResetFailure`] if the Nodes could not be reset after the search.
pub fn find_path<P, H>(graph: &mut Graph<P>, start: NodeID, end: NodeID, heuristic: &H) -> Result<Path>
where
    H: Heuristic<P> + ?Sized,
{
    find_path_with_reset(graph, start, end, heuristic, reset_node)
}

fn reset_node<P>(node: &mut Node<P>) -> Result<()> {
    node.reset();
    Ok(())
}

pub(crate) fn find_path_with_reset<P, H>(
    graph: &mut Graph<P>,
    start: NodeID,
    end: NodeID,
    heuristic: &H,
    reset: impl FnMut(&mut Node<P>) -> Result<()>,
) -> Result<Path>
where
    H: Heuristic<P> + ?Sized,
{
    let result = search(graph, start, end, heuristic, reset);

    #[cfg(feature = "log")]
    if let Err(err) = &result {
        log::debug!("find_path from {:?} to {:?} failed: {}", start, end, err);
    }

    result
}

fn search<P, H>(
    graph: &mut Graph<P>,
    start: NodeID,
    end: NodeID,
    heuristic: &H,
    mut reset: impl FnMut(&mut Node<P>) -> Result<()>,
) -> Result<Path>
where
    H: Heuristic<P> + ?Sized,
{
    #[cfg(feature = "log")]
    let (outer_timer, timer) = (std::time::Instant::now(), std::time::Instant::now());

    for id in [start, end] {
        if !graph.contains(id) {
            return Err(Error::NodeNotInGraph(id));
        }
    }
    if start == end {
        return Ok(Path::new(vec![start], graph[start].cost()));
    }

    let (mut open, mut closed): (Box<dyn GraphOps<P>>, Box<dyn GraphOps<P>>) =
        match graph.backend() {
            Backend::Set => (Box::new(SetContainer::new()), Box::new(SetContainer::new())),
            Backend::Heap { capacity_hint } => (
                Box::new(HeapContainer::new(capacity_hint)),
                Box::new(HeapContainer::new(capacity_hint)),
            ),
            Backend::Custom => return Err(Error::UnsupportedContainerType),
        };
    open.insert(graph, start)?;

    re_trace!("set up search", timer);

    find_reverse_path(graph, open.as_mut(), closed.as_mut(), end, heuristic)?;

    re_trace!("search", timer);

    // end only ever gets a predecessor if it was reached
    if graph[end].predecessor().is_none() {
        return Err(Error::NoPathFound);
    }
    let path = extract_path(graph, start, end)?;

    re_trace!("extract path", timer);

    graph
        .try_for_each_node_mut(&mut reset)
        .map_err(|err| Error::ResetFailure(Box::new(err)))?;

    re_trace!("reset nodes", timer);
    re_trace!("find_path total", outer_timer);

    Ok(path)
}

/// Runs the A* search until `end` is in the closed list or the open list is exhausted.
///
/// In the beginning, `open` has to hold the start Node and `closed` has to be empty. Neither
/// outcome is an error: if `end` was reached, its [`predecessor`](Node::predecessor) is set
/// and [`extract_path`] recovers the Path. Nodes are not reset afterwards.
///
/// This is the entry point for searches with custom [`GraphOps`] implementations.
///
/// ## Errors
/// - [`Error::InvariantViolation`] if a Node that is in neither list already has a
///   predecessor. This happens when a Graph is searched again without being reset.
/// - any error returned by the lists themselves.
pub fn find_reverse_path<P, H>(
    graph: &mut Graph<P>,
    open: &mut dyn GraphOps<P>,
    closed: &mut dyn GraphOps<P>,
    end: NodeID,
    heuristic: &H,
) -> Result<()>
where
    H: Heuristic<P> + ?Sized,
{
    let mut neighbours = vec![];

    while !open.is_empty() && !closed.contains(graph, end) {
        let current = match open.pop_minimum(graph) {
            Some(current) => current,
            None => break,
        };
        let node = graph.get(current).ok_or(Error::NodeNotInGraph(current))?;
        let estimate = heuristic.estimate(node);
        let current_cost = node.tracked_cost();
        neighbours.clear();
        neighbours.extend(node.connections());

        closed.insert_with_priority(graph, current, estimate)?;

        for &other_id in neighbours.iter() {
            if closed.contains(graph, other_id) {
                continue;
            }
            let other = graph.get(other_id).ok_or(Error::NodeNotInGraph(other_id))?;
            let other_cost = current_cost.saturating_add(other.cost());

            if open.contains(graph, other_id) {
                open.update_if_better(graph, other_id, current, other_cost);
            } else {
                let other = &mut graph[other_id];
                if other.predecessor().is_some() {
                    return Err(Error::InvariantViolation(format!(
                        "node '{}' is in neither list but already has a predecessor",
                        other.name()
                    )));
                }
                // the heap orders by tracked cost, so it has to be set before inserting
                other.record_predecessor(current, other_cost);
                let estimate = heuristic.estimate(other);
                open.insert_with_priority(graph, other_id, estimate)?;
            }
        }
    }
    Ok(())
}

/// Follows the predecessors from `end` back to `start` and returns the Path in order from
/// `start` to `end`.
///
/// ## Errors
/// [`Error::BrokenPredecessorChain`] if a Node on the way has no predecessor, or if the
/// predecessors run in a circle.
pub fn extract_path<P>(graph: &Graph<P>, start: NodeID, end: NodeID) -> Result<Path> {
    let mut steps = vec![];
    let mut cost: crate::Cost = 0;
    let mut current = end;

    while current != start {
        let node = graph.get(current).ok_or(Error::NodeNotInGraph(current))?;
        if steps.len() >= graph.len() {
            return Err(Error::BrokenPredecessorChain(node.name().to_owned()));
        }
        steps.push(current);
        cost = cost.saturating_add(node.cost());
        current = node
            .predecessor()
            .ok_or_else(|| Error::BrokenPredecessorChain(node.name().to_owned()))?;
    }

    let start_node = graph.get(start).ok_or(Error::NodeNotInGraph(start))?;
    steps.push(start);
    steps.reverse();

    Ok(Path::new(steps, cost.saturating_add(start_node.cost())))
}
