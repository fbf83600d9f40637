use crate::{Cost, Graph, NodeID, NodeIDMap};

use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(PartialEq, Eq)]
struct Element(NodeID, Cost);

impl Ord for Element {
    fn cmp(&self, rhs: &Self) -> Ordering {
        rhs.1.cmp(&self.1).then_with(|| rhs.0.cmp(&self.0))
    }
}
impl PartialOrd for Element {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

/// The cost of the cheapest Path from `start` to every reachable Node, counting the cost of
/// every Node on the Path including `start`.
///
/// Works on its own bookkeeping and leaves the Graph untouched, so it can check the results
/// of the A* search.
pub(crate) fn cheapest_costs<P>(graph: &Graph<P>, start: NodeID) -> NodeIDMap<Cost> {
    let mut visited = NodeIDMap::with_capacity(graph.len());
    let mut next = BinaryHeap::with_capacity(graph.len() / 2);

    let start_cost = graph[start].cost();
    next.push(Element(start, start_cost));
    visited.insert(start, start_cost);

    let mut all_neighbors = vec![];

    while let Some(Element(current_id, current_cost)) = next.pop() {
        match current_cost.cmp(&visited[&current_id]) {
            Ordering::Greater => continue,
            Ordering::Equal => {}
            Ordering::Less => panic!("Binary Heap failed"),
        }

        all_neighbors.clear();
        all_neighbors.extend(graph[current_id].connections());

        for &other_id in all_neighbors.iter() {
            let other_cost = current_cost + graph[other_id].cost();
            let needs_visit = match visited.get_mut(&other_id) {
                Some(prev_cost) if *prev_cost > other_cost => {
                    *prev_cost = other_cost;
                    true
                }
                Some(_) => false,
                None => {
                    visited.insert(other_id, other_cost);
                    true
                }
            };
            if needs_visit {
                next.push(Element(other_id, other_cost));
            }
        }
    }

    visited
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Backend;

    #[test]
    fn basic() {
        let mut graph = Graph::new(Backend::Set);
        let a = graph.add_node("a", 1, 2, ()).unwrap();
        let b = graph.add_node("b", 10, 2, ()).unwrap();
        let c = graph.add_node("c", 2, 2, ()).unwrap();
        let d = graph.add_node("d", 3, 2, ()).unwrap();
        let lonely = graph.add_node("lonely", 0, 0, ()).unwrap();
        graph.add_pairwise_connection(a, b).unwrap();
        graph.add_pairwise_connection(a, c).unwrap();
        graph.add_pairwise_connection(b, d).unwrap();
        graph.add_pairwise_connection(c, d).unwrap();

        let costs = cheapest_costs(&graph, a);
        assert_eq!(costs[&a], 1);
        assert_eq!(costs[&b], 11);
        assert_eq!(costs[&c], 3);
        assert_eq!(costs[&d], 6);
        assert!(!costs.contains_key(&lonely));
        assert!(!graph.has_search_state());
    }
}
