//! Helpers for the common case of searching a regular 2D grid.
//!
//! ## Examples
//! ```
//! use astar_nodes::prelude::*;
//! use astar_nodes::grid::{create_regular_2d_grid, line_of_sight_heuristic, MANHATTAN};
//!
//! let (mut graph, positions) =
//!     create_regular_2d_grid((5, 5), &MANHATTAN, Backend::Heap { capacity_hint: 25 }).unwrap();
//! for (&(x, y), &id) in positions.iter() {
//!     // a wall with a gap at the bottom
//!     let cost = if x == 2 && y < 4 { 100 } else { 1 };
//!     graph.set_cost(id, cost).unwrap();
//! }
//!
//! let heuristic = line_of_sight_heuristic(&graph, &positions, (4, 0), 0).unwrap();
//! let path = find_path(&mut graph, positions[&(0, 0)], positions[&(4, 0)], &heuristic).unwrap();
//! assert_eq!(path.cost(), 13);
//! assert_eq!(path.len(), 13);
//! ```

#[cfg(test)]
pub(crate) mod dijkstra;

use crate::{Backend, Cost, Error, Graph, HeuristicBuilder, NodeID, Point, PointMap, Result, SealedHeuristic};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Displacements connecting a cell to its horizontal and vertical neighbours
pub const MANHATTAN: [(isize, isize); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

/// Displacements connecting a cell to all eight surrounding cells
pub const MOORE: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Creates a Graph with one Node for every cell of a `width * height` grid.
///
/// Every Node is named `x:<x>,y:<y>`, costs 0 and carries its position as payload. Each
/// displacement in `connections` that leads to another cell of the grid connects the two
/// cells in both directions.
///
/// Returns the Graph and the Node for each position, which makes it easy to change costs
/// afterwards.
pub fn create_regular_2d_grid(
    (width, height): (usize, usize),
    connections: &[(isize, isize)],
    backend: Backend,
) -> Result<(Graph<Point>, PointMap<NodeID>)> {
    let mut graph = Graph::with_capacity(backend, width * height);
    let mut positions = PointMap::with_capacity(width * height);

    for x in 0..width {
        for y in 0..height {
            let name = format!("x:{},y:{}", x, y);
            let id = graph.add_node(name, 0, connections.len(), (x, y))?;
            positions.insert((x, y), id);
        }
    }

    for (&(x, y), &id) in positions.iter() {
        for &(dx, dy) in connections {
            let other = match (x.checked_add_signed(dx), y.checked_add_signed(dy)) {
                (Some(x), Some(y)) => positions.get(&(x, y)),
                _ => None,
            };
            if let Some(&other) = other {
                graph.add_pairwise_connection(id, other)?;
            }
        }
    }

    Ok((graph, positions))
}

/// Creates a Heuristic that estimates the remaining cost as the straight-line distance to
/// `dest`, rounded down. Nodes that are not in `positions` get `default`.
///
/// The estimates are consistent if entering a cell costs at least the distance from the
/// neighbouring cell it is entered from.
///
/// ## Errors
/// [`Error::NodeNotInGraph`] if a Node of `positions` is not part of `graph`, and
/// [`Error::ConflictingEstimate`] if the same Node appears at two positions.
pub fn line_of_sight_heuristic<P>(
    graph: &Graph<P>,
    positions: &PointMap<NodeID>,
    dest: Point,
    default: Cost,
) -> Result<SealedHeuristic> {
    #[cfg(feature = "parallel")]
    let iter = positions.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = positions.iter();

    let estimates: Vec<(NodeID, Cost)> = iter.map(|(&pos, &id)| (id, dist_2d(pos, dest))).collect();

    let mut builder = HeuristicBuilder::with_capacity(estimates.len());
    for (id, estimate) in estimates {
        let node = graph.get(id).ok_or(Error::NodeNotInGraph(id))?;
        builder.add_node(node, estimate)?;
    }
    Ok(builder.seal(default))
}

fn dist_2d(a: Point, b: Point) -> Cost {
    let dx = a.0.abs_diff(b.0) as f64;
    let dy = a.1.abs_diff(b.1) as f64;
    (dx * dx + dy * dy).sqrt().floor() as Cost
}
