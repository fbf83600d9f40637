//! A crate for finding minimum-cost Paths between the Nodes of a user-supplied Graph
//! with the A* algorithm.
//!
//! A [`Graph`] owns a set of [`Node`]s that point at each other through directed
//! connections. Every Node carries an intrinsic cost that is paid when the search
//! enters it. Given a [`Heuristic`] that never over-estimates the remaining cost,
//! [`find_path`] returns the cheapest [`Path`] from a start Node to an end Node.
//!
//! ## Examples
//! ```
//! use astar_nodes::prelude::*;
//!
//! let mut graph = Graph::new(Backend::Heap { capacity_hint: 3 });
//! let start = graph.add_node("start", 1, 1, ()).unwrap();
//! let mid = graph.add_node("mid", 1, 2, ()).unwrap();
//! let end = graph.add_node("end", 1, 1, ()).unwrap();
//! graph.add_pairwise_connection(start, mid).unwrap();
//! graph.add_pairwise_connection(mid, end).unwrap();
//!
//! let mut estimates = HeuristicBuilder::new();
//! estimates.add_node(&graph[start], 2).unwrap();
//! estimates.add_node(&graph[mid], 1).unwrap();
//! let heuristic = estimates.seal(0);
//!
//! let path = find_path(&mut graph, start, end, &heuristic).unwrap();
//! assert_eq!(path.as_slice(), &[start, mid, end]);
//! assert_eq!(path.cost(), 3);
//! ```
//!
//! ## Reusing a Graph
//! A search writes its bookkeeping (tracked cost, predecessor, owning container) into
//! the Nodes themselves. A successful [`find_path`] clears all of it again, so the same
//! Graph can be searched any number of times. A failed search leaves the bookkeeping
//! in place; call [`Graph::reset_search_state`] before searching that Graph again.
//!
//! ## Crate Features
//! - `parallel` (default): compute grid heuristics on multiple threads via rayon.
//! - `log`: trace the time spent in each phase of a search, and log failed searches.

#![warn(missing_docs)]

// a Macro to log::trace the time since $timer, and restart $timer
#[cfg(feature = "log")]
macro_rules! re_trace {
    ($msg: literal, $timer: ident) => {
        let now = std::time::Instant::now();
        log::trace!(concat!("time to ", $msg, ": {:?}"), now - $timer);
        #[allow(unused)]
        let $timer = now;
    };
}
#[cfg(not(feature = "log"))]
macro_rules! re_trace {
    // does nothing without log feature
    ($msg: literal, $timer: ident) => {};
}

mod astar;
pub use astar::{extract_path, find_path, find_reverse_path};

pub mod container;
pub use container::{ContainerId, GraphOps, HeapContainer, SetContainer};

mod error;
pub use error::{Error, Result};

mod graph;
pub use graph::{Backend, Graph, Node};

pub mod grid;

mod heuristic;
pub use heuristic::{Heuristic, HeuristicBuilder, SealedHeuristic};

mod path;
pub use path::{Cost, Path};

slotmap::new_key_type! {
    struct NodeKey;
}

/// A stable handle to a [`Node`] inside a [`Graph`].
///
/// Handles remember the Graph that created them, so a handle never refers to a Node of
/// another Graph. A cloned Graph accepts the handles of the original.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeID {
    graph: graph::GraphId,
    key: NodeKey,
}

static NEXT_UNIQUE_ID: std::sync::atomic::AtomicUsize = std::sync::atomic::AtomicUsize::new(0);

/// A process-wide unique number, shared by Graphs and containers
pub(crate) fn next_unique_id() -> usize {
    NEXT_UNIQUE_ID.fetch_add(1, std::sync::atomic::Ordering::Relaxed)
}

/// A shorthand for Sets of [`NodeID`]s
pub type NodeIDSet = hashbrown::HashSet<NodeID>;
/// A shorthand for Maps from [`NodeID`]s
pub type NodeIDMap<V> = hashbrown::HashMap<NodeID, V>;

/// A shorthand for Points on a grid
pub type Point = (usize, usize);
/// A shorthand for Maps from [`Point`]s
pub type PointMap<V> = hashbrown::HashMap<Point, V>;

/// The prelude for this crate.
pub mod prelude {
    pub use crate::{
        find_path, find_reverse_path, Backend, Cost, Error, Graph, GraphOps, HeapContainer,
        Heuristic, HeuristicBuilder, NodeID, Path, SealedHeuristic, SetContainer,
    };
}
