use thiserror::Error;

use crate::{ContainerId, NodeID};

/// Everything that can go wrong while building a [`Graph`](crate::Graph) or searching it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A Node was given a negative cost
    #[error("Cannot apply negative cost {0}")]
    InvalidCost(isize),
    /// A Node was registered twice with different estimates
    #[error("Estimate for node '{node}' deviates: old {old}, new {new}")]
    ConflictingEstimate {
        #[allow(missing_docs)]
        node: String,
        #[allow(missing_docs)]
        old: usize,
        #[allow(missing_docs)]
        new: usize,
    },
    /// A handle does not refer to a Node of the Graph
    #[error("Node {0:?} is not part of the graph")]
    NodeNotInGraph(NodeID),
    /// The Graph declares [`Backend::Custom`](crate::Backend::Custom)
    #[error("Graph does not declare a built-in backend, use find_reverse_path with custom containers")]
    UnsupportedContainerType,
    /// The end Node cannot be reached from the start Node
    #[error("No connection from the start node to the end node")]
    NoPathFound,
    /// A Node outside of the open and closed lists already has a predecessor
    #[error("Invariant violated: {0}")]
    InvariantViolation(String),
    /// Following the predecessors from the end Node did not lead back to the start Node
    #[error("Broken predecessor chain at node '{0}'")]
    BrokenPredecessorChain(String),
    /// Clearing the search bookkeeping after a successful search failed
    #[error("Failed to reset node state: {0}")]
    ResetFailure(Box<Error>),
    /// A Node was inserted into a container while it is stored in another one
    #[error("Node '{node}' is already owned by container {owner:?}")]
    ContainerConflict {
        #[allow(missing_docs)]
        node: String,
        /// The container currently holding the Node
        owner: ContainerId,
    },
    /// The same Node was supplied twice where unique Nodes are required
    #[error("Duplicate node {0:?} in input")]
    DuplicateNodes(NodeID),
}

/// A shorthand for Results with this crate's [`Error`]
pub type Result<T> = std::result::Result<T, Error>;
