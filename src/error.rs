//! Error types raised by the graph model and the region consolidator.
//!
//! The k-d partitioner never fails: any input it is given, it subdivides
//! (the stall guard in [`crate::partition`] bounds degenerate recursion
//! instead of erroring). Everything that *can* fail is a property of the
//! graph's topology relative to the caller's data, not of the geometry.

use thiserror::Error;

/// Errors raised by [`crate::graph::Graph`] and [`crate::consolidate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DivisionError {
    /// An edge named a vertex id that was never added to the graph.
    #[error("edge references unknown vertex id {0}")]
    UnknownVertex(i64),

    /// A cluster of detached vertices has no edge reaching any vertex that
    /// still holds a region assignment, so it cannot be re-homed.
    #[error("detached cluster seeded at vertex {0} has no path to an assigned region")]
    OrphanCluster(i64),

    /// Phase 4 found a vertex with no final region assignment. This is an
    /// invariant violation inside the consolidator, not a data problem.
    #[error("vertex {0} was never assigned a final region")]
    UnassignedVertex(i64),
}
