//! Division partitions a planar, weighted, undirected graph into disjoint
//! vertex regions suitable for sharding across workers in a distributed
//! shortest-path service.
//!
//! # Crate layout
//!
//! - [`geometry`]: integer points and half-open rectangles.
//! - [`graph`]: the vertex/edge arena and its bounding rectangle.
//! - [`partition`]: the k-d spatial subdivision that produces leaf regions.
//! - [`consolidate`]: the region consolidator that repairs leaf regions
//!   against graph connectivity.
//! - [`analysis`]: read-only diagnostics over a finished partition.
//! - [`error`]: the error type shared by [`graph`] and [`consolidate`].
//!
//! # Example
//!
//! ```rust
//! use division::geometry::Point;
//! use division::graph::Graph;
//! use division::{consolidate, partition};
//!
//! let mut graph = Graph::new();
//! graph.add_vertex(0, Point::new(0, 0));
//! graph.add_vertex(1, Point::new(1, 0));
//! graph.add_vertex(2, Point::new(2, 0));
//! graph.add_edge(0, 0, 1, 1).unwrap();
//!
//! let leaves = partition::partition(&graph, 10);
//! let regions = consolidate::consolidate(&graph, &leaves).unwrap();
//! assert_eq!(regions.len(), 1);
//! ```

pub mod analysis;
pub mod consolidate;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod partition;

pub use consolidate::consolidate;
pub use error::DivisionError;
pub use geometry::{Point, Rectangle};
pub use graph::Graph;
pub use partition::{partition, LeafRegion};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trivial_pipeline_keeps_all_vertices_in_one_region() {
        let mut graph = Graph::new();
        graph.add_vertex(0, Point::new(0, 0));
        graph.add_vertex(1, Point::new(1, 0));
        graph.add_vertex(2, Point::new(2, 0));
        graph.add_edge(0, 0, 1, 1).unwrap();

        let leaves = partition(&graph, 10);
        let regions = consolidate(&graph, &leaves).unwrap();

        assert_eq!(regions.len(), 1);
        let mut region = regions[0].clone();
        region.sort();
        assert_eq!(region, vec![0, 1, 2]);
    }

    #[test]
    fn split_k4_into_four_singleton_regions() {
        let mut graph = Graph::new();
        for (id, x, y) in [(0, 0, 0), (1, 10, 0), (2, 0, 10), (3, 10, 10)] {
            graph.add_vertex(id, Point::new(x, y));
        }
        let mut edge_id = 0;
        for a in 0..4 {
            for b in (a + 1)..4 {
                graph.add_edge(edge_id, a, b, 1).unwrap();
                edge_id += 1;
            }
        }

        let leaves = partition(&graph, 1);
        assert_eq!(leaves.len(), 4);
        let regions = consolidate(&graph, &leaves).unwrap();
        assert_eq!(regions.len(), 4);
        for region in &regions {
            assert_eq!(region.len(), 1);
        }
    }

    #[test]
    fn split_into_two_components_needs_no_repair() {
        let mut graph = Graph::new();
        for (id, x) in [(0, 0), (1, 1), (2, 100), (3, 101)] {
            graph.add_vertex(id, Point::new(x, 0));
        }
        graph.add_edge(0, 0, 1, 1).unwrap();
        graph.add_edge(1, 2, 3, 1).unwrap();

        let leaves = partition(&graph, 2);
        assert_eq!(leaves.len(), 2);
        let regions = consolidate(&graph, &leaves).unwrap();
        assert_eq!(regions.iter().filter(|r| !r.is_empty()).count(), 2);
    }
}
