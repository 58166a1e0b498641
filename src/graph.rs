//! The graph model: vertices with integer locations, weighted edges, and the
//! bounding rectangle of everything inserted so far.
//!
//! Vertices and edges are stored in two parallel arenas owned by the
//! `Graph`, addressed by a stable `usize` index, rather than as a web of
//! `Rc`/`RefCell` cross-references. This sidesteps the vertex-edge cycle
//! entirely: an `Edge` holds the arena index of each endpoint, a `Vertex`
//! holds the arena indices of its incident edges, and the `Graph` is the
//! only owner of either.

use std::collections::HashMap;

use crate::error::DivisionError;
use crate::geometry::{Point, Rectangle};

struct VertexRecord {
    id: i64,
    location: Point,
    edges: Vec<usize>,
}

struct EdgeRecord {
    id: i64,
    a: usize,
    b: usize,
    weight: i64,
}

/// A weighted, undirected planar graph, built incrementally by
/// [`Graph::add_vertex`] and [`Graph::add_edge`], then treated as read-only.
#[derive(Default)]
pub struct Graph {
    vertices: Vec<VertexRecord>,
    edges: Vec<EdgeRecord>,
    vertex_of_id: HashMap<i64, usize>,
    edge_of_id: HashMap<i64, usize>,
    bounds: Option<Rectangle>,
}

impl Graph {
    pub fn new() -> Self {
        Graph::default()
    }

    /// Inserts a vertex with the given id and location, growing the graph's
    /// bounds to cover it. A duplicate id overwrites the stored location of
    /// the existing vertex in place; its incident edges (and insertion
    /// position, for iteration order) are left untouched.
    pub fn add_vertex(&mut self, id: i64, location: Point) {
        match self.bounds {
            None => self.bounds = Some(Rectangle::at_point(location)),
            Some(ref mut bounds) => bounds.encapsulate(location),
        }

        if let Some(&index) = self.vertex_of_id.get(&id) {
            self.vertices[index].location = location;
            return;
        }

        let index = self.vertices.len();
        self.vertices.push(VertexRecord {
            id,
            location,
            edges: Vec::new(),
        });
        self.vertex_of_id.insert(id, index);
    }

    /// Inserts an edge between two already-known vertices. A duplicate edge
    /// id overwrites the previous edge's endpoints and weight in place,
    /// unlinking it from any endpoint it no longer touches.
    pub fn add_edge(&mut self, id: i64, a_id: i64, b_id: i64, weight: i64) -> Result<(), DivisionError> {
        let a = *self
            .vertex_of_id
            .get(&a_id)
            .ok_or(DivisionError::UnknownVertex(a_id))?;
        let b = *self
            .vertex_of_id
            .get(&b_id)
            .ok_or(DivisionError::UnknownVertex(b_id))?;

        if let Some(&index) = self.edge_of_id.get(&id) {
            let old = &self.edges[index];
            let (old_a, old_b) = (old.a, old.b);
            if old_a != a {
                self.vertices[old_a].edges.retain(|&e| e != index);
            }
            if old_b != b {
                self.vertices[old_b].edges.retain(|&e| e != index);
            }
            self.edges[index] = EdgeRecord { id, a, b, weight };
            if old_a != a {
                self.vertices[a].edges.push(index);
            }
            if old_b != b {
                self.vertices[b].edges.push(index);
            }
            return Ok(());
        }

        let index = self.edges.len();
        self.edges.push(EdgeRecord { id, a, b, weight });
        self.vertices[a].edges.push(index);
        self.vertices[b].edges.push(index);
        self.edge_of_id.insert(id, index);
        Ok(())
    }

    /// The smallest rectangle containing every inserted vertex location, or
    /// `None` if no vertex has been added.
    pub fn bounds(&self) -> Option<Rectangle> {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterates vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexRef<'_>> {
        (0..self.vertices.len()).map(move |index| VertexRef { graph: self, index })
    }

    pub fn vertex(&self, id: i64) -> Option<VertexRef<'_>> {
        let &index = self.vertex_of_id.get(&id)?;
        Some(VertexRef { graph: self, index })
    }
}

/// A read-only handle to a vertex, borrowed from its owning [`Graph`].
#[derive(Clone, Copy)]
pub struct VertexRef<'a> {
    graph: &'a Graph,
    index: usize,
}

impl<'a> VertexRef<'a> {
    fn record(&self) -> &'a VertexRecord {
        &self.graph.vertices[self.index]
    }

    pub fn id(&self) -> i64 {
        self.record().id
    }

    pub fn location(&self) -> Point {
        self.record().location
    }

    /// Iterates the edges incident to this vertex, in the order they were
    /// added.
    pub fn edges(&self) -> impl Iterator<Item = EdgeRef<'a>> + 'a {
        let graph = self.graph;
        self.record()
            .edges
            .iter()
            .map(move |&index| EdgeRef { graph, index })
    }
}

/// A read-only handle to an edge, borrowed from its owning [`Graph`].
#[derive(Clone, Copy)]
pub struct EdgeRef<'a> {
    graph: &'a Graph,
    index: usize,
}

impl<'a> EdgeRef<'a> {
    fn record(&self) -> &'a EdgeRecord {
        &self.graph.edges[self.index]
    }

    pub fn id(&self) -> i64 {
        self.record().id
    }

    pub fn weight(&self) -> i64 {
        self.record().weight
    }

    pub fn a_id(&self) -> i64 {
        self.graph.vertices[self.record().a].id
    }

    pub fn b_id(&self) -> i64 {
        self.graph.vertices[self.record().b].id
    }

    /// The endpoint id other than `vertex_id`. Panics if `vertex_id` is not
    /// one of this edge's endpoints, which would indicate a caller bug.
    pub fn other(&self, vertex_id: i64) -> i64 {
        let record = self.record();
        let a_id = self.graph.vertices[record.a].id;
        let b_id = self.graph.vertices[record.b].id;
        if vertex_id == a_id {
            b_id
        } else {
            debug_assert_eq!(vertex_id, b_id, "vertex {vertex_id} is not an endpoint of edge {}", record.id);
            a_id
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_track_inserted_vertices() {
        let mut g = Graph::new();
        assert!(g.bounds().is_none());
        g.add_vertex(0, Point::new(0, 0));
        assert_eq!(g.bounds().unwrap(), Rectangle::new(0, 0, 0, 0));
        g.add_vertex(1, Point::new(3, -1));
        let bounds = g.bounds().unwrap();
        assert!(bounds.contains(Point::new(0, 0)));
        assert!(bounds.contains(Point::new(3, -1)));
    }

    #[test]
    fn add_edge_fails_on_unknown_vertex() {
        let mut g = Graph::new();
        g.add_vertex(0, Point::new(0, 0));
        let err = g.add_edge(0, 0, 42, 1).unwrap_err();
        assert_eq!(err, DivisionError::UnknownVertex(42));
    }

    #[test]
    fn edges_are_visible_from_both_endpoints() {
        let mut g = Graph::new();
        g.add_vertex(0, Point::new(0, 0));
        g.add_vertex(1, Point::new(1, 0));
        g.add_edge(0, 0, 1, 7).unwrap();

        let v0 = g.vertex(0).unwrap();
        let incident: Vec<_> = v0.edges().map(|e| e.id()).collect();
        assert_eq!(incident, vec![0]);

        let v1 = g.vertex(1).unwrap();
        let incident: Vec<_> = v1.edges().map(|e| e.id()).collect();
        assert_eq!(incident, vec![0]);

        let edge = v0.edges().next().unwrap();
        assert_eq!(edge.other(0), 1);
        assert_eq!(edge.other(1), 0);
        assert_eq!(edge.weight(), 7);
    }

    #[test]
    fn duplicate_vertex_id_overwrites_location_in_place() {
        let mut g = Graph::new();
        g.add_vertex(0, Point::new(0, 0));
        g.add_vertex(1, Point::new(5, 5));
        g.add_edge(0, 0, 1, 1).unwrap();

        g.add_vertex(0, Point::new(9, 9));
        assert_eq!(g.vertex(0).unwrap().location(), Point::new(9, 9));
        // the edge added before the overwrite is still there.
        assert_eq!(g.vertex(0).unwrap().edges().count(), 1);
    }

    #[test]
    fn duplicate_edge_id_rewires_endpoints() {
        let mut g = Graph::new();
        g.add_vertex(0, Point::new(0, 0));
        g.add_vertex(1, Point::new(1, 0));
        g.add_vertex(2, Point::new(2, 0));
        g.add_edge(0, 0, 1, 1).unwrap();
        g.add_edge(0, 0, 2, 9).unwrap();

        assert_eq!(g.vertex(1).unwrap().edges().count(), 0);
        let v0_edges: Vec<_> = g.vertex(0).unwrap().edges().map(|e| e.id()).collect();
        assert_eq!(v0_edges, vec![0]);
        let v2_edges: Vec<_> = g.vertex(2).unwrap().edges().map(|e| e.id()).collect();
        assert_eq!(v2_edges, vec![0]);
        assert_eq!(g.vertex(0).unwrap().edges().next().unwrap().weight(), 9);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut g = Graph::new();
        g.add_vertex(5, Point::new(0, 0));
        g.add_vertex(2, Point::new(1, 0));
        g.add_vertex(9, Point::new(2, 0));
        let ids: Vec<_> = g.vertices().map(|v| v.id()).collect();
        assert_eq!(ids, vec![5, 2, 9]);
    }
}
