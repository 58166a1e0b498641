//! The k-d spatial partitioner.
//!
//! Vertices are accumulated into a single root node, then recursively split
//! along alternating axes at a positional pivot until every leaf holds at
//! most `max_accumulation` vertices. The tree itself is discarded once
//! leaves are extracted; only the `(rectangle, vertices)` pairs survive
//! into the region consolidator.

use crate::geometry::{Point, Rectangle};
use crate::graph::Graph;

/// One item accumulated by the tree: just enough to route and sort by.
#[derive(Clone, Copy)]
struct Item {
    vertex_id: i64,
    location: Point,
}

/// A leaf of the k-d tree: a rectangle and the vertex ids whose locations
/// fall inside it.
#[derive(Debug, Clone)]
pub struct LeafRegion {
    pub rectangle: Rectangle,
    pub vertex_ids: Vec<i64>,
}

/// Either an `Accumulator` still holding raw items, or a `Split` with two
/// children whose rectangles exactly tile the parent's.
///
/// Inserting items one at a time and then dividing, versus directly
/// partitioning the item list at split time, are equivalent here (every
/// item is routed by the same `contains` test either way), so this tree is
/// built bottom-up in one pass rather than via a separate insert step.
enum Node {
    Accumulator { rectangle: Rectangle, items: Vec<Item> },
    Split { left: Box<Node>, right: Box<Node> },
}

impl Node {
    fn collect_leaves(self, out: &mut Vec<LeafRegion>) {
        match self {
            Node::Accumulator { rectangle, items } => {
                out.push(LeafRegion {
                    rectangle,
                    vertex_ids: items.into_iter().map(|i| i.vertex_id).collect(),
                });
            }
            Node::Split { left, right } => {
                left.collect_leaves(out);
                right.collect_leaves(out);
            }
        }
    }
}

/// Splits `items` into two new child accumulators along `axis` (`0` = x,
/// `1` = y) and recurses on each child at `depth + 1`.
///
/// A stall guard. If splitting along the depth-mandated axis fails to
/// shrink both children below the parent's size (every item collided onto
/// one side, for example a run of vertices that share an x coordinate
/// longer than `max_accumulation`), the other axis is tried once before
/// giving up and returning an oversized leaf. Without this, coordinate
/// collisions would recurse on the same axis forever.
fn divide(rectangle: Rectangle, items: Vec<Item>, max_accumulation: usize, depth: u32) -> Node {
    if items.len() <= max_accumulation {
        return Node::Accumulator { rectangle, items };
    }

    let axis = (depth % 2) as usize;
    if let Some(node) = try_split(rectangle, &items, axis, max_accumulation, depth) {
        return node;
    }
    if let Some(node) = try_split(rectangle, &items, 1 - axis, max_accumulation, depth) {
        return node;
    }
    Node::Accumulator { rectangle, items }
}

/// Attempts one split along `axis`, returning `None` if it made no progress
/// (every item landed in the same child as the parent had).
fn try_split(
    rectangle: Rectangle,
    items: &[Item],
    axis: usize,
    max_accumulation: usize,
    depth: u32,
) -> Option<Node> {
    let (left_rect, right_rect) = split_rectangles(rectangle, items, axis);
    let (left_items, right_items): (Vec<Item>, Vec<Item>) = items
        .iter()
        .copied()
        .partition(|item| left_rect.contains(item.location));

    if left_items.len() == items.len() || right_items.len() == items.len() {
        return None;
    }

    let left = divide(left_rect, left_items, max_accumulation, depth + 1);
    let right = divide(right_rect, right_items, max_accumulation, depth + 1);
    Some(Node::Split {
        left: Box::new(left),
        right: Box::new(right),
    })
}

/// Computes the pivot-based child rectangles for `items` split along
/// `axis`. Sorts by the axis coordinate, takes the item at
/// `min(n-1, n/2 + 1)`, and splits the parent rectangle at that item's
/// coordinate.
fn split_rectangles(rect: Rectangle, items: &[Item], axis: usize) -> (Rectangle, Rectangle) {
    let mut sorted: Vec<&Item> = items.iter().collect();
    if axis == 0 {
        sorted.sort_by_key(|item| item.location.x);
    } else {
        sorted.sort_by_key(|item| item.location.y);
    }

    let n = sorted.len();
    let pivot_index = std::cmp::min(n - 1, n / 2 + 1);
    let pivot = &sorted[pivot_index];

    if axis == 0 {
        let m = pivot.location.x;
        let left = Rectangle::new(rect.left(), rect.bottom(), m - rect.left(), rect.h);
        let right = Rectangle::new(left.right(), rect.bottom(), rect.right() - left.right(), rect.h);
        (left, right)
    } else {
        let m = pivot.location.y;
        let bottom = Rectangle::new(rect.left(), rect.bottom(), rect.w, m - rect.bottom());
        let top = Rectangle::new(rect.left(), bottom.top(), rect.w, rect.top() - bottom.top());
        (bottom, top)
    }
}

/// Builds the leaf regions of the k-d partition of `graph`'s vertices,
/// each holding at most `max_accumulation` vertices.
///
/// Returns an empty vector if the graph has no vertices.
pub fn partition(graph: &Graph, max_accumulation: usize) -> Vec<LeafRegion> {
    let Some(bounds) = graph.bounds() else {
        return Vec::new();
    };

    let items: Vec<Item> = graph
        .vertices()
        .map(|v| Item {
            vertex_id: v.id(),
            location: v.location(),
        })
        .collect();

    let root = divide(bounds, items, max_accumulation, 0);
    let mut leaves = Vec::new();
    root.collect_leaves(&mut leaves);
    leaves
}
