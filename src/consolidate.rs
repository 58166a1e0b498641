//! The region consolidator: repairs the k-d partition against graph
//! topology.
//!
//! A leaf produced by [`crate::partition`] is spatially coherent but may
//! not be connected: two vertices can sit inside the same rectangle with
//! no path between them that stays inside the region. This module finds
//! every such split, keeps the largest connected piece under the region's
//! original id, and re-homes the rest ("detached" vertices) into whichever
//! neighbouring region they actually connect to, by breadth-first search
//! over the full graph.

use std::collections::{HashMap, HashSet, VecDeque};

use itertools::Itertools;
use tracing::{debug, info, instrument};

use crate::error::DivisionError;
use crate::graph::Graph;
use crate::partition::LeafRegion;

/// A disjoint-set forest over `i64` keys, path-compressed with
/// union-by-rank. Used both per-region (phase 1) and once globally over
/// the detached set (phase 2); the algorithm is identical in both places,
/// only the key universe differs.
struct UnionFind {
    parent: HashMap<i64, i64>,
    rank: HashMap<i64, u32>,
}

impl UnionFind {
    fn new(keys: impl IntoIterator<Item = i64>) -> Self {
        let mut parent = HashMap::new();
        let mut rank = HashMap::new();
        for key in keys {
            parent.insert(key, key);
            rank.insert(key, 0);
        }
        UnionFind { parent, rank }
    }

    fn find(&mut self, key: i64) -> i64 {
        let parent = self.parent[&key];
        if parent == key {
            return key;
        }
        let root = self.find(parent);
        self.parent.insert(key, root);
        root
    }

    /// Unions the classes of `a` and `b`. Returns `true` iff they were in
    /// distinct classes (and so were actually merged).
    fn union(&mut self, a: i64, b: i64) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        let rank_a = self.rank[&root_a];
        let rank_b = self.rank[&root_b];
        if rank_a > rank_b {
            self.parent.insert(root_b, root_a);
        } else {
            self.parent.insert(root_a, root_b);
            if rank_a == rank_b {
                *self.rank.get_mut(&root_b).unwrap() += 1;
            }
        }
        true
    }
}

/// Groups `keys` by their union-find root, preserving the order in which
/// each root was first encountered. That order is what makes the "largest
/// component wins, ties go to the first-seen root" tie-break stable.
fn group_by_root(keys: &[i64], uf: &mut UnionFind) -> Vec<Vec<i64>> {
    let roots: Vec<i64> = keys.iter().map(|&key| uf.find(key)).collect();
    let order: Vec<i64> = roots.iter().copied().unique().collect();
    let mut groups: HashMap<i64, Vec<i64>> =
        roots.into_iter().zip(keys.iter().copied()).into_group_map();
    order.into_iter().map(|root| groups.remove(&root).unwrap()).collect()
}

/// Consolidates the leaf regions produced by the k-d partitioner into a
/// list of connected final regions, indexed by final region id.
///
/// `leaves` is consumed in input order; that order determines initial
/// region ids and is the tie-break for every deterministic choice the
/// algorithm makes (see module docs).
#[instrument(skip(graph, leaves))]
pub fn consolidate(graph: &Graph, leaves: &[LeafRegion]) -> Result<Vec<Vec<i64>>, DivisionError> {
    let mut vertex_region: HashMap<i64, i64> = HashMap::new();
    let mut next_region_id: i64 = 0;
    let mut detached: Vec<i64> = Vec::new();

    // Phase 1: split each leaf into connected components; the largest
    // keeps the region id, the rest are detached.
    for leaf in leaves {
        let region_id = next_region_id;
        next_region_id += 1;
        for &id in &leaf.vertex_ids {
            vertex_region.insert(id, region_id);
        }

        let mut region_uf = UnionFind::new(leaf.vertex_ids.iter().copied());
        for &id in &leaf.vertex_ids {
            let vertex = graph.vertex(id).expect("leaf vertex must exist in graph");
            for edge in vertex.edges() {
                let other = edge.other(id);
                if vertex_region.get(&other) == Some(&region_id) {
                    region_uf.union(id, other);
                }
            }
        }

        let mut groups = group_by_root(&leaf.vertex_ids, &mut region_uf);
        groups.sort_by_key(|g| std::cmp::Reverse(g.len()));
        // stable_sort_by_key preserves first-seen order among equal sizes.

        for group in groups.into_iter().skip(1) {
            for &id in &group {
                vertex_region.insert(id, -1);
            }
            detached.extend(group);
        }
    }

    debug!(leaf_count = leaves.len(), detached = detached.len(), "phase 1 complete");

    // Phase 2: cluster the detached vertices by connectivity among
    // themselves.
    let detached_set: HashSet<i64> = detached.iter().copied().collect();
    let mut detached_uf = UnionFind::new(detached.iter().copied());
    for &id in &detached {
        let vertex = graph.vertex(id).expect("detached vertex must exist in graph");
        for edge in vertex.edges() {
            let other = edge.other(id);
            if detached_set.contains(&other) {
                detached_uf.union(id, other);
            }
        }
    }
    let detached_clusters = group_by_root(&detached, &mut detached_uf);

    // Phase 3: re-home each cluster by BFS to the nearest vertex that still
    // holds a region assignment.
    for cluster in &detached_clusters {
        let target = find_target_region(graph, cluster, &vertex_region)?;
        for &id in cluster {
            vertex_region.insert(id, target);
        }
    }

    info!(
        regions = next_region_id,
        detached_clusters = detached_clusters.len(),
        "consolidation complete"
    );

    // Phase 4: materialise the output in original input order.
    let mut result: Vec<Vec<i64>> = vec![Vec::new(); next_region_id as usize];
    for leaf in leaves {
        for &id in &leaf.vertex_ids {
            let region = *vertex_region
                .get(&id)
                .ok_or(DivisionError::UnassignedVertex(id))?;
            if region < 0 {
                return Err(DivisionError::UnassignedVertex(id));
            }
            result[region as usize].push(id);
        }
    }

    Ok(result)
}

/// BFS outward from `cluster`'s seed vertex through the full graph until a
/// vertex holding a non-detached region assignment is found. On each
/// dequeue, incident edges are scanned for a re-home target before any
/// unvisited neighbour is enqueued.
fn find_target_region(
    graph: &Graph,
    cluster: &[i64],
    vertex_region: &HashMap<i64, i64>,
) -> Result<i64, DivisionError> {
    let seed = cluster[0];
    let mut visited: HashSet<i64> = HashSet::new();
    let mut queue: VecDeque<i64> = VecDeque::new();
    queue.push_back(seed);

    while let Some(current) = queue.pop_front() {
        if !visited.insert(current) {
            continue;
        }

        let vertex = graph.vertex(current).expect("cluster vertex must exist in graph");
        for edge in vertex.edges() {
            let other = edge.other(current);
            if let Some(&region) = vertex_region.get(&other) {
                if region >= 0 {
                    return Ok(region);
                }
            }
        }
        for edge in vertex.edges() {
            let other = edge.other(current);
            if !visited.contains(&other) {
                queue.push_back(other);
            }
        }
    }

    Err(DivisionError::OrphanCluster(seed))
}
