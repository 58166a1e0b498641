//! Read-only diagnostics over a finished partition.
//!
//! These functions take no part in the pipeline itself; they exist so
//! tests and callers can observe how a partition turned out (how lopsided
//! it is, whether a leaf actually respected its capacity) without
//! recomputing anything the consolidator or partitioner already did.

use crate::partition::LeafRegion;

/// Number of vertices in each region, in region-id order.
pub fn region_sizes(regions: &[Vec<i64>]) -> Vec<usize> {
    regions.iter().map(|r| r.len()).collect()
}

/// Number of vertices in each leaf, in leaf order, for checking the
/// capacity bound against `max_accumulation`.
pub fn leaf_occupancy(leaves: &[LeafRegion]) -> Vec<usize> {
    leaves.iter().map(|leaf| leaf.vertex_ids.len()).collect()
}

/// `max(size) - min(size)` over non-empty regions. `0` if there are no
/// non-empty regions.
pub fn imbalance(regions: &[Vec<i64>]) -> usize {
    let sizes: Vec<usize> = regions.iter().map(|r| r.len()).filter(|&n| n > 0).collect();
    match (sizes.iter().max(), sizes.iter().min()) {
        (Some(&max), Some(&min)) => max - min,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rectangle;

    #[test]
    fn region_sizes_counts_each_region() {
        let regions = vec![vec![0, 1, 2], vec![3], Vec::new()];
        assert_eq!(region_sizes(&regions), vec![3, 1, 0]);
    }

    #[test]
    fn leaf_occupancy_counts_each_leaf() {
        let leaves = vec![
            LeafRegion { rectangle: Rectangle::new(0, 0, 1, 1), vertex_ids: vec![0, 1] },
            LeafRegion { rectangle: Rectangle::new(1, 0, 1, 1), vertex_ids: vec![2] },
        ];
        assert_eq!(leaf_occupancy(&leaves), vec![2, 1]);
    }

    #[test]
    fn imbalance_ignores_empty_regions() {
        let regions = vec![vec![0, 1, 2, 3], vec![4], Vec::new()];
        assert_eq!(imbalance(&regions), 3);
    }

    #[test]
    fn imbalance_of_no_regions_is_zero() {
        let regions: Vec<Vec<i64>> = Vec::new();
        assert_eq!(imbalance(&regions), 0);
        assert_eq!(imbalance(&[Vec::new(), Vec::new()]), 0);
    }
}
