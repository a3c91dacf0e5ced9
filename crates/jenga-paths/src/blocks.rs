//! Block partition and adjacency graph.

use std::collections::{BTreeSet, HashMap};

use jenga_core::{Label, LabelGrid, Point};

use crate::traits::{BlockPather, WeightedBlockPather};

/// The block partition of a grid plus the adjacency relation between
/// blocks.
///
/// Blocks are keyed by label value, not by connected component: if the
/// same label appears in disconnected grid regions, all of those cells
/// form ONE node whose adjacency set is the union over every region.
/// Labels name a piece type, and a piece is charged once no matter how
/// many regions it spans.
///
/// Invariants: the adjacency relation is symmetric and has no
/// self-loops.
#[derive(Debug, Clone)]
pub struct BlockMap {
    members: HashMap<Label, Vec<Point>>,
    adjacency: HashMap<Label, BTreeSet<Label>>,
}

impl BlockMap {
    /// Build the partition and adjacency graph in one pass over the
    /// grid.
    ///
    /// Each cell is recorded under its label, and every orthogonal
    /// neighbour with a different label yields an edge. Cost is
    /// O(width × height); any grid produces a valid (possibly
    /// singleton) graph.
    pub fn new(grid: &LabelGrid) -> Self {
        let mut members: HashMap<Label, Vec<Point>> = HashMap::new();
        let mut adjacency: HashMap<Label, BTreeSet<Label>> = HashMap::new();

        for (p, label) in grid.iter() {
            members.entry(label).or_default().push(p);
            let neigh = adjacency.entry(label).or_default();
            for n in p.neighbors_4() {
                // Symmetry needs no bookkeeping: the neighbouring cell
                // inserts the reverse edge when its turn comes.
                if let Some(other) = grid.at(n) {
                    if other != label {
                        neigh.insert(other);
                    }
                }
            }
        }

        Self { members, adjacency }
    }

    /// Whether a block with this label exists in the grid.
    #[inline]
    pub fn contains(&self, label: Label) -> bool {
        self.members.contains_key(&label)
    }

    /// Member cells of a block, in row-major discovery order.
    pub fn cells(&self, label: Label) -> Option<&[Point]> {
        self.members.get(&label).map(Vec::as_slice)
    }

    /// Labels adjacent to `label`, in ascending order.
    pub fn neighbors_of(&self, label: Label) -> Option<&BTreeSet<Label>> {
        self.adjacency.get(&label)
    }

    /// Iterator over all block labels.
    pub fn labels(&self) -> impl Iterator<Item = Label> + '_ {
        self.members.keys().copied()
    }

    /// Number of distinct blocks.
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the grid had no cells (cannot happen for a valid
    /// [`LabelGrid`], but the emptiness check is cheap).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl BlockPather for BlockMap {
    fn neighbors(&self, b: Label, buf: &mut Vec<Label>) {
        if let Some(neigh) = self.adjacency.get(&b) {
            buf.extend(neigh.iter().copied());
        }
    }
}

impl WeightedBlockPather for BlockMap {
    /// A block's weight is its label value.
    #[inline]
    fn weight(&self, b: Label) -> u64 {
        u64::from(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: Vec<Vec<Label>>) -> LabelGrid {
        LabelGrid::from_rows(rows).unwrap()
    }

    #[test]
    fn partition_collects_member_cells() {
        let g = grid(vec![vec![1, 2], vec![1, 3]]);
        let bm = BlockMap::new(&g);
        assert_eq!(bm.len(), 3);
        assert_eq!(
            bm.cells(1),
            Some(&[Point::new(0, 0), Point::new(0, 1)][..])
        );
        assert_eq!(bm.cells(3), Some(&[Point::new(1, 1)][..]));
        assert_eq!(bm.cells(9), None);
    }

    #[test]
    fn adjacency_matches_scenario() {
        let g = grid(vec![vec![1, 2], vec![1, 3]]);
        let bm = BlockMap::new(&g);
        assert_eq!(bm.neighbors_of(1), Some(&BTreeSet::from([2, 3])));
        assert_eq!(bm.neighbors_of(2), Some(&BTreeSet::from([1, 3])));
        assert_eq!(bm.neighbors_of(3), Some(&BTreeSet::from([1, 2])));
    }

    #[test]
    fn adjacency_is_symmetric_without_self_loops() {
        let g = grid(vec![vec![5, 5, 8], vec![2, 8, 8], vec![2, 2, 4]]);
        let bm = BlockMap::new(&g);
        for a in bm.labels() {
            let neigh = bm.neighbors_of(a).unwrap();
            assert!(!neigh.contains(&a), "self-loop on {a}");
            for &b in neigh {
                assert!(
                    bm.neighbors_of(b).unwrap().contains(&a),
                    "{a} -> {b} has no reverse edge"
                );
            }
        }
    }

    #[test]
    fn single_block_grid_has_no_edges() {
        let g = grid(vec![vec![6, 6], vec![6, 6]]);
        let bm = BlockMap::new(&g);
        assert_eq!(bm.len(), 1);
        assert_eq!(bm.neighbors_of(6), Some(&BTreeSet::new()));
    }

    #[test]
    fn disconnected_regions_share_one_node() {
        // Label 1 appears in two regions separated by a column of 2s;
        // its adjacency set is the union over both regions.
        let g = grid(vec![vec![1, 2, 1], vec![3, 2, 4]]);
        let bm = BlockMap::new(&g);
        assert_eq!(bm.len(), 4);
        assert_eq!(bm.cells(1).unwrap().len(), 2);
        assert_eq!(bm.neighbors_of(1), Some(&BTreeSet::from([2, 3, 4])));
    }

    #[test]
    fn weight_is_label_value() {
        let g = grid(vec![vec![7, 40]]);
        let bm = BlockMap::new(&g);
        assert_eq!(bm.weight(7), 7);
        assert_eq!(bm.weight(40), 40);
    }
}
