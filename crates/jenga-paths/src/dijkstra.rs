//! Node-weighted boundary search.

use std::collections::{BTreeSet, BinaryHeap, HashMap};

use jenga_core::Label;

use crate::traits::WeightedBlockPather;

/// Sentinel cost meaning "no path exists".
pub const UNREACHABLE: u64 = u64::MAX;

/// Heap entry, ordered by distance (reversed for min-heap behaviour).
#[derive(Clone, Copy, Eq, PartialEq)]
struct QueueEntry {
    dist: u64,
    label: Label,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest dist first.
        other
            .dist
            .cmp(&self.dist)
            .then_with(|| other.label.cmp(&self.label))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Cheapest cost to reach any label in `goals` starting from `start`.
///
/// The cost model is node-weighted: entering a block charges that
/// block's weight, and the start block is charged immediately, so a
/// start that is itself a goal costs exactly its own weight.
///
/// Dijkstra with lazy deletion: on distance improvement the entry is
/// re-pushed rather than re-keyed, and stale entries (recorded distance
/// no longer the best known) are skipped on pop. The first goal popped
/// is globally optimal because weights are non-negative. Returns
/// [`UNREACHABLE`] when the heap empties without meeting a goal.
pub fn cheapest_to<P: WeightedBlockPather>(
    pather: &P,
    start: Label,
    goals: &BTreeSet<Label>,
) -> u64 {
    let mut dist: HashMap<Label, u64> = HashMap::new();
    let mut open: BinaryHeap<QueueEntry> = BinaryHeap::new();
    let mut nbuf: Vec<Label> = Vec::new();

    let start_cost = pather.weight(start);
    dist.insert(start, start_cost);
    open.push(QueueEntry {
        dist: start_cost,
        label: start,
    });

    while let Some(QueueEntry { dist: d, label: u }) = open.pop() {
        // Skip stale entries.
        if dist.get(&u).copied().unwrap_or(UNREACHABLE) != d {
            continue;
        }
        if goals.contains(&u) {
            return d;
        }

        nbuf.clear();
        pather.neighbors(u, &mut nbuf);

        for &v in nbuf.iter() {
            let tentative = d + pather.weight(v);
            if tentative < dist.get(&v).copied().unwrap_or(UNREACHABLE) {
                dist.insert(v, tentative);
                open.push(QueueEntry {
                    dist: tentative,
                    label: v,
                });
            }
        }
    }

    UNREACHABLE
}
