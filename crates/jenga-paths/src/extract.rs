//! Extraction driver: best (cost, side) over the four grid sides.

use log::{debug, trace};
use thiserror::Error;

use jenga_core::{Label, LabelGrid, Side};

use crate::blocks::BlockMap;
use crate::dijkstra::{UNREACHABLE, cheapest_to};

/// A successful extraction query: the cheapest total cost and the grid
/// side through which it is achieved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extraction {
    pub cost: u64,
    pub side: Side,
}

/// Reasons an extraction query is invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// The target label does not appear anywhere in the grid.
    #[error("target block {0} does not appear in the grid")]
    UnknownBlock(Label),
    /// No grid side is reachable from the target block.
    #[error("no grid side is reachable from the target block")]
    NoExit,
}

/// Find the cheapest way to extract block `target` through any side of
/// the grid.
///
/// Runs one boundary search per side, in [`Side::ALL`] order, and keeps
/// the strictly smallest cost — on a tie the earlier side wins. The
/// whole query is a pure function of its inputs: repeated calls on the
/// same grid and target return the same result.
pub fn extract(grid: &LabelGrid, target: Label) -> Result<Extraction, ExtractError> {
    let blocks = BlockMap::new(grid);
    if !blocks.contains(target) {
        return Err(ExtractError::UnknownBlock(target));
    }
    trace!(
        "block graph: {} nodes for a {}x{} grid",
        blocks.len(),
        grid.width(),
        grid.height()
    );

    let mut best: Option<Extraction> = None;
    for side in Side::ALL {
        let goals = grid.side_labels(side);
        let cost = cheapest_to(&blocks, target, &goals);
        if cost == UNREACHABLE {
            debug!("side {side}: unreachable");
            continue;
        }
        debug!("side {side}: cost {cost}");
        if best.is_none_or(|b| cost < b.cost) {
            best = Some(Extraction { cost, side });
        }
    }

    best.ok_or(ExtractError::NoExit)
}
