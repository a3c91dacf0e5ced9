//! Block graph and boundary search for the block-extraction puzzle.
//!
//! Extraction of a block from a labeled grid is solved in two stages:
//!
//! - **Block graph construction** ([`BlockMap`]) — partition the grid
//!   into blocks by label and record which blocks touch orthogonally.
//! - **Boundary search** ([`cheapest_to`]) — node-weighted Dijkstra
//!   from the target block to the nearest block on a given grid side.
//!
//! [`extract`] ties the two together: it runs the search once per side
//! in the fixed [`Side::ALL`](jenga_core::Side::ALL) order and keeps
//! the cheapest (cost, side) pair.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`BlockPather`] | neighbor enumeration |
//! | [`WeightedBlockPather`] : [`BlockPather`] | the boundary search |

mod blocks;
mod dijkstra;
mod extract;
mod traits;

pub use blocks::BlockMap;
pub use dijkstra::{UNREACHABLE, cheapest_to};
pub use extract::{ExtractError, Extraction, extract};
pub use traits::{BlockPather, WeightedBlockPather};
