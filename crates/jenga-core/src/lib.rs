//! Core types for the block-extraction puzzle.
//!
//! A puzzle instance is a rectangular [`LabelGrid`] whose cells carry
//! non-negative integer labels. Cells sharing a label form one *block*,
//! the unit of cost in the extraction search. The four grid edges are
//! named by [`Side`].
//!
//! This crate holds only data types; the block graph and the search
//! live in `jenga-paths`.

pub mod geom;
pub mod grid;
pub mod side;

pub use geom::Point;
pub use grid::{GridError, Label, LabelGrid};
pub use side::Side;
