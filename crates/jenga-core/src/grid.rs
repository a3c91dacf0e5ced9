//! The [`LabelGrid`] type — an immutable rectangular raster of block labels.
//!
//! Unlike a render grid there is no interior mutability here: a puzzle
//! grid is built once from caller input and only read afterwards. All
//! derived structures (block partition, adjacency, boundary sets) are
//! computed from this read-only view.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::geom::Point;
use crate::side::Side;

/// A block label. Labels are non-negative integers; a block's weight in
/// the extraction search is its label value.
pub type Label = u32;

/// Errors produced while constructing a [`LabelGrid`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// No rows (or no cells) were supplied.
    #[error("grid has no cells")]
    Empty,
    /// A row's length differs from the first row's.
    #[error("row {row} has {got} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        got: usize,
    },
    /// Flat buffer length does not match `width * height`.
    #[error("label buffer holds {got} cells, expected {expected}")]
    LengthMismatch { expected: usize, got: usize },
}

// ---------------------------------------------------------------------------
// LabelGrid
// ---------------------------------------------------------------------------

/// An immutable `width × height` grid of block labels, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelGrid {
    labels: Vec<Label>,
    width: usize,
    height: usize,
}

impl LabelGrid {
    /// Build a grid from rows of labels.
    ///
    /// Every row must have the same, non-zero length.
    pub fn from_rows(rows: Vec<Vec<Label>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 || height == 0 {
            return Err(GridError::Empty);
        }
        let mut labels = Vec::with_capacity(width * height);
        for (row, r) in rows.into_iter().enumerate() {
            if r.len() != width {
                return Err(GridError::Ragged {
                    row,
                    expected: width,
                    got: r.len(),
                });
            }
            labels.extend(r);
        }
        Ok(Self {
            labels,
            width,
            height,
        })
    }

    /// Build a grid from a flat row-major buffer.
    pub fn from_flat(width: usize, height: usize, labels: Vec<Label>) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::Empty);
        }
        if labels.len() != width * height {
            return Err(GridError::LengthMismatch {
                expected: width * height,
                got: labels.len(),
            });
        }
        Ok(Self {
            labels,
            width,
            height,
        })
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    /// The label at `p`, or `None` if `p` is outside the grid.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Label> {
        if !self.contains(p) {
            return None;
        }
        Some(self.labels[p.y as usize * self.width + p.x as usize])
    }

    /// Row-major iterator over `(Point, Label)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Label)> + '_ {
        self.labels.iter().enumerate().map(|(i, &label)| {
            let p = Point::new((i % self.width) as i32, (i / self.width) as i32);
            (p, label)
        })
    }

    /// The boundary set of a side: every label present in the edge row
    /// or column named by `side`.
    ///
    /// Corner cells contribute to two boundary sets.
    pub fn side_labels(&self, side: Side) -> BTreeSet<Label> {
        let mut set = BTreeSet::new();
        match side {
            Side::Up => {
                set.extend(&self.labels[..self.width]);
            }
            Side::Down => {
                set.extend(&self.labels[(self.height - 1) * self.width..]);
            }
            Side::Left => {
                set.extend(self.labels.iter().step_by(self.width));
            }
            Side::Right => {
                set.extend(self.labels.iter().skip(self.width - 1).step_by(self.width));
            }
        }
        set
    }
}
