//! Token parsing for the stdin query format.
//!
//! The format is whitespace-separated: `N M`, then N×M grid cells, then
//! the target label. A cell may be the unknown marker `?`, which is
//! substituted with [`UNKNOWN_FILL`] before the grid reaches the
//! solver.

use thiserror::Error;

use jenga_core::{GridError, Label, LabelGrid};

/// Label substituted for the unknown-cell marker `?`.
pub const UNKNOWN_FILL: Label = 7;

/// Errors produced while reading the stdin query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty input")]
    Empty,
    #[error("input ended while reading {0}")]
    Missing(&'static str),
    #[error("bad token {0:?}")]
    BadToken(String),
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// A fully resolved query: the grid and the block to extract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub grid: LabelGrid,
    pub target: Label,
}

/// Parse a whole query from raw input text.
pub fn parse_query(input: &str) -> Result<Query, ParseError> {
    let mut tokens = input.split_whitespace().peekable();
    if tokens.peek().is_none() {
        return Err(ParseError::Empty);
    }

    let rows = dimension(&mut tokens, "the row count")?;
    let cols = dimension(&mut tokens, "the column count")?;

    let cell_count = rows.saturating_mul(cols);
    let mut labels = Vec::with_capacity(cell_count);
    for _ in 0..cell_count {
        let tok = next(&mut tokens, "a grid cell")?;
        let label = if tok == "?" {
            UNKNOWN_FILL
        } else {
            parse_label(tok)?
        };
        labels.push(label);
    }

    let target = parse_label(next(&mut tokens, "the target label")?)?;
    let grid = LabelGrid::from_flat(cols, rows, labels)?;
    Ok(Query { grid, target })
}

fn next<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    what: &'static str,
) -> Result<&'a str, ParseError> {
    tokens.next().ok_or(ParseError::Missing(what))
}

fn dimension<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    what: &'static str,
) -> Result<usize, ParseError> {
    let tok = next(tokens, what)?;
    tok.parse()
        .map_err(|_| ParseError::BadToken(tok.to_owned()))
}

fn parse_label(tok: &str) -> Result<Label, ParseError> {
    tok.parse()
        .map_err(|_| ParseError::BadToken(tok.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jenga_core::Point;

    #[test]
    fn parses_basic_query() {
        let q = parse_query("2 2\n1 2\n1 3\n3\n").unwrap();
        assert_eq!(q.grid.width(), 2);
        assert_eq!(q.grid.height(), 2);
        assert_eq!(q.grid.at(Point::new(1, 1)), Some(3));
        assert_eq!(q.target, 3);
    }

    #[test]
    fn substitutes_unknown_marker() {
        let q = parse_query("1 3 4 ? 6 4").unwrap();
        assert_eq!(q.grid.at(Point::new(1, 0)), Some(UNKNOWN_FILL));
    }

    #[test]
    fn non_square_dimensions_are_rows_then_columns() {
        // 3 rows, 2 columns.
        let q = parse_query("3 2  1 1  2 2  3 3  1").unwrap();
        assert_eq!(q.grid.width(), 2);
        assert_eq!(q.grid.height(), 3);
        assert_eq!(q.grid.at(Point::new(0, 2)), Some(3));
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(parse_query("  \n "), Err(ParseError::Empty));
    }

    #[test]
    fn rejects_truncated_grids() {
        assert_eq!(
            parse_query("2 2 1 2 1"),
            Err(ParseError::Missing("a grid cell"))
        );
        assert_eq!(
            parse_query("2 2 1 2 1 3"),
            Err(ParseError::Missing("the target label"))
        );
    }

    #[test]
    fn rejects_bad_tokens() {
        assert_eq!(
            parse_query("x 2 1 2"),
            Err(ParseError::BadToken("x".to_owned()))
        );
        assert_eq!(
            parse_query("1 1 -4 0"),
            Err(ParseError::BadToken("-4".to_owned()))
        );
        // `?` is only a cell marker, never a target.
        assert_eq!(
            parse_query("1 1 5 ?"),
            Err(ParseError::BadToken("?".to_owned()))
        );
    }

    #[test]
    fn rejects_zero_dimensions() {
        assert_eq!(
            parse_query("0 3 1"),
            Err(ParseError::Grid(GridError::Empty))
        );
    }
}
