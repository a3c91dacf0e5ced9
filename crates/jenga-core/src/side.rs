//! The [`Side`] type — the four edges of a grid.

use std::fmt;

/// One of the four edges of a grid, the direction a block can exit by.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    Down,
    Up,
    Left,
    Right,
}

impl Side {
    /// All four sides, in the order extraction queries try them.
    ///
    /// When two sides tie on cost, the earlier one in this array wins,
    /// so the order is part of the observable contract.
    pub const ALL: [Side; 4] = [Side::Down, Side::Up, Side::Left, Side::Right];

    /// Lowercase name of the side.
    pub const fn name(self) -> &'static str {
        match self {
            Side::Down => "down",
            Side::Up => "up",
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn side_round_trip() {
        let json = serde_json::to_string(&Side::Left).unwrap();
        assert_eq!(json, "\"left\"");
        let back: Side = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Side::Left);
    }
}
