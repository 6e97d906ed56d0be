use derive_more::Display;

/// A 1-based (column, row) address on the board grid.
///
/// `(1, 1)` is the upper left corner; columns grow to the right and rows grow
/// downwards. Nothing stops a coordinate from lying outside a particular
/// board, it merely classifies as out of bounds there.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "({}, {})", x, y)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    /// Constructs [`Coord`] from a pair of column and row.
    pub fn new(x: i32, y: i32) -> Self {
        Coord { x, y }
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Coord::new(x, y)
    }
}
