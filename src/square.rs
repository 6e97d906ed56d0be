use derive_more::Display;

/// The static classification of a [`Coord`][`crate::Coord`] on a board.
///
/// Every coordinate inside the bounding rectangle is classified exactly once,
/// when the board is built, and never reclassified.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum SquareKind {
    /// Outside the board's bounding rectangle.
    #[display(fmt = "out of bounds")]
    OutOfBounds,

    /// Inside the rectangle, but never holds a piece.
    #[display(fmt = "inactive")]
    Inactive,

    /// A legal location for a piece.
    #[display(fmt = "playable")]
    Playable,
}

impl SquareKind {
    /// Whether a piece may stand here.
    pub fn is_playable(&self) -> bool {
        matches!(self, SquareKind::Playable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn only_playable_squares_are_playable(kind: SquareKind) {
        assert_eq!(kind.is_playable(), kind == SquareKind::Playable);
    }
}
