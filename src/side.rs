use derive_more::Display;
use std::ops::Not;

/// The side a [`Piece`][`crate::Piece`] plays for.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Side {
    #[display(fmt = "black")]
    Black,

    #[display(fmt = "red")]
    Red,
}

impl Not for Side {
    type Output = Side;

    fn not(self) -> Side {
        match self {
            Side::Black => Side::Red,
            Side::Red => Side::Black,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn side_implements_not_operator(s: Side) {
        assert_eq!(!!s, s);
    }
}
