use derive_more::Display;

/// The promotion state of a [`Piece`][`crate::Piece`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Rank {
    #[display(fmt = "man")]
    Man,

    #[display(fmt = "king")]
    King,
}
