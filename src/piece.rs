use crate::{Rank, Side};
use derive_more::Display;

/// A unique identifier minted for a [`Piece`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "#{}", _0)]
pub struct PieceId(u32);

/// Mints [`PieceId`]s in strictly increasing order.
///
/// Ids are unique per mint, not process wide; whichever component constructs
/// pieces owns its own mint, so identity generation stays deterministic.
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash)]
pub struct PieceIds(u32);

impl PieceIds {
    /// The next unused [`PieceId`].
    pub fn mint(&mut self) -> PieceId {
        self.0 += 1;
        PieceId(self.0)
    }
}

/// An identity-bearing token of a certain [`Side`] and [`Rank`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{} {} {}", side, rank, id)]
pub struct Piece {
    id: PieceId,
    side: Side,
    rank: Rank,
}

impl Piece {
    /// Constructs [`Piece`] from its identity, [`Side`], and [`Rank`].
    pub fn new(id: PieceId, side: Side, rank: Rank) -> Self {
        Piece { id, side, rank }
    }

    /// This piece's identity.
    pub fn id(&self) -> PieceId {
        self.id
    }

    /// This piece's [`Side`].
    pub fn side(&self) -> Side {
        self.side
    }

    /// This piece's [`Rank`].
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Whether this piece has been crowned.
    pub fn is_king(&self) -> bool {
        self.rank == Rank::King
    }

    /// Crowns this piece.
    ///
    /// A piece is crowned at most once; crowning a king is a contract
    /// violation.
    pub fn crown(&mut self) {
        debug_assert!(!self.is_king());
        self.rank = Rank::King;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn minted_ids_are_distinct_and_increasing() {
        let mut ids = PieceIds::default();
        let (p, q) = (ids.mint(), ids.mint());
        assert!(p < q);
    }

    #[proptest]
    fn piece_has_a_side_and_a_rank(id: PieceId, s: Side, r: Rank) {
        let piece = Piece::new(id, s, r);
        assert_eq!(piece.id(), id);
        assert_eq!(piece.side(), s);
        assert_eq!(piece.rank(), r);
    }

    #[proptest]
    fn only_kings_are_kings(p: Piece) {
        assert_eq!(p.is_king(), p.rank() == Rank::King);
    }

    #[proptest]
    fn crowning_a_man_makes_a_king(id: PieceId, s: Side) {
        let mut piece = Piece::new(id, s, Rank::Man);
        piece.crown();
        assert_eq!(piece, Piece::new(id, s, Rank::King));
    }

    #[proptest]
    #[should_panic]
    fn crowning_a_king_panics(id: PieceId, s: Side) {
        let mut piece = Piece::new(id, s, Rank::King);
        piece.crown();
    }
}
