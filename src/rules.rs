use crate::{Coord, InvalidCoordinate, Piece, Placement};
use derive_more::{Display, Error, From};

mod draughts;

pub use draughts::*;

/// Trait for types that implement the rules of a board game.
///
/// A rules engine is bound to a single [`Board`][`crate::Board`], which
/// forwards every question of parsing and legality to it and hands it the
/// [`Placement`] to mutate while executing a move.
#[cfg_attr(test, mockall::automock)]
pub trait Rules {
    /// Splits serialized board state into one token per cell.
    fn tokenize(&self, s: &str) -> Result<Vec<String>, TokenizeError>;

    /// Interprets a single-cell token as a piece, or as an empty cell.
    fn parse_token(&mut self, token: &str) -> Result<Option<Piece>, UnknownToken>;

    /// Renders the cell at `at` of a debug dump.
    ///
    /// Dumps never visit out-of-bounds coordinates; one that shows up anyway
    /// renders as an inline error marker rather than failing the dump.
    fn render_cell(&self, placement: &Placement, at: Coord) -> String;

    /// Whether the piece at `at`, if any, may be picked up.
    fn can_select(&self, placement: &Placement, at: Coord) -> bool;

    /// Whether moving the piece at `from` to `to` is legal.
    fn is_valid_move(&self, placement: &Placement, from: Coord, to: Coord) -> bool;

    /// Moves the piece at `from` to `to`.
    ///
    /// Legality is derived from the placement as it stands now, never from an
    /// earlier [`Rules::is_valid_move`] answer; on failure the placement is
    /// left untouched.
    fn execute_move(
        &self,
        placement: &mut Placement,
        from: Coord,
        to: Coord,
    ) -> Result<(), IllegalMove>;
}

/// The serialized board state could not be split into cell tokens.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "failed to split the board state into cell tokens")]
pub struct TokenizeError;

/// The cell token is not part of the game's vocabulary.
#[derive(Debug, Display, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "unrecognized cell token `{}`", _0)]
pub struct UnknownToken(#[error(not(source))] pub String);

/// The reason why a move was rejected.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error, From)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum IllegalMove {
    /// There is no piece at the source coordinate.
    #[display(fmt = "there is no piece at {}", _0)]
    #[from(ignore)]
    VacantSource(#[error(not(source))] Coord),

    /// The destination is not an empty playable square.
    #[display(fmt = "{} is not an available target", _0)]
    #[from(ignore)]
    UnavailableTarget(#[error(not(source))] Coord),

    /// The source coordinate lies outside the board.
    #[display(fmt = "{}", _0)]
    InvalidCoordinate(InvalidCoordinate),
}
