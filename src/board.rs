use crate::{Coord, Coordinates, IllegalMove, InvalidCoordinate, LayoutMismatch, Piece};
use crate::{Placement, Rules, SquareKind, TokenizeError, UnknownToken};
use derive_more::{Display, Error, From};
use std::fmt;
use tracing::instrument;

/// A rectangular game board bound to a rules engine.
///
/// The board owns the squares and the pieces standing on them; every question
/// of parsing and legality is forwarded to the rules engine it was
/// constructed with, and the engine alone mutates the occupancy during moves.
#[derive(Debug, Clone)]
pub struct Board<R> {
    placement: Placement,
    rules: R,
}

impl<R: Rules> Board<R> {
    /// Binds a rules engine to a classified placement.
    pub fn new(placement: Placement, rules: R) -> Self {
        Board { placement, rules }
    }

    /// The number of columns.
    pub fn size_x(&self) -> i32 {
        self.placement.size_x()
    }

    /// The number of rows.
    pub fn size_y(&self) -> i32 {
        self.placement.size_y()
    }

    /// The classification of a coordinate; see [`Placement::square`].
    pub fn square(&self, at: Coord) -> SquareKind {
        self.placement.square(at)
    }

    /// The piece occupying a coordinate, if any; see [`Placement::piece`].
    pub fn piece(&self, at: Coord) -> Result<Option<Piece>, InvalidCoordinate> {
        self.placement.piece(at)
    }

    /// Places a piece on a coordinate, or clears it; see [`Placement::place`].
    ///
    /// No legality check of any kind happens here; bulk loading depends on
    /// the overwrite being unconditional.
    pub fn place(&mut self, piece: Option<Piece>, at: Coord) -> Result<(), InvalidCoordinate> {
        self.placement.place(piece, at)
    }

    /// All coordinates of the board, top row first, left to right.
    ///
    /// Loading and dumping both follow this enumeration.
    pub fn coordinates(&self) -> Coordinates {
        self.placement.coordinates()
    }

    /// Distributes pieces over the playable squares; see [`Placement::load`].
    pub fn load_from_sequence(
        &mut self,
        pieces: Vec<Option<Piece>>,
    ) -> Result<(), LayoutMismatch> {
        self.placement.load(pieces)
    }

    /// Loads serialized board state through the rules engine.
    #[instrument(level = "debug", err, skip(self))]
    pub fn load_from_str(&mut self, s: &str) -> Result<(), LoadError> {
        let tokens = self.rules.tokenize(s)?;
        let mut pieces = Vec::with_capacity(tokens.len());

        for token in &tokens {
            pieces.push(self.rules.parse_token(token)?);
        }

        Ok(self.placement.load(pieces)?)
    }

    /// Whether the piece at `at`, if any, may be picked up.
    pub fn can_select(&self, at: Coord) -> bool {
        self.rules.can_select(&self.placement, at)
    }

    /// Whether moving the piece at `from` to `to` is legal.
    pub fn is_valid_move(&self, from: Coord, to: Coord) -> bool {
        self.rules.is_valid_move(&self.placement, from, to)
    }

    /// Moves the piece at `from` to `to` if the rules engine allows it.
    #[instrument(level = "debug", err, skip(self))]
    pub fn move_piece(&mut self, from: Coord, to: Coord) -> Result<(), IllegalMove> {
        self.rules.execute_move(&mut self.placement, from, to)
    }
}

/// Renders one line per row, one cell per column, as the rules engine sees
/// them.
impl<R: Rules> fmt::Display for Board<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for at in self.coordinates() {
            f.write_str(&self.rules.render_cell(&self.placement, at))?;
            f.write_str(if at.x == self.size_x() { "\n" } else { " " })?;
        }

        Ok(())
    }
}

/// The reason why loading serialized board state failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to load the board state; {}")]
pub enum LoadError {
    #[display(fmt = "{}", _0)]
    Tokenize(TokenizeError),

    #[display(fmt = "{}", _0)]
    UnknownToken(UnknownToken),

    #[display(fmt = "{}", _0)]
    LayoutMismatch(LayoutMismatch),
}
