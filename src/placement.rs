use crate::{Coord, Piece, SquareKind};
use derive_more::{Display, Error};
use std::collections::HashMap;

/// The square classification and piece occupancy of a board.
///
/// The classification is written exactly once, by the classifier consumed at
/// construction, and never changes afterwards; only the occupancy does. Rules
/// engines receive this type mutably while executing a move; every other
/// caller reads it through the [`Board`][`crate::Board`] that owns it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Placement {
    size_x: i32,
    size_y: i32,
    squares: HashMap<Coord, SquareKind>,
    pieces: HashMap<Coord, Piece>,
}

impl Placement {
    /// Classifies every square of a `size_x` by `size_y` rectangle.
    ///
    /// The classifier is consulted once per coordinate, in enumeration order,
    /// and its verdict is final. Classifying a square in the rectangle as
    /// [`SquareKind::OutOfBounds`] is a contract violation.
    pub fn new(size_x: i32, size_y: i32, mut classify: impl FnMut(Coord) -> SquareKind) -> Self {
        let mut squares = HashMap::new();

        for at in Coordinates::new(size_x, size_y) {
            let kind = classify(at);
            debug_assert_ne!(kind, SquareKind::OutOfBounds);
            squares.insert(at, kind);
        }

        Placement {
            size_x,
            size_y,
            squares,
            pieces: HashMap::new(),
        }
    }

    /// The number of columns.
    pub fn size_x(&self) -> i32 {
        self.size_x
    }

    /// The number of rows.
    pub fn size_y(&self) -> i32 {
        self.size_y
    }

    /// The classification of a coordinate.
    ///
    /// Coordinates outside the bounding rectangle classify as
    /// [`SquareKind::OutOfBounds`].
    pub fn square(&self, at: Coord) -> SquareKind {
        self.squares
            .get(&at)
            .copied()
            .unwrap_or(SquareKind::OutOfBounds)
    }

    /// The piece occupying a coordinate, if any.
    ///
    /// Inactive squares are valid coordinates and always empty.
    pub fn piece(&self, at: Coord) -> Result<Option<Piece>, InvalidCoordinate> {
        self.check(at)?;
        Ok(self.pieces.get(&at).copied())
    }

    /// Places a piece on a coordinate, or clears it.
    ///
    /// Whatever occupied the coordinate before is overwritten; legality is
    /// the rules engine's concern, not this type's.
    pub fn place(&mut self, piece: Option<Piece>, at: Coord) -> Result<(), InvalidCoordinate> {
        self.check(at)?;

        match piece {
            Some(piece) => self.pieces.insert(at, piece),
            None => self.pieces.remove(&at),
        };

        Ok(())
    }

    /// Removes and returns the piece occupying a coordinate, if any.
    pub fn take(&mut self, at: Coord) -> Result<Option<Piece>, InvalidCoordinate> {
        self.check(at)?;
        Ok(self.pieces.remove(&at))
    }

    /// All coordinates of the bounding rectangle, top row first, left to
    /// right.
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.size_x, self.size_y)
    }

    /// Distributes pieces over the playable squares, in enumeration order.
    ///
    /// The sequence must cover every playable square exactly, empty cells
    /// included; on a mismatch the occupancy is left untouched.
    pub fn load(&mut self, pieces: Vec<Option<Piece>>) -> Result<(), LayoutMismatch> {
        let targets: Vec<_> = self
            .coordinates()
            .filter(|&at| self.square(at).is_playable())
            .collect();

        if targets.len() != pieces.len() {
            return Err(LayoutMismatch {
                expected: targets.len(),
                found: pieces.len(),
            });
        }

        for (at, piece) in targets.into_iter().zip(pieces) {
            match piece {
                Some(piece) => self.pieces.insert(at, piece),
                None => self.pieces.remove(&at),
            };
        }

        Ok(())
    }

    fn check(&self, at: Coord) -> Result<(), InvalidCoordinate> {
        match self.square(at) {
            SquareKind::OutOfBounds => Err(InvalidCoordinate(at)),
            _ => Ok(()),
        }
    }
}

/// Row-major enumeration of a bounding rectangle, top row first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Coordinates {
    size_x: i32,
    size_y: i32,
    next: Coord,
}

impl Coordinates {
    /// Enumerates `(1, 1)` through `(size_x, size_y)`.
    pub fn new(size_x: i32, size_y: i32) -> Self {
        Coordinates {
            size_x,
            size_y,
            next: Coord::new(1, 1),
        }
    }
}

impl Iterator for Coordinates {
    type Item = Coord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next.x > self.size_x || self.next.y > self.size_y {
            return None;
        }

        let at = self.next;

        self.next = if at.x == self.size_x {
            Coord::new(1, at.y + 1)
        } else {
            Coord::new(at.x + 1, at.y)
        };

        Some(at)
    }
}

/// The coordinate lies outside the board's bounding rectangle.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "invalid coordinates {}", _0)]
pub struct InvalidCoordinate(#[error(not(source))] pub Coord);

/// The piece sequence does not cover the playable squares exactly.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "expected exactly {} pieces, found {}", expected, found)]
pub struct LayoutMismatch {
    pub expected: usize,
    pub found: usize,
}
