use crate::{Board, Draughts, LoadError, Placement, SquareKind};
use derive_more::{Display, Error, From};
use serde::Deserialize;
use std::str::FromStr;

/// The classic crossed topology.
///
/// `(1, 1)` is inactive and the classification alternates square by square in
/// enumeration order. The alternation does not advance across the last
/// column, so each row carries on from where the previous one ended; even
/// widths produce the familiar pattern, odd widths repeat the first row.
pub fn checkerboard(size_x: i32, size_y: i32) -> Placement {
    let mut kind = SquareKind::Inactive;

    Placement::new(size_x, size_y, |at| {
        let square = kind;

        if at.x != size_x {
            kind = match kind {
                SquareKind::Inactive => SquareKind::Playable,
                _ => SquareKind::Inactive,
            };
        }

        square
    })
}

const STANDARD_SIZE: i32 = 8;
const STANDARD_LAYOUT: &str = "bbbbbbbbbbbb--------rrrrrrrrrrrr";

fn standard_size() -> i32 {
    STANDARD_SIZE
}

fn standard_layout() -> String {
    STANDARD_LAYOUT.to_string()
}

/// Runtime configuration for a draughts [`Board`].
#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Setup {
    #[serde(default = "standard_size")]
    size: i32,

    #[serde(default = "standard_layout")]
    layout: String,
}

/// The standard starting position: twelve black men, eight empty cells, and
/// twelve red men on an 8x8 board.
impl Default for Setup {
    fn default() -> Self {
        Setup {
            size: STANDARD_SIZE,
            layout: standard_layout(),
        }
    }
}

impl Setup {
    /// Builds the configured board.
    pub fn build(self) -> Result<Board<Draughts>, LoadError> {
        let mut board = Board::new(checkerboard(self.size, self.size), Draughts::default());
        board.load_from_str(&self.layout)?;
        Ok(board)
    }
}

/// The reason why parsing [`Setup`] failed.
#[derive(Debug, Display, PartialEq, Error, From)]
#[display(fmt = "failed to parse setup configuration")]
pub struct ParseSetupError(ron::de::SpannedError);

impl FromStr for Setup {
    type Err = ParseSetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}
