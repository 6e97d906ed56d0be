#![cfg_attr(test, allow(clippy::unit_arg))]

mod board;
mod coord;
mod piece;
mod placement;
mod rank;
mod rules;
mod setup;
mod side;
mod square;

pub use crate::board::*;
pub use crate::coord::*;
pub use crate::piece::*;
pub use crate::placement::*;
pub use crate::rank::*;
pub use crate::rules::*;
pub use crate::setup::*;
pub use crate::side::*;
pub use crate::square::*;
