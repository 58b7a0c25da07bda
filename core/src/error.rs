use thiserror::Error;

use crate::{CellCount, Coord};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinates ({x}, {y}) are outside the board")]
    OutOfRange { x: Coord, y: Coord },
    #[error("Invalid mine count {requested}, board fits between 1 and {max}")]
    InvalidMineCount {
        requested: CellCount,
        max: CellCount,
    },
    #[error("Board width and height must be positive")]
    InvalidSize,
    #[error("Mine at ({x}, {y}) is listed more than once")]
    DuplicateMine { x: Coord, y: Coord },
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
