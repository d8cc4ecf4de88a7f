use thiserror::Error;

use crate::CellCount;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Not enough free cells for bombs: {available} available, {requested} requested")]
    InsufficientCells {
        available: CellCount,
        requested: CellCount,
    },
}

pub type Result<T> = core::result::Result<T, GameError>;
