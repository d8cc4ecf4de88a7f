#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use enemy::*;
pub use error::*;
pub use generator::*;
pub use session::*;
pub use types::*;

mod board;
mod cell;
mod enemy;
mod error;
mod generator;
mod session;
mod types;

pub const DEFAULT_SIZE: Coord = 5;
pub const DEFAULT_BOMBS: CellCount = 5;

/// Board side length and bomb count for a session.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord,
    pub bombs: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord, bombs: CellCount) -> Self {
        Self { size, bombs }
    }

    pub fn new(size: Coord, bombs: CellCount) -> Self {
        let size = size.clamp(1, Coord::MAX);
        let bombs = bombs.clamp(1, mult(size, size));
        Self::new_unchecked(size, bombs)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }

    /// Player spawn, the top-left corner.
    pub const fn player_start(&self) -> Coord2 {
        (0, 0)
    }

    /// Goal cell, the bottom-right corner.
    pub const fn goal(&self) -> Coord2 {
        (self.size - 1, self.size - 1)
    }

    /// Enemy spawn, the top-right corner of its patrol row.
    pub const fn enemy_start(&self) -> Coord2 {
        (self.size - 1, 0)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(DEFAULT_SIZE, DEFAULT_BOMBS)
    }
}
