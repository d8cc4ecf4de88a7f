use crate::*;
pub use random::*;

mod random;

/// Strategy for producing a freshly laid-out board.
///
/// `keep_clear` lists cells that must never receive a bomb (the player start
/// and the goal).
pub trait BoardGenerator {
    fn generate(self, config: GameConfig, keep_clear: &[Coord2]) -> Result<Board>;
}
