use serde::{Deserialize, Serialize};

use crate::*;

/// Horizontal patrol direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    pub const fn dx(self) -> isize {
        match self {
            Self::Left => -1,
            Self::Right => 1,
        }
    }
}

/// Enemy position plus movement mode.
///
/// Un-alerted, the enemy patrols its spawn row horizontally. Once the player
/// comes within Manhattan distance 1 the alert latches for the rest of the
/// session and the enemy greedily chases instead.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyState {
    pub(crate) position: Coord2,
    pub(crate) facing: Facing,
    pub(crate) alerted: bool,
}

impl EnemyState {
    pub const fn new(position: Coord2) -> Self {
        Self {
            position,
            facing: Facing::Right,
            alerted: false,
        }
    }

    pub const fn position(self) -> Coord2 {
        self.position
    }

    pub const fn facing(self) -> Facing {
        self.facing
    }

    pub const fn is_alerted(self) -> bool {
        self.alerted
    }

    /// Advances the enemy one turn against the given player position.
    ///
    /// The proximity check runs against the positions as they are *now*, so
    /// a step that lands the enemy next to the player only raises the alert
    /// on the following turn.
    #[must_use]
    pub fn step(self, player: Coord2, size: Coord) -> Self {
        let mut next = self;

        if manhattan(player, self.position) <= 1 && !next.alerted {
            log::debug!("Enemy at {:?} alerted by player at {:?}", self.position, player);
            next.alerted = true;
        }

        if next.alerted {
            next.chase(player, size)
        } else {
            next.patrol(size)
        }
    }

    fn patrol(mut self, size: Coord) -> Self {
        // Rightmost column is checked first, so a 1-wide board settles on
        // facing left.
        if self.position.0 == size - 1 {
            self.facing = Facing::Left;
        } else if self.position.0 == 0 {
            self.facing = Facing::Right;
        }

        if let Some(next) = apply_delta(self.position, (self.facing.dx(), 0), (size, size)) {
            self.position = next;
        }
        self
    }

    fn chase(mut self, player: Coord2, size: Coord) -> Self {
        let dx = step_toward(self.position.0, player.0);
        let dy = step_toward(self.position.1, player.1);

        // Horizontal movement is preferred; never move diagonally.
        if dx != 0
            && let Some(next) = apply_delta(self.position, (dx, 0), (size, size))
        {
            self.position = next;
        } else if dy != 0
            && let Some(next) = apply_delta(self.position, (0, dy), (size, size))
        {
            self.position = next;
        }
        self
    }
}

const fn step_toward(from: Coord, to: Coord) -> isize {
    match to as isize - from as isize {
        d if d > 0 => 1,
        d if d < 0 => -1,
        _ => 0,
    }
}
