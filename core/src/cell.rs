use serde::{Deserialize, Serialize};

/// State of a single board cell as stored by the core.
///
/// `adjacent` is fixed at generation time; only the `revealed` and `flagged`
/// bits flip during play. Bomb cells keep `adjacent == 0` and the field is
/// never consulted for them.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub(crate) bomb: bool,
    pub(crate) revealed: bool,
    pub(crate) flagged: bool,
    pub(crate) adjacent: u8,
}

impl Cell {
    pub const fn is_bomb(self) -> bool {
        self.bomb
    }

    pub const fn is_revealed(self) -> bool {
        self.revealed
    }

    pub const fn is_flagged(self) -> bool {
        self.flagged
    }

    /// Bombs within the 8-neighborhood, `0..=8`.
    pub const fn adjacent_bombs(self) -> u8 {
        self.adjacent
    }

    pub const fn is_hidden(self) -> bool {
        !self.revealed
    }
}
