use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Playing -> Won
/// - Playing -> Lost
///
/// Terminal states only exit via [`Session::reset`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    Playing,
    Won,
    Lost,
}

impl SessionStatus {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for SessionStatus {
    fn default() -> Self {
        Self::Playing
    }
}

/// Result of one submitted move, handed back to the presentation layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurnOutcome {
    pub status: SessionStatus,
    /// Cells newly revealed by this turn, in first-reveal order.
    pub newly_revealed: Vec<Coord2>,
    /// Whether the move consumed a turn. Out-of-bounds moves and moves
    /// submitted after the game ended do not (the enemy does not step).
    pub consumed: bool,
}

impl TurnOutcome {
    fn ignored(status: SessionStatus) -> Self {
        Self {
            status,
            newly_revealed: Vec::new(),
            consumed: false,
        }
    }
}

/// One full game from reset to win or loss: board, player, goal and enemy,
/// advanced turn by turn through [`Session::attempt_move`].
///
/// The session is the single owner of all game state; the presentation layer
/// drives it and reads back through the accessors, never mutating directly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    config: GameConfig,
    board: Board,
    player: Coord2,
    goal: Coord2,
    enemy: EnemyState,
    status: SessionStatus,
    seed: u64,
    round: u64,
}

impl Session {
    /// Starts a session with a freshly generated board and the opening cell
    /// already revealed.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        Ok(Self {
            config,
            board: fresh_board(config, seed, 0)?,
            player: config.player_start(),
            goal: config.goal(),
            enemy: EnemyState::new(config.enemy_start()),
            status: SessionStatus::Playing,
            seed,
            round: 0,
        })
    }

    /// Re-initializes every part of the session and generates a fresh board.
    /// Each reset draws a new deterministic layout from the session seed.
    pub fn reset(&mut self) -> Result<()> {
        self.round += 1;
        self.board = fresh_board(self.config, self.seed, self.round)?;
        self.player = self.config.player_start();
        self.goal = self.config.goal();
        self.enemy = EnemyState::new(self.config.enemy_start());
        self.status = SessionStatus::Playing;
        Ok(())
    }

    /// Processes one player input: enemy step, player move, reveal, then
    /// win/loss evaluation.
    ///
    /// No-op when the game has ended or the candidate cell is out of bounds;
    /// in both cases the enemy does not move and nothing is revealed. The
    /// enemy steps against the pre-move player position, and loss (bomb or
    /// enemy contact) is evaluated before win, so reaching the goal while
    /// colliding still loses.
    pub fn attempt_move(&mut self, direction: Direction) -> TurnOutcome {
        if !self.status.is_playing() {
            return TurnOutcome::ignored(self.status);
        }

        let bounds = (self.config.size, self.config.size);
        let Some(candidate) = apply_delta(self.player, direction.delta(), bounds) else {
            return TurnOutcome::ignored(self.status);
        };

        self.enemy = self.enemy.step(self.player, self.config.size);
        self.player = candidate;
        let newly_revealed = self.board.reveal(candidate).unwrap_or_default();

        if self.board.contains_bomb(self.player) || self.player == self.enemy.position() {
            self.status = SessionStatus::Lost;
            log::debug!("Session lost at {:?}", self.player);
        } else if self.player == self.goal {
            self.status = SessionStatus::Won;
            log::debug!("Session won at {:?}", self.player);
        }

        TurnOutcome {
            status: self.status,
            newly_revealed,
            consumed: true,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self) -> Coord2 {
        self.player
    }

    pub fn goal(&self) -> Coord2 {
        self.goal
    }

    pub fn enemy(&self) -> EnemyState {
        self.enemy
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }
}

fn fresh_board(config: GameConfig, seed: u64, round: u64) -> Result<Board> {
    let generator = RandomBoardGenerator::new(seed.wrapping_add(round));
    let mut board = generator.generate(config, &[config.player_start(), config.goal()])?;

    let opened = board.reveal(config.player_start()).unwrap_or_default();
    log::debug!(
        "Session round {} started, opening reveal uncovered {} cells",
        round,
        opened.len()
    );
    Ok(board)
}
