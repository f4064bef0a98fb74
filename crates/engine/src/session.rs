//! Game session - owns the grid, the falling piece, and the score.

use serde::{Deserialize, Serialize};

use gridfall_core::{Grid, Piece};

use crate::apply::lock_piece;
use crate::collision::{can_place, collides};
use crate::config::{ConfigError, SessionConfig};
use crate::movement::{try_descend, try_shift};
use crate::rotation::try_rotate;
use crate::spawn::{PieceSource, RandomSource};

/// Points awarded per cleared line. Clearing `n` lines with one placement
/// scores `n * POINTS_PER_LINE`.
pub const POINTS_PER_LINE: u32 = 10;

/// Where a session is in its lifecycle.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionPhase {
    /// Constructed but not yet started.
    Ready,
    /// Accepting ticks and player commands.
    Running,
    /// A spawned piece overlapped the stack. Commands are ignored until
    /// the session is started again.
    Over,
}

/// One complete game: grid, falling piece, preview piece, and score.
///
/// The session never advances on its own; the driving loop calls [`tick`]
/// at whatever cadence it wants (the configured interval is advisory).
/// Player commands and ticks outside the running phase are ignored.
///
/// [`tick`]: GameSession::tick
pub struct GameSession<S = RandomSource> {
    config: SessionConfig,
    grid: Grid,
    current: Option<Piece>,
    next: Option<Piece>,
    score: u32,
    phase: SessionPhase,
    source: S,
}

impl GameSession<RandomSource> {
    /// Standard 20x10 session drawing pieces from OS entropy.
    pub fn standard() -> Self {
        Self::assemble(SessionConfig::standard(), RandomSource::from_entropy())
    }

    /// Standard session with a deterministic piece sequence. Two sessions
    /// built from the same seed and fed the same commands stay identical.
    pub fn seeded(seed: u64) -> Self {
        Self::assemble(SessionConfig::standard(), RandomSource::seeded(seed))
    }
}

impl<S: PieceSource> GameSession<S> {
    /// Session with custom dimensions and piece source.
    pub fn with_source(config: SessionConfig, source: S) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::assemble(config, source))
    }

    fn assemble(config: SessionConfig, source: S) -> Self {
        Self {
            config,
            grid: Grid::new(config.rows, config.cols),
            current: None,
            next: None,
            score: 0,
            phase: SessionPhase::Ready,
            source,
        }
    }

    /// Begin play. Clears the grid and score, spawns the first piece and
    /// its preview. Calling this on a finished session starts a new game.
    pub fn start(&mut self) {
        self.grid = Grid::new(self.config.rows, self.config.cols);
        self.score = 0;
        self.current = Some(self.spawn_piece());
        self.next = Some(self.spawn_piece());
        self.phase = SessionPhase::Running;
    }

    /// Advance gravity by one step. The falling piece descends one row if
    /// it can; otherwise it settles: its cells join the grid, full rows are
    /// cleared and scored, and the preview piece takes over. If the new
    /// piece overlaps the stack at spawn the game is over - the piece stays
    /// observable so a renderer can show the losing position.
    pub fn tick(&mut self) {
        if self.phase != SessionPhase::Running {
            return;
        }
        let Some(current) = self.current else {
            return;
        };

        if let Some(descended) = try_descend(&self.grid, current) {
            self.current = Some(descended);
            return;
        }

        let cleared = lock_piece(&mut self.grid, current);
        self.score += cleared * POINTS_PER_LINE;

        let promoted = match self.next.take() {
            Some(piece) => piece,
            None => self.spawn_piece(),
        };
        self.next = Some(self.spawn_piece());
        if collides(&self.grid, promoted) {
            self.phase = SessionPhase::Over;
        }
        self.current = Some(promoted);
    }

    /// Move the falling piece one column left if the spot is free.
    pub fn move_left(&mut self) {
        self.shift(-1);
    }

    /// Move the falling piece one column right if the spot is free.
    pub fn move_right(&mut self) {
        self.shift(1);
    }

    fn shift(&mut self, dx: i32) {
        if self.phase != SessionPhase::Running {
            return;
        }
        let Some(current) = self.current else {
            return;
        };
        if let Some(shifted) = try_shift(&self.grid, current, dx) {
            self.current = Some(shifted);
        }
    }

    /// Drop the piece one row immediately. Identical to a gravity tick,
    /// including settling and scoring when the piece cannot descend.
    pub fn soft_drop(&mut self) {
        self.tick();
    }

    /// Rotate the falling piece clockwise, nudging it off the walls if
    /// that makes the rotation fit. Blocked rotations leave the piece
    /// exactly where it was. The kick search only returns placeable
    /// candidates; the commit is gated on placement regardless.
    pub fn rotate(&mut self) {
        if self.phase != SessionPhase::Running {
            return;
        }
        let Some(current) = self.current else {
            return;
        };
        let rotated = try_rotate(&self.grid, current).filter(|p| can_place(&self.grid, *p));
        if let Some(rotated) = rotated {
            self.current = Some(rotated);
        }
    }

    /// Settled cells only; the falling piece is not drawn into the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn current_piece(&self) -> Option<Piece> {
        self.current
    }

    pub fn next_piece(&self) -> Option<Piece> {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_over(&self) -> bool {
        self.phase == SessionPhase::Over
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    fn spawn_piece(&mut self) -> Piece {
        Piece::spawn(self.source.next_kind(), self.config.cols)
    }
}
