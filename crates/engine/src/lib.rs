//! gridfall-engine - falling-block game rules and session loop.
//!
//! Provides collision checks, wall-kick rotation, line clearing, and the
//! [`GameSession`] state machine that ties them together.

pub mod apply;
pub mod collision;
pub mod config;
pub mod lines;
pub mod movement;
pub mod rotation;
pub mod session;
pub mod spawn;

pub use apply::{lock_piece, merge};
pub use collision::{can_place, collides};
pub use config::{
    ConfigError, SessionConfig, DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_TICK_INTERVAL_MS,
};
pub use lines::clear_full_rows;
pub use movement::{try_descend, try_shift};
pub use rotation::try_rotate;
pub use session::{GameSession, SessionPhase, POINTS_PER_LINE};
pub use spawn::{PieceSource, RandomSource, SequenceSource};
