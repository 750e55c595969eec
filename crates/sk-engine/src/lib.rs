//! Turn engine for Seven Kingdoms: the randomized event catalog with
//! dice-roll resolution, and the game session that coordinates player
//! commands, NPC wandering, and the choice-driven event protocol.
//!
//! The session is a plain owned struct; a host drives it by feeding
//! discrete actions ([`GameSession::submit_move`],
//! [`GameSession::submit_command`], [`GameSession::submit_choice`]) and
//! rendering the returned messages and state snapshots. While an event
//! awaits the player's choice, every other action is refused until a
//! valid selection arrives.

pub mod command;
pub mod config;
pub mod error;
pub mod event;
pub mod session;

pub use command::{Command, parse_command};
pub use config::GameConfig;
pub use error::{EngineError, GameResult};
pub use event::{Choice, ChoiceTag, EventKind};
pub use session::{GameSession, MoveOutcome};
