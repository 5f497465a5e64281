// Bomb RPS Library - Core Module Organization
//
// A player abstraction for rock-paper-scissors with a once-per-game Bomb.
// Game loops and round resolution live with the caller.

// Core data structures and errors
pub mod enums;
pub mod errors;

// Collaborators injected into players
pub mod logger;
pub mod move_factory;
pub mod ordered_hashmap;

// Player implementation
pub mod player;
pub mod player_system;
pub mod players;

#[cfg(test)]
pub(crate) mod test_logging;

// Re-export common types for convenient access
pub use crate::enums::Move;
pub use crate::errors::{GameError, GameResult, PlayerError, PlayerResult, RpsError, RpsResult};
pub use crate::logger::{Logger, LoggerFactory, LoggerRegistry, SCREEN_CHANNEL};
pub use crate::move_factory::{ClassicMoves, MoveFactory, StandardMoves};
pub use crate::player::{MoveChooser, Player, Turn, BOMB_LIMIT, BOMB_RULE};
pub use crate::player_system::{PlayerConfig, PlayerFactory, PlayerInfo, PlayerKind};
pub use crate::players::{HumanChooser, RandomChooser, ScriptedChooser};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
