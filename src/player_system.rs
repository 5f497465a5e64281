use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::enums::Move;
use crate::errors::{PlayerError, PlayerResult};
use crate::logger::LoggerFactory;
use crate::move_factory::MoveFactory;
use crate::player::{MoveChooser, Player};
use crate::players::{HumanChooser, RandomChooser, ScriptedChooser};

/// Snapshot of a player, suitable for serialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub name: String,
    pub score: u32,
    pub current_move: Option<Move>,
    pub bombs_played: u8,
    pub is_bot: bool,
}

impl From<&Player> for PlayerInfo {
    fn from(player: &Player) -> Self {
        PlayerInfo {
            name: player.name().to_string(),
            score: player.score(),
            current_move: player.get_move(),
            bombs_played: player.bombs_played(),
            is_bot: player.is_bot(),
        }
    }
}

/// How a configured player picks moves
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PlayerKind {
    Human,
    Random {
        #[serde(default)]
        seed: Option<u64>,
    },
    Scripted {
        moves: Vec<Move>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    #[serde(flatten)]
    pub kind: PlayerKind,
}

impl PlayerConfig {
    pub fn from_json(json: &str) -> PlayerResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a JSON array of player configs
    pub fn roster_from_json(json: &str) -> PlayerResult<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Factory for creating players that share the same collaborators
#[derive(Clone)]
pub struct PlayerFactory {
    logger_factory: Arc<dyn LoggerFactory>,
    move_factory: Arc<dyn MoveFactory>,
}

impl PlayerFactory {
    pub fn new(logger_factory: Arc<dyn LoggerFactory>, move_factory: Arc<dyn MoveFactory>) -> Self {
        PlayerFactory {
            logger_factory,
            move_factory,
        }
    }

    pub fn create(&self, config: &PlayerConfig) -> Player {
        let chooser: Box<dyn MoveChooser> = match &config.kind {
            PlayerKind::Human => Box::new(HumanChooser::stdio()),
            PlayerKind::Random { seed: Some(seed) } => Box::new(RandomChooser::seeded(*seed)),
            PlayerKind::Random { seed: None } => Box::new(RandomChooser::new()),
            PlayerKind::Scripted { moves } => Box::new(ScriptedChooser::new(moves.clone())),
        };
        log::debug!("Creating player '{}' ({:?})", config.name, config.kind);
        self.with_chooser(config.name.clone(), chooser)
    }

    pub fn create_all(&self, roster: &[PlayerConfig]) -> Vec<Player> {
        roster.iter().map(|config| self.create(config)).collect()
    }

    pub fn create_bot(&self, name: impl Into<String>, bot_type: &str) -> PlayerResult<Player> {
        let chooser: Box<dyn MoveChooser> = match bot_type {
            "random" => Box::new(RandomChooser::new()),
            _ => {
                return Err(PlayerError::strategy(format!(
                    "Unknown bot type: {}",
                    bot_type
                )))
            }
        };
        Ok(self.with_chooser(name, chooser))
    }

    pub fn with_chooser(&self, name: impl Into<String>, chooser: Box<dyn MoveChooser>) -> Player {
        Player::new(
            name,
            Arc::clone(&self.logger_factory),
            Arc::clone(&self.move_factory),
            chooser,
        )
    }
}
