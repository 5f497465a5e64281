use crate::enums::Move;
use crate::errors::{PlayerError, PlayerResult};

/// Builds moves from their textual names
pub trait MoveFactory: Send + Sync {
    fn create(&self, name: &str) -> PlayerResult<Move>;

    /// Every move this factory can produce
    fn moves(&self) -> Vec<Move>;
}

/// Rock, Paper, Scissors and Bomb.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardMoves;

impl MoveFactory for StandardMoves {
    fn create(&self, name: &str) -> PlayerResult<Move> {
        name.parse()
    }

    fn moves(&self) -> Vec<Move> {
        Move::ALL.to_vec()
    }
}

/// Plain rock-paper-scissors, no Bomb.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClassicMoves;

impl MoveFactory for ClassicMoves {
    fn create(&self, name: &str) -> PlayerResult<Move> {
        match name.parse::<Move>()? {
            Move::Bomb => Err(PlayerError::unknown_move(name.trim())),
            mv => Ok(mv),
        }
    }

    fn moves(&self) -> Vec<Move> {
        vec![Move::Rock, Move::Paper, Move::Scissors]
    }
}
