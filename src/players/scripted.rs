use std::collections::VecDeque;

use crate::enums::Move;
use crate::errors::{PlayerError, PlayerResult};
use crate::player::{MoveChooser, Turn};

/// Replays a fixed sequence of moves
#[derive(Debug, Clone)]
pub struct ScriptedChooser {
    moves: VecDeque<Move>,
}

impl ScriptedChooser {
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Self {
        ScriptedChooser {
            moves: moves.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl MoveChooser for ScriptedChooser {
    fn choose_move(&mut self, turn: &Turn<'_>) -> PlayerResult<Move> {
        self.moves.pop_front().ok_or_else(|| {
            PlayerError::strategy(format!("{} has no scripted moves left", turn.player))
        })
    }

    fn is_bot(&self) -> bool {
        true
    }
}
