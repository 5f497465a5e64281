use rand::prelude::*;
use rand_xorshift::XorShiftRng;

use crate::enums::Move;
use crate::errors::{PlayerError, PlayerResult};
use crate::player::{MoveChooser, Turn};

/// Picks uniformly among the legal moves. Never plays a second Bomb.
pub struct RandomChooser {
    rng: XorShiftRng,
}

impl RandomChooser {
    pub fn new() -> Self {
        RandomChooser {
            rng: XorShiftRng::from_entropy(),
        }
    }

    /// Reproducible chooser for simulations and tests
    pub fn seeded(seed: u64) -> Self {
        RandomChooser {
            rng: XorShiftRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomChooser {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveChooser for RandomChooser {
    fn choose_move(&mut self, turn: &Turn<'_>) -> PlayerResult<Move> {
        let legal = turn.legal_moves();
        let mv = legal
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| PlayerError::strategy("No legal moves available"))?;
        log::debug!("{} randomly chose {}", turn.player, mv);
        Ok(mv)
    }

    fn is_bot(&self) -> bool {
        true
    }
}
