// Player module - one participant in a game
//
// A Player owns its name, score, current move and Bomb counter. Picking a
// move is delegated to a MoveChooser; output goes to the "screen" channel of
// the injected LoggerFactory.

use std::fmt;
use std::sync::Arc;

use crate::enums::Move;
use crate::errors::{GameError, GameResult, PlayerResult};
use crate::logger::{Logger, LoggerFactory, SCREEN_CHANNEL};
use crate::move_factory::MoveFactory;

/// Times a player may play Bomb in one game
pub const BOMB_LIMIT: u8 = 1;

pub const BOMB_RULE: &str = "You can only play Bomb once per game";

/// What a chooser can see when asked for a move
pub struct Turn<'a> {
    pub player: &'a str,
    pub bomb_available: bool,
    pub moves: &'a dyn MoveFactory,
}

impl Turn<'_> {
    /// Moves the chooser may pick without breaking the Bomb rule
    pub fn legal_moves(&self) -> Vec<Move> {
        self.moves
            .moves()
            .into_iter()
            .filter(|mv| self.bomb_available || !mv.is_bomb())
            .collect()
    }
}

pub trait MoveChooser: Send {
    /// Decides the next move for the player
    fn choose_move(&mut self, turn: &Turn<'_>) -> PlayerResult<Move>;

    /// Returns true if no human is behind the choices
    fn is_bot(&self) -> bool;
}

pub struct Player {
    name: String,
    score: u32,
    current_move: Option<Move>,
    bomb_count: u8,
    logger_factory: Arc<dyn LoggerFactory>,
    move_factory: Arc<dyn MoveFactory>,
    chooser: Box<dyn MoveChooser>,
}

impl Player {
    pub fn new(
        name: impl Into<String>,
        logger_factory: Arc<dyn LoggerFactory>,
        move_factory: Arc<dyn MoveFactory>,
        chooser: Box<dyn MoveChooser>,
    ) -> Self {
        Player {
            name: name.into(),
            score: 0,
            current_move: None,
            bomb_count: 0,
            logger_factory,
            move_factory,
            chooser,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the current move and reports it on the screen channel.
    ///
    /// A Bomb beyond [`BOMB_LIMIT`] is rejected with a rule violation. The
    /// rejected move is not stored, nothing is logged and the Bomb counter
    /// keeps its previous value.
    pub fn set_move(&mut self, mv: Move) -> GameResult<()> {
        let bomb_count = if mv.is_bomb() {
            self.bomb_count + 1
        } else {
            self.bomb_count
        };

        if bomb_count > BOMB_LIMIT {
            log::warn!("{} tried to play Bomb {} times", self.name, bomb_count);
            return Err(GameError::rule_violation(BOMB_RULE));
        }

        if bomb_count != self.bomb_count {
            log::debug!("{} used their Bomb", self.name);
        }
        self.bomb_count = bomb_count;
        self.current_move = Some(mv);
        self.screen().log(&format!("\t{} played {}\n", self, mv));
        Ok(())
    }

    pub fn get_move(&self) -> Option<Move> {
        self.current_move
    }

    /// Called when the player wins a round. The score saturates at `u32::MAX`.
    pub fn add_win(&mut self) {
        self.screen().log(&format!("\t{} Wins!\n", self));
        self.score = self.score.saturating_add(1);
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn bombs_played(&self) -> u8 {
        self.bomb_count
    }

    pub fn bomb_available(&self) -> bool {
        self.bomb_count < BOMB_LIMIT
    }

    pub fn is_bot(&self) -> bool {
        self.chooser.is_bot()
    }

    /// Asks the chooser for a move. The move is not applied; pass it to
    /// [`Player::set_move`].
    pub fn choose_move(&mut self) -> PlayerResult<Move> {
        let turn = Turn {
            player: &self.name,
            bomb_available: self.bomb_available(),
            moves: self.move_factory.as_ref(),
        };
        self.chooser.choose_move(&turn)
    }

    fn screen(&self) -> Arc<dyn Logger> {
        self.logger_factory.provide(SCREEN_CHANNEL)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("score", &self.score)
            .field("current_move", &self.current_move)
            .field("bomb_count", &self.bomb_count)
            .field("chooser", &"<MoveChooser>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::{LoggerRegistry, RecordingLogger};
    use crate::move_factory::{ClassicMoves, StandardMoves};
    use crate::players::ScriptedChooser;

    fn player_with_screen(name: &str) -> (Player, Arc<RecordingLogger>) {
        let screen = Arc::new(RecordingLogger::new());
        let loggers = LoggerRegistry::new().with_channel(SCREEN_CHANNEL, screen.clone());
        let player = Player::new(
            name,
            Arc::new(loggers),
            Arc::new(StandardMoves),
            Box::new(ScriptedChooser::new(vec![Move::Paper, Move::Bomb])),
        );
        (player, screen)
    }

    #[test]
    fn test_new_player_starts_empty() {
        let (player, screen) = player_with_screen("Alice");
        assert_eq!(player.score(), 0);
        assert_eq!(player.get_move(), None);
        assert_eq!(player.bombs_played(), 0);
        assert!(player.bomb_available());
        assert!(screen.messages().is_empty());
    }

    #[test]
    fn test_alice_scenario() {
        let (mut alice, screen) = player_with_screen("Alice");

        alice.set_move(Move::Rock).unwrap();
        assert_eq!(screen.messages(), vec!["\tAlice played Rock\n"]);

        alice.add_win();
        assert_eq!(alice.score(), 1);
        assert_eq!(screen.messages()[1], "\tAlice Wins!\n");

        alice.set_move(Move::Bomb).unwrap();
        assert_eq!(alice.get_move(), Some(Move::Bomb));

        let err = alice.set_move(Move::Bomb).unwrap_err();
        assert_eq!(err, GameError::rule_violation(BOMB_RULE));
        assert_eq!(err.to_string(), "You can only play Bomb once per game");
        assert_eq!(screen.messages().len(), 3);
    }

    #[test]
    fn test_score_counts_every_win() {
        let (mut player, screen) = player_with_screen("Bob");
        for expected in 1..=5 {
            player.add_win();
            assert_eq!(player.score(), expected);
        }
        assert_eq!(screen.messages().len(), 5);
        assert!(screen.messages().iter().all(|m| m == "\tBob Wins!\n"));
    }

    #[test]
    fn test_score_never_wraps() {
        let (mut player, screen) = player_with_screen("Max");
        player.score = u32::MAX - 1;
        player.add_win();
        player.add_win();
        assert_eq!(player.score(), u32::MAX);
        assert_eq!(screen.messages().len(), 2);
    }

    #[test]
    fn test_non_bomb_moves_never_violate() {
        let (mut player, screen) = player_with_screen("Carol");
        let sequence = [Move::Rock, Move::Paper, Move::Scissors, Move::Rock];
        for _ in 0..10 {
            for mv in sequence {
                assert!(player.set_move(mv).is_ok());
                assert_eq!(player.get_move(), Some(mv));
            }
        }
        assert_eq!(screen.messages().len(), 40);
        assert!(player.bomb_available());
    }

    #[test]
    fn test_second_bomb_fails_after_other_moves() {
        let (mut player, _screen) = player_with_screen("Dave");
        player.set_move(Move::Bomb).unwrap();
        player.set_move(Move::Rock).unwrap();
        player.set_move(Move::Scissors).unwrap();

        assert!(matches!(
            player.set_move(Move::Bomb),
            Err(GameError::RuleViolation { .. })
        ));
    }

    #[test]
    fn test_rejected_bomb_keeps_previous_move() {
        crate::test_logging::init();
        let (mut player, screen) = player_with_screen("Erin");
        player.set_move(Move::Bomb).unwrap();
        player.set_move(Move::Paper).unwrap();

        assert!(player.set_move(Move::Bomb).is_err());
        assert_eq!(player.get_move(), Some(Move::Paper));
        assert_eq!(player.bombs_played(), 1);
        assert_eq!(screen.messages().len(), 2);

        // the player can keep playing after the rejection
        player.set_move(Move::Scissors).unwrap();
        assert_eq!(player.get_move(), Some(Move::Scissors));
        assert!(player.set_move(Move::Bomb).is_err());
    }

    #[test]
    fn test_display_is_name() {
        let (mut player, _screen) = player_with_screen("Frank");
        player.set_move(Move::Rock).unwrap();
        player.add_win();
        assert_eq!(player.to_string(), "Frank");
        assert_eq!(player.name(), "Frank");

        let (empty, _screen) = player_with_screen("");
        assert_eq!(empty.to_string(), "");
    }

    #[test]
    fn test_choose_move_delegates_without_applying() {
        let (mut player, screen) = player_with_screen("Grace");
        assert_eq!(player.choose_move(), Ok(Move::Paper));
        assert_eq!(player.get_move(), None);
        assert!(screen.messages().is_empty());
        assert!(player.is_bot());
    }

    #[test]
    fn test_turn_hides_bomb_once_used() {
        let factory = StandardMoves;
        let fresh = Turn {
            player: "Heidi",
            bomb_available: true,
            moves: &factory,
        };
        assert!(fresh.legal_moves().contains(&Move::Bomb));

        let spent = Turn {
            bomb_available: false,
            ..fresh
        };
        assert_eq!(
            spent.legal_moves(),
            vec![Move::Rock, Move::Paper, Move::Scissors]
        );

        let classic = Turn {
            player: "Heidi",
            bomb_available: true,
            moves: &ClassicMoves,
        };
        assert!(!classic.legal_moves().contains(&Move::Bomb));
    }
}
