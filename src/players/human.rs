use std::fmt;
use std::io::{self, BufRead, Write};

use crate::enums::Move;
use crate::errors::{PlayerError, PlayerResult};
use crate::player::{MoveChooser, Turn, BOMB_RULE};

const EMPTY_INPUT: &str = "Please enter a move";

/// Human player implementation, reads moves from a text prompt
pub struct HumanChooser<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanChooser<R, W> {
    pub fn new(input: R, output: W) -> Self {
        HumanChooser { input, output }
    }

    fn prompt(&mut self, turn: &Turn<'_>) -> PlayerResult<()> {
        let names: Vec<String> = turn
            .legal_moves()
            .iter()
            .map(|mv| mv.to_str().to_lowercase())
            .collect();
        write!(self.output, "{}, choose a move ({}): ", turn.player, names.join(", "))?;
        self.output.flush()?;
        Ok(())
    }
}

impl HumanChooser<io::BufReader<io::Stdin>, io::Stdout> {
    /// Chooser bound to the process terminal
    pub fn stdio() -> Self {
        Self::new(io::BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead + Send, W: Write + Send> MoveChooser for HumanChooser<R, W> {
    fn choose_move(&mut self, turn: &Turn<'_>) -> PlayerResult<Move> {
        loop {
            self.prompt(turn)?;

            let mut raw = Vec::new();
            if self.input.read_until(b'\n', &mut raw)? == 0 {
                return Err(PlayerError::InputClosed {
                    player: turn.player.to_string(),
                });
            }
            // bad bytes become U+FFFD and are reported as an unknown move
            let line = String::from_utf8_lossy(&raw);
            if line.trim().is_empty() {
                writeln!(self.output, "{}", EMPTY_INPUT)?;
                continue;
            }

            match turn.moves.create(&line) {
                Ok(mv) if mv.is_bomb() && !turn.bomb_available => {
                    writeln!(self.output, "{}", BOMB_RULE)?;
                }
                Ok(mv) => return Ok(mv),
                Err(err) => {
                    log::debug!("{} entered an invalid move: {}", turn.player, err);
                    writeln!(self.output, "{}", err)?;
                }
            }
        }
    }

    fn is_bot(&self) -> bool {
        false
    }
}

impl<R, W> fmt::Debug for HumanChooser<R, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HumanChooser").finish_non_exhaustive()
    }
}
