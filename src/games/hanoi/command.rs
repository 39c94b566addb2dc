//! Reading player commands from a line-oriented prompt.

use super::action::{Move, MoveError};
use super::Towers;
use std::io::{self, BufRead, Write};
use tracing::{debug, instrument};

/// Keyword that ends the session, compared after normalization.
pub const QUIT_KEYWORD: &str = "QUIT";

const INSTRUCTIONS: &str = "Enter the letters of \"from\" and \"to\" towers, or QUIT.\n\
(e.g., AB to move a disk from tower A to tower B.)";
const PROMPT: &str = "> ";

/// A command the player can give.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    /// A move that is legal for the towers it was read against.
    Move(Move),
    /// The player asked to stop.
    Quit,
}

/// Input that is neither a move token nor the quit keyword.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Enter one of AB, AC, BA, BC, CA, or CB.")]
pub struct MalformedCommand {
    /// The normalized input that was rejected.
    pub input: String,
}

impl std::error::Error for MalformedCommand {}

/// Upper-cases and trims one line of input.
pub fn normalize(line: &str) -> String {
    line.trim().to_uppercase()
}

/// Parses one line of input into a command.
///
/// Only syntax is checked here; legality against the towers is up to
/// [`CommandReader`].
#[instrument]
pub fn parse_command(line: &str) -> Result<PlayerCommand, MalformedCommand> {
    let input = normalize(line);
    if input == QUIT_KEYWORD {
        return Ok(PlayerCommand::Quit);
    }
    Move::from_token(&input)
        .map(PlayerCommand::Move)
        .ok_or(MalformedCommand { input })
}

/// Prompts for commands until the player enters a legal move or quits.
#[derive(Debug)]
pub struct CommandReader<R> {
    input: R,
}

impl<R: BufRead> CommandReader<R> {
    /// Creates a reader over a line-oriented input.
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// Reads commands until one is a legal move for `towers` or a quit.
    ///
    /// Malformed and illegal input is reported on `output` and the prompt
    /// repeats, with no limit on attempts. End of input counts as a quit.
    #[instrument(skip_all)]
    pub fn next_command<W: Write>(
        &mut self,
        output: &mut W,
        towers: &Towers,
    ) -> io::Result<PlayerCommand> {
        loop {
            writeln!(output, "{INSTRUCTIONS}")?;
            write!(output, "{PROMPT}")?;
            output.flush()?;

            // Raw bytes: a line that is not UTF-8 is malformed input, not an I/O error.
            let mut buf = Vec::new();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                debug!("Input closed, treating as quit");
                return Ok(PlayerCommand::Quit);
            }
            let line = String::from_utf8_lossy(&buf);

            let action = match parse_command(&line) {
                Ok(PlayerCommand::Quit) => return Ok(PlayerCommand::Quit),
                Ok(PlayerCommand::Move(action)) => action,
                Err(err) => {
                    debug!(input = %err.input, "Malformed command");
                    writeln!(output, "{err}")?;
                    continue;
                }
            };

            match check(towers, &action) {
                Ok(()) => return Ok(PlayerCommand::Move(action)),
                Err(err) => {
                    debug!(%action, error = ?err, "Illegal move");
                    writeln!(output, "{err}")?;
                }
            }
        }
    }
}

fn check(towers: &Towers, action: &Move) -> Result<(), MoveError> {
    super::rules::validate_move(towers, action.from(), action.to())
}
