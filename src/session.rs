//! A single game of Tower of Hanoi played over a line-oriented terminal.
//!
//! The session owns the game state. Each turn it renders the towers, asks
//! the [`CommandReader`] for a legal move or a quit, applies the move, and
//! checks for a win.

use crate::config::HanoiConfig;
use crate::games::hanoi::{
    render, CommandReader, GameResult, GameSetup, GameSolved, PlayerCommand, Towers,
    minimum_moves,
};
use std::io::{BufRead, Write};
use tracing::{info, instrument};

const INTRO: &str = "THE TOWER OF HANOI

Move the tower of disks, one disk at a time, to another tower. Larger
disks cannot rest on top of a smaller disk.

More info at https://en.wikipedia.org/wiki/Tower_of_Hanoi
";
const VICTORY: &str = "You have solved the puzzle! Well done!";
const FAREWELL: &str = "Thanks for playing!";

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SessionOutcome {
    /// The full stack was rebuilt on peg B or C.
    #[display("Solved in {} moves", moves)]
    Solved {
        /// Moves taken.
        moves: usize,
    },
    /// The player quit (or input ran out) before solving.
    #[display("Quit after {} moves", moves)]
    Quit {
        /// Moves taken before quitting.
        moves: usize,
    },
}

/// One interactive game, reading commands from `R` and writing to `W`.
#[derive(Debug)]
pub struct GameSession<R, W> {
    config: HanoiConfig,
    reader: CommandReader<R>,
    output: W,
}

impl<R: BufRead, W: Write> GameSession<R, W> {
    /// Creates a session for the given configuration and terminal streams.
    pub fn new(config: HanoiConfig, input: R, output: W) -> Self {
        Self {
            config,
            reader: CommandReader::new(input),
            output,
        }
    }

    /// Plays until the puzzle is solved or the player quits.
    ///
    /// Only I/O failures and broken move postconditions are returned as
    /// errors; bad input is handled by re-prompting.
    #[instrument(skip(self), fields(disks = self.config.disks().get()))]
    pub fn run(mut self) -> anyhow::Result<SessionOutcome> {
        info!("Starting session");
        writeln!(self.output, "{INTRO}")?;

        let mut game = GameSetup::new(*self.config.disks()).start();

        loop {
            self.show(game.towers())?;

            let action = match self.reader.next_command(&mut self.output, game.towers())? {
                PlayerCommand::Move(action) => action,
                PlayerCommand::Quit => {
                    writeln!(self.output, "{FAREWELL}")?;
                    let outcome = SessionOutcome::Quit {
                        moves: game.history().len(),
                    };
                    info!(%outcome, "Session ended");
                    return Ok(outcome);
                }
            };

            game = match game.make_move(action)? {
                GameResult::InProgress(game) => game,
                GameResult::Solved(solved) => return self.finish(&solved),
            };
        }
    }

    fn show(&mut self, towers: &Towers) -> std::io::Result<()> {
        write!(self.output, "{}", render(towers))?;
        self.output.flush()
    }

    fn finish(mut self, solved: &GameSolved) -> anyhow::Result<SessionOutcome> {
        self.show(solved.towers())?;
        writeln!(self.output, "{VICTORY}")?;
        match minimum_moves(solved.towers().disk_count().get()) {
            Some(minimum) => writeln!(
                self.output,
                "Moves taken: {} (minimum possible: {}).",
                solved.move_count(),
                minimum
            )?,
            None => writeln!(self.output, "Moves taken: {}.", solved.move_count())?,
        }
        self.output.flush()?;

        let outcome = SessionOutcome::Solved {
            moves: solved.move_count(),
        };
        info!(%outcome, optimal = solved.is_optimal(), "Session ended");
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn play(disks: u8, input: &str) -> (SessionOutcome, String) {
        let mut output = Vec::new();
        let config = HanoiConfig::new(disks).unwrap();
        let outcome = GameSession::new(config, Cursor::new(input.to_string()), &mut output)
            .run()
            .unwrap();
        (outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_one_disk_solved_in_one_move() {
        let (outcome, output) = play(1, "AB\n");
        assert_eq!(outcome, SessionOutcome::Solved { moves: 1 });
        assert!(output.starts_with("THE TOWER OF HANOI"));
        assert!(output.contains(VICTORY));
        assert!(output.contains("Moves taken: 1 (minimum possible: 1)."));
        assert!(!output.contains(FAREWELL));
    }

    #[test]
    fn test_quit_immediately() {
        let (outcome, output) = play(3, "quit\n");
        assert_eq!(outcome, SessionOutcome::Quit { moves: 0 });
        assert!(output.trim_end().ends_with(FAREWELL));
        assert!(!output.contains(VICTORY));
    }

    #[test]
    fn test_renders_once_per_turn_plus_final() {
        let (_, output) = play(2, "AB\nAC\nBC\n");
        // Three turns, then the solved position.
        assert_eq!(output.matches("  A    B    C").count(), 4);
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(SessionOutcome::Solved { moves: 7 }.to_string(), "Solved in 7 moves");
        assert_eq!(SessionOutcome::Quit { moves: 2 }.to_string(), "Quit after 2 moves");
    }
}
