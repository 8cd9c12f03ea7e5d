use std::io::Write;

use rand::{Rng, SeedableRng, rngs::SmallRng};
use tilesweep_core::{CellCount, Coord, GameConfig, GameError, GameManager, RandomBoardGenerator};

use crate::command::{Command, HELP};
use crate::console::ConsoleListener;
use crate::render::{render_board, status_line};
use crate::stopwatch::Stopwatch;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Interactive host around a [`GameManager`]: runs commands, keeps time, prints results.
pub struct Shell {
    manager: GameManager<ConsoleListener>,
    seeds: SmallRng,
    stopwatch: Stopwatch,
}

impl Shell {
    pub fn new(config: GameConfig, seed: u64) -> tilesweep_core::Result<Self> {
        let mut seeds = SmallRng::seed_from_u64(seed);
        let generator = RandomBoardGenerator::new(seeds.random());
        let manager = GameManager::new(generator, config, ConsoleListener::default())?;
        Ok(Self {
            manager,
            seeds,
            stopwatch: Stopwatch::started(),
        })
    }

    pub fn manager(&self) -> &GameManager<ConsoleListener> {
        &self.manager
    }

    pub fn stopwatch(&self) -> &Stopwatch {
        &self.stopwatch
    }

    /// Prints the board and the current status.
    pub fn show(&self, out: &mut impl Write) -> std::io::Result<()> {
        let session = self.manager.session();
        write!(out, "{}", render_board(session))?;
        writeln!(out, "{}", status_line(session, self.stopwatch.elapsed_secs()))
    }

    pub fn execute(&mut self, command: Command, out: &mut impl Write) -> std::io::Result<Flow> {
        let result = match command {
            Command::Reveal(coords) => self.manager.reveal(coords).map(|outcome| {
                log::debug!("reveal {:?}: {:?}", coords, outcome);
            }),
            Command::Flag(coords) => self.manager.toggle_flag(coords).map(|outcome| {
                log::debug!("flag {:?}: {:?}", coords, outcome);
            }),
            Command::Finish => {
                let outcome = self.manager.finish_game();
                log::debug!("finished: {:?}", outcome);
                Ok(())
            }
            Command::Reset(size) => self.reset(size),
            Command::Time => {
                writeln!(out, "{}s", self.stopwatch.elapsed_secs())?;
                return Ok(Flow::Continue);
            }
            Command::Pause => {
                self.stopwatch.pause();
                writeln!(out, "paused at {}s", self.stopwatch.elapsed_secs())?;
                return Ok(Flow::Continue);
            }
            Command::Resume => {
                if self.manager.session().is_finished() {
                    writeln!(out, "The game is over, the clock stays stopped.")?;
                } else {
                    self.stopwatch.resume();
                    writeln!(out, "resumed at {}s", self.stopwatch.elapsed_secs())?;
                }
                return Ok(Flow::Continue);
            }
            Command::Help => {
                writeln!(out, "{HELP}")?;
                return Ok(Flow::Continue);
            }
            Command::Quit => return Ok(Flow::Quit),
        };

        if self.manager.session().is_finished() && self.stopwatch.is_running() {
            self.stopwatch.pause();
            log::debug!("clock stopped at {}s", self.stopwatch.elapsed_secs());
        }

        if let Err(err) = result {
            writeln!(out, "{}", describe(err))?;
        }
        for message in self.manager.listener_mut().drain() {
            writeln!(out, "{message}")?;
        }
        self.show(out)?;
        Ok(Flow::Continue)
    }

    fn reset(&mut self, size: Option<(Coord, CellCount)>) -> tilesweep_core::Result<()> {
        let config = match size {
            Some((dimension, mines)) => GameConfig::new(dimension, mines)?,
            None => self.manager.config(),
        };
        let generator = RandomBoardGenerator::new(self.seeds.random());
        self.manager.new_game(generator, config)?;
        self.stopwatch.reset();
        self.stopwatch.resume();
        Ok(())
    }
}

fn describe(err: GameError) -> String {
    match err {
        GameError::FlagLimitReached => "No flags left, remove one first.".to_string(),
        GameError::CellFlagged => "That cell is flagged, unflag it to reveal.".to_string(),
        GameError::SessionFinished => "The game is over, type `reset` to play again.".to_string(),
        GameError::InvalidCoords => "Those coordinates are off the board.".to_string(),
        GameError::InvalidParameter(reason) => format!("Cannot start that game: {reason}."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(shell: &mut Shell, line: &str) -> String {
        let mut out = Vec::new();
        let command: Command = line.parse().unwrap();
        shell.execute(command, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn flag_reports_budget() {
        let mut shell = Shell::new(GameConfig::new(4, 2).unwrap(), 1).unwrap();
        let out = run(&mut shell, "f 0 0");

        assert!(out.contains("1 flags remaining"));
        assert!(out.contains("status: playing"));
    }

    #[test]
    fn finish_stops_the_clock() {
        let mut shell = Shell::new(GameConfig::new(4, 2).unwrap(), 1).unwrap();
        let out = run(&mut shell, "finish");

        assert!(out.contains("You lose") || out.contains("You win"));
        assert!(!shell.stopwatch().is_running());
        assert!(run(&mut shell, "r 0 0").contains("The game is over"));
    }

    #[test]
    fn reset_starts_fresh_game() {
        let mut shell = Shell::new(GameConfig::new(4, 2).unwrap(), 1).unwrap();
        run(&mut shell, "finish");
        run(&mut shell, "reset 5 3");

        let session = shell.manager().session();
        assert!(!session.is_finished());
        assert_eq!(session.dimension(), 5);
        assert_eq!(session.flags_remaining(), 3);
        assert!(shell.stopwatch().is_running());
        assert_eq!(shell.manager().games_played(), 2);
    }

    #[test]
    fn bad_reset_keeps_game() {
        let mut shell = Shell::new(GameConfig::new(4, 2).unwrap(), 1).unwrap();
        let out = run(&mut shell, "reset 2 4");

        assert!(out.contains("Cannot start that game"));
        assert_eq!(shell.manager().session().dimension(), 4);
    }

    #[test]
    fn off_board_is_reported() {
        let mut shell = Shell::new(GameConfig::new(4, 2).unwrap(), 1).unwrap();
        assert!(run(&mut shell, "r 9 9").contains("off the board"));
    }

    #[test]
    fn pause_and_resume_drive_the_clock() {
        let mut shell = Shell::new(GameConfig::new(4, 2).unwrap(), 1).unwrap();

        assert!(run(&mut shell, "pause").contains("paused at"));
        assert!(!shell.stopwatch().is_running());
        let paused = shell.stopwatch().elapsed();
        std::thread::sleep(std::time::Duration::from_millis(5));
        assert_eq!(shell.stopwatch().elapsed(), paused);

        assert!(run(&mut shell, "resume").contains("resumed at"));
        assert!(shell.stopwatch().is_running());
    }

    #[test]
    fn resume_after_the_end_keeps_clock_stopped() {
        let mut shell = Shell::new(GameConfig::new(4, 2).unwrap(), 1).unwrap();
        run(&mut shell, "finish");

        assert!(run(&mut shell, "resume").contains("clock stays stopped"));
        assert!(!shell.stopwatch().is_running());
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut shell = Shell::new(GameConfig::default(), 3).unwrap();
        let mut out = Vec::new();
        assert_eq!(shell.execute(Command::Quit, &mut out).unwrap(), Flow::Quit);
    }
}
