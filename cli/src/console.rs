use tilesweep_core::{CellCount, CellDisplay, Coord2, SessionListener};

/// Collects what the player should be told after a command.
#[derive(Debug, Default)]
pub struct ConsoleListener {
    messages: Vec<String>,
    revealed_this_turn: usize,
}

impl ConsoleListener {
    /// Takes the pending messages, closing the current turn.
    pub fn drain(&mut self) -> Vec<String> {
        if self.revealed_this_turn > 1 {
            log::debug!("{} cells revealed", self.revealed_this_turn);
        }
        self.revealed_this_turn = 0;
        std::mem::take(&mut self.messages)
    }
}

impl SessionListener for ConsoleListener {
    fn on_flags_remaining_changed(&mut self, count: CellCount) {
        self.messages.push(format!("{count} flags remaining"));
    }

    fn on_cell_revealed(&mut self, coords: Coord2, display: CellDisplay) {
        log::trace!("revealed {:?}: {:?}", coords, display);
        self.revealed_this_turn += 1;
    }

    fn on_win(&mut self) {
        self.messages.push("You win!".to_string());
    }

    fn on_loss(&mut self) {
        self.messages.push("Boom. You lose.".to_string());
    }
}
