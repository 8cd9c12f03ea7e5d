use alloc::collections::VecDeque;
use hashbrown::HashSet;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// How a session ended, if it has.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    Pending,
    Won,
    Lost,
}

impl Outcome {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One playthrough of a generated board.
///
/// All mutation goes through [`toggle_flag`](Self::toggle_flag), [`reveal`](Self::reveal) and
/// [`finish_game`](Self::finish_game). Once the outcome is decided the session is frozen; start a
/// new session to play again.
#[derive(Clone, Debug)]
pub struct GameSession<L = ()> {
    board: Board,
    visibility: Array2<CellVisibility>,
    flags_remaining: CellCount,
    revealed_safe: CellCount,
    outcome: Outcome,
    triggered_mine: Option<Coord2>,
    listener: L,
}

impl GameSession {
    pub fn new(board: Board) -> Self {
        Self::with_listener(board, ())
    }
}

impl<L: SessionListener> GameSession<L> {
    /// Wraps `board` and publishes the initial flag budget to `listener`.
    pub fn with_listener(board: Board, mut listener: L) -> Self {
        let dimension = board.dimension();
        let flags_remaining = board.mine_count();
        listener.on_flags_remaining_changed(flags_remaining);
        Self {
            board,
            visibility: Array2::default((dimension, dimension).to_nd_index()),
            flags_remaining,
            revealed_safe: 0,
            outcome: Outcome::Pending,
            triggered_mine: None,
            listener,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_finished()
    }

    pub fn dimension(&self) -> Coord {
        self.board.dimension()
    }

    pub fn flags_remaining(&self) -> CellCount {
        self.flags_remaining
    }

    /// How many safe cells are still waiting to be revealed
    pub fn safe_cells_left(&self) -> CellCount {
        self.board.safe_cell_count() - self.revealed_safe
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn visibility_at(&self, coords: Coord2) -> CellVisibility {
        self.visibility[coords.to_nd_index()]
    }

    /// Display state of a cell, mistakes only show up after the game is over.
    pub fn cell_view(&self, coords: Coord2) -> CellView {
        use CellVisibility::*;

        let cell = self.board.cell(coords);
        match (self.visibility_at(coords), cell.has_mine) {
            (Covered, _) => CellView::Covered,
            (Flagged, false) if self.is_finished() => CellView::IncorrectFlag,
            (Flagged, _) => CellView::Flagged,
            (Revealed, true) if self.triggered_mine == Some(coords) => CellView::Exploded,
            (Revealed, true) => CellView::Mine,
            (Revealed, false) => CellView::Revealed(cell.adjacent_mines),
        }
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    pub fn into_listener(self) -> L {
        self.listener
    }

    /// Place a flag on a covered cell or remove one from a flagged cell.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        use CellVisibility::*;

        let coords = self.board.validate_coords(coords)?;
        self.check_not_finished()?;

        let index = coords.to_nd_index();
        match self.visibility[index] {
            Covered => {
                if self.flags_remaining == 0 {
                    log::debug!("No flag left for {:?}", coords);
                    return Err(GameError::FlagLimitReached);
                }
                self.visibility[index] = Flagged;
                self.flags_remaining -= 1;
            }
            Flagged => {
                self.visibility[index] = Covered;
                self.flags_remaining += 1;
            }
            Revealed => return Ok(MarkOutcome::NoChange),
        }

        log::debug!(
            "Flag toggled at {:?}, {} flags remaining",
            coords,
            self.flags_remaining
        );
        self.listener.on_flags_remaining_changed(self.flags_remaining);
        Ok(MarkOutcome::Changed)
    }

    /// Reveal a covered cell, flooding out from it when it touches no mine.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        use CellVisibility::*;

        let coords = self.board.validate_coords(coords)?;
        self.check_not_finished()?;

        match self.visibility_at(coords) {
            Covered => Ok(self.reveal_covered(coords)),
            Flagged => Err(GameError::CellFlagged),
            Revealed => Ok(RevealOutcome::NoChange),
        }
    }

    /// End the game now: uncover everything still covered and decide the outcome.
    ///
    /// The game is won when every mine that was still covered had been flagged instead. Calling
    /// this on a finished session changes nothing and returns the existing outcome.
    pub fn finish_game(&mut self) -> Outcome {
        if self.is_finished() {
            return self.outcome;
        }

        let missed_mine = self.uncover_remaining();
        self.end_game(if missed_mine {
            Outcome::Lost
        } else {
            Outcome::Won
        });
        self.outcome
    }

    fn reveal_covered(&mut self, coords: Coord2) -> RevealOutcome {
        let cell = self.board.cell(coords);

        if cell.has_mine {
            log::debug!("Mine revealed at {:?}", coords);
            self.triggered_mine = Some(coords);
            self.uncover(coords);
            self.uncover_remaining();
            self.end_game(Outcome::Lost);
            return RevealOutcome::HitMine;
        }

        self.uncover(coords);
        log::debug!(
            "Revealed {:?}, adjacent mines: {}",
            coords,
            cell.adjacent_mines
        );
        if cell.adjacent_mines == 0 {
            self.flood_fill(coords);
        }

        if self.revealed_safe == self.board.safe_cell_count() {
            self.end_game(Outcome::Won);
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        }
    }

    /// Breadth-first reveal of the blank region around `origin` and its numbered border.
    fn flood_fill(&mut self, origin: Coord2) {
        let mut visited = HashSet::new();
        visited.insert(origin);
        let mut to_visit = VecDeque::from([origin]);

        while let Some(current) = to_visit.pop_front() {
            for pos in self.board.iter_neighbors(current) {
                if !visited.insert(pos) {
                    continue;
                }

                // flags and already revealed cells stay as they are
                if !self.visibility_at(pos).is_covered() {
                    log::trace!("Skipping cell at {:?}", pos);
                    continue;
                }

                let cell = self.board.cell(pos);
                if cell.has_mine {
                    continue;
                }

                self.uncover(pos);
                log::trace!(
                    "Flood revealed {:?}, adjacent mines: {}",
                    pos,
                    cell.adjacent_mines
                );

                if cell.adjacent_mines == 0 {
                    to_visit.push_back(pos);
                }
            }
        }
    }

    /// Uncovers every covered cell, returns whether one of them held a mine.
    fn uncover_remaining(&mut self) -> bool {
        let mut missed_mine = false;
        for coords in self.board.iter_coords() {
            if self.visibility_at(coords).is_covered() {
                missed_mine |= self.board.contains_mine(coords);
                self.uncover(coords);
            }
        }
        missed_mine
    }

    fn uncover(&mut self, coords: Coord2) {
        let cell = self.board.cell(coords);
        self.visibility[coords.to_nd_index()] = CellVisibility::Revealed;
        if !cell.has_mine {
            self.revealed_safe += 1;
        }
        self.listener.on_cell_revealed(coords, cell.into());
    }

    fn end_game(&mut self, outcome: Outcome) {
        if self.is_finished() {
            return;
        }

        log::debug!("Game ended: {:?}", outcome);
        self.outcome = outcome;
        match outcome {
            Outcome::Won => self.listener.on_win(),
            Outcome::Lost => self.listener.on_loss(),
            Outcome::Pending => {}
        }
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.is_finished() {
            Err(GameError::SessionFinished)
        } else {
            Ok(())
        }
    }
}
