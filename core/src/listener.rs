use crate::*;

/// Content of a freshly revealed cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellDisplay {
    Mine,
    Count(u8),
}

impl From<Cell> for CellDisplay {
    fn from(cell: Cell) -> Self {
        if cell.has_mine {
            Self::Mine
        } else {
            Self::Count(cell.adjacent_mines)
        }
    }
}

/// Receives session changes synchronously, in the order they happen.
///
/// Every method defaults to doing nothing so hosts implement only what they draw.
pub trait SessionListener {
    fn on_flags_remaining_changed(&mut self, _count: CellCount) {}

    fn on_cell_revealed(&mut self, _coords: Coord2, _display: CellDisplay) {}

    fn on_win(&mut self) {}

    fn on_loss(&mut self) {}
}

impl SessionListener for () {}

impl<L: SessionListener + ?Sized> SessionListener for &mut L {
    fn on_flags_remaining_changed(&mut self, count: CellCount) {
        (**self).on_flags_remaining_changed(count)
    }

    fn on_cell_revealed(&mut self, coords: Coord2, display: CellDisplay) {
        (**self).on_cell_revealed(coords, display)
    }

    fn on_win(&mut self) {
        (**self).on_win()
    }

    fn on_loss(&mut self) {
        (**self).on_loss()
    }
}
