use serde::{Deserialize, Serialize};

/// Player-visible state of a cell, owned by the game session.
///
/// Valid transitions:
/// - Covered -> Flagged -> Covered
/// - Covered -> Revealed
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellVisibility {
    #[default]
    Covered,
    Flagged,
    Revealed,
}

impl CellVisibility {
    pub const fn is_covered(self) -> bool {
        matches!(self, Self::Covered)
    }

    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }
}

/// What a host should draw for a cell, merging visibility with board content.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Covered,
    Flagged,
    /// Flag placed over a safe cell, only shown once the game is over
    IncorrectFlag,
    Revealed(u8),
    Mine,
    /// The mine that ended the game
    Exploded,
}

impl CellView {
    // whether the cell is visually closed
    pub const fn is_closed(self) -> bool {
        use CellView::*;
        match self {
            Covered => true,
            Flagged => true,
            IncorrectFlag => true,
            Revealed(_) => false,
            Mine => false,
            Exploded => false,
        }
    }
}

impl Default for CellView {
    fn default() -> Self {
        Self::Covered
    }
}
