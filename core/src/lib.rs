#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use listener::*;
pub use manager::*;
pub use tile::*;
pub use types::*;

mod board;
mod engine;
mod error;
mod generator;
mod listener;
mod manager;
mod tile;
mod types;

/// Requested shape of a square board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub dimension: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const DEFAULT_DIMENSION: Coord = 8;
    pub const DEFAULT_MINES: CellCount = 10;

    pub const fn new_unchecked(dimension: Coord, mines: CellCount) -> Self {
        Self { dimension, mines }
    }

    /// Validated config: at least one mine, and at least one safe cell.
    pub fn new(dimension: Coord, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(dimension, mines);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.dimension == 0 {
            log::warn!("Refusing board with zero dimension");
            return Err(GameError::InvalidParameter("dimension must be greater than 0"));
        }
        if self.mines == 0 {
            log::warn!("Refusing board without mines");
            return Err(GameError::InvalidParameter("mine count must be greater than 0"));
        }
        if self.mines >= self.total_cells() {
            log::warn!(
                "Refusing board with {} mines, only {} cells",
                self.mines,
                self.total_cells()
            );
            return Err(GameError::InvalidParameter(
                "mine count must be smaller than the number of cells",
            ));
        }
        Ok(())
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.dimension, self.dimension)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(Self::DEFAULT_DIMENSION, Self::DEFAULT_MINES)
    }
}

/// Result of a flag toggle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

/// Result of revealing a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }

    pub const fn ends_game(self) -> bool {
        matches!(self, Self::HitMine | Self::Won)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_eight_by_eight_with_ten_mines() {
        let config = GameConfig::default();
        assert_eq!(config.dimension, 8);
        assert_eq!(config.mines, 10);
        assert_eq!(config.total_cells(), 64);
        assert_eq!(config.safe_cells(), 54);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn config_rejects_zero_dimension() {
        assert!(matches!(
            GameConfig::new(0, 1),
            Err(GameError::InvalidParameter(_))
        ));
    }

    #[test]
    fn config_rejects_zero_mines() {
        assert!(matches!(
            GameConfig::new(1, 0),
            Err(GameError::InvalidParameter(_))
        ));
    }

    #[test]
    fn config_rejects_saturated_board() {
        assert!(matches!(
            GameConfig::new(3, 9),
            Err(GameError::InvalidParameter(_))
        ));
        assert!(matches!(
            GameConfig::new(3, 10),
            Err(GameError::InvalidParameter(_))
        ));
        assert_eq!(GameConfig::new(3, 8), Ok(GameConfig::new_unchecked(3, 8)));
    }

    #[test]
    fn single_cell_board_is_never_valid() {
        assert!(GameConfig::new(1, 1).is_err());
    }

    #[test]
    fn reveal_outcome_reports_updates() {
        assert!(!RevealOutcome::NoChange.has_update());
        assert!(RevealOutcome::Revealed.has_update());
        assert!(RevealOutcome::HitMine.ends_game());
        assert!(!RevealOutcome::Revealed.ends_game());
    }
}
