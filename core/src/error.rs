use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Bad construction arguments, raised before any grid is allocated.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(&'static str),
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("No flags remaining")]
    FlagLimitReached,
    #[error("Cell is flagged, remove the flag before revealing it")]
    CellFlagged,
    #[error("Game already ended, no new moves are accepted")]
    SessionFinished,
}

impl GameError {
    /// Whether the player can keep playing after this error.
    pub const fn is_recoverable(self) -> bool {
        !matches!(self, Self::InvalidParameter(_))
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
