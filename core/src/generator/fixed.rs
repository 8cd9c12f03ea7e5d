use alloc::vec::Vec;

use super::*;

/// Places mines at caller-chosen coordinates, for forced layouts.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedBoardGenerator {
    mine_coords: Vec<Coord2>,
}

impl FixedBoardGenerator {
    pub fn new(mine_coords: &[Coord2]) -> Self {
        Self {
            mine_coords: mine_coords.to_vec(),
        }
    }
}

impl BoardGenerator for FixedBoardGenerator {
    fn generate(self, config: GameConfig) -> Result<Board> {
        config.validate()?;
        if usize::from(config.mines) != self.mine_coords.len() {
            return Err(GameError::InvalidParameter(
                "mine count does not match the fixed layout",
            ));
        }
        Board::from_mine_coords(config.dimension, &self.mine_coords)
    }
}
