use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use super::*;

/// Uniform placement: a partial Fisher-Yates shuffle over every cell index, keeping the
/// first `mines` positions. Cost is linear in the cell count whatever the mine density.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: GameConfig) -> Result<Board> {
        use rand::prelude::*;

        config.validate()?;

        let dimension = CellCount::from(config.dimension);
        let mut cells: Vec<CellCount> = (0..config.total_cells()).collect();
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let (picked, _) = cells.partial_shuffle(&mut rng, config.mines.into());

        let mine_coords: BTreeSet<Coord2> = picked
            .iter()
            .map(|&index| {
                // both halves are below `dimension`, which fits a Coord
                ((index / dimension) as Coord, (index % dimension) as Coord)
            })
            .collect();

        log::debug!(
            "Placed {} mines on {}x{} with seed {}",
            mine_coords.len(),
            config.dimension,
            config.dimension,
            self.seed
        );

        Ok(Board::with_mines(config, mine_coords))
    }
}
