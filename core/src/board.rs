use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Immutable content of a single grid position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub has_mine: bool,
    /// Mines in the Moore neighborhood, left at 0 on mine cells.
    pub adjacent_mines: u8,
}

/// A generated square minefield. Nothing mutates it after construction.
///
/// Serializes as its [`BoardLayout`]; loading goes back through
/// [`Board::from_mine_coords`], so a stored board is checked and its counts recomputed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoardLayout", into = "BoardLayout")]
pub struct Board {
    dimension: Coord,
    mine_count: CellCount,
    cells: Array2<Cell>,
    mine_coords: BTreeSet<Coord2>,
}

impl Board {
    /// Builds a board with mines at exactly `mine_coords`.
    pub fn from_mine_coords(dimension: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        let mines: CellCount = mine_coords
            .len()
            .try_into()
            .map_err(|_| GameError::InvalidParameter("too many mine coordinates"))?;
        let config = GameConfig::new(dimension, mines)?;

        let mut unique = BTreeSet::new();
        for &coords in mine_coords {
            if coords.0 >= dimension || coords.1 >= dimension {
                return Err(GameError::InvalidCoords);
            }
            if !unique.insert(coords) {
                return Err(GameError::InvalidParameter("duplicate mine coordinates"));
            }
        }

        Ok(Self::with_mines(config, unique))
    }

    /// Lays out `mine_coords` on a fresh grid and runs the adjacency pass.
    /// The caller has already validated `config` against the coordinates.
    pub(crate) fn with_mines(config: GameConfig, mine_coords: BTreeSet<Coord2>) -> Self {
        let dimension = config.dimension;
        let mut cells: Array2<Cell> = Array2::default((dimension, dimension).to_nd_index());

        for &coords in &mine_coords {
            cells[coords.to_nd_index()].has_mine = true;
        }

        for &mine in &mine_coords {
            for pos in NeighborIter::new(mine, (dimension, dimension)) {
                let cell = &mut cells[pos.to_nd_index()];
                if !cell.has_mine {
                    cell.adjacent_mines += 1;
                }
            }
        }

        log::debug!(
            "Board {}x{} ready with {} mines",
            dimension,
            dimension,
            mine_coords.len()
        );

        Self {
            dimension,
            mine_count: config.mines,
            cells,
            mine_coords,
        }
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.dimension, self.mine_count)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if coords.0 < self.dimension && coords.1 < self.dimension {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn dimension(&self) -> Coord {
        self.dimension
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.dimension, self.dimension)
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn mine_coords(&self) -> &BTreeSet<Coord2> {
        &self.mine_coords
    }

    pub fn cell(&self, coords: Coord2) -> Cell {
        self.cells[coords.to_nd_index()]
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self.cells[coords.to_nd_index()].has_mine
    }

    pub fn adjacent_mines(&self, coords: Coord2) -> u8 {
        self.cells[coords.to_nd_index()].adjacent_mines
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, (self.dimension, self.dimension))
    }

    pub fn iter_coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        iter_square(self.dimension)
    }
}

/// Wire form of a [`Board`]: size and mine positions only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLayout {
    pub dimension: Coord,
    pub mine_count: CellCount,
    pub mine_coords: Vec<Coord2>,
}

impl From<Board> for BoardLayout {
    fn from(board: Board) -> Self {
        Self {
            dimension: board.dimension,
            mine_count: board.mine_count,
            mine_coords: board.mine_coords.into_iter().collect(),
        }
    }
}

impl TryFrom<BoardLayout> for Board {
    type Error = GameError;

    fn try_from(layout: BoardLayout) -> Result<Self> {
        if usize::from(layout.mine_count) != layout.mine_coords.len() {
            return Err(GameError::InvalidParameter(
                "mine count does not match the mine coordinates",
            ));
        }
        Board::from_mine_coords(layout.dimension, &layout.mine_coords)
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
