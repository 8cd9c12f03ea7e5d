/// Single coordinate axis, used for the board dimension and for positions.
pub type Coord = u8;

/// Count type used for mine counts, flag budgets and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(col, row)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Moore neighborhood, row above first.
const OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Shifts one axis by `delta`, `None` when the result leaves `0..bound`.
fn shift(value: Coord, delta: i8, bound: Coord) -> Option<Coord> {
    value.checked_add_signed(delta).filter(|&next| next < bound)
}

/// Iterates the in-bounds Moore neighbors of a cell. Edges clip, they never wrap.
#[derive(Clone, Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    offset: usize,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            offset: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&(dx, dy)) = OFFSETS.get(self.offset) {
            self.offset += 1;
            let col = shift(self.center.0, dx, self.bounds.0);
            let row = shift(self.center.1, dy, self.bounds.1);
            if let (Some(col), Some(row)) = (col, row) {
                return Some((col, row));
            }
        }
        None
    }
}

/// Iterates every coordinate of a `dimension x dimension` grid, column by column.
pub fn iter_square(dimension: Coord) -> impl Iterator<Item = Coord2> {
    (0..dimension).flat_map(move |col| (0..dimension).map(move |row| (col, row)))
}
