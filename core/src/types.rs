use ndarray::Array2;

/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-tile counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`, zero based.
pub type Coord2 = (Coord, Coord);

/// Converts board coordinates into an `ndarray` index or shape.
pub trait GridIndex {
    fn grid_index(self) -> [usize; 2];
}

impl GridIndex for Coord2 {
    fn grid_index(self) -> [usize; 2] {
        [usize::from(self.0), usize::from(self.1)]
    }
}

/// Tile count of a `width x height` board.
pub const fn mult(width: Coord, height: Coord) -> CellCount {
    (width as CellCount).saturating_mul(height as CellCount)
}

pub trait Neighbors {
    fn neighbors(&self, coords: Coord2) -> NeighborIter;
}

impl<T> Neighbors for Array2<T> {
    fn neighbors(&self, coords: Coord2) -> NeighborIter {
        let (width, height) = self.dim();
        // grids are only ever built from `Coord2` sizes
        NeighborIter::new(coords, (width as Coord, height as Coord))
    }
}

/// Walks the 3x3 block around a tile row by row, skipping the tile itself
/// and anything past the board edge.
#[derive(Clone, Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    /// Position inside the 3x3 block, `4` is the center.
    cursor: u8,
}

impl NeighborIter {
    const CENTER: u8 = 4;
    const BLOCK: u8 = 9;

    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            cursor: 0,
        }
    }

    fn offset(&self, cursor: u8) -> Option<Coord2> {
        let x = shift(self.center.0, cursor % 3)?;
        let y = shift(self.center.1, cursor / 3)?;
        (x < self.bounds.0 && y < self.bounds.1).then_some((x, y))
    }
}

/// `step` 0, 1, 2 maps to -1, 0, +1.
fn shift(value: Coord, step: u8) -> Option<Coord> {
    value.checked_add(step)?.checked_sub(1)
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while self.cursor < Self::BLOCK {
            let cursor = self.cursor;
            self.cursor += 1;
            if cursor == Self::CENTER {
                continue;
            }
            if let Some(coords) = self.offset(cursor) {
                return Some(coords);
            }
        }
        None
    }
}
