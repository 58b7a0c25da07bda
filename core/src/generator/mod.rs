use alloc::collections::BTreeSet;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

pub trait MinefieldGenerator {
    fn generate(self, config: GameConfig) -> Result<MineField>;
}

/// The chosen mine coordinates of a board, before they are written to any tiles.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineField {
    size: Coord2,
    mines: BTreeSet<Coord2>,
}

impl MineField {
    pub(crate) fn new(size: Coord2, mines: BTreeSet<Coord2>) -> Self {
        debug_assert!(mines.iter().all(|&(x, y)| x < size.0 && y < size.1));
        Self { size, mines }
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn mine_count(&self) -> CellCount {
        // bounded by the tile count, which is a `CellCount`
        self.mines.len() as CellCount
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self.mines.contains(&coords)
    }

    pub fn iter_mines(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.mines.iter().copied()
    }

    /// Writes the mines into `tiles` and bumps the adjacency of every in-bounds neighbour.
    pub(crate) fn place(&self, tiles: &mut Array2<Tile>) {
        debug_assert_eq!(tiles.dim(), (self.size.0.into(), self.size.1.into()));

        for &coords in &self.mines {
            tiles[coords.grid_index()].place_mine();
            for neighbor in tiles.neighbors(coords) {
                tiles[neighbor.grid_index()].increment_adjacency();
            }
        }
        log::debug!(
            "Placed {} mines on a {}x{} board",
            self.mines.len(),
            self.size.0,
            self.size.1
        );
    }
}

fn check_mine_count(size: Coord2, requested: CellCount) -> Result<()> {
    let max = mult(size.0, size.1);
    if requested > max {
        log::warn!(
            "Requested {} mines but the board only fits {}",
            requested,
            max
        );
        return Err(GameError::InvalidMineCount { requested, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_counts_neighbors_but_not_self() {
        let field = MineField::new((3, 3), BTreeSet::from([(0, 0), (1, 0)]));
        let mut tiles: Array2<Tile> = Array2::default((3, 3));

        field.place(&mut tiles);

        assert!(tiles[[0, 0]].is_mine());
        assert!(tiles[[1, 0]].is_mine());
        // each mine sees the other one
        assert_eq!(tiles[[0, 0]].adjacent_mines(), 1);
        assert_eq!(tiles[[1, 0]].adjacent_mines(), 1);
        assert_eq!(tiles[[0, 1]].adjacent_mines(), 2);
        assert_eq!(tiles[[2, 1]].adjacent_mines(), 1);
        assert_eq!(tiles[[2, 2]].adjacent_mines(), 0);
    }

    #[test]
    fn too_many_mines_is_rejected() {
        assert_eq!(
            check_mine_count((2, 2), 5),
            Err(GameError::InvalidMineCount {
                requested: 5,
                max: 4
            })
        );
        assert_eq!(check_mine_count((2, 2), 4), Ok(()));
    }
}
