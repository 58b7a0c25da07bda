use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Read-only view of a tile for renderers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileView {
    pub visibility: Visibility,
    pub adjacent_mines: u8,
    /// Only known when mines were requested, i.e. for the cheat view.
    pub mine: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub(crate) tiles: Array2<TileView>,
    pub(crate) total_mines: CellCount,
}

impl BoardSnapshot {
    pub fn size(&self) -> Coord2 {
        let (x, y) = self.tiles.dim();
        (x as Coord, y as Coord)
    }

    pub fn total_mines(&self) -> CellCount {
        self.total_mines
    }

    pub fn shows_mines(&self) -> bool {
        self.tiles.iter().any(|tile| tile.mine.is_some())
    }

    pub fn tile(&self, coords: Coord2) -> Option<&TileView> {
        self.tiles.get(coords.grid_index())
    }

    /// Rows top to bottom, each row left to right.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = &TileView>> {
        self.tiles.columns().into_iter().map(|row| row.into_iter())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub board: BoardSnapshot,
    pub status: GameStatus,
    pub score: i32,
    pub cheat_active: bool,
    pub move_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn rows_walk_y_then_x() {
        let config = GameConfig::new_unchecked((3, 2), 1);
        let mut board = Board::new(config, FixedMinefieldGenerator::new(&[(2, 1)])).unwrap();
        board.reveal((0, 0)).unwrap();
        let snapshot = board.snapshot(false);

        let rows: Vec<Vec<Visibility>> = snapshot
            .rows()
            .map(|row| row.map(|tile| tile.visibility).collect())
            .collect();

        use Visibility::*;
        assert_eq!(
            rows,
            [
                [Revealed, Revealed, Hidden],
                [Revealed, Revealed, Hidden],
            ]
        );
        assert_eq!(snapshot.size(), (3, 2));
        assert!(!snapshot.shows_mines());
    }

    #[test]
    fn serializes_to_json() {
        let config = GameConfig::new_unchecked((2, 2), 1);
        let board = Board::new(config, FixedMinefieldGenerator::new(&[(0, 0)])).unwrap();

        let json = serde_json::to_string(&board.snapshot(true)).unwrap();
        let back: BoardSnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(back, board.snapshot(true));
        assert!(back.shows_mines());
    }
}
