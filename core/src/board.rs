use alloc::collections::VecDeque;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    tiles: Array2<Tile>,
    total_mines: CellCount,
}

impl Board {
    /// Builds the grid and lets `generator` place the mines, which are fixed from then on.
    pub fn new(config: GameConfig, generator: impl MinefieldGenerator) -> Result<Self> {
        let config = config.validate()?;
        let minefield = generator.generate(config)?;
        if minefield.mine_count() != config.mines {
            return Err(GameError::InvalidMineCount {
                requested: minefield.mine_count(),
                max: config.total_tiles(),
            });
        }

        let mut tiles: Array2<Tile> = Array2::default(config.size.grid_index());
        minefield.place(&mut tiles);

        Ok(Self {
            tiles,
            total_mines: minefield.mine_count(),
        })
    }

    pub fn size(&self) -> Coord2 {
        let (x, y) = self.tiles.dim();
        (x as Coord, y as Coord)
    }

    pub fn width(&self) -> Coord {
        self.size().0
    }

    pub fn height(&self) -> Coord {
        self.size().1
    }

    pub fn total_mines(&self) -> CellCount {
        self.total_mines
    }

    pub fn revealed_count(&self) -> CellCount {
        self.count_visibility(Visibility::Revealed)
    }

    pub fn flagged_count(&self) -> CellCount {
        self.count_visibility(Visibility::Flagged)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::OutOfRange {
                x: coords.0,
                y: coords.1,
            })
        }
    }

    pub fn tile(&self, coords: Coord2) -> Result<&Tile> {
        let coords = self.validate_coords(coords)?;
        Ok(&self.tiles[coords.grid_index()])
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.validate_coords(coords)?;
        let tile = self.tiles[coords.grid_index()];

        if tile.visibility().is_revealed() {
            return Ok(RevealOutcome::NoOp);
        }

        if tile.is_mine() {
            // the triggering mine keeps its visibility
            log::debug!("Mine hit at {:?}", coords);
            return Ok(RevealOutcome::Mine);
        }

        let opened = self.flood_fill(coords);
        log::debug!("Reveal at {:?} opened {} tiles", coords, opened);
        Ok(RevealOutcome::Empty)
    }

    /// Returns the score delta: `+1`/`-1` when a flag is set/removed on a mine, `0` otherwise.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<i8> {
        let coords = self.validate_coords(coords)?;
        let tile = &mut self.tiles[coords.grid_index()];

        let Some(next) = tile.visibility().toggle_flag() else {
            return Ok(0);
        };
        tile.set_visibility(next);

        let delta = match (next, tile.is_mine()) {
            (Visibility::Flagged, true) => 1,
            (Visibility::Hidden, true) => -1,
            _ => 0,
        };
        log::trace!("Flag toggled at {:?} to {:?}, delta {}", coords, next, delta);
        Ok(delta)
    }

    pub fn snapshot(&self, show_mines: bool) -> BoardSnapshot {
        BoardSnapshot {
            tiles: self.tiles.map(|tile| TileView {
                visibility: tile.visibility(),
                adjacent_mines: tile.adjacent_mines(),
                mine: show_mines.then_some(tile.is_mine()),
            }),
            total_mines: self.total_mines,
        }
    }

    /// Breadth-first reveal from `origin`, only zero tiles spread to their neighbours.
    fn flood_fill(&mut self, origin: Coord2) -> CellCount {
        let mut opened: CellCount = 0;
        let mut to_visit = VecDeque::from([origin]);

        while let Some(visit_coords) = to_visit.pop_front() {
            let tile = &mut self.tiles[visit_coords.grid_index()];
            let Some(next) = tile.visibility().reveal() else {
                continue;
            };
            tile.set_visibility(next);
            opened += 1;

            if tile.adjacent_mines() == 0 {
                to_visit.extend(
                    self.tiles
                        .neighbors(visit_coords)
                        .filter(|&pos| !self.tiles[pos.grid_index()].visibility().is_revealed()),
                );
            }
        }

        opened
    }

    fn count_visibility(&self, visibility: Visibility) -> CellCount {
        self.tiles
            .iter()
            .filter(|tile| tile.visibility() == visibility)
            .count() as CellCount
    }
}
