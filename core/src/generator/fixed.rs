use alloc::vec::Vec;

use super::*;

/// Places mines at exactly the given coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMinefieldGenerator {
    mines: Vec<Coord2>,
}

impl FixedMinefieldGenerator {
    pub fn new(mines: &[Coord2]) -> Self {
        Self {
            mines: mines.to_vec(),
        }
    }
}

impl MinefieldGenerator for FixedMinefieldGenerator {
    fn generate(self, config: GameConfig) -> Result<MineField> {
        let (width, height) = config.size;
        let mut mines = BTreeSet::new();

        for (x, y) in self.mines {
            if x >= width || y >= height {
                return Err(GameError::OutOfRange { x, y });
            }
            if !mines.insert((x, y)) {
                return Err(GameError::DuplicateMine { x, y });
            }
        }

        let requested = mines.len() as CellCount;
        check_mine_count(config.size, requested)?;
        if requested != config.mines {
            log::warn!(
                "Fixed layout has {} mines, config asked for {}",
                requested,
                config.mines
            );
            return Err(GameError::InvalidMineCount {
                requested,
                max: config.total_tiles(),
            });
        }

        Ok(MineField::new(config.size, mines))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_given_coordinates() {
        let field = FixedMinefieldGenerator::new(&[(2, 2), (0, 1)])
            .generate(GameConfig::new_unchecked((3, 3), 2))
            .unwrap();
        assert_eq!(field.iter_mines().collect::<Vec<_>>(), [(0, 1), (2, 2)]);
    }

    #[test]
    fn rejects_out_of_range() {
        let result =
            FixedMinefieldGenerator::new(&[(3, 0)]).generate(GameConfig::new_unchecked((3, 3), 1));
        assert_eq!(result, Err(GameError::OutOfRange { x: 3, y: 0 }));
    }

    #[test]
    fn rejects_duplicates() {
        let result = FixedMinefieldGenerator::new(&[(1, 1), (1, 1)])
            .generate(GameConfig::new_unchecked((3, 3), 2));
        assert_eq!(result, Err(GameError::DuplicateMine { x: 1, y: 1 }));
    }

    #[test]
    fn layout_must_match_configured_count() {
        let empty =
            FixedMinefieldGenerator::new(&[]).generate(GameConfig::new_unchecked((3, 3), 2));
        assert_eq!(
            empty,
            Err(GameError::InvalidMineCount {
                requested: 0,
                max: 9
            })
        );

        let extra = FixedMinefieldGenerator::new(&[(0, 0), (1, 1), (2, 2)])
            .generate(GameConfig::new_unchecked((3, 3), 2));
        assert_eq!(
            extra,
            Err(GameError::InvalidMineCount {
                requested: 3,
                max: 9
            })
        );
    }
}
