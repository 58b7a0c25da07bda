use super::*;

/// Purely random placement: every tile is equally likely to hold a mine.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMinefieldGenerator {
    seed: u64,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(self, config: GameConfig) -> Result<MineField> {
        use rand::prelude::*;

        let (width, height) = config.size;
        check_mine_count(config.size, config.mines)?;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mines = BTreeSet::new();
        let mut draws: u32 = 0;

        // rejection sampling, a full board still terminates once every tile was drawn
        while mines.len() < usize::from(config.mines) {
            let coords = (rng.random_range(0..width), rng.random_range(0..height));
            mines.insert(coords);
            draws += 1;
        }

        log::trace!(
            "Seed {} placed {} mines in {} draws",
            self.seed,
            mines.len(),
            draws
        );
        Ok(MineField::new(config.size, mines))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(size: Coord2, mines: CellCount, seed: u64) -> MineField {
        RandomMinefieldGenerator::new(seed)
            .generate(GameConfig::new_unchecked(size, mines))
            .unwrap()
    }

    #[test]
    fn places_exact_count() {
        for seed in 0..20 {
            let field = generate((9, 7), 10, seed);
            assert_eq!(field.mine_count(), 10);
            assert!(field.iter_mines().all(|(x, y)| x < 9 && y < 7));
        }
    }

    #[test]
    fn zero_mines_is_empty() {
        let field = generate((4, 4), 0, 1);
        assert_eq!(field.mine_count(), 0);
    }

    #[test]
    fn full_board_places_every_tile() {
        let field = generate((3, 2), 6, 7);
        assert_eq!(field.mine_count(), 6);
        for x in 0..3 {
            for y in 0..2 {
                assert!(field.contains_mine((x, y)));
            }
        }
    }

    #[test]
    fn same_seed_same_layout() {
        assert_eq!(generate((16, 16), 40, 42), generate((16, 16), 40, 42));
    }

    #[test]
    fn rejects_more_mines_than_tiles() {
        let result =
            RandomMinefieldGenerator::new(0).generate(GameConfig::new_unchecked((2, 2), 5));
        assert_eq!(
            result,
            Err(GameError::InvalidMineCount {
                requested: 5,
                max: 4
            })
        );
    }
}
