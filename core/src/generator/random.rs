use ndarray::Array2;

use super::*;

/// Purely random generation: a uniform no-replacement sample of bomb cells
/// drawn from the grid minus the kept-clear cells.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: GameConfig, keep_clear: &[Coord2]) -> Result<Board> {
        use rand::prelude::*;

        let total_cells = config.total_cells();
        let mut mask: Array2<bool> = Array2::default((config.size, config.size).to_nd_index());

        // Occupy the kept-clear cells up front so the placement loop cannot
        // pick them, then release them afterwards.
        let mut reserved = 0;
        for &coords in keep_clear {
            if coords.0 >= config.size || coords.1 >= config.size {
                return Err(GameError::InvalidCoords);
            }
            if !mask[coords.to_nd_index()] {
                mask[coords.to_nd_index()] = true;
                reserved += 1;
            }
        }

        let mut free_cells = total_cells - reserved;
        if free_cells < config.bombs {
            return Err(GameError::InsufficientCells {
                available: free_cells,
                requested: config.bombs,
            });
        }

        let mut bombs_placed = 0;
        let mut rng = SmallRng::seed_from_u64(self.seed);
        {
            let cells = mask.as_slice_mut().expect("layout should be standard");
            while bombs_placed < config.bombs {
                let mut place: CellCount = rng.random_range(0..free_cells);
                for (i, cell) in cells.iter_mut().enumerate() {
                    let i = i as CellCount;
                    if *cell {
                        place += 1;
                    }
                    if i == place {
                        *cell = true;
                        bombs_placed += 1;
                        free_cells -= 1;
                        break;
                    }
                }
            }
        }

        // release the kept-clear cells
        for &coords in keep_clear {
            mask[coords.to_nd_index()] = false;
        }

        // double check bomb count
        let count = mask.iter().filter(|&&cell| cell).count() as CellCount;
        if count != config.bombs {
            log::warn!(
                "Generated board bomb count mismatch, actual: {}, requested: {}",
                count,
                config.bombs
            );
        }
        Ok(Board::from_bomb_mask(mask))
    }
}
