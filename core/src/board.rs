use alloc::collections::{BTreeSet, VecDeque};
use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Outcome of toggling a flag on a cell.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FlagOutcome {
    NoChange,
    Toggled,
}

impl FlagOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Toggled => true,
        }
    }
}

/// Square grid of cells with bombs placed and adjacency counts precomputed.
///
/// Created once per session and mutated only through [`Board::reveal`] and
/// [`Board::toggle_flag`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
    bomb_count: CellCount,
}

impl Board {
    /// Builds a board from a square bomb mask, computing every non-bomb
    /// cell's adjacency count from its edge-clipped 8-neighborhood.
    pub(crate) fn from_bomb_mask(mask: Array2<bool>) -> Self {
        let bomb_count = mask
            .iter()
            .filter(|&&bomb| bomb)
            .count()
            .try_into()
            .unwrap();

        let mut cells: Array2<Cell> = Array2::default(mask.dim());
        for ((x, y), cell) in cells.indexed_iter_mut() {
            let coords = (x.try_into().unwrap(), y.try_into().unwrap());
            if mask[(x, y)] {
                cell.bomb = true;
            } else {
                cell.adjacent = mask
                    .iter_neighbors(coords)
                    .filter(|&pos| mask[pos.to_nd_index()])
                    .count()
                    .try_into()
                    .unwrap();
            }
        }

        Self { cells, bomb_count }
    }

    /// Builds a board with bombs at exactly the given coordinates.
    pub fn from_bomb_coords(size: Coord, bombs: &[Coord2]) -> Result<Self> {
        let mut mask: Array2<bool> = Array2::default((size, size).to_nd_index());

        for &coords in bombs {
            if coords.0 >= size || coords.1 >= size {
                return Err(GameError::InvalidCoords);
            }
            mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_bomb_mask(mask))
    }

    pub fn size(&self) -> Coord {
        self.cells.dim().0.try_into().unwrap()
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len().try_into().unwrap()
    }

    pub fn bomb_count(&self) -> CellCount {
        self.bomb_count
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size && coords.1 < size {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.cells[coords.to_nd_index()]
    }

    pub fn contains_bomb(&self, coords: Coord2) -> bool {
        self.cells[coords.to_nd_index()].bomb
    }

    /// Toggles the flag on a hidden cell. Revealed cells cannot be flagged.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        let coords = self.validate_coords(coords)?;

        let cell = &mut self.cells[coords.to_nd_index()];
        if cell.revealed {
            return Ok(FlagOutcome::NoChange);
        }
        cell.flagged = !cell.flagged;
        Ok(FlagOutcome::Toggled)
    }

    /// Reveals a cell, flood-filling through zero-count regions, and returns
    /// the newly revealed coordinates in first-reveal order.
    ///
    /// No-op on revealed or flagged cells. The fill expands only from
    /// zero-count non-bomb cells, so bombs are never revealed by the fill
    /// (a bomb cell is never adjacent to a zero-count cell) and flagged
    /// cells are skipped outright.
    pub fn reveal(&mut self, coords: Coord2) -> Result<Vec<Coord2>> {
        let coords = self.validate_coords(coords)?;
        let mut newly_revealed = Vec::new();

        let cell = self.cells[coords.to_nd_index()];
        if cell.revealed || cell.flagged {
            return Ok(newly_revealed);
        }

        self.cells[coords.to_nd_index()].revealed = true;
        newly_revealed.push(coords);
        log::debug!("Revealed cell at {:?}, bomb count: {}", coords, cell.adjacent);

        if cell.bomb || cell.adjacent != 0 {
            return Ok(newly_revealed);
        }

        // Explicit frontier queue instead of recursion so the fill depth is
        // bounded regardless of board size.
        let mut visited = BTreeSet::from([coords]);
        let mut to_visit: VecDeque<_> = self
            .cells
            .iter_neighbors(coords)
            .filter(|&pos| self.cells[pos.to_nd_index()].is_hidden())
            .collect();
        log::trace!(
            "Starting flood-fill from {:?}, initial neighbors: {:?}",
            coords,
            to_visit
        );

        while let Some(visit_coords) = to_visit.pop_front() {
            if !visited.insert(visit_coords) {
                continue;
            }

            let visit_cell = self.cells[visit_coords.to_nd_index()];
            if visit_cell.revealed || visit_cell.flagged {
                log::trace!("Skipping cell at {:?}", visit_coords);
                continue;
            }

            self.cells[visit_coords.to_nd_index()].revealed = true;
            newly_revealed.push(visit_coords);
            log::trace!(
                "Flood revealed cell at {:?}, bomb count: {}",
                visit_coords,
                visit_cell.adjacent
            );

            if visit_cell.adjacent == 0 && !visit_cell.bomb {
                to_visit.extend(
                    self.cells
                        .iter_neighbors(visit_coords)
                        .filter(|&pos| self.cells[pos.to_nd_index()].is_hidden())
                        .filter(|pos| !visited.contains(pos)),
                );
            }
        }

        Ok(newly_revealed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(size: Coord, bombs: &[Coord2]) -> Board {
        Board::from_bomb_coords(size, bombs).unwrap()
    }

    #[test]
    fn adjacency_counts_match_neighborhoods() {
        let board = board(3, &[(0, 0), (1, 0), (0, 1)]);

        assert_eq!(board.cell_at((1, 1)).adjacent_bombs(), 3);
        assert_eq!(board.cell_at((2, 0)).adjacent_bombs(), 1);
        assert_eq!(board.cell_at((0, 2)).adjacent_bombs(), 1);
        assert_eq!(board.cell_at((2, 2)).adjacent_bombs(), 0);
    }

    #[test]
    fn bomb_cells_carry_zero_count() {
        let board = board(3, &[(1, 1), (1, 0)]);

        assert!(board.cell_at((1, 1)).is_bomb());
        assert_eq!(board.cell_at((1, 1)).adjacent_bombs(), 0);
        assert_eq!(board.cell_at((1, 0)).adjacent_bombs(), 0);
    }

    #[test]
    fn from_bomb_coords_rejects_out_of_bounds() {
        assert_eq!(
            Board::from_bomb_coords(3, &[(3, 0)]),
            Err(GameError::InvalidCoords)
        );
    }

    #[test]
    fn reveal_opens_zero_region_but_not_bombs() {
        let mut board = board(3, &[(2, 2)]);

        let revealed = board.reveal((0, 0)).unwrap();

        assert_eq!(revealed.len(), 8);
        assert!(board.cell_at((1, 1)).is_revealed());
        assert_eq!(board.cell_at((1, 1)).adjacent_bombs(), 1);
        assert!(!board.cell_at((2, 2)).is_revealed());
    }

    #[test]
    fn reveal_is_idempotent() {
        let mut board = board(3, &[(2, 2)]);

        let first = board.reveal((0, 0)).unwrap();
        assert!(!first.is_empty());

        let second = board.reveal((0, 0)).unwrap();
        assert!(second.is_empty());
    }

    #[test]
    fn reveal_stops_at_numbered_cells() {
        // Bomb in the far column; the zero region on the left reveals the
        // numbered boundary but does not reach past it.
        let mut board = board(5, &[(4, 2)]);

        board.reveal((0, 0)).unwrap();

        assert!(board.cell_at((3, 2)).is_revealed());
        assert!(!board.cell_at((4, 2)).is_revealed());
    }

    #[test]
    fn flood_fill_skips_flagged_cells() {
        let mut board = board(3, &[(2, 2)]);

        board.toggle_flag((1, 1)).unwrap();
        let revealed = board.reveal((0, 0)).unwrap();

        assert!(!board.cell_at((1, 1)).is_revealed());
        assert!(!revealed.contains(&(1, 1)));
    }

    #[test]
    fn reveal_of_flagged_cell_is_a_no_op() {
        let mut board = board(3, &[(2, 2)]);

        board.toggle_flag((0, 0)).unwrap();
        let revealed = board.reveal((0, 0)).unwrap();

        assert!(revealed.is_empty());
        assert!(!board.cell_at((0, 0)).is_revealed());
    }

    #[test]
    fn flags_cannot_be_placed_on_revealed_cells() {
        let mut board = board(3, &[(2, 2)]);

        board.reveal((0, 0)).unwrap();
        let outcome = board.toggle_flag((0, 0)).unwrap();

        assert_eq!(outcome, FlagOutcome::NoChange);
        assert!(!outcome.has_update());
    }

    #[test]
    fn revealing_a_bomb_reveals_only_the_bomb() {
        let mut board = board(3, &[(1, 1)]);

        let revealed = board.reveal((1, 1)).unwrap();

        assert_eq!(revealed, [(1, 1)]);
        assert!(board.cell_at((1, 1)).is_revealed());
        assert!(!board.cell_at((0, 0)).is_revealed());
    }
}
