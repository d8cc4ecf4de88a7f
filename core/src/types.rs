use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Single coordinate axis used for board side length and positions.
pub type Coord = u8;

/// Count type used for bomb counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`.
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

/// Taxicab distance between two cells.
pub const fn manhattan(a: Coord2, b: Coord2) -> CellCount {
    a.0.abs_diff(b.0) as CellCount + a.1.abs_diff(b.1) as CellCount
}

/// One of the four cardinal moves a player can submit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        let dim = self.dim();
        let size = (dim.0.try_into().unwrap(), dim.1.try_into().unwrap());
        NeighborIter::new(index, size)
    }
}

// dx outer, dy inner, center skipped
const DISPLACEMENTS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
pub(crate) fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (x, y) = coords;
    let (dx, dy) = delta;
    let (max_x, max_y) = bounds;

    let next_x = x.checked_add_signed(dx.try_into().ok()?)?;
    if next_x >= max_x {
        return None;
    }

    let next_y = y.checked_add_signed(dy.try_into().ok()?)?;
    if next_y >= max_y {
        return None;
    }

    Some((next_x, next_y))
}

/// Iterates the (edge-clipped) 8-neighborhood of a cell in fixed offset order.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    pub(crate) fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn neighbor_iter_yields_eight_cells_in_the_interior() {
        let neighbors: Vec<_> = NeighborIter::new((2, 2), (5, 5)).collect();

        assert_eq!(
            neighbors,
            [
                (1, 1),
                (1, 2),
                (1, 3),
                (2, 1),
                (2, 3),
                (3, 1),
                (3, 2),
                (3, 3)
            ]
        );
    }

    #[test]
    fn neighbor_iter_clips_at_corners_and_edges() {
        let corner: Vec<_> = NeighborIter::new((0, 0), (5, 5)).collect();
        assert_eq!(corner, [(0, 1), (1, 0), (1, 1)]);

        let edge: Vec<_> = NeighborIter::new((0, 2), (5, 5)).collect();
        assert_eq!(edge.len(), 5);

        let far_corner: Vec<_> = NeighborIter::new((4, 4), (5, 5)).collect();
        assert_eq!(far_corner, [(3, 3), (3, 4), (4, 3)]);
    }

    #[test]
    fn manhattan_distance() {
        assert_eq!(manhattan((0, 0), (0, 0)), 0);
        assert_eq!(manhattan((0, 0), (4, 4)), 8);
        assert_eq!(manhattan((3, 1), (1, 2)), 3);
    }

    #[test]
    fn direction_deltas_are_unit_steps() {
        assert_eq!(apply_delta((2, 2), Direction::Up.delta(), (5, 5)), Some((2, 1)));
        assert_eq!(apply_delta((2, 2), Direction::Down.delta(), (5, 5)), Some((2, 3)));
        assert_eq!(apply_delta((0, 0), Direction::Left.delta(), (5, 5)), None);
        assert_eq!(apply_delta((4, 0), Direction::Right.delta(), (5, 5)), None);
    }
}
