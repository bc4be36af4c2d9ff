//! Implements the basic rectangular grid geometry.
use std::borrow::Borrow;

/// Width of the standard board, in columns.
pub const BOARD_WIDTH: usize = 10;
/// Height of the standard board, in rows.
pub const BOARD_HEIGHT: usize = 10;
/// Number of cells on the standard board.
pub const CELL_COUNT: usize = BOARD_WIDTH * BOARD_HEIGHT;

/// The coordinates of a cell in the board. Both indexes are zero-based.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Coordinate {
    /// Row of the cell, `A` through `J` on the console.
    pub row: usize,
    /// Column of the cell, `1` through `10` on the console.
    pub col: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `row` and `col`.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(row, col)` pair.
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coordinate> for (usize, usize) {
    /// Convert the [`Coordinate`] into a `(row, col)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.col)
    }
}

/// Simple rectangular dimensions, with no wrapping along either axis.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RectDimensions {
    /// Width of the board. This cooresponds to the `col` of a [`Coordinate`].
    width: usize,
    /// Height of the board. This cooresponds to the `row` of a [`Coordinate`].
    height: usize,
}

impl RectDimensions {
    /// Compute the linear total size of these dimensions.
    pub fn total_size(&self) -> usize {
        self.width * self.height
    }

    /// Convert a coordinate to a row-major linear index within these dimensions.
    /// Returns `None` if the coordinate is out of range.
    pub fn try_linearize(&self, coord: &Coordinate) -> Option<usize> {
        self.check_bounds(coord)
            .map(|coord| coord.row * self.width + coord.col)
    }

    /// Move `steps` times by `(dx, dy)` from `start`. Returns `None` if the result falls
    /// off any edge of the grid.
    pub fn offset(
        &self,
        start: Coordinate,
        (dx, dy): (isize, isize),
        steps: usize,
    ) -> Option<Coordinate> {
        let steps = steps as isize;
        let row = start.row as isize + dy * steps;
        let col = start.col as isize + dx * steps;
        if row < 0 || col < 0 {
            return None;
        }
        self.check_bounds(Coordinate::new(row as usize, col as usize))
    }

    /// Check if the given [`Coordinate`] is in bounds for these [`RectDimensions`]. If so, return
    /// it, otherwise return `None`.
    #[inline]
    pub fn check_bounds<B: Borrow<Coordinate>>(&self, coord: B) -> Option<B> {
        let c = coord.borrow();
        if c.row < self.height && c.col < self.width {
            Some(coord)
        } else {
            None
        }
    }
}

impl Default for RectDimensions {
    /// Construct the standard 10x10 dimensions.
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
        }
    }
}

#[cfg(feature = "rng_gen")]
mod rng_gen {
    use once_cell::sync::Lazy;
    use rand::{
        distributions::{Distribution, Standard, Uniform},
        Rng,
    };

    use super::{Coordinate, BOARD_HEIGHT, BOARD_WIDTH};

    /// Range of valid rows for the standard board.
    static ROW_RANGE: Lazy<Uniform<usize>> = Lazy::new(|| Uniform::new(0, BOARD_HEIGHT));
    /// Range of valid columns for the standard board.
    static COL_RANGE: Lazy<Uniform<usize>> = Lazy::new(|| Uniform::new(0, BOARD_WIDTH));

    /// Samples a uniformly random cell of the standard board.
    impl Distribution<Coordinate> for Standard {
        fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Coordinate {
            Coordinate::new(ROW_RANGE.sample(rng), COL_RANGE.sample(rng))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linearize_is_row_major() {
        let dim = RectDimensions::default();
        assert_eq!(dim.try_linearize(&Coordinate::new(0, 0)), Some(0));
        assert_eq!(dim.try_linearize(&Coordinate::new(0, 9)), Some(9));
        assert_eq!(dim.try_linearize(&Coordinate::new(1, 0)), Some(10));
        assert_eq!(dim.try_linearize(&Coordinate::new(9, 9)), Some(99));
        assert_eq!(dim.try_linearize(&Coordinate::new(10, 0)), None);
        assert_eq!(dim.try_linearize(&Coordinate::new(0, 10)), None);
        assert_eq!(dim.total_size(), CELL_COUNT);
    }

    #[test]
    fn offset_stays_on_grid() {
        let dim = RectDimensions::default();
        let start = Coordinate::new(2, 7);
        assert_eq!(dim.offset(start, (1, -1), 2), Some(Coordinate::new(0, 9)));
        assert_eq!(dim.offset(start, (1, -1), 3), None);
        assert_eq!(dim.offset(start, (0, 1), 7), Some(Coordinate::new(9, 7)));
        assert_eq!(dim.offset(start, (0, 1), 8), None);
    }
}
