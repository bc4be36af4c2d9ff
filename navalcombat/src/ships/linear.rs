// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use crate::board::{Coordinate, RectDimensions};

/// Direction a vessel extends in from its anchor cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// Along the row, toward higher columns.
    Horizontal,
    /// Along the column, toward higher rows.
    Vertical,
    /// Toward higher columns and higher rows.
    DiagonalDown,
    /// Toward higher columns and lower rows.
    DiagonalUp,
}

impl Orientation {
    /// All orientations.
    pub const ALL: [Orientation; 4] = [
        Orientation::Horizontal,
        Orientation::Vertical,
        Orientation::DiagonalDown,
        Orientation::DiagonalUp,
    ];

    /// Step between consecutive cells as `(dx, dy)`, where `dx` moves along columns and
    /// `dy` along rows.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
            Orientation::DiagonalDown => (1, 1),
            Orientation::DiagonalUp => (1, -1),
        }
    }
}

/// Cells covered by a shape, in order from the anchor.
pub type ShapeProjection = Vec<Coordinate>;

/// A linear ship shape, with a given length.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Line(usize);

impl Line {
    /// Construct a linear ship with the specified length. Panics if len is 0.
    pub fn new(len: usize) -> Self {
        assert!(len > 0);
        Line(len)
    }

    /// Get the length of this ship.
    pub fn len(&self) -> usize {
        self.0
    }

    /// Project this line onto the grid starting at `anchor`, one cell per step along
    /// `dir`. Returns `None` if any cell, the anchor included, falls outside of `dim`.
    /// Coordinates never wrap around the edges.
    pub fn project(
        &self,
        anchor: Coordinate,
        dir: Orientation,
        dim: &RectDimensions,
    ) -> Option<ShapeProjection> {
        let delta = dir.delta();
        (0..self.0)
            .map(|step| dim.offset(anchor, delta, step))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(cells: &[(usize, usize)]) -> ShapeProjection {
        cells.iter().copied().map(Coordinate::from).collect()
    }

    #[test]
    fn projects_each_orientation() {
        let dim = RectDimensions::default();
        let line = Line::new(3);
        let anchor = Coordinate::new(4, 4);
        assert_eq!(
            line.project(anchor, Orientation::Horizontal, &dim),
            Some(coords(&[(4, 4), (4, 5), (4, 6)])),
        );
        assert_eq!(
            line.project(anchor, Orientation::Vertical, &dim),
            Some(coords(&[(4, 4), (5, 4), (6, 4)])),
        );
        assert_eq!(
            line.project(anchor, Orientation::DiagonalDown, &dim),
            Some(coords(&[(4, 4), (5, 5), (6, 6)])),
        );
        assert_eq!(
            line.project(anchor, Orientation::DiagonalUp, &dim),
            Some(coords(&[(4, 4), (3, 5), (2, 6)])),
        );
    }

    #[test]
    fn edge_cells_fit_exactly() {
        let dim = RectDimensions::default();
        let line = Line::new(5);
        assert!(line
            .project(Coordinate::new(0, 5), Orientation::Horizontal, &dim)
            .is_some());
        assert!(line
            .project(Coordinate::new(5, 9), Orientation::Vertical, &dim)
            .is_some());
        assert!(line
            .project(Coordinate::new(4, 0), Orientation::DiagonalUp, &dim)
            .is_some());
    }

    #[test]
    fn never_wraps() {
        let dim = RectDimensions::default();
        let line = Line::new(2);
        for &(anchor, dir) in [
            ((0, 9), Orientation::Horizontal),
            ((9, 0), Orientation::Vertical),
            ((9, 9), Orientation::DiagonalDown),
            ((0, 0), Orientation::DiagonalUp),
            ((10, 0), Orientation::Horizontal),
        ]
        .iter()
        {
            assert_eq!(line.project(anchor.into(), dir, &dim), None, "{:?} {:?}", anchor, dir);
        }
    }

    #[test]
    fn corner_to_corner_diagonals() {
        let dim = RectDimensions::default();
        let line = Line::new(5);
        assert!(line
            .project(Coordinate::new(5, 5), Orientation::DiagonalDown, &dim)
            .is_some());
        assert!(line
            .project(Coordinate::new(6, 5), Orientation::DiagonalDown, &dim)
            .is_none());
        assert!(line
            .project(Coordinate::new(9, 5), Orientation::DiagonalUp, &dim)
            .is_some());
        assert!(line
            .project(Coordinate::new(9, 6), Orientation::DiagonalUp, &dim)
            .is_none());
    }

    #[test]
    #[should_panic]
    fn zero_length_line_panics() {
        Line::new(0);
    }
}
