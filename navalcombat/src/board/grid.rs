//! Defines the cells that make up the grid. Both players' sides of the ocean share the
//! same cells.

use std::{
    borrow::Borrow,
    ops::{Index, IndexMut},
};

use enumflags2::BitFlags;

use crate::{
    board::{Coordinate, RectDimensions},
    game::Player,
    ships::VesselId,
};

/// A single cell in the grid.
#[derive(Debug)]
pub(super) struct GridCell {
    /// The vessel of each player that occupies this cell, if any. Indexed by
    /// [`Player::index`].
    pub(super) vessels: [Option<VesselId>; 2],

    /// The players that have fired at this cell.
    pub(super) shots: BitFlags<Player>,
}

impl GridCell {
    /// The vessel `owner` has placed on this cell, if any.
    pub(super) fn vessel(&self, owner: Player) -> Option<VesselId> {
        self.vessels[owner.index()]
    }

    /// Whether `attacker` has already fired at this cell.
    pub(super) fn shot_by(&self, attacker: Player) -> bool {
        self.shots.contains(attacker)
    }
}

impl Default for GridCell {
    fn default() -> Self {
        Self {
            vessels: [None, None],
            shots: BitFlags::empty(),
        }
    }
}

/// Fixed-size grid of cells, created once and mutated in place.
#[derive(Debug)]
pub(super) struct Grid {
    /// Dimensions of this board.
    pub(super) dim: RectDimensions,
    /// Cells that make up this board, in row-major order.
    pub(super) cells: Box<[GridCell]>,
}

impl Grid {
    pub(super) fn new(dim: RectDimensions) -> Self {
        let cells = (0..dim.total_size()).map(|_| Default::default()).collect();
        Self { dim, cells }
    }

    /// Get a reference to the cell at the given [`Coordinate`].
    pub(super) fn get<B: Borrow<Coordinate>>(&self, coord: B) -> Option<&GridCell> {
        self.dim
            .try_linearize(coord.borrow())
            .and_then(|i| self.cells.get(i))
    }

    /// Get a mutable reference to the cell at the given [`Coordinate`].
    pub(super) fn get_mut<B: Borrow<Coordinate>>(&mut self, coord: B) -> Option<&mut GridCell> {
        self.dim
            .try_linearize(coord.borrow())
            .and_then(move |i| self.cells.get_mut(i))
    }
}

impl<B: Borrow<Coordinate>> Index<B> for Grid {
    type Output = GridCell;

    fn index(&self, coord: B) -> &Self::Output {
        self.get(coord).expect("coordinate out of bounds")
    }
}

impl<B: Borrow<Coordinate>> IndexMut<B> for Grid {
    fn index_mut(&mut self, coord: B) -> &mut Self::Output {
        self.get_mut(coord).expect("coordinate out of bounds")
    }
}
