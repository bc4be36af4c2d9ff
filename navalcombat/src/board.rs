//! Types that make up the game board.

use log::trace;

use crate::{
    game::Player,
    ships::{Orientation, Vessel, VesselId, VesselKind},
};

use self::grid::Grid;
pub use self::{
    errors::{CannotPlaceReason, CannotShootReason, PlaceError, ShotError},
    rectangular::{Coordinate, RectDimensions, BOARD_HEIGHT, BOARD_WIDTH, CELL_COUNT},
};

mod errors;
mod grid;
pub mod rectangular;

/// Cell of an offensive view that the attacker has not fired at.
pub const UNKNOWN: char = ' ';
/// Cell of an offensive view where the attacker hit an opposing vessel.
pub const HIT: char = 'H';
/// Cell of an offensive view where the attacker fired at open water.
pub const MISS: char = 'M';
/// Cell of a defensive view with no vessel on it.
pub const EMPTY: char = ' ';

/// Result of a shot fired at the opponent's side of the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShotOutcome {
    /// The attacker already fired at this cell. Nothing changed.
    AlreadyShot,
    /// Nothing was hit.
    Miss,
    /// A vessel was hit but is still afloat.
    Hit,
    /// A vessel of the given kind was hit and is now sunk.
    HitAndSunk(VesselKind),
}

impl ShotOutcome {
    /// The kind of vessel this shot sank, if any.
    pub fn sunk(&self) -> Option<VesselKind> {
        match self {
            ShotOutcome::HitAndSunk(kind) => Some(*kind),
            _ => None,
        }
    }
}

/// The ocean both players fight over: a 10x10 grid where every cell records each player's
/// vessel and each player's shots, plus the fleet of placed vessels for each player.
#[derive(Debug)]
pub struct Board {
    /// Grid of cells occupied by vessels.
    grid: Grid,

    /// Placed vessels for each player, indexed by [`Player::index`]. Cells refer into
    /// these by [`VesselId`].
    fleets: [Vec<Vessel>; 2],
}

impl Board {
    /// Construct an empty standard board.
    pub fn new() -> Self {
        Self {
            grid: Grid::new(RectDimensions::default()),
            fleets: [Vec::new(), Vec::new()],
        }
    }

    /// Get the vessels `owner` has placed, in placement order.
    pub fn fleet(&self, owner: Player) -> &[Vessel] {
        &self.fleets[owner.index()]
    }

    /// Get the vessel `owner` has on the given cell. Returns `None` if the cell is empty
    /// or out of bounds.
    pub fn vessel_at(&self, owner: Player, coord: Coordinate) -> Option<&Vessel> {
        self.grid
            .get(coord)
            .and_then(|cell| cell.vessel(owner))
            .map(|id| &self.fleets[owner.index()][id.0])
    }

    /// Whether `attacker` has fired at the given cell. Returns `None` if the coordinate is
    /// out of bounds.
    pub fn shot_by(&self, attacker: Player, coord: Coordinate) -> Option<bool> {
        self.grid.get(coord).map(|cell| cell.shot_by(attacker))
    }

    /// Place a vessel of the given kind on `owner`'s side, covering the cells from
    /// `anchor` along `orientation`. Every cell is checked before any is written, so a
    /// failed placement leaves the board exactly as it was.
    pub fn place(
        &mut self,
        owner: Player,
        kind: VesselKind,
        anchor: Coordinate,
        orientation: Orientation,
    ) -> Result<VesselId, PlaceError> {
        let placement = kind
            .shape()
            .project(anchor, orientation, &self.grid.dim)
            .ok_or_else(|| PlaceError::new(CannotPlaceReason::OutOfBounds, anchor, orientation))?;
        if placement
            .iter()
            .any(|coord| self.grid[coord].vessel(owner).is_some())
        {
            return Err(PlaceError::new(
                CannotPlaceReason::AlreadyOccupied,
                anchor,
                orientation,
            ));
        }
        // Already ensured that every position is valid and not occupied.
        let fleet = &mut self.fleets[owner.index()];
        let id = VesselId(fleet.len());
        fleet.push(Vessel::new(kind));
        for coord in placement.iter() {
            self.grid[coord].vessels[owner.index()] = Some(id);
        }
        trace!("{:?} placed {} on {:?}", owner, kind, placement);
        Ok(id)
    }

    /// Fire a shot from `attacker` at the opponent's side of the given cell.
    pub fn shoot(
        &mut self,
        attacker: Player,
        coord: Coordinate,
    ) -> Result<ShotOutcome, ShotError> {
        let defender = attacker.opponent();
        let target = match self.grid.get_mut(coord) {
            None => return Err(ShotError::new(CannotShootReason::OutOfBounds, coord)),
            Some(cell) if cell.shot_by(attacker) => return Ok(ShotOutcome::AlreadyShot),
            Some(cell) => {
                cell.shots.insert(attacker);
                cell.vessel(defender)
            }
        };
        Ok(match target {
            None => ShotOutcome::Miss,
            Some(id) => {
                let vessel = &mut self.fleets[defender.index()][id.0];
                if vessel.take_hit() {
                    ShotOutcome::HitAndSunk(vessel.kind())
                } else {
                    ShotOutcome::Hit
                }
            }
        })
    }

    /// Project the board as seen by `attacker`: [`UNKNOWN`] where they have not fired,
    /// [`HIT`] where they fired onto an opposing vessel, [`MISS`] where they fired onto
    /// open water. Row-major.
    pub fn offensive_view(&self, attacker: Player) -> [char; CELL_COUNT] {
        let defender = attacker.opponent();
        let mut view = [UNKNOWN; CELL_COUNT];
        for (slot, cell) in view.iter_mut().zip(self.grid.cells.iter()) {
            if cell.shot_by(attacker) {
                *slot = match cell.vessel(defender) {
                    Some(_) => HIT,
                    None => MISS,
                };
            }
        }
        view
    }

    /// Project `owner`'s own side: the vessel code on every occupied cell, [`EMPTY`]
    /// elsewhere. Shots and damage are not shown. Row-major.
    pub fn defensive_view(&self, owner: Player) -> [char; CELL_COUNT] {
        let fleet = self.fleet(owner);
        let mut view = [EMPTY; CELL_COUNT];
        for (slot, cell) in view.iter_mut().zip(self.grid.cells.iter()) {
            if let Some(id) = cell.vessel(owner) {
                *slot = fleet[id.0].kind().code();
            }
        }
        view
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
