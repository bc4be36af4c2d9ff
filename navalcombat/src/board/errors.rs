//! Errors used by the `Board` and `Game`.

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::{
    board::Coordinate,
    ships::{InvalidVesselKind, Orientation},
};

/// Reason why a vessel could not be placed.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// At least one cell of the vessel would fall outside the grid.
    #[error("insufficient space for the vessel at the specified position")]
    OutOfBounds,
    /// At least one cell of the vessel is already occupied by the same player's fleet.
    #[error("the requested position was already occupied")]
    AlreadyOccupied,
    /// The vessel code did not name any vessel in the catalog.
    #[error("the vessel code was not recognized")]
    InvalidVesselKind,
}

impl From<InvalidVesselKind> for CannotPlaceReason {
    fn from(_: InvalidVesselKind) -> Self {
        CannotPlaceReason::InvalidVesselKind
    }
}

/// Error caused when attempting to place a vessel in an invalid position. The grid is
/// never modified when this is returned.
#[derive(Error)]
#[error("could not place vessel at {anchor:?} facing {orientation:?}: {reason}")]
pub struct PlaceError {
    #[source]
    reason: CannotPlaceReason,
    anchor: Coordinate,
    orientation: Orientation,
}

impl Debug for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl PlaceError {
    /// Construct a placement error from a reason and the attempted placement.
    pub(crate) fn new(
        reason: CannotPlaceReason,
        anchor: Coordinate,
        orientation: Orientation,
    ) -> Self {
        Self {
            reason,
            anchor,
            orientation,
        }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Get the anchor cell where placement was attempted.
    pub fn anchor(&self) -> Coordinate {
        self.anchor
    }

    /// Get the orientation placement was attempted with.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

/// Reason why a particular cell could not be shot.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotShootReason {
    /// The cell selected was out of bounds on the board.
    #[error("the target coordinate is out of bounds")]
    OutOfBounds,
}

/// Error returned when trying to shoot a cell. No state changes when this is returned.
#[derive(Debug, Error)]
#[error("could not shoot cell {coord:?}: {reason}")]
pub struct ShotError {
    /// Reason why the cell could not be shot.
    reason: CannotShootReason,

    /// The coordinates of the cell.
    coord: Coordinate,
}

impl ShotError {
    /// Construct a shot error with the given reason for the specified cell.
    pub(crate) fn new(reason: CannotShootReason, coord: Coordinate) -> Self {
        Self { reason, coord }
    }

    /// Get the reason the shot failed.
    pub fn reason(&self) -> CannotShootReason {
        self.reason
    }

    /// Get the coordinate of the shot cell.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }
}
