//! The fleet catalog: vessel kinds, their fixed shapes, and placed vessel records.
use std::{convert::TryFrom, fmt};

use thiserror::Error;

pub use self::linear::{Line, Orientation, ShapeProjection};

mod linear;

/// Kind of vessel. Describes shape only; damage is tracked by the placed [`Vessel`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum VesselKind {
    /// Aircraft carrier: length 5, code `A`.
    AircraftCarrier,
    /// Battleship: length 4, code `B`.
    Battleship,
    /// Cruiser: length 3, code `C`.
    Cruiser,
    /// Destroyer: length 2, code `D`.
    Destroyer,
}

/// The slots every player fills during setup, in the order they are placed. Both
/// destroyer slots share the `D` code.
pub const FLEET: [VesselKind; 5] = [
    VesselKind::AircraftCarrier,
    VesselKind::Battleship,
    VesselKind::Cruiser,
    VesselKind::Destroyer,
    VesselKind::Destroyer,
];

impl VesselKind {
    /// Every distinct kind, longest first.
    pub const ALL: &'static [VesselKind] = &[
        VesselKind::AircraftCarrier,
        VesselKind::Battleship,
        VesselKind::Cruiser,
        VesselKind::Destroyer,
    ];

    /// Number of cells this kind of vessel occupies.
    pub fn len(self) -> usize {
        match self {
            VesselKind::AircraftCarrier => 5,
            VesselKind::Battleship => 4,
            VesselKind::Cruiser => 3,
            VesselKind::Destroyer => 2,
        }
    }

    /// Single-character code shown on the owner's defensive view.
    pub fn code(self) -> char {
        match self {
            VesselKind::AircraftCarrier => 'A',
            VesselKind::Battleship => 'B',
            VesselKind::Cruiser => 'C',
            VesselKind::Destroyer => 'D',
        }
    }

    /// Lowercase display name.
    pub fn name(self) -> &'static str {
        match self {
            VesselKind::AircraftCarrier => "aircraft carrier",
            VesselKind::Battleship => "battleship",
            VesselKind::Cruiser => "cruiser",
            VesselKind::Destroyer => "destroyer",
        }
    }

    /// Look up a kind by its code. Codes are case-sensitive.
    pub fn from_code(code: char) -> Result<Self, InvalidVesselKind> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.code() == code)
            .ok_or(InvalidVesselKind(code))
    }

    /// The straight-line shape of this kind.
    pub(crate) fn shape(self) -> Line {
        Line::new(self.len())
    }
}

impl TryFrom<char> for VesselKind {
    type Error = InvalidVesselKind;

    fn try_from(code: char) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl fmt::Display for VesselKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Error returned when a code does not name any vessel in the catalog.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("unrecognized vessel code {0:?}")]
pub struct InvalidVesselKind(char);

impl InvalidVesselKind {
    /// The code that failed to resolve.
    pub fn code(&self) -> char {
        self.0
    }
}

/// Index of a placed vessel within its owner's fleet.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct VesselId(pub(crate) usize);

/// A vessel placed on a player's side of the board. Every cell the vessel covers refers
/// back to this single record, so damage is counted once no matter which cell is hit.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Vessel {
    kind: VesselKind,
    damage: usize,
}

impl Vessel {
    pub(crate) fn new(kind: VesselKind) -> Self {
        Self { kind, damage: 0 }
    }

    /// Kind of this vessel.
    pub fn kind(&self) -> VesselKind {
        self.kind
    }

    /// Number of distinct cells of this vessel that have been hit.
    pub fn damage(&self) -> usize {
        self.damage
    }

    /// Whether every cell of this vessel has been hit.
    pub fn sunk(&self) -> bool {
        self.damage >= self.kind.len()
    }

    /// Record a first-time hit on one of this vessel's cells. Returns true if this hit
    /// sank the vessel. Each cell is hit at most once, so a sunk vessel never takes a hit.
    pub(crate) fn take_hit(&mut self) -> bool {
        debug_assert!(!self.sunk(), "{} hit after sinking", self.kind);
        self.damage += 1;
        self.sunk()
    }
}
