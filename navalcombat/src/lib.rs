//! Engine for a two-player naval combat game on a 10x10 grid.
//!
//! Each player places a fixed fleet (see [`ships::FLEET`]) on their side of a shared
//! [`Board`], then the players take turns firing at each other's side until one fleet
//! is destroyed. The [`Game`] type is the whole contract toward a front end: placement,
//! shooting, the two read-only views, and the player names. Parsing text coordinates,
//! menus and turn order live outside of this crate.
//!
//! ```
//! use navalcombat::{Coordinate, Game, Orientation, Player, ShotOutcome, VesselKind};
//!
//! let mut game = Game::new("Ahab", "Nemo");
//! game.place(Player::P1, VesselKind::Destroyer, Coordinate::new(0, 0), Orientation::Horizontal)
//!     .unwrap();
//!
//! assert_eq!(game.fire_shot(Player::P2, Coordinate::new(0, 0)).unwrap(), ShotOutcome::Hit);
//! assert_eq!(
//!     game.fire_shot(Player::P2, Coordinate::new(0, 1)).unwrap(),
//!     ShotOutcome::HitAndSunk(VesselKind::Destroyer),
//! );
//! assert!(game.is_over());
//! assert_eq!(game.winner(), Some(Player::P2));
//! ```

pub mod board;
pub mod game;
pub mod ships;

pub use crate::{
    board::{
        Board, CannotPlaceReason, CannotShootReason, Coordinate, PlaceError, RectDimensions,
        ShotError, ShotOutcome, CELL_COUNT,
    },
    game::{Game, Player},
    ships::{InvalidVesselKind, Orientation, Vessel, VesselId, VesselKind, FLEET},
};
