//! The game engine: two named players, their live-ship counts, and the game-over latch
//! on top of a shared [`Board`].
//!
//! The engine has no notion of a setup phase or of whose turn it is. Front ends decide
//! when both fleets are complete and alternate calls to [`Game::fire_shot`] themselves;
//! the engine only latches the end of the game when a fleet is destroyed.

use enumflags2::BitFlags;
use log::{debug, info};

use crate::{
    board::{
        Board, CannotPlaceReason, Coordinate, PlaceError, ShotError, ShotOutcome, CELL_COUNT,
    },
    ships::{Orientation, VesselKind},
};

/// Player ID. `P1` and `P2` are also the flags recorded on every cell a player fires at.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Player {
    P1 = 0b01,
    P2 = 0b10,
}

impl Player {
    /// Get the opponent of this player.
    pub fn opponent(self) -> Self {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
        }
    }

    /// Index into per-player arrays.
    pub(crate) fn index(self) -> usize {
        match self {
            Player::P1 => 0,
            Player::P2 => 1,
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

    use super::Player;
    use crate::ships::Orientation;

    /// Range of indexes into [`Orientation::ALL`].
    static ORIENTATION_RANGE: Lazy<Uniform<usize>> =
        Lazy::new(|| Uniform::new(0, Orientation::ALL.len()));

    /// Fair coin flip between the two players.
    impl Distribution<Player> for Standard {
        fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Player {
            let heads: bool = Standard.sample(rng);
            if heads {
                Player::P1
            } else {
                Player::P2
            }
        }
    }

    /// Uniformly random orientation, diagonals included.
    impl Distribution<Orientation> for Standard {
        fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
            Orientation::ALL[ORIENTATION_RANGE.sample(rng)]
        }
    }

    #[cfg(test)]
    mod tests {
        use rand::{rngs::StdRng, SeedableRng};

        use super::*;
        use crate::board::Coordinate;

        #[test]
        fn samples_cover_every_value() {
            let mut rng = StdRng::seed_from_u64(3);
            let players: Vec<Player> = (0..64).map(|_| rng.gen()).collect();
            assert!(players.contains(&Player::P1));
            assert!(players.contains(&Player::P2));

            let orientations: Vec<Orientation> = (0..256).map(|_| rng.gen()).collect();
            for dir in Orientation::ALL.iter() {
                assert!(orientations.contains(dir));
            }

            for _ in 0..256 {
                let coord: Coordinate = rng.gen();
                assert!(coord.row < 10 && coord.col < 10);
            }
        }
    }
}

/// One game session between two players.
#[derive(Debug)]
pub struct Game {
    /// Shared board holding both players' vessels and shots.
    board: Board,

    /// Display names, indexed by [`Player::index`]. Fixed at construction.
    names: [String; 2],

    /// Vessels placed and not yet sunk, per player.
    live_ships: [usize; 2],

    /// Set by the shot that ended the game, never cleared.
    winner: Option<Player>,
}

impl Game {
    /// Start a game between the two named players with empty boards.
    pub fn new(player1: impl Into<String>, player2: impl Into<String>) -> Self {
        Self {
            board: Board::new(),
            names: [player1.into(), player2.into()],
            live_ships: [0, 0],
            winner: None,
        }
    }

    /// Display name of player 1.
    pub fn player1_name(&self) -> &str {
        self.player_name(Player::P1)
    }

    /// Display name of player 2.
    pub fn player2_name(&self) -> &str {
        self.player_name(Player::P2)
    }

    /// Display name of the given player.
    pub fn player_name(&self, player: Player) -> &str {
        &self.names[player.index()]
    }

    /// Number of vessels the player has placed that are not yet sunk.
    pub fn live_ships(&self, player: Player) -> usize {
        self.live_ships[player.index()]
    }

    /// Whether a fleet has been destroyed. Once true, stays true.
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// The player who sank the opponent's last vessel, if the game is over.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Read-only access to the underlying board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Place a vessel for `player`. On success the player's live-ship count goes up by
    /// one; on failure nothing changes.
    pub fn place(
        &mut self,
        player: Player,
        kind: VesselKind,
        anchor: Coordinate,
        orientation: Orientation,
    ) -> Result<(), PlaceError> {
        self.board.place(player, kind, anchor, orientation)?;
        self.live_ships[player.index()] += 1;
        debug!(
            "{:?} placed {} at {:?} facing {:?}",
            player, kind, anchor, orientation
        );
        Ok(())
    }

    /// Place a vessel identified by its catalog code. Returns false, leaving the game
    /// unchanged, if the code is unknown or the placement is out of bounds or overlaps.
    pub fn place_vessel(
        &mut self,
        player: Player,
        code: char,
        anchor: Coordinate,
        orientation: Orientation,
    ) -> bool {
        let placed = VesselKind::from_code(code)
            .map_err(|err| PlaceError::new(CannotPlaceReason::from(err), anchor, orientation))
            .and_then(|kind| self.place(player, kind, anchor, orientation));
        match placed {
            Ok(()) => true,
            Err(err) => {
                debug!("{:?} placement of {:?} rejected: {}", player, code, err);
                false
            }
        }
    }

    /// Fire a shot from `attacker` at the given cell of their opponent's side.
    ///
    /// Sinking a vessel lowers the defender's live-ship count. When that brings the
    /// defender's count to zero the game is over and the attacker is the winner. Out-of-bounds targets are rejected without
    /// touching any state.
    pub fn fire_shot(
        &mut self,
        attacker: Player,
        target: Coordinate,
    ) -> Result<ShotOutcome, ShotError> {
        let outcome = self.board.shoot(attacker, target)?;
        debug!("{:?} fired at {:?}: {:?}", attacker, target, outcome);
        if let ShotOutcome::HitAndSunk(kind) = outcome {
            let defender = attacker.opponent();
            let live = &mut self.live_ships[defender.index()];
            *live = live.saturating_sub(1);
            info!(
                "{} sank {}'s {}",
                self.player_name(attacker),
                self.player_name(defender),
                kind
            );
            if self.winner.is_none() && self.live_ships[defender.index()] == 0 {
                self.winner = Some(attacker);
                info!("game over: {} wins", self.player_name(attacker));
            }
        }
        Ok(outcome)
    }

    /// What `player` knows of the opponent's side: `' '` not fired at, `'H'` hit, `'M'`
    /// miss. Row-major.
    pub fn offensive_view(&self, player: Player) -> [char; CELL_COUNT] {
        self.board.offensive_view(player)
    }

    /// `player`'s own side: vessel codes on occupied cells, `' '` elsewhere. Row-major.
    pub fn defensive_view(&self, player: Player) -> [char; CELL_COUNT] {
        self.board.defensive_view(player)
    }
}
