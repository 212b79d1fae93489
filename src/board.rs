//! One player's grid: ship placement and shot bookkeeping.

use alloc::vec::Vec;
use core::fmt;
use log::{debug, warn};
use rand::Rng;

use crate::common::{BoardError, Coord, GridSet, ShotResult};
use crate::config::{BOARD_SIZE, FLEET, MAX_PLACEMENT_ATTEMPTS};
use crate::ship::{footprint, Orientation, Ship, ShipType};

/// Ships plus the record of every shot fired at them.
///
/// `shots` is always `hits ∪ misses`, hits lie on occupied cells and
/// misses never do.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Board {
    ships: Vec<Ship>,
    occupied: GridSet,
    shots: GridSet,
    hits: GridSet,
    misses: GridSet,
}

impl Board {
    /// Create an empty board state (no ships placed).
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff a ship of `size` laid from `start` stays on the grid and
    /// clears every ship already placed.
    pub fn can_place(&self, start: Coord, size: usize, orientation: Orientation) -> bool {
        footprint(start, size, orientation).is_some_and(|cells| cells.is_disjoint(&self.occupied))
    }

    /// Place a ship at `start`. Nothing changes on error.
    ///
    /// A second ship with an existing name replaces the earlier entry in the
    /// ship list; the earlier ship's cells stay occupied.
    pub fn place_ship(
        &mut self,
        ship_type: ShipType,
        start: Coord,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let ship = Ship::new(ship_type, start, orientation)?;
        if !ship.cells().is_disjoint(&self.occupied) {
            return Err(BoardError::Overlaps);
        }
        self.occupied |= ship.cells();
        match self.ships.iter_mut().find(|s| s.name() == ship.name()) {
            Some(slot) => *slot = ship,
            None => self.ships.push(ship),
        }
        debug!("placed {} at {:?} {:?}", ship_type.name(), start, orientation);
        Ok(())
    }

    /// Returns a random free `(start, orientation)` for `ship_type`.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        ship_type: ShipType,
    ) -> Result<(Coord, Orientation), BoardError> {
        let len = ship_type.length();
        if len == 0 || len > BOARD_SIZE {
            return Err(BoardError::UnableToPlaceShip(ship_type.name()));
        }
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_r, max_c) = match orientation {
                Orientation::Horizontal => (BOARD_SIZE - 1, BOARD_SIZE - len),
                Orientation::Vertical => (BOARD_SIZE - len, BOARD_SIZE - 1),
            };
            let start = (rng.random_range(0..=max_r), rng.random_range(0..=max_c));
            if self.can_place(start, len, orientation) {
                return Ok((start, orientation));
            }
        }
        warn!(
            "gave up placing {} after {} attempts",
            ship_type.name(),
            MAX_PLACEMENT_ATTEMPTS
        );
        Err(BoardError::UnableToPlaceShip(ship_type.name()))
    }

    /// Place the standard fleet at random positions.
    pub fn place_fleet_randomly<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        for ship_type in FLEET {
            let (start, orientation) = self.random_placement(rng, ship_type)?;
            self.place_ship(ship_type, start, orientation)?;
        }
        Ok(())
    }

    /// Fire at `coord`, recording the hit or miss and reporting the outcome.
    pub fn shoot(&mut self, coord: Coord) -> Result<ShotResult, BoardError> {
        if !GridSet::in_bounds(coord) {
            return Err(BoardError::OutOfBounds);
        }
        if self.shots.get(coord)? {
            return Ok(ShotResult::Already);
        }
        self.shots.set(coord)?;
        if !self.occupied.contains(coord) {
            self.misses.set(coord)?;
            return Ok(ShotResult::Miss);
        }
        self.hits.set(coord)?;
        let result = match self.ships.iter_mut().find(|s| s.contains(coord)) {
            Some(ship) => {
                ship.register_hit(coord);
                if ship.is_sunk() {
                    ShotResult::Sunk(ship.name())
                } else {
                    ShotResult::Hit
                }
            }
            // cell of a ship that was replaced under the same name
            None => ShotResult::Hit,
        };
        debug!("shot at {:?}: {}", coord, result);
        Ok(result)
    }

    /// Returns `true` when every ship is sunk, including when none exist.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    /// Ships in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship(&self, name: &str) -> Option<&Ship> {
        self.ships.iter().find(|s| s.name() == name)
    }

    /// Names of sunk ships, in placement order.
    pub fn sunk_ship_names(&self) -> Vec<&'static str> {
        self.ships
            .iter()
            .filter(|s| s.is_sunk())
            .map(Ship::name)
            .collect()
    }

    /// Union of every ship's cells.
    pub fn occupied(&self) -> GridSet {
        self.occupied
    }

    pub fn shots(&self) -> GridSet {
        self.shots
    }

    pub fn hits(&self) -> GridSet {
        self.hits
    }

    pub fn misses(&self) -> GridSet {
        self.misses
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  occupied: {:?},\n  hits: {:?},\n  misses: {:?},\n  ships: {:?}\n}}",
            self.occupied, self.hits, self.misses, self.ships
        )
    }
}
