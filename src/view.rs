//! Read-only snapshots of boards and matches for display layers.
//!
//! Coordinate lists are sorted row-major. Ship details are only filled in
//! when the caller asks for them, so a view of the opponent's board built
//! with `reveal = false` carries nothing a player could not already see.

use alloc::vec::Vec;

use crate::board::Board;
use crate::common::Coord;
use crate::config::BOARD_SIZE;
use crate::ship::Ship;

/// What a display layer may show about one board.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct BoardView {
    pub size: usize,
    pub hits: Vec<Coord>,
    pub misses: Vec<Coord>,
    pub shots: Vec<Coord>,
    /// Empty unless the view was built with `reveal`.
    pub ships: Vec<ShipView>,
    pub all_sunk: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShipView {
    pub name: &'static str,
    pub size: usize,
    pub coords: Vec<Coord>,
    pub hits: Vec<Coord>,
    pub sunk: bool,
}

impl From<&Ship> for ShipView {
    fn from(ship: &Ship) -> Self {
        ShipView {
            name: ship.name(),
            size: ship.size(),
            coords: ship.cells().cells().collect(),
            hits: ship.hits().cells().collect(),
            sunk: ship.is_sunk(),
        }
    }
}

impl Board {
    /// Snapshot this board, listing ship positions only when `reveal`.
    pub fn view(&self, reveal: bool) -> BoardView {
        let ships = if reveal {
            self.ships().iter().map(ShipView::from).collect()
        } else {
            Vec::new()
        };
        BoardView {
            size: BOARD_SIZE,
            hits: self.hits().cells().collect(),
            misses: self.misses().cells().collect(),
            shots: self.shots().cells().collect(),
            ships,
            all_sunk: self.all_sunk(),
        }
    }
}

/// The fleet slot the human is asked to place next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct NextShip {
    pub name: &'static str,
    pub size: usize,
    pub index: usize,
}

/// Everything a driver needs to redraw a match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct GameSnapshot {
    pub over: bool,
    pub winner: Option<crate::game::Side>,
    pub human: BoardView,
    pub ai: BoardView,
    /// Computer ships the human has sunk.
    pub human_sunk: Vec<&'static str>,
    /// Human ships the computer has sunk.
    pub ai_sunk: Vec<&'static str>,
    pub placing: bool,
    pub next_ship: Option<NextShip>,
    pub placed_count: usize,
}
