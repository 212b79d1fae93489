//! Ship definitions and hit tracking on top of the grid cell set.

use core::fmt;
use core::str::FromStr;

use crate::common::{BoardError, Coord, GridSet};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Orientation {
    /// Extends rightwards from its origin.
    #[cfg_attr(feature = "std", serde(rename = "H"))]
    Horizontal,
    /// Extends downwards from its origin.
    #[cfg_attr(feature = "std", serde(rename = "V"))]
    Vertical,
}

impl Orientation {
    /// Row and column step between consecutive segments.
    pub fn step(self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }

    /// Parse the single-letter form used by the text inputs.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'H' => Some(Orientation::Horizontal),
            'V' => Some(Orientation::Vertical),
            _ => None,
        }
    }
}

impl FromStr for Orientation {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Orientation::from_char(ch).ok_or(()),
            _ => Err(()),
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShipType {
    name: &'static str,
    #[cfg_attr(feature = "std", serde(rename = "size"))]
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// Cells covered by a ship of `length` laid from `start`, or `None` if any
/// of them falls off the grid.
pub fn footprint(start: Coord, length: usize, orientation: Orientation) -> Option<GridSet> {
    let (dr, dc) = orientation.step();
    let mut cells = GridSet::new();
    for i in 0..length {
        let cell = (start.0.checked_add(dr * i)?, start.1.checked_add(dc * i)?);
        cells.set(cell).ok()?;
    }
    Some(cells)
}

/// A ship placed on the grid. The occupied cells never change after
/// construction; only the hit set grows.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    cells: GridSet,
    hits: GridSet,
}

impl Ship {
    /// Lay a ship of `ship_type` from `start` in `orientation`.
    pub fn new(ship_type: ShipType, start: Coord, orientation: Orientation) -> Result<Self, BoardError> {
        let cells = footprint(start, ship_type.length(), orientation).ok_or(BoardError::OutOfBounds)?;
        Ok(Ship {
            ship_type,
            cells,
            hits: GridSet::new(),
        })
    }

    /// Record a hit at `coord`. Returns `false` when the ship does not
    /// occupy that cell.
    pub fn register_hit(&mut self, coord: Coord) -> bool {
        if self.cells.contains(coord) {
            // `contains` is false for off-grid cells
            let marked = self.hits.set(coord);
            debug_assert!(marked.is_ok());
            true
        } else {
            false
        }
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.hits.count_ones() == self.ship_type.length()
    }

    /// Whether the ship covers `coord`.
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(coord)
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn name(&self) -> &'static str {
        self.ship_type.name()
    }

    pub fn size(&self) -> usize {
        self.ship_type.length()
    }

    /// Cells occupied by the ship.
    pub fn cells(&self) -> GridSet {
        self.cells
    }

    /// Cells of the ship that have been hit.
    pub fn hits(&self) -> GridSet {
        self.hits
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", cells: {:?}, hits: {} }}",
            self.ship_type.name(),
            self.cells,
            self.hits.count_ones(),
        )
    }
}
