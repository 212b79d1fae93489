//! Common types for the engine: coordinates, shot outcomes and errors.

use core::fmt;

use crate::bitboard::{BitBoard, BitBoardError};
use crate::config::BOARD_SIZE;

/// Zero-based `(row, col)` position on the grid.
pub type Coord = (usize, usize);

/// Cell set covering the standard 10×10 grid.
pub type GridSet = BitBoard<u128, BOARD_SIZE>;

/// Outcome of firing at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    /// The cell was fired at before; nothing changed.
    Already,
    /// Open water.
    Miss,
    /// Struck a ship that is still afloat.
    Hit,
    /// Struck the last intact segment of the named ship.
    Sunk(&'static str),
}

impl ShotResult {
    /// True for `Hit` and `Sunk`.
    pub fn is_hit(&self) -> bool {
        matches!(self, ShotResult::Hit | ShotResult::Sunk(_))
    }

    /// Name of the ship this shot sank, if any.
    pub fn sunk_ship(&self) -> Option<&'static str> {
        match self {
            ShotResult::Sunk(name) => Some(name),
            _ => None,
        }
    }
}

/// Serialized as `{"result": "hit", "sunk": null}`; `sunk` carries the ship
/// name only for `Sunk`, but the key is always present.
#[cfg(feature = "std")]
impl serde::Serialize for ShotResult {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let kind = match self {
            ShotResult::Already => "already",
            ShotResult::Miss => "miss",
            ShotResult::Hit => "hit",
            ShotResult::Sunk(_) => "sunk",
        };
        let mut state = serializer.serialize_struct("ShotResult", 2)?;
        state.serialize_field("result", kind)?;
        state.serialize_field("sunk", &self.sunk_ship())?;
        state.end()
    }
}

impl fmt::Display for ShotResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotResult::Already => write!(f, "already"),
            ShotResult::Miss => write!(f, "miss"),
            ShotResult::Hit => write!(f, "hit"),
            ShotResult::Sunk(name) => write!(f, "sunk {}", name),
        }
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error (e.g., invalid size or index).
    BitBoard(BitBoardError),
    /// Ship would extend past the edge of the grid.
    OutOfBounds,
    /// Ship placement overlaps another ship.
    Overlaps,
    /// Random placement exhausted its attempts for the named ship.
    UnableToPlaceShip(&'static str),
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoard(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoard(e) => write!(f, "BitBoard error: {}", e),
            BoardError::OutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::Overlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::UnableToPlaceShip(name) => {
                write!(f, "Unable to find a free position for the {}", name)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Errors returned by `GameSession` commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// A placement was submitted outside the placement phase.
    NotPlacing,
    /// A shot was submitted before the human fleet was complete.
    StillPlacing,
    /// The match already has a winner.
    GameOver,
    /// The computer has fired at every cell; unreachable in a legal match.
    NoTargetsLeft,
    /// Placement or shot rejected by the board.
    Board(BoardError),
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::NotPlacing => write!(f, "Not in placement mode"),
            GameError::StillPlacing => write!(f, "Finish ship placement before firing"),
            GameError::GameOver => write!(f, "Game over"),
            GameError::NoTargetsLeft => write!(f, "No untargeted cells remain"),
            GameError::Board(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
