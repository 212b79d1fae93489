//! Text forms of coordinates and placements.
//!
//! Rows are letters `A`–`J`, columns are numbers `1`–`10`; `B7` is
//! `(1, 6)`. Input is case-insensitive and may carry whitespace between the
//! parts. Anything else parses to `None`, never to a partial coordinate.

use alloc::format;
use alloc::string::String;

use crate::common::{Coord, GridSet};
use crate::config::BOARD_SIZE;
use crate::ship::Orientation;

/// Split a leading `<letter><number>` off `input`, returning the coordinate
/// and whatever follows it.
fn split_coord(input: &str) -> Option<(Coord, &str)> {
    let mut chars = input.chars();
    let row_ch = chars.next()?.to_ascii_uppercase();
    if !row_ch.is_ascii_uppercase() {
        return None;
    }
    let row = (row_ch as u8 - b'A') as usize;
    if row >= BOARD_SIZE {
        return None;
    }

    let rest = chars.as_str().trim_start();
    let digits_end = rest
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(rest.len());
    let (digits, tail) = rest.split_at(digits_end);
    // no leading zeros: "A01" is rejected like "A0"
    if digits.is_empty() || digits.starts_with('0') {
        return None;
    }
    let col: usize = digits.parse().ok()?;
    if col == 0 || col > BOARD_SIZE {
        return None;
    }
    Some(((row, col - 1), tail))
}

/// Parse a shot target such as `"c10"` or `" B 7 "`.
pub fn parse_coord(input: &str) -> Option<Coord> {
    match split_coord(input.trim())? {
        (coord, "") => Some(coord),
        _ => None,
    }
}

/// Parse a placement such as `"A1H"`, `"a1 v"` or `"J 10 H"`.
pub fn parse_placement(input: &str) -> Option<(Coord, Orientation)> {
    let (coord, tail) = split_coord(input.trim())?;
    let orientation = tail.parse().ok()?;
    Some((coord, orientation))
}

/// Label for `coord` in the same form `parse_coord` accepts.
///
/// Off-grid coordinates have no such form and render as the raw pair,
/// e.g. `(10, 3)`.
pub fn coord_label(coord: Coord) -> String {
    if !GridSet::in_bounds(coord) {
        return format!("({}, {})", coord.0, coord.1);
    }
    let (row, col) = coord;
    format!("{}{}", (b'A' + row as u8) as char, col + 1)
}
