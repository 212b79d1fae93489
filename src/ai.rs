// Hunt/target guessing logic for the computer opponent.
// Hunts on the even checkerboard until a hit, then works outwards along the
// struck ship until it sinks.

use alloc::vec::Vec;
use log::debug;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::common::{Coord, GridSet, ShotResult};

/// Targeting state for one match against one opponent board.
///
/// Mode is implicit: the strategy is in target mode whenever `queue` holds
/// a cell that is still available, and in hunt mode otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Targeting {
    available: GridSet,
    queue: Vec<Coord>,
    chain: Vec<Coord>,
}

impl Default for Targeting {
    fn default() -> Self {
        Self::new()
    }
}

impl Targeting {
    /// Fresh strategy with every cell available.
    pub fn new() -> Self {
        Self {
            available: GridSet::full(),
            queue: Vec::new(),
            chain: Vec::new(),
        }
    }

    /// Forget all history, as at the start of a new match.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Choose the next cell to fire at and mark it as used.
    ///
    /// Returns `None` only after all cells have been chosen.
    pub fn next_shot<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Coord> {
        while self
            .queue
            .last()
            .is_some_and(|cell| !self.available.contains(*cell))
        {
            self.queue.pop();
        }

        let coord = match self.queue.pop() {
            Some(cell) => {
                debug!("target mode: following up at {:?}", cell);
                cell
            }
            None => {
                let parity: Vec<Coord> = self
                    .available
                    .cells()
                    .filter(|(r, c)| (r + c) % 2 == 0)
                    .collect();
                let cell = if parity.is_empty() {
                    let rest: Vec<Coord> = self.available.cells().collect();
                    *rest.choose(rng)?
                } else {
                    *parity.choose(rng)?
                };
                debug!("hunt mode: probing {:?}", cell);
                cell
            }
        };
        // queued and sampled cells both come from `available`, so on the grid
        let cleared = self.available.clear(coord);
        debug_assert!(cleared.is_ok(), "chosen cell {:?} is off the grid", coord);
        Some(coord)
    }

    /// Feed back the outcome of the shot last returned by `next_shot`.
    pub fn on_result(&mut self, coord: Coord, result: ShotResult) {
        if !result.is_hit() {
            return;
        }
        self.chain.push(coord);
        if let ShotResult::Sunk(name) = result {
            debug!("sank {}, back to hunting", name);
            self.queue.clear();
            self.chain.clear();
            return;
        }

        if self.chain.len() == 1 {
            let (r, c) = coord;
            let neighbours = [
                r.checked_sub(1).map(|r| (r, c)),
                Some((r + 1, c)),
                c.checked_sub(1).map(|c| (r, c)),
                Some((r, c + 1)),
            ];
            for cell in neighbours.into_iter().flatten() {
                self.enqueue(cell);
            }
            return;
        }

        // orientation comes from the last two hits; the line is extended
        // past both ends of the chain
        let (r1, c1) = self.chain[self.chain.len() - 2];
        let ends = if r1 == coord.0 {
            let min_c = self.chain.iter().map(|p| p.1).min().unwrap_or(c1);
            let max_c = self.chain.iter().map(|p| p.1).max().unwrap_or(c1);
            [min_c.checked_sub(1).map(|c| (r1, c)), Some((r1, max_c + 1))]
        } else {
            let min_r = self.chain.iter().map(|p| p.0).min().unwrap_or(r1);
            let max_r = self.chain.iter().map(|p| p.0).max().unwrap_or(r1);
            [min_r.checked_sub(1).map(|r| (r, c1)), Some((max_r + 1, c1))]
        };
        for cell in ends.into_iter().flatten() {
            self.enqueue(cell);
        }
    }

    fn enqueue(&mut self, cell: Coord) {
        if self.available.contains(cell) {
            self.queue.push(cell);
        }
    }

    /// Cells not yet fired at.
    pub fn available(&self) -> GridSet {
        self.available
    }

    /// Pending follow-up cells; the last entry is tried first.
    pub fn queue(&self) -> &[Coord] {
        &self.queue
    }

    /// Hits on the ship currently being chased.
    pub fn chain(&self) -> &[Coord] {
        &self.chain
    }

    /// True while a follow-up cell is waiting.
    pub fn is_targeting(&self) -> bool {
        self.queue.iter().any(|cell| self.available.contains(*cell))
    }
}
