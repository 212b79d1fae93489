use alloc::string::String;
use log::info;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{
    ai::Targeting,
    board::Board,
    common::{BoardError, Coord, GameError, ShotResult},
    config::FLEET,
    parse::coord_label,
    ship::{Orientation, ShipType},
    view::{GameSnapshot, NextShip},
};

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize),
    serde(rename_all = "lowercase")
)]
pub enum Side {
    Human,
    Ai,
}

/// How the human fleet is laid out at the start of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Random positions, straight into battle.
    Auto,
    /// Ship by ship through `GameSession::place_next`.
    Manual,
}

/// Current stage of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the human to place `FLEET[next]`.
    Placing { next: usize },
    Battle,
    Over(Side),
}

/// A single resolved shot.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShotEvent {
    pub shot: Coord,
    pub label: String,
    #[cfg_attr(feature = "std", serde(flatten))]
    pub result: ShotResult,
}

impl ShotEvent {
    pub fn new(shot: Coord, result: ShotResult) -> Self {
        Self {
            shot,
            label: coord_label(shot),
            result,
        }
    }
}

/// Result of one human command: the human's shot and, unless the match
/// ended or the shot was a repeat, the computer's reply.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct TurnReport {
    pub human: ShotEvent,
    pub ai: Option<ShotEvent>,
}

/// A human-vs-computer match: both boards, the computer's targeting state
/// and the random source every random choice is drawn from.
pub struct GameSession<R = SmallRng> {
    human: Board,
    ai: Board,
    targeting: Targeting,
    phase: Phase,
    rng: R,
}

impl GameSession<SmallRng> {
    /// Start a match whose randomness is fully determined by `seed`.
    pub fn seeded(seed: u64, placement: Placement) -> Result<Self, BoardError> {
        Self::new(SmallRng::seed_from_u64(seed), placement)
    }

    /// Start a match seeded from the thread-local generator.
    #[cfg(feature = "std")]
    pub fn from_entropy(placement: Placement) -> Result<Self, BoardError> {
        let mut seed_rng = rand::rng();
        Self::new(SmallRng::from_rng(&mut seed_rng), placement)
    }
}

impl<R: Rng> GameSession<R> {
    /// Start a match. The computer's fleet is placed immediately; the human
    /// fleet is either placed at random or left for `place_next`.
    pub fn new(mut rng: R, placement: Placement) -> Result<Self, BoardError> {
        let mut ai = Board::new();
        ai.place_fleet_randomly(&mut rng)?;

        let mut human = Board::new();
        let phase = match placement {
            Placement::Auto => {
                human.place_fleet_randomly(&mut rng)?;
                Phase::Battle
            }
            Placement::Manual => Phase::Placing { next: 0 },
        };
        info!("new game, {:?} placement", placement);
        Ok(Self {
            human,
            ai,
            targeting: Targeting::new(),
            phase,
            rng,
        })
    }

    /// Place the next ship of the human fleet. Returns the ship still to be
    /// placed after this one, or `None` once the fleet is complete and the
    /// battle has begun.
    pub fn place_next(
        &mut self,
        start: Coord,
        orientation: Orientation,
    ) -> Result<Option<ShipType>, GameError> {
        let Phase::Placing { next } = self.phase else {
            return Err(GameError::NotPlacing);
        };
        self.human.place_ship(FLEET[next], start, orientation)?;
        let next = next + 1;
        if next < FLEET.len() {
            self.phase = Phase::Placing { next };
            Ok(Some(FLEET[next]))
        } else {
            info!("fleet placed, battle begins");
            self.phase = Phase::Battle;
            Ok(None)
        }
    }

    /// Fire at the computer's board, then let the computer reply.
    ///
    /// A repeated target comes back as `ShotResult::Already` with no reply
    /// and no turn consumed.
    pub fn fire(&mut self, coord: Coord) -> Result<TurnReport, GameError> {
        match self.phase {
            Phase::Placing { .. } => return Err(GameError::StillPlacing),
            Phase::Over(_) => return Err(GameError::GameOver),
            Phase::Battle => {}
        }

        let result = self.ai.shoot(coord)?;
        let human = ShotEvent::new(coord, result);
        if result == ShotResult::Already {
            return Ok(TurnReport { human, ai: None });
        }
        if self.ai.all_sunk() {
            self.finish(Side::Human);
            return Ok(TurnReport { human, ai: None });
        }

        let reply = self.ai_turn()?;
        if self.human.all_sunk() {
            self.finish(Side::Ai);
        }
        Ok(TurnReport {
            human,
            ai: Some(reply),
        })
    }

    fn ai_turn(&mut self) -> Result<ShotEvent, GameError> {
        loop {
            let target = self
                .targeting
                .next_shot(&mut self.rng)
                .ok_or(GameError::NoTargetsLeft)?;
            let result = self.human.shoot(target)?;
            if result == ShotResult::Already {
                continue;
            }
            self.targeting.on_result(target, result);
            return Ok(ShotEvent::new(target, result));
        }
    }

    fn finish(&mut self, winner: Side) {
        info!("game over, {:?} wins", winner);
        self.phase = Phase::Over(winner);
    }
}

impl<R> GameSession<R> {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            Phase::Over(side) => Some(side),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Over(_))
    }

    /// The fleet slot awaiting placement, if the match is in that phase.
    pub fn next_ship(&self) -> Option<NextShip> {
        match self.phase {
            Phase::Placing { next } => Some(NextShip {
                name: FLEET[next].name(),
                size: FLEET[next].length(),
                index: next,
            }),
            _ => None,
        }
    }

    pub fn placed_count(&self) -> usize {
        self.human.ships().len()
    }

    pub fn human_board(&self) -> &Board {
        &self.human
    }

    pub fn ai_board(&self) -> &Board {
        &self.ai
    }

    pub fn targeting(&self) -> &Targeting {
        &self.targeting
    }

    /// Snapshot for display. The computer's ships are listed only when
    /// `reveal_ai` is set, which drivers expose as a debug switch.
    pub fn snapshot(&self, reveal_ai: bool) -> GameSnapshot {
        let next_ship = self.next_ship();
        GameSnapshot {
            over: self.is_over(),
            winner: self.winner(),
            human: self.human.view(true),
            ai: self.ai.view(reveal_ai),
            human_sunk: self.ai.sunk_ship_names(),
            ai_sunk: self.human.sunk_ship_names(),
            placing: next_ship.is_some(),
            next_ship,
            placed_count: self.placed_count(),
        }
    }
}
