#![cfg(feature = "std")]

//! Terminal driver: prompts, board drawing and the match loop.
//!
//! The driver owns everything the engine does not know about: reading
//! lines, the restart token, and asking whether to play again.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use log::debug;

use crate::{
    board::Board,
    common::{GridSet, ShotResult},
    config::{BOARD_SIZE, RESTART_TOKEN},
    game::{GameSession, Placement, ShotEvent, Side},
    parse::{parse_coord, parse_placement},
};

/// Name shown for the computer player.
pub const OPPONENT: &str = "General Bones";

/// One line of player input, with the restart token and end of input
/// already told apart from ordinary text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Line(String),
    Restart,
    Eof,
}

/// How a single match came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchEnd {
    Finished(Side),
    Restart,
    Quit,
}

/// Driver settings taken from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayOptions {
    /// Seed for the first match; later matches use `seed + n`.
    pub seed: Option<u64>,
    /// Skip the placement question and place the human fleet at random.
    pub auto_place: bool,
    /// Draw the computer's ships. For checking the engine, not for play.
    pub reveal_ai: bool,
}

/// Line-oriented terminal over any reader/writer pair.
pub struct Terminal<In, Out> {
    input: In,
    out: Out,
}

impl<In: BufRead, Out: Write> Terminal<In, Out> {
    pub fn new(input: In, out: Out) -> Self {
        Self { input, out }
    }

    /// Give back the output sink.
    pub fn into_output(self) -> Out {
        self.out
    }

    /// Print `text` and read one line.
    pub fn prompt(&mut self, text: &str) -> io::Result<Input> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(Input::Eof);
        }
        let line = line.trim();
        if line.eq_ignore_ascii_case(RESTART_TOKEN) {
            Ok(Input::Restart)
        } else {
            Ok(Input::Line(line.to_string()))
        }
    }

    fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    /// Play matches until the player declines another one or input ends.
    pub fn run(&mut self, options: PlayOptions) -> Result<()> {
        let mut played = 0u64;
        loop {
            let end = self.play_match(options, played)?;
            played += 1;
            match end {
                MatchEnd::Restart => {
                    self.say("Restarting game...")?;
                    continue;
                }
                MatchEnd::Quit => return Ok(()),
                MatchEnd::Finished(_) => {}
            }
            match self.prompt("Play again? (y/n): ")? {
                Input::Line(ans) if ans.eq_ignore_ascii_case("y") => continue,
                Input::Restart => continue,
                _ => return Ok(()),
            }
        }
    }

    /// Play one match from placement to a winner.
    pub fn play_match(&mut self, options: PlayOptions, index: u64) -> Result<MatchEnd> {
        let placement = if options.auto_place {
            Placement::Auto
        } else {
            match self.prompt("Auto-place your ships? (y/n): ")? {
                Input::Line(ans) if ans.eq_ignore_ascii_case("y") => Placement::Auto,
                Input::Line(_) => Placement::Manual,
                Input::Restart => return Ok(MatchEnd::Restart),
                Input::Eof => return Ok(MatchEnd::Quit),
            }
        };
        let mut session = match options.seed {
            Some(seed) => GameSession::seeded(seed.wrapping_add(index), placement)?,
            None => GameSession::from_entropy(placement)?,
        };
        self.say(&format!("Get ready for battle - {} awaits...", OPPONENT))?;

        while let Some(next) = session.next_ship() {
            self.say(&render_board(session.human_board(), true))?;
            let text = format!(
                "Place your {} (size {}), e.g. A1H or B3 V: ",
                next.name, next.size
            );
            let line = match self.prompt(&text)? {
                Input::Line(line) => line,
                Input::Restart => return Ok(MatchEnd::Restart),
                Input::Eof => return Ok(MatchEnd::Quit),
            };
            let Some((start, orientation)) = parse_placement(&line) else {
                self.say("Invalid input. Use a coordinate and H or V, e.g. A1H.")?;
                continue;
            };
            if let Err(e) = session.place_next(start, orientation) {
                debug!("placement rejected: {}", e);
                self.say(&format!("Invalid placement: {}.", e))?;
            }
        }

        loop {
            self.print_boards(&session, options.reveal_ai)?;
            let text = format!("Wanna start over? Enter {}\nYour shot (e.g. B7): ", RESTART_TOKEN);
            let line = match self.prompt(&text)? {
                Input::Line(line) => line,
                Input::Restart => return Ok(MatchEnd::Restart),
                Input::Eof => return Ok(MatchEnd::Quit),
            };
            let Some(coord) = parse_coord(&line) else {
                self.say("Invalid coordinate. Use a row A-J and a column 1-10, e.g. B7.")?;
                continue;
            };
            let report = session.fire(coord)?;
            if report.human.result == ShotResult::Already {
                self.say(&format!(
                    "You already fired at {}. Try again.",
                    report.human.label
                ))?;
                continue;
            }
            self.say(&describe("You", "the enemy's", &report.human))?;
            if let Some(reply) = &report.ai {
                self.say(&describe(OPPONENT, "your", reply))?;
            }

            if let Some(winner) = session.winner() {
                self.say("Final boards:")?;
                self.print_boards(&session, true)?;
                let verdict = match winner {
                    Side::Human => "You win! All enemy ships sunk.".to_string(),
                    Side::Ai => format!("{} wins! All your ships sunk.", OPPONENT),
                };
                self.say(&verdict)?;
                return Ok(MatchEnd::Finished(winner));
            }
        }
    }

    fn print_boards<R>(&mut self, session: &GameSession<R>, reveal_ai: bool) -> io::Result<()> {
        let human = session.human_board();
        let ai = session.ai_board();
        self.say("Your Board")?;
        self.say(&render_board(human, true))?;
        self.say("")?;
        self.say(OPPONENT)?;
        self.say(&render_board(ai, reveal_ai))?;
        self.say("")?;
        self.say(&format!("You have sunk: {}", name_list(&ai.sunk_ship_names())))?;
        self.say(&format!(
            "{} has sunk: {}",
            OPPONENT,
            name_list(&human.sunk_ship_names())
        ))
    }
}

fn name_list(names: &[&str]) -> String {
    if names.is_empty() {
        "None".to_string()
    } else {
        names.join(", ")
    }
}

fn describe(shooter: &str, owner: &str, event: &ShotEvent) -> String {
    match event.result {
        ShotResult::Hit => format!("{} hit at {}!", shooter, event.label),
        ShotResult::Miss => format!("{} missed at {}.", shooter, event.label),
        ShotResult::Sunk(name) => format!("{} sunk {} {}!", shooter, owner, name),
        ShotResult::Already => format!("{} already fired at {}.", shooter, event.label),
    }
}

/// Draw a board as text. `X` is a hit, `#` a hit on a sunk ship, `0` a
/// miss, `S` an intact ship segment (only with `show_ships`), `~` water.
pub fn render_board(board: &Board, show_ships: bool) -> String {
    let sunk = board
        .ships()
        .iter()
        .filter(|s| s.is_sunk())
        .fold(GridSet::new(), |acc, s| acc | s.cells());

    let mut text = String::from("  ");
    for c in 1..=BOARD_SIZE {
        text.push_str(&format!(" {:>2}", c));
    }
    for r in 0..BOARD_SIZE {
        text.push('\n');
        text.push((b'A' + r as u8) as char);
        text.push(' ');
        for c in 0..BOARD_SIZE {
            let p = (r, c);
            let ch = if sunk.contains(p) && board.hits().contains(p) {
                '#'
            } else if board.hits().contains(p) {
                'X'
            } else if board.misses().contains(p) {
                '0'
            } else if show_ships && board.occupied().contains(p) {
                'S'
            } else {
                '~'
            };
            text.push_str(&format!("  {}", ch));
        }
    }
    text
}

/// Play on standard input and output.
pub fn run_stdio(options: PlayOptions) -> Result<()> {
    let stdin = io::stdin();
    let mut terminal = Terminal::new(stdin.lock(), io::stdout());
    terminal.run(options)
}
