use broadside::{init_logging, Board, Targeting, BOARD_SIZE};
use clap::Parser;
use log::{info, LevelFilter};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

/// Let the computer hunt randomly placed fleets and report how many shots
/// each one took.
#[derive(Parser)]
struct Args {
    seed: u64,
    #[arg(long, default_value_t = 100)]
    games: u64,
}

fn shots_to_sink(rng: &mut SmallRng) -> anyhow::Result<usize> {
    let mut board = Board::new();
    board.place_fleet_randomly(rng)?;
    let mut targeting = Targeting::new();

    let mut shots = 0;
    while !board.all_sunk() {
        let coord = targeting
            .next_shot(rng)
            .ok_or_else(|| anyhow::anyhow!("ran out of cells after {} shots", shots))?;
        let result = board.shoot(coord)?;
        targeting.on_result(coord, result);
        shots += 1;
    }
    Ok(shots)
}

fn main() -> anyhow::Result<()> {
    init_logging(LevelFilter::Info);
    let args = Args::parse();
    if args.games == 0 {
        anyhow::bail!("--games must be at least 1");
    }

    let mut counts = Vec::with_capacity(args.games as usize);
    for i in 0..args.games {
        let mut rng = SmallRng::seed_from_u64(args.seed.wrapping_add(i));
        counts.push(shots_to_sink(&mut rng)?);
    }
    info!("simulated {} games", counts.len());

    let total: usize = counts.iter().sum();
    let result = json!({
        "seed": args.seed,
        "games": args.games,
        "cells": BOARD_SIZE * BOARD_SIZE,
        "min_shots": counts.iter().min(),
        "max_shots": counts.iter().max(),
        "mean_shots": total as f64 / counts.len() as f64,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
