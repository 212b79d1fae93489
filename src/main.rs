#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{cli, init_logging};
#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use log::LevelFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer in this terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Place your fleet at random without asking")]
        auto_place: bool,
        #[arg(long, help = "Show the computer's ships (for verification)")]
        reveal_ai: bool,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    match args.command {
        Commands::Play {
            seed,
            auto_place,
            reveal_ai,
        } => {
            init_logging(LevelFilter::Warn);
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            cli::run_stdio(cli::PlayOptions {
                seed,
                auto_place,
                reveal_ai,
            })?;
        }
    }
    Ok(())
}
