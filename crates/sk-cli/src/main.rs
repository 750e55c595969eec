//! CLI frontend for the Seven Kingdoms adventure engine.

mod commands;
mod render;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "sk",
    about = "Seven Kingdoms — a text and tile adventure in procedurally generated lands",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive session
    Play {
        /// RNG seed for a reproducible world and dice
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Number of wandering NPCs
        #[arg(short, long, default_value = "5")]
        npcs: usize,

        /// Side length of the square map
        #[arg(long, default_value = "20")]
        size: u32,

        /// Per-cell probability of water (0.0 to 1.0)
        #[arg(long, default_value = "0.3")]
        water: f64,
    },

    /// Print the map a given seed generates, without playing
    Map {
        /// RNG seed for a reproducible world
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Side length of the square map
        #[arg(long, default_value = "20")]
        size: u32,

        /// Per-cell probability of water (0.0 to 1.0)
        #[arg(long, default_value = "0.3")]
        water: f64,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            seed,
            npcs,
            size,
            water,
        } => commands::play::run(seed, npcs, size, water),
        Commands::Map { seed, size, water } => commands::map::run(seed, size, water),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
