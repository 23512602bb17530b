use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::constants::{BOARD_HEIGHT, BOARD_WIDTH, MAX_BOARD_SIDE, PALETTE, TICK_RATE_HZ};
use crate::game::state::BoardSettings;

#[derive(Parser, Debug)]
#[command(name = "floodit", version, about = "Flood the board with a single color in as few moves as possible")]
pub struct Config {
    /// Board columns
    #[arg(long, default_value_t = BOARD_WIDTH, value_parser = parse_board_side)]
    pub width: usize,

    /// Board rows
    #[arg(long, default_value_t = BOARD_HEIGHT, value_parser = parse_board_side)]
    pub height: usize,

    /// Number of palette colors in play
    #[arg(long, default_value_t = PALETTE.len(), value_parser = parse_colors)]
    pub colors: usize,

    /// Simulation updates per second
    #[arg(long, default_value_t = TICK_RATE_HZ, value_parser = clap::value_parser!(u32).range(1..=240))]
    pub tick_rate: u32,

    /// Seed for reproducible boards
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs to this file (filtered by RUST_LOG)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn board_settings(&self) -> BoardSettings {
        BoardSettings {
            width: self.width,
            height: self.height,
            colors: self.colors,
        }
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn parse_in_range(value: &str, min: usize, max: usize) -> Result<usize, String> {
    let parsed: usize = value.parse().map_err(|_| format!("`{value}` is not a number"))?;
    if (min..=max).contains(&parsed) {
        Ok(parsed)
    } else {
        Err(format!("must be between {min} and {max}"))
    }
}

fn parse_board_side(value: &str) -> Result<usize, String> {
    parse_in_range(value, 1, MAX_BOARD_SIDE)
}

fn parse_colors(value: &str) -> Result<usize, String> {
    parse_in_range(value, 2, PALETTE.len())
}
