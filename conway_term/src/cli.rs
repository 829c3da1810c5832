use std::time::Duration;

use clap::Parser;
use conway::patterns::Pattern;
use conway::{seed, GridSize, Palette, MAX_DIMENSION};

use crate::error::AppResult;

const MAX_FPS: i64 = 4800;

#[derive(Parser, Debug)]
#[command(
    name = "conway_term",
    version,
    about = "Conway's Game of Life on a wrap-around grid, drawn with ANSI colors",
    long_about = "Conway's Game of Life on a wrap-around grid, drawn with ANSI colors.\n\n\
                  Cells born this generation are green, cells that just died are red.\n\n\
                  Examples:\n  conway_term 25 50 5        25 tall, 50 wide, at most 5 generations per second\n  \
                  conway_term --bw 25 50 10  black and white only\n  \
                  conway_term 40 80 0        uncapped frame rate"
)]
pub struct Cli {
    /// Draw cells in black and white only, without red and green change colors.
    #[arg(long = "bw", visible_alias = "monochrome")]
    pub monochrome: bool,

    /// Grid height in cells.
    #[arg(value_parser = clap::value_parser!(u16).range(1..=MAX_DIMENSION as i64))]
    pub height: u16,

    /// Grid width in cells.
    #[arg(value_parser = clap::value_parser!(u16).range(1..=MAX_DIMENSION as i64))]
    pub width: u16,

    /// Maximum generations per second; 0 leaves the frame rate uncapped.
    #[arg(value_parser = clap::value_parser!(u16).range(0..=MAX_FPS))]
    pub max_fps: u16,

    /// Stop after this many generations; 0 runs until interrupted.
    #[arg(long, default_value_t = 50_000)]
    pub generations: u64,

    /// Seed for the random starting board. Defaults to one taken from the clock.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start from a named pattern instead of random cells.
    #[arg(long, conflicts_with = "seed")]
    pub pattern: Option<String>,

    /// Stop once the board repeats a recent state.
    #[arg(long)]
    pub stop_on_cycle: bool,
}

/// How the board is filled before the first generation.
#[derive(Debug, Clone, Copy)]
pub enum Start {
    Random(u64),
    Pattern(&'static Pattern),
}

/// Validated run configuration.
#[derive(Debug, Clone)]
pub struct Settings {
    pub size: GridSize,
    pub palette: Palette,
    pub frame_period: Option<Duration>,
    pub generations: Option<u64>,
    pub start: Start,
    pub stop_on_cycle: bool,
}

impl Cli {
    pub fn settings(&self) -> AppResult<Settings> {
        let size = GridSize::new(usize::from(self.height), usize::from(self.width))?;
        let start = match &self.pattern {
            Some(name) => Start::Pattern(Pattern::find(name)?),
            None => Start::Random(self.seed.unwrap_or_else(seed::clock_seed)),
        };

        Ok(Settings {
            size,
            palette: Palette::select(self.monochrome),
            frame_period: frame_period(self.max_fps),
            generations: (self.generations > 0).then_some(self.generations),
            start,
            stop_on_cycle: self.stop_on_cycle,
        })
    }
}

fn frame_period(max_fps: u16) -> Option<Duration> {
    (max_fps > 0).then(|| Duration::from_nanos(1_000_000_000 / u64::from(max_fps)))
}
