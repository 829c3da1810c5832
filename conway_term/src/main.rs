// main.rs - Terminal Game of Life
// Parses the command line, seeds the board and drives generations until
// interrupted or the generation limit is reached.

use std::io::{self, BufWriter};
use std::process::ExitCode;

use clap::Parser;
use conway::patterns::Pattern;
use conway::{GameOfLife, GridError};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

mod cancel;
mod cli;
mod driver;
mod error;
mod term;

use cancel::Cancellation;
use cli::{Cli, Settings, Start};
use driver::{Driver, Stop};
use error::{AppError, AppResult};
use term::Screen;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(&cli) {
        Ok(stop) => {
            debug!(?stop, "finished");
            ExitCode::SUCCESS
        }
        Err(err) if err.is_broken_pipe() => ExitCode::SUCCESS,
        Err(err) => {
            debug!(?err, "run failed");
            eprintln!("error: {err}");
            if let AppError::Grid(GridError::UnknownPattern { .. }) = err {
                eprintln!("known patterns: {}", Pattern::names().collect::<Vec<_>>().join(", "));
            }
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr so stdout carries nothing but frames. `RUST_LOG` overrides
/// the default `warn` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> AppResult<Stop> {
    let settings = cli.settings()?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(AppError::Runtime)?;

    runtime.block_on(simulate(settings))
}

async fn simulate(settings: Settings) -> AppResult<Stop> {
    let cancel = Cancellation::new();
    let _listener = cancel.cancel_on_ctrl_c();

    if let Err(err) = term::enable_virtual_terminal() {
        warn!(%err, "could not enable ANSI escape processing, colors may not render");
    }

    let mut life = GameOfLife::new(settings.size, settings.palette);
    match settings.start {
        Start::Random(seed) => life.seed_random(seed),
        Start::Pattern(pattern) => life.apply_pattern(pattern)?,
    }

    // Room for the whole frame plus escape codes and footer, so each
    // generation reaches the terminal in one write.
    let out = BufWriter::with_capacity(life.frame().len() + 64, io::stdout());
    let mut driver = Driver::new(life, Screen::new(out))
        .with_frame_period(settings.frame_period)
        .with_generation_limit(settings.generations)
        .with_stop_on_cycle(settings.stop_on_cycle);

    driver.run(&cancel).await
}
