mod config;
mod grid;
mod render;
mod sim;

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};

use crate::config::Config;
use crate::grid::Grid;
use crate::render::{TermGuard, TermRenderer, TickClock};
use crate::sim::{SimHandle, Simulator};

#[derive(Parser)]
struct Args {
    /// grid columns
    #[arg(long, default_value_t = 25)]
    width: usize,

    /// grid rows
    #[arg(long, default_value_t = 15)]
    height: usize,

    /// probability that a cell starts live
    #[arg(long, default_value_t = 0.15)]
    density: f64,

    /// milliseconds between generations
    #[arg(long, default_value_t = 100)]
    ms: u64,

    /// seed for the initial pattern (defaults to wall clock)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config {
        width: args.width,
        height: args.height,
        density: args.density,
        tick: Duration::from_millis(args.ms),
    };

    let seed = match args.seed {
        Some(seed) => seed,
        None => SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs(),
    };
    let mut rng = StdRng::seed_from_u64(seed);
    let grid = Grid::random(config.width, config.height, config.density, &mut rng)?;

    let guard = TermGuard::new()?;
    let handle = SimHandle::new();
    let renderer = TermRenderer::stdout();
    let clock = TickClock::new(handle.clone());

    let mut sim = Simulator::new(&config, grid, renderer, clock, handle);
    sim.run()?;

    let generations = sim.generations();
    let population = sim.population();
    drop(guard);
    println!("{generations} generations, {population} cells live");
    Ok(())
}
