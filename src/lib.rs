//! # lifegrid
//!
//! Conway's Game of Life (B3/S23) on a fixed, dead-bordered board.
//!
//! ## Features
//!
//! - **Bounded**: cells beyond the edge are permanently dead, no wraparound
//! - **Double-buffered**: every step reads a padded snapshot, never the live board
//! - **File driven**: boards are plain `x,y` coordinate lists
//! - **Configurable**: YAML configuration files
//!
//! ## Quick Start
//!
//! ```rust
//! use lifegrid::{Grid, World};
//!
//! // Horizontal blinker
//! let mut grid = Grid::new(5, 5).unwrap();
//! for x in 1..=3 {
//!     grid.set(x, 2, true);
//! }
//!
//! let mut world = World::new(grid);
//! world.run(1);
//!
//! let cells: Vec<_> = world.grid().live_cells().collect();
//! assert_eq!(cells, vec![(2, 1), (2, 2), (2, 3)]);
//! ```
//!
//! ## Files
//!
//! ```rust,no_run
//! use lifegrid::{board, ShadowGrid};
//!
//! let mut grid = board::load("glider.txt", 32, 32).unwrap();
//! let mut shadow = ShadowGrid::for_grid(&grid);
//! lifegrid::world::run(&mut grid, &mut shadow, 100);
//! board::save(&grid, "glider.out").unwrap();
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod grid;
pub mod stats;
pub mod world;

// Re-export main types
pub use config::Config;
pub use error::{LifeError, Result};
pub use grid::{Grid, ShadowGrid};
pub use stats::{RunReport, StatsHistory};
pub use world::World;

use std::time::Instant;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Load the configured board, run it, and write the result.
///
/// Only the generation loop is timed.
pub fn simulate(config: &Config) -> Result<(RunReport, StatsHistory)> {
    config.validate()?;

    let sim = &config.simulation;
    let grid = board::load(&config.board.input, sim.width, sim.height)?;

    log::info!(
        "Simulating {}x{} board for {} generations ({} live cells)",
        sim.width,
        sim.height,
        sim.generations,
        grid.live_count()
    );

    let mut world = World::with_stats_interval(grid, config.logging.stats_interval);

    let start = Instant::now();
    world.run(sim.generations);
    let elapsed = start.elapsed();

    board::save(world.grid(), &config.board.output)?;
    log::info!(
        "Wrote {} live cells to {:?}",
        world.population(),
        config.board.output
    );

    let report = RunReport {
        processes: sim.processes,
        generations: world.generation(),
        elapsed_secs: elapsed.as_secs_f64(),
        final_population: world.population(),
    };

    Ok((report, world.stats_history))
}

/// Run a quick benchmark on a random board
pub fn benchmark(
    width: usize,
    height: usize,
    generations: u64,
    density: f64,
    seed: u64,
) -> Result<BenchmarkResult> {
    let grid = Grid::random(width, height, density, seed)?;
    let initial_population = grid.live_count();
    let mut world = World::new(grid);

    let start = Instant::now();
    world.run(generations);
    let elapsed = start.elapsed();

    Ok(BenchmarkResult {
        width,
        height,
        generations,
        initial_population,
        final_population: world.population(),
        elapsed_secs: elapsed.as_secs_f64(),
        generations_per_second: generations as f64 / elapsed.as_secs_f64().max(f64::EPSILON),
    })
}

/// Benchmark result
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub width: usize,
    pub height: usize,
    pub generations: u64,
    pub initial_population: usize,
    pub final_population: usize,
    pub elapsed_secs: f64,
    pub generations_per_second: f64,
}

impl std::fmt::Display for BenchmarkResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Benchmark Results ===")?;
        writeln!(f, "Board: {}x{}", self.width, self.height)?;
        writeln!(f, "Generations: {}", self.generations)?;
        writeln!(f, "Population: {} -> {}", self.initial_population, self.final_population)?;
        writeln!(f, "Time: {:.3}s", self.elapsed_secs)?;
        writeln!(f, "Speed: {:.1} generations/s", self.generations_per_second)?;
        Ok(())
    }
}
