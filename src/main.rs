//! lifegrid - CLI Entry Point
//!
//! Bounded Game of Life runs over coordinate-list board files.

use clap::{Parser, Subcommand};
use log::LevelFilter;
use lifegrid::{benchmark, simulate, Config, RunReport, StatsHistory};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "lifegrid")]
#[command(version)]
#[command(about = "Conway's Game of Life on a fixed, dead-bordered board")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a board file for a number of generations
    Run {
        /// Input file with one `x,y` live cell per line
        input: PathBuf,

        /// Output file for the final live cells
        output: PathBuf,

        /// Board width (x range)
        width: usize,

        /// Board height (y range)
        height: usize,

        /// Number of generations to simulate
        generations: u64,

        /// Process count, reported in the summary only
        #[arg(default_value = "1")]
        processes: usize,

        /// Write per-generation statistics as JSON
        #[arg(long)]
        stats: Option<PathBuf>,

        /// Quiet mode (warnings and errors only)
        #[arg(short, long)]
        quiet: bool,
    },

    /// Run using a YAML configuration file
    Simulate {
        /// Configuration file (YAML)
        #[arg(short, long, default_value = "lifegrid.yaml")]
        config: PathBuf,

        /// Write per-generation statistics as JSON
        #[arg(long)]
        stats: Option<PathBuf>,
    },

    /// Generate default configuration file
    Init {
        /// Output path
        #[arg(short, long, default_value = "lifegrid.yaml")]
        output: PathBuf,
    },

    /// Time a random board
    Benchmark {
        #[arg(long, default_value = "256")]
        width: usize,

        #[arg(long, default_value = "256")]
        height: usize,

        #[arg(short, long, default_value = "1000")]
        generations: u64,

        /// Fraction of cells alive at start
        #[arg(short, long, default_value = "0.3")]
        density: f64,

        /// Random seed for reproducibility
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}

fn main() {
    let cli = Cli::parse();

    // Logging is up before anything can fail
    init_logging(startup_level(&cli.command));

    let result = match cli.command {
        Commands::Run {
            input,
            output,
            width,
            height,
            generations,
            processes,
            stats,
            quiet: _,
        } => Config::from_args(input, output, width, height, generations, processes)
            .and_then(|config| run_config(&config, stats.as_deref())),

        Commands::Simulate { config, stats } => Config::from_file(&config).and_then(|config| {
            apply_config_level(&config.logging.log_level);
            run_config(&config, stats.as_deref())
        }),

        Commands::Init { output } => generate_config(&output),

        Commands::Benchmark {
            width,
            height,
            generations,
            density,
            seed,
        } => run_benchmark(width, height, generations, density, seed),
    };

    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn startup_level(command: &Commands) -> LevelFilter {
    match command {
        Commands::Run { quiet: true, .. } => LevelFilter::Warn,
        _ => LevelFilter::Info,
    }
}

/// Install the logger. `RUST_LOG` wins over `default_level` when set.
fn init_logging(default_level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Trace)
        .parse_default_env()
        .init();
    set_default_level(default_level);
}

fn set_default_level(level: LevelFilter) {
    if std::env::var_os(env_logger::DEFAULT_FILTER_ENV).is_none() {
        log::set_max_level(level);
    }
}

fn apply_config_level(level: &str) {
    match level.parse::<LevelFilter>() {
        Ok(level) => set_default_level(level),
        Err(_) => log::warn!("Unknown log_level {:?}, keeping info", level),
    }
}

fn run_config(config: &Config, stats_path: Option<&Path>) -> lifegrid::Result<()> {
    let (report, history) = simulate(config)?;

    if let Some(path) = stats_path {
        save_history(&history, path)?;
    }

    print_report(&report);
    Ok(())
}

fn save_history(history: &StatsHistory, path: &Path) -> lifegrid::Result<()> {
    history.save(path)?;
    log::info!(
        "Stats history ({} snapshots): {:?}",
        history.snapshots.len(),
        path
    );
    Ok(())
}

fn print_report(report: &RunReport) {
    log::info!(
        "{} generations, {} live cells, {:.1} generations/s",
        report.generations,
        report.final_population,
        report.generations_per_second()
    );
    println!("{}", report);
}

fn generate_config(output: &Path) -> lifegrid::Result<()> {
    let config = Config::default();
    config.save(output)?;
    println!("Configuration saved to: {:?}", output);
    Ok(())
}

fn run_benchmark(
    width: usize,
    height: usize,
    generations: u64,
    density: f64,
    seed: u64,
) -> lifegrid::Result<()> {
    let result = benchmark(width, height, generations, density, seed)?;
    println!("{}", result);
    Ok(())
}
