//! Run configuration.
//!
//! Supports YAML configuration files with sensible defaults.

use crate::error::{LifeError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub board: BoardConfig,
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Input and output board files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Coordinate list with the initial live cells
    pub input: PathBuf,
    /// Destination for the final live cells
    pub output: PathBuf,
}

/// Board dimensions and run length
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of rows (x range)
    pub width: usize,
    /// Number of columns (y range)
    pub height: usize,
    /// Generations to simulate
    pub generations: u64,
    /// Reported in the run summary; stepping is always sequential
    #[serde(default = "default_processes")]
    pub processes: usize,
}

/// Logging and statistics configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Generations between stats snapshots, 0 disables
    pub stats_interval: u64,
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

fn default_processes() -> usize {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board: BoardConfig::default(),
            simulation: SimulationConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("board.txt"),
            output: PathBuf::from("board.out"),
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            generations: 100,
            processes: default_processes(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            stats_interval: 10,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Build a configuration from already-parsed command line values
    pub fn from_args(
        input: PathBuf,
        output: PathBuf,
        width: usize,
        height: usize,
        generations: u64,
        processes: usize,
    ) -> Result<Self> {
        let config = Self {
            board: BoardConfig { input, output },
            simulation: SimulationConfig {
                width,
                height,
                generations,
                processes,
            },
            logging: LoggingConfig::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| LifeError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml).map_err(|source| LifeError::FileWrite {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.simulation.width == 0 {
            return Err(LifeError::invalid_dimension("width", "must be > 0"));
        }
        if self.simulation.height == 0 {
            return Err(LifeError::invalid_dimension("height", "must be > 0"));
        }
        if self.simulation.processes == 0 {
            return Err(LifeError::invalid_dimension("processes", "must be > 0"));
        }
        Ok(())
    }
}
