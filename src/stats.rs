//! Statistics tracking for the simulation.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Statistics snapshot for one generation
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Generations completed so far
    pub generation: u64,
    /// Live cells on the board
    pub population: usize,
    /// Cells born during the last step
    pub births: usize,
    /// Cells that died during the last step
    pub deaths: usize,
}

impl Stats {
    /// Create new empty stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Format stats as a one-line summary
    pub fn summary(&self) -> String {
        format!(
            "Gen:{:6} | Pop:{:6} | Born:{:5} | Died:{:5}",
            self.generation, self.population, self.births, self.deaths
        )
    }
}

/// Historical statistics tracker
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StatsHistory {
    /// All recorded stats snapshots
    pub snapshots: Vec<Stats>,
    /// Recording interval in generations, 0 disables recording
    pub interval: u64,
}

impl StatsHistory {
    /// Create new history with recording interval
    pub fn new(interval: u64) -> Self {
        Self {
            snapshots: Vec::new(),
            interval,
        }
    }

    /// Whether a snapshot is due at `generation`
    pub fn is_due(&self, generation: u64) -> bool {
        self.interval > 0 && generation % self.interval == 0
    }

    /// Record a stats snapshot
    pub fn record(&mut self, stats: Stats) {
        self.snapshots.push(stats);
    }

    /// Get population over time
    pub fn population_series(&self) -> Vec<(u64, usize)> {
        self.snapshots
            .iter()
            .map(|s| (s.generation, s.population))
            .collect()
    }

    /// Save history to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| crate::LifeError::FileWrite {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Summary of a finished run, printed by the CLI
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Requested process count (informational only)
    pub processes: usize,
    pub generations: u64,
    pub elapsed_secs: f64,
    pub final_population: usize,
}

impl RunReport {
    pub fn generations_per_second(&self) -> f64 {
        if self.elapsed_secs > 0.0 {
            self.generations as f64 / self.elapsed_secs
        } else {
            0.0
        }
    }
}

impl std::fmt::Display for RunReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} processors took {:.4} s",
            self.processes, self.elapsed_secs
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_interval() {
        let history = StatsHistory::new(10);
        assert!(history.is_due(0));
        assert!(!history.is_due(5));
        assert!(history.is_due(20));

        let disabled = StatsHistory::new(0);
        assert!(!disabled.is_due(0));
        assert!(!disabled.is_due(10));
    }

    #[test]
    fn test_population_series() {
        let mut history = StatsHistory::new(1);
        history.record(Stats { generation: 0, population: 3, ..Stats::new() });
        history.record(Stats { generation: 1, population: 5, births: 2, deaths: 0 });

        assert_eq!(history.population_series(), vec![(0, 3), (1, 5)]);
    }

    #[test]
    fn test_report_line() {
        let report = RunReport {
            processes: 4,
            generations: 100,
            elapsed_secs: 0.5,
            final_population: 12,
        };
        assert_eq!(report.to_string(), "4 processors took 0.5000 s");
        assert_eq!(report.generations_per_second(), 200.0);
    }

    #[test]
    fn test_summary_contains_counts() {
        let stats = Stats { generation: 42, population: 17, births: 3, deaths: 1 };
        let line = stats.summary();
        assert!(line.contains("42"));
        assert!(line.contains("17"));
    }
}
