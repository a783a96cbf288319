//! Simulation engine: B3/S23 generation stepping over a double-buffered grid.

use crate::grid::{Grid, ShadowGrid, ALIVE, DEAD};
use crate::stats::{Stats, StatsHistory};

/// Cell changes made by one step
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Transitions {
    pub births: usize,
    pub deaths: usize,
}

/// What the rule does to one cell, given its snapshot state and neighbor count
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Fate {
    Born,
    Dies,
    Unchanged,
}

#[inline]
fn fate(state: u8, neighbors: u8) -> Fate {
    match (state, neighbors) {
        (DEAD, 3) => Fate::Born,
        (ALIVE, n) if !(2..=3).contains(&n) => Fate::Dies,
        _ => Fate::Unchanged,
    }
}

/// Apply the rule at padded position (i, j), reading only `shadow`
#[inline]
fn apply_rule(grid: &mut Grid, shadow: &ShadowGrid, i: usize, j: usize) -> Fate {
    let outcome = fate(shadow.get(i, j), shadow.neighbors(i, j));
    match outcome {
        Fate::Born => grid.set(i - 1, j - 1, true),
        Fate::Dies => grid.set(i - 1, j - 1, false),
        // Grid already holds the carried-over value
        Fate::Unchanged => {}
    }
    outcome
}

fn advance(grid: &mut Grid, shadow: &mut ShadowGrid) -> Transitions {
    shadow.capture(grid);

    let mut transitions = Transitions::default();
    for i in 1..=grid.width() {
        for j in 1..=grid.height() {
            match apply_rule(grid, shadow, i, j) {
                Fate::Born => transitions.births += 1,
                Fate::Dies => transitions.deaths += 1,
                Fate::Unchanged => {}
            }
        }
    }
    transitions
}

/// Advance `grid` by one generation.
///
/// `shadow` must have been allocated for `grid`'s dimensions; its contents
/// are overwritten with the pre-step snapshot.
///
/// # Panics
///
/// Panics if `shadow` was sized for a different board.
pub fn step(grid: &mut Grid, shadow: &mut ShadowGrid) {
    advance(grid, shadow);
}

/// Advance `grid` by `generations` steps. Zero generations leaves it untouched.
///
/// # Panics
///
/// Panics if `shadow` was sized for a different board and `generations > 0`.
pub fn run<'g>(grid: &'g mut Grid, shadow: &mut ShadowGrid, generations: u64) -> &'g Grid {
    for _ in 0..generations {
        step(grid, shadow);
    }
    grid
}

/// A board together with its shadow buffer and run statistics
pub struct World {
    grid: Grid,
    shadow: ShadowGrid,

    // State
    generation: u64,

    // Statistics
    pub stats: Stats,
    pub stats_history: StatsHistory,
}

impl World {
    /// Create a world that records no stats history
    pub fn new(grid: Grid) -> Self {
        Self::with_stats_interval(grid, 0)
    }

    /// Create a world recording a stats snapshot every `interval` generations
    pub fn with_stats_interval(grid: Grid, interval: u64) -> Self {
        let shadow = ShadowGrid::for_grid(&grid);
        let stats = Stats {
            population: grid.live_count(),
            ..Stats::new()
        };

        let mut stats_history = StatsHistory::new(interval);
        if stats_history.is_due(0) {
            stats_history.record(stats.clone());
        }

        Self {
            grid,
            shadow,
            generation: 0,
            stats,
            stats_history,
        }
    }

    /// Execute one generation
    pub fn step(&mut self) {
        let transitions = advance(&mut self.grid, &mut self.shadow);
        self.generation += 1;
        self.update_stats(transitions);
    }

    fn update_stats(&mut self, transitions: Transitions) {
        self.stats.generation = self.generation;
        self.stats.births = transitions.births;
        self.stats.deaths = transitions.deaths;
        self.stats.population = self.stats.population + transitions.births - transitions.deaths;

        if self.stats_history.is_due(self.generation) {
            self.stats_history.record(self.stats.clone());
            log::debug!("{}", self.stats.summary());
        }
    }

    /// Run simulation for the given number of generations
    pub fn run(&mut self, generations: u64) {
        for _ in 0..generations {
            self.step();
        }
    }

    /// Run simulation with callback after every generation
    pub fn run_with_callback<F>(&mut self, generations: u64, mut callback: F)
    where
        F: FnMut(&World, u64),
    {
        for i in 0..generations {
            self.step();
            callback(self, i);
        }
    }

    /// Generations completed
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Current live cell count
    pub fn population(&self) -> usize {
        self.stats.population
    }

    /// Check if every cell is dead
    pub fn is_extinct(&self) -> bool {
        self.population() == 0
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }
}
