//! The grid pair, random source and stall bookkeeping driven by the loop.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::automaton::{
    advance, create_grid, destroy_grid, population, randomize_grid, StallDecision, StallDetector,
};
use crate::config::Config;
use crate::error::GridError;
use crate::state::Grid;

/// Everything the engine needs between frames.
pub struct Simulation {
    live: Grid,
    snapshot: Grid,
    stall: StallDetector,
    rng: StdRng,
    population: usize,
    generation: u64,
}

impl Simulation {
    /// Allocate both grids and seed the live one.
    pub fn new(width: usize, height: usize, config: &Config) -> Result<Self, GridError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(width, height, config.stall_threshold, rng)
    }

    pub fn with_rng(
        width: usize,
        height: usize,
        stall_threshold: u32,
        rng: StdRng,
    ) -> Result<Self, GridError> {
        let live = create_grid(width, height)?;
        let snapshot = create_grid(width, height)?;

        let mut sim = Self {
            live,
            snapshot,
            stall: StallDetector::new(stall_threshold),
            rng,
            population: 0,
            generation: 0,
        };
        sim.reseed();
        Ok(sim)
    }

    /// Advance one generation. With `auto_reset` on, a stalled population
    /// reseeds the grid and the decision is returned.
    pub fn tick(&mut self, auto_reset: bool) -> Result<StallDecision, GridError> {
        self.population = advance(&mut self.live, &mut self.snapshot)?;
        self.generation += 1;

        if !auto_reset {
            return Ok(StallDecision::Continue);
        }

        let decision = self.stall.observe(self.population);
        if decision == StallDecision::Reseed {
            info!(
                "population stalled at {} after {} generations, reseeding",
                self.population, self.generation
            );
            self.reseed();
        }
        Ok(decision)
    }

    /// Randomize the live grid and start counting from scratch.
    pub fn reseed(&mut self) {
        randomize_grid(&mut self.live, &mut self.rng);
        self.stall.reset();
        self.population = population(&self.live);
        self.generation = 0;
        debug!("reseeded with {} live cells", self.population);
    }

    pub fn grid(&self) -> &Grid {
        &self.live
    }

    pub fn population(&self) -> usize {
        self.population
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn stall(&self) -> &StallDetector {
        &self.stall
    }

    /// Release both grids.
    pub fn finish(self) {
        destroy_grid(self.live);
        destroy_grid(self.snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simulation(threshold: u32) -> Simulation {
        Simulation::with_rng(12, 8, threshold, StdRng::seed_from_u64(3)).unwrap()
    }

    #[test]
    fn test_new_is_seeded() {
        let sim = simulation(100);
        assert_eq!(sim.grid().dimensions(), (12, 8));
        assert_eq!(sim.population(), population(sim.grid()));
        assert!(sim.population() > 0);
        assert_eq!(sim.generation(), 0);
    }

    #[test]
    fn test_new_from_config_seed() {
        let config = Config {
            seed: Some(11),
            ..Config::default()
        };
        let a = Simulation::new(10, 10, &config).unwrap();
        let b = Simulation::new(10, 10, &config).unwrap();
        assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn test_tick_reports_population() {
        let mut sim = simulation(100);
        sim.tick(true).unwrap();

        assert_eq!(sim.generation(), 1);
        assert_eq!(sim.population(), population(sim.grid()));
    }

    #[test]
    fn test_stall_reseeds_when_auto_reset() {
        let mut sim = simulation(0);
        // Clear the board so the population is stuck at zero
        for cell in sim.live.cells.iter_mut() {
            cell.alive = false;
            cell.age = 0;
        }

        // previous population starts at 0, so the first empty tick stalls
        assert_eq!(sim.tick(true).unwrap(), StallDecision::Reseed);
        assert!(sim.population() > 0);
        assert_eq!(sim.generation(), 0);
    }

    #[test]
    fn test_no_reseed_without_auto_reset() {
        let mut sim = simulation(0);
        for cell in sim.live.cells.iter_mut() {
            cell.alive = false;
            cell.age = 0;
        }

        for _ in 0..5 {
            assert_eq!(sim.tick(false).unwrap(), StallDecision::Continue);
        }
        assert_eq!(sim.population(), 0);
        assert_eq!(sim.stall().stall_count(), 0);
    }

    #[test]
    fn test_reseed_resets_stall() {
        let mut sim = simulation(100);
        sim.tick(true).unwrap();
        sim.reseed();
        assert_eq!(sim.stall().stall_count(), 0);
        assert_eq!(sim.stall().previous_population(), 0);
    }

    #[test]
    fn test_allocation_failure() {
        let result = Simulation::with_rng(usize::MAX, 2, 1, StdRng::seed_from_u64(0));
        assert!(matches!(result, Err(GridError::Allocation { .. })));
    }
}
