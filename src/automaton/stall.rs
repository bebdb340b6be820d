//! Stall detection over successive population counts.

/// Number of consecutive equal populations tolerated before reseeding.
pub const DEFAULT_STALL_THRESHOLD: u32 = 100;

/// Outcome of observing one generation's population.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StallDecision {
    Continue,
    Reseed,
}

/// Tracks runs of unchanged population.
///
/// The detector only decides; reseeding the grid and gating on the
/// auto-reset toggle are left to the caller.
#[derive(Debug, Clone)]
pub struct StallDetector {
    previous_population: usize,
    stall_count: u32,
    stall_threshold: u32,
}

impl Default for StallDetector {
    fn default() -> Self {
        Self::new(DEFAULT_STALL_THRESHOLD)
    }
}

impl StallDetector {
    pub fn new(stall_threshold: u32) -> Self {
        Self {
            previous_population: 0,
            stall_count: 0,
            stall_threshold,
        }
    }

    /// Record a population and decide whether the simulation has stalled.
    pub fn observe(&mut self, current_population: usize) -> StallDecision {
        let mut decision = StallDecision::Continue;

        if current_population == self.previous_population {
            self.stall_count += 1;
            if self.stall_count > self.stall_threshold {
                decision = StallDecision::Reseed;
                self.stall_count = 0;
            }
        } else {
            self.stall_count = 0;
        }

        self.previous_population = current_population;
        decision
    }

    /// Forget all history, keeping the threshold.
    pub fn reset(&mut self) {
        self.previous_population = 0;
        self.stall_count = 0;
    }

    pub fn stall_count(&self) -> u32 {
        self.stall_count
    }

    pub fn stall_threshold(&self) -> u32 {
        self.stall_threshold
    }

    pub fn previous_population(&self) -> usize {
        self.previous_population
    }
}
