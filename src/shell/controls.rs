//! Interactive knobs owned by the control loop.

use log::info;

use super::input::Command;
use crate::config::Config;

/// Fastest allowed pace, in milliseconds per generation.
pub const MIN_DELAY_MS: u64 = 1;
/// Slowest allowed pace, in milliseconds per generation.
pub const MAX_DELAY_MS: u64 = 10_000;

/// What the control loop must do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    Redraw,
    Reseed,
    Quit,
}

/// Simulation knobs consulted by the loop, never by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Controls {
    pub delay_ms: u64,
    pub default_delay_ms: u64,
    pub running: bool,
    pub show_info: bool,
    pub auto_reset: bool,
    pub show_help: bool,
}

impl Controls {
    pub fn new(config: &Config) -> Self {
        let delay_ms = config.delay_ms.clamp(MIN_DELAY_MS, MAX_DELAY_MS);
        Self {
            delay_ms,
            default_delay_ms: delay_ms,
            running: true,
            show_info: config.show_info,
            auto_reset: config.auto_reset,
            show_help: false,
        }
    }

    /// Generations per millisecond, as shown in the info bar.
    pub fn speed(&self) -> f64 {
        1.0 / self.delay_ms as f64
    }

    /// Apply a command. While the help window is open any key just closes it.
    pub fn apply(&mut self, command: Command) -> Action {
        if self.show_help {
            self.show_help = false;
            return Action::Redraw;
        }

        match command {
            Command::Quit => Action::Quit,
            Command::TogglePause => {
                self.running = !self.running;
                info!("simulation {}", if self.running { "resumed" } else { "paused" });
                Action::Redraw
            }
            Command::Reset => {
                self.delay_ms = self.default_delay_ms;
                info!("manual reset, delay back to {} ms", self.delay_ms);
                Action::Reseed
            }
            Command::ToggleHelp => {
                self.show_help = true;
                Action::Redraw
            }
            Command::Faster => {
                self.delay_ms = (self.delay_ms / 2).max(MIN_DELAY_MS);
                info!("delay now {} ms", self.delay_ms);
                Action::Redraw
            }
            Command::Slower => {
                self.delay_ms = self.delay_ms.saturating_mul(2).min(MAX_DELAY_MS);
                info!("delay now {} ms", self.delay_ms);
                Action::Redraw
            }
            Command::ToggleInfo => {
                self.show_info = !self.show_info;
                Action::Redraw
            }
            Command::ToggleAutoReset => {
                self.auto_reset = !self.auto_reset;
                info!("auto-reset {}", if self.auto_reset { "on" } else { "off" });
                Action::Redraw
            }
            Command::Other => Action::Continue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controls() -> Controls {
        Controls::new(&Config::default())
    }

    #[test]
    fn test_new_from_config() {
        let c = controls();
        assert_eq!(c.delay_ms, 300);
        assert_eq!(c.default_delay_ms, 300);
        assert!(c.running);
        assert!(c.show_info);
        assert!(c.auto_reset);
        assert!(!c.show_help);
    }

    #[test]
    fn test_new_clamps_delay() {
        let config = Config {
            delay_ms: 1_000_000,
            ..Config::default()
        };
        assert_eq!(Controls::new(&config).delay_ms, MAX_DELAY_MS);
    }

    #[test]
    fn test_pause_toggles() {
        let mut c = controls();
        assert_eq!(c.apply(Command::TogglePause), Action::Redraw);
        assert!(!c.running);
        c.apply(Command::TogglePause);
        assert!(c.running);
    }

    #[test]
    fn test_faster_and_slower() {
        let mut c = controls();
        c.apply(Command::Faster);
        assert_eq!(c.delay_ms, 150);
        c.apply(Command::Slower);
        c.apply(Command::Slower);
        assert_eq!(c.delay_ms, 600);
    }

    #[test]
    fn test_delay_is_clamped() {
        let mut c = controls();
        for _ in 0..20 {
            c.apply(Command::Faster);
        }
        assert_eq!(c.delay_ms, MIN_DELAY_MS);

        for _ in 0..40 {
            c.apply(Command::Slower);
        }
        assert_eq!(c.delay_ms, MAX_DELAY_MS);
    }

    #[test]
    fn test_reset_restores_delay() {
        let mut c = controls();
        c.apply(Command::Faster);
        c.apply(Command::Faster);
        assert_eq!(c.apply(Command::Reset), Action::Reseed);
        assert_eq!(c.delay_ms, 300);
    }

    #[test]
    fn test_help_swallows_next_key() {
        let mut c = controls();
        c.apply(Command::ToggleHelp);
        assert!(c.show_help);

        // Quit only closes the help window
        assert_eq!(c.apply(Command::Quit), Action::Redraw);
        assert!(!c.show_help);
        assert_eq!(c.apply(Command::Quit), Action::Quit);
    }

    #[test]
    fn test_toggles() {
        let mut c = controls();
        c.apply(Command::ToggleInfo);
        c.apply(Command::ToggleAutoReset);
        assert!(!c.show_info);
        assert!(!c.auto_reset);
        assert_eq!(c.apply(Command::Other), Action::Continue);
    }

    #[test]
    fn test_speed() {
        let mut c = controls();
        c.delay_ms = 4;
        assert_eq!(c.speed(), 0.25);
    }
}
