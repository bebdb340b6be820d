//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::automaton::DEFAULT_STALL_THRESHOLD;

/// Default delay between generations, in milliseconds.
pub const DEFAULT_DELAY_MS: u64 = 300;

/// CLI arguments for ncgol
#[derive(Parser, Debug, Clone)]
#[command(name = "ncgol")]
#[command(version)]
#[command(about = "Conway's Game of Life variant in the terminal", long_about = None)]
pub struct CliArgs {
    /// Delay between generations in milliseconds
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_DELAY_MS)]
    pub delay_ms: u64,

    /// Consecutive equal-population generations tolerated before reseeding
    #[arg(long, value_name = "N", default_value_t = DEFAULT_STALL_THRESHOLD)]
    pub stall_threshold: u32,

    /// Start with automatic reseeding on stall disabled
    #[arg(long)]
    pub no_auto_reset: bool,

    /// Start with the info overlay hidden
    #[arg(long)]
    pub hide_info: bool,

    /// Seed for the random number generator
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Write logs to this file
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

/// Resolved settings the shell starts from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub delay_ms: u64,
    pub stall_threshold: u32,
    pub auto_reset: bool,
    pub show_info: bool,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_DELAY_MS,
            stall_threshold: DEFAULT_STALL_THRESHOLD,
            auto_reset: true,
            show_info: true,
            seed: None,
        }
    }
}

impl From<&CliArgs> for Config {
    fn from(args: &CliArgs) -> Self {
        Self {
            // A zero delay would stop halving/doubling from doing anything
            delay_ms: args.delay_ms.max(1),
            stall_threshold: args.stall_threshold,
            auto_reset: !args.no_auto_reset,
            show_info: !args.hide_info,
            seed: args.seed,
        }
    }
}
