//! ncgol
//!
//! Conway's Game of Life variant rendered in the terminal.

use std::fs::File;
use std::process::ExitCode;

use clap::Parser;
use ncgol::config::{CliArgs, Config};

fn init_logging(args: &CliArgs) -> std::io::Result<()> {
    // stderr would land on top of the full-screen display, so logs only
    // go anywhere when a file is given
    if let Some(path) = &args.log_file {
        let file = File::create(path)?;
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init();
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    if let Err(e) = init_logging(&args) {
        eprintln!("Cannot open log file: {}", e);
        return ExitCode::FAILURE;
    }

    let config = Config::from(&args);
    log::debug!("Starting ncgol with {:?}", config);

    // The terminal session is dropped inside run(), so the screen is
    // already restored when the error is printed
    match ncgol::shell::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("ncgol: {}", e);
            ExitCode::FAILURE
        }
    }
}
