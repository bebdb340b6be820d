//! Terminal front end.
//!
//! A thin layer over crossterm: it owns the terminal session, the grid pair
//! and the knobs, and calls into `automaton` once per generation.

pub mod controls;
pub mod input;
pub mod render;
pub mod simulation;
pub mod terminal;

use std::io::Write;
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::config::Config;
use crate::error::{AppError, Result};
use controls::{Action, Controls};
use input::Input;
use render::Viewport;
use simulation::Simulation;
use terminal::TerminalSession;

pub use controls::{MAX_DELAY_MS, MIN_DELAY_MS};
pub use input::Command;

/// How long the border stays inverted after a restart.
const FLASH_DURATION: Duration = Duration::from_millis(80);

/// Grid dimensions for a viewport: everything inside a one-cell border.
pub fn grid_size_for(viewport: Viewport) -> Result<(usize, usize)> {
    let (cols, rows) = viewport;
    if cols < 3 || rows < 3 {
        return Err(AppError::ViewportTooSmall { cols, rows });
    }
    Ok((cols as usize - 2, rows as usize - 2))
}

fn draw_frame<W: Write>(
    out: &mut W,
    sim: &Simulation,
    controls: &Controls,
    viewport: Viewport,
) -> Result<()> {
    render::draw_grid(out, sim.grid(), viewport)?;
    render::draw_border(out, sim.grid(), viewport)?;
    if controls.show_info {
        render::draw_info(out, controls, sim.population(), viewport)?;
    }
    if !controls.running {
        render::draw_centered(out, render::PAUSED, viewport)?;
    }
    if controls.show_help {
        render::draw_help(out, viewport)?;
    }
    out.flush()?;
    Ok(())
}

/// Invert the border and show it right away.
fn flash<W: Write>(out: &mut W, sim: &Simulation, viewport: Viewport) -> Result<()> {
    render::draw_flash(out, sim.grid(), viewport)?;
    out.flush()?;
    Ok(())
}

/// Run the simulation until the user quits.
pub fn run(config: &Config) -> Result<()> {
    let mut session = TerminalSession::enter()?;
    let mut viewport = session.size()?;
    let (width, height) = grid_size_for(viewport)?;
    info!("viewport {}x{}, grid {}x{}", viewport.0, viewport.1, width, height);

    let mut sim = Simulation::new(width, height, config)?;
    let mut controls = Controls::new(config);

    render::draw_centered(session.out(), render::SPLASH, viewport)?;
    session.out().flush()?;
    input::wait_for_key()?;
    session.clear()?;

    loop {
        if controls.running && !controls.show_help {
            sim.tick(controls.auto_reset)?;
        }
        draw_frame(session.out(), &sim, &controls, viewport)?;

        let deadline = Instant::now() + Duration::from_millis(controls.delay_ms);
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            match input::poll(timeout)? {
                Some(Input::Resize) => {
                    viewport = session.size()?;
                    debug!("viewport resized to {}x{}", viewport.0, viewport.1);
                    session.clear()?;
                    draw_frame(session.out(), &sim, &controls, viewport)?;
                }
                Some(Input::Key(command)) => match controls.apply(command) {
                    Action::Quit => {
                        info!("quitting after {} generations", sim.generation());
                        sim.finish();
                        return Ok(());
                    }
                    Action::Reseed => {
                        flash(session.out(), &sim, viewport)?;
                        std::thread::sleep(FLASH_DURATION);
                        sim.reseed();
                        session.clear()?;
                        draw_frame(session.out(), &sim, &controls, viewport)?;
                    }
                    Action::Redraw => {
                        session.clear()?;
                        draw_frame(session.out(), &sim, &controls, viewport)?;
                    }
                    Action::Continue => {}
                },
                None => {}
            }

            if Instant::now() >= deadline {
                break;
            }
        }
    }
}
