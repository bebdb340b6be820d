//! Terminal session setup and teardown.

use std::io::{self, Stdout, Write};

use crossterm::{cursor, execute, terminal};
use log::{debug, warn};

/// Holds the terminal in raw mode on the alternate screen.
/// Dropping it restores the terminal, on every exit path.
pub struct TerminalSession {
    out: Stdout,
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        if let Err(e) = execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(terminal::ClearType::All)
        ) {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }
        debug!("terminal session started");
        Ok(Self { out })
    }

    /// Current viewport as `(cols, rows)`.
    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    pub fn out(&mut self) -> &mut Stdout {
        &mut self.out
    }

    pub fn clear(&mut self) -> io::Result<()> {
        execute!(self.out, terminal::Clear(terminal::ClearType::All))
    }
}

/// Undo the session setup. Each step runs even if an earlier one failed,
/// so a broken screen switch never leaves the shell in raw mode.
fn restore<W, F>(out: &mut W, disable_raw_mode: F) -> Vec<io::Error>
where
    W: Write,
    F: FnOnce() -> io::Result<()>,
{
    let steps = [
        execute!(out, cursor::Show, terminal::LeaveAlternateScreen),
        disable_raw_mode(),
        out.flush(),
    ];
    steps.into_iter().filter_map(|step| step.err()).collect()
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let errors = restore(&mut self.out, terminal::disable_raw_mode);
        if errors.is_empty() {
            debug!("terminal restored");
        }
        for e in errors {
            warn!("failed to restore terminal: {}", e);
        }
    }
}
