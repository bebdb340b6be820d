//! Keyboard polling and key bindings.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A user request, decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    TogglePause,
    Reset,
    ToggleHelp,
    Faster,
    Slower,
    ToggleInfo,
    ToggleAutoReset,
    Other,
}

/// Something that happened on the terminal while waiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Key(Command),
    Resize,
}

/// Map a key press to a command.
pub fn command_for(key: KeyEvent) -> Command {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Command::Quit;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Command::Quit,
        KeyCode::Char('p') => Command::TogglePause,
        KeyCode::Char('r') => Command::Reset,
        KeyCode::Char('h') => Command::ToggleHelp,
        KeyCode::Char('+') => Command::Faster,
        KeyCode::Char('-') => Command::Slower,
        KeyCode::Char('i') => Command::ToggleInfo,
        KeyCode::Char('a') => Command::ToggleAutoReset,
        _ => Command::Other,
    }
}

/// Wait up to `timeout` for a key press or a resize.
pub fn poll(timeout: Duration) -> io::Result<Option<Input>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        // Only presses; some platforms also report releases
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(Input::Key(command_for(key)))),
        Event::Resize(_, _) => Ok(Some(Input::Resize)),
        _ => Ok(None),
    }
}

/// Block until any key is pressed.
pub fn wait_for_key() -> io::Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}
