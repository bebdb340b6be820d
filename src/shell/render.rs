//! Drawing the grid, border, info bar and overlays.
//!
//! Everything here only queues commands; callers flush once per frame.
//! All drawing is clipped to the viewport passed in, so a terminal that
//! shrank after startup just shows less of the grid.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};

use super::controls::Controls;
use crate::state::{Cell, Grid};

pub const TITLE: &str = "Conway's Game Of Life";
pub const SPLASH: &str = "Press any key to continue";
pub const PAUSED: &str = "PAUSED";

pub const HELP_LINES: [&str; 8] = [
    "q, escape: quit",
    "p: pause / resume",
    "r: restart",
    "+: faster",
    "-: slower",
    "i: toggle info bar",
    "a: toggle auto-reset on stall",
    "h: show this help",
];
const HELP_FOOTER: &str = "press any key to close this window";

/// How a cell is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Blank,
    Young,
    Established,
}

impl Glyph {
    pub fn of(cell: Cell) -> Glyph {
        match (cell.alive, cell.age) {
            (false, _) => Glyph::Blank,
            (true, 0) => Glyph::Young,
            (true, _) => Glyph::Established,
        }
    }

    fn symbol(self) -> char {
        match self {
            Glyph::Blank => ' ',
            Glyph::Young => 'o',
            Glyph::Established => '@',
        }
    }

    fn color(self) -> Color {
        match self {
            Glyph::Blank => Color::Reset,
            Glyph::Young => Color::Green,
            Glyph::Established => Color::Yellow,
        }
    }
}

/// Viewport size as `(cols, rows)`.
pub type Viewport = (u16, u16);

/// Draw the grid at offset (1, 1), inside the border.
pub fn draw_grid<W: Write>(out: &mut W, grid: &Grid, viewport: Viewport) -> io::Result<()> {
    let (cols, rows) = viewport;
    // Leave the last column/row to the border
    let visible_w = grid.width.min(cols.saturating_sub(2) as usize);
    let visible_h = grid.height.min(rows.saturating_sub(2) as usize);

    for (y, row) in grid.rows().take(visible_h).enumerate() {
        queue!(out, MoveTo(1, y as u16 + 1))?;

        let mut line = String::with_capacity(visible_w);
        let mut current = None;
        for &cell in &row[..visible_w] {
            let glyph = Glyph::of(cell);
            if current != Some(glyph) && !line.is_empty() {
                flush_run(out, &mut line, current)?;
            }
            current = Some(glyph);
            line.push(glyph.symbol());
        }
        flush_run(out, &mut line, current)?;
    }

    queue!(out, ResetColor)
}

fn flush_run<W: Write>(out: &mut W, line: &mut String, glyph: Option<Glyph>) -> io::Result<()> {
    if let Some(glyph) = glyph {
        queue!(out, SetForegroundColor(glyph.color()), Print(&*line))?;
    }
    line.clear();
    Ok(())
}

/// Draw a box with its top-left corner at `(x, y)`, clipped to the viewport.
pub fn draw_box<W: Write>(
    out: &mut W,
    x: u16,
    y: u16,
    width: u16,
    height: u16,
    viewport: Viewport,
) -> io::Result<()> {
    if width < 2 || height < 2 {
        return Ok(());
    }
    let (cols, rows) = viewport;
    let right = x + width - 1;
    let bottom = y + height - 1;

    let put = |out: &mut W, cx: u16, cy: u16, ch: char| -> io::Result<()> {
        if cx < cols && cy < rows {
            queue!(out, MoveTo(cx, cy), Print(ch))?;
        }
        Ok(())
    };

    for cx in x + 1..right {
        put(out, cx, y, '─')?;
        put(out, cx, bottom, '─')?;
    }
    for cy in y + 1..bottom {
        put(out, x, cy, '│')?;
        put(out, right, cy, '│')?;
    }
    put(out, x, y, '┌')?;
    put(out, right, y, '┐')?;
    put(out, x, bottom, '└')?;
    put(out, right, bottom, '┘')
}

/// Draw the border around a grid drawn by [`draw_grid`].
pub fn draw_border<W: Write>(out: &mut W, grid: &Grid, viewport: Viewport) -> io::Result<()> {
    let width = (grid.width + 2).min(u16::MAX as usize) as u16;
    let height = (grid.height + 2).min(u16::MAX as usize) as u16;
    draw_box(out, 0, 0, width, height, viewport)
}

/// Draw the grid border in reverse video, as feedback for a restart.
pub fn draw_flash<W: Write>(out: &mut W, grid: &Grid, viewport: Viewport) -> io::Result<()> {
    queue!(out, SetAttribute(Attribute::Reverse))?;
    draw_border(out, grid, viewport)?;
    queue!(out, SetAttribute(Attribute::Reset))
}

/// Print `text` at `(x, y)`, cut at the right edge.
fn print_at<W: Write>(out: &mut W, x: u16, y: u16, text: &str, viewport: Viewport) -> io::Result<()> {
    let (cols, rows) = viewport;
    if x >= cols || y >= rows {
        return Ok(());
    }
    let room = (cols - x) as usize;
    let clipped: String = text.chars().take(room).collect();
    queue!(out, MoveTo(x, y), Print(clipped))
}

const HELP_HINT: &str = "press h for help";

/// Status bar segments as `(column, text)` for the bottom row.
///
/// Segments keep to their preferred columns but are pushed right so they
/// never overlap the previous one. The help hint is dropped when it would
/// cover the auto-reset state.
pub fn status_segments(controls: &Controls, population: usize, cols: u16) -> Vec<(u16, String)> {
    let auto = if controls.auto_reset { "on" } else { "off" };
    let wanted = [
        (1, format!("speed: {:.6}", controls.speed())),
        (
            (cols / 2).saturating_sub(10),
            format!("cells alive: {}", population),
        ),
        (
            (cols / 2).saturating_add(12),
            format!("auto-reset: {}", auto),
        ),
    ];

    let mut segments = Vec::with_capacity(wanted.len() + 1);
    let mut next_free = 1u16;
    for (preferred, text) in wanted {
        let x = preferred.max(next_free);
        next_free = x.saturating_add(text.chars().count() as u16 + 2);
        segments.push((x, text));
    }

    let hint_x = cols.saturating_sub(HELP_HINT.len() as u16 + 1);
    if hint_x >= next_free {
        segments.push((hint_x, HELP_HINT.to_string()));
    }
    segments
}

/// Draw the title and status bar over the border rows.
pub fn draw_info<W: Write>(
    out: &mut W,
    controls: &Controls,
    population: usize,
    viewport: Viewport,
) -> io::Result<()> {
    let (cols, rows) = viewport;
    print_at(out, (cols / 2).saturating_sub(10), 0, TITLE, viewport)?;

    let bottom = rows.saturating_sub(1);
    for (x, text) in status_segments(controls, population, cols) {
        print_at(out, x, bottom, &text, viewport)?;
    }
    Ok(())
}

/// Draw a bold message in the middle of the viewport.
pub fn draw_centered<W: Write>(out: &mut W, message: &str, viewport: Viewport) -> io::Result<()> {
    let (cols, rows) = viewport;
    let len = message.chars().count() as u16;
    let x = cols.saturating_sub(len) / 2;
    queue!(out, SetAttribute(Attribute::Bold))?;
    print_at(out, x, rows / 2, message, viewport)?;
    queue!(out, SetAttribute(Attribute::Reset))
}

/// Draw the help window over the center of the viewport.
pub fn draw_help<W: Write>(out: &mut W, viewport: Viewport) -> io::Result<()> {
    let (cols, rows) = viewport;
    let (x, y) = (cols / 4, rows / 4);
    let (width, height) = (cols / 2, rows / 2);

    // Blank the window area first so cells do not show through
    let blank = " ".repeat(width as usize);
    for cy in y..y + height {
        print_at(out, x, cy, &blank, viewport)?;
    }
    draw_box(out, x, y, width, height, viewport)?;

    queue!(out, SetAttribute(Attribute::Bold))?;
    print_at(out, x + (width / 2).saturating_sub(2), y + 1, "Help", viewport)?;
    queue!(out, SetAttribute(Attribute::Reset))?;

    // Keep the last inner row for the footer
    let room = height.saturating_sub(4) as usize;
    for (i, line) in HELP_LINES.iter().take(room).enumerate() {
        print_at(out, x + 2, y + 2 + i as u16, line, viewport)?;
    }
    if height >= 4 {
        let footer_x = x + (width / 2).saturating_sub(HELP_FOOTER.len() as u16 / 2);
        print_at(out, footer_x.max(x + 1), y + height - 2, HELP_FOOTER, viewport)?;
    }
    Ok(())
}
