//! Terminal setup and incremental grid drawing.

use std::io::{self, Write};

use crossterm::{
    cursor, event, execute, queue,
    style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use tilepath_core::{Coord, Grid};

use crate::palette::{glyph, Glyph};

/// Owns the terminal while the front-end runs.
///
/// Only cells whose glyph changed since the previous draw are written.
/// Dropping the screen restores the terminal.
pub struct Screen {
    mouse: bool,
    origin: (u16, u16),
    active: bool,
    prev: Vec<Option<Glyph>>,
}

impl Screen {
    /// Create a screen drawing the grid with its top-left cell at terminal
    /// `origin` (column, row). The terminal is untouched until
    /// [`init`](Self::init).
    pub fn new(mouse: bool, origin: (u16, u16)) -> Self {
        Self {
            mouse,
            origin,
            active: false,
            prev: Vec::new(),
        }
    }

    /// Enter raw mode and the alternate screen.
    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        self.active = true;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        if self.mouse {
            execute!(stdout, event::EnableMouseCapture)?;
        }
        Ok(())
    }

    /// Forget what is on screen so the next draw repaints every cell.
    pub fn invalidate(&mut self) {
        self.prev.clear();
    }

    /// Grid cell under terminal position (`column`, `row`), if any.
    pub fn cell_at(&self, grid: &Grid, column: u16, row: u16) -> Option<Coord> {
        let x = i32::from(column) - i32::from(self.origin.0);
        let y = i32::from(row) - i32::from(self.origin.1);
        grid.locate(x * grid.cell_size(), y * grid.cell_size())
    }

    /// Draw the grid, one character per cell.
    pub fn draw(&mut self, grid: &Grid) -> io::Result<()> {
        if self.prev.len() != grid.len() {
            self.prev = vec![None; grid.len()];
        }
        let mut stdout = io::stdout();
        for (i, cell) in grid.iter().enumerate() {
            let g = glyph(cell);
            if self.prev[i] == Some(g) {
                continue;
            }
            queue!(
                stdout,
                cursor::MoveTo(
                    self.origin.0 + cell.col() as u16,
                    self.origin.1 + cell.row() as u16
                ),
                SetForegroundColor(g.fg),
                SetBackgroundColor(g.bg),
                Print(g.ch)
            )?;
            self.prev[i] = Some(g);
        }
        queue!(stdout, ResetColor)?;
        stdout.flush()
    }

    /// Replace the status line just below a grid of `rows` rows.
    pub fn status(&mut self, rows: i32, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout();
        queue!(
            stdout,
            cursor::MoveTo(self.origin.0, self.origin.1 + rows.max(0) as u16 + 1),
            terminal::Clear(ClearType::CurrentLine),
            Print(text)
        )?;
        stdout.flush()
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn close(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        let mut stdout = io::stdout();
        if self.mouse {
            let _ = execute!(stdout, event::DisableMouseCapture);
        }
        let _ = execute!(stdout, ResetColor, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        self.close();
    }
}
