//! Crossterm front-end for tilepath.
//!
//! Provides an interactive editor for authoring grids with the mouse and an
//! animated run of the search, repainting the terminal after every
//! expansion.
//!
//! ```no_run
//! use std::time::Duration;
//! use tilepath_core::Grid;
//! use tilepath_term::TermConfig;
//!
//! let config = TermConfig::new().with_step_delay(Duration::from_millis(5));
//! let grid = tilepath_term::run(Grid::new(20, 1), &config)?;
//! # Ok::<(), std::io::Error>(())
//! ```

mod editor;
mod observer;
mod palette;
mod screen;

use std::time::Duration;

pub use editor::{run, Editor};
pub use observer::TermObserver;
pub use palette::{glyph, render_text, Glyph};
pub use screen::Screen;

/// Settings of the terminal front-end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermConfig {
    /// Pause after each animation frame.
    pub step_delay: Duration,
    /// Capture the mouse for editing.
    pub mouse: bool,
    /// Terminal position (column, row) of the grid's top-left cell.
    pub origin: (u16, u16),
}

impl TermConfig {
    pub fn new() -> Self {
        Self {
            step_delay: Duration::from_millis(10),
            mouse: true,
            origin: (0, 0),
        }
    }

    pub fn with_step_delay(mut self, delay: Duration) -> Self {
        self.step_delay = delay;
        self
    }

    pub fn with_mouse(mut self, enabled: bool) -> Self {
        self.mouse = enabled;
        self
    }

    pub fn with_origin(mut self, column: u16, row: u16) -> Self {
        self.origin = (column, row);
        self
    }
}

impl Default for TermConfig {
    fn default() -> Self {
        Self::new()
    }
}
