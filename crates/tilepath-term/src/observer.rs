//! Search animation: an [`Observer`] that repaints the terminal each step.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use tilepath_core::{CancelToken, Coord, Grid};
use tilepath_search::{Frontier, Observer};

use crate::screen::Screen;

/// Whether a key event asks to abandon the current activity.
pub(crate) fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Repaints the grid after every expansion and polls the keyboard for a
/// quit key, which signals the search's cancel token.
///
/// Drawing is best effort: the first I/O error is kept, logged, and ends
/// further drawing, but never aborts the search itself.
pub struct TermObserver<'a> {
    screen: &'a mut Screen,
    cancel: CancelToken,
    delay: Duration,
    steps: usize,
    error: Option<io::Error>,
}

impl<'a> TermObserver<'a> {
    pub fn new(screen: &'a mut Screen, cancel: CancelToken, delay: Duration) -> Self {
        Self {
            screen,
            cancel,
            delay,
            steps: 0,
            error: None,
        }
    }

    /// Expansions observed so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// The drawing error that stopped the animation, if any.
    pub fn into_error(self) -> Option<io::Error> {
        self.error
    }

    fn repaint(&mut self, grid: &Grid) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.screen.draw(grid).and_then(|()| self.poll_quit()) {
            log::warn!("term: drawing failed, animation stopped: {e}");
            self.error = Some(e);
            return;
        }
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
    }

    fn poll_quit(&self) -> io::Result<()> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if is_quit(&key) {
                    log::debug!("term: quit requested during search");
                    self.cancel.cancel();
                }
            }
        }
        Ok(())
    }
}

impl Observer for TermObserver<'_> {
    fn on_step(&mut self, grid: &Grid, _current: Coord, _frontier: &Frontier) {
        self.steps += 1;
        self.repaint(grid);
    }

    fn on_path(&mut self, grid: &Grid, _cell: Coord) {
        self.repaint(grid);
    }
}
