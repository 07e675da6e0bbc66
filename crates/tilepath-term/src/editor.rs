//! Interactive grid editor: mouse authoring plus on-demand search.
//!
//! Controls:
//!
//! | Input | Action |
//! |---|---|
//! | left click / drag | place start, then end, then obstacles |
//! | right click / drag | clear the cell (and its role) |
//! | `space` | run the search once start and end exist |
//! | `c` | rebuild an empty grid |
//! | `q`, `Esc`, `Ctrl-C` | quit, cancelling a running search first |

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use tilepath_core::{CancelToken, Coord, Grid, GridError};
use tilepath_search::{find_marked_path, PathResult, SearchError};

use crate::TermConfig;
use crate::observer::{is_quit, TermObserver};
use crate::screen::Screen;

const HINT: &str = "left: start/end/wall  right: clear  space: search  c: reset  q: quit";

/// Grid authoring rules of the editor, independent of the terminal.
#[derive(Debug, Clone)]
pub struct Editor {
    grid: Grid,
}

impl Editor {
    pub fn new(grid: Grid) -> Self {
        Self { grid }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Primary action on `c`: the first free role is assigned (start, then
    /// end); once both exist, other cells become obstacles. Endpoints are
    /// never overwritten.
    pub fn primary(&mut self, c: Coord) -> Result<(), GridError> {
        let on_start = self.grid.start() == Some(c);
        let on_end = self.grid.end() == Some(c);
        if self.grid.start().is_none() && !on_end {
            self.grid.set_start(c)
        } else if self.grid.end().is_none() && !on_start {
            self.grid.set_end(c)
        } else if !on_start && !on_end {
            self.grid.set_obstacle(c, true)
        } else {
            Ok(())
        }
    }

    /// Secondary action on `c`: reset it to empty, dropping any role.
    pub fn secondary(&mut self, c: Coord) -> Result<(), GridError> {
        self.grid.clear(c)
    }

    /// Discard the whole layout.
    pub fn reset(&mut self) {
        self.grid.rebuild();
    }

    /// Clear old marks and search between the current endpoints.
    pub fn search(
        &mut self,
        observer: &mut TermObserver<'_>,
        cancel: &CancelToken,
    ) -> Result<PathResult, SearchError> {
        self.grid.reset_marks();
        find_marked_path(&mut self.grid, observer, cancel)
    }
}

fn describe(result: &Result<PathResult, SearchError>, steps: usize) -> String {
    match result {
        Ok(PathResult::Found(path)) => {
            format!("found: {} steps ({steps} expansions)", path.steps())
        }
        Ok(PathResult::NotFound) => format!("no path ({steps} expansions)"),
        Ok(PathResult::Cancelled) => format!("cancelled after {steps} expansions"),
        Err(e) => e.to_string(),
    }
}

/// Run the interactive editor until the user quits, returning the final
/// grid.
pub fn run(grid: Grid, config: &TermConfig) -> io::Result<Grid> {
    let mut screen = Screen::new(config.mouse, config.origin);
    screen.init()?;
    let mut editor = Editor::new(grid);
    let rows = editor.grid().rows();

    screen.draw(editor.grid())?;
    screen.status(rows, HINT)?;

    loop {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if is_quit(&key) {
                    break;
                }
                match key.code {
                    KeyCode::Char(' ') => {
                        let cancel = CancelToken::new();
                        let mut observer =
                            TermObserver::new(&mut screen, cancel.clone(), config.step_delay);
                        let result = editor.search(&mut observer, &cancel);
                        let steps = observer.steps();
                        if let Some(e) = observer.into_error() {
                            return Err(e);
                        }
                        // a quit key during the animation leaves the editor too
                        if matches!(result, Ok(PathResult::Cancelled)) {
                            break;
                        }
                        screen.draw(editor.grid())?;
                        screen.status(rows, &describe(&result, steps))?;
                    }
                    KeyCode::Char('c') => {
                        editor.reset();
                        screen.draw(editor.grid())?;
                        screen.status(rows, HINT)?;
                    }
                    _ => {}
                }
            }
            Event::Mouse(me) => {
                let Some(c) = screen.cell_at(editor.grid(), me.column, me.row) else {
                    continue;
                };
                let edited = match me.kind {
                    MouseEventKind::Down(MouseButton::Left)
                    | MouseEventKind::Drag(MouseButton::Left) => editor.primary(c),
                    MouseEventKind::Down(MouseButton::Right)
                    | MouseEventKind::Drag(MouseButton::Right) => editor.secondary(c),
                    _ => continue,
                };
                if let Err(e) = edited {
                    log::debug!("editor: {e}");
                }
                screen.draw(editor.grid())?;
            }
            Event::Resize(..) => {
                screen.invalidate();
                screen.draw(editor.grid())?;
                screen.status(rows, HINT)?;
            }
            _ => {}
        }
    }

    screen.close();
    Ok(editor.into_grid())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(row: i32, col: i32) -> Coord {
        Coord::new(row, col)
    }

    #[test]
    fn clicks_place_start_end_then_walls() {
        let mut ed = Editor::new(Grid::new(4, 1));
        ed.primary(c(0, 0)).unwrap();
        ed.primary(c(3, 3)).unwrap();
        ed.primary(c(1, 1)).unwrap();
        ed.primary(c(1, 2)).unwrap();
        assert_eq!(ed.grid().start(), Some(c(0, 0)));
        assert_eq!(ed.grid().end(), Some(c(3, 3)));
        assert!(ed.grid().at(c(1, 1)).unwrap().is_obstacle());
        assert!(ed.grid().at(c(1, 2)).unwrap().is_obstacle());
    }

    #[test]
    fn clicking_endpoints_changes_nothing() {
        let mut ed = Editor::new(Grid::new(3, 1));
        ed.primary(c(0, 0)).unwrap();
        ed.primary(c(0, 0)).unwrap(); // start exists, end must differ
        assert_eq!(ed.grid().end(), None);
        ed.primary(c(2, 2)).unwrap();
        ed.primary(c(2, 2)).unwrap();
        assert!(ed.grid().at(c(2, 2)).unwrap().is_end());
    }

    #[test]
    fn clearing_start_frees_the_role() {
        let mut ed = Editor::new(Grid::new(3, 1));
        ed.primary(c(0, 0)).unwrap();
        ed.primary(c(2, 2)).unwrap();
        ed.secondary(c(0, 0)).unwrap();
        assert_eq!(ed.grid().start(), None);
        // the next click becomes the new start, not a wall
        ed.primary(c(1, 0)).unwrap();
        assert_eq!(ed.grid().start(), Some(c(1, 0)));
    }

    #[test]
    fn start_click_on_end_is_ignored() {
        let mut ed = Editor::new(Grid::new(3, 1));
        ed.primary(c(0, 0)).unwrap();
        ed.primary(c(2, 2)).unwrap();
        ed.secondary(c(0, 0)).unwrap();
        ed.primary(c(2, 2)).unwrap();
        assert_eq!(ed.grid().start(), None);
        assert_eq!(ed.grid().end(), Some(c(2, 2)));
    }

    #[test]
    fn reset_rebuilds_grid() {
        let mut ed = Editor::new(Grid::new(3, 1));
        ed.primary(c(0, 0)).unwrap();
        ed.primary(c(2, 2)).unwrap();
        ed.primary(c(1, 1)).unwrap();
        ed.reset();
        assert_eq!(ed.grid().start(), None);
        assert_eq!(ed.grid().end(), None);
        assert!(ed.grid().iter().all(|cell| !cell.is_obstacle()));
    }

    #[test]
    fn describe_outcomes() {
        assert_eq!(describe(&Ok(PathResult::NotFound), 7), "no path (7 expansions)");
        assert_eq!(
            describe(&Ok(PathResult::Cancelled), 3),
            "cancelled after 3 expansions"
        );
        let err = Err(SearchError::InvalidEndpoints(
            tilepath_search::EndpointError::MissingStart,
        ));
        assert_eq!(describe(&err, 0), "search: invalid endpoints: no start cell");
    }
}
