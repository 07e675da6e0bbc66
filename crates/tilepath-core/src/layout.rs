//! Saving and loading grid layouts.
//!
//! A layout records only what the caller authored: the side length and the
//! [`CellKind`] of every cell in row-major order. Observation marks are never
//! persisted.
//!
//! Two encodings are supported:
//!
//! - ASCII text, one line per row, using `.` (empty), `#` (obstacle), `S`
//!   (start) and `E` (end);
//! - [`GridLayout`], a plain struct that derives serde traits when the
//!   `serde` feature is enabled.

use std::fmt;

use crate::cell::CellKind;
use crate::geom::Coord;
use crate::grid::Grid;

/// Errors that can occur when loading a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Text lines have different widths.
    InconsistentWidth { line: usize, width: usize, expected: usize },
    /// The text is not as tall as it is wide.
    NotSquare { width: usize, height: usize },
    /// A character outside `.#SE` was found.
    InvalidChar { ch: char, at: Coord },
    /// A second start or end cell was found.
    DuplicateRole { kind: CellKind, at: Coord },
    /// A structured layout has the wrong number of cells for its size.
    CellCount { rows: i32, cells: usize },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentWidth {
                line,
                width,
                expected,
            } => write!(
                f,
                "layout: line {line} has width {width}, expected {expected}"
            ),
            Self::NotSquare { width, height } => {
                write!(f, "layout: grid must be square, got {width}x{height}")
            }
            Self::InvalidChar { ch, at } => {
                write!(f, "layout: invalid character \u{201c}{ch}\u{201d} at {at}")
            }
            Self::DuplicateRole { kind, at } => {
                write!(f, "layout: second {kind:?} cell at {at}")
            }
            Self::CellCount { rows, cells } => write!(
                f,
                "layout: {rows}x{rows} grid needs {} cells, got {cells}",
                (*rows as usize) * (*rows as usize)
            ),
        }
    }
}

impl std::error::Error for LayoutError {}

/// Structured layout: side length plus row-major cell kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridLayout {
    pub rows: i32,
    pub cells: Vec<CellKind>,
}

impl Grid {
    /// Parse an ASCII layout.
    ///
    /// Leading and trailing whitespace of the whole text is ignored, but not
    /// of individual lines. Every line must be as long as there are lines.
    pub fn from_text(s: &str, cell_size: i32) -> Result<Grid, LayoutError> {
        let s = s.trim();
        let lines: Vec<&str> = s.lines().collect();

        let height = lines.len();
        let mut width = None;
        for (y, line) in lines.iter().enumerate() {
            let w = line.chars().count();
            match width {
                None => width = Some(w),
                Some(expected) if expected != w => {
                    return Err(LayoutError::InconsistentWidth {
                        line: y,
                        width: w,
                        expected,
                    });
                }
                Some(_) => {}
            }
        }
        let width = width.unwrap_or(0);
        if width != height {
            return Err(LayoutError::NotSquare { width, height });
        }

        let mut kinds = Vec::with_capacity(width * height);
        for (y, line) in lines.iter().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                let at = Coord::new(y as i32, x as i32);
                let kind = CellKind::from_char(ch).ok_or(LayoutError::InvalidChar { ch, at })?;
                kinds.push(kind);
            }
        }

        Self::from_kinds(height as i32, &kinds, cell_size)
    }

    /// Render the authored state as ASCII, one line per row.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.len() + self.rows().max(0) as usize);
        for (i, cell) in self.iter().enumerate() {
            if i > 0 && cell.col() == 0 {
                out.push('\n');
            }
            out.push(cell.kind().to_char());
        }
        out
    }

    /// Snapshot the authored state as a [`GridLayout`].
    pub fn layout(&self) -> GridLayout {
        GridLayout {
            rows: self.rows(),
            cells: self.iter().map(|c| c.kind()).collect(),
        }
    }

    /// Build a grid from a [`GridLayout`].
    pub fn from_layout(layout: &GridLayout, cell_size: i32) -> Result<Grid, LayoutError> {
        let rows = layout.rows.max(0);
        if layout.cells.len() != (rows as usize) * (rows as usize) {
            return Err(LayoutError::CellCount {
                rows,
                cells: layout.cells.len(),
            });
        }
        Self::from_kinds(rows, &layout.cells, cell_size)
    }

    fn from_kinds(rows: i32, kinds: &[CellKind], cell_size: i32) -> Result<Grid, LayoutError> {
        let mut grid = Grid::new(rows, cell_size);
        for (i, &kind) in kinds.iter().enumerate() {
            let at = grid.coord_of(i);
            // Coordinates come from the grid itself, so the setters cannot
            // report out-of-bounds, and obstacles never land on endpoints.
            let placed = match kind {
                CellKind::Empty => Ok(()),
                CellKind::Obstacle => grid.set_obstacle(at, true),
                CellKind::Start => {
                    if grid.start().is_some() {
                        return Err(LayoutError::DuplicateRole { kind, at });
                    }
                    grid.set_start(at)
                }
                CellKind::End => {
                    if grid.end().is_some() {
                        return Err(LayoutError::DuplicateRole { kind, at });
                    }
                    grid.set_end(at)
                }
            };
            debug_assert!(placed.is_ok());
        }
        Ok(grid)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn layout_json_round_trip() {
        let mut g = Grid::new(3, 1);
        g.set_start(Coord::new(0, 0)).unwrap();
        g.set_end(Coord::new(2, 2)).unwrap();
        g.set_obstacle(Coord::new(1, 1), true).unwrap();
        let json = serde_json::to_string(&g.layout()).unwrap();
        let back: GridLayout = serde_json::from_str(&json).unwrap();
        let restored = Grid::from_layout(&back, 1).unwrap();
        assert_eq!(restored.to_text(), g.to_text());
    }

    #[test]
    fn layout_json_is_row_major() {
        let json = r#"{"rows":2,"cells":["Start","Obstacle","Empty","End"]}"#;
        let layout: GridLayout = serde_json::from_str(json).unwrap();
        let g = Grid::from_layout(&layout, 1).unwrap();
        assert_eq!(g.to_text(), "S#\n.E");
    }
}
