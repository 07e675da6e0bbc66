//! Projection of cell state onto terminal glyphs.
//!
//! Colours are derived from a cell's [`CellKind`] and [`Mark`] on every
//! draw; nothing is ever read back from them.

use crossterm::style::Color;
use tilepath_core::{Cell, CellKind, Grid, Mark};

const WHITE: Color = Color::Rgb { r: 255, g: 255, b: 255 };
const BLACK: Color = Color::Rgb { r: 0, g: 0, b: 0 };
const GREY: Color = Color::Rgb { r: 128, g: 128, b: 128 };
const RED: Color = Color::Rgb { r: 255, g: 0, b: 0 };
const GREEN: Color = Color::Rgb { r: 0, g: 255, b: 0 };
const PURPLE: Color = Color::Rgb { r: 128, g: 0, b: 128 };
const ORANGE: Color = Color::Rgb { r: 255, g: 165, b: 0 };
const TURQUOISE: Color = Color::Rgb { r: 64, g: 224, b: 208 };

/// A character with its colours.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Glyph {
    const fn new(ch: char, fg: Color, bg: Color) -> Self {
        Self { ch, fg, bg }
    }
}

/// The glyph for one cell. Roles take precedence over search marks, so the
/// endpoints stay visible while the search runs over them.
pub fn glyph(cell: &Cell) -> Glyph {
    match cell.kind() {
        CellKind::Obstacle => Glyph::new('#', GREY, BLACK),
        CellKind::Start => Glyph::new('S', BLACK, ORANGE),
        CellKind::End => Glyph::new('E', BLACK, TURQUOISE),
        CellKind::Empty => match cell.mark() {
            Mark::None => Glyph::new('.', GREY, WHITE),
            Mark::Frontier => Glyph::new('o', BLACK, GREEN),
            Mark::Visited => Glyph::new('x', BLACK, RED),
            Mark::Path => Glyph::new('*', WHITE, PURPLE),
        },
    }
}

/// Plain-text rendering of the grid with search marks, one line per row.
pub fn render_text(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.len() + grid.rows().max(0) as usize);
    for (i, cell) in grid.iter().enumerate() {
        if i > 0 && cell.col() == 0 {
            out.push('\n');
        }
        out.push(glyph(cell).ch);
    }
    out
}
