//! The [`Cell`] type — one grid unit with its role and observation mark.

use crate::geom::Coord;

/// The role a cell plays in the map. Exactly one role per cell, so a cell
/// can never be both an obstacle and an endpoint.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    #[default]
    Empty,
    Obstacle,
    Start,
    End,
}

impl CellKind {
    /// Layout character for this kind (`.`, `#`, `S`, `E`).
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Obstacle => '#',
            Self::Start => 'S',
            Self::End => 'E',
        }
    }

    /// Parse a layout character.
    #[inline]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Empty),
            '#' => Some(Self::Obstacle),
            'S' => Some(Self::Start),
            'E' => Some(Self::End),
            _ => None,
        }
    }
}

/// Search progress tag. Written by the search engine for observers only;
/// the algorithm never reads it back.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mark {
    #[default]
    None,
    /// Discovered, waiting in the open set.
    Frontier,
    /// Expanded (closed).
    Visited,
    /// Part of the reconstructed path.
    Path,
}

/// A single grid cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    coord: Coord,
    pub(crate) kind: CellKind,
    pub(crate) mark: Mark,
}

impl Cell {
    pub(crate) const fn new(coord: Coord) -> Self {
        Self {
            coord,
            kind: CellKind::Empty,
            mark: Mark::None,
        }
    }

    #[inline]
    pub const fn coord(&self) -> Coord {
        self.coord
    }

    #[inline]
    pub const fn row(&self) -> i32 {
        self.coord.row
    }

    #[inline]
    pub const fn col(&self) -> i32 {
        self.coord.col
    }

    #[inline]
    pub const fn kind(&self) -> CellKind {
        self.kind
    }

    #[inline]
    pub const fn mark(&self) -> Mark {
        self.mark
    }

    #[inline]
    pub fn is_obstacle(&self) -> bool {
        self.kind == CellKind::Obstacle
    }

    #[inline]
    pub fn is_start(&self) -> bool {
        self.kind == CellKind::Start
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.kind == CellKind::End
    }

    #[inline]
    pub fn is_visited(&self) -> bool {
        self.mark == Mark::Visited
    }

    #[inline]
    pub fn is_frontier(&self) -> bool {
        self.mark == Mark::Frontier
    }

    #[inline]
    pub fn is_on_path(&self) -> bool {
        self.mark == Mark::Path
    }
}
