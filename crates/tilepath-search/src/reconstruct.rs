//! Predecessor map and path reconstruction.

use tilepath_core::{Coord, Grid};

/// Best-known predecessor of every cell reached by a search.
#[derive(Debug, Clone)]
pub struct CameFrom {
    rows: i32,
    parents: Vec<Option<Coord>>,
}

impl CameFrom {
    /// An empty map sized for `grid`.
    pub fn new(grid: &Grid) -> Self {
        Self {
            rows: grid.rows(),
            parents: vec![None; grid.len()],
        }
    }

    #[inline]
    fn idx(&self, c: Coord) -> Option<usize> {
        if c.row < 0 || c.col < 0 || c.row >= self.rows || c.col >= self.rows {
            return None;
        }
        Some((c.row as usize) * (self.rows as usize) + (c.col as usize))
    }

    /// Record `parent` as the predecessor of `cell`. Out-of-bounds cells are
    /// ignored.
    #[inline]
    pub fn set(&mut self, cell: Coord, parent: Coord) {
        if let Some(i) = self.idx(cell) {
            self.parents[i] = Some(parent);
        }
    }

    /// The predecessor of `cell`, or `None` for the start and unreached
    /// cells.
    #[inline]
    pub fn get(&self, cell: Coord) -> Option<Coord> {
        self.idx(cell).and_then(|i| self.parents[i])
    }
}

/// Walk predecessors back from `end` and return the path in start→end order.
///
/// The first cell without a predecessor is taken to be the start. A cycle in
/// the map (impossible for maps built by the engine) stops the walk after one
/// step per cell instead of looping forever.
pub fn reconstruct(came_from: &CameFrom, end: Coord) -> Vec<Coord> {
    let mut path = vec![end];
    let mut cur = end;
    while let Some(prev) = came_from.get(cur) {
        if path.len() > came_from.parents.len() {
            break;
        }
        path.push(prev);
        cur = prev;
    }
    path.reverse();
    path
}
