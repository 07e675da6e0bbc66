//! The [`Grid`] type — a square map of [`Cell`]s with 4-way adjacency.
//!
//! The grid is the only state shared between the caller and the search
//! engine. Callers edit it through the authoring setters
//! ([`set_obstacle`](Grid::set_obstacle), [`set_start`](Grid::set_start),
//! [`set_end`](Grid::set_end), [`clear`](Grid::clear)); the engine only
//! writes observation [`Mark`]s.

use std::fmt;

use crate::cell::{Cell, CellKind, Mark};
use crate::geom::Coord;

// ---------------------------------------------------------------------------
// GridError
// ---------------------------------------------------------------------------

/// Errors returned by the grid authoring setters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// The coordinate lies outside the grid.
    OutOfBounds(Coord),
    /// An obstacle was requested on the current start or end cell.
    EndpointConflict(Coord),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(c) => write!(f, "grid: coordinate {c} is out of bounds"),
            Self::EndpointConflict(c) => {
                write!(f, "grid: cannot place an obstacle on endpoint {c}")
            }
        }
    }
}

impl std::error::Error for GridError {}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A `rows × rows` grid of cells stored row-major.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: i32,
    cell_size: i32,
    cells: Vec<Cell>,
    start: Option<Coord>,
    end: Option<Coord>,
}

impl Grid {
    /// Build a `rows × rows` grid of empty cells.
    ///
    /// `cell_size` is the display span of one cell and only matters for
    /// [`locate`](Grid::locate). Negative sizes are clamped to zero and a
    /// cell size below one is treated as one.
    pub fn new(rows: i32, cell_size: i32) -> Self {
        let rows = rows.max(0);
        Self {
            rows,
            cell_size: cell_size.max(1),
            cells: Self::fresh_cells(rows),
            start: None,
            end: None,
        }
    }

    fn fresh_cells(rows: i32) -> Vec<Cell> {
        let mut cells = Vec::with_capacity((rows as usize) * (rows as usize));
        for row in 0..rows {
            for col in 0..rows {
                cells.push(Cell::new(Coord::new(row, col)));
            }
        }
        cells
    }

    /// Side length of the grid.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Display span of one cell.
    #[inline]
    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.row >= 0 && c.col >= 0 && c.row < self.rows && c.col < self.rows
    }

    /// Flat row-major index of `c`, or `None` if out of bounds.
    #[inline]
    pub fn index_of(&self, c: Coord) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some((c.row as usize) * (self.rows as usize) + (c.col as usize))
    }

    /// Inverse of [`index_of`](Grid::index_of).
    #[inline]
    pub fn coord_of(&self, idx: usize) -> Coord {
        let rows = self.rows.max(1) as usize;
        Coord::new((idx / rows) as i32, (idx % rows) as i32)
    }

    /// The cell at `c`, if in bounds.
    #[inline]
    pub fn at(&self, c: Coord) -> Option<&Cell> {
        self.index_of(c).map(|i| &self.cells[i])
    }

    /// Whether `c` is in bounds and not an obstacle.
    #[inline]
    pub fn is_passable(&self, c: Coord) -> bool {
        self.at(c).is_some_and(|cell| !cell.is_obstacle())
    }

    /// The current start cell, if any.
    #[inline]
    pub fn start(&self) -> Option<Coord> {
        self.start
    }

    /// The current end cell, if any.
    #[inline]
    pub fn end(&self) -> Option<Coord> {
        self.end
    }

    /// Passable axis-aligned neighbours of `c` in the order down, up, right,
    /// left.
    ///
    /// Computed from the current obstacle flags on every call, so edits are
    /// visible immediately.
    pub fn neighbors(&self, c: Coord) -> impl Iterator<Item = Coord> + '_ {
        c.neighbors_4()
            .into_iter()
            .filter(move |&n| self.is_passable(n))
    }

    /// Map a display position (in the same units as `cell_size`) to the cell
    /// under it.
    pub fn locate(&self, x: i32, y: i32) -> Option<Coord> {
        if x < 0 || y < 0 {
            return None;
        }
        let c = Coord::new(y / self.cell_size, x / self.cell_size);
        self.contains(c).then_some(c)
    }

    /// Row-major iterator over all cells.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    // -----------------------------------------------------------------------
    // Authoring
    // -----------------------------------------------------------------------

    /// Mark or unmark `c` as an obstacle.
    ///
    /// Placing an obstacle on the start or end cell is refused; removing an
    /// obstacle from a non-obstacle cell leaves it unchanged.
    pub fn set_obstacle(&mut self, c: Coord, obstacle: bool) -> Result<(), GridError> {
        let i = self.index_of(c).ok_or(GridError::OutOfBounds(c))?;
        let cell = &mut self.cells[i];
        match (obstacle, cell.kind) {
            (true, CellKind::Start | CellKind::End) => Err(GridError::EndpointConflict(c)),
            (true, _) => {
                cell.kind = CellKind::Obstacle;
                Ok(())
            }
            (false, CellKind::Obstacle) => {
                cell.kind = CellKind::Empty;
                Ok(())
            }
            (false, _) => Ok(()),
        }
    }

    /// Make `c` the start cell. The previous start (if any) becomes empty.
    pub fn set_start(&mut self, c: Coord) -> Result<(), GridError> {
        self.assign_role(c, CellKind::Start)
    }

    /// Make `c` the end cell. The previous end (if any) becomes empty.
    pub fn set_end(&mut self, c: Coord) -> Result<(), GridError> {
        self.assign_role(c, CellKind::End)
    }

    /// Reset `c` to an empty, unmarked cell, dropping any role it held.
    pub fn clear(&mut self, c: Coord) -> Result<(), GridError> {
        let i = self.index_of(c).ok_or(GridError::OutOfBounds(c))?;
        self.drop_role(c, self.cells[i].kind);
        self.cells[i].kind = CellKind::Empty;
        self.cells[i].mark = Mark::None;
        Ok(())
    }

    fn assign_role(&mut self, c: Coord, role: CellKind) -> Result<(), GridError> {
        let i = self.index_of(c).ok_or(GridError::OutOfBounds(c))?;
        let holder = match role {
            CellKind::Start => &mut self.start,
            _ => &mut self.end,
        };
        if let Some(prev) = holder.replace(c) {
            if prev != c {
                log::trace!("moving {role:?} from {prev} to {c}");
                if let Some(pi) = self.index_of(prev) {
                    self.cells[pi].kind = CellKind::Empty;
                }
            }
        }
        let old = self.cells[i].kind;
        if old != role {
            self.drop_role(c, old);
        }
        self.cells[i].kind = role;
        Ok(())
    }

    fn drop_role(&mut self, c: Coord, kind: CellKind) {
        match kind {
            CellKind::Start if self.start == Some(c) => self.start = None,
            CellKind::End if self.end == Some(c) => self.end = None,
            _ => {}
        }
    }

    // -----------------------------------------------------------------------
    // Observation marks
    // -----------------------------------------------------------------------

    /// Tag `c` for observers. No-op if `c` is out of bounds.
    #[inline]
    pub fn mark(&mut self, c: Coord, mark: Mark) {
        if let Some(i) = self.index_of(c) {
            self.cells[i].mark = mark;
        }
    }

    /// Clear every observation mark, keeping obstacles and endpoints.
    pub fn reset_marks(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.mark = Mark::None;
        }
    }

    /// Discard all cell state, keeping the dimensions.
    pub fn rebuild(&mut self) {
        self.cells = Self::fresh_cells(self.rows);
        self.start = None;
        self.end = None;
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(it: impl Iterator<Item = Coord>) -> Vec<Coord> {
        it.collect()
    }

    #[test]
    fn grid_new_and_at() {
        let g = Grid::new(4, 10);
        assert_eq!(g.rows(), 4);
        assert_eq!(g.len(), 16);
        let c = g.at(Coord::new(2, 3)).unwrap();
        assert_eq!(c.coord(), Coord::new(2, 3));
        assert!(g.at(Coord::new(4, 0)).is_none());
        assert!(g.at(Coord::new(0, -1)).is_none());
    }

    #[test]
    fn index_round_trip() {
        let g = Grid::new(5, 1);
        for (i, cell) in g.iter().enumerate() {
            assert_eq!(g.index_of(cell.coord()), Some(i));
            assert_eq!(g.coord_of(i), cell.coord());
        }
    }

    #[test]
    fn neighbors_order_and_bounds() {
        let g = Grid::new(3, 1);
        assert_eq!(
            coords(g.neighbors(Coord::new(1, 1))),
            vec![
                Coord::new(2, 1),
                Coord::new(0, 1),
                Coord::new(1, 2),
                Coord::new(1, 0),
            ]
        );
        // corner: only down and right survive
        assert_eq!(
            coords(g.neighbors(Coord::new(0, 0))),
            vec![Coord::new(1, 0), Coord::new(0, 1)]
        );
    }

    #[test]
    fn neighbors_follow_obstacle_edits() {
        let mut g = Grid::new(3, 1);
        let c = Coord::new(1, 1);
        let before = coords(g.neighbors(c));
        assert_eq!(before, coords(g.neighbors(c)));

        g.set_obstacle(Coord::new(1, 2), true).unwrap();
        let after = coords(g.neighbors(c));
        assert!(!after.contains(&Coord::new(1, 2)));
        assert_eq!(after.len(), 3);

        g.set_obstacle(Coord::new(1, 2), false).unwrap();
        assert_eq!(coords(g.neighbors(c)), before);
    }

    #[test]
    fn start_and_end_are_unique() {
        let mut g = Grid::new(4, 1);
        g.set_start(Coord::new(0, 0)).unwrap();
        g.set_start(Coord::new(1, 1)).unwrap();
        assert_eq!(g.start(), Some(Coord::new(1, 1)));
        assert!(!g.at(Coord::new(0, 0)).unwrap().is_start());
        assert_eq!(g.iter().filter(|c| c.is_start()).count(), 1);

        g.set_end(Coord::new(3, 3)).unwrap();
        g.set_end(Coord::new(2, 2)).unwrap();
        assert_eq!(g.end(), Some(Coord::new(2, 2)));
        assert_eq!(g.iter().filter(|c| c.is_end()).count(), 1);
    }

    #[test]
    fn set_start_over_end_moves_the_role() {
        let mut g = Grid::new(3, 1);
        g.set_end(Coord::new(1, 1)).unwrap();
        g.set_start(Coord::new(1, 1)).unwrap();
        assert_eq!(g.start(), Some(Coord::new(1, 1)));
        assert_eq!(g.end(), None);
    }

    #[test]
    fn set_start_replaces_obstacle() {
        let mut g = Grid::new(3, 1);
        g.set_obstacle(Coord::new(0, 1), true).unwrap();
        g.set_start(Coord::new(0, 1)).unwrap();
        let cell = g.at(Coord::new(0, 1)).unwrap();
        assert!(cell.is_start());
        assert!(!cell.is_obstacle());
    }

    #[test]
    fn obstacle_on_endpoint_is_refused() {
        let mut g = Grid::new(3, 1);
        g.set_start(Coord::new(0, 0)).unwrap();
        g.set_end(Coord::new(2, 2)).unwrap();
        assert_eq!(
            g.set_obstacle(Coord::new(0, 0), true),
            Err(GridError::EndpointConflict(Coord::new(0, 0)))
        );
        assert_eq!(
            g.set_obstacle(Coord::new(2, 2), true),
            Err(GridError::EndpointConflict(Coord::new(2, 2)))
        );
        assert!(g.at(Coord::new(0, 0)).unwrap().is_start());
    }

    #[test]
    fn setters_reject_out_of_bounds() {
        let mut g = Grid::new(2, 1);
        let out = Coord::new(2, 0);
        assert_eq!(g.set_start(out), Err(GridError::OutOfBounds(out)));
        assert_eq!(g.set_end(out), Err(GridError::OutOfBounds(out)));
        assert_eq!(g.set_obstacle(out, true), Err(GridError::OutOfBounds(out)));
        assert_eq!(g.clear(out), Err(GridError::OutOfBounds(out)));
    }

    #[test]
    fn clear_drops_role() {
        let mut g = Grid::new(3, 1);
        g.set_start(Coord::new(0, 0)).unwrap();
        g.set_end(Coord::new(0, 2)).unwrap();
        g.clear(Coord::new(0, 0)).unwrap();
        g.clear(Coord::new(0, 2)).unwrap();
        assert_eq!(g.start(), None);
        assert_eq!(g.end(), None);
        assert!(g.iter().all(|c| c.kind() == CellKind::Empty));
    }

    #[test]
    fn reset_marks_keeps_layout() {
        let mut g = Grid::new(3, 1);
        g.set_obstacle(Coord::new(1, 1), true).unwrap();
        g.mark(Coord::new(0, 0), Mark::Visited);
        g.mark(Coord::new(2, 2), Mark::Path);
        g.mark(Coord::new(9, 9), Mark::Path); // ignored
        g.reset_marks();
        assert!(g.iter().all(|c| c.mark() == Mark::None));
        assert!(g.at(Coord::new(1, 1)).unwrap().is_obstacle());
    }

    #[test]
    fn rebuild_discards_everything() {
        let mut g = Grid::new(3, 1);
        g.set_start(Coord::new(0, 0)).unwrap();
        g.set_obstacle(Coord::new(1, 1), true).unwrap();
        g.mark(Coord::new(2, 2), Mark::Frontier);
        g.rebuild();
        assert_eq!(g.len(), 9);
        assert_eq!(g.start(), None);
        assert!(g.iter().all(|c| c.kind() == CellKind::Empty && c.mark() == Mark::None));
    }

    #[test]
    fn locate_uses_cell_size() {
        let g = Grid::new(4, 20);
        assert_eq!(g.locate(0, 0), Some(Coord::new(0, 0)));
        assert_eq!(g.locate(45, 19), Some(Coord::new(0, 2)));
        assert_eq!(g.locate(19, 61), Some(Coord::new(3, 0)));
        assert_eq!(g.locate(80, 0), None);
        assert_eq!(g.locate(-1, 0), None);
    }
}
