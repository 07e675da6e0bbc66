//! A* search between two cells of a [`Grid`].
//!
//! Every call allocates its own search state (scores, predecessors, open
//! set) sized to the grid, so results never depend on earlier runs. The grid
//! itself is only written through observation [`Mark`]s: neighbours are
//! tagged [`Mark::Frontier`] when relaxed, expanded cells other than the start
//! [`Mark::Visited`], and cells of a found path [`Mark::Path`].

use std::fmt;

use tilepath_core::{CancelToken, Coord, Grid, Mark};

use crate::distance::{Heuristic, Manhattan};
use crate::frontier::Frontier;
use crate::observer::Observer;
use crate::reconstruct::{reconstruct, CameFrom};

/// Score of a cell that has not been reached.
pub const UNREACHABLE: u32 = u32::MAX;

// ---------------------------------------------------------------------------
// Results and errors
// ---------------------------------------------------------------------------

/// A path of 4-connected cells, start and end inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    cells: Vec<Coord>,
}

impl Path {
    /// The cells in start→end order.
    #[inline]
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Number of moves (edges), one less than the number of cells.
    #[inline]
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    #[inline]
    pub fn start(&self) -> Option<Coord> {
        self.cells.first().copied()
    }

    #[inline]
    pub fn end(&self) -> Option<Coord> {
        self.cells.last().copied()
    }

    pub fn into_cells(self) -> Vec<Coord> {
        self.cells
    }
}

/// Outcome of a search that was allowed to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathResult {
    /// A shortest path was found.
    Found(Path),
    /// Every reachable cell was expanded without meeting the end.
    NotFound,
    /// The cancel token was signaled before the search finished.
    Cancelled,
}

impl PathResult {
    /// The found path, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Found(p) => Some(p),
            _ => None,
        }
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Why a pair of endpoints was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointError {
    /// The grid has no start cell.
    MissingStart,
    /// The grid has no end cell.
    MissingEnd,
    /// An endpoint lies outside the grid.
    OutOfBounds(Coord),
    /// Start and end are the same cell.
    Identical(Coord),
    /// An endpoint is an obstacle.
    Obstacle(Coord),
}

impl fmt::Display for EndpointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingStart => f.write_str("no start cell"),
            Self::MissingEnd => f.write_str("no end cell"),
            Self::OutOfBounds(c) => write!(f, "{c} is outside the grid"),
            Self::Identical(c) => write!(f, "start and end are both {c}"),
            Self::Obstacle(c) => write!(f, "{c} is an obstacle"),
        }
    }
}

/// Errors reported before a search starts. The grid is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    InvalidEndpoints(EndpointError),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEndpoints(e) => write!(f, "search: invalid endpoints: {e}"),
        }
    }
}

impl std::error::Error for SearchError {}

impl From<EndpointError> for SearchError {
    fn from(e: EndpointError) -> Self {
        Self::InvalidEndpoints(e)
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Find a shortest path from `start` to `end` with the Manhattan heuristic.
///
/// `observer` is called once per expansion and once per path cell;
/// `cancel` is polled before every expansion.
pub fn find_path<O: Observer + ?Sized>(
    grid: &mut Grid,
    start: Coord,
    end: Coord,
    observer: &mut O,
    cancel: &CancelToken,
) -> Result<PathResult, SearchError> {
    find_path_with(&Manhattan, grid, start, end, observer, cancel)
}

/// Like [`find_path`], using the grid's current start and end cells.
pub fn find_marked_path<O: Observer + ?Sized>(
    grid: &mut Grid,
    observer: &mut O,
    cancel: &CancelToken,
) -> Result<PathResult, SearchError> {
    let start = grid.start().ok_or(EndpointError::MissingStart)?;
    let end = grid.end().ok_or(EndpointError::MissingEnd)?;
    find_path(grid, start, end, observer, cancel)
}

fn validate(grid: &Grid, start: Coord, end: Coord) -> Result<(), EndpointError> {
    for c in [start, end] {
        let cell = grid.at(c).ok_or(EndpointError::OutOfBounds(c))?;
        if cell.is_obstacle() {
            return Err(EndpointError::Obstacle(c));
        }
    }
    if start == end {
        return Err(EndpointError::Identical(start));
    }
    Ok(())
}

/// Find a shortest path from `start` to `end` using `heuristic`.
///
/// The heuristic must be admissible and consistent for unit-cost 4-way
/// moves. Any cell whose cost strictly drops is relaxed, but only a cell
/// that is not already waiting gets a new queue entry: a waiting cell keeps
/// its original priority and sequence number.
pub fn find_path_with<H, O>(
    heuristic: &H,
    grid: &mut Grid,
    start: Coord,
    end: Coord,
    observer: &mut O,
    cancel: &CancelToken,
) -> Result<PathResult, SearchError>
where
    H: Heuristic + ?Sized,
    O: Observer + ?Sized,
{
    validate(grid, start, end)?;
    let start_idx = grid
        .index_of(start)
        .ok_or(EndpointError::OutOfBounds(start))?;

    let len = grid.len();
    let mut g_score = vec![UNREACHABLE; len];
    let mut f_score = vec![UNREACHABLE; len];
    let mut came_from = CameFrom::new(grid);
    let mut frontier = Frontier::new(len);

    g_score[start_idx] = 0;
    f_score[start_idx] = heuristic.estimate(start, end);
    frontier.push(start_idx, start, f_score[start_idx]);

    log::debug!(
        "astar: {start} -> {end} on {n}x{n} grid",
        n = grid.rows()
    );

    let mut expanded = 0usize;
    let mut queued = 1usize;
    let mut nbuf: Vec<Coord> = Vec::with_capacity(4);

    loop {
        if cancel.is_cancelled() {
            log::debug!("astar: cancelled after {expanded} expansions");
            return Ok(PathResult::Cancelled);
        }
        let Some((ci, current)) = frontier.pop() else {
            log::debug!("astar: no path after {expanded} expansions ({queued} queued)");
            return Ok(PathResult::NotFound);
        };
        expanded += 1;
        log::trace!("astar: expand {current} g={} f={}", g_score[ci], f_score[ci]);

        if current == end {
            let cells = reconstruct(&came_from, end);
            for &c in cells.iter().rev() {
                grid.mark(c, Mark::Path);
                observer.on_path(grid, c);
            }
            log::debug!(
                "astar: found {} steps after {expanded} expansions ({queued} queued)",
                cells.len() - 1
            );
            return Ok(PathResult::Found(Path { cells }));
        }

        nbuf.clear();
        nbuf.extend(grid.neighbors(current));

        let tentative_g = g_score[ci] + 1;
        for &nb in &nbuf {
            let Some(ni) = grid.index_of(nb) else {
                continue;
            };
            if tentative_g >= g_score[ni] {
                continue;
            }
            came_from.set(nb, current);
            g_score[ni] = tentative_g;
            f_score[ni] = tentative_g + heuristic.estimate(nb, end);
            // a waiting cell keeps its queue entry and the priority it was
            // queued with
            if !frontier.contains(ni) {
                frontier.push(ni, nb, f_score[ni]);
                queued += 1;
            }
            grid.mark(nb, Mark::Frontier);
        }

        observer.on_step(grid, current, &frontier);

        if current != start {
            grid.mark(current, Mark::Visited);
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn path_round_trip() {
        let path = Path {
            cells: vec![Coord::new(0, 0), Coord::new(1, 0)],
        };
        let json = serde_json::to_string(&path).unwrap();
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(path, back);
    }
}
