use tilepath_core::Coord;

/// Manhattan (L1) distance between two coordinates.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> u32 {
    a.manhattan(b)
}

/// Estimate of the remaining cost between two cells.
///
/// Must never overestimate the true 4-connected, unit-cost distance
/// (admissible) and must satisfy `h(a) <= 1 + h(b)` for adjacent `a`, `b`
/// (consistent). Shortest paths are only guaranteed under both
/// properties.
pub trait Heuristic {
    fn estimate(&self, from: Coord, to: Coord) -> u32;
}

/// The Manhattan heuristic, exact on an obstacle-free 4-connected grid.
#[derive(Copy, Clone, Debug, Default)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    #[inline]
    fn estimate(&self, from: Coord, to: Coord) -> u32 {
        manhattan(from, to)
    }
}
