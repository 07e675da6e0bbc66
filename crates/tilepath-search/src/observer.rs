//! Progress callbacks for visualising a running search.

use tilepath_core::{Coord, Grid};

use crate::frontier::Frontier;

/// Receives search progress.
///
/// Observers get shared references only, so they cannot disturb the search
/// state. To stop a search early, signal the
/// [`CancelToken`](tilepath_core::CancelToken) passed to the engine; it is
/// polled before every expansion.
pub trait Observer {
    /// Called once per expansion, after `current`'s neighbours were relaxed
    /// and before `current` is marked visited.
    fn on_step(&mut self, _grid: &Grid, _current: Coord, _frontier: &Frontier) {}

    /// Called for every cell of a found path, goal first.
    fn on_path(&mut self, _grid: &Grid, _cell: Coord) {}
}

impl Observer for () {}

/// An observer that ignores every event.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {}

/// Adapts a closure into an [`Observer`] that only watches expansions.
pub struct FnObserver<F>(pub F);

impl<F> Observer for FnObserver<F>
where
    F: FnMut(&Grid, Coord, &Frontier),
{
    #[inline]
    fn on_step(&mut self, grid: &Grid, current: Coord, frontier: &Frontier) {
        (self.0)(grid, current, frontier)
    }
}

impl<O: Observer + ?Sized> Observer for &mut O {
    #[inline]
    fn on_step(&mut self, grid: &Grid, current: Coord, frontier: &Frontier) {
        (**self).on_step(grid, current, frontier)
    }

    #[inline]
    fn on_path(&mut self, grid: &Grid, cell: Coord) {
        (**self).on_path(grid, cell)
    }
}
