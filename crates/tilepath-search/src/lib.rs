//! A* shortest-path search over [`tilepath_core::Grid`]s.
//!
//! The engine expands cells in `(f_score, insertion order)` order, so equal
//! scores always break the same way and repeated runs over the same grid
//! return the same path.
//!
//! ```
//! use tilepath_core::{CancelToken, Coord, Grid};
//! use tilepath_search::{find_path, NoopObserver, PathResult};
//!
//! let mut grid = Grid::from_text("S.#\n..#\n..E", 1).unwrap();
//! let result = find_path(
//!     &mut grid,
//!     Coord::new(0, 0),
//!     Coord::new(2, 2),
//!     &mut NoopObserver,
//!     &CancelToken::new(),
//! )
//! .unwrap();
//! assert!(matches!(result, PathResult::Found(ref p) if p.steps() == 4));
//! ```

mod astar;
mod distance;
mod frontier;
mod observer;
mod reconstruct;

pub use astar::{
    find_marked_path, find_path, find_path_with, EndpointError, Path, PathResult, SearchError,
    UNREACHABLE,
};
pub use distance::{manhattan, Heuristic, Manhattan};
pub use frontier::Frontier;
pub use observer::{FnObserver, NoopObserver, Observer};
pub use reconstruct::{reconstruct, CameFrom};
