//! Shared setup for the `pathfind` demo: command-line options and grid
//! construction from a layout file or random obstacles.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use tilepath_core::{Coord, Grid, GridLayout, LayoutError};

pub const DEFAULT_ROWS: i32 = 20;

pub const USAGE: &str = "\
usage: pathfind [options]

  --rows N       grid size (N x N), default 20
  --layout PATH  load a layout (.json, or text with . # S E)
  --density PCT  percentage of random obstacles, 0-100
  --seed N       seed for random obstacles
  --delay-ms N   pause between animation frames
  --headless     search once and print the result instead of editing
  -h, --help     show this help";

/// Errors raised while preparing the demo.
#[derive(Debug)]
pub enum DemoError {
    /// Bad command line; the message names the offending argument.
    Usage(String),
    /// `--help` was given.
    Help,
    Io(PathBuf, std::io::Error),
    Layout(PathBuf, LayoutError),
    Json(PathBuf, serde_json::Error),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage(msg) => write!(f, "{msg}\n\n{USAGE}"),
            Self::Help => f.write_str(USAGE),
            Self::Io(p, e) => write!(f, "{}: {e}", p.display()),
            Self::Layout(p, e) => write!(f, "{}: {e}", p.display()),
            Self::Json(p, e) => write!(f, "{}: {e}", p.display()),
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(_, e) => Some(e),
            Self::Layout(_, e) => Some(e),
            Self::Json(_, e) => Some(e),
            Self::Usage(_) | Self::Help => None,
        }
    }
}

/// Options of the demo binary.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub rows: i32,
    pub layout: Option<PathBuf>,
    /// Obstacle percentage for generated grids.
    pub density: u8,
    pub seed: Option<u64>,
    pub step_delay: Duration,
    pub headless: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            layout: None,
            density: 0,
            seed: None,
            step_delay: Duration::from_millis(10),
            headless: false,
        }
    }
}

fn value<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> Result<String, DemoError> {
    args.next()
        .ok_or_else(|| DemoError::Usage(format!("{flag} needs a value")))
}

fn number<T: std::str::FromStr, I: Iterator<Item = String>>(
    args: &mut I,
    flag: &str,
) -> Result<T, DemoError> {
    let v = value(args, flag)?;
    v.parse()
        .map_err(|_| DemoError::Usage(format!("{flag}: not a valid number: {v}")))
}

impl DemoConfig {
    /// Parse arguments, not including the program name.
    pub fn parse<I>(args: I) -> Result<Self, DemoError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut cfg = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--rows" => {
                    cfg.rows = number(&mut args, "--rows")?;
                    if cfg.rows < 1 {
                        return Err(DemoError::Usage("--rows must be at least 1".into()));
                    }
                }
                "--layout" => cfg.layout = Some(PathBuf::from(value(&mut args, "--layout")?)),
                "--density" => {
                    cfg.density = number(&mut args, "--density")?;
                    if cfg.density > 100 {
                        return Err(DemoError::Usage("--density must be 0-100".into()));
                    }
                }
                "--seed" => cfg.seed = Some(number(&mut args, "--seed")?),
                "--delay-ms" => {
                    cfg.step_delay = Duration::from_millis(number(&mut args, "--delay-ms")?);
                }
                "--headless" => cfg.headless = true,
                "-h" | "--help" => return Err(DemoError::Help),
                other => return Err(DemoError::Usage(format!("unknown argument: {other}"))),
            }
        }
        Ok(cfg)
    }

    /// The grid the demo starts from.
    pub fn build_grid(&self) -> Result<Grid, DemoError> {
        match &self.layout {
            Some(path) => load_layout(path),
            None => {
                let seed = self.seed.unwrap_or_else(rand::random);
                log::debug!("demo: {0}x{0} grid, density {1}%, seed {seed}", self.rows, self.density);
                Ok(random_grid(self.rows, self.density, seed))
            }
        }
    }
}

/// Read a layout file: JSON when the extension is `.json`, text otherwise.
pub fn load_layout(path: &Path) -> Result<Grid, DemoError> {
    let data = std::fs::read_to_string(path).map_err(|e| DemoError::Io(path.to_owned(), e))?;
    let grid = if path.extension().is_some_and(|ext| ext == "json") {
        let layout: GridLayout =
            serde_json::from_str(&data).map_err(|e| DemoError::Json(path.to_owned(), e))?;
        Grid::from_layout(&layout, 1)
    } else {
        Grid::from_text(&data, 1)
    };
    grid.map_err(|e| DemoError::Layout(path.to_owned(), e))
}

/// An `rows` x `rows` grid with roughly `density` percent obstacles. When
/// any obstacles are requested, the start and end are placed in opposite
/// corners.
pub fn random_grid(rows: i32, density: u8, seed: u64) -> Grid {
    let mut grid = Grid::new(rows, 1);
    if density == 0 {
        return grid;
    }
    let mut rng = StdRng::seed_from_u64(seed);
    for idx in 0..grid.len() {
        if rng.random_range(0..100u8) < density {
            // cannot fail: no endpoints exist yet
            let _ = grid.set_obstacle(grid.coord_of(idx), true);
        }
    }
    place_corners(&mut grid);
    grid
}

/// Fill missing endpoints: start top-left, end bottom-right. Grids of a
/// single cell are left alone.
pub fn place_corners(grid: &mut Grid) {
    let last = Coord::new(grid.rows() - 1, grid.rows() - 1);
    if last == Coord::ZERO {
        return;
    }
    if grid.start().is_none() && grid.end() != Some(Coord::ZERO) {
        let _ = grid.set_start(Coord::ZERO);
    }
    if grid.end().is_none() && grid.start() != Some(last) {
        let _ = grid.set_end(last);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<DemoConfig, DemoError> {
        DemoConfig::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn defaults() {
        assert_eq!(parse(&[]).unwrap(), DemoConfig::default());
    }

    #[test]
    fn all_flags() {
        let cfg = parse(&[
            "--rows", "12", "--density", "25", "--seed", "7", "--delay-ms", "0", "--headless",
        ])
        .unwrap();
        assert_eq!(cfg.rows, 12);
        assert_eq!(cfg.density, 25);
        assert_eq!(cfg.seed, Some(7));
        assert!(cfg.step_delay.is_zero());
        assert!(cfg.headless);
    }

    #[test]
    fn usage_errors() {
        assert!(matches!(parse(&["--rows"]), Err(DemoError::Usage(_))));
        assert!(matches!(parse(&["--rows", "x"]), Err(DemoError::Usage(_))));
        assert!(matches!(parse(&["--rows", "0"]), Err(DemoError::Usage(_))));
        assert!(matches!(parse(&["--density", "101"]), Err(DemoError::Usage(_))));
        assert!(matches!(parse(&["--fast"]), Err(DemoError::Usage(_))));
        assert!(matches!(parse(&["-h"]), Err(DemoError::Help)));
    }

    #[test]
    fn random_grid_is_seeded() {
        let a = random_grid(10, 30, 99);
        let b = random_grid(10, 30, 99);
        assert_eq!(a.to_text(), b.to_text());
        assert_eq!(a.start(), Some(Coord::ZERO));
        assert_eq!(a.end(), Some(Coord::new(9, 9)));
    }

    #[test]
    fn zero_density_is_empty() {
        let g = random_grid(5, 0, 1);
        assert!(g.iter().all(|c| !c.is_obstacle()));
        assert_eq!(g.start(), None);
    }

    #[test]
    fn corners_respect_existing_endpoints() {
        let mut g = Grid::new(3, 1);
        g.set_end(Coord::ZERO).unwrap();
        place_corners(&mut g);
        assert_eq!(g.start(), None);
        assert_eq!(g.end(), Some(Coord::ZERO));
    }

    #[test]
    fn bundled_layout_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("layouts/detour.txt");
        let g = load_layout(&path).unwrap();
        assert_eq!(g.rows(), 10);
        assert_eq!(g.start(), Some(Coord::ZERO));
        assert_eq!(g.end(), Some(Coord::new(8, 9)));
    }

    #[test]
    fn missing_layout_file() {
        let err = load_layout(Path::new("/nonexistent/grid.txt")).unwrap_err();
        assert!(matches!(err, DemoError::Io(..)));
    }
}
