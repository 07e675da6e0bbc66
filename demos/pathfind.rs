//! A* on an editable grid in the terminal.
//!
//! Run: cargo run --bin pathfind -- --density 25
//!      cargo run --bin pathfind -- --layout maze.txt --headless

use std::error::Error;

use tilepath_core::CancelToken;
use tilepath_demos::{place_corners, DemoConfig, DemoError};
use tilepath_search::{find_marked_path, PathResult};
use tilepath_term::{render_text, TermConfig};

fn headless(cfg: &DemoConfig) -> Result<(), Box<dyn Error>> {
    let mut grid = cfg.build_grid()?;
    place_corners(&mut grid);
    let result = find_marked_path(&mut grid, &mut (), &CancelToken::new())?;
    println!("{}", render_text(&grid));
    match result {
        PathResult::Found(path) => println!("path: {} steps", path.steps()),
        PathResult::NotFound => println!("no path"),
        PathResult::Cancelled => println!("cancelled"),
    }
    Ok(())
}

fn interactive(cfg: &DemoConfig) -> Result<(), Box<dyn Error>> {
    let grid = cfg.build_grid()?;
    let term = TermConfig::new().with_step_delay(cfg.step_delay);
    tilepath_term::run(grid, &term)?;
    Ok(())
}

fn main() {
    let cfg = match DemoConfig::parse(std::env::args().skip(1)) {
        Ok(cfg) => cfg,
        Err(DemoError::Help) => {
            println!("{}", DemoError::Help);
            return;
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };

    let res = if cfg.headless {
        headless(&cfg)
    } else {
        interactive(&cfg)
    };
    if let Err(e) = res {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
