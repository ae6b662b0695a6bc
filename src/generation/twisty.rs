//! Free-form connected mazes by rejection sampling of random graphs
//!
//! Each attempt links every pair of cells with probability `ln(n) / n`, the
//! Erdős–Rényi connectivity threshold, through randomly chosen free ports.
//! Attempts that run out of ports or leave the graph disconnected are thrown
//! away wholesale and retried.

use log::{debug, trace};
use rand::Rng;

use crate::io::configuration::{MAX_TWISTY_CELLS, REMOTE_LOCATIONS};
use crate::io::error::{Result, invalid_parameter};
use crate::maze::{Cell, Direction, Layout, Maze};

/// Pick one of the cell's unused ports uniformly at random
pub fn random_free_port<R: Rng>(cell: &Cell, rng: &mut R) -> Option<Direction> {
    let ports = cell.free_ports();
    if ports.is_empty() {
        return None;
    }
    ports.get(rng.random_range(0..ports.len())).copied()
}

/// Link cell pairs at random through free ports
///
/// Returns `false` as soon as a chosen pair has a cell with no free port; the
/// maze is then left half-linked and must be cleared before reuse.
pub fn erdos_renyi_link<R: Rng>(maze: &mut Maze, rng: &mut R) -> bool {
    let count = maze.len();
    if count == 0 {
        return true;
    }
    let threshold = (count as f64).ln() / count as f64;

    for i in 0..count {
        for j in (i + 1)..count {
            if rng.random::<f64>() > threshold {
                continue;
            }

            let (Some(first), Some(second)) = (maze.cell(i), maze.cell(j)) else {
                return false;
            };
            let i_port = random_free_port(first, rng);
            let j_port = random_free_port(second, rng);

            let (Some(i_port), Some(j_port)) = (i_port, j_port) else {
                trace!("ports exhausted linking cells {i} and {j}");
                return false;
            };

            maze.link(i, j, i_port);
            maze.link(j, i, j_port);
        }
    }
    true
}

/// Reject sizes that cannot host placement or would rarely link successfully
///
/// # Errors
///
/// Returns an error if `size` is below 4 or above the twisty cell limit
pub fn validate_size(size: usize) -> Result<()> {
    if size < REMOTE_LOCATIONS {
        return Err(invalid_parameter(
            "size",
            &size,
            &format!("must be at least {REMOTE_LOCATIONS}"),
        ));
    }
    if size > MAX_TWISTY_CELLS {
        return Err(invalid_parameter(
            "size",
            &size,
            &format!("must be at most {MAX_TWISTY_CELLS}"),
        ));
    }
    Ok(())
}

/// Build a connected free-form maze of `size` cells
///
/// # Errors
///
/// Returns an error if `size` is rejected by [`validate_size`]
pub fn make_twisty_maze<R: Rng>(size: usize, rng: &mut R) -> Result<Maze> {
    validate_size(size)?;

    let mut maze = Maze::new(size, Layout::Free);
    let mut attempts = 1_usize;

    while !(erdos_renyi_link(&mut maze, rng) && maze.is_connected()) {
        maze.clear();
        attempts += 1;
    }

    debug!(
        "built twisty maze of {size} cells with {} links after {attempts} attempt(s)",
        maze.link_count() / 2
    );
    Ok(maze)
}
