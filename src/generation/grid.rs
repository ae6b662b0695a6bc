//! Spanning-tree grid mazes from shuffled edges and union-find
//!
//! Every wall between grid-adjacent cells is a candidate edge. The edges are
//! shuffled and then accepted greedily whenever they join two components,
//! which yields a uniform-ish random spanning tree: exactly one route between
//! any two cells.

use log::{debug, trace};
use rand::Rng;

use crate::generation::union_find::DisjointSet;
use crate::io::configuration::{MAX_GRID_CELLS, MIN_GRID_DIMENSION};
use crate::io::error::{Result, invalid_parameter, invariant_violation};
use crate::maze::{CellId, Direction, Maze};

/// Candidate link between two grid-adjacent cells
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    /// Northern or western endpoint
    pub from: CellId,
    /// Southern or eastern endpoint
    pub to: CellId,
    /// Port used on `from`
    pub from_port: Direction,
    /// Port used on `to`
    pub to_port: Direction,
}

/// Every south and east edge of a `rows` x `cols` grid, row-major
pub fn all_possible_edges(rows: usize, cols: usize) -> Vec<Edge> {
    let mut edges = Vec::with_capacity(2 * rows * cols);
    for row in 0..rows {
        for col in 0..cols {
            let here = row * cols + col;
            if row + 1 < rows {
                edges.push(Edge {
                    from: here,
                    to: here + cols,
                    from_port: Direction::South,
                    to_port: Direction::North,
                });
            }
            if col + 1 < cols {
                edges.push(Edge {
                    from: here,
                    to: here + 1,
                    from_port: Direction::East,
                    to_port: Direction::West,
                });
            }
        }
    }
    edges
}

/// Forward Fisher-Yates shuffle
///
/// Position `i` is swapped with a uniformly chosen position in `i..len`.
pub fn shuffle_edges<R: Rng>(edges: &mut [Edge], rng: &mut R) {
    let len = edges.len();
    for i in 0..len {
        let j = rng.random_range(0..len - i) + i;
        edges.swap(i, j);
    }
}

/// Reject shapes the builder cannot turn into a spanning tree
///
/// # Errors
///
/// Returns an error if either dimension is below 2 or the grid exceeds
/// the cell limit
pub fn validate_dimensions(rows: usize, cols: usize) -> Result<()> {
    if rows < MIN_GRID_DIMENSION {
        return Err(invalid_parameter(
            "rows",
            &rows,
            &format!("must be at least {MIN_GRID_DIMENSION}"),
        ));
    }
    if cols < MIN_GRID_DIMENSION {
        return Err(invalid_parameter(
            "cols",
            &cols,
            &format!("must be at least {MIN_GRID_DIMENSION}"),
        ));
    }
    let cells = rows.saturating_mul(cols);
    if cells > MAX_GRID_CELLS {
        return Err(invalid_parameter(
            "rows x cols",
            &format!("{rows}x{cols}"),
            &format!("grid may hold at most {MAX_GRID_CELLS} cells"),
        ));
    }
    Ok(())
}

/// Build a `rows` x `cols` spanning-tree maze
///
/// The first shuffled edge is never considered for merging; the remaining
/// edges still always contain a spanning tree for grids of at least 2x2.
///
/// # Errors
///
/// Returns an error if the dimensions are rejected by [`validate_dimensions`],
/// or if the accepted edge count differs from `rows * cols - 1`
pub fn make_grid_maze<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Result<Maze> {
    validate_dimensions(rows, cols)?;

    let mut maze = Maze::grid(rows, cols);
    let mut edges = all_possible_edges(rows, cols);
    shuffle_edges(&mut edges, rng);

    let mut components = DisjointSet::new(maze.len());
    let mut edges_left = maze.len() - 1;

    for edge in edges.iter().skip(1) {
        if components.union(edge.from, edge.to) {
            maze.link(edge.from, edge.to, edge.from_port);
            maze.link(edge.to, edge.from, edge.to_port);
            edges_left = edges_left.saturating_sub(1);
            trace!(
                "linked cell {} {} to cell {}",
                edge.from, edge.from_port, edge.to
            );
        }
    }

    if edges_left != 0 {
        return Err(invariant_violation(
            "grid maze construction",
            &format!("{edges_left} spanning tree edges were never placed"),
        ));
    }

    debug!(
        "built {rows}x{cols} grid maze from {} candidate edges",
        edges.len()
    );
    Ok(maze)
}
