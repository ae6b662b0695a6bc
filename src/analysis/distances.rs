//! All-pairs shortest path lengths over maze links

use ndarray::Array2;

use crate::maze::Maze;

/// Distance recorded for pairs with no connecting route
///
/// One more than any simple path in a maze of `cell_count` cells can be.
pub const fn unreachable_distance(cell_count: usize) -> usize {
    cell_count + 1
}

/// Hop-count matrix between every pair of cells (Floyd-Warshall)
///
/// `distances[[i, j]]` is the number of links on a shortest walk from cell `i`
/// to cell `j` following link direction, `0` on the diagonal, and
/// [`unreachable_distance`] where no walk exists.
pub fn all_pairs_shortest_paths(maze: &Maze) -> Array2<usize> {
    let count = maze.len();
    let unreachable = unreachable_distance(count);

    let mut distances = Array2::from_shape_fn((count, count), |(i, j)| {
        if i == j {
            0
        } else if maze.cell(i).is_some_and(|cell| cell.is_adjacent_to(j)) {
            1
        } else {
            unreachable
        }
    });

    // In-place relaxation; row and column k are unchanged during pass k
    for k in 0..count {
        for i in 0..count {
            let Some(&to_k) = distances.get([i, k]) else {
                continue;
            };
            if to_k >= unreachable {
                continue;
            }
            for j in 0..count {
                let from_k = distances.get([k, j]).copied().unwrap_or(unreachable);
                if let Some(current) = distances.get_mut([i, j]) {
                    *current = (*current).min(to_k + from_k);
                }
            }
        }
    }

    distances
}
