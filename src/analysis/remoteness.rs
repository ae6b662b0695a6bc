//! Selection of four mutually remote cells
//!
//! Candidates are compared by their sorted pairwise distances, smallest
//! first, so the winner maximises the closest pair before anything else.

use ndarray::Array2;

use crate::io::configuration::REMOTE_LOCATIONS;
use crate::io::error::{Result, invalid_parameter};
use crate::maze::CellId;

/// Four cell indices in increasing order
pub type Locations = [CellId; REMOTE_LOCATIONS];

/// Every entry of the candidate's distance submatrix, sorted ascending
///
/// Includes the zero diagonal and both orientations of each pair, so the
/// score has `nodes.len()^2` entries. Missing entries count as zero.
pub fn score_of(nodes: &[CellId], distances: &Array2<usize>) -> Vec<usize> {
    let mut score: Vec<usize> = nodes
        .iter()
        .flat_map(|&i| {
            nodes
                .iter()
                .map(move |&j| distances.get([i, j]).copied().unwrap_or(0))
        })
        .collect();
    score.sort_unstable();
    score
}

/// Whether `lhs` is strictly greater at the first position where they differ
///
/// Equal sequences do not follow one another. Only the common prefix is
/// compared.
pub fn lexicographically_follows(lhs: &[usize], rhs: &[usize]) -> bool {
    lhs.iter()
        .zip(rhs)
        .find(|(l, r)| l != r)
        .is_some_and(|(l, r)| l > r)
}

/// Pick the four cells whose sorted distance profile is lexicographically largest
///
/// Enumerates every `i < j < k < l` in order and keeps the first best
/// candidate, starting from `[0, 1, 2, 3]`. The result is always strictly
/// increasing; callers rely on that order when assigning roles.
///
/// # Errors
///
/// Returns an error if the matrix describes fewer than four cells
pub fn remote_locations_in(distances: &Array2<usize>) -> Result<Locations> {
    let count = distances.nrows();
    if count < REMOTE_LOCATIONS {
        return Err(invalid_parameter(
            "cell count",
            &count,
            &format!("remote selection needs at least {REMOTE_LOCATIONS} cells"),
        ));
    }

    let mut best: Locations = [0, 1, 2, 3];
    let mut best_score = score_of(&best, distances);

    for i in 0..count {
        for j in (i + 1)..count {
            for k in (j + 1)..count {
                for l in (k + 1)..count {
                    let candidate = [i, j, k, l];
                    let score = score_of(&candidate, distances);
                    if lexicographically_follows(&score, &best_score) {
                        best = candidate;
                        best_score = score;
                    }
                }
            }
        }
    }

    Ok(best)
}
