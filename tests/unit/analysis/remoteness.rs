//! Tests for remote-location selection

#[cfg(test)]
mod tests {
    use linked_labyrinth::analysis::distances::all_pairs_shortest_paths;
    use linked_labyrinth::analysis::remoteness::{
        lexicographically_follows, remote_locations_in, score_of,
    };
    use linked_labyrinth::maze::demo::demo_maze;
    use linked_labyrinth::{MazeError, grid_maze_for, twisty_maze_for};
    use ndarray::Array2;

    // Tests strict lexicographic comparison
    // Verified by returning true for equal sequences
    #[test]
    fn test_lexicographically_follows() {
        assert!(lexicographically_follows(&[0, 2, 3], &[0, 1, 9]));
        assert!(!lexicographically_follows(&[0, 1, 9], &[0, 2, 3]));
        assert!(!lexicographically_follows(&[1, 2, 3], &[1, 2, 3]));
    }

    // Tests the score includes the diagonal and both orientations, sorted
    // Verified by scoring only unordered pairs
    #[test]
    fn test_score_of() {
        let distances =
            Array2::from_shape_fn((4, 4), |(i, j)| i.abs_diff(j));
        let score = score_of(&[0, 1, 2, 3], &distances);
        assert_eq!(score, vec![0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 3, 3]);
    }

    // Tests the demo maze picks its known remote cells
    // Verified by keeping the last of several equal candidates
    #[test]
    fn test_demo_selection() {
        let distances = all_pairs_shortest_paths(&demo_maze());
        let locations = remote_locations_in(&distances).ok();
        assert_eq!(locations, Some([0, 2, 3, 8]));
        assert_eq!(
            score_of(&[0, 2, 3, 8], &distances),
            vec![0, 0, 0, 0, 4, 4, 7, 7, 7, 7, 7, 7, 8, 8, 8, 8]
        );
    }

    // Tests no other 4-subset beats the selection
    // Verified by stopping the search after the first improvement
    #[test]
    fn test_selection_is_optimal() {
        let mazes = [grid_maze_for("Ada", 3, 4).ok(), twisty_maze_for("Ada", 9).ok()];
        for maze in mazes.into_iter().flatten() {
            let distances = all_pairs_shortest_paths(&maze);
            let Ok(best) = remote_locations_in(&distances) else {
                unreachable!("selection failed on a valid maze");
            };
            assert!(best.windows(2).all(|pair| pair.first() < pair.get(1)));

            let best_score = score_of(&best, &distances);
            let n = maze.len();
            for i in 0..n {
                for j in (i + 1)..n {
                    for k in (j + 1)..n {
                        for l in (k + 1)..n {
                            let score = score_of(&[i, j, k, l], &distances);
                            assert!(!lexicographically_follows(&score, &best_score));
                        }
                    }
                }
            }
        }
    }

    // Tests ties keep the earliest candidate, starting from the first four cells
    // Verified by replacing on equal scores
    #[test]
    fn test_ties_keep_first() {
        let distances = Array2::from_shape_fn((6, 6), |(i, j)| usize::from(i != j));
        assert_eq!(remote_locations_in(&distances).ok(), Some([0, 1, 2, 3]));
    }

    // Tests fewer than four cells is rejected
    // Verified by removing the size check
    #[test]
    fn test_too_few_cells() {
        let distances = Array2::<usize>::zeros((3, 3));
        assert!(matches!(
            remote_locations_in(&distances),
            Err(MazeError::InvalidParameter { .. })
        ));
    }
}
