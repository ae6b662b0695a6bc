//! Tests for all-pairs shortest paths

#[cfg(test)]
mod tests {
    use linked_labyrinth::analysis::distances::{all_pairs_shortest_paths, unreachable_distance};
    use linked_labyrinth::maze::demo::demo_maze;
    use linked_labyrinth::maze::{Direction, Layout, Maze};
    use linked_labyrinth::twisty_maze_for;

    // Tests the first row of the demo maze distances
    // Verified by relaxing only through neighbours of the source
    #[test]
    fn test_demo_distances() {
        let distances = all_pairs_shortest_paths(&demo_maze());
        let first_row: Vec<usize> = distances.row(0).to_vec();
        assert_eq!(
            first_row,
            vec![0, 3, 4, 7, 1, 2, 5, 6, 8, 3, 4, 5, 7, 6, 5, 6]
        );
        assert_eq!(distances.get([3, 12]).copied(), Some(6));
    }

    // Tests diagonal, symmetry and triangle inequality on generated mazes
    // Verified by initialising the diagonal to one
    #[test]
    fn test_metric_properties() {
        let mazes = [
            Some(demo_maze()),
            twisty_maze_for("Ada", 12).ok(),
            twisty_maze_for("Grace", 16).ok(),
        ];
        for maze in mazes.into_iter().flatten() {
            let distances = all_pairs_shortest_paths(&maze);
            let n = maze.len();
            for i in 0..n {
                assert_eq!(distances.get([i, i]).copied(), Some(0));
                for j in 0..n {
                    let ij = distances.get([i, j]).copied().unwrap_or(usize::MAX);
                    assert_eq!(Some(ij), distances.get([j, i]).copied());
                    assert!(ij <= n);
                    for k in 0..n {
                        let ik = distances.get([i, k]).copied().unwrap_or(0);
                        let kj = distances.get([k, j]).copied().unwrap_or(0);
                        assert!(ij <= ik + kj);
                    }
                }
            }
        }
    }

    // Tests disconnected cells keep the sentinel distance
    // Verified by using zero for unreachable pairs
    #[test]
    fn test_unreachable_sentinel() {
        let mut maze = Maze::new(3, Layout::Free);
        maze.connect(0, 1, Direction::East);
        let distances = all_pairs_shortest_paths(&maze);

        assert_eq!(unreachable_distance(3), 4);
        assert_eq!(distances.get([0, 1]).copied(), Some(1));
        assert_eq!(distances.get([0, 2]).copied(), Some(4));
        assert_eq!(distances.get([2, 1]).copied(), Some(4));
    }

    // Tests one-way links give asymmetric distances
    // Verified by symmetrising the adjacency initialisation
    #[test]
    fn test_directed_links() {
        let mut maze = Maze::new(3, Layout::Free);
        maze.link(0, 1, Direction::East);
        maze.link(1, 2, Direction::East);
        let distances = all_pairs_shortest_paths(&maze);

        assert_eq!(distances.get([0, 2]).copied(), Some(2));
        assert_eq!(distances.get([2, 0]).copied(), Some(4));
    }
}
