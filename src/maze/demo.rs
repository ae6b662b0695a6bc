//! Fixed hand-authored maze for exercising path checks

use crate::maze::cell::{Direction, Item, Maze};

// (row, col) pairs joined vertically; the first cell is the northern one
const SOUTH_LINKS: [((usize, usize), (usize, usize)); 9] = [
    ((0, 0), (1, 0)),
    ((0, 1), (1, 1)),
    ((0, 3), (1, 3)),
    ((1, 1), (2, 1)),
    ((1, 2), (2, 2)),
    ((1, 3), (2, 3)),
    ((2, 0), (3, 0)),
    ((2, 2), (3, 2)),
    ((2, 3), (3, 3)),
];

// (row, col) pairs joined horizontally; the first cell is the western one
const EAST_LINKS: [((usize, usize), (usize, usize)); 6] = [
    ((0, 1), (0, 2)),
    ((1, 0), (1, 1)),
    ((2, 1), (2, 2)),
    ((2, 2), (2, 3)),
    ((3, 0), (3, 1)),
    ((3, 1), (3, 2)),
];

const ITEMS: [((usize, usize), Item); 3] = [
    ((0, 2), Item::Wand),
    ((2, 0), Item::Spellbook),
    ((3, 3), Item::Potion),
];

const START: (usize, usize) = (2, 2);

/// Build the fixed 4x4 demo labyrinth
///
/// The layout never changes, which makes it the reference maze for checking
/// path validation. The start cell is `(2, 2)`.
pub fn demo_maze() -> Maze {
    let mut maze = Maze::grid(4, 4);

    let joins = SOUTH_LINKS
        .iter()
        .map(|&(from, to)| (from, to, Direction::South))
        .chain(
            EAST_LINKS
                .iter()
                .map(|&(from, to)| (from, to, Direction::East)),
        );

    for (from, to, direction) in joins {
        if let (Some(a), Some(b)) = (maze.id_at(from.0, from.1), maze.id_at(to.0, to.1)) {
            maze.connect(a, b, direction);
        }
    }

    for ((row, col), item) in ITEMS {
        if let Some(id) = maze.id_at(row, col) {
            maze.place_item(id, item);
        }
    }

    if let Some(start) = maze.id_at(START.0, START.1) {
        maze.set_start(start);
    }

    maze
}
