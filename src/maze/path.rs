//! Walking a direction string through a maze and judging the escape

use bitvec::prelude::*;

use crate::maze::cell::{CellId, Direction, Item, Maze};

/// Result of following a path from the maze's start cell
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathOutcome {
    /// Every item was collected and no wall was hit
    Escaped,
    /// A step tried to leave through a side with no link
    WallHit {
        /// Zero-based index of the failing step
        step: usize,
        /// Direction that was blocked
        direction: Direction,
    },
    /// A character outside the `N`, `S`, `E`, `W` alphabet
    InvalidDirection {
        /// Zero-based index of the bad character
        step: usize,
        /// The character itself
        symbol: char,
    },
    /// The walk finished without collecting every item
    MissingItems {
        /// Items never picked up, in [`Item::ALL`] order
        missing: Vec<Item>,
    },
}

impl PathOutcome {
    /// Whether this outcome counts as escaping the labyrinth
    pub const fn is_escape(&self) -> bool {
        matches!(self, Self::Escaped)
    }
}

/// Follow `path` from the start of `maze`, collecting items along the way
///
/// The start cell's own item counts as collected. Items are picked up in any
/// order; revisiting cells or walking on after the last pickup is allowed.
/// The walk stops at the first blocked step or unknown character.
pub fn walk(maze: &Maze, path: &str) -> PathOutcome {
    let mut collected = bitvec![0; Item::ALL.len()];
    let mut current = maze.start();

    collect_item(maze, current, &mut collected);

    for (step, symbol) in path.chars().enumerate() {
        let Ok(direction) = Direction::try_from(symbol) else {
            return PathOutcome::InvalidDirection { step, symbol };
        };

        let Some(next) = maze.step(current, direction) else {
            return PathOutcome::WallHit { step, direction };
        };

        current = next;
        collect_item(maze, current, &mut collected);
    }

    let missing: Vec<Item> = Item::ALL
        .into_iter()
        .filter(|item| collected.get(item.index()).as_deref() != Some(&true))
        .collect();

    if missing.is_empty() {
        PathOutcome::Escaped
    } else {
        PathOutcome::MissingItems { missing }
    }
}

fn collect_item(maze: &Maze, id: CellId, collected: &mut BitVec) {
    if let Some(item) = maze.cell(id).and_then(|cell| cell.item) {
        collected.set(item.index(), true);
    }
}

/// Whether `path` collects all three items without hitting a wall
pub fn is_path_to_freedom(maze: &Maze, path: &str) -> bool {
    walk(maze, path).is_escape()
}
