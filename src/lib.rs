//! Name-seeded labyrinths of linked cells with remote item placement
//!
//! A player's name deterministically selects a maze: either a spanning-tree
//! grid or a free-form twisty graph. The start cell and three items are placed
//! on the four mutually most remote cells, and a path of `N`, `S`, `E`, `W`
//! steps escapes when it collects every item without walking into a wall.

#![forbid(unsafe_code)]

/// Distance computation and remote-location selection
pub mod analysis;
/// Seeding, maze builders and item placement
pub mod generation;
/// Input/output operations, configuration and error handling
pub mod io;
/// Maze data model, demo maze and path walking
pub mod maze;

pub use generation::placement::{
    default_grid_maze_for, default_twisty_maze_for, grid_maze_for, twisty_maze_for,
};
pub use io::error::{MazeError, Result};
pub use maze::demo::demo_maze;
pub use maze::path::{PathOutcome, is_path_to_freedom, walk};
pub use maze::{Cell, CellId, Direction, Item, Layout, Maze};
