//! Name-seeded maze entry points and start/item placement

use log::debug;

use crate::analysis::distances::all_pairs_shortest_paths;
use crate::analysis::remoteness::{Locations, remote_locations_in};
use crate::generation::grid::make_grid_maze;
use crate::generation::seed::{hashcodes, maze_rng};
use crate::generation::twisty::make_twisty_maze;
use crate::io::configuration::{DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_TWISTY_SIZE};
use crate::io::error::Result;
use crate::maze::{Item, Maze};

/// Assign the start and the three items to the selected cells
///
/// The first location becomes the start; the rest receive the Spellbook,
/// Potion and Wand in that order.
pub fn place_items(maze: &mut Maze, locations: Locations) {
    let [start, spellbook, potion, wand] = locations;
    maze.set_start(start);
    maze.place_item(spellbook, Item::Spellbook);
    maze.place_item(potion, Item::Potion);
    maze.place_item(wand, Item::Wand);
}

/// Choose remote cells of an unfurnished maze and furnish it
///
/// # Errors
///
/// Returns an error if the maze has fewer than four cells
pub fn furnish(maze: &mut Maze) -> Result<Locations> {
    let distances = all_pairs_shortest_paths(maze);
    let locations = remote_locations_in(&distances)?;
    place_items(maze, locations);
    Ok(locations)
}

/// Spanning-tree grid labyrinth unique to `name` and the dimensions
///
/// # Errors
///
/// Returns an error if either dimension is below 2, the grid is too large,
/// or the builder breaks its spanning tree guarantee
pub fn grid_maze_for(name: &str, rows: usize, cols: usize) -> Result<Maze> {
    let seed = hashcodes(name, &[rows, cols]);
    let mut rng = maze_rng(seed);

    let mut maze = make_grid_maze(rows, cols, &mut rng)?;
    let locations = furnish(&mut maze)?;

    debug!("grid maze for {name:?} (seed {seed}) uses cells {locations:?}");
    Ok(maze)
}

/// Free-form labyrinth of `size` cells unique to `name`
///
/// # Errors
///
/// Returns an error if `size` is outside the supported range
pub fn twisty_maze_for(name: &str, size: usize) -> Result<Maze> {
    let seed = hashcodes(name, &[size]);
    let mut rng = maze_rng(seed);

    let mut maze = make_twisty_maze(size, &mut rng)?;
    let locations = furnish(&mut maze)?;

    debug!("twisty maze for {name:?} (seed {seed}) uses cells {locations:?}");
    Ok(maze)
}

/// [`grid_maze_for`] with the default 4x4 dimensions
///
/// # Errors
///
/// Returns an error only if the builder breaks its spanning tree guarantee
pub fn default_grid_maze_for(name: &str) -> Result<Maze> {
    grid_maze_for(name, DEFAULT_ROWS, DEFAULT_COLS)
}

/// [`twisty_maze_for`] with the default 12 cells
///
/// # Errors
///
/// Never fails for the default size; the signature mirrors [`twisty_maze_for`]
pub fn default_twisty_maze_for(name: &str) -> Result<Maze> {
    twisty_maze_for(name, DEFAULT_TWISTY_SIZE)
}
