/// Cell arena, directions and items
pub mod cell;
/// Fixed demonstration maze
pub mod demo;
/// Path walking and escape checks
pub mod path;

pub use cell::{Cell, CellId, Direction, Item, Layout, Maze};
