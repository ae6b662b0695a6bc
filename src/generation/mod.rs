//! Maze construction from a player's name
//!
//! Seed derivation feeds one of two builders, after which the remote cells are
//! furnished with the start and the items.

/// Spanning-tree grid builder
pub mod grid;
/// Entry points and start/item placement
pub mod placement;
/// Name hashing and seeded randomness
pub mod seed;
/// Free-form connected graph builder
pub mod twisty;
/// Disjoint-set forest over cell indices
pub mod union_find;
