/// All-pairs shortest path distances
pub mod distances;
/// Choice of the four most remote cells
pub mod remoteness;
