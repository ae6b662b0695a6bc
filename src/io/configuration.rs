//! Generation constants and runtime configuration defaults

// Seed derivation (polynomial string hash)
/// Starting value of the name hash
pub const HASH_SEED: u64 = 5381;
/// Multiplier applied per hashed value
pub const HASH_MULTIPLIER: u64 = 33;
/// Hashes are kept to 31 bits
pub const HASH_MASK: u64 = 0x7FFF_FFFF;

// Default values for configurable parameters
/// Name used when none is supplied
pub const DEFAULT_NAME: &str = "YourNameHere";
/// Default number of rows in a grid maze
pub const DEFAULT_ROWS: usize = 4;
/// Default number of columns in a grid maze
pub const DEFAULT_COLS: usize = 4;
/// Default number of cells in a twisty maze
pub const DEFAULT_TWISTY_SIZE: usize = 12;

/// Number of cells chosen by the remote-location search (start plus items)
pub const REMOTE_LOCATIONS: usize = 4;

// Safety limits; remote selection is quartic in the cell count
/// Maximum number of cells in a grid maze
pub const MAX_GRID_CELLS: usize = 64;
/// Smallest grid dimension the spanning tree builder can complete
pub const MIN_GRID_DIMENSION: usize = 2;
/// Maximum number of cells in a twisty maze
///
/// Beyond this the expected degree approaches the four available ports and
/// almost every linking attempt is rejected.
pub const MAX_TWISTY_CELLS: usize = 32;

// PNG export settings
/// Side length in pixels of one logical maze pixel
pub const PIXEL_SCALE: u32 = 8;
/// Wall colour
pub const WALL_COLOR: [u8; 4] = [32, 32, 48, 255];
/// Open floor colour
pub const FLOOR_COLOR: [u8; 4] = [236, 232, 220, 255];
/// Start cell colour
pub const START_COLOR: [u8; 4] = [64, 160, 72, 255];
/// Wand cell colour
pub const WAND_COLOR: [u8; 4] = [200, 64, 48, 255];
/// Potion cell colour
pub const POTION_COLOR: [u8; 4] = [64, 96, 208, 255];
/// Spellbook cell colour
pub const SPELLBOOK_COLOR: [u8; 4] = [224, 176, 32, 255];
