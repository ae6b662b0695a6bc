//! Name hashing and seeded random number generation
//!
//! A labyrinth is a pure function of the player's name and the generation
//! parameters. The name is folded into a 31-bit polynomial hash (`h * 33 + c`
//! starting at 5381), the parameters are folded in after it, and the result
//! seeds [`StdRng`].
//!
//! Only the hash is stable across implementations. The random stream is that
//! of `rand`'s `StdRng`, so "same name, same maze" holds for a given build of
//! this crate rather than across languages or `rand` major versions.

use rand::{SeedableRng, rngs::StdRng};

use crate::io::configuration::{HASH_MASK, HASH_MULTIPLIER, HASH_SEED};

const fn fold(hash: u64, value: u64) -> u64 {
    (hash * HASH_MULTIPLIER + (value & HASH_MASK)) & HASH_MASK
}

/// 31-bit polynomial hash of a name
///
/// Masking after every step keeps the intermediate inside 64 bits and gives
/// the same result as masking an unbounded computation once at the end.
pub fn hashcode(name: &str) -> u32 {
    let hash = name
        .chars()
        .fold(HASH_SEED, |hash, ch| fold(hash, u64::from(ch)));
    (hash & HASH_MASK) as u32
}

/// Hash of a name followed by an ordered list of parameters
pub fn hashcodes(name: &str, values: &[usize]) -> u32 {
    let hash = values
        .iter()
        .fold(u64::from(hashcode(name)), |hash, &value| {
            fold(hash, value as u64)
        });
    (hash & HASH_MASK) as u32
}

/// Deterministic generator for a derived seed
pub fn maze_rng(seed: u32) -> StdRng {
    StdRng::seed_from_u64(u64::from(seed))
}
