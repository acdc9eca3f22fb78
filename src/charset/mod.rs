//! Character classes and alphabet construction.
//!
//! A password alphabet is assembled from the enabled character classes,
//! concatenated in declaration order. The order matters: the formatter
//! indexes into the alphabet, so reordering classes changes output for
//! identical random input.

mod alphabet;
mod class;

pub use alphabet::Alphabet;
pub use class::{CharacterClass, ClassSelection};
