//! Core utilities shared by every layer: logging macros and the seeded RNG.

#[macro_use]
pub mod utils;
