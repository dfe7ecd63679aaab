//! Инфраструктура: детерминированный RNG и seed раздач.

pub mod rng;
pub mod rng_seed;

pub use rng::*;
pub use rng_seed::RngSeed;
