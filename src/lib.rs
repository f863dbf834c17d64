//! Starcube - MapleStory Enhancement Simulators
//!
//! Deterministic game-mechanics core behind a cube (potential reroll)
//! simulator and a starforce simulator. All randomness is injected
//! through `rand::Rng` so every session can be replayed from a seed.

pub mod cube;
pub mod item;
pub mod pool;
pub mod starforce;
