//! Cube simulator: potential / additional-potential option rerolls with
//! tiered grade promotion, pity guarantees, and miracle time.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
