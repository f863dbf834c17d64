pub mod logic;
pub mod tables;
pub mod types;

pub use logic::*;
pub use tables::*;
pub use types::*;
