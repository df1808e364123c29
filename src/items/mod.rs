//! Item system: reference data, effect parsing, inventory and equipment.

#![allow(unused_imports)]

pub mod effects;
pub mod logic;
pub mod types;

pub use effects::*;
pub use logic::*;
pub use types::*;
