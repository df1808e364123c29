//! Character model, progression, and persistence.

#![allow(unused_imports)]

pub mod input;
pub mod manager;
pub mod progression;
pub mod types;

pub use input::*;
pub use manager::*;
pub use progression::*;
pub use types::*;
