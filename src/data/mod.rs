//! Loading and seeding of the item and quest data files.

#![allow(unused_imports)]

pub mod loader;

pub use loader::*;
