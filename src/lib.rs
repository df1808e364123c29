//! Quest Chronicles - Turn-Based Terminal RPG Library
//!
//! This module exposes the game logic for testing and external use.

// Allow dead code in library - some functions are only used by the binary
#![allow(dead_code)]

pub mod build_info;
pub mod character;
pub mod combat;
pub mod constants;
pub mod data;
pub mod error;
pub mod items;
pub mod quests;
pub mod session;
pub mod ui;
