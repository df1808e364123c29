//! Crate-wide error type. Every fallible engine operation returns
//! [`GameResult`]; the UI layer decides how failures are presented.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type GameResult<T> = Result<T, GameError>;

#[derive(Debug, Error)]
pub enum GameError {
    // Lookups
    #[error("no character named '{0}'")]
    CharacterNotFound(String),

    #[error("item '{0}' is not in the inventory")]
    ItemNotFound(String),

    #[error("unknown item '{0}'")]
    UnknownItem(String),

    #[error("unknown quest '{0}'")]
    QuestNotFound(String),

    #[error("data file not found: {}", .0.display())]
    MissingDataFile(PathBuf),

    // Malformed input
    #[error("unknown class '{0}'")]
    InvalidClass(String),

    #[error("{0}")]
    InvalidItemType(String),

    // State conflicts
    #[error("quest '{0}' has already been completed")]
    QuestAlreadyCompleted(String),

    #[error("quest '{0}' is not active")]
    QuestNotActive(String),

    #[error("requirements for quest '{0}' are not met")]
    QuestRequirementsNotMet(String),

    // Exhausted resources
    #[error("inventory is full")]
    InventoryFull,

    #[error("not enough gold: have {have}, need {need}")]
    InsufficientGold { have: u32, need: u32 },

    #[error("requires level {required}, character is level {actual}")]
    InsufficientLevel { required: u32, actual: u32 },

    // Illegal states
    #[error("character is dead")]
    CharacterDead,

    #[error("no battle in progress")]
    CombatNotActive,

    // Corrupted persisted data
    #[error("quest '{0}' sits on a prerequisite cycle")]
    QuestCycle(String),

    #[error("save file for '{name}' is corrupted: {reason}")]
    SaveFileCorrupted { name: String, reason: String },

    #[error("malformed data file {}: {}", .path.display(), .reason)]
    InvalidDataFormat { path: PathBuf, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
