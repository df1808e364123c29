//! Per-character save files.
//!
//! Saves are flat `KEY: value` text, one field per line, lists comma-joined.
//! Equipped slots are deliberately not written: their stat deltas are baked
//! into the saved stats, matching the long-standing save layout.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::character::types::{Character, ClassKind};
use crate::constants::{APP_DIR_NAME, MAX_NAME_LENGTH, SAVE_DIR_NAME, SAVE_FILE_SUFFIX};
use crate::error::{GameError, GameResult};

const REQUIRED_KEYS: [&str; 12] = [
    "NAME",
    "CLASS",
    "LEVEL",
    "HEALTH",
    "MAX_HEALTH",
    "STRENGTH",
    "MAGIC",
    "EXPERIENCE",
    "GOLD",
    "INVENTORY",
    "ACTIVE_QUESTS",
    "COMPLETED_QUESTS",
];

/// One row on the character select screen.
#[derive(Debug, Clone)]
pub struct CharacterInfo {
    pub name: String,
    pub class: Option<ClassKind>,
    pub level: u32,
    pub filename: String,
    pub last_modified: DateTime<Utc>,
    pub is_corrupted: bool,
}

pub struct CharacterManager {
    save_dir: PathBuf,
}

impl CharacterManager {
    pub fn new() -> GameResult<Self> {
        let home_dir = dirs::home_dir().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine home directory",
            )
        })?;
        Self::with_directory(home_dir.join(APP_DIR_NAME).join(SAVE_DIR_NAME))
    }

    /// Uses an explicit save directory. Tests point this at a temp dir.
    pub fn with_directory(save_dir: PathBuf) -> GameResult<Self> {
        fs::create_dir_all(&save_dir)?;
        Ok(Self { save_dir })
    }

    pub fn save_character(&self, character: &Character) -> GameResult<()> {
        let filepath = self.save_path(&character.name);
        fs::write(filepath, serialize_character(character))?;
        Ok(())
    }

    pub fn load_character(&self, name: &str) -> GameResult<Character> {
        let filepath = self.save_path(name);
        if !filepath.exists() {
            return Err(GameError::CharacterNotFound(name.to_string()));
        }
        let content = fs::read_to_string(filepath)?;
        parse_character(&content).map_err(|reason| GameError::SaveFileCorrupted {
            name: name.to_string(),
            reason,
        })
    }

    pub fn character_exists(&self, name: &str) -> bool {
        self.save_path(name).exists()
    }

    pub fn delete_character(&self, name: &str) -> GameResult<()> {
        let filepath = self.save_path(name);
        if !filepath.exists() {
            return Err(GameError::CharacterNotFound(name.to_string()));
        }
        fs::remove_file(filepath)?;
        Ok(())
    }

    /// Surveys the save directory. Unreadable files are listed as
    /// corrupted rather than failing the whole listing. Most recent first.
    pub fn list_characters(&self) -> GameResult<Vec<CharacterInfo>> {
        let mut characters = Vec::new();

        for entry in fs::read_dir(&self.save_dir)? {
            let entry = entry?;
            let path = entry.path();
            let filename = match path.file_name().and_then(|s| s.to_str()) {
                Some(f) if f.ends_with(SAVE_FILE_SUFFIX) => f.to_string(),
                _ => continue,
            };
            let stem = filename
                .strip_suffix(SAVE_FILE_SUFFIX)
                .unwrap_or(&filename)
                .to_string();
            let last_modified = entry
                .metadata()
                .and_then(|m| m.modified())
                .map(DateTime::<Utc>::from)
                .unwrap_or_default();

            match fs::read_to_string(&path)
                .map_err(|e| e.to_string())
                .and_then(|content| parse_character(&content))
            {
                Ok(character) => characters.push(CharacterInfo {
                    name: character.name,
                    class: Some(character.class),
                    level: character.level,
                    filename,
                    last_modified,
                    is_corrupted: false,
                }),
                Err(_) => characters.push(CharacterInfo {
                    name: stem,
                    class: None,
                    level: 0,
                    filename,
                    last_modified,
                    is_corrupted: true,
                }),
            }
        }

        characters.sort_by(|a, b| b.last_modified.cmp(&a.last_modified));
        Ok(characters)
    }

    fn save_path(&self, name: &str) -> PathBuf {
        self.save_dir
            .join(format!("{}{}", sanitize_name(name), SAVE_FILE_SUFFIX))
    }
}

fn serialize_character(character: &Character) -> String {
    let mut out = String::new();
    out.push_str(&format!("NAME: {}\n", character.name));
    out.push_str(&format!("CLASS: {}\n", character.class));
    out.push_str(&format!("LEVEL: {}\n", character.level));
    out.push_str(&format!("HEALTH: {}\n", character.health));
    out.push_str(&format!("MAX_HEALTH: {}\n", character.max_health));
    out.push_str(&format!("STRENGTH: {}\n", character.strength));
    out.push_str(&format!("MAGIC: {}\n", character.magic));
    out.push_str(&format!("EXPERIENCE: {}\n", character.experience));
    out.push_str(&format!("GOLD: {}\n", character.gold));
    out.push_str(&format!("INVENTORY: {}\n", character.inventory.join(",")));
    out.push_str(&format!(
        "ACTIVE_QUESTS: {}\n",
        character.active_quests.join(",")
    ));
    out.push_str(&format!(
        "COMPLETED_QUESTS: {}\n",
        character.completed_quests.join(",")
    ));
    out
}

fn parse_character(content: &str) -> Result<Character, String> {
    let mut fields: HashMap<String, String> = HashMap::new();
    for line in content.lines() {
        if line.trim().is_empty() {
            continue;
        }
        if !line.contains(": ") {
            return Err(format!("malformed line '{}'", line));
        }
        // contains() above guarantees the split
        if let Some((key, value)) = line.split_once(':') {
            fields.insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    for key in REQUIRED_KEYS {
        if !fields.contains_key(key) {
            return Err(format!("missing required field {}", key));
        }
    }

    let class: ClassKind = fields["CLASS"]
        .parse()
        .map_err(|_| format!("unknown class '{}'", fields["CLASS"]))?;

    let character = Character {
        name: fields["NAME"].clone(),
        class,
        level: parse_u32(&fields, "LEVEL")?,
        health: parse_u32(&fields, "HEALTH")?,
        max_health: parse_u32(&fields, "MAX_HEALTH")?,
        strength: parse_u32(&fields, "STRENGTH")?,
        magic: parse_u32(&fields, "MAGIC")?,
        experience: parse_u32(&fields, "EXPERIENCE")?,
        gold: parse_u32(&fields, "GOLD")?,
        inventory: parse_list(&fields["INVENTORY"]),
        active_quests: parse_list(&fields["ACTIVE_QUESTS"]),
        completed_quests: parse_list(&fields["COMPLETED_QUESTS"]),
        equipped_weapon: None,
        equipped_armor: None,
    };
    character.validate()?;
    Ok(character)
}

fn parse_u32(fields: &HashMap<String, String>, key: &str) -> Result<u32, String> {
    fields[key]
        .parse()
        .map_err(|_| format!("{} is not an integer: '{}'", key, fields[key]))
}

fn parse_list(value: &str) -> Vec<String> {
    if value.is_empty() {
        Vec::new()
    } else {
        value.split(',').map(|s| s.to_string()).collect()
    }
}

pub fn validate_name(name: &str) -> Result<(), String> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err("Name cannot be empty".to_string());
    }

    if trimmed.len() > MAX_NAME_LENGTH {
        return Err(format!("Name must be {} characters or fewer", MAX_NAME_LENGTH));
    }

    let valid_chars = trimmed
        .chars()
        .all(|c| c.is_alphanumeric() || c == ' ' || c == '-' || c == '_');

    if !valid_chars {
        return Err(
            "Name can only contain letters, numbers, spaces, hyphens, and underscores".to_string(),
        );
    }

    Ok(())
}

pub fn sanitize_name(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .replace(' ', "_")
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-')
        .collect()
}
