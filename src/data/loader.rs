//! Game data files: loading, validation, and first-run defaults.
//!
//! Items and quests live in `KEY: value` text files, one record per
//! blank-line-separated block. Keys are case-insensitive; unknown keys
//! ride along in each record's `extra` map so hand-edited files are
//! not silently flattened.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::constants::{APP_DIR_NAME, ITEMS_FILE_NAME, NO_PREREQUISITE, QUESTS_FILE_NAME};
use crate::error::{GameError, GameResult};
use crate::items::types::{ItemDef, ItemKind, ItemTable};
use crate::quests::logic::validate_prerequisites;
use crate::quests::types::{QuestDef, QuestTable};

const DEFAULT_QUESTS: &str = "\
QUEST_ID: first_steps
TITLE: First Steps
DESCRIPTION: Your journey begins.
REWARD_XP: 50
REWARD_GOLD: 25
REQUIRED_LEVEL: 1
PREREQUISITE: none

QUEST_ID: herbalist_errand
TITLE: The Herbalist's Errand
DESCRIPTION: Gather moonpetal blossoms for the village herbalist.
REWARD_XP: 75
REWARD_GOLD: 40
REQUIRED_LEVEL: 1
PREREQUISITE: none

QUEST_ID: goblin_menace
TITLE: The Goblin Menace
DESCRIPTION: Drive the goblins from the forest road.
REWARD_XP: 100
REWARD_GOLD: 50
REQUIRED_LEVEL: 2
PREREQUISITE: first_steps

QUEST_ID: orc_warlord
TITLE: The Orc Warlord
DESCRIPTION: Defeat the warlord rallying the orc camps.
REWARD_XP: 250
REWARD_GOLD: 125
REQUIRED_LEVEL: 4
PREREQUISITE: goblin_menace

QUEST_ID: dragons_hoard
TITLE: The Dragon's Hoard
DESCRIPTION: Claim the hoard from the dragon of the northern peaks.
REWARD_XP: 600
REWARD_GOLD: 400
REQUIRED_LEVEL: 6
PREREQUISITE: orc_warlord
";

const DEFAULT_ITEMS: &str = "\
ITEM_ID: health_potion
NAME: Health Potion
TYPE: consumable
EFFECT: health:20
COST: 25
DESCRIPTION: Restores 20 HP.

ITEM_ID: iron_sword
NAME: Iron Sword
TYPE: weapon
EFFECT: strength:5
COST: 50
DESCRIPTION: A dependable blade.

ITEM_ID: oak_staff
NAME: Oak Staff
TYPE: weapon
EFFECT: magic:5
COST: 50
DESCRIPTION: A focus for apprentice spellwork.

ITEM_ID: leather_armor
NAME: Leather Armor
TYPE: armor
EFFECT: max_health:15
COST: 60
DESCRIPTION: Light armor that softens the worst blows.

ITEM_ID: elixir_of_strength
NAME: Elixir of Strength
TYPE: consumable
EFFECT: strength:2
COST: 80
DESCRIPTION: Permanently hardens the drinker's sword arm.
";

/// Where the game keeps its data and save files: `~/.quest-chronicles`.
pub fn default_app_dir() -> GameResult<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    Ok(home_dir.join(APP_DIR_NAME))
}

/// Writes the starter quest and item files on first run. Existing
/// files are left alone, so player edits survive upgrades.
pub fn ensure_default_files(app_dir: &Path) -> GameResult<()> {
    fs::create_dir_all(app_dir)?;
    let quests_path = app_dir.join(QUESTS_FILE_NAME);
    if !quests_path.exists() {
        fs::write(quests_path, DEFAULT_QUESTS)?;
    }
    let items_path = app_dir.join(ITEMS_FILE_NAME);
    if !items_path.exists() {
        fs::write(items_path, DEFAULT_ITEMS)?;
    }
    Ok(())
}

/// One-stop startup load: seeds defaults if needed, loads both tables,
/// and checks the quest graph. A table that comes back from here is
/// safe to hand to the engines.
pub fn load_game_data(app_dir: &Path) -> GameResult<(ItemTable, QuestTable)> {
    ensure_default_files(app_dir)?;
    let items = load_items(&app_dir.join(ITEMS_FILE_NAME))?;
    let quests = load_quests(&app_dir.join(QUESTS_FILE_NAME))?;
    validate_prerequisites(&quests)?;
    Ok((items, quests))
}

pub fn load_items(path: &Path) -> GameResult<ItemTable> {
    let content = read_data_file(path)?;
    let mut items = ItemTable::new();
    for record in parse_records(path, &content)? {
        let item = item_from_record(path, record)?;
        items.insert(item.item_id.clone(), item);
    }
    Ok(items)
}

pub fn load_quests(path: &Path) -> GameResult<QuestTable> {
    let content = read_data_file(path)?;
    let mut quests = QuestTable::new();
    for record in parse_records(path, &content)? {
        let quest = quest_from_record(path, record)?;
        quests.insert(quest.quest_id.clone(), quest);
    }
    Ok(quests)
}

/// A missing file and a malformed one are different failures: the
/// first gets defaults written over it by the bootstrap, the second
/// needs a human.
fn read_data_file(path: &Path) -> GameResult<String> {
    if !path.exists() {
        return Err(GameError::MissingDataFile(path.to_path_buf()));
    }
    let content =
        fs::read_to_string(path).map_err(|e| invalid(path, format!("unreadable: {}", e)))?;
    if content.trim().is_empty() {
        return Err(invalid(path, "file is empty".to_string()));
    }
    Ok(content)
}

fn parse_records(path: &Path, content: &str) -> GameResult<Vec<BTreeMap<String, String>>> {
    let mut records = Vec::new();
    let mut current: BTreeMap<String, String> = BTreeMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                records.push(std::mem::take(&mut current));
            }
            continue;
        }
        if !line.contains(": ") {
            return Err(invalid(path, format!("malformed line '{}'", line)));
        }
        // contains() above guarantees the split
        if let Some((key, value)) = line.split_once(':') {
            current.insert(key.trim().to_lowercase(), value.trim().to_string());
        }
    }
    if !current.is_empty() {
        records.push(current);
    }
    Ok(records)
}

fn item_from_record(path: &Path, mut record: BTreeMap<String, String>) -> GameResult<ItemDef> {
    let item_id = take_field(path, &mut record, "item_id")?;
    let name = take_field(path, &mut record, "name")?;
    let kind_name = take_field(path, &mut record, "type")?;
    let kind = ItemKind::from_name(&kind_name)
        .ok_or_else(|| invalid(path, format!("invalid item type '{}'", kind_name)))?;
    let effect = take_field(path, &mut record, "effect")?;
    let cost = parse_u32_field(path, &take_field(path, &mut record, "cost")?, "cost")?;
    let description = take_field(path, &mut record, "description")?;
    Ok(ItemDef {
        item_id,
        name,
        kind,
        effect,
        cost,
        description,
        extra: record,
    })
}

fn quest_from_record(path: &Path, mut record: BTreeMap<String, String>) -> GameResult<QuestDef> {
    let quest_id = take_field(path, &mut record, "quest_id")?;
    let title = take_field(path, &mut record, "title")?;
    let description = take_field(path, &mut record, "description")?;
    let reward_xp =
        parse_u32_field(path, &take_field(path, &mut record, "reward_xp")?, "reward_xp")?;
    let reward_gold =
        parse_u32_field(path, &take_field(path, &mut record, "reward_gold")?, "reward_gold")?;
    let required_level = parse_u32_field(
        path,
        &take_field(path, &mut record, "required_level")?,
        "required_level",
    )?;
    if required_level == 0 {
        return Err(invalid(path, "required_level must be at least 1".to_string()));
    }
    // The sentinel is case-insensitive: old files say NONE, new say none.
    let prereq_raw = take_field(path, &mut record, "prerequisite")?;
    let prerequisite = if prereq_raw.eq_ignore_ascii_case(NO_PREREQUISITE) {
        None
    } else {
        Some(prereq_raw)
    };
    Ok(QuestDef {
        quest_id,
        title,
        description,
        reward_xp,
        reward_gold,
        required_level,
        prerequisite,
        extra: record,
    })
}

fn take_field(
    path: &Path,
    record: &mut BTreeMap<String, String>,
    key: &str,
) -> GameResult<String> {
    record
        .remove(key)
        .ok_or_else(|| invalid(path, format!("missing field '{}'", key)))
}

fn parse_u32_field(path: &Path, value: &str, key: &str) -> GameResult<u32> {
    value
        .parse()
        .map_err(|_| invalid(path, format!("{} is not an integer: '{}'", key, value)))
}

fn invalid(path: &Path, reason: String) -> GameError {
    GameError::InvalidDataFormat {
        path: path.to_path_buf(),
        reason,
    }
}
