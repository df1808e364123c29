//! Integration test: first-run data seeding.
//!
//! Points the loader at an empty directory and checks that the seeded
//! defaults produce a town a fresh character can actually play in, that
//! restarts and hand edits behave, and that damage fails fast.

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use quest_chronicles::character::types::{Character, ClassKind};
use quest_chronicles::constants::{ITEMS_FILE_NAME, QUESTS_FILE_NAME};
use quest_chronicles::data::loader::load_game_data;
use quest_chronicles::error::GameError;
use quest_chronicles::items::effects::ItemEffect;
use quest_chronicles::items::logic::{equip_item, get_item, purchase_item};
use quest_chronicles::items::types::{EquipSlot, ItemKind};
use quest_chronicles::quests::logic::{
    accept_quest, available_quests, complete_quest, prerequisite_chain,
};

fn boot_dir() -> PathBuf {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    std::env::temp_dir().join(format!(
        "quest_chronicles_boot_{}_{}",
        std::process::id(),
        COUNTER.fetch_add(1, Ordering::SeqCst)
    ))
}

// =============================================================================
// First run
// =============================================================================

#[test]
fn test_first_run_seeds_a_playable_town() {
    let dir = boot_dir();
    let (items, quests) = load_game_data(&dir).unwrap();

    assert!(dir.join(ITEMS_FILE_NAME).exists());
    assert!(dir.join(QUESTS_FILE_NAME).exists());
    assert_eq!(items.len(), 5);
    assert_eq!(quests.len(), 5);

    // Every seeded effect must parse, and gear must fit a slot, or the
    // shop would sell items the engine cannot apply.
    for item in items.values() {
        ItemEffect::parse(&item.effect).unwrap();
        match item.kind {
            ItemKind::Weapon => assert_eq!(EquipSlot::Weapon.accepts(), item.kind),
            ItemKind::Armor => assert_eq!(EquipSlot::Armor.accepts(), item.kind),
            ItemKind::Consumable => {}
        }
    }

    // A fresh hero sees exactly the two level 1 roots.
    let mut hero = Character::new("Aldric", ClassKind::Warrior);
    let open: Vec<&str> = available_quests(&hero, &quests)
        .iter()
        .map(|q| q.quest_id.as_str())
        .collect();
    assert_eq!(open, vec!["first_steps", "herbalist_errand"]);

    // And can play the opening loop on starting gold alone.
    accept_quest(&mut hero, &quests, "first_steps").unwrap();
    complete_quest(&mut hero, &quests, "first_steps").unwrap();
    assert_eq!(hero.gold, 125);
    let sword = get_item(&items, "iron_sword").unwrap().clone();
    purchase_item(&mut hero, &sword).unwrap();
    equip_item(&mut hero, &sword, EquipSlot::Weapon).unwrap();
    assert_eq!(hero.strength, 20);

    // The seeded chain runs unbroken from the tutorial to the dragon.
    let chain: Vec<&str> = prerequisite_chain(&quests, "dragons_hoard")
        .unwrap()
        .iter()
        .map(|q| q.quest_id.as_str())
        .collect();
    assert_eq!(
        chain,
        vec!["first_steps", "goblin_menace", "orc_warlord", "dragons_hoard"]
    );
}

#[test]
fn test_restart_reads_identical_tables() {
    let dir = boot_dir();
    let (items_first, quests_first) = load_game_data(&dir).unwrap();
    let (items_second, quests_second) = load_game_data(&dir).unwrap();
    assert_eq!(items_first, items_second);
    assert_eq!(quests_first, quests_second);
}

// =============================================================================
// Edits and damage
// =============================================================================

#[test]
fn test_hand_edited_quests_survive_a_restart() {
    let dir = boot_dir();
    load_game_data(&dir).unwrap();

    fs::write(
        dir.join(QUESTS_FILE_NAME),
        "QUEST_ID: homebrew\nTITLE: Homebrew\nDESCRIPTION: A custom adventure.\n\
         REWARD_XP: 10\nREWARD_GOLD: 5\nREQUIRED_LEVEL: 1\nPREREQUISITE: none\n",
    )
    .unwrap();

    let (items, quests) = load_game_data(&dir).unwrap();
    assert_eq!(quests.len(), 1, "the edited file is not clobbered");
    assert!(quests.contains_key("homebrew"));
    assert_eq!(items.len(), 5, "the untouched file keeps its defaults");
}

#[test]
fn test_a_deleted_data_file_is_reseeded() {
    let dir = boot_dir();
    load_game_data(&dir).unwrap();

    fs::remove_file(dir.join(ITEMS_FILE_NAME)).unwrap();
    let (items, _) = load_game_data(&dir).unwrap();
    assert_eq!(items.len(), 5);
    assert!(dir.join(ITEMS_FILE_NAME).exists());
}

#[test]
fn test_a_damaged_data_file_fails_fast_naming_the_file() {
    let dir = boot_dir();
    load_game_data(&dir).unwrap();

    fs::write(dir.join(ITEMS_FILE_NAME), "this is not a data file").unwrap();
    let err = load_game_data(&dir).unwrap_err();
    match err {
        GameError::InvalidDataFormat { path, .. } => {
            assert!(path.ends_with(ITEMS_FILE_NAME));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}
