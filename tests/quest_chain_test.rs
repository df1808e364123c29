//! Integration test: the quest prerequisite state machine.
//!
//! Drives a character through a three-link quest chain end to end,
//! covering gating by level and prerequisite, reward payout through
//! progression, re-completion refusal, and chain reporting.

use quest_chronicles::character::types::{Character, ClassKind};
use quest_chronicles::error::GameError;
use quest_chronicles::quests::logic::{
    abandon_quest, accept_quest, available_quests, can_accept_quest, complete_quest,
    completion_percentage, prerequisite_chain, total_rewards_earned, validate_prerequisites,
};
use quest_chronicles::quests::types::{QuestDef, QuestTable};

fn chain_table() -> QuestTable {
    [
        QuestDef::new("first_steps", "First Steps", "Talk to the elder.", 50, 25, 1, None),
        QuestDef::new(
            "goblin_menace",
            "The Goblin Menace",
            "Clear the eastern road.",
            100,
            50,
            2,
            Some("first_steps"),
        ),
        QuestDef::new(
            "orc_warlord",
            "The Orc Warlord",
            "End the warband.",
            250,
            125,
            4,
            Some("goblin_menace"),
        ),
    ]
    .into_iter()
    .map(|quest| (quest.quest_id.clone(), quest))
    .collect()
}

// =============================================================================
// Walking the chain
// =============================================================================

#[test]
fn test_chain_walk_from_first_steps_to_the_warlord() {
    let quests = chain_table();
    validate_prerequisites(&quests).unwrap();

    let mut hero = Character::new("Aldric", ClassKind::Warrior);

    // Only the root is open to a fresh level 1 hero.
    let open: Vec<&str> = available_quests(&hero, &quests)
        .iter()
        .map(|q| q.quest_id.as_str())
        .collect();
    assert_eq!(open, vec!["first_steps"]);

    accept_quest(&mut hero, &quests, "first_steps").unwrap();
    let rewards = complete_quest(&mut hero, &quests, "first_steps").unwrap();
    assert_eq!((rewards.xp, rewards.gold), (50, 25));
    assert_eq!(hero.completed_quests, vec!["first_steps"]);

    // Prerequisite now met, but the level gate still holds.
    let err = accept_quest(&mut hero, &quests, "goblin_menace").unwrap_err();
    assert!(matches!(
        err,
        GameError::InsufficientLevel { required: 2, actual: 1 }
    ));

    // 50 quest xp plus 50 more crosses the level 2 threshold.
    quest_chronicles::character::progression::gain_experience(&mut hero, 50).unwrap();
    assert_eq!(hero.level, 2);

    accept_quest(&mut hero, &quests, "goblin_menace").unwrap();
    let rewards = complete_quest(&mut hero, &quests, "goblin_menace").unwrap();
    // 100 xp sits under level 2's 200 threshold.
    assert_eq!(rewards.levels_gained, 0);
    assert_eq!(hero.level, 2);
    assert_eq!(hero.experience, 100);

    // Two levels short of the warlord: 100 more buys level 3, then 300
    // buys level 4.
    assert!(!can_accept_quest(&hero, &quests, "orc_warlord"));
    quest_chronicles::character::progression::gain_experience(&mut hero, 400).unwrap();
    assert_eq!(hero.level, 4);

    accept_quest(&mut hero, &quests, "orc_warlord").unwrap();
    complete_quest(&mut hero, &quests, "orc_warlord").unwrap();

    assert_eq!(
        hero.completed_quests,
        vec!["first_steps", "goblin_menace", "orc_warlord"]
    );
    assert!(hero.active_quests.is_empty());
    assert!(available_quests(&hero, &quests).is_empty());
    assert_eq!(completion_percentage(&hero, &quests), 100.0);

    let totals = total_rewards_earned(&hero, &quests);
    assert_eq!((totals.xp, totals.gold), (400, 200));
}

#[test]
fn test_prerequisite_blocks_until_completed_not_just_accepted() {
    let quests = chain_table();
    let mut hero = Character::new("Mira", ClassKind::Mage);
    hero.level = 10;

    accept_quest(&mut hero, &quests, "first_steps").unwrap();

    // Active is not completed; the next link stays shut.
    let err = accept_quest(&mut hero, &quests, "goblin_menace").unwrap_err();
    assert!(matches!(err, GameError::QuestRequirementsNotMet(_)));

    complete_quest(&mut hero, &quests, "first_steps").unwrap();
    accept_quest(&mut hero, &quests, "goblin_menace").unwrap();
}

// =============================================================================
// State conflicts
// =============================================================================

#[test]
fn test_completion_is_once_only() {
    let quests = chain_table();
    let mut hero = Character::new("Aldric", ClassKind::Warrior);

    accept_quest(&mut hero, &quests, "first_steps").unwrap();
    complete_quest(&mut hero, &quests, "first_steps").unwrap();
    let gold_after = hero.gold;

    let err = complete_quest(&mut hero, &quests, "first_steps").unwrap_err();
    assert!(matches!(err, GameError::QuestNotActive(_)));
    assert_eq!(hero.gold, gold_after, "no double payout");

    let err = accept_quest(&mut hero, &quests, "first_steps").unwrap_err();
    assert!(matches!(err, GameError::QuestAlreadyCompleted(_)));
}

#[test]
fn test_abandon_forfeits_rewards_but_allows_retry() {
    let quests = chain_table();
    let mut hero = Character::new("Aldric", ClassKind::Warrior);

    accept_quest(&mut hero, &quests, "first_steps").unwrap();
    abandon_quest(&mut hero, "first_steps").unwrap();

    assert!(hero.active_quests.is_empty());
    assert!(hero.completed_quests.is_empty());
    assert_eq!(hero.experience, 0);

    accept_quest(&mut hero, &quests, "first_steps").unwrap();
}

#[test]
fn test_the_dead_complete_nothing() {
    let quests = chain_table();
    let mut hero = Character::new("Aldric", ClassKind::Warrior);
    accept_quest(&mut hero, &quests, "first_steps").unwrap();
    hero.health = 0;

    let err = complete_quest(&mut hero, &quests, "first_steps").unwrap_err();
    assert!(matches!(err, GameError::CharacterDead));
    assert_eq!(hero.active_quests, vec!["first_steps"], "quest stays active");
    assert!(hero.completed_quests.is_empty());
}

// =============================================================================
// Chain reporting and table validation
// =============================================================================

#[test]
fn test_prerequisite_chain_lists_earliest_ancestor_first() {
    let quests = chain_table();
    let chain = prerequisite_chain(&quests, "orc_warlord").unwrap();
    let ids: Vec<&str> = chain.iter().map(|q| q.quest_id.as_str()).collect();
    assert_eq!(ids, vec!["first_steps", "goblin_menace", "orc_warlord"]);

    let root = prerequisite_chain(&quests, "first_steps").unwrap();
    assert_eq!(root.len(), 1);
}

#[test]
fn test_validation_rejects_dangling_prerequisites() {
    let mut quests = chain_table();
    quests.insert(
        "lost_link".to_string(),
        QuestDef::new("lost_link", "Lost", "?", 10, 10, 1, Some("never_written")),
    );

    let err = validate_prerequisites(&quests).unwrap_err();
    assert!(matches!(err, GameError::QuestNotFound(id) if id == "never_written"));
}

#[test]
fn test_validation_rejects_prerequisite_cycles() {
    let mut quests = QuestTable::new();
    quests.insert(
        "a".to_string(),
        QuestDef::new("a", "A", "", 10, 10, 1, Some("b")),
    );
    quests.insert(
        "b".to_string(),
        QuestDef::new("b", "B", "", 10, 10, 1, Some("a")),
    );

    let err = validate_prerequisites(&quests).unwrap_err();
    assert!(matches!(err, GameError::QuestCycle(_)));
}
