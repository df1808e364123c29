//! The quest state machine: accept, complete, abandon, and the lookups
//! the journal screens are built from.
//!
//! A quest id lives in exactly one place per character: nowhere, the
//! active list, or the completed list. Every transition here either
//! finishes or fails without moving the id.

use crate::character::progression::{add_gold, gain_experience};
use crate::character::types::Character;
use crate::error::{GameError, GameResult};
use crate::quests::types::{QuestDef, QuestTable};

/// What completing a quest paid out, including any level-ups the
/// experience grant resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestRewards {
    pub xp: u32,
    pub gold: u32,
    pub levels_gained: u32,
}

/// Rewards already banked across all completed quests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RewardTotals {
    pub xp: u32,
    pub gold: u32,
}

/// Looks up a quest definition, failing on ids the table does not know.
pub fn get_quest<'a>(quests: &'a QuestTable, quest_id: &str) -> GameResult<&'a QuestDef> {
    quests
        .get(quest_id)
        .ok_or_else(|| GameError::QuestNotFound(quest_id.to_string()))
}

/// Moves a quest onto the active list. Checks run in a fixed order:
/// unknown id, then level, then already-completed, then requirements
/// (already active, or prerequisite not completed).
pub fn accept_quest(
    character: &mut Character,
    quests: &QuestTable,
    quest_id: &str,
) -> GameResult<()> {
    let quest = get_quest(quests, quest_id)?;
    if character.level < quest.required_level {
        return Err(GameError::InsufficientLevel {
            required: quest.required_level,
            actual: character.level,
        });
    }
    if character.has_completed_quest(quest_id) {
        return Err(GameError::QuestAlreadyCompleted(quest_id.to_string()));
    }
    if character.has_active_quest(quest_id) {
        return Err(GameError::QuestRequirementsNotMet(quest_id.to_string()));
    }
    if let Some(prereq) = &quest.prerequisite {
        if !character.has_completed_quest(prereq) {
            return Err(GameError::QuestRequirementsNotMet(quest_id.to_string()));
        }
    }
    character.active_quests.push(quest_id.to_string());
    Ok(())
}

/// Moves an active quest to the completed list and pays out its
/// rewards. The dead complete nothing, and on any failure the quest
/// stays active with nothing granted.
pub fn complete_quest(
    character: &mut Character,
    quests: &QuestTable,
    quest_id: &str,
) -> GameResult<QuestRewards> {
    let quest = get_quest(quests, quest_id)?;
    let Some(index) = character.active_quests.iter().position(|id| id == quest_id) else {
        return Err(GameError::QuestNotActive(quest_id.to_string()));
    };
    if character.is_dead() {
        return Err(GameError::CharacterDead);
    }
    character.active_quests.remove(index);
    character.completed_quests.push(quest_id.to_string());
    let levels_gained = gain_experience(character, quest.reward_xp)?;
    add_gold(character, quest.reward_gold as i64)?;
    Ok(QuestRewards {
        xp: quest.reward_xp,
        gold: quest.reward_gold,
        levels_gained,
    })
}

/// Drops an active quest with no reward. It can be re-accepted later.
pub fn abandon_quest(character: &mut Character, quest_id: &str) -> GameResult<()> {
    match character.active_quests.iter().position(|id| id == quest_id) {
        Some(index) => {
            character.active_quests.remove(index);
            Ok(())
        }
        None => Err(GameError::QuestNotActive(quest_id.to_string())),
    }
}

/// Whether [`accept_quest`] would succeed right now.
pub fn can_accept_quest(character: &Character, quests: &QuestTable, quest_id: &str) -> bool {
    let Some(quest) = quests.get(quest_id) else {
        return false;
    };
    if character.level < quest.required_level
        || character.has_completed_quest(quest_id)
        || character.has_active_quest(quest_id)
    {
        return false;
    }
    match &quest.prerequisite {
        Some(prereq) => character.has_completed_quest(prereq),
        None => true,
    }
}

/// Every quest the character could accept right now, in table order.
pub fn available_quests<'a>(character: &Character, quests: &'a QuestTable) -> Vec<&'a QuestDef> {
    quests
        .values()
        .filter(|quest| can_accept_quest(character, quests, &quest.quest_id))
        .collect()
}

/// Definitions for the character's active quests, in acceptance order.
/// Ids the table no longer knows are skipped rather than failed, so a
/// trimmed data file does not brick an old save.
pub fn active_quests<'a>(character: &Character, quests: &'a QuestTable) -> Vec<&'a QuestDef> {
    character
        .active_quests
        .iter()
        .filter_map(|id| quests.get(id))
        .collect()
}

/// Definitions for the character's completed quests, in completion order.
pub fn completed_quests<'a>(character: &Character, quests: &'a QuestTable) -> Vec<&'a QuestDef> {
    character
        .completed_quests
        .iter()
        .filter_map(|id| quests.get(id))
        .collect()
}

/// The full prerequisite line ending at `quest_id`, earliest ancestor
/// first and the quest itself last. Fails if any link names an unknown
/// quest. Call [`validate_prerequisites`] first; a cyclic table would
/// walk forever.
pub fn prerequisite_chain<'a>(
    quests: &'a QuestTable,
    quest_id: &str,
) -> GameResult<Vec<&'a QuestDef>> {
    let mut current = get_quest(quests, quest_id)?;
    let mut chain = vec![current];
    while let Some(prereq_id) = &current.prerequisite {
        current = get_quest(quests, prereq_id)?;
        chain.insert(0, current);
    }
    Ok(chain)
}

/// Checks the whole table: every prerequisite must name a quest that
/// exists, and no quest may sit on a prerequisite cycle. Run once after
/// loading, before the table is used.
pub fn validate_prerequisites(quests: &QuestTable) -> GameResult<()> {
    for (quest_id, quest) in quests {
        let mut seen = vec![quest_id.as_str()];
        let mut current = quest.prerequisite.as_deref();
        while let Some(prereq_id) = current {
            let prereq = quests
                .get(prereq_id)
                .ok_or_else(|| GameError::QuestNotFound(prereq_id.to_string()))?;
            if seen.contains(&prereq_id) {
                return Err(GameError::QuestCycle(quest_id.clone()));
            }
            seen.push(prereq_id);
            current = prereq.prerequisite.as_deref();
        }
    }
    Ok(())
}

/// Share of the table's quests this character has completed, 0 to 100.
pub fn completion_percentage(character: &Character, quests: &QuestTable) -> f64 {
    if quests.is_empty() {
        return 0.0;
    }
    character.completed_quests.len() as f64 / quests.len() as f64 * 100.0
}

/// Sums the rewards of every completed quest still present in the table.
pub fn total_rewards_earned(character: &Character, quests: &QuestTable) -> RewardTotals {
    completed_quests(character, quests)
        .iter()
        .fold(RewardTotals::default(), |totals, quest| RewardTotals {
            xp: totals.xp + quest.reward_xp,
            gold: totals.gold + quest.reward_gold,
        })
}

/// Quests whose required level falls inside `min..=max`, in table order.
pub fn quests_by_level<'a>(quests: &'a QuestTable, min: u32, max: u32) -> Vec<&'a QuestDef> {
    quests
        .values()
        .filter(|quest| quest.required_level >= min && quest.required_level <= max)
        .collect()
}
