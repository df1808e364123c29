//! Experience accrual, level-ups, gold, and revival.

use crate::character::types::Character;
use crate::constants::{
    LEVEL_UP_MAGIC_BONUS, LEVEL_UP_MAX_HEALTH_BONUS, LEVEL_UP_STRENGTH_BONUS,
    REVIVE_HEALTH_DIVISOR, XP_PER_LEVEL_BASE,
};
use crate::error::{GameError, GameResult};

/// Experience needed to leave the character's current level.
pub fn xp_to_next_level(character: &Character) -> u32 {
    character.level.saturating_mul(XP_PER_LEVEL_BASE)
}

/// Adds experience and resolves every level-up it pays for, not just the
/// first: each level costs `level * 100`, grants +10 max health, +2
/// strength, +2 magic, and fully heals. Levels are uncapped. Returns the
/// number of levels gained. The dead earn nothing.
pub fn gain_experience(character: &mut Character, amount: u32) -> GameResult<u32> {
    if character.is_dead() {
        return Err(GameError::CharacterDead);
    }
    character.experience = character.experience.saturating_add(amount);
    let mut levels_gained = 0;
    loop {
        let threshold = xp_to_next_level(character);
        if character.experience < threshold {
            break;
        }
        character.experience -= threshold;
        character.level += 1;
        character.max_health += LEVEL_UP_MAX_HEALTH_BONUS;
        character.strength += LEVEL_UP_STRENGTH_BONUS;
        character.magic += LEVEL_UP_MAGIC_BONUS;
        character.health = character.max_health;
        levels_gained += 1;
    }
    Ok(levels_gained)
}

/// Adjusts gold by `delta` (negative spends). Fails without touching the
/// balance when it would go below zero. Returns the new total.
pub fn add_gold(character: &mut Character, delta: i64) -> GameResult<u32> {
    let new_total = character.gold as i64 + delta;
    if new_total < 0 {
        return Err(GameError::InsufficientGold {
            have: character.gold,
            need: delta.unsigned_abs() as u32,
        });
    }
    character.gold = new_total.min(u32::MAX as i64) as u32;
    Ok(character.gold)
}

/// Sets health to half of max (floored). Deliberately unconditional:
/// calling this on a living character is allowed and just resets health.
pub fn revive(character: &mut Character) -> u32 {
    character.health = character.max_health / REVIVE_HEALTH_DIVISOR;
    character.health
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::types::ClassKind;

    #[test]
    fn test_exact_threshold_levels_once() {
        let mut c = Character::new("Test", ClassKind::Warrior);
        c.health = 60;
        let levels = gain_experience(&mut c, 100).unwrap();
        assert_eq!(levels, 1);
        assert_eq!(c.level, 2);
        assert_eq!(c.experience, 0);
        assert_eq!(c.max_health, 130);
        assert_eq!(c.strength, 17);
        assert_eq!(c.magic, 7);
        assert_eq!(c.health, 130);
    }

    #[test]
    fn test_below_threshold_accumulates_only() {
        let mut c = Character::new("Test", ClassKind::Rogue);
        gain_experience(&mut c, 99).unwrap();
        assert_eq!(c.level, 1);
        assert_eq!(c.experience, 99);
        assert_eq!(c.strength, 12);
    }

    #[test]
    fn test_large_grant_resolves_multiple_levels() {
        // 100 for level 1->2, 200 for 2->3, 50 left over.
        let mut c = Character::new("Test", ClassKind::Mage);
        let levels = gain_experience(&mut c, 350).unwrap();
        assert_eq!(levels, 2);
        assert_eq!(c.level, 3);
        assert_eq!(c.experience, 50);
        assert_eq!(c.max_health, 100);
        assert_eq!(c.strength, 12);
        assert_eq!(c.magic, 24);
        assert_eq!(c.health, c.max_health);
    }

    #[test]
    fn test_carryover_counts_toward_new_threshold() {
        let mut c = Character::new("Test", ClassKind::Cleric);
        gain_experience(&mut c, 150).unwrap();
        assert_eq!(c.level, 2);
        assert_eq!(c.experience, 50);
        // Level 2 needs 200 more; 149 is not enough.
        gain_experience(&mut c, 149).unwrap();
        assert_eq!(c.level, 2);
        assert_eq!(c.experience, 199);
        gain_experience(&mut c, 1).unwrap();
        assert_eq!(c.level, 3);
        assert_eq!(c.experience, 0);
    }

    #[test]
    fn test_dead_character_gains_nothing() {
        let mut c = Character::new("Test", ClassKind::Warrior);
        c.health = 0;
        let err = gain_experience(&mut c, 100).unwrap_err();
        assert!(matches!(err, GameError::CharacterDead));
        assert_eq!(c.experience, 0);
        assert_eq!(c.level, 1);
    }

    #[test]
    fn test_add_gold_earns_and_spends() {
        let mut c = Character::new("Test", ClassKind::Warrior);
        assert_eq!(add_gold(&mut c, 50).unwrap(), 150);
        assert_eq!(add_gold(&mut c, -150).unwrap(), 0);
    }

    #[test]
    fn test_overspend_fails_and_leaves_gold_unchanged() {
        let mut c = Character::new("Test", ClassKind::Warrior);
        let err = add_gold(&mut c, -150).unwrap_err();
        assert!(matches!(err, GameError::InsufficientGold { have: 100, need: 150 }));
        assert_eq!(c.gold, 100);
    }

    #[test]
    fn test_revive_sets_half_max_health() {
        let mut c = Character::new("Test", ClassKind::Warrior);
        c.health = 0;
        assert_eq!(revive(&mut c), 60);
        assert_eq!(c.health, 60);
    }

    #[test]
    fn test_revive_on_living_character_resets_health() {
        let mut c = Character::new("Test", ClassKind::Cleric);
        assert_eq!(c.health, 100);
        assert_eq!(revive(&mut c), 50);
        assert_eq!(c.health, 50);
    }

    #[test]
    fn test_revive_floors_odd_max_health() {
        let mut c = Character::new("Test", ClassKind::Warrior);
        c.max_health = 125;
        assert_eq!(revive(&mut c), 62);
    }
}
