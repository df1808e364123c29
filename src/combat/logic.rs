//! Turn-based battle resolution.
//!
//! A [`Battle`] binds one enemy copy to one live character. Each round the
//! player acts, then the enemy replies if both sides still stand; the end
//! condition is checked after every half-turn so a killing blow lands
//! before any retaliation.

use rand::Rng;

use crate::character::progression::{add_gold, gain_experience};
use crate::character::types::{Character, ClassKind};
use crate::combat::types::Enemy;
use crate::constants::{
    CLERIC_HEAL_AMOUNT, CRIT_CHANCE_PERCENT, DEFENSE_DIVISOR, ESCAPE_CHANCE_PERCENT, MIN_DAMAGE,
};
use crate::error::{GameError, GameResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    Victory,
    Defeat,
    Escaped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleState {
    Active,
    Ended(BattleOutcome),
}

/// What the player does with their half of the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    Attack,
    Special,
    Flee,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CombatEvent {
    PlayerAttack { damage: u32 },
    PowerStrike { damage: u32 },
    Fireball { damage: u32 },
    CriticalStrike { damage: u32, was_crit: bool },
    Heal { restored: u32 },
    EnemyAttack { damage: u32 },
    EscapeFailed,
    Escaped,
    EnemyDied { xp_gained: u32, gold_gained: u32, levels_gained: u32 },
    PlayerDied,
}

/// Basic attack damage, both directions: a quarter of the defender's
/// strength is soaked, and anything lands for at least 1.
pub fn attack_damage(attacker_strength: u32, defender_strength: u32) -> u32 {
    attacker_strength
        .saturating_sub(defender_strength / DEFENSE_DIVISOR)
        .max(MIN_DAMAGE)
}

#[derive(Debug)]
pub struct Battle {
    pub enemy: Enemy,
    pub state: BattleState,
    pub round: u32,
}

impl Battle {
    /// Opens a battle against `enemy`. The dead don't fight.
    pub fn start(character: &Character, enemy: Enemy) -> GameResult<Self> {
        if character.is_dead() {
            return Err(GameError::CharacterDead);
        }
        Ok(Self {
            enemy,
            state: BattleState::Active,
            round: 1,
        })
    }

    pub fn is_active(&self) -> bool {
        self.state == BattleState::Active
    }

    /// Runs one full round and reports what happened. A successful
    /// escape or a kill on the player's half skips the enemy's reply.
    /// Victory pays the enemy's bounty through the progression path, so
    /// level-ups cascade here too.
    pub fn play_round(
        &mut self,
        character: &mut Character,
        action: PlayerAction,
        rng: &mut impl Rng,
    ) -> GameResult<Vec<CombatEvent>> {
        if !self.is_active() {
            return Err(GameError::CombatNotActive);
        }
        let mut events = Vec::new();

        match action {
            PlayerAction::Attack => {
                let damage = attack_damage(character.strength, self.enemy.strength);
                self.enemy.take_damage(damage);
                events.push(CombatEvent::PlayerAttack { damage });
            }
            PlayerAction::Special => self.use_special(character, rng, &mut events),
            PlayerAction::Flee => {
                if rng.gen_range(0..100) < ESCAPE_CHANCE_PERCENT {
                    self.state = BattleState::Ended(BattleOutcome::Escaped);
                    events.push(CombatEvent::Escaped);
                    return Ok(events);
                }
                // Failed escape forfeits the rest of the turn.
                events.push(CombatEvent::EscapeFailed);
            }
        }

        if self.check_end(character, &mut events)? {
            return Ok(events);
        }

        let damage = attack_damage(self.enemy.strength, character.strength);
        character.take_damage(damage);
        events.push(CombatEvent::EnemyAttack { damage });

        self.check_end(character, &mut events)?;
        self.round += 1;
        Ok(events)
    }

    /// Class ability, used in place of the basic attack. Specials ignore
    /// the defender's strength soak.
    fn use_special(
        &mut self,
        character: &mut Character,
        rng: &mut impl Rng,
        events: &mut Vec<CombatEvent>,
    ) {
        match character.class {
            ClassKind::Warrior => {
                let damage = (character.strength * 2).max(MIN_DAMAGE);
                self.enemy.take_damage(damage);
                events.push(CombatEvent::PowerStrike { damage });
            }
            ClassKind::Mage => {
                let damage = (character.magic * 2).max(MIN_DAMAGE);
                self.enemy.take_damage(damage);
                events.push(CombatEvent::Fireball { damage });
            }
            ClassKind::Rogue => {
                let was_crit = rng.gen_range(0..100) < CRIT_CHANCE_PERCENT;
                let multiplier = if was_crit { 3 } else { 1 };
                let damage = (character.strength * multiplier).max(MIN_DAMAGE);
                self.enemy.take_damage(damage);
                events.push(CombatEvent::CriticalStrike { damage, was_crit });
            }
            ClassKind::Cleric => {
                let restored = character.heal(CLERIC_HEAL_AMOUNT);
                events.push(CombatEvent::Heal { restored });
            }
        }
    }

    /// Checks both end conditions; enemy death wins ties since it is
    /// tested first. Returns whether the battle ended.
    fn check_end(
        &mut self,
        character: &mut Character,
        events: &mut Vec<CombatEvent>,
    ) -> GameResult<bool> {
        if !self.enemy.is_alive() {
            self.state = BattleState::Ended(BattleOutcome::Victory);
            let levels_gained = gain_experience(character, self.enemy.xp_reward)?;
            add_gold(character, self.enemy.gold_reward as i64)?;
            events.push(CombatEvent::EnemyDied {
                xp_gained: self.enemy.xp_reward,
                gold_gained: self.enemy.gold_reward,
                levels_gained,
            });
            return Ok(true);
        }
        if character.is_dead() {
            self.state = BattleState::Ended(BattleOutcome::Defeat);
            events.push(CombatEvent::PlayerDied);
            return Ok(true);
        }
        Ok(false)
    }
}
