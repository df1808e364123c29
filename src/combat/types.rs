use crate::constants::{DRAGON_MIN_LEVEL, ORC_MIN_LEVEL};

/// The enemy roster, banded by character level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyKind {
    Goblin,
    Orc,
    Dragon,
}

impl EnemyKind {
    pub fn name(&self) -> &'static str {
        match self {
            EnemyKind::Goblin => "Goblin",
            EnemyKind::Orc => "Orc",
            EnemyKind::Dragon => "Dragon",
        }
    }

    /// Which tier a character of this level runs into. A plain banded
    /// lookup: low levels meet goblins, mid levels orcs, then dragons.
    pub fn for_level(level: u32) -> Self {
        if level >= DRAGON_MIN_LEVEL {
            EnemyKind::Dragon
        } else if level >= ORC_MIN_LEVEL {
            EnemyKind::Orc
        } else {
            EnemyKind::Goblin
        }
    }

    /// Stamps out a fresh full-health copy of this tier.
    pub fn spawn(&self) -> Enemy {
        let (max_health, strength, magic, xp_reward, gold_reward) = match self {
            EnemyKind::Goblin => (50, 8, 2, 25, 10),
            EnemyKind::Orc => (80, 12, 5, 50, 25),
            EnemyKind::Dragon => (200, 25, 15, 200, 100),
        };
        Enemy {
            name: self.name().to_string(),
            kind: *self,
            health: max_health,
            max_health,
            strength,
            magic,
            xp_reward,
            gold_reward,
        }
    }
}

/// An ephemeral opponent. Each battle owns its own copy; enemies are
/// never persisted or shared.
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub name: String,
    pub kind: EnemyKind,
    pub health: u32,
    pub max_health: u32,
    pub strength: u32,
    pub magic: u32,
    pub xp_reward: u32,
    pub gold_reward: u32,
}

impl Enemy {
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }
}

/// Spawns the tier matching the character's level.
pub fn enemy_for_level(level: u32) -> Enemy {
    EnemyKind::for_level(level).spawn()
}
