use std::fmt;
use std::str::FromStr;

use crate::constants::*;
use crate::error::GameError;
use crate::items::effects::ItemEffect;

/// The four playable archetypes. Fixed for the lifetime of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassKind {
    Warrior,
    Mage,
    Rogue,
    Cleric,
}

impl ClassKind {
    pub const ALL: [ClassKind; 4] = [
        ClassKind::Warrior,
        ClassKind::Mage,
        ClassKind::Rogue,
        ClassKind::Cleric,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ClassKind::Warrior => "Warrior",
            ClassKind::Mage => "Mage",
            ClassKind::Rogue => "Rogue",
            ClassKind::Cleric => "Cleric",
        }
    }

    pub fn base_max_health(&self) -> u32 {
        match self {
            ClassKind::Warrior => 120,
            ClassKind::Mage => 80,
            ClassKind::Rogue => 90,
            ClassKind::Cleric => 100,
        }
    }

    pub fn base_strength(&self) -> u32 {
        match self {
            ClassKind::Warrior => 15,
            ClassKind::Mage => 8,
            ClassKind::Rogue => 12,
            ClassKind::Cleric => 10,
        }
    }

    pub fn base_magic(&self) -> u32 {
        match self {
            ClassKind::Warrior => 5,
            ClassKind::Mage => 20,
            ClassKind::Rogue => 10,
            ClassKind::Cleric => 15,
        }
    }

    /// One-line flavor text for the class selection screen.
    pub fn blurb(&self) -> &'static str {
        match self {
            ClassKind::Warrior => "Heavy hitter with the largest health pool",
            ClassKind::Mage => "Fragile, but Fireball scales with high magic",
            ClassKind::Rogue => "Balanced stats and a chance at triple damage",
            ClassKind::Cleric => "Sturdy support that can heal mid-battle",
        }
    }

    /// Display name of the class's battle special.
    pub fn special_name(&self) -> &'static str {
        match self {
            ClassKind::Warrior => "Power Strike",
            ClassKind::Mage => "Fireball",
            ClassKind::Rogue => "Critical Strike",
            ClassKind::Cleric => "Heal",
        }
    }
}

impl fmt::Display for ClassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ClassKind {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "warrior" => Ok(ClassKind::Warrior),
            "mage" => Ok(ClassKind::Mage),
            "rogue" => Ok(ClassKind::Rogue),
            "cleric" => Ok(ClassKind::Cleric),
            _ => Err(GameError::InvalidClass(s.to_string())),
        }
    }
}

/// An equipped item id plus the stat delta it applied, kept so the
/// delta can be reversed exactly when the item comes off.
#[derive(Debug, Clone, PartialEq)]
pub struct EquippedItem {
    pub item_id: String,
    pub effect: ItemEffect,
}

/// The player's persistent state. Mutated in place by every engine;
/// the single source of truth for a session.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub name: String,
    pub class: ClassKind,
    pub level: u32,
    pub health: u32,
    pub max_health: u32,
    pub strength: u32,
    pub magic: u32,
    pub experience: u32,
    pub gold: u32,
    /// Carried item ids, duplicates allowed, capped at [`INVENTORY_CAPACITY`].
    pub inventory: Vec<String>,
    pub active_quests: Vec<String>,
    pub completed_quests: Vec<String>,
    pub equipped_weapon: Option<EquippedItem>,
    pub equipped_armor: Option<EquippedItem>,
}

impl Character {
    pub fn new(name: &str, class: ClassKind) -> Self {
        Self {
            name: name.to_string(),
            class,
            level: STARTING_LEVEL,
            health: class.base_max_health(),
            max_health: class.base_max_health(),
            strength: class.base_strength(),
            magic: class.base_magic(),
            experience: 0,
            gold: STARTING_GOLD,
            inventory: Vec::new(),
            active_quests: Vec::new(),
            completed_quests: Vec::new(),
            equipped_weapon: None,
            equipped_armor: None,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }

    /// Restores up to `amount` health, clamped at max. Returns the
    /// amount actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.health;
        self.health = self.health.saturating_add(amount).min(self.max_health);
        self.health - before
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    pub fn has_item(&self, item_id: &str) -> bool {
        self.inventory.iter().any(|id| id == item_id)
    }

    pub fn count_item(&self, item_id: &str) -> usize {
        self.inventory.iter().filter(|id| *id == item_id).count()
    }

    pub fn inventory_space(&self) -> usize {
        INVENTORY_CAPACITY.saturating_sub(self.inventory.len())
    }

    pub fn has_active_quest(&self, quest_id: &str) -> bool {
        self.active_quests.iter().any(|id| id == quest_id)
    }

    pub fn has_completed_quest(&self, quest_id: &str) -> bool {
        self.completed_quests.iter().any(|id| id == quest_id)
    }

    /// Structural invariant check for records coming back from disk.
    /// Freshly created characters always pass.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("character name is empty".to_string());
        }
        if self.level < 1 {
            return Err("level must be at least 1".to_string());
        }
        if self.max_health == 0 {
            return Err("max health must be positive".to_string());
        }
        if self.health > self.max_health {
            return Err(format!(
                "health {} exceeds max health {}",
                self.health, self.max_health
            ));
        }
        if self.inventory.len() > INVENTORY_CAPACITY {
            return Err(format!(
                "inventory holds {} items, capacity is {}",
                self.inventory.len(),
                INVENTORY_CAPACITY
            ));
        }
        if let Some(id) = self
            .active_quests
            .iter()
            .find(|id| self.completed_quests.contains(id))
        {
            return Err(format!("quest '{}' is both active and completed", id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warrior_base_stats() {
        let c = Character::new("Conan", ClassKind::Warrior);
        assert_eq!(c.level, 1);
        assert_eq!(c.health, 120);
        assert_eq!(c.max_health, 120);
        assert_eq!(c.strength, 15);
        assert_eq!(c.magic, 5);
        assert_eq!(c.experience, 0);
        assert_eq!(c.gold, 100);
        assert!(c.inventory.is_empty());
        assert!(c.equipped_weapon.is_none());
    }

    #[test]
    fn test_all_class_base_stats() {
        let expected = [
            (ClassKind::Warrior, 120, 15, 5),
            (ClassKind::Mage, 80, 8, 20),
            (ClassKind::Rogue, 90, 12, 10),
            (ClassKind::Cleric, 100, 10, 15),
        ];
        for (class, hp, strength, magic) in expected {
            let c = Character::new("Test", class);
            assert_eq!(c.max_health, hp, "{} hp", class);
            assert_eq!(c.strength, strength, "{} strength", class);
            assert_eq!(c.magic, magic, "{} magic", class);
        }
    }

    #[test]
    fn test_class_parse_case_insensitive() {
        assert_eq!("warrior".parse::<ClassKind>().unwrap(), ClassKind::Warrior);
        assert_eq!("MAGE".parse::<ClassKind>().unwrap(), ClassKind::Mage);
        assert_eq!(" Rogue ".parse::<ClassKind>().unwrap(), ClassKind::Rogue);
        assert!("paladin".parse::<ClassKind>().is_err());
    }

    #[test]
    fn test_heal_clamps_to_max() {
        let mut c = Character::new("Test", ClassKind::Mage);
        c.health = 50;
        let healed = c.heal(100);
        assert_eq!(healed, 30);
        assert_eq!(c.health, 80);
    }

    #[test]
    fn test_heal_at_full_restores_nothing() {
        let mut c = Character::new("Test", ClassKind::Mage);
        assert_eq!(c.heal(10), 0);
        assert_eq!(c.health, 80);
    }

    #[test]
    fn test_take_damage_no_underflow() {
        let mut c = Character::new("Test", ClassKind::Rogue);
        c.take_damage(500);
        assert_eq!(c.health, 0);
        assert!(c.is_dead());
    }

    #[test]
    fn test_count_item_with_duplicates() {
        let mut c = Character::new("Test", ClassKind::Cleric);
        c.inventory.push("health_potion".to_string());
        c.inventory.push("iron_sword".to_string());
        c.inventory.push("health_potion".to_string());
        assert_eq!(c.count_item("health_potion"), 2);
        assert!(c.has_item("iron_sword"));
        assert!(!c.has_item("dragon_scale"));
        assert_eq!(c.inventory_space(), 17);
    }

    #[test]
    fn test_validate_rejects_health_over_max() {
        let mut c = Character::new("Test", ClassKind::Warrior);
        c.health = c.max_health + 1;
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_overlapping_quest_lists() {
        let mut c = Character::new("Test", ClassKind::Warrior);
        c.active_quests.push("first_steps".to_string());
        c.completed_quests.push("first_steps".to_string());
        assert!(c.validate().is_err());
    }
}
