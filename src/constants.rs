// Character creation and progression
pub const STARTING_LEVEL: u32 = 1;
pub const STARTING_GOLD: u32 = 100;
pub const XP_PER_LEVEL_BASE: u32 = 100;
pub const LEVEL_UP_MAX_HEALTH_BONUS: u32 = 10;
pub const LEVEL_UP_STRENGTH_BONUS: u32 = 2;
pub const LEVEL_UP_MAGIC_BONUS: u32 = 2;
pub const MAX_NAME_LENGTH: usize = 16;

// Combat
pub const MIN_DAMAGE: u32 = 1;
pub const DEFENSE_DIVISOR: u32 = 4;
pub const CRIT_CHANCE_PERCENT: u32 = 50;
pub const ESCAPE_CHANCE_PERCENT: u32 = 50;
pub const CLERIC_HEAL_AMOUNT: u32 = 30;

// Enemy tier bands (by character level)
pub const ORC_MIN_LEVEL: u32 = 3;
pub const DRAGON_MIN_LEVEL: u32 = 6;

// Inventory and shop
pub const INVENTORY_CAPACITY: usize = 20;
pub const SELL_PRICE_DIVISOR: u32 = 2;

// Revival
pub const REVIVE_HEALTH_DIVISOR: u32 = 2;
pub const REVIVE_COST_GOLD: u32 = 25;

// Quest prerequisite sentinel
pub const NO_PREREQUISITE: &str = "none";

// Data and save file names
pub const APP_DIR_NAME: &str = ".quest-chronicles";
pub const SAVE_DIR_NAME: &str = "save_games";
pub const ITEMS_FILE_NAME: &str = "items.txt";
pub const QUESTS_FILE_NAME: &str = "quests.txt";
pub const SAVE_FILE_SUFFIX: &str = "_save.txt";
