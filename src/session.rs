//! One play session: the loaded data tables, the character being
//! played, whatever battle is underway, and the message log the scenes
//! render from.
//!
//! Session methods wrap the engine calls and translate their results
//! into log lines and view changes, so the key-handling layer stays a
//! thin dispatch. Engine failures that are just part of play (not
//! enough gold, inventory full) land in the log instead of bubbling up.

use std::collections::VecDeque;

use rand::Rng;

use crate::character::progression::{add_gold, revive};
use crate::character::types::Character;
use crate::combat::logic::{Battle, BattleOutcome, BattleState, CombatEvent, PlayerAction};
use crate::combat::types::enemy_for_level;
use crate::constants::REVIVE_COST_GOLD;
use crate::items::logic::{
    equip_item, get_item, purchase_item, remove_item, sell_item, unequip_item, use_item,
};
use crate::items::types::{EquipSlot, ItemDef, ItemKind, ItemTable};
use crate::quests::logic::{abandon_quest, accept_quest, complete_quest};
use crate::quests::types::QuestTable;

/// Keep only the most recent entries; the log panel is small.
const MESSAGE_LOG_CAPACITY: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Info,
    Good,
    Bad,
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub message: String,
    pub kind: LogKind,
}

/// Which scene the game screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameView {
    Menu,
    Inventory,
    Quests,
    Shop,
    Battle,
    Death,
}

pub struct GameSession {
    pub character: Character,
    pub items: ItemTable,
    pub quests: QuestTable,
    pub battle: Option<Battle>,
    pub view: GameView,
    pub log: VecDeque<LogEntry>,
}

impl GameSession {
    pub fn new(character: Character, items: ItemTable, quests: QuestTable) -> Self {
        let mut session = Self {
            character,
            items,
            quests,
            battle: None,
            view: GameView::Menu,
            log: VecDeque::with_capacity(MESSAGE_LOG_CAPACITY),
        };
        let welcome = format!("Welcome, {}!", session.character.name);
        session.push_log(LogKind::Info, welcome);
        session
    }

    pub fn push_log(&mut self, kind: LogKind, message: impl Into<String>) {
        if self.log.len() >= MESSAGE_LOG_CAPACITY {
            self.log.pop_front();
        }
        self.log.push_back(LogEntry {
            message: message.into(),
            kind,
        });
    }

    // ==================== view changes ====================

    pub fn open_inventory(&mut self) {
        self.view = GameView::Inventory;
    }

    pub fn open_quests(&mut self) {
        self.view = GameView::Quests;
    }

    pub fn open_shop(&mut self) {
        self.view = GameView::Shop;
    }

    pub fn back_to_menu(&mut self) {
        self.view = GameView::Menu;
    }

    // ==================== exploration and battle ====================

    /// Kicks off an encounter against the tier matching the character's
    /// level and switches to the battle scene.
    pub fn explore(&mut self) {
        match Battle::start(&self.character, enemy_for_level(self.character.level)) {
            Ok(battle) => {
                self.push_log(LogKind::Info, format!("A wild {} appears!", battle.enemy.name));
                self.battle = Some(battle);
                self.view = GameView::Battle;
            }
            Err(e) => self.push_log(LogKind::Bad, e.to_string()),
        }
    }

    /// Plays one battle round and narrates it. Victory and escape drop
    /// back to the menu; defeat lands on the death prompt.
    pub fn battle_action(&mut self, action: PlayerAction, rng: &mut impl Rng) {
        let Some(battle) = self.battle.as_mut() else {
            self.push_log(LogKind::Bad, "No battle in progress");
            return;
        };
        let enemy_name = battle.enemy.name.clone();
        let result = battle.play_round(&mut self.character, action, rng);
        let state = battle.state;

        match result {
            Ok(events) => {
                for event in events {
                    self.log_combat_event(&enemy_name, event);
                }
                match state {
                    BattleState::Ended(BattleOutcome::Victory)
                    | BattleState::Ended(BattleOutcome::Escaped) => {
                        self.battle = None;
                        self.view = GameView::Menu;
                    }
                    BattleState::Ended(BattleOutcome::Defeat) => {
                        self.battle = None;
                        self.view = GameView::Death;
                    }
                    BattleState::Active => {}
                }
            }
            Err(e) => self.push_log(LogKind::Bad, e.to_string()),
        }
    }

    fn log_combat_event(&mut self, enemy_name: &str, event: CombatEvent) {
        match event {
            CombatEvent::PlayerAttack { damage } => self.push_log(
                LogKind::Info,
                format!("You hit the {} for {} damage.", enemy_name, damage),
            ),
            CombatEvent::PowerStrike { damage } => self.push_log(
                LogKind::Good,
                format!("Power Strike crushes the {} for {} damage!", enemy_name, damage),
            ),
            CombatEvent::Fireball { damage } => self.push_log(
                LogKind::Good,
                format!("Fireball scorches the {} for {} damage!", enemy_name, damage),
            ),
            CombatEvent::CriticalStrike { damage, was_crit } => {
                if was_crit {
                    self.push_log(
                        LogKind::Good,
                        format!("Critical strike! The {} takes {} damage!", enemy_name, damage),
                    );
                } else {
                    self.push_log(
                        LogKind::Info,
                        format!("Your strike lands on the {} for {} damage.", enemy_name, damage),
                    );
                }
            }
            CombatEvent::Heal { restored } => {
                self.push_log(LogKind::Good, format!("You heal {} health.", restored))
            }
            CombatEvent::EnemyAttack { damage } => self.push_log(
                LogKind::Bad,
                format!("The {} hits you for {} damage.", enemy_name, damage),
            ),
            CombatEvent::EscapeFailed => self.push_log(LogKind::Bad, "You fail to escape!"),
            CombatEvent::Escaped => self.push_log(LogKind::Info, "You escape the battle."),
            CombatEvent::EnemyDied {
                xp_gained,
                gold_gained,
                levels_gained,
            } => {
                self.push_log(
                    LogKind::Good,
                    format!(
                        "The {} falls! You gain {} XP and {} gold.",
                        enemy_name, xp_gained, gold_gained
                    ),
                );
                if levels_gained > 0 {
                    self.push_log(
                        LogKind::Good,
                        format!("You reach level {}!", self.character.level),
                    );
                }
            }
            CombatEvent::PlayerDied => self.push_log(LogKind::Bad, "You have fallen..."),
        }
    }

    // ==================== inventory ====================

    fn item_at(&self, index: usize) -> Option<String> {
        self.character.inventory.get(index).cloned()
    }

    fn item_name(&self, item_id: &str) -> String {
        self.items
            .get(item_id)
            .map(|item| item.name.clone())
            .unwrap_or_else(|| item_id.to_string())
    }

    pub fn use_item_at(&mut self, index: usize) {
        let Some(item_id) = self.item_at(index) else {
            return;
        };
        let item = match get_item(&self.items, &item_id) {
            Ok(item) => item.clone(),
            Err(e) => {
                self.push_log(LogKind::Bad, e.to_string());
                return;
            }
        };
        match use_item(&mut self.character, &item) {
            Ok(effect) => self.push_log(
                LogKind::Good,
                format!("You use the {} ({}).", item.name, effect),
            ),
            Err(e) => self.push_log(LogKind::Bad, e.to_string()),
        }
    }

    pub fn equip_item_at(&mut self, index: usize) {
        let Some(item_id) = self.item_at(index) else {
            return;
        };
        let item = match get_item(&self.items, &item_id) {
            Ok(item) => item.clone(),
            Err(e) => {
                self.push_log(LogKind::Bad, e.to_string());
                return;
            }
        };
        let slot = match item.kind {
            ItemKind::Weapon => EquipSlot::Weapon,
            ItemKind::Armor => EquipSlot::Armor,
            ItemKind::Consumable => {
                self.push_log(LogKind::Bad, format!("The {} cannot be equipped.", item.name));
                return;
            }
        };
        match equip_item(&mut self.character, &item, slot) {
            Ok(Some(displaced)) => {
                let displaced_name = self.item_name(&displaced);
                self.push_log(
                    LogKind::Good,
                    format!("You equip the {}, stowing the {}.", item.name, displaced_name),
                );
            }
            Ok(None) => self.push_log(LogKind::Good, format!("You equip the {}.", item.name)),
            Err(e) => self.push_log(LogKind::Bad, e.to_string()),
        }
    }

    pub fn unequip(&mut self, slot: EquipSlot) {
        match unequip_item(&mut self.character, slot) {
            Ok(Some(item_id)) => {
                let name = self.item_name(&item_id);
                self.push_log(LogKind::Info, format!("You unequip the {}.", name));
            }
            Ok(None) => self.push_log(
                LogKind::Info,
                format!("Nothing is equipped in the {} slot.", slot.name()),
            ),
            Err(e) => self.push_log(LogKind::Bad, e.to_string()),
        }
    }

    pub fn drop_item_at(&mut self, index: usize) {
        let Some(item_id) = self.item_at(index) else {
            return;
        };
        match remove_item(&mut self.character, &item_id) {
            Ok(()) => {
                let name = self.item_name(&item_id);
                self.push_log(LogKind::Info, format!("You drop the {}.", name));
            }
            Err(e) => self.push_log(LogKind::Bad, e.to_string()),
        }
    }

    // ==================== shop ====================

    /// Everything the shop offers, in stable table order.
    pub fn shop_stock(&self) -> Vec<&ItemDef> {
        self.items.values().collect()
    }

    pub fn buy_at(&mut self, index: usize) {
        let Some(item) = self.shop_stock().get(index).map(|item| (*item).clone()) else {
            return;
        };
        match purchase_item(&mut self.character, &item) {
            Ok(()) => self.push_log(
                LogKind::Good,
                format!("You buy the {} for {} gold.", item.name, item.cost),
            ),
            Err(e) => self.push_log(LogKind::Bad, e.to_string()),
        }
    }

    pub fn sell_at(&mut self, index: usize) {
        let Some(item_id) = self.item_at(index) else {
            return;
        };
        let item = match get_item(&self.items, &item_id) {
            Ok(item) => item.clone(),
            Err(e) => {
                self.push_log(LogKind::Bad, e.to_string());
                return;
            }
        };
        match sell_item(&mut self.character, &item) {
            Ok(price) => self.push_log(
                LogKind::Good,
                format!("You sell the {} for {} gold.", item.name, price),
            ),
            Err(e) => self.push_log(LogKind::Bad, e.to_string()),
        }
    }

    // ==================== quests ====================

    fn quest_title(&self, quest_id: &str) -> String {
        self.quests
            .get(quest_id)
            .map(|quest| quest.title.clone())
            .unwrap_or_else(|| quest_id.to_string())
    }

    pub fn accept_quest_id(&mut self, quest_id: &str) {
        match accept_quest(&mut self.character, &self.quests, quest_id) {
            Ok(()) => {
                let title = self.quest_title(quest_id);
                self.push_log(LogKind::Good, format!("Quest accepted: {}.", title));
            }
            Err(e) => self.push_log(LogKind::Bad, e.to_string()),
        }
    }

    pub fn complete_quest_id(&mut self, quest_id: &str) {
        match complete_quest(&mut self.character, &self.quests, quest_id) {
            Ok(rewards) => {
                let title = self.quest_title(quest_id);
                self.push_log(
                    LogKind::Good,
                    format!(
                        "Quest complete: {}! +{} XP, +{} gold.",
                        title, rewards.xp, rewards.gold
                    ),
                );
                if rewards.levels_gained > 0 {
                    self.push_log(
                        LogKind::Good,
                        format!("You reach level {}!", self.character.level),
                    );
                }
            }
            Err(e) => self.push_log(LogKind::Bad, e.to_string()),
        }
    }

    pub fn abandon_quest_id(&mut self, quest_id: &str) {
        match abandon_quest(&mut self.character, quest_id) {
            Ok(()) => {
                let title = self.quest_title(quest_id);
                self.push_log(LogKind::Info, format!("Quest abandoned: {}.", title));
            }
            Err(e) => self.push_log(LogKind::Bad, e.to_string()),
        }
    }

    // ==================== death ====================

    /// Pays the toll and gets back up at half health. Returns false
    /// when the character cannot afford it; the driver ends the run.
    pub fn try_revive(&mut self) -> bool {
        match add_gold(&mut self.character, -(REVIVE_COST_GOLD as i64)) {
            Ok(_) => {
                let restored = revive(&mut self.character);
                self.push_log(
                    LogKind::Good,
                    format!(
                        "You are revived with {} health ({} gold spent).",
                        restored, REVIVE_COST_GOLD
                    ),
                );
                self.view = GameView::Menu;
                true
            }
            Err(e) => {
                self.push_log(LogKind::Bad, e.to_string());
                false
            }
        }
    }
}
