//! Inventory, equipment, and shop operations.
//!
//! Every function either completes or returns an error without touching
//! the character, so a failed operation never leaves half-applied state.

use crate::character::types::{Character, EquippedItem};
use crate::constants::{INVENTORY_CAPACITY, SELL_PRICE_DIVISOR};
use crate::error::{GameError, GameResult};
use crate::items::effects::{ItemEffect, StatKind};
use crate::items::types::{EquipSlot, ItemDef, ItemKind, ItemTable};

/// Applies a parsed effect to the character. Health deltas clamp to
/// max health; a max-health reduction drags health down with it so
/// `health <= max_health` survives every call; other stats saturate at 0.
pub fn apply_stat_effect(character: &mut Character, effect: ItemEffect) {
    let amount = effect.amount;
    match effect.stat {
        StatKind::Health => {
            if amount >= 0 {
                character.heal(amount as u32);
            } else {
                character.take_damage(amount.unsigned_abs());
            }
        }
        StatKind::MaxHealth => {
            if amount >= 0 {
                character.max_health = character.max_health.saturating_add(amount as u32);
            } else {
                character.max_health =
                    character.max_health.saturating_sub(amount.unsigned_abs()).max(1);
            }
            if character.health > character.max_health {
                character.health = character.max_health;
            }
        }
        StatKind::Strength => {
            character.strength = shift(character.strength, amount);
        }
        StatKind::Magic => {
            character.magic = shift(character.magic, amount);
        }
    }
}

fn shift(stat: u32, amount: i32) -> u32 {
    if amount >= 0 {
        stat.saturating_add(amount as u32)
    } else {
        stat.saturating_sub(amount.unsigned_abs())
    }
}

/// Looks up an item definition, failing on ids the table does not know.
pub fn get_item<'a>(items: &'a ItemTable, item_id: &str) -> GameResult<&'a ItemDef> {
    items
        .get(item_id)
        .ok_or_else(|| GameError::UnknownItem(item_id.to_string()))
}

pub fn add_item(character: &mut Character, item_id: &str) -> GameResult<()> {
    if character.inventory.len() >= INVENTORY_CAPACITY {
        return Err(GameError::InventoryFull);
    }
    character.inventory.push(item_id.to_string());
    Ok(())
}

/// Removes the first matching copy when duplicates are carried.
pub fn remove_item(character: &mut Character, item_id: &str) -> GameResult<()> {
    match character.inventory.iter().position(|id| id == item_id) {
        Some(index) => {
            character.inventory.remove(index);
            Ok(())
        }
        None => Err(GameError::ItemNotFound(item_id.to_string())),
    }
}

/// Consumes one copy of a consumable, applying its effect. Returns the
/// applied effect so the caller can report it.
pub fn use_item(character: &mut Character, item: &ItemDef) -> GameResult<ItemEffect> {
    if !character.has_item(&item.item_id) {
        return Err(GameError::ItemNotFound(item.item_id.clone()));
    }
    if item.kind != ItemKind::Consumable {
        return Err(GameError::InvalidItemType(format!(
            "'{}' is not consumable",
            item.item_id
        )));
    }
    let effect = ItemEffect::parse(&item.effect)?;
    apply_stat_effect(character, effect);
    remove_item(character, &item.item_id)?;
    Ok(effect)
}

/// Equips an item into a slot, returning the displaced item id if the
/// slot was occupied. The displaced item goes back to the inventory
/// without a capacity check; only [`unequip_item`] enforces capacity.
/// That asymmetry is longstanding behavior that saves depend on.
pub fn equip_item(
    character: &mut Character,
    item: &ItemDef,
    slot: EquipSlot,
) -> GameResult<Option<String>> {
    if !character.has_item(&item.item_id) {
        return Err(GameError::ItemNotFound(item.item_id.clone()));
    }
    if item.kind != slot.accepts() {
        return Err(GameError::InvalidItemType(format!(
            "'{}' is {}, not {}",
            item.item_id,
            item.kind,
            slot.accepts()
        )));
    }
    // Parse up front: a malformed effect must not strand a half-done swap.
    let effect = ItemEffect::parse(&item.effect)?;

    let displaced = match slot {
        EquipSlot::Weapon => character.equipped_weapon.take(),
        EquipSlot::Armor => character.equipped_armor.take(),
    };
    if let Some(old) = &displaced {
        apply_stat_effect(character, old.effect.inverse());
        character.inventory.push(old.item_id.clone());
    }

    apply_stat_effect(character, effect);
    remove_item(character, &item.item_id)?;
    let equipped = EquippedItem {
        item_id: item.item_id.clone(),
        effect,
    };
    match slot {
        EquipSlot::Weapon => character.equipped_weapon = Some(equipped),
        EquipSlot::Armor => character.equipped_armor = Some(equipped),
    }
    Ok(displaced.map(|old| old.item_id))
}

/// Takes off whatever occupies the slot. `Ok(None)` when the slot is
/// already empty; fails when the inventory has no room for the item.
pub fn unequip_item(character: &mut Character, slot: EquipSlot) -> GameResult<Option<String>> {
    let equipped = match slot {
        EquipSlot::Weapon => character.equipped_weapon.clone(),
        EquipSlot::Armor => character.equipped_armor.clone(),
    };
    let Some(old) = equipped else {
        return Ok(None);
    };
    if character.inventory.len() >= INVENTORY_CAPACITY {
        return Err(GameError::InventoryFull);
    }
    apply_stat_effect(character, old.effect.inverse());
    character.inventory.push(old.item_id.clone());
    match slot {
        EquipSlot::Weapon => character.equipped_weapon = None,
        EquipSlot::Armor => character.equipped_armor = None,
    }
    Ok(Some(old.item_id))
}

/// Buys one copy at full cost. Gold is checked before capacity, and
/// nothing is deducted on failure.
pub fn purchase_item(character: &mut Character, item: &ItemDef) -> GameResult<()> {
    if character.gold < item.cost {
        return Err(GameError::InsufficientGold {
            have: character.gold,
            need: item.cost,
        });
    }
    if character.inventory.len() >= INVENTORY_CAPACITY {
        return Err(GameError::InventoryFull);
    }
    character.gold -= item.cost;
    character.inventory.push(item.item_id.clone());
    Ok(())
}

/// Sells one carried copy for half its cost (floored). Returns the
/// gold credited.
pub fn sell_item(character: &mut Character, item: &ItemDef) -> GameResult<u32> {
    if !character.has_item(&item.item_id) {
        return Err(GameError::ItemNotFound(item.item_id.clone()));
    }
    let price = item.cost / SELL_PRICE_DIVISOR;
    remove_item(character, &item.item_id)?;
    character.gold += price;
    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::types::ClassKind;

    fn warrior() -> Character {
        Character::new("Test", ClassKind::Warrior)
    }

    fn sword() -> ItemDef {
        ItemDef::new("iron_sword", "Iron Sword", ItemKind::Weapon, "strength:5", 50, "A sword")
    }

    fn shield() -> ItemDef {
        ItemDef::new("oak_shield", "Oak Shield", ItemKind::Armor, "max_health:20", 40, "A shield")
    }

    fn potion() -> ItemDef {
        ItemDef::new(
            "health_potion",
            "Health Potion",
            ItemKind::Consumable,
            "health:20",
            10,
            "Restores health",
        )
    }

    // ==================== inventory ====================

    #[test]
    fn test_add_item_fails_at_capacity() {
        let mut c = warrior();
        for i in 0..INVENTORY_CAPACITY {
            add_item(&mut c, &format!("item_{}", i)).unwrap();
        }
        let err = add_item(&mut c, "one_more").unwrap_err();
        assert!(matches!(err, GameError::InventoryFull));
        assert_eq!(c.inventory.len(), INVENTORY_CAPACITY);
    }

    #[test]
    fn test_remove_item_takes_first_of_duplicates() {
        let mut c = warrior();
        add_item(&mut c, "health_potion").unwrap();
        add_item(&mut c, "iron_sword").unwrap();
        add_item(&mut c, "health_potion").unwrap();
        remove_item(&mut c, "health_potion").unwrap();
        assert_eq!(c.inventory, vec!["iron_sword", "health_potion"]);
    }

    #[test]
    fn test_remove_missing_item_fails() {
        let mut c = warrior();
        let err = remove_item(&mut c, "ghost_item").unwrap_err();
        assert!(matches!(err, GameError::ItemNotFound(_)));
    }

    // ==================== consumables ====================

    #[test]
    fn test_use_item_heals_and_consumes() {
        let mut c = warrior();
        c.health = 90;
        add_item(&mut c, "health_potion").unwrap();
        let effect = use_item(&mut c, &potion()).unwrap();
        assert_eq!(effect.amount, 20);
        assert_eq!(c.health, 110);
        assert!(!c.has_item("health_potion"));
    }

    #[test]
    fn test_use_item_heal_clamps_to_max() {
        let mut c = warrior();
        c.health = 115;
        add_item(&mut c, "health_potion").unwrap();
        use_item(&mut c, &potion()).unwrap();
        assert_eq!(c.health, 120);
    }

    #[test]
    fn test_use_item_rejects_non_consumable() {
        let mut c = warrior();
        add_item(&mut c, "iron_sword").unwrap();
        let err = use_item(&mut c, &sword()).unwrap_err();
        assert!(matches!(err, GameError::InvalidItemType(_)));
        assert!(c.has_item("iron_sword"));
    }

    #[test]
    fn test_use_item_not_carried_fails() {
        let mut c = warrior();
        let err = use_item(&mut c, &potion()).unwrap_err();
        assert!(matches!(err, GameError::ItemNotFound(_)));
    }

    #[test]
    fn test_use_item_with_bad_effect_mutates_nothing() {
        let mut c = warrior();
        let broken = ItemDef::new("odd_brew", "Odd Brew", ItemKind::Consumable, "luck:3", 5, "?");
        add_item(&mut c, "odd_brew").unwrap();
        let before = c.clone();
        assert!(use_item(&mut c, &broken).is_err());
        assert_eq!(c, before);
    }

    // ==================== equipment ====================

    #[test]
    fn test_equip_weapon_applies_delta() {
        let mut c = warrior();
        add_item(&mut c, "iron_sword").unwrap();
        let displaced = equip_item(&mut c, &sword(), EquipSlot::Weapon).unwrap();
        assert!(displaced.is_none());
        assert_eq!(c.strength, 20);
        assert!(!c.has_item("iron_sword"));
        assert_eq!(c.equipped_weapon.as_ref().map(|e| e.item_id.as_str()), Some("iron_sword"));
    }

    #[test]
    fn test_equip_then_unequip_restores_stats_exactly() {
        let mut c = warrior();
        add_item(&mut c, "iron_sword").unwrap();
        equip_item(&mut c, &sword(), EquipSlot::Weapon).unwrap();
        assert_eq!(c.strength, 20);
        let returned = unequip_item(&mut c, EquipSlot::Weapon).unwrap();
        assert_eq!(returned.as_deref(), Some("iron_sword"));
        assert_eq!(c.strength, 15);
        assert!(c.has_item("iron_sword"));
        assert!(c.equipped_weapon.is_none());
    }

    #[test]
    fn test_equip_swap_returns_old_item() {
        let mut c = warrior();
        let better = ItemDef::new("steel_sword", "Steel Sword", ItemKind::Weapon, "strength:9", 120, "");
        add_item(&mut c, "iron_sword").unwrap();
        add_item(&mut c, "steel_sword").unwrap();
        equip_item(&mut c, &sword(), EquipSlot::Weapon).unwrap();
        let displaced = equip_item(&mut c, &better, EquipSlot::Weapon).unwrap();
        assert_eq!(displaced.as_deref(), Some("iron_sword"));
        assert_eq!(c.strength, 15 + 9);
        assert!(c.has_item("iron_sword"));
        assert!(!c.has_item("steel_sword"));
    }

    #[test]
    fn test_equip_swap_ignores_full_inventory() {
        // The swap path never checks capacity; only unequip does.
        let mut c = warrior();
        add_item(&mut c, "iron_sword").unwrap();
        equip_item(&mut c, &sword(), EquipSlot::Weapon).unwrap();
        let better = ItemDef::new("steel_sword", "Steel Sword", ItemKind::Weapon, "strength:9", 120, "");
        add_item(&mut c, "steel_sword").unwrap();
        while c.inventory.len() < INVENTORY_CAPACITY {
            add_item(&mut c, "pebble").unwrap();
        }
        let displaced = equip_item(&mut c, &better, EquipSlot::Weapon).unwrap();
        assert_eq!(displaced.as_deref(), Some("iron_sword"));
        assert_eq!(c.inventory.len(), INVENTORY_CAPACITY);
    }

    #[test]
    fn test_unequip_fails_when_inventory_full() {
        let mut c = warrior();
        add_item(&mut c, "iron_sword").unwrap();
        equip_item(&mut c, &sword(), EquipSlot::Weapon).unwrap();
        while c.inventory.len() < INVENTORY_CAPACITY {
            add_item(&mut c, "pebble").unwrap();
        }
        let err = unequip_item(&mut c, EquipSlot::Weapon).unwrap_err();
        assert!(matches!(err, GameError::InventoryFull));
        assert_eq!(c.strength, 20);
        assert!(c.equipped_weapon.is_some());
    }

    #[test]
    fn test_unequip_empty_slot_is_noop() {
        let mut c = warrior();
        assert_eq!(unequip_item(&mut c, EquipSlot::Armor).unwrap(), None);
    }

    #[test]
    fn test_equip_wrong_slot_fails() {
        let mut c = warrior();
        add_item(&mut c, "iron_sword").unwrap();
        let err = equip_item(&mut c, &sword(), EquipSlot::Armor).unwrap_err();
        assert!(matches!(err, GameError::InvalidItemType(_)));
        assert_eq!(c.strength, 15);
    }

    #[test]
    fn test_equip_armor_max_health_keeps_health_ratio_untouched() {
        let mut c = warrior();
        c.health = 100;
        add_item(&mut c, "oak_shield").unwrap();
        equip_item(&mut c, &shield(), EquipSlot::Armor).unwrap();
        assert_eq!(c.max_health, 140);
        assert_eq!(c.health, 100);
        unequip_item(&mut c, EquipSlot::Armor).unwrap();
        assert_eq!(c.max_health, 120);
        assert_eq!(c.health, 100);
    }

    #[test]
    fn test_unequip_max_health_item_reclamps_health() {
        let mut c = warrior();
        add_item(&mut c, "oak_shield").unwrap();
        equip_item(&mut c, &shield(), EquipSlot::Armor).unwrap();
        c.health = 140;
        unequip_item(&mut c, EquipSlot::Armor).unwrap();
        assert_eq!(c.max_health, 120);
        assert_eq!(c.health, 120);
    }

    // ==================== shop ====================

    #[test]
    fn test_purchase_deducts_gold() {
        let mut c = warrior();
        purchase_item(&mut c, &sword()).unwrap();
        assert_eq!(c.gold, 50);
        assert!(c.has_item("iron_sword"));
    }

    #[test]
    fn test_purchase_insufficient_gold_changes_nothing() {
        let mut c = warrior();
        let pricey = ItemDef::new("crown", "Crown", ItemKind::Armor, "magic:10", 500, "");
        let err = purchase_item(&mut c, &pricey).unwrap_err();
        assert!(matches!(err, GameError::InsufficientGold { have: 100, need: 500 }));
        assert_eq!(c.gold, 100);
        assert!(c.inventory.is_empty());
    }

    #[test]
    fn test_purchase_gold_checked_before_capacity() {
        let mut c = warrior();
        while c.inventory.len() < INVENTORY_CAPACITY {
            add_item(&mut c, "pebble").unwrap();
        }
        let pricey = ItemDef::new("crown", "Crown", ItemKind::Armor, "magic:10", 500, "");
        let err = purchase_item(&mut c, &pricey).unwrap_err();
        assert!(matches!(err, GameError::InsufficientGold { .. }));
    }

    #[test]
    fn test_purchase_full_inventory_keeps_gold() {
        let mut c = warrior();
        while c.inventory.len() < INVENTORY_CAPACITY {
            add_item(&mut c, "pebble").unwrap();
        }
        let err = purchase_item(&mut c, &potion()).unwrap_err();
        assert!(matches!(err, GameError::InventoryFull));
        assert_eq!(c.gold, 100);
    }

    #[test]
    fn test_sell_credits_half_cost_floored() {
        let mut c = warrior();
        let trinket = ItemDef::new("charm", "Charm", ItemKind::Consumable, "magic:1", 15, "");
        add_item(&mut c, "charm").unwrap();
        let price = sell_item(&mut c, &trinket).unwrap();
        assert_eq!(price, 7);
        assert_eq!(c.gold, 107);
        assert!(!c.has_item("charm"));
    }

    #[test]
    fn test_sell_missing_item_fails() {
        let mut c = warrior();
        let err = sell_item(&mut c, &sword()).unwrap_err();
        assert!(matches!(err, GameError::ItemNotFound(_)));
        assert_eq!(c.gold, 100);
    }

    #[test]
    fn test_get_item_unknown_id_fails() {
        let items = ItemTable::new();
        assert!(matches!(
            get_item(&items, "mystery").unwrap_err(),
            GameError::UnknownItem(_)
        ));
    }
}
