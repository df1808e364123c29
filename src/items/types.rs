use std::collections::BTreeMap;
use std::fmt;

/// Read-only item table keyed by item id, shared across engine calls.
pub type ItemTable = BTreeMap<String, ItemDef>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Weapon,
    Armor,
    Consumable,
}

impl ItemKind {
    pub fn name(&self) -> &'static str {
        match self {
            ItemKind::Weapon => "weapon",
            ItemKind::Armor => "armor",
            ItemKind::Consumable => "consumable",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "weapon" => Some(ItemKind::Weapon),
            "armor" => Some(ItemKind::Armor),
            "consumable" => Some(ItemKind::Consumable),
            _ => None,
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable item reference data. Characters never own these, only ids;
/// the effect stays a raw string and is parsed at the point of use.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDef {
    pub item_id: String,
    pub name: String,
    pub kind: ItemKind,
    pub effect: String,
    pub cost: u32,
    pub description: String,
    /// Unrecognized keys from the data file, kept as-is.
    pub extra: BTreeMap<String, String>,
}

impl ItemDef {
    pub fn new(
        item_id: &str,
        name: &str,
        kind: ItemKind,
        effect: &str,
        cost: u32,
        description: &str,
    ) -> Self {
        Self {
            item_id: item_id.to_string(),
            name: name.to_string(),
            kind,
            effect: effect.to_string(),
            cost,
            description: description.to_string(),
            extra: BTreeMap::new(),
        }
    }
}

/// The two wearable slots. Consumables are used, never equipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquipSlot {
    Weapon,
    Armor,
}

impl EquipSlot {
    pub fn name(&self) -> &'static str {
        match self {
            EquipSlot::Weapon => "weapon",
            EquipSlot::Armor => "armor",
        }
    }

    /// The item kind this slot accepts.
    pub fn accepts(&self) -> ItemKind {
        match self {
            EquipSlot::Weapon => ItemKind::Weapon,
            EquipSlot::Armor => ItemKind::Armor,
        }
    }
}
