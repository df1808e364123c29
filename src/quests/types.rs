use std::collections::BTreeMap;

/// Read-only quest table keyed by quest id, shared across engine calls.
pub type QuestTable = BTreeMap<String, QuestDef>;

/// Immutable quest reference data. Characters track quest ids only; the
/// definitions live in the table for the whole session.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestDef {
    pub quest_id: String,
    pub title: String,
    pub description: String,
    pub reward_xp: u32,
    pub reward_gold: u32,
    pub required_level: u32,
    /// Quest that must be completed first, if any. Data files use the
    /// sentinel `none`, mapped to `None` on load.
    pub prerequisite: Option<String>,
    /// Unrecognized keys from the data file, kept as-is.
    pub extra: BTreeMap<String, String>,
}

impl QuestDef {
    pub fn new(
        quest_id: &str,
        title: &str,
        description: &str,
        reward_xp: u32,
        reward_gold: u32,
        required_level: u32,
        prerequisite: Option<&str>,
    ) -> Self {
        Self {
            quest_id: quest_id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            reward_xp,
            reward_gold,
            required_level,
            prerequisite: prerequisite.map(|s| s.to_string()),
            extra: BTreeMap::new(),
        }
    }
}
