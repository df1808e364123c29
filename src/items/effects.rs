//! Item effect strings: a single `stat:delta` pair, e.g. `"health:20"`.

use std::fmt;

use crate::error::{GameError, GameResult};

/// Character stats an item effect may target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    Health,
    MaxHealth,
    Strength,
    Magic,
}

impl StatKind {
    pub fn name(&self) -> &'static str {
        match self {
            StatKind::Health => "health",
            StatKind::MaxHealth => "max_health",
            StatKind::Strength => "strength",
            StatKind::Magic => "magic",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "health" => Some(StatKind::Health),
            "max_health" => Some(StatKind::MaxHealth),
            "strength" => Some(StatKind::Strength),
            "magic" => Some(StatKind::Magic),
            _ => None,
        }
    }
}

/// A parsed effect: which stat moves and by how much.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemEffect {
    pub stat: StatKind,
    pub amount: i32,
}

impl ItemEffect {
    /// Parses `"stat:delta"`, splitting on the first colon. The delta is
    /// checked before the stat name, so `"hp:abc"` reports the bad integer.
    pub fn parse(raw: &str) -> GameResult<Self> {
        let Some((stat_raw, value_raw)) = raw.split_once(':') else {
            return Err(GameError::InvalidItemType(format!(
                "invalid effect format: '{}'",
                raw
            )));
        };
        let amount: i32 = value_raw.trim().parse().map_err(|_| {
            GameError::InvalidItemType(format!(
                "effect value must be an integer: '{}'",
                value_raw
            ))
        })?;
        let stat = StatKind::from_name(stat_raw.trim()).ok_or_else(|| {
            GameError::InvalidItemType(format!("invalid stat name: '{}'", stat_raw))
        })?;
        Ok(Self { stat, amount })
    }

    /// The delta that undoes this one.
    pub fn inverse(&self) -> Self {
        Self {
            stat: self.stat,
            amount: self.amount.saturating_neg(),
        }
    }
}

impl fmt::Display for ItemEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:+}", self.stat.name(), self.amount)
    }
}
