//! Cache inventory: openable loot containers and timed boost multipliers

use ahash::AHashMap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::types::BoostId;

/// Rarity tiers for loot caches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CacheType {
    Common,
    Rare,
    Epic,
}

impl CacheType {
    /// All cache tiers
    pub fn all() -> &'static [CacheType] {
        &[CacheType::Common, CacheType::Rare, CacheType::Epic]
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            CacheType::Common => "Common",
            CacheType::Rare => "Rare",
            CacheType::Epic => "Epic",
        }
    }
}

/// A timed XP multiplier applied to task completions until it expires
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boost {
    pub id: BoostId,
    pub multiplier: f64,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Inventory {
    /// Unopened cache counts per tier; never negative, floored at zero
    pub caches: AHashMap<CacheType, u32>,
    pub boosts: Vec<Boost>,
    /// Unseen-cache counter feeding notification badges
    pub new_caches: u32,
}

impl Inventory {
    pub fn count(&self, cache_type: CacheType) -> u32 {
        self.caches.get(&cache_type).copied().unwrap_or(0)
    }
}
