//! Self-defined rewards and the append-only redemption ledger

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::types::{RedemptionId, RewardId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reward {
    pub id: RewardId,
    pub name: String,
    /// Spendable-XP cost; sign of the original input is not meaningful and
    /// is stripped on insert.
    pub cost: u32,
    /// Redeemable at most once per user, ever
    pub is_one_time: bool,
    pub created_at: DateTime<Utc>,
}

/// One row of the redemption ledger. Rows are only ever appended; the
/// spendable balance is derived from this history, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedeemedReward {
    pub id: RedemptionId,
    pub reward_id: RewardId,
    pub redeemed_at: DateTime<Utc>,
}
