//! Rewards reducer
//!
//! The reward list stays sorted ascending by cost. Redemption recomputes the
//! spendable balance from the ledger at decision time; there is no cached
//! balance anywhere to drift.

use crate::action::{Action, ActionDomain};
use crate::core::types::{RedemptionId, RewardId};
use crate::model::{AppState, RedeemedReward, Reward};
use crate::progression;
use crate::reducer::DomainReducer;

pub struct RewardsReducer;

impl DomainReducer for RewardsReducer {
    fn name(&self) -> &'static str {
        "rewards"
    }

    fn domains(&self) -> &'static [ActionDomain] {
        &[ActionDomain::Rewards]
    }

    fn reduce(&self, state: &AppState, action: &Action) -> Option<AppState> {
        match action {
            Action::AddReward {
                name,
                cost,
                is_one_time,
                at,
            } => {
                let mut next = state.clone();
                next.rewards.push(Reward {
                    id: RewardId::new(),
                    name: name.clone(),
                    // Sign carries no meaning.
                    cost: cost.unsigned_abs(),
                    is_one_time: *is_one_time,
                    created_at: *at,
                });
                // Stable sort keeps insertion order among equal costs.
                next.rewards.sort_by_key(|r| r.cost);
                Some(next)
            }
            Action::DeleteReward { id } => {
                let idx = state.rewards.iter().position(|r| r.id == *id)?;
                let mut next = state.clone();
                next.rewards.remove(idx);
                // Ledger rows referencing the deleted reward stay; their
                // cost now resolves to 0.
                Some(next)
            }
            Action::RedeemReward { reward_id, at } => {
                let reward = state.reward(*reward_id)?;
                let already_redeemed = state
                    .redeemed_rewards
                    .iter()
                    .any(|row| row.reward_id == *reward_id);
                if reward.is_one_time && already_redeemed {
                    return None;
                }
                if progression::spendable_xp(state) < reward.cost as i64 {
                    return None;
                }
                let mut next = state.clone();
                next.redeemed_rewards.push(RedeemedReward {
                    id: RedemptionId::new(),
                    reward_id: *reward_id,
                    redeemed_at: *at,
                });
                Some(next)
            }
            _ => None,
        }
    }
}
