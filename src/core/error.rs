use thiserror::Error;

use crate::action::ActionDomain;
use crate::core::types::RewardId;

/// Configuration errors surfaced at engine assembly time.
///
/// Reducers themselves never fail; inapplicable actions degrade to no-ops.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("action domain {domain:?} already owned by reducer '{existing}', rejecting '{incoming}'")]
    AmbiguousDomain {
        domain: ActionDomain,
        existing: &'static str,
        incoming: &'static str,
    },
}

/// Errors produced while loading or validating a persisted snapshot.
///
/// Validation runs before `ReplaceState` is dispatched; the engine itself
/// trusts the payload.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate {entity} id: {id}")]
    DuplicateId { entity: &'static str, id: String },

    #[error("duplicate skill name (case-insensitive): {0}")]
    DuplicateSkillName(String),

    #[error("one-time reward redeemed more than once: {0:?}")]
    RepeatedOneTimeRedemption(RewardId),

    #[error("api key index {index} out of bounds for {len} keys")]
    ApiKeyIndexOutOfBounds { index: usize, len: usize },
}

/// Top-level application error for the binary.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    #[error("engine configuration error: {0}")]
    Engine(#[from] EngineError),
}

pub type Result<T> = std::result::Result<T, AppError>;
