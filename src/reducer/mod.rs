//! Root state engine
//!
//! Composes the domain reducers into one transition function over one
//! immutable state tree. Each action is routed by its domain to exactly one
//! reducer; ownership is checked when reducers are registered, not at
//! dispatch time.

pub mod journal;
pub mod misc;
pub mod rewards;
pub mod settings;
pub mod skills;
pub mod squads;
pub mod tasks;

use std::sync::Arc;

use ahash::AHashMap;

use crate::action::{Action, ActionDomain};
use crate::core::error::EngineError;
use crate::model::AppState;

pub use journal::JournalReducer;
pub use misc::MiscReducer;
pub use rewards::RewardsReducer;
pub use settings::SettingsReducer;
pub use skills::SkillsReducer;
pub use squads::SquadsReducer;
pub use tasks::TaskInventoryReducer;

/// A pure reducer over a disjoint set of action domains.
///
/// `reduce` returns the updated state, or `None` when the action does not
/// apply (wrong domain, invariant would be violated, nothing to do). The
/// engine translates `None` into handing back the same `Arc`, so observers
/// can detect "nothing changed" by pointer equality.
pub trait DomainReducer {
    fn name(&self) -> &'static str;

    /// Domains this reducer claims. Claims across reducers must be disjoint.
    fn domains(&self) -> &'static [ActionDomain];

    fn reduce(&self, state: &AppState, action: &Action) -> Option<AppState>;
}

pub struct StateEngine {
    reducers: Vec<Box<dyn DomainReducer>>,
    owners: AHashMap<ActionDomain, usize>,
}

impl StateEngine {
    pub fn new() -> Self {
        Self {
            reducers: Vec::new(),
            owners: AHashMap::new(),
        }
    }

    /// Engine with the seven standard reducers registered.
    pub fn with_default_reducers() -> Result<Self, EngineError> {
        let mut engine = Self::new();
        engine.register(Box::new(TaskInventoryReducer))?;
        engine.register(Box::new(JournalReducer))?;
        engine.register(Box::new(RewardsReducer))?;
        engine.register(Box::new(SkillsReducer))?;
        engine.register(Box::new(SquadsReducer::new()))?;
        engine.register(Box::new(SettingsReducer))?;
        engine.register(Box::new(MiscReducer))?;
        Ok(engine)
    }

    /// Registers a reducer, claiming its domains.
    ///
    /// A claim that overlaps an already-registered owner is a configuration
    /// error: the registration is rejected and the engine is left unchanged,
    /// so the first registration keeps ownership.
    pub fn register(&mut self, reducer: Box<dyn DomainReducer>) -> Result<(), EngineError> {
        for &domain in reducer.domains() {
            if let Some(&idx) = self.owners.get(&domain) {
                let existing = self.reducers[idx].name();
                tracing::warn!(
                    ?domain,
                    existing,
                    incoming = reducer.name(),
                    "rejecting reducer registration: domain already owned"
                );
                return Err(EngineError::AmbiguousDomain {
                    domain,
                    existing,
                    incoming: reducer.name(),
                });
            }
        }
        let idx = self.reducers.len();
        for &domain in reducer.domains() {
            self.owners.insert(domain, idx);
        }
        self.reducers.push(reducer);
        Ok(())
    }

    /// Name of the reducer owning `domain`, if any.
    pub fn owner_of(&self, domain: ActionDomain) -> Option<&'static str> {
        self.owners.get(&domain).map(|&idx| self.reducers[idx].name())
    }

    /// Applies one action. Pure, total, synchronous: well-formed actions
    /// never fail, and no effect is ever partially applied.
    ///
    /// `ReplaceState` substitutes the tree wholesale without consulting any
    /// reducer; the caller is responsible for having validated the payload.
    /// Actions whose domain has no registered owner are a no-op returning
    /// the input state (forward-compatibility contract).
    pub fn transition(&self, state: &Arc<AppState>, action: &Action) -> Arc<AppState> {
        if let Action::ReplaceState(payload) = action {
            return Arc::new((**payload).clone());
        }
        let Some(&idx) = self.owners.get(&action.domain()) else {
            return Arc::clone(state);
        };
        match self.reducers[idx].reduce(state, action) {
            Some(next) => Arc::new(next),
            None => Arc::clone(state),
        }
    }
}

impl Default for StateEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Holds the single live `AppState` reference and serializes dispatches.
///
/// Actions are applied one at a time, in issue order; the previous snapshot
/// stays valid and immutable while the next one is computed.
pub struct Store {
    engine: StateEngine,
    state: Arc<AppState>,
}

impl Store {
    pub fn new(engine: StateEngine, initial: AppState) -> Self {
        Self {
            engine,
            state: Arc::new(initial),
        }
    }

    pub fn state(&self) -> Arc<AppState> {
        Arc::clone(&self.state)
    }

    pub fn dispatch(&mut self, action: Action) -> Arc<AppState> {
        tracing::debug!(action = action.name(), "dispatch");
        self.state = self.engine.transition(&self.state, &action);
        Arc::clone(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubReducer {
        name: &'static str,
        domains: &'static [ActionDomain],
    }

    impl DomainReducer for StubReducer {
        fn name(&self) -> &'static str {
            self.name
        }
        fn domains(&self) -> &'static [ActionDomain] {
            self.domains
        }
        fn reduce(&self, _state: &AppState, _action: &Action) -> Option<AppState> {
            None
        }
    }

    #[test]
    fn test_overlapping_claim_is_rejected() {
        let mut engine = StateEngine::new();
        engine
            .register(Box::new(StubReducer {
                name: "first",
                domains: &[ActionDomain::Tasks, ActionDomain::Inventory],
            }))
            .unwrap();
        let err = engine
            .register(Box::new(StubReducer {
                name: "second",
                domains: &[ActionDomain::Inventory],
            }))
            .unwrap_err();
        assert!(matches!(
            err,
            EngineError::AmbiguousDomain {
                domain: ActionDomain::Inventory,
                existing: "first",
                incoming: "second",
            }
        ));
        assert_eq!(engine.owner_of(ActionDomain::Inventory), Some("first"));
    }

    #[test]
    fn test_partial_overlap_claims_nothing() {
        let mut engine = StateEngine::new();
        engine
            .register(Box::new(StubReducer {
                name: "first",
                domains: &[ActionDomain::Journal],
            }))
            .unwrap();
        // Second reducer claims one free and one taken domain; the free one
        // must not end up owned after the rejection.
        engine
            .register(Box::new(StubReducer {
                name: "second",
                domains: &[ActionDomain::Skills, ActionDomain::Journal],
            }))
            .unwrap_err();
        assert_eq!(engine.owner_of(ActionDomain::Skills), None);
    }

    #[test]
    fn test_unowned_domain_is_reference_equal_noop() {
        let engine = StateEngine::new();
        let state = Arc::new(AppState::default());
        let next = engine.transition(&state, &Action::DismissNewCacheNotifier);
        assert!(Arc::ptr_eq(&state, &next));
    }
}
