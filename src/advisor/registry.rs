//! Advisor registry.
//!
//! Maps ([`Engine`], [`RuleType`]) to exactly one [`Advisor`]. The
//! process-wide registry returned by [`registry`] is bootstrapped once, on
//! first use, with every built-in checker and is read-only afterwards, so
//! lookups from parallel review workers need no locking. Callers that want a
//! different set of advisors build their own [`Registry`] and pass it around.

use std::sync::LazyLock;

use indexmap::IndexMap;

use super::{Advisor, Engine, RuleType};
use crate::{
    checkers,
    error::{AppResult, advisor_not_found_error}
};

static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::with_builtin_advisors);

/// The process-wide registry with every built-in advisor
pub fn registry() -> &'static Registry {
    &REGISTRY
}

/// Table of advisors keyed by engine and rule type
#[derive(Default)]
pub struct Registry {
    advisors: IndexMap<(Engine, RuleType), Box<dyn Advisor>>
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in advisor
    pub fn with_builtin_advisors() -> Self {
        let mut registry = Self::new();
        checkers::register_builtin(&mut registry);
        log::debug!("advisor registry bootstrapped with {} entries", registry.len());
        registry
    }

    /// Register `advisor` for `rule_type` on `engine`.
    ///
    /// # Panics
    ///
    /// Panics when an advisor is already registered for the pair: two
    /// advisors for one rule would make the applied policy ambiguous.
    pub fn register(
        &mut self,
        engine: Engine,
        rule_type: RuleType,
        advisor: impl Advisor + 'static
    ) {
        if self.advisors.contains_key(&(engine, rule_type)) {
            panic!(
                "advisor for rule '{}' on engine '{}' is already registered",
                rule_type, engine
            );
        }
        self.advisors.insert((engine, rule_type), Box::new(advisor));
    }

    /// Look up the advisor for a pair
    pub fn get(&self, engine: Engine, rule_type: RuleType) -> Option<&dyn Advisor> {
        self.advisors
            .get(&(engine, rule_type))
            .map(|advisor| advisor.as_ref())
    }

    /// Look up the advisor for a pair.
    ///
    /// # Errors
    ///
    /// Returns a config error when no advisor is registered for the pair.
    pub fn resolve(&self, engine: Engine, rule_type: RuleType) -> AppResult<&dyn Advisor> {
        self.get(engine, rule_type)
            .ok_or_else(|| advisor_not_found_error(engine, rule_type))
    }

    /// Registered pairs in registration order
    pub fn entries(&self) -> impl Iterator<Item = (Engine, RuleType)> + '_ {
        self.advisors.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.advisors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.advisors.is_empty()
    }
}
