//! Review runner.
//!
//! Applies every configured rule to a SQL text and collects the findings.
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ ReviewConfig│────▶│ ReviewRunner │────▶│ ReviewReport │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!                            │
//!                     ┌──────┴──────┐
//!                     │  Advisors   │
//!                     │ (parallel)  │
//!                     └─────────────┘
//! ```
//!
//! Rules run in parallel using [`rayon`]. Rules at level `DISABLED` and rules
//! restricted to other engines are skipped. A configuration error in any rule
//! aborts the whole review.

use std::collections::HashSet;

use rayon::prelude::*;
use serde::Serialize;

use crate::{
    advisor::{
        Advice, Code, Context, Registry, RuleLevel, RuleType, SqlReviewRule, Status, registry
    },
    config::ReviewConfig,
    error::AppResult
};

/// A finding together with the rule that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleAdvice {
    #[serde(rename = "rule")]
    pub rule_type: RuleType,
    #[serde(flatten)]
    pub advice:    Advice
}

/// Findings of one review, sorted by line then rule type.
///
/// OK advice is not kept: a rule that found nothing contributes only to
/// [`rules_count`](Self::rules_count).
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReviewReport {
    pub advice:      Vec<RuleAdvice>,
    pub rules_count: usize
}

impl ReviewReport {
    pub fn error_count(&self) -> usize {
        self.count(Status::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Status::Warn)
    }

    /// Most severe status in the report, [`Status::Success`] when empty
    pub fn highest_status(&self) -> Status {
        self.advice
            .iter()
            .map(|entry| entry.advice.status)
            .max()
            .unwrap_or(Status::Success)
    }

    pub fn is_clean(&self) -> bool {
        self.advice.is_empty()
    }

    fn count(&self, status: Status) -> usize {
        self.advice
            .iter()
            .filter(|entry| entry.advice.status == status)
            .count()
    }
}

/// Runs the rules of a [`ReviewConfig`] through a [`Registry`]
pub struct ReviewRunner<'r> {
    registry: &'r Registry,
    config:   ReviewConfig
}

impl ReviewRunner<'static> {
    /// Create a runner backed by the process-wide registry
    pub fn new(config: ReviewConfig) -> Self {
        Self::with_registry(registry(), config)
    }
}

impl<'r> ReviewRunner<'r> {
    pub fn with_registry(registry: &'r Registry, config: ReviewConfig) -> Self {
        Self {
            registry,
            config
        }
    }

    pub fn config(&self) -> &ReviewConfig {
        &self.config
    }

    /// Rules that will be evaluated for the configured engine
    pub fn active_rules(&self) -> impl Iterator<Item = &SqlReviewRule> + '_ {
        let engine = self.config.engine;
        self.config.rules.iter().filter(move |rule| {
            let active = rule.level != RuleLevel::Disabled && rule.applies_to(engine);
            if !active {
                log::debug!("skipping rule '{}' on engine '{}'", rule.rule_type, engine);
            }
            active
        })
    }

    /// Review `sql` with every active rule.
    ///
    /// # Errors
    ///
    /// Returns the first configuration error raised by a rule: an unknown
    /// advisor for the engine or a malformed payload.
    pub fn review(&self, sql: &str) -> AppResult<ReviewReport> {
        let rules: Vec<&SqlReviewRule> = self.active_rules().collect();
        let rules_count = rules.len();

        let per_rule: Vec<Vec<RuleAdvice>> = rules
            .par_iter()
            .map(|rule| self.run_rule(rule, sql))
            .collect::<AppResult<_>>()?;

        let mut advice: Vec<RuleAdvice> = per_rule
            .into_iter()
            .flatten()
            .filter(|entry| !entry.advice.is_ok())
            .collect();
        dedup_syntax_errors(&mut advice);
        advice.sort_by(|a, b| {
            a.advice
                .line
                .cmp(&b.advice.line)
                .then_with(|| a.rule_type.cmp(&b.rule_type))
        });

        log::debug!(
            "reviewed with {} rules, {} findings",
            rules_count,
            advice.len()
        );
        Ok(ReviewReport {
            advice,
            rules_count
        })
    }

    fn run_rule(&self, rule: &SqlReviewRule, sql: &str) -> AppResult<Vec<RuleAdvice>> {
        let advisor = self.registry.resolve(self.config.engine, rule.rule_type)?;
        let ctx = Context::new(self.config.engine, rule)
            .with_charset(&self.config.charset, &self.config.collation);
        let advice = advisor.check(&ctx, sql)?;
        Ok(advice
            .into_iter()
            .map(|advice| RuleAdvice {
                rule_type: rule.rule_type,
                advice
            })
            .collect())
    }
}

/// Every rule reports the same parse failure; keep the first of each.
fn dedup_syntax_errors(advice: &mut Vec<RuleAdvice>) {
    let mut seen = HashSet::new();
    advice.retain(|entry| {
        entry.advice.code != Code::StatementSyntaxError
            || seen.insert((entry.advice.line, entry.advice.content.clone()))
    });
}
