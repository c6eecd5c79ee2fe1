//! Advisor framework for SQL review rules.
//!
//! An [`Advisor`] evaluates one [`RuleType`] against raw SQL text and returns
//! a list of [`Advice`]. Advisors are registered per ([`Engine`],
//! [`RuleType`]) in a [`Registry`] and dispatched uniformly by the invoking
//! layer.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────┐  resolve   ┌──────────┐  check   ┌─────────┐  walk   ┌─────────┐
//! │   Rule   │───────────▶│ Registry │─────────▶│ Advisor │────────▶│ Visitor │
//! └──────────┘            └──────────┘          └─────────┘         └─────────┘
//!                                                    │                   │
//!                                              parse │                   │ report
//!                                                    ▼                   ▼
//!                                              ┌───────────┐       ┌───────────┐
//!                                              │ Statements│       │ Traversal │
//!                                              └───────────┘       └───────────┘
//! ```
//!
//! # Guarantees
//!
//! - A `check` without findings returns exactly one [`Advice::ok`].
//! - Violation status comes from the rule level, never from the checker.
//! - Malformed SQL yields a syntax-error advice, not an error value.
//! - `Err` is reserved for configuration failures (bad payload, disabled
//!   level, unknown advisor).
//!
//! # Implementing an Advisor
//!
//! ```
//! use sql_review::{
//!     advisor::{Advice, Advisor, Code, Context, check_with},
//!     ast::{Enter, Node, Traversal, Visitor},
//!     error::AppResult
//! };
//!
//! struct NoDeleteAdvisor;
//!
//! struct NoDeleteChecker;
//!
//! impl<'ast> Visitor<'ast> for NoDeleteChecker {
//!     fn enter(&mut self, node: &Node<'ast>, traversal: &mut Traversal) -> Enter {
//!         if let Node::Delete(_) = node {
//!             traversal.report(Code::StatementAffectedRowExceedsLimit, "DELETE is not allowed");
//!         }
//!         Enter::Descend
//!     }
//! }
//!
//! impl Advisor for NoDeleteAdvisor {
//!     fn check(&self, ctx: &Context<'_>, statement: &str) -> AppResult<Vec<Advice>> {
//!         check_with(ctx, statement, |_| Ok(NoDeleteChecker))
//!     }
//! }
//! ```

pub mod payload;
pub mod registry;
pub mod testing;
mod types;

pub use registry::{Registry, registry};
pub use types::{Advice, Code, Engine, RuleLevel, RuleType, SqlReviewRule, Status};

use crate::{
    ast::{Traversal, Visitor, walk_statements},
    error::AppResult,
    parser::{ParseOptions, parse_statements}
};

/// Per-invocation input of an advisor.
#[derive(Debug, Clone)]
pub struct Context<'a> {
    /// Engine whose dialect the statement is parsed with
    pub engine:    Engine,
    pub charset:   String,
    pub collation: String,
    pub rule:      &'a SqlReviewRule
}

impl<'a> Context<'a> {
    pub fn new(engine: Engine, rule: &'a SqlReviewRule) -> Self {
        Self {
            engine,
            charset: String::new(),
            collation: String::new(),
            rule
        }
    }

    pub fn with_charset(
        mut self,
        charset: impl Into<String>,
        collation: impl Into<String>
    ) -> Self {
        self.charset = charset.into();
        self.collation = collation.into();
        self
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            engine:    self.engine,
            charset:   self.charset.clone(),
            collation: self.collation.clone()
        }
    }
}

/// A checker for one review rule.
///
/// Advisors are stateless; all per-call state lives in the visitor and
/// [`Traversal`] built inside `check`. They must be `Send + Sync` so the
/// registry can be shared across threads.
pub trait Advisor: Send + Sync {
    /// Review `statement`, the full raw SQL text (possibly several
    /// statements).
    ///
    /// # Errors
    ///
    /// Returns an error only when the rule cannot be evaluated at all, e.g.
    /// a malformed payload. Policy violations and syntax errors are advice.
    fn check(&self, ctx: &Context<'_>, statement: &str) -> AppResult<Vec<Advice>>;
}

/// Shared body of visitor-based advisors.
///
/// Parses the text, maps the rule level to a status, builds the visitor with
/// `build` (where payloads get decoded) and walks every statement. A syntax
/// error short-circuits before the rule configuration is looked at.
pub fn check_with<V, F>(ctx: &Context<'_>, statement: &str, build: F) -> AppResult<Vec<Advice>>
where
    V: for<'ast> Visitor<'ast>,
    F: FnOnce(&Context<'_>) -> AppResult<V>
{
    let statements = match parse_statements(statement, &ctx.parse_options()) {
        Ok(statements) => statements,
        Err(advice) => return Ok(advice)
    };
    let status = Status::from_rule_level(ctx.rule.level)?;
    let mut visitor = build(ctx)?;
    let traversal = Traversal::new(status, ctx.rule.rule_type.as_str());
    Ok(walk_statements(&statements, &mut visitor, traversal))
}
