//! # SQL Review
//!
//! Rule-based review of SQL statements.
//!
//! A review rule is a named policy (`column.require-default`,
//! `statement.affected-row-limit`, ...) configured with a severity level and
//! an optional JSON payload. Each rule is implemented by an
//! [`Advisor`](advisor::Advisor) registered per database engine. An advisor
//! parses the SQL text with the engine's dialect, walks the statements with
//! a [`Visitor`](ast::Visitor) and reports findings as
//! [`Advice`](advisor::Advice).
//!
//! # Quick Start
//!
//! ```bash
//! # Review a file with the rules from .sql-review.toml
//! sql-review check -s migration.sql
//!
//! # Review stdin for TiDB, JSON output
//! cat migration.sql | sql-review check -s - -e tidb -f json
//!
//! # List rules registered per engine
//! sql-review rules
//! ```
//!
//! # Library Use
//!
//! ```
//! use sql_review::{
//!     advisor::{Engine, RuleLevel, RuleType, SqlReviewRule},
//!     config::ReviewConfig,
//!     review::ReviewRunner
//! };
//!
//! let config = ReviewConfig {
//!     engine: Engine::MySQL,
//!     rules: vec![SqlReviewRule::new(
//!         RuleType::ColumnRequireDefault,
//!         RuleLevel::Warning,
//!         ""
//!     )],
//!     ..Default::default()
//! };
//!
//! let report = ReviewRunner::new(config)
//!     .review("CREATE TABLE t(a int);")
//!     .unwrap();
//! assert_eq!(report.warning_count(), 1);
//! ```
//!
//! # Exit Codes
//!
//! - `0` - No findings
//! - `1` - Warnings found
//! - `2` - Errors found, or the review could not run
//!
//! # Modules
//!
//! - [`advisor`] - Advisor contract, rule types, payloads and registry
//! - [`ast`] - Visitor protocol over parsed statements
//! - [`checkers`] - Built-in advisors
//! - [`parser`] - Dialect-aware statement splitting and parsing
//! - [`review`] - Parallel review runner
//! - [`config`] - Configuration loading
//! - [`output`] - Report formatting
//! - [`error`] - Error types and constructors

pub mod advisor;
pub mod app;
pub mod ast;
pub mod checkers;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod parser;
pub mod review;
