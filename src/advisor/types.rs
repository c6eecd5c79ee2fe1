//! Type definitions for the advisor framework.
//!
//! - [`Engine`] - Database engines an advisor can be registered for
//! - [`RuleType`] - Review rule identifiers
//! - [`RuleLevel`] - Configured severity of a rule
//! - [`SqlReviewRule`] - A configured rule handed to an advisor
//! - [`Status`], [`Code`], [`Advice`] - Advisor findings

use serde::{Deserialize, Serialize};

use crate::error::{AppResult, config_error};

/// Database engine (SQL dialect) an advisor runs against.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize
)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    #[default]
    MySQL,
    TiDB,
    Postgres
}

impl Engine {
    pub const ALL: [Engine; 3] = [Engine::MySQL, Engine::TiDB, Engine::Postgres];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::MySQL => "mysql",
            Self::TiDB => "tidb",
            Self::Postgres => "postgres"
        }
    }
}

impl std::fmt::Display for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Engine {
    type Err = masterror::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mysql" => Ok(Self::MySQL),
            "tidb" => Ok(Self::TiDB),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            other => Err(config_error(format!("Unknown engine '{}'", other)))
        }
    }
}

/// Identifier of a review rule.
///
/// The string form doubles as the title of every violation advice the rule
/// produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RuleType {
    /// Every column needs a DEFAULT value
    #[serde(rename = "column.require-default")]
    ColumnRequireDefault,
    /// UPDATE/DELETE must not affect more than N rows
    #[serde(rename = "statement.affected-row-limit")]
    StatementAffectedRowLimit,
    /// Table names follow a naming convention
    #[serde(rename = "naming.table")]
    NamingTable,
    /// Column types from a list are not allowed
    #[serde(rename = "column.type-disallow-list")]
    ColumnTypeDisallowList
}

impl RuleType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ColumnRequireDefault => "column.require-default",
            Self::StatementAffectedRowLimit => "statement.affected-row-limit",
            Self::NamingTable => "naming.table",
            Self::ColumnTypeDisallowList => "column.type-disallow-list"
        }
    }
}

impl std::fmt::Display for RuleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configured severity of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RuleLevel {
    Error,
    Warning,
    Disabled
}

/// A review rule as configured by the invoking layer.
///
/// Immutable for the duration of an analysis pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SqlReviewRule {
    #[serde(rename = "type")]
    pub rule_type: RuleType,
    pub level:     RuleLevel,
    /// Engines the rule applies to, empty means every engine
    #[serde(default)]
    pub engines:   Vec<Engine>,
    /// Opaque checker-specific configuration, usually JSON
    #[serde(default)]
    pub payload:   String
}

impl SqlReviewRule {
    pub fn new(rule_type: RuleType, level: RuleLevel, payload: impl Into<String>) -> Self {
        Self {
            rule_type,
            level,
            engines: Vec::new(),
            payload: payload.into()
        }
    }

    /// Whether the rule should be evaluated for `engine`
    pub fn applies_to(&self, engine: Engine) -> bool {
        self.engines.is_empty() || self.engines.contains(&engine)
    }
}

/// Status of a single advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Status {
    Success,
    Warn,
    Error
}

impl Status {
    /// Map a rule level to the status its violations carry.
    ///
    /// # Errors
    ///
    /// A disabled rule has no advice status and yields a config error.
    pub fn from_rule_level(level: RuleLevel) -> AppResult<Self> {
        match level {
            RuleLevel::Error => Ok(Self::Error),
            RuleLevel::Warning => Ok(Self::Warn),
            RuleLevel::Disabled => Err(config_error(
                "Rule level DISABLED cannot be mapped to an advice status"
            ))
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "SUCCESS"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR")
        }
    }
}

/// Stable diagnostic code of an advice, serialized as its number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u32")]
#[non_exhaustive]
pub enum Code {
    Ok,
    StatementSyntaxError,
    StatementAffectedRowExceedsLimit,
    NamingTableConventionMismatch,
    DisabledColumnType,
    NoDefault
}

impl Code {
    /// Numeric value of the code
    pub fn value(self) -> u32 {
        match self {
            Self::Ok => 0,
            Self::StatementSyntaxError => 201,
            Self::StatementAffectedRowExceedsLimit => 209,
            Self::NamingTableConventionMismatch => 301,
            Self::DisabledColumnType => 411,
            Self::NoDefault => 420
        }
    }
}

impl From<Code> for u32 {
    fn from(code: Code) -> Self {
        code.value()
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// A single finding produced by an advisor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advice {
    pub status:  Status,
    pub code:    Code,
    pub title:   String,
    pub content: String,
    /// 1-based line in the reviewed text, 0 when not tied to a line
    pub line:    usize
}

impl Advice {
    /// The advice returned when a rule found nothing to report
    pub fn ok() -> Self {
        Self {
            status:  Status::Success,
            code:    Code::Ok,
            title:   String::from("OK"),
            content: String::new(),
            line:    0
        }
    }

    pub fn syntax_error(message: impl Into<String>, line: usize) -> Self {
        Self {
            status: Status::Error,
            code: Code::StatementSyntaxError,
            title: String::from("Syntax error"),
            content: message.into(),
            line
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == Status::Success
    }
}
