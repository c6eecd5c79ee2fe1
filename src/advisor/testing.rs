//! Table-driven harness for advisor tests.
//!
//! ```
//! use sql_review::{
//!     advisor::{
//!         Advice, Engine, RuleLevel, RuleType, SqlReviewRule,
//!         testing::{TestCase, run_sql_review_rule_tests}
//!     },
//!     checkers::ColumnRequireDefaultAdvisor
//! };
//!
//! let cases = [TestCase::new(
//!     "CREATE TABLE t(a int primary key, b int default 1)",
//!     vec![Advice::ok()]
//! )];
//! let rule = SqlReviewRule::new(RuleType::ColumnRequireDefault, RuleLevel::Warning, "");
//!
//! run_sql_review_rule_tests(&cases, &ColumnRequireDefaultAdvisor, &rule, Engine::MySQL);
//! ```

use super::{Advice, Advisor, Context, Engine, SqlReviewRule};

/// One statement and the exact advice it must produce
#[derive(Debug, Clone)]
pub struct TestCase {
    pub statement: String,
    pub want:      Vec<Advice>
}

impl TestCase {
    pub fn new(statement: impl Into<String>, want: Vec<Advice>) -> Self {
        Self {
            statement: statement.into(),
            want
        }
    }
}

/// Run every case through `advisor` under `rule` and assert the returned
/// advice equals the expected list exactly.
///
/// # Panics
///
/// Panics on the first case whose advice differs or whose check fails.
pub fn run_sql_review_rule_tests(
    cases: &[TestCase],
    advisor: &dyn Advisor,
    rule: &SqlReviewRule,
    engine: Engine
) {
    let ctx = Context::new(engine, rule);
    for (index, case) in cases.iter().enumerate() {
        let got = match advisor.check(&ctx, &case.statement) {
            Ok(advice) => advice,
            Err(e) => panic!(
                "case #{} failed to check: {}\nstatement: {}",
                index, e, case.statement
            )
        };
        assert_eq!(
            got, case.want,
            "case #{} produced unexpected advice\nstatement: {}",
            index, case.statement
        );
    }
}
