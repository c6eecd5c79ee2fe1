use sqlparser::ast::{Expr, Value};

use crate::{
    advisor::{
        Advice, Advisor, Code, Context, check_with, payload::unmarshal_number_type_rule_payload
    },
    ast::{Enter, Node, Traversal, Visitor},
    error::{AppResult, config_error}
};

/// Flags UPDATE and DELETE statements whose affected rows are not bounded
/// by the configured `number`.
///
/// Without a live database the estimate is static: a statement with a WHERE
/// clause passes, a DELETE without one passes only when its LIMIT is within
/// the threshold, anything else is reported. `UPDATE ... LIMIT` does not
/// parse and comes back as a syntax error.
pub struct StatementAffectedRowLimitAdvisor;

impl Advisor for StatementAffectedRowLimitAdvisor {
    fn check(&self, ctx: &Context<'_>, statement: &str) -> AppResult<Vec<Advice>> {
        check_with(ctx, statement, |ctx| {
            let payload = unmarshal_number_type_rule_payload(&ctx.rule.payload)?;
            let max_row = u64::try_from(payload.number)
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| {
                    config_error(format!(
                        "affected row limit must be positive, got {}",
                        payload.number
                    ))
                })?;
            Ok(StatementAffectedRowLimitChecker {
                max_row
            })
        })
    }
}

struct StatementAffectedRowLimitChecker {
    max_row: u64
}

impl<'ast> Visitor<'ast> for StatementAffectedRowLimitChecker {
    fn enter(&mut self, node: &Node<'ast>, traversal: &mut Traversal) -> Enter {
        let content = match *node {
            Node::Update {
                selection: None, ..
            } => Some(self.unbounded(traversal.statement_text())),
            Node::Delete(delete) if delete.selection.is_none() => {
                match delete.limit.as_ref().and_then(limit_value) {
                    Some(limit) if limit <= self.max_row => None,
                    Some(limit) => Some(format!(
                        "\"{}\" has LIMIT {}, the affected rows may exceed {}",
                        traversal.statement_text(),
                        limit,
                        self.max_row
                    )),
                    None => Some(self.unbounded(traversal.statement_text()))
                }
            }
            Node::Update { .. } | Node::Delete(_) => None,
            _ => return Enter::Descend
        };
        if let Some(content) = content {
            traversal.report(Code::StatementAffectedRowExceedsLimit, content);
        }
        Enter::Skip
    }
}

impl StatementAffectedRowLimitChecker {
    fn unbounded(&self, text: &str) -> String {
        format!(
            "\"{}\" has no WHERE clause, the affected rows may exceed {}",
            text, self.max_row
        )
    }
}

/// Literal row count of a LIMIT expression
fn limit_value(limit: &Expr) -> Option<u64> {
    match limit {
        Expr::Value(value) => match &value.value {
            Value::Number(number, _) => number.parse().ok(),
            _ => None
        },
        _ => None
    }
}
