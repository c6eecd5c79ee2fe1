use sqlparser::ast::{DataType, Ident, ObjectName};

use crate::{
    advisor::{
        Advice, Advisor, Code, Context, check_with,
        payload::unmarshal_string_array_type_rule_payload
    },
    ast::{Enter, Node, Traversal, Visitor, base_type_name, table_name},
    error::AppResult
};

/// Rejects columns declared with a type from the payload's `list`.
///
/// Types are compared case-insensitively by base name, so `VARCHAR` also
/// matches `varchar(255)`.
pub struct ColumnTypeDisallowListAdvisor;

impl Advisor for ColumnTypeDisallowListAdvisor {
    fn check(&self, ctx: &Context<'_>, statement: &str) -> AppResult<Vec<Advice>> {
        check_with(ctx, statement, |ctx| {
            let payload = unmarshal_string_array_type_rule_payload(&ctx.rule.payload)?;
            Ok(ColumnTypeDisallowListChecker {
                disallowed: payload
                    .list
                    .iter()
                    .map(|name| name.trim().to_uppercase())
                    .collect()
            })
        })
    }
}

struct ColumnTypeDisallowListChecker {
    disallowed: Vec<String>
}

impl<'ast> Visitor<'ast> for ColumnTypeDisallowListChecker {
    fn enter(&mut self, node: &Node<'ast>, traversal: &mut Traversal) -> Enter {
        match *node {
            Node::ColumnDef {
                table,
                column
            } => self.inspect(table, &column.name, &column.data_type, node, traversal),
            Node::ModifyColumn {
                table,
                column,
                data_type,
                ..
            } => self.inspect(table, column, data_type, node, traversal),
            _ => return Enter::Descend
        }
        Enter::Skip
    }
}

impl ColumnTypeDisallowListChecker {
    fn inspect(
        &self,
        table: &ObjectName,
        column: &Ident,
        data_type: &DataType,
        node: &Node<'_>,
        traversal: &mut Traversal
    ) {
        let base = base_type_name(data_type);
        let first_word = base.split_whitespace().next().unwrap_or_default();
        let Some(disallowed) = self
            .disallowed
            .iter()
            .find(|name| **name == base || **name == first_word)
        else {
            return;
        };
        let line = node.line().unwrap_or(traversal.statement_line());
        traversal.report_at(
            Code::DisabledColumnType,
            format!(
                "Disallow column type {} but column `{}`.`{}` is",
                disallowed,
                table_name(table),
                column.value
            ),
            line
        );
    }
}
