use crate::{
    advisor::{
        Advice, Advisor, Code, Context, check_with,
        payload::{NamingRule, unmarshal_naming_rule_payload_as_regex}
    },
    ast::{Enter, Node, Traversal, Visitor, table_name},
    error::AppResult
};

/// Checks names of created tables against a regex and a length limit.
pub struct NamingTableAdvisor;

impl Advisor for NamingTableAdvisor {
    fn check(&self, ctx: &Context<'_>, statement: &str) -> AppResult<Vec<Advice>> {
        check_with(ctx, statement, |ctx| {
            Ok(NamingTableChecker {
                rule: unmarshal_naming_rule_payload_as_regex(&ctx.rule.payload)?
            })
        })
    }
}

struct NamingTableChecker {
    rule: NamingRule
}

impl<'ast> Visitor<'ast> for NamingTableChecker {
    fn enter(&mut self, node: &Node<'ast>, traversal: &mut Traversal) -> Enter {
        let Node::CreateTable(create) = node else {
            return Enter::Descend;
        };
        let name = table_name(&create.name);
        if !self.rule.format.is_match(&name) {
            traversal.report(
                Code::NamingTableConventionMismatch,
                format!(
                    "`{}` mismatches table naming convention, naming format should be \"{}\"",
                    name,
                    self.rule.format.as_str()
                )
            );
        }
        if name.chars().count() > self.rule.max_length {
            traversal.report(
                Code::NamingTableConventionMismatch,
                format!(
                    "`{}` mismatches table naming convention, its length should be within {} characters",
                    name, self.rule.max_length
                )
            );
        }
        Enter::Skip
    }
}
