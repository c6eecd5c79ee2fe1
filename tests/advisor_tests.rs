// SPDX-FileCopyrightText: 2025 RAprogramm
// SPDX-License-Identifier: MIT

use sql_review::{
    advisor::{
        Advice, Advisor, Code, Context, Engine, RuleLevel, RuleType, SqlReviewRule, Status,
        check_with
    },
    ast::{Enter, Leave, Node, Traversal, Visitor},
    error::AppResult
};

/// Reports every DELETE and abandons its statement afterwards
struct DeleteChecker;

impl<'ast> Visitor<'ast> for DeleteChecker {
    fn enter(&mut self, node: &Node<'ast>, traversal: &mut Traversal) -> Enter {
        if let Node::Delete(_) = node {
            traversal.report(Code::StatementAffectedRowExceedsLimit, "delete");
        }
        Enter::Descend
    }

    fn leave(&mut self, node: &Node<'ast>, _traversal: &mut Traversal) -> Leave {
        match node {
            Node::Delete(_) => Leave::Stop,
            _ => Leave::Continue
        }
    }
}

struct DeleteAdvisor;

impl Advisor for DeleteAdvisor {
    fn check(&self, ctx: &Context<'_>, statement: &str) -> AppResult<Vec<Advice>> {
        check_with(ctx, statement, |_| Ok(DeleteChecker))
    }
}

fn rule(level: RuleLevel) -> SqlReviewRule {
    SqlReviewRule::new(RuleType::StatementAffectedRowLimit, level, "")
}

#[test]
fn test_no_findings_returns_single_ok() {
    let rule = rule(RuleLevel::Warning);
    let ctx = Context::new(Engine::MySQL, &rule);

    assert_eq!(
        DeleteAdvisor.check(&ctx, "SELECT 1").unwrap(),
        vec![Advice::ok()]
    );
}

#[test]
fn test_empty_input_returns_single_ok() {
    let rule = rule(RuleLevel::Warning);
    let ctx = Context::new(Engine::MySQL, &rule);

    assert_eq!(DeleteAdvisor.check(&ctx, "").unwrap(), vec![Advice::ok()]);
}

#[test]
fn test_status_comes_from_rule_level() {
    for (level, status) in [
        (RuleLevel::Warning, Status::Warn),
        (RuleLevel::Error, Status::Error)
    ] {
        let rule = rule(level);
        let ctx = Context::new(Engine::MySQL, &rule);
        let advice = DeleteAdvisor.check(&ctx, "DELETE FROM t").unwrap();

        assert_eq!(advice.len(), 1);
        assert_eq!(advice[0].status, status);
        assert_eq!(advice[0].title, "statement.affected-row-limit");
    }
}

#[test]
fn test_stop_ends_only_the_current_statement() {
    let rule = rule(RuleLevel::Warning);
    let ctx = Context::new(Engine::MySQL, &rule);
    let advice = DeleteAdvisor
        .check(&ctx, "DELETE FROM a;\nDELETE FROM b;")
        .unwrap();

    assert_eq!(
        advice.iter().map(|a| a.line).collect::<Vec<_>>(),
        vec![1, 2]
    );
}

#[test]
fn test_repeated_checks_are_identical() {
    let rule = rule(RuleLevel::Warning);
    let ctx = Context::new(Engine::MySQL, &rule);
    let sql = "DELETE FROM a;\nSELECT 1;\nDELETE FROM b WHERE id = 1;";

    let first = DeleteAdvisor.check(&ctx, sql).unwrap();
    let second = DeleteAdvisor.check(&ctx, sql).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_syntax_error_short_circuits() {
    let rule = rule(RuleLevel::Disabled);
    let ctx = Context::new(Engine::MySQL, &rule);
    let advice = DeleteAdvisor.check(&ctx, "SELECT 1;\nDELETE t WHERE").unwrap();

    assert_eq!(advice.len(), 1);
    assert_eq!(advice[0].code, Code::StatementSyntaxError);
    assert_eq!(advice[0].title, "Syntax error");
    assert_eq!(advice[0].line, 2);
}

#[test]
fn test_disabled_level_is_an_error() {
    let rule = rule(RuleLevel::Disabled);
    let ctx = Context::new(Engine::MySQL, &rule);

    assert!(DeleteAdvisor.check(&ctx, "DELETE FROM t").is_err());
}

#[test]
fn test_context_parse_options() {
    let rule = rule(RuleLevel::Warning);
    let ctx = Context::new(Engine::TiDB, &rule).with_charset("binary", "binary");
    let options = ctx.parse_options();

    assert_eq!(options.engine, Engine::TiDB);
    assert_eq!(options.charset, "binary");
    assert!(!options.unescape_literals());
}

#[test]
fn test_ok_advice_shape() {
    let ok = Advice::ok();

    assert_eq!(ok.status, Status::Success);
    assert_eq!(ok.code, Code::Ok);
    assert_eq!(ok.title, "OK");
    assert!(ok.content.is_empty());
    assert_eq!(ok.line, 0);
    assert!(ok.is_ok());
}
