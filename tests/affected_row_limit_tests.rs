use sql_review::{
    advisor::{
        Advice, Advisor, Code, Context, Engine, RuleLevel, RuleType, SqlReviewRule, Status,
        testing::{TestCase, run_sql_review_rule_tests}
    },
    checkers::StatementAffectedRowLimitAdvisor
};

fn rule(max_row: i64) -> SqlReviewRule {
    SqlReviewRule::new(
        RuleType::StatementAffectedRowLimit,
        RuleLevel::Warning,
        format!(r#"{{"number": {}}}"#, max_row)
    )
}

fn exceeds(content: &str, line: usize) -> Advice {
    Advice {
        status: Status::Warn,
        code: Code::StatementAffectedRowExceedsLimit,
        title: String::from("statement.affected-row-limit"),
        content: content.to_string(),
        line
    }
}

#[test]
fn test_update_without_where_is_flagged() {
    let cases = [TestCase::new(
        "UPDATE t SET x=1",
        vec![exceeds(
            "\"UPDATE t SET x=1\" has no WHERE clause, the affected rows may exceed 100",
            1
        )]
    )];

    run_sql_review_rule_tests(
        &cases,
        &StatementAffectedRowLimitAdvisor,
        &rule(100),
        Engine::MySQL
    );
}

#[test]
fn test_statements_with_where_pass() {
    let cases = [
        TestCase::new("UPDATE t SET x=1 WHERE id=1", vec![Advice::ok()]),
        TestCase::new("DELETE FROM t WHERE id > 10", vec![Advice::ok()]),
        TestCase::new("SELECT * FROM t", vec![Advice::ok()]),
    ];

    run_sql_review_rule_tests(
        &cases,
        &StatementAffectedRowLimitAdvisor,
        &rule(100),
        Engine::MySQL
    );
}

#[test]
fn test_delete_limit_within_threshold_passes() {
    let cases = [TestCase::new("DELETE FROM t LIMIT 10", vec![Advice::ok()])];

    run_sql_review_rule_tests(
        &cases,
        &StatementAffectedRowLimitAdvisor,
        &rule(100),
        Engine::TiDB
    );
}

#[test]
fn test_delete_limit_above_threshold_is_flagged() {
    let cases = [TestCase::new(
        "DELETE FROM t LIMIT 1000",
        vec![exceeds(
            "\"DELETE FROM t LIMIT 1000\" has LIMIT 1000, the affected rows may exceed 100",
            1
        )]
    )];

    run_sql_review_rule_tests(
        &cases,
        &StatementAffectedRowLimitAdvisor,
        &rule(100),
        Engine::MySQL
    );
}

#[test]
fn test_each_statement_reports_its_own_line() {
    let cases = [TestCase::new(
        "DELETE FROM a;\nUPDATE b SET x = 1 WHERE id = 2;\nDELETE FROM c;",
        vec![
            exceeds(
                "\"DELETE FROM a\" has no WHERE clause, the affected rows may exceed 5",
                1
            ),
            exceeds(
                "\"DELETE FROM c\" has no WHERE clause, the affected rows may exceed 5",
                3
            ),
        ]
    )];

    run_sql_review_rule_tests(
        &cases,
        &StatementAffectedRowLimitAdvisor,
        &rule(5),
        Engine::MySQL
    );
}

#[test]
fn test_missing_payload_is_an_error() {
    let rule = SqlReviewRule::new(RuleType::StatementAffectedRowLimit, RuleLevel::Warning, "");
    let ctx = Context::new(Engine::MySQL, &rule);

    assert!(
        StatementAffectedRowLimitAdvisor
            .check(&ctx, "UPDATE t SET x=1")
            .is_err()
    );
}

#[test]
fn test_non_positive_limit_is_an_error() {
    for max_row in [0, -5] {
        let rule = rule(max_row);
        let ctx = Context::new(Engine::MySQL, &rule);

        assert!(
            StatementAffectedRowLimitAdvisor
                .check(&ctx, "UPDATE t SET x=1")
                .is_err()
        );
    }
}

#[test]
fn test_syntax_error_wins_over_bad_payload() {
    let rule = SqlReviewRule::new(RuleType::StatementAffectedRowLimit, RuleLevel::Warning, "");
    let ctx = Context::new(Engine::MySQL, &rule);
    let advice = StatementAffectedRowLimitAdvisor
        .check(&ctx, "UPDATE SET")
        .unwrap();

    assert_eq!(advice[0].code, Code::StatementSyntaxError);
}

#[test]
fn test_update_with_limit_is_a_syntax_error() {
    let rule = rule(100);
    let ctx = Context::new(Engine::MySQL, &rule);
    let advice = StatementAffectedRowLimitAdvisor
        .check(&ctx, "UPDATE t SET x = 1 LIMIT 5")
        .unwrap();

    assert_eq!(advice.len(), 1);
    assert_eq!(advice[0].code, Code::StatementSyntaxError);
    assert_eq!(advice[0].status, Status::Error);
    assert_eq!(advice[0].line, 1);
    assert!(advice[0].content.contains("LIMIT"));
}
