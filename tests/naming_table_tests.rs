use sql_review::{
    advisor::{
        Advice, Advisor, Code, Context, Engine, RuleLevel, RuleType, SqlReviewRule, Status,
        testing::{TestCase, run_sql_review_rule_tests}
    },
    checkers::NamingTableAdvisor
};

const SNAKE_CASE: &str = "^[a-z]+(_[a-z]+)*$";

fn rule(max_length: usize) -> SqlReviewRule {
    SqlReviewRule::new(
        RuleType::NamingTable,
        RuleLevel::Error,
        format!(
            r#"{{"format": "{}", "maxLength": {}}}"#,
            SNAKE_CASE, max_length
        )
    )
}

fn mismatch(content: String, line: usize) -> Advice {
    Advice {
        status: Status::Error,
        code: Code::NamingTableConventionMismatch,
        title: String::from("naming.table"),
        content,
        line
    }
}

#[test]
fn test_matching_names_pass() {
    let cases = [
        TestCase::new("CREATE TABLE tech_book(id int)", vec![Advice::ok()]),
        TestCase::new("CREATE TABLE `author`(id int)", vec![Advice::ok()]),
    ];

    run_sql_review_rule_tests(&cases, &NamingTableAdvisor, &rule(64), Engine::MySQL);
}

#[test]
fn test_format_mismatch_is_reported() {
    let cases = [TestCase::new(
        "SELECT 1;\nCREATE TABLE TechBook(id int)",
        vec![mismatch(
            format!(
                "`TechBook` mismatches table naming convention, naming format should be \"{}\"",
                SNAKE_CASE
            ),
            2
        )]
    )];

    run_sql_review_rule_tests(&cases, &NamingTableAdvisor, &rule(64), Engine::MySQL);
}

#[test]
fn test_length_limit_is_reported() {
    let cases = [TestCase::new(
        "CREATE TABLE tech_book_archive(id int)",
        vec![mismatch(
            String::from(
                "`tech_book_archive` mismatches table naming convention, its length should be within 8 characters"
            ),
            1
        )]
    )];

    run_sql_review_rule_tests(&cases, &NamingTableAdvisor, &rule(8), Engine::MySQL);
}

#[test]
fn test_default_length_limit() {
    let rule = SqlReviewRule::new(
        RuleType::NamingTable,
        RuleLevel::Error,
        format!(r#"{{"format": "{}"}}"#, SNAKE_CASE)
    );
    let ctx = Context::new(Engine::MySQL, &rule);
    let long_name = "a".repeat(65);
    let advice = NamingTableAdvisor
        .check(&ctx, &format!("CREATE TABLE {}(id int)", long_name))
        .unwrap();

    assert_eq!(advice.len(), 1);
    assert!(advice[0].content.contains("within 64 characters"));
}

#[test]
fn test_postgres_quoted_name() {
    let cases = [TestCase::new(
        r#"CREATE TABLE public."TechBook"(id int)"#,
        vec![mismatch(
            format!(
                "`TechBook` mismatches table naming convention, naming format should be \"{}\"",
                SNAKE_CASE
            ),
            1
        )]
    )];

    run_sql_review_rule_tests(&cases, &NamingTableAdvisor, &rule(64), Engine::Postgres);
}

#[test]
fn test_invalid_format_is_an_error() {
    let rule = SqlReviewRule::new(RuleType::NamingTable, RuleLevel::Error, r#"{"format": "("}"#);
    let ctx = Context::new(Engine::MySQL, &rule);

    assert!(
        NamingTableAdvisor
            .check(&ctx, "CREATE TABLE t(id int)")
            .is_err()
    );
}
