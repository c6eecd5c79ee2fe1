//! Statement parser adapter.
//!
//! Wraps [`sqlparser`] and splits the reviewed text into [`Statement`]s, each
//! carrying its own source text and the 1-based line it starts on. Lines are
//! counted over the whole input, so advice produced for the third statement
//! of a request still points at the right line of the original text.
//!
//! A syntax error never reaches the caller as an error value: it comes back
//! as a single [`Advice`] with [`Code::StatementSyntaxError`](crate::advisor::Code)
//! that advisors return verbatim.
//!
//! # Example
//!
//! ```
//! use sql_review::{
//!     advisor::Engine,
//!     parser::{ParseOptions, parse_statements}
//! };
//!
//! let sql = "CREATE TABLE t (a INT);\nUPDATE t SET a = 1;";
//! let statements = parse_statements(sql, &ParseOptions::new(Engine::MySQL)).unwrap();
//!
//! assert_eq!(statements.len(), 2);
//! assert_eq!(statements[1].line, 2);
//! assert_eq!(statements[1].text, "UPDATE t SET a = 1");
//! ```

mod line_index;

use line_index::LineIndex;
use sqlparser::{
    ast,
    dialect::{Dialect, MySqlDialect, PostgreSqlDialect},
    parser::{Parser, ParserError, ParserOptions},
    tokenizer::Token
};

use crate::{
    advisor::{Advice, Engine},
    error::extract_position
};

/// Dialect hints for parsing
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    pub engine:    Engine,
    pub charset:   String,
    pub collation: String
}

impl ParseOptions {
    pub fn new(engine: Engine) -> Self {
        Self {
            engine,
            ..Default::default()
        }
    }

    /// Whether string literal escapes are decoded while tokenizing.
    ///
    /// The `binary` charset keeps literals byte-for-byte.
    pub fn unescape_literals(&self) -> bool {
        !self.charset.eq_ignore_ascii_case("binary")
    }
}

/// A single parsed statement of the reviewed text.
#[derive(Debug, Clone)]
pub struct Statement {
    /// Source text of the statement without the trailing delimiter
    pub text: String,
    /// 1-based line where the statement begins
    pub line: usize,
    pub ast:  ast::Statement
}

/// Parser dialect used for an engine
pub fn parser_dialect(engine: Engine) -> Box<dyn Dialect> {
    match engine {
        Engine::MySQL | Engine::TiDB => Box::new(MySqlDialect {}),
        Engine::Postgres => Box::new(PostgreSqlDialect {})
    }
}

/// Split and parse `sql` into statements in textual order.
///
/// # Errors
///
/// On malformed input returns a single syntax-error advice instead of any
/// statements.
pub fn parse_statements(sql: &str, options: &ParseOptions) -> Result<Vec<Statement>, Vec<Advice>> {
    log::debug!(
        "parsing {} bytes for {} (charset '{}', collation '{}')",
        sql.len(),
        options.engine,
        options.charset,
        options.collation
    );
    let dialect = parser_dialect(options.engine);
    let parser_options = ParserOptions::new().with_unescape(options.unescape_literals());
    let mut parser = Parser::new(dialect.as_ref())
        .with_options(parser_options)
        .try_with_sql(sql)
        .map_err(|e| syntax_error(e, 0))?;
    let index = LineIndex::new(sql);
    let mut statements = Vec::new();
    loop {
        while parser.consume_token(&Token::SemiColon) {}
        let first = parser.peek_token();
        if first.token == Token::EOF {
            break;
        }
        let line = usize::try_from(first.span.start.line).unwrap_or_default();
        let ast = parser
            .parse_statement()
            .map_err(|e| syntax_error(e, line))?;
        let next = parser.peek_token();
        let end = match next.token {
            Token::EOF => sql.len(),
            Token::SemiColon => index.offset(next.span.start).unwrap_or(sql.len()),
            ref found => {
                let at = usize::try_from(next.span.start.line).unwrap_or(line);
                return Err(vec![Advice::syntax_error(
                    format!("Expected: end of statement, found: {}{}", found, next.span.start),
                    at
                )]);
            }
        };
        let begin = index.offset(first.span.start).unwrap_or_default().min(end);
        statements.push(Statement {
            text: sql[begin..end].trim_end().to_string(),
            line,
            ast
        });
    }
    log::debug!("parsed {} statement(s)", statements.len());
    Ok(statements)
}

fn syntax_error(error: ParserError, fallback_line: usize) -> Vec<Advice> {
    let message = error.to_string();
    let line = extract_position(&message)
        .map(|pos| pos.line)
        .unwrap_or(fallback_line);
    vec![Advice::syntax_error(message, line)]
}
