use sqlparser::{
    ast::{ColumnOption, CreateTable, DataType, Expr, TableConstraint},
    keywords::Keyword,
    tokenizer::Token
};

use crate::{
    advisor::{Advice, Advisor, Code, Context, check_with},
    ast::{Enter, Leave, Node, Traversal, Visitor, base_type_name, table_name},
    error::AppResult
};

/// MySQL rejects a DEFAULT on these types
const NO_DEFAULT_TYPES: &[&str] = &[
    "TINYBLOB",
    "BLOB",
    "MEDIUMBLOB",
    "LONGBLOB",
    "TINYTEXT",
    "TEXT",
    "MEDIUMTEXT",
    "LONGTEXT",
    "JSON",
    "GEOMETRY",
    "POINT",
    "LINESTRING",
    "POLYGON",
    "MULTIPOINT",
    "MULTILINESTRING",
    "MULTIPOLYGON",
    "GEOMETRYCOLLECTION"
];

/// Requires every new or redefined column to declare a DEFAULT.
///
/// Exempt: primary key, auto-increment and generated columns, and the
/// BLOB/TEXT/JSON/spatial types that cannot carry a default. A primary key
/// counts whether it is declared on the column or as a table constraint of
/// the same CREATE TABLE. Columns of
/// CREATE TABLE are reported on their own line, columns of ALTER TABLE on
/// the statement's first line.
pub struct ColumnRequireDefaultAdvisor;

impl Advisor for ColumnRequireDefaultAdvisor {
    fn check(&self, ctx: &Context<'_>, statement: &str) -> AppResult<Vec<Advice>> {
        check_with(ctx, statement, |_| Ok(ColumnRequireDefaultChecker::default()))
    }
}

#[derive(Default)]
struct ColumnRequireDefaultChecker {
    in_create_table: bool,
    primary_key:     Vec<String>
}

impl<'ast> Visitor<'ast> for ColumnRequireDefaultChecker {
    fn enter(&mut self, node: &Node<'ast>, traversal: &mut Traversal) -> Enter {
        let (table, column, line) = match *node {
            Node::CreateTable(create) => {
                self.in_create_table = true;
                self.primary_key = primary_key_columns(create);
                return Enter::Descend;
            }
            Node::ColumnDef {
                table,
                column
            } => {
                let options: Vec<&ColumnOption> =
                    column.options.iter().map(|def| &def.option).collect();
                if !missing_default(&column.data_type, &options)
                    || self.in_primary_key(&column.name.value)
                {
                    return Enter::Skip;
                }
                let line = match self.in_create_table {
                    true => node.line(),
                    false => None
                };
                (table, &column.name, line)
            }
            Node::ModifyColumn {
                table,
                column,
                data_type,
                options
            } => {
                let options: Vec<&ColumnOption> = options.iter().collect();
                if !missing_default(data_type, &options) {
                    return Enter::Skip;
                }
                (table, column, None)
            }
            _ => return Enter::Descend
        };
        let line = line.unwrap_or(traversal.statement_line());
        traversal.report_at(
            Code::NoDefault,
            format!(
                "Column `{}`.`{}` doesn't have DEFAULT.",
                table_name(table),
                column.value
            ),
            line
        );
        Enter::Skip
    }

    fn leave(&mut self, node: &Node<'ast>, _traversal: &mut Traversal) -> Leave {
        if let Node::CreateTable(_) = node {
            self.in_create_table = false;
            self.primary_key.clear();
        }
        Leave::Continue
    }
}

impl ColumnRequireDefaultChecker {
    fn in_primary_key(&self, column: &str) -> bool {
        self.in_create_table
            && self
                .primary_key
                .iter()
                .any(|name| name.eq_ignore_ascii_case(column))
    }
}

/// Columns named by `PRIMARY KEY (...)` table constraints
fn primary_key_columns(create: &CreateTable) -> Vec<String> {
    create
        .constraints
        .iter()
        .filter_map(|constraint| match constraint {
            TableConstraint::PrimaryKey {
                columns, ..
            } => Some(columns),
            _ => None
        })
        .flatten()
        .filter_map(|index| match &index.column.expr {
            Expr::Identifier(ident) => Some(ident.value.clone()),
            _ => None
        })
        .collect()
}

fn missing_default(data_type: &DataType, options: &[&ColumnOption]) -> bool {
    let base = base_type_name(data_type);
    let base = base.split_whitespace().next().unwrap_or_default();
    if NO_DEFAULT_TYPES.contains(&base) {
        return false;
    }
    !options
        .iter()
        .any(|option| matches!(option, ColumnOption::Default(_)) || is_exempt(option))
}

fn is_exempt(option: &ColumnOption) -> bool {
    match option {
        ColumnOption::Generated { .. } => true,
        ColumnOption::Unique {
            is_primary, ..
        } => *is_primary,
        ColumnOption::DialectSpecific(tokens) => tokens.iter().any(|token| {
            matches!(
                token,
                Token::Word(word)
                    if matches!(word.keyword, Keyword::AUTO_INCREMENT | Keyword::AUTOINCREMENT)
            )
        }),
        _ => false
    }
}
