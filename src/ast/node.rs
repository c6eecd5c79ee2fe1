use sqlparser::ast::{
    AlterTableOperation, ColumnDef, ColumnOption, CreateTable, DataType, Delete, Expr, Ident,
    ObjectName, ObjectNamePart, Statement, TableWithJoins
};

/// Kind tag of a [`Node`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Statement,
    CreateTable,
    AlterTable,
    AlterTableOperation,
    ColumnDef,
    ModifyColumn,
    Update,
    Delete,
    Selection
}

/// A node of a parsed statement, borrowed from the dialect AST.
///
/// Only the shapes advisors match on get their own variant; anything else is
/// reachable as a plain [`Node::Statement`] without children.
#[derive(Debug, Clone, Copy)]
pub enum Node<'ast> {
    Statement(&'ast Statement),
    CreateTable(&'ast CreateTable),
    AlterTable {
        table:      &'ast ObjectName,
        operations: &'ast [AlterTableOperation]
    },
    AlterTableOperation {
        table:     &'ast ObjectName,
        operation: &'ast AlterTableOperation
    },
    /// Column definition of CREATE TABLE or ALTER TABLE ... ADD COLUMN
    ColumnDef {
        table:  &'ast ObjectName,
        column: &'ast ColumnDef
    },
    /// Column redefined by ALTER TABLE ... MODIFY/CHANGE COLUMN
    ModifyColumn {
        table:     &'ast ObjectName,
        column:    &'ast Ident,
        data_type: &'ast DataType,
        options:   &'ast [ColumnOption]
    },
    Update {
        table:     &'ast TableWithJoins,
        selection: Option<&'ast Expr>
    },
    Delete(&'ast Delete),
    /// WHERE clause of UPDATE or DELETE
    Selection(&'ast Expr)
}

impl<'ast> Node<'ast> {
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Statement(_) => NodeKind::Statement,
            Self::CreateTable(_) => NodeKind::CreateTable,
            Self::AlterTable { .. } => NodeKind::AlterTable,
            Self::AlterTableOperation { .. } => NodeKind::AlterTableOperation,
            Self::ColumnDef { .. } => NodeKind::ColumnDef,
            Self::ModifyColumn { .. } => NodeKind::ModifyColumn,
            Self::Update { .. } => NodeKind::Update,
            Self::Delete(_) => NodeKind::Delete,
            Self::Selection(_) => NodeKind::Selection
        }
    }

    /// Direct children in source order
    pub fn children(&self) -> Vec<Node<'ast>> {
        match *self {
            Self::Statement(statement) => statement_child(statement).into_iter().collect(),
            Self::CreateTable(create) => create
                .columns
                .iter()
                .map(move |column| Node::ColumnDef {
                    table: &create.name,
                    column
                })
                .collect(),
            Self::AlterTable {
                table,
                operations
            } => operations
                .iter()
                .map(move |operation| Node::AlterTableOperation {
                    table,
                    operation
                })
                .collect(),
            Self::AlterTableOperation {
                table,
                operation
            } => operation_child(table, operation).into_iter().collect(),
            Self::Update {
                selection, ..
            } => selection.map(Node::Selection).into_iter().collect(),
            Self::Delete(delete) => delete
                .selection
                .as_ref()
                .map(Node::Selection)
                .into_iter()
                .collect(),
            Self::ColumnDef { .. }
            | Self::ModifyColumn { .. }
            | Self::Selection(_) => Vec::new()
        }
    }

    /// Source line of the node when the dialect recorded one
    pub fn line(&self) -> Option<usize> {
        let ident = match self {
            Self::ColumnDef {
                column, ..
            } => &column.name,
            Self::ModifyColumn {
                column, ..
            } => *column,
            _ => return None
        };
        match usize::try_from(ident.span.start.line) {
            Ok(0) | Err(_) => None,
            Ok(line) => Some(line)
        }
    }
}

fn statement_child(statement: &Statement) -> Option<Node<'_>> {
    match statement {
        Statement::CreateTable(create) => Some(Node::CreateTable(create)),
        Statement::AlterTable {
            name,
            operations,
            ..
        } => Some(Node::AlterTable {
            table: name,
            operations
        }),
        Statement::Update {
            table,
            selection,
            ..
        } => Some(Node::Update {
            table,
            selection: selection.as_ref()
        }),
        Statement::Delete(delete) => Some(Node::Delete(delete)),
        _ => None
    }
}

fn operation_child<'ast>(
    table: &'ast ObjectName,
    operation: &'ast AlterTableOperation
) -> Option<Node<'ast>> {
    match operation {
        AlterTableOperation::AddColumn {
            column_def, ..
        } => Some(Node::ColumnDef {
            table,
            column: column_def
        }),
        AlterTableOperation::ModifyColumn {
            col_name,
            data_type,
            options,
            ..
        } => Some(Node::ModifyColumn {
            table,
            column: col_name,
            data_type,
            options
        }),
        AlterTableOperation::ChangeColumn {
            new_name,
            data_type,
            options,
            ..
        } => Some(Node::ModifyColumn {
            table,
            column: new_name,
            data_type,
            options
        }),
        _ => None
    }
}

/// Unquoted, unqualified name of a table
pub fn table_name(name: &ObjectName) -> String {
    name.0
        .last()
        .and_then(ObjectNamePart::as_ident)
        .map(|ident| ident.value.clone())
        .unwrap_or_else(|| name.to_string())
}

/// Upper-cased base name of a data type without its arguments, e.g. `VARCHAR`
/// for `varchar(220)`
pub fn base_type_name(data_type: &DataType) -> String {
    let rendered = data_type.to_string();
    let base = rendered.split('(').next().unwrap_or(&rendered);
    base.trim().to_uppercase()
}
