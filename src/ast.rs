//! Visitor protocol over parsed statements.
//!
//! Checkers implement [`Visitor`] and never walk the tree themselves:
//! [`walk`] calls [`Visitor::enter`] pre-order on every [`Node`] and
//! [`Visitor::leave`] post-order. Children are visited in source order
//! (declaration order inside CREATE TABLE, clause order inside a statement),
//! so findings come out sorted by line.
//!
//! ```text
//! Statement ─▶ CreateTable ─▶ ColumnDef*
//!           ─▶ AlterTable  ─▶ AlterTableOperation ─▶ ColumnDef | ModifyColumn
//!           ─▶ Update      ─▶ Selection?
//!           ─▶ Delete      ─▶ Selection?
//! ```
//!
//! Findings and the current statement live in a [`Traversal`] passed to
//! every callback. Visitors are built fresh for each call, so any scope flag
//! they keep is per-call too.

mod node;
mod traversal;

pub use node::{Node, NodeKind, base_type_name, table_name};
pub use traversal::Traversal;

use crate::parser::Statement;

/// Result of [`Visitor::enter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enter {
    /// Visit the node's children
    Descend,
    /// Skip the children and go straight to [`Visitor::leave`]
    Skip
}

/// Result of [`Visitor::leave`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leave {
    /// Continue with the next sibling
    Continue,
    /// Abandon the rest of the statement
    Stop
}

/// Enter/leave callbacks of a tree walk.
pub trait Visitor<'ast> {
    fn enter(&mut self, node: &Node<'ast>, traversal: &mut Traversal) -> Enter;

    fn leave(&mut self, _node: &Node<'ast>, _traversal: &mut Traversal) -> Leave {
        Leave::Continue
    }
}

/// Walk `node` and its subtree.
///
/// When a descendant stops, the ancestors' `leave` is not called.
pub fn walk<'ast, V>(node: Node<'ast>, visitor: &mut V, traversal: &mut Traversal) -> Leave
where
    V: Visitor<'ast> + ?Sized
{
    if visitor.enter(&node, traversal) == Enter::Descend {
        for child in node.children() {
            if walk(child, visitor, traversal) == Leave::Stop {
                return Leave::Stop;
            }
        }
    }
    visitor.leave(&node, traversal)
}

/// Walk every statement in order and return the collected advice.
///
/// A [`Leave::Stop`] ends the walk of its own statement only.
pub fn walk_statements<'ast, V>(
    statements: &'ast [Statement],
    visitor: &mut V,
    mut traversal: Traversal
) -> Vec<crate::advisor::Advice>
where
    V: Visitor<'ast> + ?Sized
{
    for statement in statements {
        traversal.begin_statement(statement);
        walk(Node::Statement(&statement.ast), visitor, &mut traversal);
    }
    traversal.finish()
}
