//! Built-in advisors.
//!
//! | Rule | Engines | Payload |
//! |------|---------|---------|
//! | `column.require-default` | MySQL, TiDB | none |
//! | `statement.affected-row-limit` | MySQL, TiDB | `{"number": N}` |
//! | `naming.table` | all | `{"format": "...", "maxLength": N}` |
//! | `column.type-disallow-list` | all | `{"list": [...]}` |

mod column_require_default;
mod column_type_disallow_list;
mod naming_table;
mod statement_affected_row_limit;

pub use column_require_default::ColumnRequireDefaultAdvisor;
pub use column_type_disallow_list::ColumnTypeDisallowListAdvisor;
pub use naming_table::NamingTableAdvisor;
pub use statement_affected_row_limit::StatementAffectedRowLimitAdvisor;

use crate::advisor::{Engine, Registry, RuleType};

/// Register every built-in advisor for the engines it supports
pub fn register_builtin(registry: &mut Registry) {
    for engine in [Engine::MySQL, Engine::TiDB] {
        registry.register(
            engine,
            RuleType::ColumnRequireDefault,
            ColumnRequireDefaultAdvisor
        );
        registry.register(
            engine,
            RuleType::StatementAffectedRowLimit,
            StatementAffectedRowLimitAdvisor
        );
    }
    for engine in Engine::ALL {
        registry.register(engine, RuleType::NamingTable, NamingTableAdvisor);
        registry.register(
            engine,
            RuleType::ColumnTypeDisallowList,
            ColumnTypeDisallowListAdvisor
        );
    }
}
