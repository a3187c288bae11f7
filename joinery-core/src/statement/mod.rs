//! Statement trees and their builders

pub mod delete;
pub mod insert;
pub mod join;
pub mod select;
pub mod update;

pub use delete::{DeleteBuilder, DeleteStatement};
pub use insert::{InsertBuilder, InsertStatement};
pub use join::{JoinColumn, JoinColumns, JoinColumnsBuilder, JoinType, TableJoin};
pub use select::{SelectBuilder, SelectStatement};
pub use update::{UpdateBuilder, UpdateStatement};

use crate::column::ColumnDef;
use crate::table::Table;

/// Common surface of every statement kind: one base table, the target
/// column list, and the joins against other tables
pub trait Statement {
    fn table(&self) -> &Table;

    fn columns(&self) -> &[ColumnDef];

    fn joins(&self) -> &[TableJoin];
}
