//! Joinery Core - typed SQL statement construction and rendering
//!
//! This crate models table schemas and SQL statements as typed immutable
//! values and renders them into dialect-specific SQL text. Columns are
//! statically bound to an owning table and a value type, predicates only
//! accept type-compatible operands, and clause chains are built through a
//! two-state protocol that makes malformed sequences a compile error. The
//! crate never talks to a database; the emitted text and its `?`
//! placeholders are handed to whatever execution layer the caller owns.

pub mod clause;
pub mod column;
pub mod dialect;
pub mod error;
pub mod statement;
pub mod table;
pub mod types;

// Re-export main types
pub use clause::{
    ClauseInput, ClausePart, HavingClause, LogicalOperator, OrderByBuilder, OrderByClause,
    OrderDirection, WhereBuilder, WhereClause,
};
pub use column::{Collation, Column, ColumnDef, CompressionType, Constraint, StorageType};
pub use dialect::{Dialect, Postgres};
pub use error::{Error, Result};
pub use statement::{
    DeleteBuilder, DeleteStatement, InsertBuilder, InsertStatement, JoinColumn, JoinColumns,
    JoinColumnsBuilder, JoinType, SelectBuilder, SelectStatement, Statement, TableJoin,
    UpdateBuilder, UpdateStatement,
};
pub use table::Table;
pub use types::SqlType;

/// Create a SELECT statement builder for the given table
pub fn select(table: &Table) -> SelectBuilder {
    SelectStatement::builder(table)
}

/// Create an INSERT statement builder for the given table
pub fn insert(table: &Table) -> InsertBuilder {
    InsertStatement::builder(table)
}

/// Create an UPDATE statement builder for the given table
pub fn update(table: &Table) -> UpdateBuilder {
    UpdateStatement::builder(table)
}

/// Create a DELETE statement builder for the given table
pub fn delete(table: &Table) -> DeleteBuilder {
    DeleteStatement::builder(table)
}
