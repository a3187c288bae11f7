//! INSERT statement tree and builder

use crate::column::{Column, ColumnDef};
use crate::error::{Error, Result};
use crate::statement::join::TableJoin;
use crate::statement::select::SelectStatement;
use crate::statement::Statement;
use crate::table::Table;

/// An immutable INSERT statement tree
///
/// Without a nested SELECT the renderer emits `?` placeholders for every
/// target column; with one, the SELECT text follows the VALUES clause.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertStatement {
    table: Table,
    columns: Vec<ColumnDef>,
    joins: Vec<TableJoin>,
    select: Option<SelectStatement>,
}

impl InsertStatement {
    pub fn builder(table: &Table) -> InsertBuilder {
        InsertBuilder::new(table)
    }

    pub fn select(&self) -> Option<&SelectStatement> {
        self.select.as_ref()
    }
}

impl Statement for InsertStatement {
    fn table(&self) -> &Table {
        &self.table
    }

    fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    fn joins(&self) -> &[TableJoin] {
        &self.joins
    }
}

/// Assembles an [`InsertStatement`]
#[derive(Debug, Clone)]
pub struct InsertBuilder {
    table: Table,
    columns: Vec<ColumnDef>,
    joins: Vec<TableJoin>,
    select: Option<SelectStatement>,
}

impl InsertBuilder {
    pub fn new(table: &Table) -> Self {
        Self {
            table: table.clone(),
            columns: Vec::new(),
            joins: Vec::new(),
            select: None,
        }
    }

    /// Add one target column
    pub fn column<T>(mut self, column: &Column<T>) -> Self {
        self.columns.push(column.def().clone());
        self
    }

    /// Target every column of the base table, in declaration order
    pub fn all_columns(mut self) -> Self {
        self.columns.extend(self.table.columns.iter().cloned());
        self
    }

    pub fn join(mut self, join: TableJoin) -> Self {
        self.joins.push(join);
        self
    }

    /// Attach a nested SELECT for the `INSERT ... SELECT` form
    pub fn select(mut self, select: SelectStatement) -> Self {
        self.select = Some(select);
        self
    }

    pub fn build(self) -> Result<InsertStatement> {
        if self.columns.is_empty() {
            return Err(Error::invalid_statement(
                "INSERT requires at least one target column",
            ));
        }
        Ok(InsertStatement {
            table: self.table,
            columns: self.columns,
            joins: self.joins,
            select: self.select,
        })
    }
}
