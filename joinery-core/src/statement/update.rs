//! UPDATE statement tree and builder

use crate::clause::WhereClause;
use crate::column::{Column, ColumnDef};
use crate::error::{Error, Result};
use crate::statement::join::TableJoin;
use crate::statement::Statement;
use crate::table::Table;

/// An immutable UPDATE statement tree; its column list denotes SET targets
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateStatement {
    table: Table,
    columns: Vec<ColumnDef>,
    joins: Vec<TableJoin>,
    where_clause: Option<WhereClause>,
}

impl UpdateStatement {
    pub fn builder(table: &Table) -> UpdateBuilder {
        UpdateBuilder::new(table)
    }

    pub fn where_clause(&self) -> Option<&WhereClause> {
        self.where_clause.as_ref()
    }
}

impl Statement for UpdateStatement {
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

/// Assembles an [`UpdateStatement`]
#[derive(Debug, Clone)]
pub struct UpdateBuilder {
    table: Table,
    columns: Vec<ColumnDef>,
    joins: Vec<TableJoin>,
    where_clause: Option<WhereClause>,
}

impl UpdateBuilder {
    pub fn new(table: &Table) -> Self {
        Self {
            table: table.clone(),
            columns: Vec::new(),
            joins: Vec::new(),
            where_clause: None,
        }
    }

    /// Add one SET target column
    pub fn set<T>(mut self, column: &Column<T>) -> Self {
        self.columns.push(column.def().clone());
        self
    }

    pub fn join(mut self, join: TableJoin) -> Self {
        self.joins.push(join);
        self
    }

    pub fn where_clause(mut self, clause: WhereClause) -> Self {
        self.where_clause = Some(clause);
        self
    }

    pub fn build(self) -> Result<UpdateStatement> {
        if self.columns.is_empty() {
            return Err(Error::invalid_statement(
                "UPDATE requires at least one SET column",
            ));
        }
        Ok(UpdateStatement {
            table: self.table,
            columns: self.columns,
            joins: self.joins,
            where_clause: self.where_clause,
        })
    }
}
