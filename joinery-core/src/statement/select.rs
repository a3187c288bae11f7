//! SELECT statement tree and builder

use crate::clause::{HavingClause, OrderByClause, WhereClause};
use crate::column::{Column, ColumnDef};
use crate::statement::join::TableJoin;
use crate::statement::Statement;
use crate::table::Table;

/// An immutable SELECT statement tree
///
/// GROUP BY, HAVING, LIMIT, and OFFSET are accepted into the tree but not
/// yet wired into rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectStatement {
    table: Table,
    columns: Vec<ColumnDef>,
    joins: Vec<TableJoin>,
    where_clause: Option<WhereClause>,
    group_by: Vec<ColumnDef>,
    having: Option<HavingClause>,
    order_by: Option<OrderByClause>,
    limit: Option<u64>,
    offset: Option<u64>,
}

impl SelectStatement {
    pub fn builder(table: &Table) -> SelectBuilder {
        SelectBuilder::new(table)
    }

    pub fn where_clause(&self) -> Option<&WhereClause> {
        self.where_clause.as_ref()
    }

    pub fn group_by(&self) -> &[ColumnDef] {
        &self.group_by
    }

    pub fn having(&self) -> Option<&HavingClause> {
        self.having.as_ref()
    }

    pub fn order_by(&self) -> Option<&OrderByClause> {
        self.order_by.as_ref()
    }

    pub fn limit(&self) -> Option<u64> {
        self.limit
    }

    pub fn offset(&self) -> Option<u64> {
        self.offset
    }
}

impl Statement for SelectStatement {
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

/// Assembles a [`SelectStatement`] from already-immutable parts
#[derive(Debug, Clone)]
pub struct SelectBuilder {
    table: Table,
    columns: Vec<ColumnDef>,
    joins: Vec<TableJoin>,
    where_clause: Option<WhereClause>,
    group_by: Vec<ColumnDef>,
    having: Option<HavingClause>,
    order_by: Option<OrderByClause>,
    limit: Option<u64>,
    offset: Option<u64>,
}

impl SelectBuilder {
    pub fn new(table: &Table) -> Self {
        Self {
            table: table.clone(),
            columns: Vec::new(),
            joins: Vec::new(),
            where_clause: None,
            group_by: Vec::new(),
            having: None,
            order_by: None,
            limit: None,
            offset: None,
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

    pub fn where_clause(mut self, clause: WhereClause) -> Self {
        self.where_clause = Some(clause);
        self
    }

    /// Accepted into the tree; not rendered
    pub fn group_by(mut self, columns: Vec<ColumnDef>, having: Option<HavingClause>) -> Self {
        self.group_by = columns;
        self.having = having;
        self
    }

    pub fn order_by(mut self, clause: OrderByClause) -> Self {
        self.order_by = Some(clause);
        self
    }

    /// Accepted into the tree; not rendered
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Accepted into the tree; not rendered
    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn build(self) -> SelectStatement {
        SelectStatement {
            table: self.table,
            columns: self.columns,
            joins: self.joins,
            where_clause: self.where_clause,
            group_by: self.group_by,
            having: self.having,
            order_by: self.order_by,
            limit: self.limit,
            offset: self.offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clause::{ClauseInput, WhereClause};
    use crate::types::SqlType;

    fn animals() -> (Table, Column<i32>, Column<String>) {
        let id = SqlType::INT.create_column("animals", "id");
        let name = SqlType::varchar(255).create_column("animals", "name");
        let table = Table::new("animals", vec![id.def().clone(), name.def().clone()]);
        (table, id, name)
    }

    #[test]
    fn test_defaults_are_empty() {
        let (table, id, _) = animals();
        let statement = SelectStatement::builder(&table).column(&id).build();
        assert_eq!(statement.columns().len(), 1);
        assert!(statement.joins().is_empty());
        assert!(statement.where_clause().is_none());
        assert!(statement.group_by().is_empty());
        assert!(statement.having().is_none());
        assert!(statement.order_by().is_none());
        assert_eq!(statement.limit(), None);
        assert_eq!(statement.offset(), None);
    }

    #[test]
    fn test_all_columns_follow_declaration_order() {
        let (table, _, _) = animals();
        let statement = SelectStatement::builder(&table).all_columns().build();
        let names: Vec<&str> = statement.columns().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["animals.id", "animals.name"]);
    }

    #[test]
    fn test_clauses_attach() {
        let (table, id, _) = animals();
        let statement = SelectStatement::builder(&table)
            .column(&id)
            .where_clause(WhereClause::builder().equal(ClauseInput::column(&id), 1))
            .limit(10)
            .offset(5)
            .build();
        assert!(statement.where_clause().is_some());
        assert_eq!(statement.limit(), Some(10));
        assert_eq!(statement.offset(), Some(5));
    }

    #[test]
    fn test_group_by_is_stored() {
        let (table, id, _) = animals();
        let statement = SelectStatement::builder(&table)
            .column(&id)
            .group_by(vec![id.def().clone()], None)
            .build();
        assert_eq!(statement.group_by().len(), 1);
        assert!(statement.having().is_none());
    }
}
