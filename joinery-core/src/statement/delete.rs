//! DELETE statement tree and builder

use crate::clause::WhereClause;
use crate::column::ColumnDef;
use crate::statement::join::TableJoin;
use crate::statement::Statement;
use crate::table::Table;

/// An immutable DELETE statement tree; deletes carry no column list
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteStatement {
    table: Table,
    joins: Vec<TableJoin>,
    where_clause: Option<WhereClause>,
}

impl DeleteStatement {
    pub fn builder(table: &Table) -> DeleteBuilder {
        DeleteBuilder::new(table)
    }

    pub fn where_clause(&self) -> Option<&WhereClause> {
        self.where_clause.as_ref()
    }
}

impl Statement for DeleteStatement {
    fn table(&self) -> &Table {
        &self.table
    }

    fn columns(&self) -> &[ColumnDef] {
        &[]
    }

    fn joins(&self) -> &[TableJoin] {
        &self.joins
    }
}

/// Assembles a [`DeleteStatement`]
#[derive(Debug, Clone)]
pub struct DeleteBuilder {
    table: Table,
    joins: Vec<TableJoin>,
    where_clause: Option<WhereClause>,
}

impl DeleteBuilder {
    pub fn new(table: &Table) -> Self {
        Self {
            table: table.clone(),
            joins: Vec::new(),
            where_clause: None,
        }
    }

    pub fn join(mut self, join: TableJoin) -> Self {
        self.joins.push(join);
        self
    }

    pub fn where_clause(mut self, clause: WhereClause) -> Self {
        self.where_clause = Some(clause);
        self
    }

    pub fn build(self) -> DeleteStatement {
        DeleteStatement {
            table: self.table,
            joins: self.joins,
            where_clause: self.where_clause,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clause::ClauseInput;
    use crate::types::SqlType;

    #[test]
    fn test_builder() {
        let id = SqlType::INT.create_column("animals", "id");
        let table = Table::new("animals", vec![id.def().clone()]);
        let statement = DeleteStatement::builder(&table)
            .where_clause(WhereClause::builder().equal(ClauseInput::column(&id), 1))
            .build();
        assert!(statement.columns().is_empty());
        assert!(statement.where_clause().is_some());
        assert!(statement.joins().is_empty());
    }
}
