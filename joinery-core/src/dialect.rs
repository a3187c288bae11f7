//! Dialect rendering: statement values to SQL text
//!
//! Rendering is a pure function over already-validated statement trees,
//! so it never fails. Optional clauses are interpolated as empty strings
//! and the resulting space runs collapsed afterwards, the same pass also
//! trimming the tail before the terminator is appended.

use std::sync::LazyLock;

use regex::Regex;

use crate::clause::{OrderByClause, WhereClause};
use crate::column::ColumnDef;
use crate::statement::{
    DeleteStatement, InsertStatement, SelectStatement, Statement, UpdateStatement,
};
use crate::table::Table;

static FIX_SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(" +").expect("space run pattern is valid"));

/// Translation from abstract statement values to one vendor's SQL text
pub trait Dialect {
    fn create_table(&self, table: &Table) -> String;

    fn select_statement(&self, statement: &SelectStatement) -> String;

    fn insert_statement(&self, statement: &InsertStatement) -> String;

    fn update_statement(&self, statement: &UpdateStatement) -> String;

    fn delete_statement(&self, statement: &DeleteStatement) -> String;
}

/// The Postgres dialect
#[derive(Debug, Clone, Copy, Default)]
pub struct Postgres;

impl Dialect for Postgres {
    fn create_table(&self, table: &Table) -> String {
        let column_clauses = table
            .columns
            .iter()
            .map(column_clause)
            .collect::<Vec<_>>()
            .join(", ");
        let output = format!(
            "CREATE TABLE {} {} {} {} ({});",
            if table.if_not_exists { "IF NOT EXISTS" } else { "" },
            table.name,
            if table.temporary { "TEMP" } else { "" },
            if table.unlogged { "UNLOGGED" } else { "" },
            column_clauses
        );
        collapse(&output)
    }

    fn select_statement(&self, statement: &SelectStatement) -> String {
        let columns = columns_string(statement);
        let join = join_string(statement);
        let where_sql = statement
            .where_clause()
            .map(where_string)
            .unwrap_or_default();
        let order_by = statement
            .order_by()
            .map(order_by_string)
            .unwrap_or_default();
        let output = format!(
            "SELECT {} FROM {} {} {} {}",
            columns,
            statement.table().name,
            join,
            where_sql,
            order_by
        );
        terminate(&output)
    }

    fn insert_statement(&self, statement: &InsertStatement) -> String {
        let columns = columns_string(statement);
        let values = statement
            .columns()
            .iter()
            .map(|_| "?")
            .collect::<Vec<_>>()
            .join(", ");
        let join = join_string(statement);
        let select = statement
            .select()
            .map(|select| self.select_statement(select))
            .unwrap_or_default();
        let output = format!(
            "INSERT INTO {} ({}) VALUES ({}) {} {}",
            statement.table().name,
            columns,
            values,
            join,
            select
        );
        // The nested SELECT already carries the terminator.
        if statement.select().is_some() {
            collapse(&output).trim_end().to_string()
        } else {
            terminate(&output)
        }
    }

    fn update_statement(&self, statement: &UpdateStatement) -> String {
        let set = statement
            .columns()
            .iter()
            .map(|column| format!("{} = ?", column.name()))
            .collect::<Vec<_>>()
            .join(", ");
        let join = join_string(statement);
        let where_sql = statement
            .where_clause()
            .map(where_string)
            .unwrap_or_default();
        let output = format!(
            "UPDATE {} SET {} {} {}",
            statement.table().name,
            set,
            join,
            where_sql
        );
        terminate(&output)
    }

    fn delete_statement(&self, statement: &DeleteStatement) -> String {
        let join = join_string(statement);
        let where_sql = statement
            .where_clause()
            .map(where_string)
            .unwrap_or_default();
        let output = format!(
            "DELETE FROM {} {} {}",
            statement.table().name,
            join,
            where_sql
        );
        terminate(&output)
    }
}

fn collapse(sql: &str) -> String {
    FIX_SPACES.replace_all(sql, " ").into_owned()
}

fn terminate(sql: &str) -> String {
    format!("{};", collapse(sql).trim_end())
}

fn column_clause(column: &ColumnDef) -> String {
    let mut parts = vec![
        column.short_name().to_string(),
        column.type_keyword().to_string(),
    ];
    if let Some(storage) = column.storage() {
        parts.push(format!("STORAGE {}", storage));
    }
    if let Some(compression) = column.compression() {
        parts.push(format!("COMPRESSION {}", compression));
    }
    if let Some(collation) = column.collation() {
        parts.push(format!("COLLATE {}", collation));
    }
    for constraint in column.constraints() {
        parts.push(constraint.to_string());
    }
    parts.join(" ")
}

fn columns_string(statement: &impl Statement) -> String {
    statement
        .columns()
        .iter()
        .map(|column| column.name())
        .collect::<Vec<_>>()
        .join(", ")
}

// Only pair 0 of the join pairing renders; JoinColumns construction
// guarantees it exists.
fn join_string(statement: &impl Statement) -> String {
    statement
        .joins()
        .iter()
        .map(|join| {
            format!(
                "{} {} ON {} = {}",
                join.join_type(),
                join.from().name,
                join.join_columns().left_columns()[0].column().name(),
                join.join_columns().right_columns()[0].column().name()
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn where_string(clause: &WhereClause) -> String {
    let parts = clause
        .parts()
        .iter()
        .map(|part| {
            format!(
                "{} {}",
                part.operator.map(|op| op.to_string()).unwrap_or_default(),
                part.output
            )
        })
        .collect::<Vec<_>>()
        .join(" ");
    format!("WHERE {}", parts)
}

fn order_by_string(clause: &OrderByClause) -> String {
    if clause.parts().is_empty() {
        return String::new();
    }
    let parts = clause
        .parts()
        .iter()
        .map(|part| {
            format!(
                "{} {}",
                part.output,
                part.operator.map(|dir| dir.to_string()).unwrap_or_default()
            )
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!("ORDER BY {}", parts)
}
