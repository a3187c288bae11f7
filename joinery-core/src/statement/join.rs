//! Typed join pairings between tables

use std::fmt::{self, Display};

use crate::column::{Column, ColumnDef};
use crate::error::{Error, Result};
use crate::table::Table;

/// JOIN kinds, rendered as their SQL keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
    Inner,
    Left,
    Right,
    Full,
}

impl Display for JoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinType::Inner => write!(f, "INNER JOIN"),
            JoinType::Left => write!(f, "LEFT JOIN"),
            JoinType::Right => write!(f, "RIGHT JOIN"),
            JoinType::Full => write!(f, "FULL JOIN"),
        }
    }
}

/// One side of a join pairing: a column together with its owning table
#[derive(Debug, Clone, PartialEq)]
pub struct JoinColumn {
    table: Table,
    column: ColumnDef,
}

impl JoinColumn {
    pub fn new<T>(table: &Table, column: &Column<T>) -> Self {
        Self {
            table: table.clone(),
            column: column.def().clone(),
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn column(&self) -> &ColumnDef {
        &self.column
    }
}

/// Positional pairing of left and right join columns
///
/// Index `i` of the left list pairs with index `i` of the right list.
/// Construction rejects unequal list lengths and empty pairings, so a
/// frozen value always has at least one valid pair.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinColumns {
    left_columns: Vec<JoinColumn>,
    right_columns: Vec<JoinColumn>,
    join_types: Vec<JoinType>,
}

impl JoinColumns {
    pub fn new(
        left_columns: Vec<JoinColumn>,
        right_columns: Vec<JoinColumn>,
        join_types: Vec<JoinType>,
    ) -> Result<Self> {
        if left_columns.len() != right_columns.len() {
            return Err(Error::join_column_mismatch(
                left_columns.len(),
                right_columns.len(),
            ));
        }
        if left_columns.is_empty() {
            return Err(Error::invalid_statement(
                "join requires at least one column pair",
            ));
        }
        Ok(Self {
            left_columns,
            right_columns,
            join_types,
        })
    }

    pub fn builder() -> JoinColumnsBuilder {
        JoinColumnsBuilder::default()
    }

    pub fn left_columns(&self) -> &[JoinColumn] {
        &self.left_columns
    }

    pub fn right_columns(&self) -> &[JoinColumn] {
        &self.right_columns
    }

    pub fn join_types(&self) -> &[JoinType] {
        &self.join_types
    }
}

/// Accumulates positional pairs before freezing into [`JoinColumns`]
#[derive(Debug, Default)]
pub struct JoinColumnsBuilder {
    left_columns: Vec<JoinColumn>,
    right_columns: Vec<JoinColumn>,
    join_types: Vec<JoinType>,
}

impl JoinColumnsBuilder {
    /// Append one left/right pair
    pub fn add(mut self, left: JoinColumn, right: JoinColumn, join_type: JoinType) -> Self {
        self.left_columns.push(left);
        self.right_columns.push(right);
        self.join_types.push(join_type);
        self
    }

    /// Freeze into immutable parallel lists
    pub fn build(self) -> Result<JoinColumns> {
        JoinColumns::new(self.left_columns, self.right_columns, self.join_types)
    }
}

/// A join of the statement's base table against another table
#[derive(Debug, Clone, PartialEq)]
pub struct TableJoin {
    from: Table,
    join_type: JoinType,
    join_columns: JoinColumns,
}

impl TableJoin {
    pub fn new(from: &Table, join_type: JoinType, join_columns: JoinColumns) -> Self {
        Self {
            from: from.clone(),
            join_type,
            join_columns,
        }
    }

    pub fn from(&self) -> &Table {
        &self.from
    }

    pub fn join_type(&self) -> JoinType {
        self.join_type
    }

    pub fn join_columns(&self) -> &JoinColumns {
        &self.join_columns
    }
}
