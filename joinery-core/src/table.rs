//! Table definitions

use serde::{Deserialize, Serialize};

use crate::column::ColumnDef;

/// A named ordered set of columns plus storage flags
///
/// Constructed once and shared read-only; nothing mutates after the
/// consuming flag setters run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    pub columns: Vec<ColumnDef>,
    pub temporary: bool,
    pub unlogged: bool,
    pub if_not_exists: bool,
}

impl Table {
    pub fn new(name: impl Into<String>, columns: Vec<ColumnDef>) -> Self {
        Self {
            name: name.into(),
            columns,
            temporary: false,
            unlogged: false,
            if_not_exists: false,
        }
    }

    /// Mark the table TEMP
    pub fn temporary(mut self) -> Self {
        self.temporary = true;
        self
    }

    /// Mark the table UNLOGGED
    pub fn unlogged(mut self) -> Self {
        self.unlogged = true;
        self
    }

    /// Emit IF NOT EXISTS when creating the table
    pub fn if_not_exists(mut self) -> Self {
        self.if_not_exists = true;
        self
    }
}
