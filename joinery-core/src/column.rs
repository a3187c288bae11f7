//! Typed column definitions and schema metadata

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::types::SqlType;

/// Storage strategy for a column (Postgres TOAST)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageType {
    Plain,
    External,
    Extended,
    Main,
    Default,
}

impl Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageType::Plain => write!(f, "PLAIN"),
            StorageType::External => write!(f, "EXTERNAL"),
            StorageType::Extended => write!(f, "EXTENDED"),
            StorageType::Main => write!(f, "MAIN"),
            StorageType::Default => write!(f, "DEFAULT"),
        }
    }
}

/// Compression method for a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompressionType {
    Pglz,
    Lz4,
}

impl Display for CompressionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompressionType::Pglz => write!(f, "PGLZ"),
            CompressionType::Lz4 => write!(f, "LZ4"),
        }
    }
}

/// Column constraints, rendered as space-separated uppercase tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Constraint {
    NotNull,
    Unique,
    PrimaryKey,
}

impl Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::NotNull => write!(f, "NOT NULL"),
            Constraint::Unique => write!(f, "UNIQUE"),
            Constraint::PrimaryKey => write!(f, "PRIMARY KEY"),
        }
    }
}

/// A named collation, rendered verbatim after COLLATE
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collation(String);

impl Collation {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl Display for Collation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Type-erased column data, as stored by tables and statements
///
/// The qualified `table.column` name is computed once at construction and
/// is the only identity used in comparisons and rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDef {
    name: String,
    short_name: String,
    table_name: String,
    type_keyword: String,
    collation: Option<Collation>,
    storage: Option<StorageType>,
    compression: Option<CompressionType>,
    constraints: Vec<Constraint>,
}

impl ColumnDef {
    /// The qualified `table.column` name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn type_keyword(&self) -> &str {
        &self.type_keyword
    }

    pub fn collation(&self) -> Option<&Collation> {
        self.collation.as_ref()
    }

    pub fn storage(&self) -> Option<StorageType> {
        self.storage
    }

    pub fn compression(&self) -> Option<CompressionType> {
        self.compression
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }
}

/// A column statically bound to its owning table and value type
///
/// Constructed through [`SqlType::create_column`]; optional metadata
/// attaches through the consuming setters. Once built, a column is an
/// immutable schema constant safe to share across callers.
pub struct Column<T> {
    def: ColumnDef,
    ty: SqlType<T>,
}

impl<T> Column<T> {
    pub(crate) fn new(ty: SqlType<T>, table_name: &str, short_name: &str) -> Self {
        let def = ColumnDef {
            name: format!("{}.{}", table_name, short_name),
            short_name: short_name.to_string(),
            table_name: table_name.to_string(),
            type_keyword: ty.keyword().to_string(),
            collation: None,
            storage: None,
            compression: None,
            constraints: Vec::new(),
        };
        Self { def, ty }
    }

    /// The qualified `table.column` name
    pub fn name(&self) -> &str {
        &self.def.name
    }

    pub fn short_name(&self) -> &str {
        &self.def.short_name
    }

    pub fn sql_type(&self) -> &SqlType<T> {
        &self.ty
    }

    /// The type-erased projection stored by tables and statements
    pub fn def(&self) -> &ColumnDef {
        &self.def
    }

    /// Format a value as SQL literal text, delegating to the column's type
    pub fn format(&self, value: &T) -> String {
        self.ty.format(value)
    }

    /// Attach a collation
    pub fn collation(mut self, collation: Collation) -> Self {
        self.def.collation = Some(collation);
        self
    }

    /// Attach a storage strategy
    pub fn storage(mut self, storage: StorageType) -> Self {
        self.def.storage = Some(storage);
        self
    }

    /// Attach a compression method
    pub fn compression(mut self, compression: CompressionType) -> Self {
        self.def.compression = Some(compression);
        self
    }

    /// Append a constraint
    pub fn constraint(mut self, constraint: Constraint) -> Self {
        self.def.constraints.push(constraint);
        self
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            def: self.def.clone(),
            ty: self.ty.clone(),
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column").field("def", &self.def).finish()
    }
}

impl<T> From<&Column<T>> for ColumnDef {
    fn from(column: &Column<T>) -> Self {
        column.def.clone()
    }
}
