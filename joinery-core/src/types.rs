//! SQL type keywords and value formatting rules

use std::borrow::Cow;
use std::fmt;

use crate::column::Column;

/// A SQL type together with the formatting rule for its Rust host type
///
/// The type parameter `T` is threaded through [`Column`] and
/// [`ClauseInput`](crate::clause::ClauseInput), so a value of the wrong
/// type offered to a column is a compile error, never a runtime check.
pub struct SqlType<T> {
    keyword: Cow<'static, str>,
    format: fn(&T) -> String,
}

impl<T> SqlType<T> {
    /// Create a SQL type from a static keyword and a formatting rule
    pub const fn new(keyword: &'static str, format: fn(&T) -> String) -> Self {
        Self {
            keyword: Cow::Borrowed(keyword),
            format,
        }
    }

    /// The type keyword rendered into CREATE TABLE output
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Format a value of the host type as SQL literal text
    pub fn format(&self, value: &T) -> String {
        (self.format)(value)
    }

    /// Bind this type to a table and column name, producing a typed column
    pub fn create_column(&self, table_name: &str, short_name: &str) -> Column<T> {
        Column::new(self.clone(), table_name, short_name)
    }
}

// Manual impls keep T free of Clone/Debug bounds; the fn pointer is Copy.
impl<T> Clone for SqlType<T> {
    fn clone(&self) -> Self {
        Self {
            keyword: self.keyword.clone(),
            format: self.format,
        }
    }
}

impl<T> fmt::Debug for SqlType<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqlType")
            .field("keyword", &self.keyword)
            .finish()
    }
}

impl SqlType<i16> {
    pub const SMALLINT: SqlType<i16> = SqlType::new("SMALLINT", |value| value.to_string());
}

impl SqlType<i32> {
    pub const INT: SqlType<i32> = SqlType::new("INT", |value| value.to_string());
}

impl SqlType<i64> {
    pub const BIGINT: SqlType<i64> = SqlType::new("BIGINT", |value| value.to_string());

    /// Seconds-since-epoch timestamp, rendered as its numeric text
    pub const TIMESTAMP: SqlType<i64> = SqlType::new("TIMESTAMP", |value| value.to_string());
}

impl SqlType<f64> {
    pub const DOUBLE_PRECISION: SqlType<f64> =
        SqlType::new("DOUBLE PRECISION", |value| value.to_string());
}

impl SqlType<bool> {
    pub const BOOLEAN: SqlType<bool> = SqlType::new("BOOLEAN", |value| value.to_string());
}

impl SqlType<String> {
    pub const TEXT: SqlType<String> = SqlType::new("TEXT", |value| format!("'{}'", value));

    /// Parameterized VARCHAR type closing over its size
    pub fn varchar(size: u32) -> SqlType<String> {
        SqlType {
            keyword: Cow::Owned(format!("VARCHAR({})", size)),
            format: |value| format!("'{}'", value),
        }
    }
}

impl SqlType<serde_json::Value> {
    /// JSON values render as their compact JSON text, unquoted
    pub const JSON: SqlType<serde_json::Value> =
        SqlType::new("JSON", |value| value.to_string());
}

impl SqlType<Vec<u8>> {
    /// Binary data renders in the Postgres hex format, `'\x…'`
    pub const BLOB: SqlType<Vec<u8>> = SqlType::new("BLOB", |value| {
        let hex: String = value.iter().map(|byte| format!("{:02x}", byte)).collect();
        format!("'\\x{}'", hex)
    });
}

impl SqlType<uuid::Uuid> {
    pub const UUID: SqlType<uuid::Uuid> =
        SqlType::new("UUID", |value| format!("'{}'", value));
}

#[cfg(feature = "datetime-support")]
impl SqlType<chrono::DateTime<chrono::Utc>> {
    pub const TIMESTAMPTZ: SqlType<chrono::DateTime<chrono::Utc>> =
        SqlType::new("TIMESTAMPTZ", |value| format!("'{}'", value.to_rfc3339()));
}

#[cfg(feature = "datetime-support")]
impl SqlType<chrono::NaiveDate> {
    pub const DATE: SqlType<chrono::NaiveDate> =
        SqlType::new("DATE", |value| format!("'{}'", value));
}

#[cfg(feature = "decimal-support")]
impl SqlType<rust_decimal::Decimal> {
    pub const NUMERIC: SqlType<rust_decimal::Decimal> =
        SqlType::new("NUMERIC", |value| value.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_formats() {
        assert_eq!(SqlType::INT.format(&42), "42");
        assert_eq!(SqlType::BIGINT.format(&-7i64), "-7");
        assert_eq!(SqlType::SMALLINT.format(&3i16), "3");
        assert_eq!(SqlType::TIMESTAMP.format(&1700000000i64), "1700000000");
    }

    #[test]
    fn test_text_formats_quote() {
        assert_eq!(SqlType::TEXT.format(&"hello".to_string()), "'hello'");
        let varchar = SqlType::varchar(255);
        assert_eq!(varchar.keyword(), "VARCHAR(255)");
        assert_eq!(varchar.format(&"abc".to_string()), "'abc'");
    }

    #[test]
    fn test_boolean_format() {
        assert_eq!(SqlType::BOOLEAN.format(&true), "true");
        assert_eq!(SqlType::BOOLEAN.format(&false), "false");
    }

    #[test]
    fn test_json_format_is_unquoted() {
        let value = serde_json::json!({"a": 1});
        assert_eq!(SqlType::JSON.format(&value), "{\"a\":1}");
    }

    #[test]
    fn test_blob_format_hex() {
        assert_eq!(SqlType::BLOB.format(&vec![0x01, 0xab, 0xff]), "'\\x01abff'");
    }

    #[test]
    fn test_uuid_format_quotes() {
        let id = uuid::Uuid::nil();
        assert_eq!(
            SqlType::UUID.format(&id),
            "'00000000-0000-0000-0000-000000000000'"
        );
    }

    #[test]
    fn test_keywords() {
        assert_eq!(SqlType::INT.keyword(), "INT");
        assert_eq!(SqlType::DOUBLE_PRECISION.keyword(), "DOUBLE PRECISION");
        assert_eq!(SqlType::BLOB.keyword(), "BLOB");
    }

    #[test]
    fn test_clone_keeps_format() {
        let ty = SqlType::varchar(10);
        let clone = ty.clone();
        assert_eq!(clone.keyword(), "VARCHAR(10)");
        assert_eq!(clone.format(&"x".to_string()), "'x'");
    }
}
