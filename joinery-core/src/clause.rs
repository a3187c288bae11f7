//! Typed WHERE and ORDER BY clause construction
//!
//! Both clauses follow a two-state protocol encoded as distinct types. A
//! builder in the incomplete state only exposes predicate (or column)
//! methods and cannot be rendered; the complete state is the only one the
//! renderer and the statement builders accept, and the only one that can
//! be extended with a logical or ordering operator. Chains missing an
//! operator between parts are therefore unrepresentable.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::column::Column;

/// Logical operator joining consecutive WHERE parts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogicalOperator {
    And,
    Or,
}

impl Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicalOperator::And => write!(f, "AND"),
            LogicalOperator::Or => write!(f, "OR"),
        }
    }
}

/// Sort direction for ORDER BY parts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderDirection {
    Asc,
    Desc,
}

impl Display for OrderDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderDirection::Asc => write!(f, "ASC"),
            OrderDirection::Desc => write!(f, "DESC"),
        }
    }
}

/// One rendered clause fragment paired with the operator preceding it
///
/// The first part of any clause carries no operator.
#[derive(Debug, Clone, PartialEq)]
pub struct ClausePart<Op> {
    pub output: String,
    pub operator: Option<Op>,
}

/// A column reference usable inside predicates and orderings, optionally
/// wrapped in an aggregate function
pub struct ClauseInput<T> {
    column: Column<T>,
    output: String,
}

impl<T> ClauseInput<T> {
    /// Plain column reference, rendered as the qualified name
    pub fn column(column: &Column<T>) -> Self {
        Self {
            column: column.clone(),
            output: column.name().to_string(),
        }
    }

    pub fn count(column: &Column<T>) -> Self {
        Self {
            column: column.clone(),
            output: format!("COUNT({})", column.name()),
        }
    }

    pub fn sum(column: &Column<T>) -> Self {
        Self {
            column: column.clone(),
            output: format!("SUM({})", column.name()),
        }
    }

    pub fn avg(column: &Column<T>) -> Self {
        Self {
            column: column.clone(),
            output: format!("AVG({})", column.name()),
        }
    }

    pub fn min(column: &Column<T>) -> Self {
        Self {
            column: column.clone(),
            output: format!("MIN({})", column.name()),
        }
    }

    pub fn max(column: &Column<T>) -> Self {
        Self {
            column: column.clone(),
            output: format!("MAX({})", column.name()),
        }
    }

    /// The rendered text of this input
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Format a literal operand via the underlying column's type
    pub fn format(&self, value: &T) -> String {
        self.column.format(value)
    }
}

impl<T> Clone for ClauseInput<T> {
    fn clone(&self) -> Self {
        Self {
            column: self.column.clone(),
            output: self.output.clone(),
        }
    }
}

impl<T> fmt::Debug for ClauseInput<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClauseInput")
            .field("output", &self.output)
            .finish()
    }
}

/// A WHERE clause in its complete, renderable state
#[derive(Debug, Clone, PartialEq)]
pub struct WhereClause {
    parts: Vec<ClausePart<LogicalOperator>>,
}

impl WhereClause {
    /// Start a new chain; the first predicate needs no logical operator
    pub fn builder() -> WhereBuilder {
        WhereBuilder {
            parts: Vec::new(),
            operator: None,
        }
    }

    /// Extend the chain with AND, returning to the incomplete state
    pub fn and(self) -> WhereBuilder {
        WhereBuilder {
            parts: self.parts,
            operator: Some(LogicalOperator::And),
        }
    }

    /// Extend the chain with OR, returning to the incomplete state
    pub fn or(self) -> WhereBuilder {
        WhereBuilder {
            parts: self.parts,
            operator: Some(LogicalOperator::Or),
        }
    }

    pub fn parts(&self) -> &[ClausePart<LogicalOperator>] {
        &self.parts
    }
}

/// A WHERE clause waiting for its next predicate; cannot be rendered
#[derive(Debug, Clone)]
pub struct WhereBuilder {
    parts: Vec<ClausePart<LogicalOperator>>,
    operator: Option<LogicalOperator>,
}

impl WhereBuilder {
    fn complete(mut self, output: String) -> WhereClause {
        self.parts.push(ClausePart {
            output,
            operator: self.operator,
        });
        WhereClause { parts: self.parts }
    }

    fn comparison<T>(self, left: ClauseInput<T>, op: &str, right: impl Into<T>) -> WhereClause {
        let text = format!("{} {} {}", left.output(), op, left.format(&right.into()));
        self.complete(text)
    }

    fn comparison_column<T>(self, left: ClauseInput<T>, op: &str, right: &Column<T>) -> WhereClause {
        let text = format!("{} {} {}", left.output(), op, right.name());
        self.complete(text)
    }

    pub fn equal<T>(self, left: ClauseInput<T>, right: impl Into<T>) -> WhereClause {
        self.comparison(left, "=", right)
    }

    pub fn equal_column<T>(self, left: ClauseInput<T>, right: &Column<T>) -> WhereClause {
        self.comparison_column(left, "=", right)
    }

    pub fn not_equal<T>(self, left: ClauseInput<T>, right: impl Into<T>) -> WhereClause {
        self.comparison(left, "!=", right)
    }

    pub fn not_equal_column<T>(self, left: ClauseInput<T>, right: &Column<T>) -> WhereClause {
        self.comparison_column(left, "!=", right)
    }

    pub fn greater_than<T>(self, left: ClauseInput<T>, right: impl Into<T>) -> WhereClause {
        self.comparison(left, ">", right)
    }

    pub fn greater_than_column<T>(self, left: ClauseInput<T>, right: &Column<T>) -> WhereClause {
        self.comparison_column(left, ">", right)
    }

    pub fn greater_than_or_equal<T>(self, left: ClauseInput<T>, right: impl Into<T>) -> WhereClause {
        self.comparison(left, ">=", right)
    }

    pub fn greater_than_or_equal_column<T>(
        self,
        left: ClauseInput<T>,
        right: &Column<T>,
    ) -> WhereClause {
        self.comparison_column(left, ">=", right)
    }

    pub fn less_than<T>(self, left: ClauseInput<T>, right: impl Into<T>) -> WhereClause {
        self.comparison(left, "<", right)
    }

    pub fn less_than_column<T>(self, left: ClauseInput<T>, right: &Column<T>) -> WhereClause {
        self.comparison_column(left, "<", right)
    }

    pub fn less_than_or_equal<T>(self, left: ClauseInput<T>, right: impl Into<T>) -> WhereClause {
        self.comparison(left, "<=", right)
    }

    pub fn less_than_or_equal_column<T>(
        self,
        left: ClauseInput<T>,
        right: &Column<T>,
    ) -> WhereClause {
        self.comparison_column(left, "<=", right)
    }

    pub fn like<T>(self, left: ClauseInput<T>, right: impl Into<T>) -> WhereClause {
        self.comparison(left, "LIKE", right)
    }

    /// IN against a literal list; each element formats via the column's type
    pub fn in_list<T, V>(self, left: ClauseInput<T>, values: impl IntoIterator<Item = V>) -> WhereClause
    where
        V: Into<T>,
    {
        let rendered: Vec<String> = values
            .into_iter()
            .map(|value| left.format(&value.into()))
            .collect();
        let text = format!("{} IN ({})", left.output(), rendered.join(", "));
        self.complete(text)
    }

    /// IN against another column of the same value type
    pub fn in_column<T>(self, left: ClauseInput<T>, right: &Column<T>) -> WhereClause {
        let text = format!("{} IN ({})", left.output(), right.name());
        self.complete(text)
    }

    pub fn is_null<T>(self, left: ClauseInput<T>) -> WhereClause {
        let text = format!("{} IS NULL", left.output());
        self.complete(text)
    }

    pub fn is_not_null<T>(self, left: ClauseInput<T>) -> WhereClause {
        let text = format!("{} IS NOT NULL", left.output());
        self.complete(text)
    }
}

/// An ORDER BY clause in its complete, renderable state
///
/// The empty clause starts complete: no operator is required before the
/// first column, but a direction must precede every column added.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderByClause {
    parts: Vec<ClausePart<OrderDirection>>,
}

impl OrderByClause {
    pub fn builder() -> OrderByClause {
        OrderByClause { parts: Vec::new() }
    }

    pub fn asc(self) -> OrderByBuilder {
        OrderByBuilder {
            parts: self.parts,
            direction: OrderDirection::Asc,
        }
    }

    pub fn desc(self) -> OrderByBuilder {
        OrderByBuilder {
            parts: self.parts,
            direction: OrderDirection::Desc,
        }
    }

    pub fn parts(&self) -> &[ClausePart<OrderDirection>] {
        &self.parts
    }
}

/// An ORDER BY clause waiting for the column its direction applies to
#[derive(Debug, Clone)]
pub struct OrderByBuilder {
    parts: Vec<ClausePart<OrderDirection>>,
    direction: OrderDirection,
}

impl OrderByBuilder {
    pub fn column<T>(mut self, column: &Column<T>) -> OrderByClause {
        self.parts.push(ClausePart {
            output: column.name().to_string(),
            operator: Some(self.direction),
        });
        OrderByClause { parts: self.parts }
    }
}

/// Placeholder for HAVING support: accepted by the statement model but not
/// constructible, and never rendered
#[derive(Debug, Clone, PartialEq)]
pub enum HavingClause {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SqlType;

    fn id_column() -> Column<i32> {
        SqlType::INT.create_column("animals", "id")
    }

    fn name_column() -> Column<String> {
        SqlType::varchar(255).create_column("animals", "name")
    }

    #[test]
    fn test_first_part_has_no_operator() {
        let clause = WhereClause::builder().equal(ClauseInput::column(&id_column()), 1);
        assert_eq!(clause.parts().len(), 1);
        assert_eq!(clause.parts()[0].output, "animals.id = 1");
        assert_eq!(clause.parts()[0].operator, None);
    }

    #[test]
    fn test_chain_preserves_order_and_operators() {
        let clause = WhereClause::builder()
            .equal(ClauseInput::column(&id_column()), 1)
            .and()
            .not_equal(ClauseInput::column(&name_column()), "test")
            .or()
            .greater_than(ClauseInput::column(&id_column()), 10);
        let parts = clause.parts();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[1].operator, Some(LogicalOperator::And));
        assert_eq!(parts[1].output, "animals.name != 'test'");
        assert_eq!(parts[2].operator, Some(LogicalOperator::Or));
        assert_eq!(parts[2].output, "animals.id > 10");
    }

    #[test]
    fn test_chain_steps_do_not_share_state() {
        let base = WhereClause::builder().equal(ClauseInput::column(&id_column()), 1);
        let with_and = base.clone().and().is_null(ClauseInput::column(&name_column()));
        let with_or = base.or().is_not_null(ClauseInput::column(&name_column()));
        assert_eq!(with_and.parts()[1].operator, Some(LogicalOperator::And));
        assert_eq!(with_or.parts()[1].operator, Some(LogicalOperator::Or));
    }

    #[test]
    fn test_column_operand_renders_bare_name() {
        let other = SqlType::INT.create_column("mammals", "id");
        let clause =
            WhereClause::builder().equal_column(ClauseInput::column(&id_column()), &other);
        assert_eq!(clause.parts()[0].output, "animals.id = mammals.id");
    }

    #[test]
    fn test_aggregate_inputs() {
        let clause = WhereClause::builder()
            .greater_than(ClauseInput::count(&id_column()), 5)
            .and()
            .less_than(ClauseInput::avg(&id_column()), 100);
        assert_eq!(clause.parts()[0].output, "COUNT(animals.id) > 5");
        assert_eq!(clause.parts()[1].output, "AVG(animals.id) < 100");
        assert_eq!(
            ClauseInput::sum(&id_column()).output(),
            "SUM(animals.id)"
        );
        assert_eq!(ClauseInput::min(&id_column()).output(), "MIN(animals.id)");
        assert_eq!(ClauseInput::max(&id_column()).output(), "MAX(animals.id)");
    }

    #[test]
    fn test_in_list_formats_via_column_type() {
        let clause =
            WhereClause::builder().in_list(ClauseInput::column(&name_column()), ["a", "b"]);
        assert_eq!(clause.parts()[0].output, "animals.name IN ('a', 'b')");
    }

    #[test]
    fn test_in_column() {
        let other = SqlType::INT.create_column("mammals", "id");
        let clause = WhereClause::builder().in_column(ClauseInput::column(&id_column()), &other);
        assert_eq!(clause.parts()[0].output, "animals.id IN (mammals.id)");
    }

    #[test]
    fn test_null_predicates() {
        let clause = WhereClause::builder()
            .is_null(ClauseInput::column(&name_column()))
            .and()
            .is_not_null(ClauseInput::column(&id_column()));
        assert_eq!(clause.parts()[0].output, "animals.name IS NULL");
        assert_eq!(clause.parts()[1].output, "animals.id IS NOT NULL");
    }

    #[test]
    fn test_like() {
        let clause = WhereClause::builder().like(ClauseInput::column(&name_column()), "cat%");
        assert_eq!(clause.parts()[0].output, "animals.name LIKE 'cat%'");
    }

    #[test]
    fn test_order_by_starts_complete_and_empty() {
        let clause = OrderByClause::builder();
        assert!(clause.parts().is_empty());
    }

    #[test]
    fn test_order_by_chain() {
        let clause = OrderByClause::builder()
            .asc()
            .column(&id_column())
            .desc()
            .column(&name_column());
        let parts = clause.parts();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].output, "animals.id");
        assert_eq!(parts[0].operator, Some(OrderDirection::Asc));
        assert_eq!(parts[1].output, "animals.name");
        assert_eq!(parts[1].operator, Some(OrderDirection::Desc));
    }

    #[test]
    fn test_operator_tokens() {
        assert_eq!(LogicalOperator::And.to_string(), "AND");
        assert_eq!(LogicalOperator::Or.to_string(), "OR");
        assert_eq!(OrderDirection::Asc.to_string(), "ASC");
        assert_eq!(OrderDirection::Desc.to_string(), "DESC");
    }
}
