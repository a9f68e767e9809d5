use super::conditions::{ConditionSink, Joiner, has_text};
use crate::value::Value;

/// Sort direction for ORDER BY clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    pub fn as_str(self) -> &'static str {
        match self {
            Order::Asc => "ASC",
            Order::Desc => "DESC",
        }
    }
}

/// Structured SELECT statement builder.
///
/// # Example
/// ```
/// use crudsql::{Order, select};
///
/// let mut query = select();
/// query
///     .select_from("users")
///     .where_eq("status", "active")
///     .order_by("created_at", Order::Desc);
///
/// assert_eq!(
///     query.query(),
///     "SELECT * FROM users WHERE status = ? ORDER BY created_at DESC"
/// );
/// ```
#[derive(Debug, Default)]
pub struct SelectBuilder {
    /// Accumulated SQL text
    sql: String,
    /// Bind values, in placeholder order
    params: Vec<Value>,
}

impl SelectBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append `SELECT (col1, col2, ...)`.
    ///
    /// The parenthesized list form is literal and kept even for a single
    /// column; use [`select_from`](Self::select_from) for `SELECT *`.
    pub fn select<I>(&mut self, columns: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let cols: Vec<String> = columns
            .into_iter()
            .map(|c| c.as_ref().to_string())
            .collect();
        self.sql.push_str("SELECT (");
        self.sql.push_str(&cols.join(", "));
        self.sql.push(')');
        self
    }

    /// Append ` FROM <table>`.
    pub fn from(&mut self, table: &str) -> &mut Self {
        self.sql.push_str(" FROM ");
        self.sql.push_str(table);
        self
    }

    /// Append `SELECT * FROM <table>` in one step.
    pub fn select_from(&mut self, table: &str) -> &mut Self {
        self.sql.push_str("SELECT * FROM ");
        self.sql.push_str(table);
        self
    }

    /// Append ` WHERE <fragment>` verbatim, without parameters.
    ///
    /// Meant to carry a column name that a suffix operator
    /// ([`eq`](Self::eq), [`gt`](Self::gt), ...) completes. No-op on a blank
    /// fragment.
    pub fn where_raw(&mut self, fragment: &str) -> &mut Self {
        self.push_raw(Joiner::Where, fragment)
    }

    /// Append ` OR <fragment>` verbatim; see [`where_raw`](Self::where_raw).
    pub fn or_raw(&mut self, fragment: &str) -> &mut Self {
        self.push_raw(Joiner::Or, fragment)
    }

    /// Append ` AND <fragment>` verbatim; see [`where_raw`](Self::where_raw).
    pub fn and_raw(&mut self, fragment: &str) -> &mut Self {
        self.push_raw(Joiner::And, fragment)
    }

    /// Append ` JOIN <table>`.
    pub fn join(&mut self, table: &str) -> &mut Self {
        self.sql.push_str(" JOIN ");
        self.sql.push_str(table);
        self
    }

    /// Append ` LEFT JOIN <table>`.
    pub fn left_join(&mut self, table: &str) -> &mut Self {
        self.sql.push_str(" LEFT JOIN ");
        self.sql.push_str(table);
        self
    }

    /// Append ` ON <left> = <right>`.
    pub fn on(&mut self, left_column: &str, right_column: &str) -> &mut Self {
        self.sql.push_str(" ON ");
        self.sql.push_str(left_column);
        self.sql.push_str(" = ");
        self.sql.push_str(right_column);
        self
    }

    /// Append ` ORDER BY <column> <ASC|DESC>`.
    pub fn order_by(&mut self, column: &str, order: Order) -> &mut Self {
        self.sql.push_str(" ORDER BY ");
        self.sql.push_str(column);
        self.sql.push(' ');
        self.sql.push_str(order.as_str());
        self
    }

    // ==================== WHERE conditions ====================

    pub fn where_eq(&mut self, column: &str, value: impl Into<Value>) -> &mut Self {
        self.push_comparison("=", column, value.into(), Joiner::Where);
        self
    }

    pub fn where_gt(&mut self, column: &str, value: impl Into<Value>) -> &mut Self {
        self.push_comparison(">", column, value.into(), Joiner::Where);
        self
    }

    pub fn where_gte(&mut self, column: &str, value: impl Into<Value>) -> &mut Self {
        self.push_comparison(">=", column, value.into(), Joiner::Where);
        self
    }

    pub fn where_lt(&mut self, column: &str, value: impl Into<Value>) -> &mut Self {
        self.push_comparison("<", column, value.into(), Joiner::Where);
        self
    }

    pub fn where_lte(&mut self, column: &str, value: impl Into<Value>) -> &mut Self {
        self.push_comparison("<=", column, value.into(), Joiner::Where);
        self
    }

    pub fn where_like(&mut self, column: &str, pattern: impl Into<Value>) -> &mut Self {
        self.push_comparison("LIKE", column, pattern.into(), Joiner::Where);
        self
    }

    pub fn where_in<I>(&mut self, column: &str, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        self.push_in_list(column, values, false);
        self
    }

    pub fn where_not_in<I>(&mut self, column: &str, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        self.push_in_list(column, values, true);
        self
    }

    pub fn where_is_null(&mut self, column: &str) -> &mut Self {
        self.push_null_check(column, "IS NULL", Joiner::Where);
        self
    }

    pub fn where_is_not_null(&mut self, column: &str) -> &mut Self {
        self.push_null_check(column, "IS NOT NULL", Joiner::Where);
        self
    }

    pub fn where_between(
        &mut self,
        column: &str,
        start: impl Into<Value>,
        end: impl Into<Value>,
    ) -> &mut Self {
        self.push_between(column, start.into(), end.into());
        self
    }

    // ==================== OR conditions ====================

    pub fn or_eq(&mut self, column: &str, value: impl Into<Value>) -> &mut Self {
        self.push_comparison("=", column, value.into(), Joiner::Or);
        self
    }

    pub fn or_gt(&mut self, column: &str, value: impl Into<Value>) -> &mut Self {
        self.push_comparison(">", column, value.into(), Joiner::Or);
        self
    }

    pub fn or_gte(&mut self, column: &str, value: impl Into<Value>) -> &mut Self {
        self.push_comparison(">=", column, value.into(), Joiner::Or);
        self
    }

    pub fn or_lt(&mut self, column: &str, value: impl Into<Value>) -> &mut Self {
        self.push_comparison("<", column, value.into(), Joiner::Or);
        self
    }

    pub fn or_lte(&mut self, column: &str, value: impl Into<Value>) -> &mut Self {
        self.push_comparison("<=", column, value.into(), Joiner::Or);
        self
    }

    pub fn or_like(&mut self, column: &str, pattern: impl Into<Value>) -> &mut Self {
        self.push_comparison("LIKE", column, pattern.into(), Joiner::Or);
        self
    }

    pub fn or_is_null(&mut self, column: &str) -> &mut Self {
        self.push_null_check(column, "IS NULL", Joiner::Or);
        self
    }

    pub fn or_is_not_null(&mut self, column: &str) -> &mut Self {
        self.push_null_check(column, "IS NOT NULL", Joiner::Or);
        self
    }

    // ==================== AND conditions ====================

    pub fn and_eq(&mut self, column: &str, value: impl Into<Value>) -> &mut Self {
        self.push_comparison("=", column, value.into(), Joiner::And);
        self
    }

    pub fn and_gt(&mut self, column: &str, value: impl Into<Value>) -> &mut Self {
        self.push_comparison(">", column, value.into(), Joiner::And);
        self
    }

    pub fn and_gte(&mut self, column: &str, value: impl Into<Value>) -> &mut Self {
        self.push_comparison(">=", column, value.into(), Joiner::And);
        self
    }

    pub fn and_lt(&mut self, column: &str, value: impl Into<Value>) -> &mut Self {
        self.push_comparison("<", column, value.into(), Joiner::And);
        self
    }

    pub fn and_lte(&mut self, column: &str, value: impl Into<Value>) -> &mut Self {
        self.push_comparison("<=", column, value.into(), Joiner::And);
        self
    }

    pub fn and_like(&mut self, column: &str, pattern: impl Into<Value>) -> &mut Self {
        self.push_comparison("LIKE", column, pattern.into(), Joiner::And);
        self
    }

    pub fn and_is_null(&mut self, column: &str) -> &mut Self {
        self.push_null_check(column, "IS NULL", Joiner::And);
        self
    }

    pub fn and_is_not_null(&mut self, column: &str) -> &mut Self {
        self.push_null_check(column, "IS NOT NULL", Joiner::And);
        self
    }

    // ==================== Suffix operators ====================

    /// Append ` = ?` and record the value, completing a raw fragment.
    pub fn eq(&mut self, value: impl Into<Value>) -> &mut Self {
        self.push_operator("=", value.into())
    }

    /// Append ` > ?` and record the value.
    pub fn gt(&mut self, value: impl Into<Value>) -> &mut Self {
        self.push_operator(">", value.into())
    }

    /// Append ` >= ?` and record the value.
    pub fn gte(&mut self, value: impl Into<Value>) -> &mut Self {
        self.push_operator(">=", value.into())
    }

    /// Append ` < ?` and record the value.
    pub fn lt(&mut self, value: impl Into<Value>) -> &mut Self {
        self.push_operator("<", value.into())
    }

    /// Append ` <= ?` and record the value.
    pub fn lte(&mut self, value: impl Into<Value>) -> &mut Self {
        self.push_operator("<=", value.into())
    }

    // ==================== Terminal accessors ====================

    /// The accumulated SQL text, exactly as built.
    pub fn query(&self) -> &str {
        super::trace_read("SELECT", &self.sql, &self.params);
        &self.sql
    }

    /// Bind values in the same left-to-right order as the `?` markers.
    pub fn parameters(&self) -> &[Value] {
        &self.params
    }

    fn push_raw(&mut self, joiner: Joiner, fragment: &str) -> &mut Self {
        if has_text(fragment) {
            self.push_joiner(joiner);
            self.sql.push_str(fragment);
        }
        self
    }

    fn push_operator(&mut self, op: &'static str, value: Value) -> &mut Self {
        self.sql.push(' ');
        self.sql.push_str(op);
        self.sql.push_str(" ?");
        self.params.push(value);
        self
    }
}

impl ConditionSink for SelectBuilder {
    fn sql_mut(&mut self) -> &mut String {
        &mut self.sql
    }

    fn params_mut(&mut self) -> &mut Vec<Value> {
        &mut self.params
    }
}
