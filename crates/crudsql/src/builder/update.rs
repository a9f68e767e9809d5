use super::conditions::{ConditionSink, Joiner, has_text};
use crate::error::{BuilderError, BuilderResult};
use crate::value::Value;

/// Position within a CASE expression.
///
/// `when`/`then`/`then_column`/`end_case` are legal only while `Inside`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CaseState {
    Outside,
    Inside,
}

/// Structured UPDATE statement builder.
///
/// # Example
/// ```
/// use crudsql::update;
///
/// # fn main() -> crudsql::BuilderResult<()> {
/// let mut query = update();
/// query
///     .update_table("users")?
///     .set_values([("age", 15)])?
///     .where_eq("user_id", 1);
///
/// assert_eq!(query.query(), "UPDATE users SET age = ? WHERE user_id = ?");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct UpdateBuilder {
    /// Accumulated SQL text
    sql: String,
    /// Bind values, in placeholder order
    params: Vec<Value>,
    /// CASE sub-protocol state
    case_state: CaseState,
}

impl UpdateBuilder {
    pub(crate) fn new() -> Self {
        Self {
            sql: String::new(),
            params: Vec::new(),
            case_state: CaseState::Outside,
        }
    }

    /// Append `UPDATE <table>`.
    ///
    /// # Errors
    /// [`BuilderError::InvalidArgument`] when the table name is blank.
    pub fn update_table(&mut self, table: &str) -> BuilderResult<&mut Self> {
        if !has_text(table) {
            return Err(BuilderError::invalid_argument(
                "Table name cannot be null or empty",
            ));
        }
        self.sql.push_str("UPDATE ");
        self.sql.push_str(table);
        Ok(self)
    }

    /// Append ` JOIN <table> ON <on_column> = <equals_column>`.
    ///
    /// # Errors
    /// [`BuilderError::InvalidArgument`] when any operand is blank.
    pub fn join(
        &mut self,
        table: &str,
        on_column: &str,
        equals_column: &str,
    ) -> BuilderResult<&mut Self> {
        self.push_join("JOIN", table, on_column, equals_column)
    }

    /// Append ` LEFT JOIN <table> ON <on_column> = <equals_column>`.
    ///
    /// # Errors
    /// [`BuilderError::InvalidArgument`] when any operand is blank.
    pub fn left_join(
        &mut self,
        table: &str,
        on_column: &str,
        equals_column: &str,
    ) -> BuilderResult<&mut Self> {
        self.push_join("LEFT JOIN", table, on_column, equals_column)
    }

    /// Append ` RIGHT JOIN <table> ON <on_column> = <equals_column>`.
    ///
    /// # Errors
    /// [`BuilderError::InvalidArgument`] when any operand is blank.
    pub fn right_join(
        &mut self,
        table: &str,
        on_column: &str,
        equals_column: &str,
    ) -> BuilderResult<&mut Self> {
        self.push_join("RIGHT JOIN", table, on_column, equals_column)
    }

    /// Append ` SET <col1> = ?, <col2> = ?, ...` in iteration order,
    /// recording each value.
    ///
    /// # Errors
    /// [`BuilderError::InvalidArgument`] when `values` is empty; the builder
    /// is left untouched.
    pub fn set_values<I, K, V>(&mut self, values: I) -> BuilderResult<&mut Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let mut assignments = Vec::new();
        let mut recorded = Vec::new();
        for (column, value) in values {
            assignments.push(format!("{} = ?", column.as_ref()));
            recorded.push(value.into());
        }
        if assignments.is_empty() {
            return Err(BuilderError::invalid_argument(
                "SET values cannot be null or empty",
            ));
        }
        self.sql.push_str(" SET ");
        self.sql.push_str(&assignments.join(", "));
        self.params.extend(recorded);
        Ok(self)
    }

    // ==================== CASE expression ====================

    /// Append ` SET <column> = CASE` and open the CASE sub-protocol.
    ///
    /// # Errors
    /// [`BuilderError::InvalidArgument`] when the column is blank.
    pub fn set_case(&mut self, column: &str) -> BuilderResult<&mut Self> {
        if !has_text(column) {
            return Err(BuilderError::invalid_argument(
                "CASE column cannot be null or empty",
            ));
        }
        self.sql.push_str(" SET ");
        self.sql.push_str(column);
        self.sql.push_str(" = CASE");
        self.case_state = CaseState::Inside;
        Ok(self)
    }

    /// Append ` WHEN <column>`, to be completed by a suffix operator.
    ///
    /// # Errors
    /// [`BuilderError::IllegalState`] outside an open CASE expression.
    pub fn when(&mut self, column: &str) -> BuilderResult<&mut Self> {
        self.require_case("when")?;
        self.sql.push_str(" WHEN ");
        self.sql.push_str(column);
        Ok(self)
    }

    /// Append ` THEN ?` and record the value.
    ///
    /// # Errors
    /// [`BuilderError::IllegalState`] outside an open CASE expression.
    pub fn then(&mut self, value: impl Into<Value>) -> BuilderResult<&mut Self> {
        self.require_case("then")?;
        self.sql.push_str(" THEN ?");
        self.params.push(value.into());
        Ok(self)
    }

    /// Append ` THEN <column>`; no parameter recorded. A suffix operator can
    /// extend it into an arithmetic expression.
    ///
    /// # Errors
    /// [`BuilderError::IllegalState`] outside an open CASE expression.
    pub fn then_column(&mut self, column: &str) -> BuilderResult<&mut Self> {
        self.require_case("then_column")?;
        self.sql.push_str(" THEN ");
        self.sql.push_str(column);
        Ok(self)
    }

    /// Append ` ELSE ? END`, record the default, and close the CASE
    /// expression.
    ///
    /// # Errors
    /// [`BuilderError::IllegalState`] outside an open CASE expression.
    pub fn end_case(&mut self, default: impl Into<Value>) -> BuilderResult<&mut Self> {
        self.require_case("end_case")?;
        self.sql.push_str(" ELSE ? END");
        self.params.push(default.into());
        self.case_state = CaseState::Outside;
        Ok(self)
    }

    // ==================== Suffix operators ====================

    /// Append ` = ?` and record the value.
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

    /// Append ` * ?` and record the value.
    pub fn multiply(&mut self, value: impl Into<Value>) -> &mut Self {
        self.push_operator("*", value.into())
    }

    /// Append ` + ?` and record the value.
    pub fn add(&mut self, value: impl Into<Value>) -> &mut Self {
        self.push_operator("+", value.into())
    }

    /// Append ` - ?` and record the value.
    pub fn subtract(&mut self, value: impl Into<Value>) -> &mut Self {
        self.push_operator("-", value.into())
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

    // ==================== Terminal accessors ====================

    /// The accumulated SQL text, exactly as built.
    pub fn query(&self) -> &str {
        super::trace_read("UPDATE", &self.sql, &self.params);
        &self.sql
    }

    /// Bind values in the same left-to-right order as the `?` markers.
    pub fn parameters(&self) -> &[Value] {
        &self.params
    }

    fn push_join(
        &mut self,
        keyword: &'static str,
        table: &str,
        on_column: &str,
        equals_column: &str,
    ) -> BuilderResult<&mut Self> {
        if !has_text(table) || !has_text(on_column) || !has_text(equals_column) {
            return Err(BuilderError::invalid_argument(
                "Join operands cannot be null or empty",
            ));
        }
        self.sql.push(' ');
        self.sql.push_str(keyword);
        self.sql.push(' ');
        self.sql.push_str(table);
        self.sql.push_str(" ON ");
        self.sql.push_str(on_column);
        self.sql.push_str(" = ");
        self.sql.push_str(equals_column);
        Ok(self)
    }

    fn push_operator(&mut self, op: &'static str, value: Value) -> &mut Self {
        self.sql.push(' ');
        self.sql.push_str(op);
        self.sql.push_str(" ?");
        self.params.push(value);
        self
    }

    fn require_case(&self, method: &str) -> BuilderResult<()> {
        if self.case_state != CaseState::Inside {
            return Err(BuilderError::illegal_state(format!(
                "{method} is only legal inside a CASE expression; call set_case first"
            )));
        }
        Ok(())
    }
}

impl ConditionSink for UpdateBuilder {
    fn sql_mut(&mut self) -> &mut String {
        &mut self.sql
    }

    fn params_mut(&mut self) -> &mut Vec<Value> {
        &mut self.params
    }
}
