use super::conditions::{ConditionSink, Joiner, has_text};
use crate::error::{BuilderError, BuilderResult};
use crate::value::Value;

/// Whether the target table has been specified.
///
/// Every condition method is illegal until `delete_from` moves this to
/// `Set`; the check runs before the blank/absent no-op checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Unset,
    Set,
}

/// Structured DELETE statement builder.
///
/// # Example
/// ```
/// use crudsql::delete;
///
/// # fn main() -> crudsql::BuilderResult<()> {
/// let mut query = delete();
/// query.delete_from("users")?.where_eq("id", 1)?;
///
/// assert_eq!(query.query(), "DELETE FROM users WHERE id = ?");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct DeleteBuilder {
    /// Accumulated SQL text
    sql: String,
    /// Bind values, in placeholder order
    params: Vec<Value>,
    /// Target-table protocol state
    target: Target,
}

impl DeleteBuilder {
    pub(crate) fn new() -> Self {
        Self {
            sql: String::new(),
            params: Vec::new(),
            target: Target::Unset,
        }
    }

    /// Append `DELETE FROM <table>` and unlock the condition methods.
    ///
    /// # Errors
    /// [`BuilderError::InvalidArgument`] when the table name is blank.
    pub fn delete_from(&mut self, table: &str) -> BuilderResult<&mut Self> {
        if !has_text(table) {
            return Err(BuilderError::invalid_argument(
                "Table name cannot be null or empty",
            ));
        }
        self.sql.push_str("DELETE FROM ");
        self.sql.push_str(table);
        self.target = Target::Set;
        Ok(self)
    }

    // ==================== WHERE conditions ====================
    //
    // Each method fails with an illegal-state error until delete_from has
    // been called, then follows the shared no-op rules for blank columns
    // and absent values.

    pub fn where_eq(&mut self, column: &str, value: impl Into<Value>) -> BuilderResult<&mut Self> {
        self.push_checked_comparison("=", column, value.into(), Joiner::Where)
    }

    pub fn where_gt(&mut self, column: &str, value: impl Into<Value>) -> BuilderResult<&mut Self> {
        self.push_checked_comparison(">", column, value.into(), Joiner::Where)
    }

    pub fn where_gte(&mut self, column: &str, value: impl Into<Value>) -> BuilderResult<&mut Self> {
        self.push_checked_comparison(">=", column, value.into(), Joiner::Where)
    }

    pub fn where_lt(&mut self, column: &str, value: impl Into<Value>) -> BuilderResult<&mut Self> {
        self.push_checked_comparison("<", column, value.into(), Joiner::Where)
    }

    pub fn where_lte(&mut self, column: &str, value: impl Into<Value>) -> BuilderResult<&mut Self> {
        self.push_checked_comparison("<=", column, value.into(), Joiner::Where)
    }

    pub fn where_like(
        &mut self,
        column: &str,
        pattern: impl Into<Value>,
    ) -> BuilderResult<&mut Self> {
        self.push_checked_comparison("LIKE", column, pattern.into(), Joiner::Where)
    }

    pub fn where_in<I>(&mut self, column: &str, values: I) -> BuilderResult<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.require_table()?;
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        self.push_in_list(column, values, false);
        Ok(self)
    }

    pub fn where_is_null(&mut self, column: &str) -> BuilderResult<&mut Self> {
        self.push_checked_null(column, "IS NULL", Joiner::Where)
    }

    pub fn where_is_not_null(&mut self, column: &str) -> BuilderResult<&mut Self> {
        self.push_checked_null(column, "IS NOT NULL", Joiner::Where)
    }

    pub fn where_between(
        &mut self,
        column: &str,
        start: impl Into<Value>,
        end: impl Into<Value>,
    ) -> BuilderResult<&mut Self> {
        self.require_table()?;
        self.push_between(column, start.into(), end.into());
        Ok(self)
    }

    // ==================== OR conditions ====================

    pub fn or_eq(&mut self, column: &str, value: impl Into<Value>) -> BuilderResult<&mut Self> {
        self.push_checked_comparison("=", column, value.into(), Joiner::Or)
    }

    pub fn or_gt(&mut self, column: &str, value: impl Into<Value>) -> BuilderResult<&mut Self> {
        self.push_checked_comparison(">", column, value.into(), Joiner::Or)
    }

    pub fn or_gte(&mut self, column: &str, value: impl Into<Value>) -> BuilderResult<&mut Self> {
        self.push_checked_comparison(">=", column, value.into(), Joiner::Or)
    }

    pub fn or_lt(&mut self, column: &str, value: impl Into<Value>) -> BuilderResult<&mut Self> {
        self.push_checked_comparison("<", column, value.into(), Joiner::Or)
    }

    pub fn or_lte(&mut self, column: &str, value: impl Into<Value>) -> BuilderResult<&mut Self> {
        self.push_checked_comparison("<=", column, value.into(), Joiner::Or)
    }

    pub fn or_is_null(&mut self, column: &str) -> BuilderResult<&mut Self> {
        self.push_checked_null(column, "IS NULL", Joiner::Or)
    }

    pub fn or_is_not_null(&mut self, column: &str) -> BuilderResult<&mut Self> {
        self.push_checked_null(column, "IS NOT NULL", Joiner::Or)
    }

    // ==================== AND conditions ====================

    pub fn and_eq(&mut self, column: &str, value: impl Into<Value>) -> BuilderResult<&mut Self> {
        self.push_checked_comparison("=", column, value.into(), Joiner::And)
    }

    pub fn and_gt(&mut self, column: &str, value: impl Into<Value>) -> BuilderResult<&mut Self> {
        self.push_checked_comparison(">", column, value.into(), Joiner::And)
    }

    pub fn and_gte(&mut self, column: &str, value: impl Into<Value>) -> BuilderResult<&mut Self> {
        self.push_checked_comparison(">=", column, value.into(), Joiner::And)
    }

    pub fn and_lt(&mut self, column: &str, value: impl Into<Value>) -> BuilderResult<&mut Self> {
        self.push_checked_comparison("<", column, value.into(), Joiner::And)
    }

    pub fn and_lte(&mut self, column: &str, value: impl Into<Value>) -> BuilderResult<&mut Self> {
        self.push_checked_comparison("<=", column, value.into(), Joiner::And)
    }

    // ==================== Terminal accessors ====================

    /// The accumulated SQL text, exactly as built.
    pub fn query(&self) -> &str {
        super::trace_read("DELETE", &self.sql, &self.params);
        &self.sql
    }

    /// Bind values in the same left-to-right order as the `?` markers.
    pub fn parameters(&self) -> &[Value] {
        &self.params
    }

    fn require_table(&self) -> BuilderResult<()> {
        if self.target == Target::Unset {
            return Err(BuilderError::illegal_state(
                "specify the table first using delete_from",
            ));
        }
        Ok(())
    }

    fn push_checked_comparison(
        &mut self,
        op: &'static str,
        column: &str,
        value: Value,
        joiner: Joiner,
    ) -> BuilderResult<&mut Self> {
        self.require_table()?;
        self.push_comparison(op, column, value, joiner);
        Ok(self)
    }

    fn push_checked_null(
        &mut self,
        column: &str,
        check: &'static str,
        joiner: Joiner,
    ) -> BuilderResult<&mut Self> {
        self.require_table()?;
        self.push_null_check(column, check, joiner);
        Ok(self)
    }
}

impl ConditionSink for DeleteBuilder {
    fn sql_mut(&mut self) -> &mut String {
        &mut self.sql
    }

    fn params_mut(&mut self) -> &mut Vec<Value> {
        &mut self.params
    }
}
