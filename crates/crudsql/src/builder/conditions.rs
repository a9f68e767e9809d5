//! Shared condition accumulation for the WHERE-capable builders.
//!
//! SELECT, UPDATE and DELETE all grow their WHERE chain the same way: a
//! joining keyword, the column, the operator, and a `?` placeholder per bound
//! value. [`ConditionSink`] captures that once; each builder only supplies
//! its text buffer and parameter list.

use crate::value::Value;

/// Joining keyword prefixed to a condition fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Joiner {
    Where,
    And,
    Or,
}

impl Joiner {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Joiner::Where => "WHERE",
            Joiner::And => "AND",
            Joiner::Or => "OR",
        }
    }
}

/// True when a column name or raw fragment contains at least one
/// non-whitespace character.
pub(crate) fn has_text(s: &str) -> bool {
    !s.trim().is_empty()
}

/// Comma-joined `?` markers, one per value.
pub(crate) fn placeholders(count: usize) -> String {
    vec!["?"; count].join(", ")
}

/// Text buffer + parameter list sink shared by the statement builders.
///
/// Every provided method either appends `" <joiner> "` followed by the
/// predicate, or leaves the sink completely untouched when the inputs are
/// blank/absent. Appended text is never rewritten.
pub(crate) trait ConditionSink {
    fn sql_mut(&mut self) -> &mut String;
    fn params_mut(&mut self) -> &mut Vec<Value>;

    fn push_joiner(&mut self, joiner: Joiner) {
        let sql = self.sql_mut();
        sql.push(' ');
        sql.push_str(joiner.as_str());
        sql.push(' ');
    }

    /// Append `<joiner> <column> <op> ?` and record the value.
    ///
    /// No-op when the column is blank or the value is absent (see
    /// [`Value::is_present`]).
    fn push_comparison(&mut self, op: &'static str, column: &str, value: Value, joiner: Joiner) {
        if !has_text(column) || !value.is_present() {
            return;
        }
        self.push_joiner(joiner);
        let sql = self.sql_mut();
        sql.push_str(column);
        sql.push(' ');
        sql.push_str(op);
        sql.push_str(" ?");
        self.params_mut().push(value);
    }

    /// Append `<joiner> <column> IS [NOT] NULL`; no parameter recorded.
    fn push_null_check(&mut self, column: &str, check: &'static str, joiner: Joiner) {
        if !has_text(column) {
            return;
        }
        self.push_joiner(joiner);
        let sql = self.sql_mut();
        sql.push_str(column);
        sql.push(' ');
        sql.push_str(check);
    }

    /// Append `WHERE <column> BETWEEN ? AND ?`, recording start then end.
    ///
    /// BETWEEN conditions always join with WHERE.
    fn push_between(&mut self, column: &str, start: Value, end: Value) {
        if !has_text(column) || !start.is_present() || !end.is_present() {
            return;
        }
        self.push_joiner(Joiner::Where);
        let sql = self.sql_mut();
        sql.push_str(column);
        sql.push_str(" BETWEEN ? AND ?");
        let params = self.params_mut();
        params.push(start);
        params.push(end);
    }

    /// Append `WHERE <column> [NOT] IN (?, ...)`, one placeholder per value,
    /// recording values in iteration order.
    ///
    /// IN conditions always join with WHERE.
    fn push_in_list(&mut self, column: &str, values: Vec<Value>, negated: bool) {
        if !has_text(column) || values.is_empty() {
            return;
        }
        self.push_joiner(Joiner::Where);
        let markers = placeholders(values.len());
        let sql = self.sql_mut();
        sql.push_str(column);
        sql.push_str(if negated { " NOT IN (" } else { " IN (" });
        sql.push_str(&markers);
        sql.push(')');
        self.params_mut().extend(values);
    }
}
