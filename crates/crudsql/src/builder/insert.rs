use super::conditions::placeholders;
use crate::error::{BuilderError, BuilderResult};
use crate::value::Value;

/// Structured INSERT statement builder.
///
/// # Example
/// ```
/// use crudsql::{insert, params};
///
/// let mut query = insert();
/// query.values("users", params!["Charlie", 35, "male"]);
///
/// assert_eq!(query.query(), "INSERT INTO users VALUES (?, ?, ?)");
/// assert_eq!(query.parameters().len(), 3);
/// ```
#[derive(Debug, Default)]
pub struct InsertBuilder {
    /// Accumulated SQL text
    sql: String,
    /// Bind values, in placeholder order
    params: Vec<Value>,
}

impl InsertBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append `INSERT INTO <table> (<cols>) VALUES (?, ...)`.
    ///
    /// Column names and placeholders follow the iteration order of `pairs`;
    /// values are recorded in the same order.
    pub fn columns_and_values<I, K, V>(&mut self, table: &str, pairs: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        self.push_insert_into(table);
        let mut columns = Vec::new();
        for (column, value) in pairs {
            columns.push(column.as_ref().to_string());
            self.params.push(value.into());
        }
        self.sql.push_str(" (");
        self.sql.push_str(&columns.join(", "));
        self.sql.push_str(") VALUES (");
        self.sql.push_str(&placeholders(columns.len()));
        self.sql.push(')');
        self
    }

    /// Append `INSERT INTO <table> (<cols>) VALUES (?, ...), (?, ...), ...`.
    ///
    /// The column list is taken from the first row only; later rows are
    /// assumed, not verified, to share its layout. Values are recorded row by
    /// row, column order within each row.
    ///
    /// # Errors
    /// [`BuilderError::InvalidArgument`] when `rows` is empty; the builder is
    /// left untouched.
    pub fn columns_and_multi_values<I, R, K, V>(
        &mut self,
        table: &str,
        rows: I,
    ) -> BuilderResult<&mut Self>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let mut rows = rows.into_iter();
        let Some(first) = rows.next() else {
            return Err(BuilderError::invalid_argument(
                "Row data cannot be null or empty",
            ));
        };

        self.push_insert_into(table);
        let mut columns = Vec::new();
        let mut first_values = Vec::new();
        for (column, value) in first {
            columns.push(column.as_ref().to_string());
            first_values.push(value.into());
        }
        self.sql.push_str(" (");
        self.sql.push_str(&columns.join(", "));
        self.sql.push_str(") VALUES ");

        let mut groups = vec![format!("({})", placeholders(first_values.len()))];
        self.params.extend(first_values);
        for row in rows {
            let before = self.params.len();
            for (_, value) in row {
                self.params.push(value.into());
            }
            groups.push(format!("({})", placeholders(self.params.len() - before)));
        }
        self.sql.push_str(&groups.join(", "));
        Ok(self)
    }

    /// Append `INSERT INTO <table> VALUES (?, ...)`, one placeholder per
    /// value, recording values in iteration order.
    pub fn values<I>(&mut self, table: &str, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.push_insert_into(table);
        let before = self.params.len();
        for value in values {
            self.params.push(value.into());
        }
        self.sql.push_str(" VALUES (");
        self.sql.push_str(&placeholders(self.params.len() - before));
        self.sql.push(')');
        self
    }

    /// Append `INSERT INTO <table> VALUES (?, ...), (?, ...), ...`, one
    /// parenthesized group per inner list.
    ///
    /// # Errors
    /// [`BuilderError::InvalidArgument`] when `value_lists` is empty; the
    /// builder is left untouched.
    pub fn multi_values<I, R>(&mut self, table: &str, value_lists: I) -> BuilderResult<&mut Self>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator,
        R::Item: Into<Value>,
    {
        let mut lists = value_lists.into_iter();
        let Some(first) = lists.next() else {
            return Err(BuilderError::invalid_argument(
                "Values cannot be null or empty",
            ));
        };

        self.push_insert_into(table);
        self.sql.push_str(" VALUES ");
        let mut groups = Vec::new();
        for list in std::iter::once(first).chain(lists) {
            let before = self.params.len();
            for value in list {
                self.params.push(value.into());
            }
            groups.push(format!("({})", placeholders(self.params.len() - before)));
        }
        self.sql.push_str(&groups.join(", "));
        Ok(self)
    }

    // ==================== Terminal accessors ====================

    /// The accumulated SQL text, exactly as built.
    pub fn query(&self) -> &str {
        super::trace_read("INSERT", &self.sql, &self.params);
        &self.sql
    }

    /// Bind values in the same left-to-right order as the `?` markers.
    pub fn parameters(&self) -> &[Value] {
        &self.params
    }

    fn push_insert_into(&mut self, table: &str) {
        self.sql.push_str("INSERT INTO ");
        self.sql.push_str(table);
    }
}
