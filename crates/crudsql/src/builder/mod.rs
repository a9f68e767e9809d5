//! Fluent SQL statement builders.
//!
//! Four builders cover the CRUD statements: [`SelectBuilder`],
//! [`InsertBuilder`], [`UpdateBuilder`] and [`DeleteBuilder`]. Each grows a
//! SQL string left to right through chained method calls and records bind
//! values as `?` placeholders are emitted, so `query()` and `parameters()`
//! always agree on count and order. Builders render statement text only; they
//! never touch a database.
//!
//! # Example
//! ```
//! use crudsql::select;
//!
//! let mut query = select();
//! query
//!     .select_from("users")
//!     .where_eq("status", "active")
//!     .and_gt("age", 18);
//!
//! assert_eq!(
//!     query.query(),
//!     "SELECT * FROM users WHERE status = ? AND age > ?"
//! );
//! assert_eq!(query.parameters().len(), 2);
//! ```

mod conditions;
pub mod delete;
pub mod insert;
pub mod select;
pub mod update;

pub use delete::DeleteBuilder;
pub use insert::InsertBuilder;
pub use select::{Order, SelectBuilder};
pub use update::UpdateBuilder;

use crate::value::Value;

/// Start an empty SELECT builder.
pub fn select() -> SelectBuilder {
    SelectBuilder::new()
}

/// Start an empty INSERT builder.
pub fn insert() -> InsertBuilder {
    InsertBuilder::new()
}

/// Start an empty UPDATE builder.
pub fn update() -> UpdateBuilder {
    UpdateBuilder::new()
}

/// Start an empty DELETE builder.
pub fn delete() -> DeleteBuilder {
    DeleteBuilder::new()
}

#[cfg(feature = "tracing")]
pub(crate) fn trace_read(kind: &str, sql: &str, params: &[Value]) {
    tracing::debug!(kind, sql, params = params.len(), "rendered statement");
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn trace_read(_kind: &str, _sql: &str, _params: &[Value]) {}

#[cfg(test)]
mod tests;
