//! # crudsql
//!
//! A fluent, parameter-safe SQL statement builder.
//!
//! ## Features
//!
//! - **Four builders**: SELECT, INSERT, UPDATE and DELETE, one fluent chain each
//! - **Placeholders, not interpolation**: values become `?` markers; the bound
//!   values come back from `parameters()` in placeholder order
//! - **Permissive conditions**: a blank column or absent value turns the call
//!   into a silent no-op instead of emitting broken SQL
//! - **Explicit faults**: misuse (blank table names, empty row sets, CASE
//!   methods outside a CASE) fails with a [`BuilderError`] at the call site
//! - **No execution**: builders render statement text only; binding and
//!   running it is the caller's concern
//!
//! ## Quick start
//!
//! ```
//! use crudsql::{delete, select};
//!
//! # fn main() -> crudsql::BuilderResult<()> {
//! let mut query = select();
//! query
//!     .select_from("users")
//!     .where_eq("status", "active")
//!     .and_gt("age", 18);
//! assert_eq!(
//!     query.query(),
//!     "SELECT * FROM users WHERE status = ? AND age > ?"
//! );
//!
//! let mut removal = delete();
//! removal.delete_from("users")?.where_eq("id", 1)?;
//! assert_eq!(removal.query(), "DELETE FROM users WHERE id = ?");
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod error;
pub mod prelude;
pub mod value;

pub use builder::{
    DeleteBuilder, InsertBuilder, Order, SelectBuilder, UpdateBuilder, delete, insert, select,
    update,
};
pub use error::{BuilderError, BuilderResult};
pub use value::Value;
