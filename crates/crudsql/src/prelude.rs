//! Convenient imports for typical `crudsql` usage.
//!
//! This module is intentionally small and focused on the most common APIs so
//! examples can start with:
//!
//! ```ignore
//! use crudsql::prelude::*;
//! ```

pub use crate::{
    BuilderError, BuilderResult, DeleteBuilder, InsertBuilder, Order, SelectBuilder, UpdateBuilder,
    Value, delete, insert, select, update,
};
