//! # sqlweave
//!
//! A fluent SQL statement composer: build SELECT/INSERT/UPDATE/DELETE
//! statements through chained calls and get back a parameterized SQL string
//! plus the matching ordered list of bound values. No execution, no
//! connections: the output is meant to be handed to whatever driver you use.
//!
//! ## Features
//!
//! - **Recursive WHERE trees**: AND/OR mixing, nested groups via closures,
//!   BETWEEN, NULL checks, IN/NOT IN
//! - **Dialect-aware rendering**: identifier quoting and binder style
//!   (`?` or numbered `$n`) selected once per builder
//! - **Positional correctness**: binder tokens and bound values are produced
//!   by the same traversal, so `params()` always lines up with `as_sql()`
//! - **Reusable builder**: each statement-entry call resets prior state while
//!   keeping the dialect
//!
//! ## Usage
//!
//! ```
//! use sqlweave::{Dialect, QueryBuilder, Value};
//!
//! let mut qb = QueryBuilder::new();
//! qb.set_dialect(Dialect::Postgres)?;
//!
//! qb.select("users")
//!     .fields(&["id", "name"])
//!     .where_("status", "=", "active")
//!     .or_where_group(|g| {
//!         g.where_("role", "=", "admin").is_not_null("approved_at");
//!     })
//!     .order_by(&["name"])
//!     .limit(20);
//!
//! assert_eq!(
//!     qb.as_sql()?,
//!     "SELECT \"id\",\"name\" FROM \"users\" WHERE \"status\"=$1 \
//!      OR (\"role\"=$2 AND \"approved_at\" IS NOT NULL) \
//!      ORDER BY \"name\" LIMIT 20"
//! );
//! assert_eq!(
//!     qb.params(),
//!     vec![Value::from("active"), Value::from("admin")]
//! );
//! # Ok::<(), sqlweave::BuildError>(())
//! ```
//!
//! The builder mutates in place and returns itself from every call; it is not
//! designed for concurrent use. Use one instance per thread or synchronize
//! externally.

pub mod builder;
pub mod condition;
pub mod dialect;
pub mod error;
pub mod value;

pub use builder::{QueryBuilder, StatementKind};
pub use condition::{Condition, Connector, Relation};
pub use dialect::Dialect;
pub use error::{BuildError, BuildResult};
pub use value::Value;

/// Create a builder with the default dialect.
pub fn builder() -> QueryBuilder {
    QueryBuilder::new()
}
