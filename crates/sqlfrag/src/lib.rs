//! # sqlfrag
//!
//! Composable, parameter-safe SQL fragments for Postgres.
//!
//! ## Features
//!
//! - **Values never touch the SQL text**: every interpolated value becomes a `$n`
//!   placeholder, numbered once when the top-level [`Sql`] renders
//! - **Composable clauses**: WHERE, SET, VALUES, column lists, UNNEST and identifiers
//!   merge into any statement and disappear when empty
//! - **No driver**: the output is a `{ text, values }` pair; the `postgres` feature
//!   adds `ToSql` so it can be passed straight to `tokio-postgres`
//!
//! ## Example
//!
//! ```ignore
//! use sqlfrag::{Column, columns, identifier, set, sql, sql_where, template, unnest, values};
//!
//! // SELECT
//! let q = sql!(
//!     "SELECT {} FROM {} {}",
//!     columns([Column::from("id"), ("created_at", "createdAt").into()]).prefix("u"),
//!     identifier("users"),
//!     sql_where!("status = {}", "active").and(template!("age > {}", 18)),
//! );
//!
//! // UPDATE
//! let q = sql!("UPDATE users {} WHERE id = {}", set([("name", "alice")]), 7);
//!
//! // Bulk INSERT
//! let q = sql!("INSERT INTO t (a, b) {}", values([[1, 2], [3, 4]]));
//! let q = sql!(
//!     "INSERT INTO t (a, b) SELECT * FROM {}",
//!     unnest(["INT4[]", "INT4[]"], [[1, 2], [3, 4]]),
//! );
//!
//! let (text, params) = q.into_parts();
//! ```

// Lets `::sqlfrag::...` paths emitted by `template!` resolve inside this crate.
extern crate self as sqlfrag;

pub mod columns;
pub mod error;
pub mod fragment;
pub mod ident;
pub mod rows;
pub mod set;
pub mod sql;
pub mod value;
pub mod where_clause;

mod macros;

#[cfg(feature = "postgres")]
pub mod pg;

pub use columns::{Column, Columns, columns};
pub use error::{FragError, FragResult};
pub use fragment::{Arg, Fragment, Kind, Template, optional, skip};
pub use ident::{Identifier, escape_identifier, identifier};
pub use rows::{Unnest, Values, try_unnest, try_values, unnest, values};
pub use set::{Set, set};
pub use sql::{Appendable, Query, Sql};
pub use value::Value;
pub use where_clause::Where;

#[cfg(feature = "macros")]
pub use sqlfrag_macros::template;
