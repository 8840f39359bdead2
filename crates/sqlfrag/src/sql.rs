//! Top-level query fragment and renderer.
//!
//! `Sql` is the only fragment that numbers placeholders. Everything merged into it
//! keeps its values in order, and [`Sql::text`] assigns `$1, $2, ...` left to right.
//!
//! # Example
//!
//! ```ignore
//! use sqlfrag::{columns, identifier, sql, sql_where, template};
//!
//! let q = sql!(
//!     "SELECT {} FROM {} {}",
//!     columns(["id", "username"]),
//!     identifier("users"),
//!     sql_where!("status = {}", "active").and(template!("age > {}", 18)),
//! );
//! assert_eq!(
//!     q.text(),
//!     r#"SELECT "id", "username" FROM "users" WHERE status = $1 AND age > $2"#
//! );
//! ```

use crate::fragment::{Fragment, Kind, Template, fragment_type};
use crate::value::Value;
use serde::Serialize;
use std::fmt;

/// Something that can be appended to a [`Sql`]: any fragment, or `None` to skip.
pub trait Appendable {
    fn into_fragment(self) -> Option<Fragment>;
}

impl Appendable for Fragment {
    fn into_fragment(self) -> Option<Fragment> {
        Some(self)
    }
}

impl Appendable for Option<Fragment> {
    fn into_fragment(self) -> Option<Fragment> {
        self
    }
}

/// A top-level SQL statement (or expression) built from fragments.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct Sql {
    fragment: Fragment,
}

fragment_type!(Sql);

/// The rendered `{ text, values }` pair handed to an executor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Query {
    pub text: String,
    pub values: Vec<Value>,
}

impl Sql {
    /// Build a statement from a template.
    pub fn new(template: impl Into<Template>) -> Self {
        let mut fragment = Fragment::new(Kind::Main);
        fragment.interpolate(template.into());
        Self { fragment }
    }

    /// Create an empty statement.
    pub fn empty() -> Self {
        Self {
            fragment: Fragment::new(Kind::Main),
        }
    }

    /// Merge one fragment at the end; `None` is skipped.
    ///
    /// ```ignore
    /// let mut q = sql!("UPDATE users ");
    /// q.append(changes).append(has_filter.then_some(filter));
    /// ```
    pub fn append(&mut self, item: impl Appendable) -> &mut Self {
        if let Some(fragment) = item.into_fragment() {
            self.fragment.merge_from(&fragment);
        }
        self
    }

    /// Merge every item in order, skipping `None`s.
    pub fn append_all<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Appendable,
    {
        for item in items {
            self.append(item);
        }
        self
    }

    /// Render SQL with `$1, $2, ...` placeholders.
    ///
    /// Recomputed on every call.
    pub fn text(&self) -> String {
        let text = self.fragment.render();

        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "sqlfrag.render",
            params = self.fragment.values().len(),
            len = text.len(),
            "render sql"
        );

        text
    }

    /// Alias of [`Sql::text`].
    pub fn to_sql(&self) -> String {
        self.text()
    }

    /// Render into an owned `{ text, values }` pair.
    pub fn to_query(&self) -> Query {
        Query {
            text: self.text(),
            values: self.fragment.values().to_vec(),
        }
    }

    /// Render and take the values without copying them.
    pub fn into_parts(self) -> (String, Vec<Value>) {
        let text = self.text();
        (text, self.fragment.into_values())
    }
}

impl Default for Sql {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Sql {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

impl From<Sql> for Query {
    fn from(value: Sql) -> Self {
        let (text, values) = value.into_parts();
        Query { text, values }
    }
}
