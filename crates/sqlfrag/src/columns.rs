//! Column list fragment with table-prefix propagation.
//!
//! ```ignore
//! use sqlfrag::{Column, columns, identifier, sql};
//!
//! let cols = columns([
//!     Column::from("id"),
//!     Column::from(("created_at", "createdAt")),
//!     columns(["name"]).prefix("p").into(),
//!     sql!("COUNT(*) OVER () AS {}", identifier("total")).into(),
//! ])
//! .prefix("u");
//! // "u"."id", "u"."created_at" AS "createdAt", "p"."name", COUNT(*) OVER () AS "total"
//! ```
//!
//! Prefixes apply when a list is nested or rendered. A nested list without its own
//! prefix stays unqualified, even if the outer list gets a prefix afterwards.

use crate::fragment::{Fragment, Kind, fragment_type};
use crate::ident::{Identifier, escape_identifier};
use crate::sql::Sql;

/// One entry of a column list.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    /// `"name"`, prefixed when a prefix applies.
    Name(String),
    /// `"name" AS "alias"`, prefixed when a prefix applies.
    Aliased(String, String),
    /// A nested column list, identifier, or expression, merged as-is.
    Fragment(Fragment),
}

impl From<&str> for Column {
    fn from(value: &str) -> Self {
        Column::Name(value.to_string())
    }
}

impl From<String> for Column {
    fn from(value: String) -> Self {
        Column::Name(value)
    }
}

impl From<(&str, &str)> for Column {
    fn from((name, alias): (&str, &str)) -> Self {
        Column::Aliased(name.to_string(), alias.to_string())
    }
}

impl From<(String, String)> for Column {
    fn from((name, alias): (String, String)) -> Self {
        Column::Aliased(name, alias)
    }
}

impl From<Fragment> for Column {
    fn from(value: Fragment) -> Self {
        Column::Fragment(value)
    }
}

impl From<Columns> for Column {
    fn from(value: Columns) -> Self {
        Column::Fragment(value.fragment)
    }
}

impl From<Identifier> for Column {
    fn from(value: Identifier) -> Self {
        Column::Fragment(value.into())
    }
}

impl From<Sql> for Column {
    fn from(value: Sql) -> Self {
        Column::Fragment(value.into())
    }
}

/// A comma-separated column list.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct Columns {
    fragment: Fragment,
}

fragment_type!(Columns);

/// Build a column list from names, `(name, alias)` pairs and nested fragments.
pub fn columns<C: Into<Column>>(list: impl IntoIterator<Item = C>) -> Columns {
    let mut fragment = Fragment::new(Kind::Columns);
    for (i, column) in list.into_iter().enumerate() {
        if i > 0 {
            fragment.push_text(", ");
        }
        match column.into() {
            Column::Name(name) => {
                fragment.push_prefix_marker();
                fragment.push_text(escape_identifier(&name));
            }
            Column::Aliased(name, alias) => {
                fragment.push_prefix_marker();
                fragment.push_text(escape_identifier(&name));
                fragment.push_text(" AS ");
                fragment.push_text(escape_identifier(&alias));
            }
            Column::Fragment(nested) => fragment.merge_from(&nested),
        }
    }
    Columns { fragment }
}

impl Columns {
    /// Qualify this list's own columns with `name` (escaped).
    ///
    /// Replaces any earlier prefix. Lists nested before this call keep whatever
    /// prefix they had when they were merged in.
    pub fn prefix(mut self, name: &str) -> Self {
        self.fragment.set_prefix(escape_identifier(name));
        self
    }

    /// The escaped prefix, if one was set.
    pub fn prefix_str(&self) -> Option<&str> {
        self.fragment.prefix()
    }
}
