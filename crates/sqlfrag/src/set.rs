//! SET clause fragment for UPDATE statements.

use crate::fragment::{Arg, Fragment, Kind, fragment_type};
use crate::ident::escape_identifier;

/// `"col" = $n, ...` assignments, emitted with a leading `SET ` when merged.
///
/// # Example
/// ```ignore
/// use sqlfrag::{Arg, Set, optional, set, sql};
///
/// let q = sql!(
///     "UPDATE users {} WHERE id = {}",
///     set([
///         ("status", Arg::from("active")),
///         ("nickname", optional(patch.nickname)),
///         ("updated_at", sql!("NOW()").into()),
///     ]),
///     id,
/// );
///
/// let same = Set::new().entry("status", "active").entry("nickname", optional(patch.nickname));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct Set {
    fragment: Fragment,
}

fragment_type!(Set);

/// Build a SET clause from `(column, value)` pairs, in order.
///
/// Skipped values ([`crate::skip`], [`crate::optional`] with `None`) leave the column
/// out. A value that is a fragment is merged as the right-hand side.
pub fn set<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Set
where
    K: AsRef<str>,
    V: Into<Arg>,
{
    entries
        .into_iter()
        .fold(Set::new(), |s, (name, value)| s.entry(name.as_ref(), value))
}

impl Set {
    pub fn new() -> Self {
        Self {
            fragment: Fragment::new(Kind::Set),
        }
    }

    /// Append `"name" = value` unless the value is skipped.
    pub fn entry(mut self, name: &str, value: impl Into<Arg>) -> Self {
        let value = value.into();
        if matches!(value, Arg::Skip) {
            return self;
        }

        if !self.fragment.is_empty() {
            self.fragment.push_text(", ");
        }
        self.fragment.push_text(escape_identifier(name));
        self.fragment.push_text(" = ");

        match value {
            Arg::Value(v) => self.fragment.push_bind(v),
            Arg::Fragment(f) => self.fragment.merge_from(&f),
            Arg::Skip => {}
        }
        self
    }
}

impl Default for Set {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Value, skip};

    #[test]
    fn builds_assignments_in_order() {
        let s = set([("a", Arg::from(1)), ("b", skip()), ("c", Arg::from(2))]);
        assert_eq!(s.fragment.render(), r#""a" = $1, "c" = $2"#);
        assert_eq!(s.values(), &[Value::Int(1), Value::Int(2)]);
    }

    #[test]
    fn all_skipped_is_empty() {
        let s = set([("a", skip()), ("b", skip())]);
        assert!(s.is_empty());
        assert!(s.values().is_empty());
    }

    #[test]
    fn null_is_bound_not_skipped() {
        let s = Set::new().entry("a", None::<i32>).entry("b", false);
        assert_eq!(s.fragment.render(), r#""a" = $1, "b" = $2"#);
        assert_eq!(s.values(), &[Value::Null, Value::Bool(false)]);
    }

    #[test]
    fn dotted_names_are_quoted_per_segment() {
        let s = Set::new().entry("u.name", "x");
        assert_eq!(s.fragment.render(), r#""u"."name" = $1"#);
    }

    #[test]
    fn homogeneous_pairs() {
        let s = set(vec![("x", 1_i64), ("y", 2_i64)]);
        assert_eq!(s.fragment.render(), r#""x" = $1, "y" = $2"#);
    }
}
