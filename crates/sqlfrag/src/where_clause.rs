//! WHERE clause fragment with `AND`/`OR` chaining.

use crate::fragment::{Fragment, Kind, Template, fragment_type};

/// A WHERE clause that is built by appending conditions.
///
/// The `WHERE ` keyword is emitted when the clause is merged into a parent, and only
/// if it is non-empty, so an unused filter disappears from the query.
///
/// # Example
/// ```ignore
/// use sqlfrag::{Where, sql, template};
///
/// let mut filter = Where::new();
/// if let Some(status) = status {
///     filter = filter.and(template!("status = {}", status));
/// }
/// let q = sql!("SELECT * FROM users {}", filter);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct Where {
    fragment: Fragment,
}

fragment_type!(Where);

impl Where {
    /// An empty clause, ready for chaining.
    pub fn new() -> Self {
        Self {
            fragment: Fragment::new(Kind::Where),
        }
    }

    /// A clause whose first condition is `template`.
    pub fn from_template(template: impl Into<Template>) -> Self {
        let mut w = Self::new();
        w.fragment.interpolate(template.into());
        w
    }

    /// Append a condition joined with ` AND `.
    ///
    /// No operator is emitted while the clause is still empty.
    pub fn and(self, template: impl Into<Template>) -> Self {
        self.chain(" AND ", template.into())
    }

    /// Append a condition joined with ` OR `.
    ///
    /// No operator is emitted while the clause is still empty.
    pub fn or(self, template: impl Into<Template>) -> Self {
        self.chain(" OR ", template.into())
    }

    fn chain(mut self, op: &str, template: Template) -> Self {
        if !self.fragment.is_empty() {
            self.fragment.push_text(op);
        }
        self.fragment.interpolate(template);
        self
    }
}

impl Default for Where {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Arg, Value};

    fn tpl(pieces: &[&'static str], args: Vec<Arg>) -> Template {
        Template::__from_macro(pieces, args)
    }

    #[test]
    fn new_is_empty() {
        let w = Where::new();
        assert!(w.is_empty());
        assert!(w.values().is_empty());
    }

    #[test]
    fn first_and_has_no_operator() {
        let w = Where::new().and(tpl(&["a = ", ""], vec![Arg::from(1)]));
        assert_eq!(w.fragment.render(), "a = $1");
    }

    #[test]
    fn first_or_has_no_operator() {
        let w = Where::new().or("deleted_at IS NULL");
        assert_eq!(w.fragment.render(), "deleted_at IS NULL");
    }

    #[test]
    fn chains_and_or_in_order() {
        let w = Where::from_template(tpl(&["a = ", ""], vec![Arg::from(1)]))
            .and(tpl(&["b = ", ""], vec![Arg::from(2)]))
            .or(tpl(&["c = ", ""], vec![Arg::from(3)]));
        assert_eq!(w.fragment.render(), "a = $1 AND b = $2 OR c = $3");
        assert_eq!(w.values(), &[Value::Int(1), Value::Int(2), Value::Int(3)]);
    }

    #[test]
    fn skipped_first_condition_keeps_clause_empty() {
        let w = Where::from_template(tpl(&["", ""], vec![Arg::Skip]))
            .and(tpl(&["b = ", ""], vec![Arg::from(2)]));
        assert_eq!(w.fragment.render(), "b = $1");
    }
}
