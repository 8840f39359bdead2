//! SQL identifier quoting and the [`Identifier`] fragment.
//!
//! Every `.`-separated segment is wrapped in double quotes and the segments are
//! rejoined with `.`:
//!
//! ```ignore
//! use sqlfrag::escape_identifier;
//!
//! assert_eq!(escape_identifier("public.users"), r#""public"."users""#);
//! ```
//!
//! Segments are not validated and embedded quotes are not doubled; callers pass
//! identifiers they control.

use crate::fragment::{Fragment, Kind, fragment_type};

/// Quote each `.`-separated segment of `name`.
pub fn escape_identifier(name: &str) -> String {
    // segments + two quotes each + dots
    let mut out = String::with_capacity(name.len() + 2 * (name.matches('.').count() + 1));
    for (i, seg) in name.split('.').enumerate() {
        if i > 0 {
            out.push('.');
        }
        out.push('"');
        out.push_str(seg);
        out.push('"');
    }
    out
}

/// A quoted identifier usable anywhere an expression fragment is accepted.
///
/// Inside a [`crate::Columns`] list it renders verbatim: no inherited prefix and no alias.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct Identifier {
    fragment: Fragment,
}

fragment_type!(Identifier);

/// Build an [`Identifier`] fragment from an unescaped (optionally dotted) name.
pub fn identifier(name: &str) -> Identifier {
    let mut fragment = Fragment::new(Kind::Identifier);
    fragment.push_text(escape_identifier(name));
    Identifier { fragment }
}

impl Identifier {
    /// The quoted identifier text.
    pub fn as_str(&self) -> &str {
        self.fragment.first_text().unwrap_or_default()
    }
}
