//! Fragment core: token buffer, interpolation and merging.
//!
//! A [`Fragment`] stores literal SQL text and bound values separately. Placeholders
//! stay unnumbered while fragments are merged into each other; `$1, $2, ...` are only
//! assigned when the top-level [`crate::Sql`] renders its text.

mod template;

#[cfg(test)]
mod tests;

pub use template::{Arg, Template, optional, skip};

use crate::value::Value;
use std::fmt::Write;

/// The kind of a fragment, which decides how it merges into a parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Main,
    Where,
    Set,
    Values,
    Columns,
    Identifier,
    Unnest,
}

impl Kind {
    /// Literal emitted in front of a non-empty fragment of this kind when it is merged.
    pub fn merge_prefix(self) -> Option<&'static str> {
        match self {
            Kind::Where => Some("WHERE "),
            Kind::Set => Some("SET "),
            Kind::Values => Some("VALUES "),
            Kind::Unnest => Some("UNNEST("),
            Kind::Main | Kind::Columns | Kind::Identifier => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    Text(String),
    /// Unnumbered bind placeholder.
    Param,
    /// Where a column list applies its table prefix.
    Prefix,
}

/// A composable unit of SQL text and bound values.
///
/// Fragments are plain owned data. Merging reads the source through `&Fragment` and
/// copies it, so one fragment can be merged into any number of parents.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    kind: Kind,
    tokens: Vec<Token>,
    values: Vec<Value>,
    /// Escaped table prefix; only set on column lists.
    prefix: Option<String>,
}

impl Fragment {
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            tokens: Vec::new(),
            values: Vec::new(),
            prefix: None,
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Bound values in placeholder order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub(crate) fn into_values(self) -> Vec<Value> {
        self.values
    }

    /// `true` if the fragment holds no placeholder and no literal text other than
    /// whitespace.
    ///
    /// Empty fragments merge as a no-op, including their kind's keyword prefix.
    pub fn is_empty(&self) -> bool {
        !self.tokens.iter().any(|t| match t {
            Token::Text(s) => !s.trim().is_empty(),
            Token::Param => true,
            Token::Prefix => false,
        })
    }

    /// Number of placeholders in the token stream.
    pub fn placeholder_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| matches!(t, Token::Param))
            .count()
    }

    pub(crate) fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub(crate) fn set_prefix(&mut self, escaped: String) {
        self.prefix = Some(escaped);
    }

    pub(crate) fn first_text(&self) -> Option<&str> {
        self.tokens.iter().find_map(|t| match t {
            Token::Text(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// Append literal SQL; adjacent text is coalesced.
    pub(crate) fn push_text(&mut self, sql: impl AsRef<str>) {
        let sql = sql.as_ref();
        if sql.is_empty() {
            return;
        }

        match self.tokens.last_mut() {
            Some(Token::Text(last)) => last.push_str(sql),
            _ => self.tokens.push(Token::Text(sql.to_string())),
        }
    }

    /// Append a placeholder and bind its value.
    pub(crate) fn push_bind(&mut self, value: Value) {
        self.tokens.push(Token::Param);
        self.values.push(value);
    }

    pub(crate) fn push_prefix_marker(&mut self) {
        self.tokens.push(Token::Prefix);
    }

    fn push_token(&mut self, token: &Token) {
        match token {
            Token::Text(s) => self.push_text(s),
            other => self.tokens.push(other.clone()),
        }
    }

    /// Run the interpolation loop: literal piece, then its argument, in order.
    ///
    /// Only the gaps between pieces take arguments; any beyond that are ignored.
    pub(crate) fn interpolate(&mut self, template: Template) {
        let (pieces, args) = template.into_parts();
        let last = pieces.len().saturating_sub(1);
        let mut args = args.into_iter();
        for (i, piece) in pieces.into_iter().enumerate() {
            self.push_text(piece);
            if i == last {
                break;
            }
            match args.next() {
                Some(Arg::Value(value)) => self.push_bind(value),
                Some(Arg::Fragment(fragment)) => self.merge_from(&fragment),
                Some(Arg::Skip) | None => {}
            }
        }
    }

    /// Copy `source` into this fragment, applying its kind's merge rules.
    pub(crate) fn merge_from(&mut self, source: &Fragment) {
        if source.is_empty() {
            return;
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "sqlfrag.merge",
            into = ?self.kind,
            from = ?source.kind,
            params = source.values.len(),
            "merge fragment"
        );

        if let Some(prefix) = source.kind.merge_prefix() {
            self.push_text(prefix);
        }

        match source.kind {
            Kind::Columns => self.merge_columns(source),
            _ => {
                for token in &source.tokens {
                    self.push_token(token);
                }
            }
        }
        self.values.extend(source.values.iter().cloned());
    }

    /// Resolve the source's prefix markers while copying its tokens.
    ///
    /// The source's own prefix wins over the current prefix of a column-list
    /// destination. With neither, the markers are dropped.
    fn merge_columns(&mut self, source: &Fragment) {
        let inherited = match self.kind {
            Kind::Columns => self.prefix.clone(),
            _ => None,
        };
        let effective = source.prefix.clone().or(inherited);

        for token in &source.tokens {
            match (token, &effective) {
                (Token::Prefix, Some(prefix)) => {
                    self.push_text(prefix);
                    self.push_text(".");
                }
                (Token::Prefix, None) => {}
                (other, _) => self.push_token(other),
            }
        }
    }

    /// Render with `$1, $2, ...` placeholders.
    ///
    /// Unresolved prefix markers render as nothing. Kind prefixes are only added on
    /// merge, so rendering a lone fragment omits them.
    pub(crate) fn render(&self) -> String {
        let cap = self
            .tokens
            .iter()
            .map(|t| match t {
                Token::Text(s) => s.len(),
                Token::Param => 3,
                Token::Prefix => 0,
            })
            .sum();
        let mut out = String::with_capacity(cap);
        let mut idx: usize = 0;

        for token in &self.tokens {
            match token {
                Token::Text(s) => out.push_str(s),
                Token::Param => {
                    idx += 1;
                    let _ = write!(&mut out, "${idx}");
                }
                Token::Prefix => {}
            }
        }
        out
    }
}

/// Shared API for the typed fragment wrappers.
///
/// Each wrapper holds its [`Fragment`] in a `fragment` field.
macro_rules! fragment_type {
    ($($ty:ident),* $(,)?) => {
        $(
            impl $ty {
                /// `true` if there is no literal SQL text; merging it is a no-op.
                pub fn is_empty(&self) -> bool {
                    self.fragment.is_empty()
                }

                /// Bound values in placeholder order.
                pub fn values(&self) -> &[$crate::Value] {
                    self.fragment.values()
                }
            }

            impl AsRef<$crate::Fragment> for $ty {
                fn as_ref(&self) -> &$crate::Fragment {
                    &self.fragment
                }
            }

            impl From<$ty> for $crate::Fragment {
                fn from(value: $ty) -> Self {
                    value.fragment
                }
            }

            impl From<$ty> for $crate::Arg {
                fn from(value: $ty) -> Self {
                    $crate::Arg::Fragment(value.fragment)
                }
            }

            impl From<&$ty> for $crate::Arg {
                fn from(value: &$ty) -> Self {
                    $crate::Arg::Fragment(value.fragment.clone())
                }
            }

            impl $crate::sql::Appendable for $ty {
                fn into_fragment(self) -> Option<$crate::Fragment> {
                    Some(self.fragment)
                }
            }

            impl $crate::sql::Appendable for &$ty {
                fn into_fragment(self) -> Option<$crate::Fragment> {
                    Some(self.fragment.clone())
                }
            }

            impl $crate::sql::Appendable for Option<$ty> {
                fn into_fragment(self) -> Option<$crate::Fragment> {
                    self.map(|f| f.fragment)
                }
            }

            impl $crate::sql::Appendable for Option<&$ty> {
                fn into_fragment(self) -> Option<$crate::Fragment> {
                    self.map(|f| f.fragment.clone())
                }
            }
        )*
    };
}

pub(crate) use fragment_type;

impl From<Fragment> for Arg {
    fn from(value: Fragment) -> Self {
        Arg::Fragment(value)
    }
}

impl From<&Fragment> for Arg {
    fn from(value: &Fragment) -> Self {
        Arg::Fragment(value.clone())
    }
}
