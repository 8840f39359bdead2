//! Templates: literal SQL pieces interleaved with arguments.

use crate::error::{FragError, FragResult};
use crate::value::Value;
use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use std::borrow::Cow;

/// One interpolated argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// Elided: no placeholder, no value.
    Skip,
    /// Bound as a new placeholder.
    Value(Value),
    /// Merged in place.
    Fragment(crate::Fragment),
}

/// An argument that is left out of the query entirely.
pub fn skip() -> Arg {
    Arg::Skip
}

/// `Some(v)` interpolates `v`; `None` elides the argument.
///
/// Compare with passing an `Option` directly, where `None` binds SQL `NULL`.
pub fn optional<T: Into<Arg>>(value: Option<T>) -> Arg {
    value.map_or(Arg::Skip, Into::into)
}

impl From<Value> for Arg {
    fn from(value: Value) -> Self {
        Arg::Value(value)
    }
}

macro_rules! impl_value_arg {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Arg {
                fn from(value: $t) -> Self {
                    Arg::Value(Value::from(value))
                }
            }
        )*
    };
}

impl_value_arg!(
    i8,
    i16,
    i32,
    i64,
    u8,
    u16,
    u32,
    f32,
    f64,
    bool,
    &str,
    String,
    &String,
    DateTime<Utc>,
    DateTime<FixedOffset>,
    NaiveDateTime,
);

impl<T: Into<Value>> From<Option<T>> for Arg {
    fn from(value: Option<T>) -> Self {
        Arg::Value(Value::from(value))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Arg {
    fn from(value: Vec<T>) -> Self {
        Arg::Value(Value::from(value))
    }
}

/// Literal SQL pieces with the arguments that go between them.
///
/// `pieces.len() == args.len() + 1`. Usually built by the `template!` macro, which
/// checks this at compile time:
///
/// ```ignore
/// use sqlfrag::template;
///
/// let t = template!("age > {} AND name = {}", 18, "alice");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct Template {
    pieces: Vec<Cow<'static, str>>,
    args: Vec<Arg>,
}

impl Template {
    /// A template with no arguments.
    pub fn literal(sql: impl Into<Cow<'static, str>>) -> Self {
        Self {
            pieces: vec![sql.into()],
            args: Vec::new(),
        }
    }

    /// Build a template at runtime.
    ///
    /// Fails when there are no pieces, or when the argument count is not exactly one
    /// less than the piece count.
    pub fn from_parts<P, A>(
        pieces: impl IntoIterator<Item = P>,
        args: impl IntoIterator<Item = A>,
    ) -> FragResult<Self>
    where
        P: Into<Cow<'static, str>>,
        A: Into<Arg>,
    {
        let pieces: Vec<Cow<'static, str>> = pieces.into_iter().map(Into::into).collect();
        let args: Vec<Arg> = args.into_iter().map(Into::into).collect();

        if pieces.is_empty() {
            return Err(FragError::EmptyTemplate);
        }
        if args.len() + 1 != pieces.len() {
            return Err(FragError::validation(format!(
                "Template has {} pieces but {} arguments (expected {})",
                pieces.len(),
                args.len(),
                pieces.len() - 1
            )));
        }
        Ok(Self { pieces, args })
    }

    #[doc(hidden)]
    pub fn __from_macro(pieces: &[&'static str], args: Vec<Arg>) -> Self {
        Self {
            pieces: pieces.iter().map(|p| Cow::Borrowed(*p)).collect(),
            args,
        }
    }

    pub(crate) fn into_parts(self) -> (Vec<Cow<'static, str>>, Vec<Arg>) {
        (self.pieces, self.args)
    }
}

impl From<&'static str> for Template {
    fn from(value: &'static str) -> Self {
        Template::literal(value)
    }
}

impl From<String> for Template {
    fn from(value: String) -> Self {
        Template::literal(value)
    }
}
