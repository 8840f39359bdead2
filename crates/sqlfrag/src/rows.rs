//! Row-oriented fragments: `VALUES (...), (...)` and `UNNEST($1::t, ...)`.
//!
//! Both take rows of values. [`values`] binds every cell as its own placeholder;
//! [`unnest`] transposes the rows into one array per column, which keeps the
//! placeholder count independent of the row count for bulk inserts:
//!
//! ```ignore
//! use sqlfrag::{sql, unnest};
//!
//! let q = sql!(
//!     "INSERT INTO items (id, name) SELECT * FROM {}",
//!     unnest(["INT8[]", "TEXT[]"], rows),
//! );
//! // INSERT INTO items (id, name) SELECT * FROM UNNEST($1::INT8[], $2::TEXT[])
//! ```
//!
//! Rows are not checked for equal length. Use [`try_values`] / [`try_unnest`] to
//! reject ragged input instead.

use crate::error::{FragError, FragResult};
use crate::fragment::{Fragment, Kind, fragment_type};
use crate::value::Value;

/// A `(…), (…)` tuple list, emitted with a leading `VALUES ` when merged.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct Values {
    fragment: Fragment,
}

fragment_type!(Values);

/// Build a tuple list with one placeholder per cell.
pub fn values<R, V>(rows: impl IntoIterator<Item = R>) -> Values
where
    R: IntoIterator<Item = V>,
    V: Into<Value>,
{
    let mut fragment = Fragment::new(Kind::Values);
    for (i, row) in rows.into_iter().enumerate() {
        if i > 0 {
            fragment.push_text(", ");
        }
        fragment.push_text("(");
        for (j, cell) in row.into_iter().enumerate() {
            if j > 0 {
                fragment.push_text(", ");
            }
            fragment.push_bind(cell.into());
        }
        fragment.push_text(")");
    }
    Values { fragment }
}

/// Like [`values`], but every row must have as many cells as the first one.
pub fn try_values<R, V>(rows: impl IntoIterator<Item = R>) -> FragResult<Values>
where
    R: IntoIterator<Item = V>,
    V: Into<Value>,
{
    let rows = collect_rows(rows);
    if let Some(first) = rows.first() {
        check_widths(&rows, first.len())?;
    }
    Ok(values(rows))
}

/// `$1::t1, $2::t2)` with one array parameter per column, emitted after `UNNEST(`
/// when merged.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct Unnest {
    fragment: Fragment,
}

fragment_type!(Unnest);

/// Transpose `rows` into one array per entry of `types`.
///
/// Column `k` collects `row[k]` from every row, in row order. Cells past
/// `types.len()` are dropped and short rows leave their columns short.
pub fn unnest<S, R, V>(
    types: impl IntoIterator<Item = S>,
    rows: impl IntoIterator<Item = R>,
) -> Unnest
where
    S: AsRef<str>,
    R: IntoIterator<Item = V>,
    V: Into<Value>,
{
    let types: Vec<S> = types.into_iter().collect();
    let mut columns: Vec<Vec<Value>> = types.iter().map(|_| Vec::new()).collect();

    for row in rows {
        for (column, cell) in columns.iter_mut().zip(row) {
            column.push(cell.into());
        }
    }

    let last = types.len().saturating_sub(1);
    let mut fragment = Fragment::new(Kind::Unnest);
    for (i, (ty, column)) in types.iter().zip(columns).enumerate() {
        fragment.push_bind(Value::Array(column));
        fragment.push_text("::");
        fragment.push_text(ty);
        fragment.push_text(if i == last { ")" } else { ", " });
    }
    Unnest { fragment }
}

/// Like [`unnest`], but `types` must be non-empty and every row must have exactly
/// `types.len()` cells.
pub fn try_unnest<S, R, V>(
    types: impl IntoIterator<Item = S>,
    rows: impl IntoIterator<Item = R>,
) -> FragResult<Unnest>
where
    S: AsRef<str>,
    R: IntoIterator<Item = V>,
    V: Into<Value>,
{
    let types: Vec<S> = types.into_iter().collect();
    if types.is_empty() {
        return Err(FragError::validation("unnest requires at least one column type"));
    }
    let rows = collect_rows(rows);
    check_widths(&rows, types.len())?;
    Ok(unnest(types, rows))
}

fn collect_rows<R, V>(rows: impl IntoIterator<Item = R>) -> Vec<Vec<Value>>
where
    R: IntoIterator<Item = V>,
    V: Into<Value>,
{
    rows.into_iter()
        .map(|row| row.into_iter().map(Into::into).collect())
        .collect()
}

fn check_widths(rows: &[Vec<Value>], expected: usize) -> FragResult<()> {
    match rows.iter().position(|row| row.len() != expected) {
        Some(row) => Err(FragError::ragged_row(row, expected, rows[row].len())),
        None => Ok(()),
    }
}
