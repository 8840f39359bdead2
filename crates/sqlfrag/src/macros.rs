/// Build a top-level [`Sql`](crate::Sql) statement.
///
/// Takes the same input as [`template!`](crate::template): a string literal with `{}`
/// slots and one argument per slot. `{{` and `}}` are literal braces.
///
/// ```ignore
/// let q = sqlfrag::sql!("SELECT * FROM users WHERE id = {}", 42);
/// assert_eq!(q.text(), "SELECT * FROM users WHERE id = $1");
/// ```
#[cfg(feature = "macros")]
#[macro_export]
macro_rules! sql {
    ($($tt:tt)*) => {
        $crate::Sql::new($crate::template!($($tt)*))
    };
}

/// Build a [`Where`](crate::Where) clause whose first condition is the template.
///
/// ```ignore
/// let w = sqlfrag::sql_where!("a = {}", 1).or(sqlfrag::template!("b = {}", 2));
/// ```
#[cfg(feature = "macros")]
#[macro_export]
macro_rules! sql_where {
    ($($tt:tt)*) => {
        $crate::Where::from_template($crate::template!($($tt)*))
    };
}
