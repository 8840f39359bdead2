//! Procedural macros for sqlfrag
//!
//! Provides `template!`, which splits a SQL string literal into literal pieces at
//! compile time and checks that every `{}` slot has an argument.

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod template;

/// Build a `sqlfrag::Template` from a string literal and its arguments.
///
/// # Example
///
/// ```ignore
/// use sqlfrag::template;
///
/// let t = template!("status = {} AND tags @> '{{admin}}'", "active");
/// ```
///
/// # Syntax
///
/// - `{}` - an argument slot; arguments are converted with `sqlfrag::Arg::from`
/// - `{{` / `}}` - literal `{` / `}`
///
/// The number of slots must equal the number of arguments.
#[proc_macro]
pub fn template(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as template::TemplateInput);
    template::expand(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
