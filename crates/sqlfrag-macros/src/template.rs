use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{Error, Expr, LitStr, Result, Token};

pub(crate) struct TemplateInput {
    sql: LitStr,
    args: Punctuated<Expr, Token![,]>,
}

impl Parse for TemplateInput {
    fn parse(input: ParseStream) -> Result<Self> {
        let sql: LitStr = input.parse()?;
        let args = if input.is_empty() {
            Punctuated::new()
        } else {
            input.parse::<Token![,]>()?;
            Punctuated::parse_terminated(input)?
        };
        Ok(Self { sql, args })
    }
}

/// Split `sql` at `{}` slots, unescaping `{{` and `}}`.
///
/// Always returns `slots + 1` pieces.
pub(crate) fn split_pieces(sql: &str) -> std::result::Result<Vec<String>, String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut chars = sql.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' => match chars.next() {
                Some('{') => current.push('{'),
                Some('}') => pieces.push(std::mem::take(&mut current)),
                _ => {
                    return Err(
                        "unmatched `{` in SQL template (use `{{` for a literal brace)".to_string()
                    );
                }
            },
            '}' => match chars.next() {
                Some('}') => current.push('}'),
                _ => {
                    return Err(
                        "unmatched `}` in SQL template (use `}}` for a literal brace)".to_string()
                    );
                }
            },
            other => current.push(other),
        }
    }
    pieces.push(current);
    Ok(pieces)
}

pub(crate) fn expand(input: TemplateInput) -> Result<TokenStream> {
    let pieces = split_pieces(&input.sql.value()).map_err(|msg| Error::new(input.sql.span(), msg))?;

    let slots = pieces.len() - 1;
    let args: Vec<&Expr> = input.args.iter().collect();
    if slots != args.len() {
        return Err(Error::new(
            input.sql.span(),
            format!(
                "SQL template has {slots} `{{}}` slot(s) but {} argument(s) were given",
                args.len()
            ),
        ));
    }

    Ok(quote! {
        ::sqlfrag::Template::__from_macro(
            &[#(#pieces),*],
            ::std::vec![#(::sqlfrag::Arg::from(#args)),*],
        )
    })
}
