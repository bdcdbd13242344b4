//! # tolerance-macro
//!
//! This crate provides the `#[tolerant]` attribute macro which rewrites a
//! `Result`-returning function to swallow its errors and return a
//! substitute value instead.
//!
//! See the main `tolerance` crate for usage examples.

use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Expr, GenericArgument, Ident, ItemFn, LitBool, PathArguments, ReturnType, Token, Type,
    parse::Parse, parse_macro_input,
};

fn result_return_type(return_type: &ReturnType) -> Option<&Type> {
    if let ReturnType::Type(_, ty) = return_type {
        if let Type::Path(type_path) = &**ty {
            if let Some(segment) = type_path.path.segments.last() {
                if segment.ident == "Result" {
                    if let PathArguments::AngleBracketed(args) = &segment.arguments {
                        if args.args.len() == 2 {
                            if let Some(GenericArgument::Type(_)) = args.args.first() {
                                return Some(&**ty);
                            }
                        }
                    }
                }
            }
        }
    }
    None
}

struct TolerantAttrs {
    substitute: Option<Expr>,
    filter: Option<Expr>,
    enabled: Option<bool>,
}

impl Parse for TolerantAttrs {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let mut attrs = TolerantAttrs {
            substitute: None,
            filter: None,
            enabled: None,
        };

        if input.is_empty() {
            return Ok(attrs);
        }

        loop {
            let key: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match key.to_string().as_str() {
                "substitute" => {
                    attrs.substitute = Some(input.parse()?);
                }
                "filter" => {
                    attrs.filter = Some(input.parse()?);
                }
                "enabled" => {
                    let lit: LitBool = input.parse()?;
                    attrs.enabled = Some(lit.value);
                }
                _ => {
                    return Err(syn::Error::new(key.span(), "unknown attribute"));
                }
            }

            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
            if input.is_empty() {
                break;
            }
        }

        Ok(attrs)
    }
}

/// Make a function fail silently.
///
/// The function must return a `Result<T, E>` (written with both type
/// parameters); any other return type is emitted unchanged. On `Err`,
/// unless tolerance is disabled process-wide, the error is swallowed and
/// `Ok(substitute)` returned in its place.
///
/// # Attributes
///
/// - `substitute = <expr>` - value returned in place of a swallowed error
///   (defaults to `Default::default()`)
/// - `filter = <expr>` - predicate called with `&E`; errors it rejects are
///   returned unchanged
/// - `enabled = true/false` - `false` emits the function untouched
///
/// # Examples
///
/// Basic usage:
/// ```rust
/// use tolerance::tolerant;
///
/// #[tolerant]
/// fn parse_port(input: &str) -> Result<u16, std::num::ParseIntError> {
///     input.parse()
/// }
///
/// assert_eq!(parse_port("8080"), Ok(8080));
/// assert_eq!(parse_port("default"), Ok(0));
/// ```
///
/// With a substitute and a filter:
/// ```rust
/// use tolerance::tolerant;
///
/// #[tolerant(substitute = 6667, filter = |e: &String| e.starts_with("soft"))]
/// fn irc_port(input: &str) -> Result<u16, String> {
///     match input {
///         "irc" => Ok(194),
///         "" => Err("soft: empty".to_string()),
///         other => Err(format!("hard: {other}")),
///     }
/// }
///
/// assert_eq!(irc_port("irc"), Ok(194));
/// assert_eq!(irc_port(""), Ok(6667));
/// assert!(irc_port("smtp").is_err());
/// ```
///
/// Works with async functions:
/// ```rust
/// use tolerance::tolerant;
///
/// #[tolerant(substitute = String::new())]
/// async fn fetch_motd() -> Result<String, std::io::Error> {
///     Ok("hello".to_string())
/// }
/// ```
#[proc_macro_attribute]
pub fn tolerant(attr: TokenStream, item: TokenStream) -> TokenStream {
    let attrs = parse_macro_input!(attr as TolerantAttrs);
    let input = parse_macro_input!(item as ItemFn);

    let sig = &input.sig;
    let block = &input.block;
    let vis = &input.vis;
    let fn_attrs = &input.attrs;
    let is_async = sig.asyncness.is_some();

    let output = match result_return_type(&sig.output) {
        Some(output) => output,
        None => {
            return quote! { #(#fn_attrs)* #vis #sig #block }.into();
        }
    };
    if attrs.enabled == Some(false) {
        return quote! { #(#fn_attrs)* #vis #sig #block }.into();
    }

    let substitute = match &attrs.substitute {
        Some(expr) => quote! { #expr },
        None => quote! { ::core::default::Default::default() },
    };

    let filter_check = match &attrs.filter {
        Some(filter) => quote! {
            if !(#filter)(&__error) {
                return Err(__error);
            }
        },
        None => quote! {},
    };

    let recover = quote! {
        match __outcome {
            Ok(__value) => Ok(__value),
            Err(__error) => {
                if ::tolerance::tolerance_core::is_disabled() {
                    return Err(__error);
                }
                #filter_check
                Ok(#substitute)
            }
        }
    };

    let expanded = if is_async {
        quote! {
            #(#fn_attrs)* #vis #sig {
                let __future = async move #block;
                let __outcome: #output = __future.await;
                #recover
            }
        }
    } else {
        quote! {
            #(#fn_attrs)* #vis #sig {
                let __outcome: #output = (move || #block)();
                #recover
            }
        }
    };

    expanded.into()
}
