//! `style!`: parse inline style declarations at compile time and generate an
//! `InlineStyle` value.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::ext::IdentExt;
use syn::parse::{Parse, ParseStream};
use syn::{Error, Ident, LitFloat, LitInt, LitStr, Result, Token};

// ---------------------------------------------------------------------------
// AST types
// ---------------------------------------------------------------------------

/// A single parsed value token.
#[derive(Debug, Clone)]
pub(crate) enum StyleValue {
    /// A bare keyword like `center`, `wrap`, `auto`.
    Ident(String),
    /// A unitless number.
    Number(String),
    /// A number with a unit suffix (`12px`, `1.5rem`) or `%`.
    Dimension(String, String),
    /// A `#` color.
    Hash(String),
    /// A quoted literal, emitted verbatim (`"var(--x)"`, `"calc(...)"`).
    Str(String),
}

impl StyleValue {
    fn render(&self) -> String {
        match self {
            StyleValue::Ident(s) | StyleValue::Number(s) | StyleValue::Hash(s) | StyleValue::Str(s) => s.clone(),
            StyleValue::Dimension(n, unit) => format!("{n}{unit}"),
        }
    }
}

/// `property: value value;`
#[derive(Debug, Clone)]
pub(crate) struct StyleDeclaration {
    /// Kebab-case name, including the `--` of custom properties.
    pub name: String,
    pub name_span: Span,
    pub values: Vec<StyleValue>,
}

#[derive(Debug)]
struct StyleInput {
    declarations: Vec<StyleDeclaration>,
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

impl Parse for StyleInput {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut declarations = Vec::new();
        while !input.is_empty() {
            declarations.push(parse_declaration(input)?);
        }
        Ok(StyleInput { declarations })
    }
}

pub(crate) fn parse_declaration(input: ParseStream) -> Result<StyleDeclaration> {
    let mut name = String::new();
    // Custom property: `--` is two `-` puncts.
    if input.peek(Token![-]) {
        input.parse::<Token![-]>()?;
        input.parse::<Token![-]>()?;
        name.push_str("--");
    }

    let first: Ident = input.call(Ident::parse_any)?;
    let name_span = first.span();
    name.push_str(&first.to_string());
    while input.peek(Token![-]) {
        input.parse::<Token![-]>()?;
        name.push('-');
        if input.peek(LitInt) {
            let part: LitInt = input.parse()?;
            name.push_str(&part.to_string());
        } else {
            let part: Ident = input.call(Ident::parse_any)?;
            name.push_str(&part.to_string());
        }
    }

    input.parse::<Token![:]>()?;

    let mut values = Vec::new();
    while !input.peek(Token![;]) {
        if input.is_empty() {
            return Err(Error::new(name_span, format!("missing `;` after `{name}`")));
        }
        values.push(parse_value(input)?);
    }
    input.parse::<Token![;]>()?;

    if values.is_empty() {
        return Err(Error::new(name_span, format!("property `{name}` has no value")));
    }

    Ok(StyleDeclaration {
        name,
        name_span,
        values,
    })
}

const UNITS: &[&str] = &["px", "rem", "em", "vh", "vw", "fr", "deg", "ms", "s", "ch"];

fn dimension(digits: String, unit: &str, span: Span) -> Result<StyleValue> {
    if !UNITS.contains(&unit) {
        return Err(Error::new(span, format!("unknown unit `{unit}`")));
    }
    Ok(StyleValue::Dimension(digits, unit.to_owned()))
}

pub(crate) fn parse_value(input: ParseStream) -> Result<StyleValue> {
    if input.peek(Token![#]) {
        input.parse::<Token![#]>()?;
        let hex = if input.peek(Ident) {
            let ident: Ident = input.parse()?;
            ident.to_string()
        } else if input.peek(LitInt) {
            // `#228be6` lexes as the integer `228` with suffix `be6`.
            let lit: LitInt = input.parse()?;
            lit.to_string()
        } else if input.peek(LitFloat) {
            // `#1e90ff` lexes as a float with an exponent.
            let lit: LitFloat = input.parse()?;
            lit.to_string()
        } else {
            return Err(input.error("expected hex color value after `#`"));
        };
        return Ok(StyleValue::Hash(format!("#{hex}")));
    }

    if input.peek(LitStr) {
        let lit: LitStr = input.parse()?;
        return Ok(StyleValue::Str(lit.value()));
    }

    let negative = if input.peek(Token![-]) {
        input.parse::<Token![-]>()?;
        true
    } else {
        false
    };
    let sign = if negative { "-" } else { "" };

    if input.peek(LitFloat) {
        let lit: LitFloat = input.parse()?;
        let digits = format!("{sign}{}", lit.base10_digits());
        if !lit.suffix().is_empty() {
            return dimension(digits, lit.suffix(), lit.span());
        }
        if input.peek(Token![%]) {
            input.parse::<Token![%]>()?;
            return Ok(StyleValue::Dimension(digits, "%".to_owned()));
        }
        return Ok(StyleValue::Number(digits));
    }

    if input.peek(LitInt) {
        let lit: LitInt = input.parse()?;
        let digits = format!("{sign}{}", lit.base10_digits());
        if !lit.suffix().is_empty() {
            return dimension(digits, lit.suffix(), lit.span());
        }
        if input.peek(Token![%]) {
            input.parse::<Token![%]>()?;
            return Ok(StyleValue::Dimension(digits, "%".to_owned()));
        }
        return Ok(StyleValue::Number(digits));
    }

    if negative {
        return Err(input.error("expected a number after `-`"));
    }

    if input.peek(Ident) {
        let mut keyword = input.call(Ident::parse_any)?.to_string();
        while input.peek(Token![-]) && input.peek2(Ident) {
            input.parse::<Token![-]>()?;
            let part: Ident = input.call(Ident::parse_any)?;
            keyword.push('-');
            keyword.push_str(&part.to_string());
        }
        return Ok(StyleValue::Ident(keyword));
    }

    Err(input.error("unexpected token in style value"))
}

// ---------------------------------------------------------------------------
// Code generation
// ---------------------------------------------------------------------------

fn validate_name(decl: &StyleDeclaration) -> Result<()> {
    let body = decl.name.strip_prefix("--").unwrap_or(&decl.name);
    let valid = !body.is_empty()
        && body
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if valid {
        Ok(())
    } else {
        Err(Error::new(
            decl.name_span,
            format!("invalid property name `{}`: use kebab-case", decl.name),
        ))
    }
}

pub(crate) fn style_impl(input: TokenStream) -> Result<TokenStream> {
    let parsed: StyleInput = syn::parse2(input)?;

    if parsed.declarations.is_empty() {
        return Err(Error::new(
            Span::call_site(),
            "style! macro requires at least one declaration",
        ));
    }

    let mut pairs = Vec::new();
    for decl in &parsed.declarations {
        validate_name(decl)?;
        let name = &decl.name;
        let value = decl
            .values
            .iter()
            .map(StyleValue::render)
            .collect::<Vec<_>>()
            .join(" ");
        pairs.push(quote! { (#name, #value) });
    }

    Ok(quote! {
        ::overlay_kit::css::InlineStyle::from_pairs([#(#pairs),*])
    })
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;

    fn parse_style(tokens: TokenStream) -> Result<StyleInput> {
        syn::parse2(tokens)
    }

    fn pair(name: &str, value: &str) -> (String, String) {
        (name.to_owned(), value.to_owned())
    }

    fn rendered(tokens: TokenStream) -> Vec<(String, String)> {
        parse_style(tokens)
            .unwrap()
            .declarations
            .iter()
            .map(|d| {
                let value = d.values.iter().map(StyleValue::render).collect::<Vec<_>>().join(" ");
                (d.name.clone(), value)
            })
            .collect()
    }

    // -----------------------------------------------------------------------
    // Parsing
    // -----------------------------------------------------------------------

    #[test]
    fn parse_keyword() {
        assert_eq!(rendered(quote! { align-items: center; }), vec![pair("align-items", "center")]);
    }

    #[test]
    fn parse_custom_property() {
        assert_eq!(
            rendered(quote! { --group-gap: 12px; }),
            vec![pair("--group-gap", "12px")]
        );
    }

    #[test]
    fn parse_dimensions() {
        assert_eq!(
            rendered(quote! { padding: 1.5rem 50% -2px 0; }),
            vec![pair("padding", "1.5rem 50% -2px 0")]
        );
    }

    #[test]
    fn parse_hash_colors() {
        assert_eq!(
            rendered("color: #fff; background: #228be6;".parse::<TokenStream>().unwrap()),
            vec![pair("color", "#fff"), pair("background", "#228be6")]
        );
    }

    #[test]
    fn parse_string_and_hyphenated_keyword() {
        assert_eq!(
            rendered(quote! {
                justify-content: space-between;
                --yl-fz: "var(--mantine-font-size-sm)";
            }),
            vec![
                pair("justify-content", "space-between"),
                pair("--yl-fz", "var(--mantine-font-size-sm)"),
            ]
        );
    }

    // -----------------------------------------------------------------------
    // Code generation
    // -----------------------------------------------------------------------

    #[test]
    fn codegen_builds_inline_style() {
        let out = style_impl(quote! { color: red; --x: 1px; }).unwrap().to_string();
        assert!(out.contains("InlineStyle :: from_pairs"));
        assert!(out.contains("\"color\" , \"red\""));
        assert!(out.contains("\"--x\" , \"1px\""));
    }

    // -----------------------------------------------------------------------
    // Errors
    // -----------------------------------------------------------------------

    #[test]
    fn error_empty_input() {
        let err = style_impl(quote! {}).unwrap_err();
        assert!(err.to_string().contains("at least one declaration"));
    }

    #[test]
    fn error_unknown_unit() {
        let err = style_impl(quote! { width: 10furlongs; }).unwrap_err();
        assert!(err.to_string().contains("unknown unit `furlongs`"));
    }

    #[test]
    fn error_missing_value() {
        assert!(style_impl(quote! { color: ; }).is_err());
    }

    #[test]
    fn error_camel_case_name() {
        let err = style_impl(quote! { fontSize: 12px; }).unwrap_err();
        assert!(err.to_string().contains("use kebab-case"));
    }
}
