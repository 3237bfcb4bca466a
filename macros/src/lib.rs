//! Proc macros for overlay-kit: `style!` inline style declarations.
//!
//! This crate is not meant to be used directly. Enable the `macros` feature
//! on `overlay-kit`.

use proc_macro::TokenStream;

mod style_macro;

/// Compile-time inline style declarations.
///
/// Parses CSS declarations at compile time and produces an
/// `overlay_kit::css::InlineStyle` with the declarations in source order.
///
/// # Syntax
///
/// ```ignore
/// let vars = style! {
///     --group-gap: 12px;
///     --group-justify: space-between;
///     color: #228be6;
///     width: 50%;
///     --yl-fz: "var(--mantine-font-size-sm)";
/// };
/// ```
///
/// Property names are kebab-case; custom properties keep their `--`.
/// Values containing functions (`var()`, `calc()`) are written as string
/// literals and emitted verbatim. Unknown units are compile errors.
#[proc_macro]
pub fn style(input: TokenStream) -> TokenStream {
    style_macro::style_impl(input.into())
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
