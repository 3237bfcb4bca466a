//! logos-based tokenizer for inline style declaration lists.
//!
//! Token priority in logos is determined by:
//! 1. Longest match wins (e.g. `--yl-fz` as CustomProperty beats `-` + Ident)
//! 2. For equal length matches, earlier-defined variants win
//!
//! Our ordering ensures:
//! - `#ff00aa` matches [`Token::HexColor`], not `Hash` + `Ident`
//! - `14px` matches [`Token::Dimension`], not `Number` + `Ident`
//! - `calc(` matches [`Token::Function`], not `Ident` + `ParenOpen`
//!
//! Characters that match no token (`+`, `/`, a lone `-`) are dropped from the
//! token stream. The parser slices values out of the source by span, so they
//! still end up in the declared value.

use logos::Logos;

/// Token produced by the lexer.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum Token {
    // ── Compound tokens (longer matches, defined first) ──────────────

    /// `!important` flag.
    #[token("!important")]
    Important,

    /// Custom property name: `--group-gap`, `--mantine-color-blue-6`.
    #[regex(r"--[a-zA-Z0-9_-]+")]
    CustomProperty,

    /// Hex color: `#fff`, `#ff00aa`, `#ff00aa80` (3-8 hex digits).
    #[regex(r"#[0-9a-fA-F]{3,8}")]
    HexColor,

    /// Function opener including the parenthesis: `var(`, `calc(`, `rgba(`.
    #[regex(r"-?[a-zA-Z_][a-zA-Z0-9_-]*\(")]
    Function,

    /// Dimension: number with a unit like `14px`, `0.625rem`, `50%`, `1fr`.
    #[regex(r"-?([0-9]+(\.[0-9]+)?|\.[0-9]+)(px|rem|em|%|vw|vh|fr|deg|ms|s)")]
    Dimension,

    /// Double-quoted string literal.
    #[regex(r#""[^"]*""#)]
    StringLiteral,

    /// Single-quoted string literal.
    #[regex(r"'[^']*'")]
    StringLiteralSingle,

    /// Number: integer or float, possibly negative.
    #[regex(r"-?([0-9]+(\.[0-9]+)?|\.[0-9]+)")]
    Number,

    /// Identifier: property names and keyword values, vendor prefixes included.
    #[regex(r"-?[a-zA-Z_][a-zA-Z0-9_-]*")]
    Ident,

    // ── Single-character punctuation ─────────────────────────────────

    /// `(`
    #[token("(")]
    ParenOpen,

    /// `)`
    #[token(")")]
    ParenClose,

    /// `:`
    #[token(":")]
    Colon,

    /// `;`
    #[token(";")]
    Semicolon,

    /// `,`
    #[token(",")]
    Comma,
}

/// Tokenize a declaration list into `(Token, text)` pairs.
///
/// Input that fails to lex is skipped.
pub fn tokenize(input: &str) -> Vec<(Token, String)> {
    let lexer = Token::lexer(input);
    lexer
        .spanned()
        .filter_map(|(result, span)| result.ok().map(|token| (token, input[span].to_string())))
        .collect()
}
