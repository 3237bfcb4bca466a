//! Declaration-list parser for inline style overrides.
//!
//! Parses text such as `"--yl-fz: 14px; color: red !important"` into an
//! [`InlineStyle`]. Uses the logos tokenizer from [`crate::css::tokenizer`] to
//! find property names and declaration boundaries; values are kept verbatim
//! (sliced from the source by span) since they are handed to a renderer, not
//! interpreted.

use logos::Logos;

use crate::css::inline::InlineStyle;
use crate::css::tokenizer::Token;

/// Errors from declaration parsing.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected token at position {position}: {message}")]
    UnexpectedToken { position: usize, message: String },
    #[error("unexpected end of input: {0}")]
    UnexpectedEof(String),
    #[error("property `{0}` has no value")]
    EmptyValue(String),
    #[error("unbalanced parentheses in value of `{0}`")]
    UnbalancedParens(String),
}

/// A positioned token with byte-level span information.
#[derive(Debug, Clone)]
struct PToken {
    token: Token,
    text: String,
    /// Index in the token stream (for error reporting).
    pos: usize,
    /// Byte offset where this token starts in the source.
    byte_start: usize,
    /// Byte offset where this token ends in the source.
    byte_end: usize,
}

/// Strip block comments (`/* ... */`), replacing each with a single space.
fn strip_comments(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("/*") {
        result.push_str(&rest[..start]);
        result.push(' ');
        match rest[start + 2..].find("*/") {
            Some(end) => rest = &rest[start + 2 + end + 2..],
            // Unterminated comment consumes the rest of the input.
            None => rest = "",
        }
    }
    result.push_str(rest);
    result
}

/// Tokenize input using logos with span information preserved.
fn tokenize_with_spans(input: &str) -> Vec<PToken> {
    let lexer = Token::lexer(input);
    let mut tokens = Vec::new();

    for (result, span) in lexer.spanned() {
        if let Ok(token) = result {
            tokens.push(PToken {
                text: input[span.clone()].to_string(),
                token,
                pos: tokens.len(),
                byte_start: span.start,
                byte_end: span.end,
            });
        }
    }

    tokens
}

/// Parse a declaration list into an [`InlineStyle`].
///
/// Later declarations of the same property overwrite earlier ones. Stray
/// semicolons are ignored; an empty input yields an empty style.
pub fn parse_declarations(input: &str) -> Result<InlineStyle, ParseError> {
    let cleaned = strip_comments(input);
    let tokens = tokenize_with_spans(&cleaned);

    let mut parser = Parser {
        source: &cleaned,
        tokens,
        cursor: 0,
    };

    let mut style = InlineStyle::new();
    loop {
        parser.skip_semicolons();
        if parser.is_eof() {
            break;
        }
        let (property, value, important) = parser.parse_declaration()?;
        style.set_with_priority(property, value, important);
    }

    Ok(style)
}

/// Recursive descent parser state.
struct Parser<'a> {
    source: &'a str,
    tokens: Vec<PToken>,
    cursor: usize,
}

impl Parser<'_> {
    fn is_eof(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    fn peek(&self) -> Option<&PToken> {
        self.tokens.get(self.cursor)
    }

    fn advance(&mut self) -> Option<&PToken> {
        let tok = self.tokens.get(self.cursor)?;
        self.cursor += 1;
        Some(tok)
    }

    fn skip_semicolons(&mut self) {
        while matches!(self.peek(), Some(t) if t.token == Token::Semicolon) {
            self.cursor += 1;
        }
    }

    /// Parse `property: value [!important]` up to the next top-level `;`.
    fn parse_declaration(&mut self) -> Result<(String, String, bool), ParseError> {
        let property = match self.advance() {
            Some(tok) if matches!(tok.token, Token::Ident | Token::CustomProperty) => {
                tok.text.clone()
            }
            Some(tok) => {
                return Err(ParseError::UnexpectedToken {
                    position: tok.pos,
                    message: format!("expected property name, got '{}'", tok.text),
                })
            }
            None => return Err(ParseError::UnexpectedEof("expected property name".into())),
        };

        let colon_end = match self.advance() {
            Some(tok) if tok.token == Token::Colon => tok.byte_end,
            Some(tok) => {
                return Err(ParseError::UnexpectedToken {
                    position: tok.pos,
                    message: format!("expected ':' after `{property}`, got '{}'", tok.text),
                })
            }
            None => {
                return Err(ParseError::UnexpectedEof(format!(
                    "expected ':' after `{property}`"
                )))
            }
        };

        let mut depth = 0usize;
        let mut value_end = self.source.len();
        let mut important_start = None;

        while let Some(tok) = self.peek() {
            match tok.token {
                Token::Function | Token::ParenOpen => depth += 1,
                Token::ParenClose => {
                    depth = depth
                        .checked_sub(1)
                        .ok_or_else(|| ParseError::UnbalancedParens(property.clone()))?;
                }
                Token::Semicolon if depth == 0 => {
                    value_end = tok.byte_start;
                    break;
                }
                Token::Important if depth == 0 => {
                    important_start.get_or_insert(tok.byte_start);
                }
                _ => {}
            }
            self.cursor += 1;
        }

        if depth != 0 {
            return Err(ParseError::UnbalancedParens(property));
        }

        let important = important_start.is_some();
        let value_end = important_start.unwrap_or(value_end);
        let value = self.source[colon_end..value_end].trim();
        if value.is_empty() {
            return Err(ParseError::EmptyValue(property));
        }

        Ok((property, value.to_string(), important))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pairs(style: &InlineStyle) -> Vec<(&str, &str)> {
        style.iter().map(|d| (d.property.as_str(), d.value.as_str())).collect()
    }

    #[test]
    fn empty_input_is_empty_style() {
        assert!(parse_declarations("").unwrap().is_empty());
        assert!(parse_declarations(" ; ; ").unwrap().is_empty());
    }

    #[test]
    fn parses_plain_and_custom_properties() {
        let style = parse_declarations("color: red; --yl-fz: 14px;").unwrap();
        assert_eq!(pairs(&style), vec![("color", "red"), ("--yl-fz", "14px")]);
    }

    #[test]
    fn keeps_nested_function_values_verbatim() {
        let style = parse_declarations(
            "--group-child-width: calc(50% - (var(--mantine-spacing-md) - var(--mantine-spacing-md) / 2))",
        )
        .unwrap();
        assert_eq!(
            style.get("--group-child-width"),
            Some("calc(50% - (var(--mantine-spacing-md) - var(--mantine-spacing-md) / 2))")
        );
    }

    #[test]
    fn semicolon_inside_parens_does_not_split() {
        let style = parse_declarations("background: url(a;b); color: blue").unwrap();
        assert_eq!(style.get("background"), Some("url(a;b)"));
        assert_eq!(style.get("color"), Some("blue"));
    }

    #[test]
    fn important_flag_is_split_off() {
        let style = parse_declarations("color: red !important; gap: 1px").unwrap();
        let decls: Vec<_> = style.iter().collect();
        assert_eq!(decls[0].value, "red");
        assert!(decls[0].important);
        assert!(!decls[1].important);
    }

    #[test]
    fn comments_are_ignored() {
        let style = parse_declarations("/* size */ --yl-fz: 12px; /* open").unwrap();
        assert_eq!(pairs(&style), vec![("--yl-fz", "12px")]);
    }

    #[test]
    fn later_declaration_wins() {
        let style = parse_declarations("color: red; gap: 1px; color: blue").unwrap();
        assert_eq!(pairs(&style), vec![("color", "blue"), ("gap", "1px")]);
    }

    #[test]
    fn missing_colon_is_an_error() {
        let err = parse_declarations("color red").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { .. }));
    }

    #[test]
    fn missing_value_is_an_error() {
        assert_eq!(
            parse_declarations("color: ;").unwrap_err(),
            ParseError::EmptyValue("color".into())
        );
    }

    #[test]
    fn unbalanced_parens_are_an_error() {
        assert_eq!(
            parse_declarations("width: calc(1px").unwrap_err(),
            ParseError::UnbalancedParens("width".into())
        );
        assert_eq!(
            parse_declarations("width: 1px)").unwrap_err(),
            ParseError::UnbalancedParens("width".into())
        );
    }

    #[test]
    fn truncated_declaration_is_eof_error() {
        assert!(matches!(
            parse_declarations("color").unwrap_err(),
            ParseError::UnexpectedEof(_)
        ));
    }
}
