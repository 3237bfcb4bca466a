//! Size tokens and their CSS values.
//!
//! Named tokens (`xs`..`xl`) resolve to theme variables, numbers are treated
//! as pixels and converted to scaled `rem`, anything else is passed through
//! as raw CSS.

use std::fmt;
use std::str::FromStr;

/// Named theme size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeToken {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl SizeToken {
    pub const ALL: [SizeToken; 5] = [
        SizeToken::Xs,
        SizeToken::Sm,
        SizeToken::Md,
        SizeToken::Lg,
        SizeToken::Xl,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SizeToken::Xs => "xs",
            SizeToken::Sm => "sm",
            SizeToken::Md => "md",
            SizeToken::Lg => "lg",
            SizeToken::Xl => "xl",
        }
    }
}

impl fmt::Display for SizeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SizeToken {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SizeToken::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or(())
    }
}

/// A size-like prop value.
#[derive(Debug, Clone, PartialEq)]
pub enum Size {
    Token(SizeToken),
    /// Pixels, converted to `rem`.
    Px(f32),
    /// Raw CSS (`"10px"`, `"2rem"`, `"calc(...)"`).
    Css(String),
}

impl From<SizeToken> for Size {
    fn from(token: SizeToken) -> Self {
        Size::Token(token)
    }
}

impl From<f32> for Size {
    fn from(px: f32) -> Self {
        Size::Px(px)
    }
}

impl From<i32> for Size {
    fn from(px: i32) -> Self {
        Size::Px(px as f32)
    }
}

impl From<&str> for Size {
    fn from(value: &str) -> Self {
        match value.parse::<SizeToken>() {
            Ok(token) => Size::Token(token),
            Err(()) => Size::Css(value.to_owned()),
        }
    }
}

/// Format a float without a trailing `.0`.
fn num(value: f32) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    format!("{rounded}")
}

/// Convert pixels to a `rem` expression scaled by `--mantine-scale`.
pub fn rem(px: f32) -> String {
    if px == 0.0 {
        return "0rem".to_owned();
    }
    format!("calc({}rem * var(--mantine-scale))", num(px / 16.0))
}

/// Convert a raw CSS length: `px` values become scaled `rem`, bare numbers
/// are read as pixels, everything else is returned untouched.
fn css_length(value: &str) -> String {
    let trimmed = value.trim();
    if let Some(px) = trimmed.strip_suffix("px").and_then(|n| n.trim().parse::<f32>().ok()) {
        return rem(px);
    }
    if let Ok(px) = trimmed.parse::<f32>() {
        return rem(px);
    }
    trimmed.to_owned()
}

/// Resolve a size against a variable prefix.
///
/// `get_size(&Size::Token(Md), "yl-control-size")` is
/// `var(--yl-control-size-md)`.
pub fn get_size(size: &Size, prefix: &str) -> String {
    match size {
        Size::Token(token) => format!("var(--{prefix}-{token})"),
        Size::Px(px) => rem(*px),
        Size::Css(css) => css_length(css),
    }
}

pub fn get_spacing(size: &Size) -> String {
    get_size(size, "mantine-spacing")
}

pub fn get_font_size(size: &Size) -> String {
    get_size(size, "mantine-font-size")
}

pub fn get_radius(size: &Size) -> String {
    get_size(size, "mantine-radius")
}
