//! Variant color resolution.
//!
//! A variant (`filled`, `light`, ...) plus a color prop decides the
//! background, hover, text and border colors of a control. Theme colors
//! resolve to palette variables; raw CSS colors are computed in place.

use std::fmt;
use std::str::FromStr;

use super::color::{darken, parse_theme_color, rgba};
use super::size::rem;
use super::Theme;
use crate::css::inline::InlineStyle;

/// Error for an unknown variant name.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown variant `{0}`")]
pub struct UnknownVariant(pub String);

/// Closed set of color variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Filled,
    Light,
    Outline,
    Subtle,
    Transparent,
    White,
    Default,
}

impl Variant {
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Filled => "filled",
            Variant::Light => "light",
            Variant::Outline => "outline",
            Variant::Subtle => "subtle",
            Variant::Transparent => "transparent",
            Variant::White => "white",
            Variant::Default => "default",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "filled" => Variant::Filled,
            "light" => Variant::Light,
            "outline" => Variant::Outline,
            "subtle" => Variant::Subtle,
            "transparent" => Variant::Transparent,
            "white" => Variant::White,
            "default" => Variant::Default,
            other => return Err(UnknownVariant(other.to_owned())),
        })
    }
}

/// Colors of one variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantColors {
    pub background: String,
    pub hover: String,
    pub color: String,
    pub border: String,
}

fn var(name: &str) -> String {
    format!("var(--mantine-color-{name})")
}

fn next_shade(shade: u8) -> u8 {
    if shade == 9 {
        8
    } else {
        shade + 1
    }
}

/// Resolve the colors of `variant` for `color` (the theme's primary color
/// when `None`).
pub fn variant_color_resolver(color: Option<&str>, theme: &Theme, variant: Variant) -> VariantColors {
    let color = color.unwrap_or(theme.primary_color.as_str());
    let parsed = parse_theme_color(color, theme);
    let c = parsed.color.as_str();
    let transparent_border = format!("{} solid transparent", rem(1.0));

    match variant {
        Variant::Filled => {
            let (background, hover) = match (parsed.is_theme_color, parsed.shade) {
                (true, None) => (var(&format!("{c}-filled")), var(&format!("{c}-filled-hover"))),
                (true, Some(s)) => (var(&format!("{c}-{s}")), var(&format!("{c}-{}", next_shade(s)))),
                (false, _) => (parsed.value.clone(), darken(&parsed.value, 0.1)),
            };
            VariantColors {
                background,
                hover,
                color: var("white"),
                border: transparent_border,
            }
        }
        Variant::Light => {
            if parsed.is_theme_color {
                VariantColors {
                    background: var(&format!("{c}-light")),
                    hover: var(&format!("{c}-light-hover")),
                    color: var(&format!("{c}-light-color")),
                    border: transparent_border,
                }
            } else {
                VariantColors {
                    background: rgba(&parsed.value, 0.1),
                    hover: rgba(&parsed.value, 0.12),
                    color: parsed.value.clone(),
                    border: transparent_border,
                }
            }
        }
        Variant::Outline => {
            if parsed.is_theme_color {
                VariantColors {
                    background: "transparent".to_owned(),
                    hover: var(&format!("{c}-outline-hover")),
                    color: var(&format!("{c}-outline")),
                    border: format!("{} solid {}", rem(1.0), var(&format!("{c}-outline"))),
                }
            } else {
                VariantColors {
                    background: "transparent".to_owned(),
                    hover: rgba(&parsed.value, 0.05),
                    color: parsed.value.clone(),
                    border: format!("{} solid {}", rem(1.0), parsed.value),
                }
            }
        }
        Variant::Subtle | Variant::Transparent => {
            let (hover, text) = if parsed.is_theme_color {
                (var(&format!("{c}-light-hover")), var(&format!("{c}-light-color")))
            } else {
                (rgba(&parsed.value, 0.12), parsed.value.clone())
            };
            VariantColors {
                background: "transparent".to_owned(),
                hover: if variant == Variant::Subtle { hover } else { "transparent".to_owned() },
                color: text,
                border: transparent_border,
            }
        }
        Variant::White => VariantColors {
            background: var("white"),
            hover: darken(&theme.white, 0.01),
            color: if parsed.is_theme_color {
                var(&format!("{c}-filled"))
            } else {
                parsed.value.clone()
            },
            border: transparent_border,
        },
        Variant::Default => VariantColors {
            background: var("default"),
            hover: var("default-hover"),
            color: var("default-color"),
            border: format!("{} solid {}", rem(1.0), var("default-border")),
        },
    }
}

/// CSS variables `--mantine-{name}-bg` / `--mantine-{name}-hover` for a
/// color prop. Only the filled variant defines them; other variants take
/// their colors from the component stylesheet and yield an empty style.
pub fn get_variant_colors(
    color: Option<&str>,
    theme: &Theme,
    variant: Variant,
    name: &str,
) -> InlineStyle {
    let mut vars = InlineStyle::new();
    if variant != Variant::Filled {
        return vars;
    }

    let color = color.unwrap_or(theme.primary_color.as_str());
    let parsed = parse_theme_color(color, theme);
    let bg = format!("--mantine-{name}-bg");
    let hover = format!("--mantine-{name}-hover");

    match (parsed.is_theme_color, parsed.shade) {
        (true, None) => {
            vars.set(bg, var(&format!("{}-filled", parsed.color)));
            vars.set(hover, var(&format!("{}-filled-hover", parsed.color)));
        }
        (true, Some(s)) => {
            vars.set(bg, var(&format!("{}-{s}", parsed.color)));
            vars.set(hover, var(&format!("{}-{}", parsed.color, next_shade(s))));
        }
        (false, _) => {
            vars.set(bg, parsed.value.clone());
            vars.set(hover, darken(&parsed.value, 0.1));
        }
    }
    vars
}
