//! Color parsing and manipulation.

use super::Theme;

/// An RGBA color with 8-bit channels and a float alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba {
        r: 0,
        g: 0,
        b: 0,
        a: 1.0,
    };
}

fn hex_nibble_pair(s: &str) -> Option<u8> {
    u8::from_str_radix(s, 16).ok()
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    // Short forms double every digit: `#abc` == `#aabbcc`.
    let expanded: String = match hex.len() {
        3 | 4 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 | 8 => hex.to_owned(),
        _ => return None,
    };
    let r = hex_nibble_pair(&expanded[0..2])?;
    let g = hex_nibble_pair(&expanded[2..4])?;
    let b = hex_nibble_pair(&expanded[4..6])?;
    let a = match expanded.get(6..8) {
        Some(alpha) => hex_nibble_pair(alpha)? as f32 / 255.0,
        None => 1.0,
    };
    Some(Rgba { r, g, b, a })
}

fn parse_rgb_function(input: &str) -> Option<Rgba> {
    let inner = input
        .strip_prefix("rgba(")
        .or_else(|| input.strip_prefix("rgb("))?
        .strip_suffix(')')?;
    let parts: Vec<&str> = inner
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect();
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }
    let channel = |s: &str| -> Option<u8> {
        let v: f32 = s.parse().ok()?;
        Some(v.round().clamp(0.0, 255.0) as u8)
    };
    let a = match parts.get(3) {
        Some(alpha) => match alpha.strip_suffix('%') {
            Some(pct) => pct.parse::<f32>().ok()? / 100.0,
            None => alpha.parse::<f32>().ok()?,
        },
        None => 1.0,
    };
    Some(Rgba {
        r: channel(parts[0])?,
        g: channel(parts[1])?,
        b: channel(parts[2])?,
        a: a.clamp(0.0, 1.0),
    })
}

/// Parse a hex or `rgb()`/`rgba()` color. Anything unparseable is opaque
/// black, so callers always get a usable color.
pub fn to_rgba(color: &str) -> Rgba {
    let color = color.trim();
    let parsed = match color.strip_prefix('#') {
        Some(hex) => parse_hex(hex),
        None => parse_rgb_function(color),
    };
    parsed.unwrap_or(Rgba::BLACK)
}

fn fmt_alpha(a: f32) -> String {
    let rounded = (a * 1000.0).round() / 1000.0;
    format!("{rounded}")
}

/// Darken a color by `alpha` (0..1). Variable references cannot be computed
/// here, so they are mixed with black by the browser instead.
pub fn darken(color: &str, alpha: f32) -> String {
    if color.starts_with("var(") {
        return format!("color-mix(in srgb, {color}, black {}%)", fmt_alpha(alpha * 100.0));
    }
    let Rgba { r, g, b, a } = to_rgba(color);
    let f = 1.0 - alpha;
    let dark = |c: u8| (c as f32 * f).round() as u8;
    format!("rgba({}, {}, {}, {})", dark(r), dark(g), dark(b), fmt_alpha(a))
}

/// Apply an alpha to a color.
pub fn rgba(color: &str, alpha: f32) -> String {
    if color.starts_with("var(") {
        return format!(
            "color-mix(in srgb, {color}, transparent {}%)",
            fmt_alpha((1.0 - alpha) * 100.0)
        );
    }
    let Rgba { r, g, b, .. } = to_rgba(color);
    format!("rgba({r}, {g}, {b}, {})", fmt_alpha(alpha))
}

/// Result of looking a color prop up in the theme palette.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedThemeColor {
    /// Palette key (`"blue"`) or the raw color.
    pub color: String,
    /// Concrete CSS color value.
    pub value: String,
    pub shade: Option<u8>,
    pub is_theme_color: bool,
    /// CSS variable holding the color, for theme colors and white/black.
    pub variable: Option<String>,
}

/// Resolve `"blue"`, `"blue.6"`, `"white"` or a raw CSS color against the
/// theme. A shade outside `0..=9` makes the whole string a raw color.
pub fn parse_theme_color(color: &str, theme: &Theme) -> ParsedThemeColor {
    if color == "white" || color == "black" {
        let value = if color == "white" { &theme.white } else { &theme.black };
        return ParsedThemeColor {
            color: color.to_owned(),
            value: value.clone(),
            shade: None,
            is_theme_color: false,
            variable: Some(format!("--mantine-color-{color}")),
        };
    }

    let (name, shade) = match color.split_once('.') {
        Some((name, shade)) => match shade.parse::<u8>() {
            Ok(s) if s <= 9 => (name, Some(s)),
            _ => (color, None),
        },
        None => (color, None),
    };

    match theme.colors.get(name) {
        Some(tuple) => {
            let idx = shade.unwrap_or(theme.primary_shade).min(9) as usize;
            let variable = match shade {
                Some(s) => format!("--mantine-color-{name}-{s}"),
                None => format!("--mantine-color-{name}-filled"),
            };
            ParsedThemeColor {
                color: name.to_owned(),
                value: tuple[idx].clone(),
                shade,
                is_theme_color: true,
                variable: Some(variable),
            }
        }
        None => ParsedThemeColor {
            color: color.to_owned(),
            value: color.to_owned(),
            shade: None,
            is_theme_color: false,
            variable: None,
        },
    }
}
