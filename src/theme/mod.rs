//! Theme: palette, scale and per-component style overrides.
//!
//! - [`size`]: semantic size tokens, `rem`, and the `get_size` family.
//! - [`color`]: color parsing, `darken`, `rgba`, theme color lookup.
//! - [`variant`]: variant color resolution (filled, light, outline, ...).

pub mod color;
pub mod size;
pub mod variant;

use std::collections::HashMap;

use crate::css::inline::InlineStyle;

pub use color::{darken, parse_theme_color, rgba, to_rgba, ParsedThemeColor, Rgba};
pub use size::{get_font_size, get_radius, get_size, get_spacing, rem, Size, SizeToken};
pub use variant::{get_variant_colors, variant_color_resolver, UnknownVariant, Variant, VariantColors};

/// Ten shades of one palette color, lightest first.
pub type ColorTuple = [String; 10];

/// Theme-level overrides for one component, keyed by selector (part name).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentTheme {
    pub class_names: HashMap<String, String>,
    pub styles: HashMap<String, InlineStyle>,
}

impl ComponentTheme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class name for a part (builder).
    pub fn with_class_name(mut self, part: impl Into<String>, class: impl Into<String>) -> Self {
        self.class_names.insert(part.into(), class.into());
        self
    }

    /// Add inline styles for a part (builder).
    pub fn with_styles(mut self, part: impl Into<String>, style: InlineStyle) -> Self {
        self.styles.insert(part.into(), style);
        self
    }
}

/// Design tokens shared by every component.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Key into `colors` used when a component gets no explicit color.
    pub primary_color: String,
    /// Shade index of the primary color used for filled surfaces.
    pub primary_shade: u8,
    pub colors: HashMap<String, ColorTuple>,
    pub white: String,
    pub black: String,
    /// Prefix for static class names: `{prefix}-{Component}-{part}`.
    pub class_prefix: String,
    /// Per-component overrides, keyed by component name (`"Spotlight"`).
    pub components: HashMap<String, ComponentTheme>,
}

fn tuple(shades: [&str; 10]) -> ColorTuple {
    shades.map(str::to_owned)
}

impl Default for Theme {
    fn default() -> Self {
        let mut colors = HashMap::new();
        colors.insert(
            "gray".to_owned(),
            tuple([
                "#f8f9fa", "#f1f3f5", "#e9ecef", "#dee2e6", "#ced4da", "#adb5bd", "#868e96",
                "#495057", "#343a40", "#212529",
            ]),
        );
        colors.insert(
            "red".to_owned(),
            tuple([
                "#fff5f5", "#ffe3e3", "#ffc9c9", "#ffa8a8", "#ff8787", "#ff6b6b", "#fa5252",
                "#f03e3e", "#e03131", "#c92a2a",
            ]),
        );
        colors.insert(
            "green".to_owned(),
            tuple([
                "#ebfbee", "#d3f9d8", "#b2f2bb", "#8ce99a", "#69db7c", "#51cf66", "#40c057",
                "#37b24d", "#2f9e44", "#2b8a3e",
            ]),
        );
        colors.insert(
            "blue".to_owned(),
            tuple([
                "#e7f5ff", "#d0ebff", "#a5d8ff", "#74c0fc", "#4dabf7", "#339af0", "#228be6",
                "#1c7ed6", "#1971c2", "#1864ab",
            ]),
        );

        Self {
            primary_color: "blue".to_owned(),
            primary_shade: 6,
            colors,
            white: "#fff".to_owned(),
            black: "#000".to_owned(),
            class_prefix: "mantine".to_owned(),
            components: HashMap::new(),
        }
    }
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the primary color (builder). Unknown palette keys still work; they
    /// resolve as raw CSS colors.
    pub fn with_primary_color(mut self, color: impl Into<String>) -> Self {
        self.primary_color = color.into();
        self
    }

    /// Add or replace a palette color (builder).
    pub fn with_color(mut self, name: impl Into<String>, shades: ColorTuple) -> Self {
        self.colors.insert(name.into(), shades);
        self
    }

    /// Register overrides for a component (builder).
    pub fn with_component(mut self, name: impl Into<String>, overrides: ComponentTheme) -> Self {
        self.components.insert(name.into(), overrides);
        self
    }

    /// Overrides registered for `component`, if any.
    pub fn component(&self, component: &str) -> Option<&ComponentTheme> {
        self.components.get(component)
    }

    /// Shade of a palette color, if the color and index exist.
    pub fn shade(&self, color: &str, shade: u8) -> Option<&str> {
        self.colors
            .get(color)
            .and_then(|tuple| tuple.get(shade as usize))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_has_blue_primary() {
        let theme = Theme::default();
        assert_eq!(theme.primary_color, "blue");
        assert_eq!(theme.shade("blue", 6), Some("#228be6"));
        assert_eq!(theme.shade("blue", 10), None);
        assert_eq!(theme.shade("teal", 0), None);
    }

    #[test]
    fn component_overrides_lookup() {
        let theme = Theme::new().with_component(
            "Group",
            ComponentTheme::new().with_class_name("root", "my-group"),
        );
        let overrides = theme.component("Group").unwrap();
        assert_eq!(overrides.class_names.get("root").map(String::as_str), Some("my-group"));
        assert!(theme.component("Menu").is_none());
    }
}
