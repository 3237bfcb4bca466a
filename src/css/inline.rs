//! Ordered inline style map.
//!
//! [`InlineStyle`] is what `get_styles` hands to the rendering layer: an
//! insertion-ordered list of declarations where re-setting a property
//! overwrites its value in place (object-spread semantics).

use std::fmt;
use std::str::FromStr;

use crate::css::parser::{parse_declarations, ParseError};

/// A single `property: value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDeclaration {
    pub property: String,
    pub value: String,
    pub important: bool,
}

impl StyleDeclaration {
    /// Whether this declares a CSS custom property (`--name`).
    pub fn is_custom_property(&self) -> bool {
        self.property.starts_with("--")
    }
}

/// Insertion-ordered set of style declarations keyed by property name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle {
    declarations: Vec<StyleDeclaration>,
}

impl InlineStyle {
    /// Create an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a style from `(property, value)` pairs, later pairs winning.
    pub fn from_pairs<P, V>(pairs: impl IntoIterator<Item = (P, V)>) -> Self
    where
        P: Into<String>,
        V: Into<String>,
    {
        let mut style = Self::new();
        for (property, value) in pairs {
            style.set(property, value);
        }
        style
    }

    /// Parse a declaration list such as `"color: red; --yl-fz: 14px"`.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        parse_declarations(input)
    }

    /// Set a property, overwriting in place if it already exists.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.set_with_priority(property, value, false);
    }

    /// Set a property with an explicit `!important` flag.
    pub fn set_with_priority(
        &mut self,
        property: impl Into<String>,
        value: impl Into<String>,
        important: bool,
    ) {
        let property = property.into();
        let value = value.into();
        match self.declarations.iter_mut().find(|d| d.property == property) {
            Some(existing) => {
                existing.value = value;
                existing.important = important;
            }
            None => self.declarations.push(StyleDeclaration {
                property,
                value,
                important,
            }),
        }
    }

    /// Set a property only when a value is present. `None` leaves the style
    /// untouched, the way `undefined` entries vanish from a style object.
    pub fn set_opt(&mut self, property: impl Into<String>, value: Option<impl Into<String>>) {
        if let Some(value) = value {
            self.set(property, value);
        }
    }

    /// Look up a property's value.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|d| d.property == property)
            .map(|d| d.value.as_str())
    }

    /// Remove a property, returning its value.
    pub fn remove(&mut self, property: &str) -> Option<String> {
        let idx = self.declarations.iter().position(|d| d.property == property)?;
        Some(self.declarations.remove(idx).value)
    }

    /// Merge `other` on top of `self`: its declarations win.
    pub fn extend(&mut self, other: &InlineStyle) {
        for decl in &other.declarations {
            self.set_with_priority(decl.property.clone(), decl.value.clone(), decl.important);
        }
    }

    /// Non-mutating version of [`extend`](Self::extend).
    pub fn merged(&self, other: &InlineStyle) -> InlineStyle {
        let mut out = self.clone();
        out.extend(other);
        out
    }

    /// Iterate declarations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &StyleDeclaration> {
        self.declarations.iter()
    }

    /// Only the custom property declarations.
    pub fn custom_properties(&self) -> impl Iterator<Item = &StyleDeclaration> {
        self.declarations.iter().filter(|d| d.is_custom_property())
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl FromStr for InlineStyle {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Renders as a `style` attribute value: `a: 1; b: 2 !important`.
impl fmt::Display for InlineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, decl) in self.declarations.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", decl.property, decl.value)?;
            if decl.important {
                f.write_str(" !important")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn set_overwrites_in_place() {
        let mut style = InlineStyle::new();
        style.set("a", "1");
        style.set("b", "2");
        style.set("a", "3");
        assert_eq!(style.to_string(), "a: 3; b: 2");
    }

    #[test]
    fn set_opt_skips_none() {
        let mut style = InlineStyle::new();
        style.set_opt("--group-wrap", None::<String>);
        style.set_opt("--group-gap", Some("1rem"));
        assert_eq!(style.len(), 1);
        assert_eq!(style.get("--group-gap"), Some("1rem"));
    }

    #[test]
    fn extend_lets_other_win() {
        let base = InlineStyle::from_pairs([("color", "red"), ("--x", "1")]);
        let over = InlineStyle::from_pairs([("--x", "2"), ("gap", "0")]);
        assert_eq!(base.merged(&over).to_string(), "color: red; --x: 2; gap: 0");
    }

    #[test]
    fn remove_returns_value() {
        let mut style = InlineStyle::from_pairs([("color", "red")]);
        assert_eq!(style.remove("color"), Some("red".to_string()));
        assert_eq!(style.remove("color"), None);
        assert!(style.is_empty());
    }

    #[test]
    fn custom_properties_filter() {
        let style: InlineStyle = "color: red; --yl-fz: 1rem".parse().unwrap();
        let names: Vec<&str> = style.custom_properties().map(|d| d.property.as_str()).collect();
        assert_eq!(names, vec!["--yl-fz"]);
    }

    #[test]
    fn display_includes_important() {
        let style: InlineStyle = "color: red !important".parse().unwrap();
        assert_eq!(style.to_string(), "color: red !important");
    }
}
