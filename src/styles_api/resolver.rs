//! `get_styles`: class list and inline style for one part of a component.
//!
//! Classes are composed in a fixed order:
//!
//! 1. library class `{component}-{part}` in kebab case (skipped when unstyled),
//! 2. static class `{prefix}-{Component}-{part}` for the component and each alias,
//! 3. theme class names registered for the part,
//! 4. caller class names for the part,
//! 5. caller `class_name`, root part only.
//!
//! Styles merge in the same spirit, later entries overwriting earlier ones:
//! theme styles, caller styles for the part, then on the root part the
//! component's resolved CSS variables, caller variables and caller `style`.

use std::collections::HashMap;

use log::trace;

use super::data::{ComponentKind, StylesApiData};
use crate::css::class_names::ClassNames;
use crate::css::inline::InlineStyle;
use crate::theme::Theme;

// ---------------------------------------------------------------------------
// StylesOverrides
// ---------------------------------------------------------------------------

/// Per-instance styling props supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StylesOverrides {
    /// Extra classes keyed by part name.
    pub class_names: HashMap<String, String>,
    /// Extra inline styles keyed by part name.
    pub styles: HashMap<String, InlineStyle>,
    /// Class applied to the root part.
    pub class_name: Option<String>,
    /// Inline style applied to the root part, after everything else.
    pub style: InlineStyle,
    /// CSS variables applied to the root part, overriding resolved ones.
    pub vars: InlineStyle,
    /// Drop library classes; static and caller classes are still emitted.
    pub unstyled: bool,
}

impl StylesOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_class_names(mut self, part: impl Into<String>, class: impl Into<String>) -> Self {
        self.class_names.insert(part.into(), class.into());
        self
    }

    pub fn with_styles(mut self, part: impl Into<String>, style: InlineStyle) -> Self {
        self.styles.insert(part.into(), style);
        self
    }

    pub fn with_class_name(mut self, class: impl Into<String>) -> Self {
        self.class_name = Some(class.into());
        self
    }

    pub fn with_style(mut self, style: InlineStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_vars(mut self, vars: InlineStyle) -> Self {
        self.vars = vars;
        self
    }

    pub fn unstyled(mut self, unstyled: bool) -> Self {
        self.unstyled = unstyled;
        self
    }
}

// ---------------------------------------------------------------------------
// ResolvedStyles
// ---------------------------------------------------------------------------

/// Output of [`StylesResolver::get_styles`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedStyles {
    pub class_name: ClassNames,
    pub style: InlineStyle,
}

impl ResolvedStyles {
    pub fn is_empty(&self) -> bool {
        self.class_name.is_empty() && self.style.is_empty()
    }
}

// ---------------------------------------------------------------------------
// StylesResolver
// ---------------------------------------------------------------------------

/// Resolves parts of one component against a theme.
#[derive(Debug, Clone)]
pub struct StylesResolver<'a> {
    kind: ComponentKind,
    theme: &'a Theme,
    name: &'static str,
    data: StylesApiData,
    aliases: Vec<&'static str>,
    vars: InlineStyle,
}

impl<'a> StylesResolver<'a> {
    pub fn new(kind: ComponentKind, theme: &'a Theme) -> Self {
        Self {
            kind,
            theme,
            name: kind.name(),
            data: kind.styles_api(),
            aliases: Vec::new(),
            vars: InlineStyle::new(),
        }
    }

    /// Replace the component name used for static classes and theme lookup.
    /// Library classes keep the component's own name.
    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Emit static classes for another component name too. `Menu` uses this
    /// to keep the `Popover` classes on its dropdown.
    pub fn with_alias(mut self, name: &'static str) -> Self {
        if !self.aliases.contains(&name) {
            self.aliases.push(name);
        }
        self
    }

    /// CSS variables computed by the component from its props.
    pub fn with_vars(mut self, vars: InlineStyle) -> Self {
        self.vars = vars;
        self
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    pub fn data(&self) -> &StylesApiData {
        &self.data
    }

    pub fn get_styles(&self, part: &str, overrides: &StylesOverrides) -> ResolvedStyles {
        if !self.data.has_selector(part) {
            trace!("{}: unknown styles part `{part}`", self.kind);
            return ResolvedStyles::default();
        }

        let is_root = part == self.kind.root_selector();
        let component_theme = self.theme.component(self.name);

        let mut class_name = ClassNames::new();
        if !overrides.unstyled {
            class_name.push(&library_class(self.kind, part));
        }
        for name in std::iter::once(self.name).chain(self.aliases.iter().copied()) {
            class_name.push(&format!("{}-{name}-{part}", self.theme.class_prefix));
        }
        class_name.push_opt(
            component_theme
                .and_then(|t| t.class_names.get(part))
                .map(String::as_str),
        );
        class_name.push_opt(overrides.class_names.get(part).map(String::as_str));
        if is_root {
            class_name.push_opt(overrides.class_name.as_deref());
        }

        let mut style = InlineStyle::new();
        if let Some(theme_style) = component_theme.and_then(|t| t.styles.get(part)) {
            style.extend(theme_style);
        }
        if let Some(part_style) = overrides.styles.get(part) {
            style.extend(part_style);
        }
        if is_root {
            style.extend(&self.vars);
            style.extend(&overrides.vars);
            style.extend(&overrides.style);
        }

        ResolvedStyles { class_name, style }
    }
}

/// `YearsList` + `yearsListControl` -> `years-list-years-list-control`.
fn library_class(kind: ComponentKind, part: &str) -> String {
    format!("{}-{}", kebab(kind.name()), kebab(part))
}

fn kebab(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if i > 0 {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ComponentTheme;
    use pretty_assertions::assert_eq;

    // -----------------------------------------------------------------------
    // Class names
    // -----------------------------------------------------------------------

    #[test]
    fn kebab_case() {
        assert_eq!(kebab("YearsList"), "years-list");
        assert_eq!(kebab("yearsListControl"), "years-list-control");
        assert_eq!(kebab("root"), "root");
    }

    #[test]
    fn default_classes() {
        let theme = Theme::default();
        let resolver = StylesResolver::new(ComponentKind::Group, &theme);
        let styles = resolver.get_styles("root", &StylesOverrides::new());
        assert_eq!(styles.class_name.to_string(), "group-root mantine-Group-root");
        assert!(styles.style.is_empty());
    }

    #[test]
    fn unstyled_drops_library_class_only() {
        let theme = Theme::default();
        let resolver = StylesResolver::new(ComponentKind::Group, &theme);
        let styles = resolver.get_styles("root", &StylesOverrides::new().unstyled(true));
        assert_eq!(styles.class_name.to_string(), "mantine-Group-root");
    }

    #[test]
    fn class_order() {
        let theme = Theme::default().with_component(
            "Combobox",
            ComponentTheme::new().with_class_name("option", "theme-option"),
        );
        let resolver = StylesResolver::new(ComponentKind::Combobox, &theme);
        let overrides = StylesOverrides::new()
            .with_class_names("option", "caller-option")
            .with_class_name("root-only");

        let option = resolver.get_styles("option", &overrides);
        assert_eq!(
            option.class_name.to_string(),
            "combobox-option mantine-Combobox-option theme-option caller-option"
        );

        let dropdown = resolver.get_styles("dropdown", &overrides);
        assert!(dropdown.class_name.contains("root-only"));
    }

    #[test]
    fn aliases_add_static_classes() {
        let theme = Theme::default();
        let resolver = StylesResolver::new(ComponentKind::Menu, &theme).with_alias("Popover");
        let styles = resolver.get_styles("dropdown", &StylesOverrides::new());
        assert_eq!(
            styles.class_name.to_string(),
            "menu-dropdown mantine-Menu-dropdown mantine-Popover-dropdown"
        );
    }

    #[test]
    fn name_replaces_static_classes() {
        let theme = Theme::default();
        let resolver = StylesResolver::new(ComponentKind::YearsList, &theme).with_name("DecadeLevel");
        let styles = resolver.get_styles("yearsListRow", &StylesOverrides::new());
        assert_eq!(
            styles.class_name.to_string(),
            "years-list-years-list-row mantine-DecadeLevel-yearsListRow"
        );
    }

    #[test]
    fn custom_class_prefix() {
        let mut theme = Theme::default();
        theme.class_prefix = "kit".into();
        let resolver = StylesResolver::new(ComponentKind::Slider, &theme);
        let styles = resolver.get_styles("thumb", &StylesOverrides::new());
        assert!(styles.class_name.contains("kit-Slider-thumb"));
    }

    // -----------------------------------------------------------------------
    // Styles
    // -----------------------------------------------------------------------

    #[test]
    fn style_precedence() {
        let theme = Theme::default().with_component(
            "Group",
            ComponentTheme::new().with_styles(
                "root",
                InlineStyle::from_pairs([("color", "red"), ("margin", "0")]),
            ),
        );
        let resolver = StylesResolver::new(ComponentKind::Group, &theme)
            .with_vars(InlineStyle::from_pairs([("--group-gap", "1rem")]));
        let overrides = StylesOverrides::new()
            .with_styles("root", InlineStyle::from_pairs([("color", "blue")]))
            .with_vars(InlineStyle::from_pairs([("--group-gap", "2rem")]))
            .with_style(InlineStyle::from_pairs([("margin", "4px")]));

        let styles = resolver.get_styles("root", &overrides);
        assert_eq!(
            styles.style.to_string(),
            "color: blue; margin: 4px; --group-gap: 2rem"
        );
    }

    #[test]
    fn vars_only_on_root() {
        let theme = Theme::default();
        let resolver = StylesResolver::new(ComponentKind::YearsList, &theme)
            .with_vars(InlineStyle::from_pairs([("--yl-fz", "14px")]));
        let overrides = StylesOverrides::new().with_style(InlineStyle::from_pairs([("gap", "0")]));

        let root = resolver.get_styles("yearsList", &overrides);
        assert_eq!(root.style.get("--yl-fz"), Some("14px"));
        assert_eq!(root.style.get("gap"), Some("0"));

        let control = resolver.get_styles("yearsListControl", &overrides);
        assert!(control.style.is_empty());
    }

    #[test]
    fn unknown_part_is_empty() {
        let theme = Theme::default();
        let resolver = StylesResolver::new(ComponentKind::Spotlight, &theme);
        let overrides = StylesOverrides::new().with_class_names("nope", "x");
        let styles = resolver.get_styles("nope", &overrides);
        assert!(styles.is_empty());
        assert_eq!(styles, ResolvedStyles::default());
    }
}
