//! `Group`: a horizontal flex container.

use super::element::{Element, Node};
use crate::css::inline::InlineStyle;
use crate::styles_api::{ComponentKind, StylesOverrides, StylesResolver};
use crate::theme::{get_spacing, Size, SizeToken, Theme};

#[derive(Debug, Clone, PartialEq)]
pub struct GroupProps {
    /// `justify-content`.
    pub justify: String,
    /// `align-items`.
    pub align: String,
    /// `flex-wrap`; left to the stylesheet when `None`.
    pub wrap: Option<String>,
    pub gap: Size,
    /// Give every child `flex-grow: 1`.
    pub grow: bool,
    /// With `grow`, cap each child at an equal share of the row.
    pub prevent_grow_overflow: bool,
    pub overrides: StylesOverrides,
}

impl Default for GroupProps {
    fn default() -> Self {
        Self {
            justify: "flex-start".to_owned(),
            align: "center".to_owned(),
            wrap: None,
            gap: Size::Token(SizeToken::Md),
            grow: false,
            prevent_grow_overflow: true,
            overrides: StylesOverrides::default(),
        }
    }
}

impl GroupProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_justify(mut self, justify: impl Into<String>) -> Self {
        self.justify = justify.into();
        self
    }

    pub fn with_align(mut self, align: impl Into<String>) -> Self {
        self.align = align.into();
        self
    }

    pub fn with_wrap(mut self, wrap: impl Into<String>) -> Self {
        self.wrap = Some(wrap.into());
        self
    }

    pub fn with_gap(mut self, gap: impl Into<Size>) -> Self {
        self.gap = gap.into();
        self
    }

    pub fn grow(mut self, grow: bool) -> Self {
        self.grow = grow;
        self
    }

    pub fn prevent_grow_overflow(mut self, prevent: bool) -> Self {
        self.prevent_grow_overflow = prevent;
        self
    }

    pub fn with_overrides(mut self, overrides: StylesOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// CSS variables of the root for `children_count` rendered children.
    pub fn vars(&self, children_count: usize) -> InlineStyle {
        let gap = get_spacing(&self.gap);
        let mut vars = InlineStyle::new();
        if self.grow && self.prevent_grow_overflow && children_count > 0 {
            let share = 100.0 / children_count as f64;
            vars.set(
                "--group-child-width",
                format!("calc({share}% - ({gap} - {gap} / {children_count}))"),
            );
        }
        vars.set("--group-gap", gap);
        vars.set("--group-align", self.align.as_str());
        vars.set("--group-justify", self.justify.as_str());
        vars.set_opt("--group-wrap", self.wrap.as_deref());
        vars
    }
}

/// Render a group. `None` children are dropped before counting, the way
/// conditional children disappear from the tree.
pub fn group(props: &GroupProps, theme: &Theme, children: impl IntoIterator<Item = Option<Node>>) -> Element {
    let children: Vec<Node> = children.into_iter().flatten().collect();
    let resolver = StylesResolver::new(ComponentKind::Group, theme).with_vars(props.vars(children.len()));

    Element::new("div")
        .styles(resolver.get_styles("root", &props.overrides))
        .flag("data-grow", props.grow)
        .children(children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> Option<Node> {
        Some(Node::from(s))
    }

    #[test]
    fn default_vars() {
        let vars = GroupProps::new().vars(2);
        assert_eq!(
            vars.to_string(),
            "--group-gap: var(--mantine-spacing-md); --group-align: center; --group-justify: flex-start"
        );
    }

    #[test]
    fn grow_sets_child_width() {
        let vars = GroupProps::new().grow(true).with_gap(SizeToken::Xs).vars(3);
        assert_eq!(
            vars.get("--group-child-width"),
            Some(
                "calc(33.333333333333336% - (var(--mantine-spacing-xs) - var(--mantine-spacing-xs) / 3))"
            )
        );
    }

    #[test]
    fn child_width_requires_prevent_overflow() {
        let vars = GroupProps::new().grow(true).prevent_grow_overflow(false).vars(3);
        assert_eq!(vars.get("--group-child-width"), None);
    }

    #[test]
    fn numeric_gap_and_wrap() {
        let vars = GroupProps::new().with_gap(20).with_wrap("wrap").vars(1);
        assert_eq!(vars.get("--group-gap"), Some("calc(1.25rem * var(--mantine-scale))"));
        assert_eq!(vars.get("--group-wrap"), Some("wrap"));
    }

    #[test]
    fn render_drops_empty_children() {
        let theme = Theme::default();
        let props = GroupProps::new().grow(true).with_gap(10);
        let el = group(&props, &theme, [text("a"), None, text("b")]);

        insta::assert_snapshot!(el.to_markup(), @r###"
        <div class="group-root mantine-Group-root" style="--group-child-width: calc(50% - (calc(0.625rem * var(--mantine-scale)) - calc(0.625rem * var(--mantine-scale)) / 2)); --group-gap: calc(0.625rem * var(--mantine-scale)); --group-align: center; --group-justify: flex-start" data-grow="true">
          a
          b
        </div>
        "###);
    }

    #[test]
    fn caller_vars_override_resolved() {
        let theme = Theme::default();
        let props = GroupProps::new().with_overrides(
            StylesOverrides::new().with_vars(InlineStyle::from_pairs([("--group-gap", "3px")])),
        );
        let el = group(&props, &theme, [text("a")]);
        assert_eq!(el.style.get("--group-gap"), Some("3px"));
        assert!(!el.has_attr("data-grow"));
    }
}
