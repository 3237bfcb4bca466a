//! Styles API metadata: which parts and CSS variables each component exposes.
//!
//! Lookup goes through the closed [`ComponentKind`] enum. Names that are not
//! part of the kit are rejected by `FromStr` rather than resolving to an
//! empty table.

use std::fmt;
use std::str::FromStr;

/// Error for a component name the kit does not know.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown component `{0}`")]
pub struct UnknownComponent(pub String);

/// Every component that publishes styles API metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Popover,
    Menu,
    Combobox,
    Spotlight,
    Group,
    YearsList,
    InputPlaceholder,
    Slider,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 8] = [
        ComponentKind::Popover,
        ComponentKind::Menu,
        ComponentKind::Combobox,
        ComponentKind::Spotlight,
        ComponentKind::Group,
        ComponentKind::YearsList,
        ComponentKind::InputPlaceholder,
        ComponentKind::Slider,
    ];

    /// Component name as used in static class names and theme overrides.
    pub fn name(self) -> &'static str {
        match self {
            ComponentKind::Popover => "Popover",
            ComponentKind::Menu => "Menu",
            ComponentKind::Combobox => "Combobox",
            ComponentKind::Spotlight => "Spotlight",
            ComponentKind::Group => "Group",
            ComponentKind::YearsList => "YearsList",
            ComponentKind::InputPlaceholder => "InputPlaceholder",
            ComponentKind::Slider => "Slider",
        }
    }

    /// The part that receives `class_name`, `style` and the CSS variables.
    pub fn root_selector(self) -> &'static str {
        match self {
            ComponentKind::Popover | ComponentKind::Menu | ComponentKind::Combobox => "dropdown",
            ComponentKind::Spotlight | ComponentKind::Group | ComponentKind::Slider => "root",
            ComponentKind::YearsList => "yearsList",
            ComponentKind::InputPlaceholder => "placeholder",
        }
    }

    /// Full styles API table for this component.
    pub fn styles_api(self) -> StylesApiData {
        styles_api(self)
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ComponentKind {
    type Err = UnknownComponent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComponentKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnknownComponent(s.to_owned()))
    }
}

/// A named sub-part of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selector {
    pub name: &'static str,
    pub description: &'static str,
}

/// A CSS custom property exposed on one of the component's parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CssVariable {
    pub selector: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// Styles API table of one component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylesApiData {
    pub component: ComponentKind,
    pub selectors: Vec<Selector>,
    pub vars: Vec<CssVariable>,
}

impl StylesApiData {
    pub fn has_selector(&self, name: &str) -> bool {
        self.selectors.iter().any(|s| s.name == name)
    }

    pub fn selector(&self, name: &str) -> Option<&Selector> {
        self.selectors.iter().find(|s| s.name == name)
    }

    /// Variables declared on `selector`.
    pub fn vars_for<'a>(&'a self, selector: &'a str) -> impl Iterator<Item = &'a CssVariable> + 'a {
        self.vars.iter().filter(move |v| v.selector == selector)
    }

    pub fn has_var(&self, name: &str) -> bool {
        self.vars.iter().any(|v| v.name == name)
    }
}

fn selectors(entries: &[(&'static str, &'static str)]) -> Vec<Selector> {
    entries
        .iter()
        .map(|&(name, description)| Selector { name, description })
        .collect()
}

fn vars(selector: &'static str, entries: &[(&'static str, &'static str)]) -> Vec<CssVariable> {
    entries
        .iter()
        .map(|&(name, description)| CssVariable {
            selector,
            name,
            description,
        })
        .collect()
}

const POPOVER_SELECTORS: &[(&str, &str)] = &[
    ("dropdown", "Dropdown element"),
    ("arrow", "Dropdown arrow"),
    ("overlay", "Overlay element"),
];

fn styles_api(kind: ComponentKind) -> StylesApiData {
    let (selector_list, var_list) = match kind {
        ComponentKind::Popover => (
            selectors(POPOVER_SELECTORS),
            vars(
                "dropdown",
                &[
                    ("--popover-radius", "Controls dropdown border-radius"),
                    ("--popover-shadow", "Controls dropdown box-shadow"),
                ],
            ),
        ),
        ComponentKind::Menu => {
            let mut list = selectors(POPOVER_SELECTORS);
            list.extend(selectors(&[
                ("divider", "`Menu.Divider` root element"),
                ("label", "`Menu.Label` root element"),
                ("item", "`Menu.Item` root element"),
                ("itemLabel", "Label of `Menu.Item`"),
                ("itemSection", "Left and right sections of `Menu.Item`"),
            ]));
            (list, Vec::new())
        }
        ComponentKind::Combobox => (
            selectors(&[
                ("dropdown", "Dropdown element"),
                ("options", "`Combobox.Options` root element"),
                ("option", "`Combobox.Option` root element"),
                ("search", "`Combobox.Search` input"),
                ("empty", "`Combobox.Empty` root element"),
                ("header", "`Combobox.Header` root element"),
                ("footer", "`Combobox.Footer` root element"),
                ("group", "`Combobox.Group` root element"),
                ("groupLabel", "Label of `Combobox.Group`"),
            ]),
            vars(
                "dropdown",
                &[
                    ("--combobox-padding", "Controls dropdown padding"),
                    ("--combobox-option-fz", "Controls option font-size"),
                    ("--combobox-option-padding", "Controls option padding"),
                ],
            ),
        ),
        ComponentKind::Spotlight => (
            selectors(&[
                ("root", "Root element"),
                ("overlay", "Overlay element"),
                ("content", "Modal content"),
                ("body", "Modal body"),
                ("search", "Search input"),
                ("actionsList", "Wrapper around actions and groups"),
                ("action", "`Spotlight.Action` root element"),
                ("actionBody", "Body of the default action"),
                ("actionLabel", "Label of the default action"),
                ("actionDescription", "Description of the default action"),
                ("actionSection", "Left and right sections of the default action"),
                ("actionsGroup", "`Spotlight.ActionsGroup` root element"),
                ("empty", "`Spotlight.Empty` root element"),
                ("footer", "`Spotlight.Footer` root element"),
            ]),
            vars(
                "root",
                &[
                    ("--spotlight-max-height", "Controls max-height of the actions list"),
                    ("--spotlight-radius", "Controls border-radius of the content"),
                ],
            ),
        ),
        ComponentKind::Group => (
            selectors(&[("root", "Root element")]),
            vars(
                "root",
                &[
                    ("--group-gap", "Controls `gap` property"),
                    ("--group-align", "Controls `align-items` property"),
                    ("--group-justify", "Controls `justify-content` property"),
                    ("--group-wrap", "Controls `flex-wrap` property"),
                    (
                        "--group-child-width",
                        "Controls max-width of child elements when `grow` is set",
                    ),
                ],
            ),
        ),
        ComponentKind::YearsList => (
            selectors(&[
                ("yearsList", "Years list table element"),
                ("yearsListRow", "Years list row element"),
                ("yearsListCell", "Years list cell element"),
                ("yearsListControl", "Button used to pick a year"),
            ]),
            vars(
                "yearsList",
                &[
                    ("--yl-control-size", "Controls size of year controls"),
                    ("--yl-fz", "Controls font-size of year controls"),
                    ("--yl-control-selected-bg", "Background of the selected year"),
                    ("--yl-control-selected-color", "Text color of the selected year"),
                    ("--yl-control-selected-bg-hover", "Hover background of the selected year"),
                    ("--yl-control-range-bg", "Background of years in range"),
                    ("--yl-control-range-bg-hover", "Hover background of years in range"),
                ],
            ),
        ),
        ComponentKind::InputPlaceholder => (
            selectors(&[("placeholder", "Placeholder text element")]),
            Vec::new(),
        ),
        ComponentKind::Slider => (
            selectors(&[
                ("root", "Root element"),
                ("label", "Thumb label"),
                ("thumb", "Thumb element"),
                ("trackContainer", "Wrapper around track"),
                ("track", "Slider track"),
                ("bar", "Track filled part"),
                ("markWrapper", "Wrapper around a mark"),
                ("mark", "Mark displayed on the track"),
                ("markLabel", "Label of a mark"),
            ]),
            vars(
                "root",
                &[
                    ("--slider-size", "Controls track height"),
                    ("--slider-color", "Controls filled track, thumb and marks background"),
                    ("--slider-thumb-size", "Controls thumb width and height"),
                    ("--slider-radius", "Controls border-radius of track and thumb"),
                ],
            ),
        ),
    };

    StylesApiData {
        component: kind,
        selectors: selector_list,
        vars: var_list,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for kind in ComponentKind::ALL {
            assert_eq!(kind.name().parse::<ComponentKind>(), Ok(kind));
        }
    }

    #[test]
    fn unknown_component_is_rejected() {
        assert_eq!(
            "Carousel".parse::<ComponentKind>(),
            Err(UnknownComponent("Carousel".into()))
        );
    }

    #[test]
    fn root_selector_is_always_declared() {
        for kind in ComponentKind::ALL {
            let data = kind.styles_api();
            assert!(data.has_selector(kind.root_selector()), "{kind}");
        }
    }

    #[test]
    fn vars_reference_declared_selectors() {
        for kind in ComponentKind::ALL {
            let data = kind.styles_api();
            for var in &data.vars {
                assert!(data.has_selector(var.selector), "{kind}: {}", var.name);
                assert!(var.name.starts_with("--"));
            }
        }
    }

    #[test]
    fn menu_extends_popover() {
        let menu = ComponentKind::Menu.styles_api();
        assert!(menu.has_selector("dropdown"));
        assert!(menu.has_selector("arrow"));
        assert_eq!(
            menu.selector("itemLabel").map(|s| s.description),
            Some("Label of `Menu.Item`")
        );
        assert!(menu.vars.is_empty());
    }

    #[test]
    fn years_list_vars() {
        let data = ComponentKind::YearsList.styles_api();
        assert_eq!(data.vars_for("yearsList").count(), 7);
        assert!(data.has_var("--yl-fz"));
        assert_eq!(data.vars_for("yearsListCell").count(), 0);
    }
}
