//! Configurator demo: control state and the code sample it produces.

use log::{debug, warn};

use super::control::{Control, ControlKind, ControlValue};

/// Placeholder in a code sample replaced by the rendered props.
pub const PROPS_PLACEHOLDER: &str = "{{props}}";

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum DemoError {
    #[error("no control for prop `{0}`")]
    UnknownProp(String),

    #[error("{kind} control `{prop}` cannot take `{value}`")]
    InvalidValue {
        prop: String,
        kind: ControlKind,
        value: String,
    },
}

/// A code sample plus the controls editing its props.
#[derive(Debug, Clone, PartialEq)]
pub struct Configurator {
    code: String,
    controls: Vec<Control>,
    state: Vec<(String, ControlValue)>,
}

impl Configurator {
    /// State starts at every control's initial value, in control order.
    pub fn new(code: impl Into<String>, controls: Vec<Control>) -> Self {
        let state = initial_state(&controls);
        Self {
            code: code.into(),
            controls,
            state,
        }
    }

    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    /// Current prop values, in control order. These are the props handed to
    /// the demo component.
    pub fn state(&self) -> &[(String, ControlValue)] {
        &self.state
    }

    pub fn value(&self, prop: &str) -> Option<&ControlValue> {
        self.state.iter().find(|(p, _)| p == prop).map(|(_, v)| v)
    }

    /// Update one prop. Unknown props and values the control cannot produce
    /// are rejected and leave the state unchanged.
    pub fn set(&mut self, prop: &str, value: impl Into<ControlValue>) -> Result<(), DemoError> {
        let value = value.into();
        let Some(control) = self.controls.iter().find(|c| c.prop == prop) else {
            warn!("configurator: ignoring unknown prop `{prop}`");
            return Err(DemoError::UnknownProp(prop.to_owned()));
        };
        if !control.accepts(&value) {
            return Err(DemoError::InvalidValue {
                prop: prop.to_owned(),
                kind: control.kind,
                value: value.to_string(),
            });
        }

        debug!("configurator: {prop} = {value}");
        if let Some(slot) = self.state.iter_mut().find(|(p, _)| p == prop) {
            slot.1 = value;
        }
        Ok(())
    }

    pub fn reset(&mut self) {
        self.state = initial_state(&self.controls);
    }

    /// The code sample with the non-default props injected.
    pub fn code(&self) -> String {
        inject_props(&clear_props(&self.controls, &self.state), &self.code)
    }
}

fn initial_state(controls: &[Control]) -> Vec<(String, ControlValue)> {
    controls
        .iter()
        .map(|c| (c.prop.clone(), c.initial_value.clone()))
        .collect()
}

/// Drop props whose value equals the control's library default.
pub fn clear_props(controls: &[Control], state: &[(String, ControlValue)]) -> Vec<(String, ControlValue)> {
    state
        .iter()
        .filter(|(prop, value)| {
            controls
                .iter()
                .find(|c| &c.prop == prop)
                .map_or(true, |c| c.library_value != *value)
        })
        .cloned()
        .collect()
}

/// Render one prop as JSX: `grow`, `grow={false}`, `justify="center"`,
/// `gap={12}`.
fn render_prop(prop: &str, value: &ControlValue) -> String {
    match value {
        ControlValue::Bool(true) => prop.to_owned(),
        ControlValue::Text(text) => format!("{prop}=\"{text}\""),
        other => format!("{prop}={{{other}}}"),
    }
}

/// Replace every `{{props}}` in `code` with the rendered props, each
/// preceded by a space. No props renders as the empty string.
pub fn inject_props(props: &[(String, ControlValue)], code: &str) -> String {
    let rendered: String = props
        .iter()
        .map(|(prop, value)| format!(" {}", render_prop(prop, value)))
        .collect();
    code.replace(PROPS_PLACEHOLDER, &rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::SizeToken;
    use pretty_assertions::assert_eq;

    const CODE: &str = "<Group{{props}}>\n  <Button />\n</Group>";

    fn controls() -> Vec<Control> {
        vec![
            Control::segmented("justify", ["flex-start", "center", "flex-end"], "center", "flex-start"),
            Control::size("gap", SizeToken::Md, SizeToken::Md),
            Control::boolean("grow", false, false),
        ]
    }

    // -----------------------------------------------------------------------
    // State
    // -----------------------------------------------------------------------

    #[test]
    fn state_starts_at_initial_values() {
        let demo = Configurator::new(CODE, controls());
        assert_eq!(
            demo.state().to_vec(),
            vec![
                ("justify".to_owned(), ControlValue::from("center")),
                ("gap".to_owned(), ControlValue::from("md")),
                ("grow".to_owned(), ControlValue::Bool(false)),
            ]
        );
    }

    #[test]
    fn set_updates_known_props() {
        let mut demo = Configurator::new(CODE, controls());
        demo.set("grow", true).unwrap();
        assert_eq!(demo.value("grow"), Some(&ControlValue::Bool(true)));
        demo.reset();
        assert_eq!(demo.value("grow"), Some(&ControlValue::Bool(false)));
    }

    #[test]
    fn set_rejects_unknown_prop_and_bad_value() {
        let mut demo = Configurator::new(CODE, controls());
        assert_eq!(demo.set("wrap", "wrap"), Err(DemoError::UnknownProp("wrap".into())));

        let err = demo.set("justify", "space-between").unwrap_err();
        assert_eq!(err.to_string(), "segmented control `justify` cannot take `space-between`");
        assert_eq!(demo.value("justify"), Some(&ControlValue::from("center")));
    }

    // -----------------------------------------------------------------------
    // Code generation
    // -----------------------------------------------------------------------

    #[test]
    fn clear_props_drops_library_defaults() {
        let controls = controls();
        let state = initial_state(&controls);
        assert_eq!(
            clear_props(&controls, &state),
            vec![("justify".to_owned(), ControlValue::from("center"))]
        );
    }

    #[test]
    fn inject_renders_each_value_kind() {
        let props = vec![
            ("grow".to_owned(), ControlValue::Bool(true)),
            ("wrap".to_owned(), ControlValue::Bool(false)),
            ("justify".to_owned(), ControlValue::from("center")),
            ("gap".to_owned(), ControlValue::Number(12.0)),
        ];
        assert_eq!(
            inject_props(&props, "<Group{{props}} />"),
            "<Group grow wrap={false} justify=\"center\" gap={12} />"
        );
    }

    #[test]
    fn inject_without_props_removes_placeholder() {
        assert_eq!(inject_props(&[], "<Group{{props}} />"), "<Group />");
    }

    #[test]
    fn code_follows_state() {
        let mut demo = Configurator::new(CODE, controls());
        demo.set("grow", true).unwrap();
        demo.set("gap", "xl").unwrap();
        insta::assert_snapshot!(demo.code(), @r###"
        <Group justify="center" gap="xl" grow>
          <Button />
        </Group>
        "###);
    }
}
