//! Configurator controls: the closed set of prop editors a demo can show.

use std::fmt;
use std::str::FromStr;

use crate::theme::SizeToken;

/// Error for a control type tag outside the known set.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown control type `{0}`")]
pub struct UnknownControl(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    /// On/off switch.
    Boolean,
    /// One of a few inline choices.
    Segmented,
    /// One of a longer list of choices.
    Select,
    /// One of the theme size tokens.
    Size,
    /// A theme color name or CSS color.
    Color,
    /// Free text.
    String,
}

impl ControlKind {
    pub const ALL: [ControlKind; 6] = [
        ControlKind::Boolean,
        ControlKind::Segmented,
        ControlKind::Select,
        ControlKind::Size,
        ControlKind::Color,
        ControlKind::String,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ControlKind::Boolean => "boolean",
            ControlKind::Segmented => "segmented",
            ControlKind::Select => "select",
            ControlKind::Size => "size",
            ControlKind::Color => "color",
            ControlKind::String => "string",
        }
    }

    /// Whether values must come from the control's option list.
    pub fn has_options(self) -> bool {
        matches!(self, ControlKind::Segmented | ControlKind::Select | ControlKind::Size)
    }
}

impl fmt::Display for ControlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ControlKind {
    type Err = UnknownControl;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ControlKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownControl(s.to_owned()))
    }
}

/// A prop value held by the configurator.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlValue {
    Bool(bool),
    Text(String),
    Number(f64),
}

impl ControlValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ControlValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ControlValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ControlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlValue::Bool(b) => write!(f, "{b}"),
            ControlValue::Text(s) => f.write_str(s),
            ControlValue::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<bool> for ControlValue {
    fn from(value: bool) -> Self {
        ControlValue::Bool(value)
    }
}

impl From<&str> for ControlValue {
    fn from(value: &str) -> Self {
        ControlValue::Text(value.to_owned())
    }
}

impl From<String> for ControlValue {
    fn from(value: String) -> Self {
        ControlValue::Text(value)
    }
}

impl From<f64> for ControlValue {
    fn from(value: f64) -> Self {
        ControlValue::Number(value)
    }
}

impl From<SizeToken> for ControlValue {
    fn from(value: SizeToken) -> Self {
        ControlValue::Text(value.as_str().to_owned())
    }
}

/// One prop editor of a configurator demo.
#[derive(Debug, Clone, PartialEq)]
pub struct Control {
    pub prop: String,
    pub kind: ControlKind,
    /// Value the demo starts with.
    pub initial_value: ControlValue,
    /// The component's own default; props equal to it are left out of the
    /// generated code.
    pub library_value: ControlValue,
    /// Choices for segmented, select and size controls.
    pub options: Vec<String>,
}

impl Control {
    pub fn new(
        kind: ControlKind,
        prop: impl Into<String>,
        initial_value: impl Into<ControlValue>,
        library_value: impl Into<ControlValue>,
    ) -> Self {
        let options = if kind == ControlKind::Size {
            SizeToken::ALL.iter().map(|t| t.as_str().to_owned()).collect()
        } else {
            Vec::new()
        };
        Self {
            prop: prop.into(),
            kind,
            initial_value: initial_value.into(),
            library_value: library_value.into(),
            options,
        }
    }

    pub fn boolean(prop: impl Into<String>, initial_value: bool, library_value: bool) -> Self {
        Self::new(ControlKind::Boolean, prop, initial_value, library_value)
    }

    pub fn segmented<I, S>(prop: impl Into<String>, options: I, initial_value: &str, library_value: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(ControlKind::Segmented, prop, initial_value, library_value).with_options(options)
    }

    pub fn select<I, S>(prop: impl Into<String>, options: I, initial_value: &str, library_value: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(ControlKind::Select, prop, initial_value, library_value).with_options(options)
    }

    pub fn size(prop: impl Into<String>, initial_value: SizeToken, library_value: SizeToken) -> Self {
        Self::new(ControlKind::Size, prop, initial_value, library_value)
    }

    pub fn color(prop: impl Into<String>, initial_value: &str, library_value: &str) -> Self {
        Self::new(ControlKind::Color, prop, initial_value, library_value)
    }

    pub fn string(prop: impl Into<String>, initial_value: &str, library_value: &str) -> Self {
        Self::new(ControlKind::String, prop, initial_value, library_value)
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Whether `value` is something this control could produce.
    pub fn accepts(&self, value: &ControlValue) -> bool {
        match (self.kind, value) {
            (ControlKind::Boolean, ControlValue::Bool(_)) => true,
            (kind, ControlValue::Text(text)) if kind.has_options() => {
                self.options.iter().any(|o| o == text)
            }
            (ControlKind::Color | ControlKind::String, ControlValue::Text(_)) => true,
            _ => false,
        }
    }
}
