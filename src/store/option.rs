//! Option handles registered by rendered options.

use std::borrow::Borrow;
use std::fmt;

/// Stable identifier of a registered option.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OptionId(String);

impl OptionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OptionId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for OptionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for OptionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for OptionId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for OptionId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// What the store knows about one rendered option.
///
/// `top` and `height` are the option's row extent inside the scrollable
/// list, used for scrolling the active option into view and for mapping
/// pointer rows back to options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionHandle {
    pub id: OptionId,
    /// Value handed to the commit callback.
    pub value: String,
    /// Text searched by the default filter.
    pub label: String,
    pub keywords: Vec<String>,
    pub disabled: bool,
    pub top: i32,
    pub height: i32,
}

impl OptionHandle {
    /// A one-row option whose value and label are its id.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            value: id.clone(),
            label: id.clone(),
            id: OptionId(id),
            keywords: Vec::new(),
            disabled: false,
            top: 0,
            height: 1,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Place the option at `top` with the given row `height`.
    pub fn at(mut self, top: i32, height: i32) -> Self {
        self.top = top;
        self.height = height.max(0);
        self
    }

    /// One past the last row the option occupies.
    pub fn bottom(&self) -> i32 {
        self.top + self.height
    }

    /// Whether `row` (in content coordinates) falls inside the option.
    pub fn contains_row(&self, row: i32) -> bool {
        row >= self.top && row < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_defaults_value_and_label_to_id() {
        let handle = OptionHandle::new("apple");
        assert_eq!(handle.id, "apple");
        assert_eq!(handle.value, "apple");
        assert_eq!(handle.label, "apple");
        assert!(!handle.disabled);
        assert_eq!((handle.top, handle.height), (0, 1));
    }

    #[test]
    fn rows() {
        let handle = OptionHandle::new("a").at(4, 2);
        assert_eq!(handle.bottom(), 6);
        assert!(!handle.contains_row(3));
        assert!(handle.contains_row(4));
        assert!(handle.contains_row(5));
        assert!(!handle.contains_row(6));
    }

    #[test]
    fn negative_height_is_clamped() {
        assert_eq!(OptionHandle::new("a").at(0, -3).height, 0);
    }
}
