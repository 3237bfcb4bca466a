//! Class list composition.

use std::fmt;

/// An ordered, de-duplicated list of CSS class names.
///
/// Empty and whitespace-only entries are dropped, so optional classes can be
/// pushed unconditionally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassNames(Vec<String>);

impl ClassNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class (or a space-separated list of classes). No-op if present.
    pub fn push(&mut self, class: &str) {
        for part in class.split_whitespace() {
            if !self.contains(part) {
                self.0.push(part.to_owned());
            }
        }
    }

    /// Add a class when present.
    pub fn push_opt(&mut self, class: Option<&str>) {
        if let Some(class) = class {
            self.push(class);
        }
    }

    /// Builder form of [`push`](Self::push).
    pub fn with(mut self, class: &str) -> Self {
        self.push(class);
        self
    }

    pub fn contains(&self, class: &str) -> bool {
        self.0.iter().any(|c| c == class)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ClassNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

/// Join class names, skipping `None` and empty entries.
pub fn cx<'a>(classes: impl IntoIterator<Item = Option<&'a str>>) -> ClassNames {
    let mut out = ClassNames::new();
    for class in classes {
        out.push_opt(class);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cx_skips_empty_and_none() {
        let classes = cx([Some("a"), None, Some(""), Some("  "), Some("b")]);
        assert_eq!(classes.to_string(), "a b");
    }

    #[test]
    fn push_deduplicates_and_splits() {
        let mut classes = ClassNames::new();
        classes.push("a b");
        classes.push("b c");
        assert_eq!(classes.to_string(), "a b c");
        assert!(classes.contains("c"));
    }
}
