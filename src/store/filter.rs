//! Query filters deciding which options match the current search text.

use std::rc::Rc;

use super::option::OptionHandle;

/// A filter predicate over `(query, option)`.
pub type OptionFilter = Rc<dyn Fn(&str, &OptionHandle) -> bool>;

/// Case-insensitive substring match over label, value and keywords.
/// An empty or whitespace-only query matches every option.
pub fn default_option_filter(query: &str, option: &OptionHandle) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    option.label.to_lowercase().contains(&query)
        || option.value.to_lowercase().contains(&query)
        || option
            .keywords
            .iter()
            .any(|k| k.to_lowercase().contains(&query))
}
