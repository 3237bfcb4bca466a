//! Output tree of the presentational components.
//!
//! Components are pure functions from props to an [`Element`]: a tag, an
//! ordered attribute list, the resolved class list and inline style, and
//! children. Nothing is painted; hosts map elements onto their own tree.

use std::fmt::Write as _;

use crate::css::class_names::ClassNames;
use crate::css::inline::InlineStyle;
use crate::styles_api::ResolvedStyles;

/// A child of an element.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_owned())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub attributes: Vec<(String, String)>,
    pub class_name: ClassNames,
    pub style: InlineStyle,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attributes: Vec::new(),
            class_name: ClassNames::new(),
            style: InlineStyle::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing an earlier value for the same name.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(existing) => existing.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Set an attribute only when a value is present.
    pub fn attr_opt(self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Boolean data attribute: rendered as `name="true"` when set, omitted
    /// otherwise.
    pub fn flag(self, name: impl Into<String>, on: bool) -> Self {
        if on {
            self.attr(name, "true")
        } else {
            self
        }
    }

    /// Append attributes in order.
    pub fn attrs<N, V>(mut self, attrs: impl IntoIterator<Item = (N, V)>) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        for (name, value) in attrs {
            self.set_attr(name, value);
        }
        self
    }

    /// Apply the output of `get_styles`.
    pub fn styles(mut self, resolved: ResolvedStyles) -> Self {
        for class in resolved.class_name.iter() {
            self.class_name.push(class);
        }
        self.style.extend(&resolved.style);
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = impl Into<Node>>) -> Self {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.get_attr(name).is_some()
    }

    /// Child elements, skipping text nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|child| match child {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// Depth-first search for every element carrying `class`.
    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_by_class(class, &mut found);
        found
    }

    fn collect_by_class<'a>(&'a self, class: &str, found: &mut Vec<&'a Element>) {
        if self.class_name.contains(class) {
            found.push(self);
        }
        for child in self.child_elements() {
            child.collect_by_class(class, found);
        }
    }

    /// Concatenated text content of the subtree.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            match child {
                Node::Text(text) => out.push_str(text),
                Node::Element(e) => out.push_str(&e.text_content()),
            }
        }
        out
    }

    /// Indented HTML-like markup, one element per line. Elements whose only
    /// child is text are kept on one line.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out, 0);
        out
    }

    fn write_markup(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        let _ = write!(out, "{indent}<{}", self.tag);
        if !self.class_name.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape(&self.class_name.to_string()));
        }
        if !self.style.is_empty() {
            let _ = write!(out, " style=\"{}\"", escape(&self.style.to_string()));
        }
        for (name, value) in &self.attributes {
            let _ = write!(out, " {name}=\"{}\"", escape(value));
        }

        match self.children.as_slice() {
            [] => {
                let _ = writeln!(out, "></{}>", self.tag);
            }
            [Node::Text(text)] => {
                let _ = writeln!(out, ">{}</{}>", escape(text), self.tag);
            }
            children => {
                out.push_str(">\n");
                for child in children {
                    match child {
                        Node::Element(e) => e.write_markup(out, depth + 1),
                        Node::Text(text) => {
                            let _ = writeln!(out, "{indent}  {}", escape(text));
                        }
                    }
                }
                let _ = writeln!(out, "{indent}</{}>", self.tag);
            }
        }
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}
