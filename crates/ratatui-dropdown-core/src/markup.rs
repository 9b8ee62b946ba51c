//! A minimal element tree for the dropdown's markup contract.
//!
//! The host application describes its form control as an [`Element`] (a host element holding a
//! `label` and a `select` with `option` children). The dropdown reads that tree once at attach
//! time and can serialize its generated presentation back out through [`Element::to_html`], so
//! apps and tests can inspect exactly which class markers and attributes are applied.
//!
//! This is not a DOM: there is no event dispatch, no selector engine and no CSS. Lookups are by
//! tag name only, in document order.

use std::fmt::Write as _;

/// Ordered, duplicate-free set of class names.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassList {
    names: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Returns `true` if the class was not present before.
    pub fn add(&mut self, name: &str) -> bool {
        if name.is_empty() || self.contains(name) {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    /// Returns `true` if the class was present before.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.names.len();
        self.names.retain(|n| n != name);
        before != self.names.len()
    }

    pub fn set(&mut self, name: &str, on: bool) {
        if on {
            self.add(name);
        } else {
            self.remove(name);
        }
    }

    /// Swaps `old` for `new` in place if `old` is present.
    pub fn rename(&mut self, old: &str, new: &str) {
        if old == new {
            return;
        }
        if let Some(pos) = self.names.iter().position(|n| n == old) {
            if self.contains(new) {
                self.names.remove(pos);
            } else {
                self.names[pos] = new.to_string();
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Parses a whitespace-separated `class` attribute value.
    pub fn parse(value: &str) -> Self {
        let mut list = Self::new();
        for name in value.split_whitespace() {
            list.add(name);
        }
        list
    }

    pub fn to_attr_value(&self) -> String {
        self.names.join(" ")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        }
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(s) => escape_text(s, out),
            Node::Element(e) => e.write_html(out),
        }
    }

    fn write_text(&self, out: &mut String) {
        match self {
            Node::Text(s) => out.push_str(s),
            Node::Element(e) => {
                for child in &e.children {
                    child.write_text(out);
                }
            }
        }
    }
}

/// An element with a tag, attributes (insertion ordered), a class list and child nodes.
///
/// `class` is never stored as a plain attribute; it always lives in [`Element::classes`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    classes: ClassList,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            classes: ClassList::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_class(mut self, name: &str) -> Self {
        self.classes.add(name);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        if name == "class" {
            self.classes = ClassList::parse(&value);
            return;
        }
        match self.attrs.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value,
            None => self.attrs.push((name.to_string(), value)),
        }
    }

    pub fn remove_attr(&mut self, name: &str) {
        if name == "class" {
            self.classes = ClassList::new();
            return;
        }
        self.attrs.retain(|(k, _)| k != name);
    }

    pub fn classes(&self) -> &ClassList {
        &self.classes
    }

    pub fn classes_mut(&mut self) -> &mut ClassList {
        &mut self.classes
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn push_child(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    /// Element children only, skipping text nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// First descendant with the given tag, depth-first in document order.
    pub fn find(&self, tag: &str) -> Option<&Element> {
        for child in self.child_elements() {
            if child.tag == tag {
                return Some(child);
            }
            if let Some(found) = child.find(tag) {
                return Some(found);
            }
        }
        None
    }

    pub fn find_mut(&mut self, tag: &str) -> Option<&mut Element> {
        for child in self.children.iter_mut() {
            let Node::Element(child) = child else {
                continue;
            };
            if child.tag == tag {
                return Some(child);
            }
            if let Some(found) = child.find_mut(tag) {
                return Some(found);
            }
        }
        None
    }

    /// All descendants with the given tag, in document order.
    pub fn find_all(&self, tag: &str) -> Vec<&Element> {
        let mut out = Vec::new();
        self.collect(tag, &mut out);
        out
    }

    fn collect<'a>(&'a self, tag: &str, out: &mut Vec<&'a Element>) {
        for child in self.child_elements() {
            if child.tag == tag {
                out.push(child);
            }
            child.collect(tag, out);
        }
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.write_text(&mut out);
        }
        out
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        if !self.classes.is_empty() {
            write_attr(out, "class", &self.classes.to_attr_value());
        }
        for (k, v) in &self.attrs {
            write_attr(out, k, v);
        }
        out.push('>');
        for child in &self.children {
            child.write_html(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    if value.is_empty() {
        return;
    }
    out.push_str("=\"");
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out.push('"');
}

fn escape_text(s: &str, out: &mut String) {
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_list_is_ordered_and_unique() {
        let mut c = ClassList::parse("a  b a");
        assert_eq!(c.to_attr_value(), "a b");
        assert!(!c.add("b"));
        assert!(c.remove("a"));
        assert!(!c.remove("a"));
        c.set("z", true);
        assert_eq!(c.iter().collect::<Vec<_>>(), vec!["b", "z"]);
        c.rename("b", "y");
        assert_eq!(c.to_attr_value(), "y z");
        c.rename("y", "z");
        assert_eq!(c.to_attr_value(), "z");
    }

    #[test]
    fn find_walks_in_document_order() {
        let root = Element::new("div")
            .with_child(Element::new("span").with_child(Element::new("label").with_text("inner")))
            .with_child(Element::new("label").with_text("outer"));
        assert_eq!(root.find("label").map(|e| e.text_content()), Some("inner".into()));
        assert_eq!(root.find_all("label").len(), 2);
        assert!(root.find("select").is_none());
    }

    #[test]
    fn html_serialization_escapes_and_keeps_boolean_attrs() {
        let el = Element::new("option")
            .with_attr("value", "a\"b")
            .with_attr("selected", "")
            .with_class("x")
            .with_text("1 < 2 & 3");
        assert_eq!(
            el.to_html(),
            "<option class=\"x\" value=\"a&quot;b\" selected>1 &lt; 2 &amp; 3</option>"
        );
    }

    #[test]
    fn class_attr_routes_into_class_list() {
        let mut el = Element::new("div").with_attr("class", "one two");
        assert!(el.classes().contains("two"));
        assert!(el.attr("class").is_none());
        el.remove_attr("class");
        assert!(el.classes().is_empty());
    }
}
