//! The chat component tree.
//!
//! A [`Component`] is one styled text fragment plus its ordered children.
//! Children own their subtrees outright, so a tree is always acyclic and
//! can be walked by reference without copying.

use std::str::FromStr;

use crate::color::Color;
use crate::encode;
use crate::error::ParseError;
use crate::style::{Style, StyleFlag};

/// The kind of content a component carries.
///
/// Only [`ComponentKind::PlainText`] is produced by the parser; the other
/// kinds are rejected with [`ParseError::UnsupportedKind`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// Literal text.
    #[default]
    PlainText,
    /// A translation key with arguments.
    Translation,
    /// A client key binding.
    Keybind,
    /// A scoreboard value.
    Score,
    /// An entity selector.
    Selector,
}

impl ComponentKind {
    /// The JSON key that identifies this kind.
    pub fn key(self) -> &'static str {
        match self {
            ComponentKind::PlainText => "text",
            ComponentKind::Translation => "translate",
            ComponentKind::Keybind => "keybind",
            ComponentKind::Score => "score",
            ComponentKind::Selector => "selector",
        }
    }
}

/// A node of a chat component tree.
///
/// # Examples
///
/// ```
/// use chat::{Color, Component};
///
/// let component: Component = r#"{"text":"Hello ","extra":[{"text":"world","color":"gold"}]}"#
///     .parse()
///     .unwrap();
/// assert_eq!(component.plain_text(), "Hello world");
/// assert_eq!(component.children()[0].color(), Some(&Color::GOLD));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Component {
    kind: ComponentKind,
    text: String,
    style: Style,
    children: Vec<Component>,
}

impl Component {
    /// Create a plain text component with no style and no children.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            kind: ComponentKind::PlainText,
            text: text.into(),
            style: Style::default(),
            children: Vec::new(),
        }
    }

    /// Parse a component from JSON text with the default limits.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        crate::parser::parse_str(input)
    }

    /// Build a component from an already-decoded JSON value.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, ParseError> {
        crate::parser::parse(value)
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.style.bold = bold.into();
        self
    }

    pub fn with_italic(mut self, italic: bool) -> Self {
        self.style.italic = italic.into();
        self
    }

    pub fn with_underlined(mut self, underlined: bool) -> Self {
        self.style.underlined = underlined.into();
        self
    }

    pub fn with_strikethrough(mut self, strikethrough: bool) -> Self {
        self.style.strikethrough = strikethrough.into();
        self
    }

    pub fn with_obfuscated(mut self, obfuscated: bool) -> Self {
        self.style.obfuscated = obfuscated.into();
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.style.color = Some(color);
        self
    }

    /// Append a child after any existing children.
    pub fn with_child(mut self, child: Component) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Component>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    /// The literal text of this node only.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn bold(&self) -> StyleFlag {
        self.style.bold
    }

    pub fn italic(&self) -> StyleFlag {
        self.style.italic
    }

    pub fn underlined(&self) -> StyleFlag {
        self.style.underlined
    }

    pub fn strikethrough(&self) -> StyleFlag {
        self.style.strikethrough
    }

    pub fn obfuscated(&self) -> StyleFlag {
        self.style.obfuscated
    }

    pub fn color(&self) -> Option<&Color> {
        self.style.color.as_ref()
    }

    /// Children in document order.
    pub fn children(&self) -> &[Component] {
        &self.children
    }

    /// Concatenated text of this node and all descendants, in document order.
    pub fn plain_text(&self) -> String {
        self.iter().map(Component::text).collect()
    }

    /// Number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Number of levels in this subtree; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(Component::depth).max().unwrap_or(0)
    }

    /// Depth-first, pre-order iterator over this subtree.
    pub fn iter(&self) -> Iter<'_> {
        Iter { stack: vec![self] }
    }

    /// ANSI rendering with real escape characters and a trailing reset.
    pub fn to_ansi_string(&self) -> String {
        encode::to_ansi(self, false, true, None)
    }

    /// ANSI rendering with escapes written as the literal text `\u001b`.
    pub fn to_escaped_ansi_string(&self) -> String {
        encode::to_ansi(self, true, true, None)
    }

    /// HTML rendering as nested `<span>` elements.
    pub fn to_html_string(&self) -> String {
        encode::to_html(self)
    }
}

impl FromStr for Component {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Component::parse(s)
    }
}

impl<'a> IntoIterator for &'a Component {
    type Item = &'a Component;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator returned by [`Component::iter`].
pub struct Iter<'a> {
    stack: Vec<&'a Component>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Component;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Component {
        Component::new("a")
            .with_child(Component::new("b").with_child(Component::new("c")))
            .with_child(Component::new("d"))
    }

    #[test]
    fn new_is_plain_text() {
        let component = Component::new("hi");
        assert_eq!(component.kind(), ComponentKind::PlainText);
        assert_eq!(component.text(), "hi");
        assert!(component.style().is_empty());
        assert!(component.children().is_empty());
    }

    #[test]
    fn builders_set_flags() {
        let component = Component::new("x").with_bold(true).with_italic(false);
        assert_eq!(component.bold(), StyleFlag::True);
        assert_eq!(component.italic(), StyleFlag::False);
        assert_eq!(component.underlined(), StyleFlag::Unset);
    }

    #[test]
    fn iter_is_pre_order() {
        let texts: Vec<_> = sample().iter().map(|c| c.text().to_string()).collect();
        assert_eq!(texts, ["a", "b", "c", "d"]);
    }

    #[test]
    fn plain_text_concatenates() {
        assert_eq!(sample().plain_text(), "abcd");
    }

    #[test]
    fn counts() {
        assert_eq!(sample().node_count(), 4);
        assert_eq!(sample().depth(), 3);
        assert_eq!(Component::new("").depth(), 1);
    }

    #[test]
    fn kind_keys() {
        assert_eq!(ComponentKind::PlainText.key(), "text");
        assert_eq!(ComponentKind::Selector.key(), "selector");
    }
}
