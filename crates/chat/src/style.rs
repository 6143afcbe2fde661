//! Style types for chat components.
//!
//! Every style attribute is tri-state: a component either sets it to true,
//! sets it to false, or leaves it unset. What "unset" means is decided by
//! whoever renders the component; [`StyleFlag::resolve`] is the one place
//! that turns a flag plus an inherited value into a concrete boolean.

use crate::color::Color;

/// A style attribute that may or may not be specified on a component.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StyleFlag {
    /// Not specified on this component.
    #[default]
    Unset,
    /// Explicitly enabled.
    True,
    /// Explicitly disabled.
    False,
}

impl StyleFlag {
    /// Returns true unless the flag is [`StyleFlag::Unset`].
    pub fn is_set(self) -> bool {
        self != StyleFlag::Unset
    }

    /// Returns the explicit value, or `None` when unset.
    pub fn value(self) -> Option<bool> {
        match self {
            StyleFlag::Unset => None,
            StyleFlag::True => Some(true),
            StyleFlag::False => Some(false),
        }
    }

    /// Resolves the flag against the value inherited from an ancestor.
    pub fn resolve(self, inherited: bool) -> bool {
        self.value().unwrap_or(inherited)
    }

    /// Keeps this flag if it is set, otherwise takes `parent`.
    pub fn or(self, parent: StyleFlag) -> StyleFlag {
        if self.is_set() { self } else { parent }
    }
}

impl From<bool> for StyleFlag {
    fn from(value: bool) -> Self {
        if value {
            StyleFlag::True
        } else {
            StyleFlag::False
        }
    }
}

impl From<Option<bool>> for StyleFlag {
    fn from(value: Option<bool>) -> Self {
        value.map_or(StyleFlag::Unset, StyleFlag::from)
    }
}

/// The style attributes a single component specifies.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Style {
    /// Bold text.
    pub bold: StyleFlag,
    /// Italic text.
    pub italic: StyleFlag,
    /// Underlined text.
    pub underlined: StyleFlag,
    /// Struck-through text.
    pub strikethrough: StyleFlag,
    /// Obfuscated ("magic") text.
    pub obfuscated: StyleFlag,
    /// Text color.
    pub color: Option<Color>,
}

impl Style {
    /// Create a new style with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no attribute is set.
    pub fn is_empty(&self) -> bool {
        !self.bold.is_set()
            && !self.italic.is_set()
            && !self.underlined.is_set()
            && !self.strikethrough.is_set()
            && !self.obfuscated.is_set()
            && self.color.is_none()
    }

    /// Fill in every unset attribute from `parent`.
    ///
    /// Components never do this on their own; renderers that want the
    /// cascade call it while walking down from the root.
    pub fn inherit_from(&self, parent: &Style) -> Style {
        Style {
            bold: self.bold.or(parent.bold),
            italic: self.italic.or(parent.italic),
            underlined: self.underlined.or(parent.underlined),
            strikethrough: self.strikethrough.or(parent.strikethrough),
            obfuscated: self.obfuscated.or(parent.obfuscated),
            color: self.color.clone().or_else(|| parent.color.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_resolve() {
        assert!(StyleFlag::True.resolve(false));
        assert!(!StyleFlag::False.resolve(true));
        assert!(StyleFlag::Unset.resolve(true));
        assert!(!StyleFlag::Unset.resolve(false));
    }

    #[test]
    fn flag_from_option() {
        assert_eq!(StyleFlag::from(None), StyleFlag::Unset);
        assert_eq!(StyleFlag::from(Some(true)), StyleFlag::True);
        assert_eq!(StyleFlag::from(Some(false)), StyleFlag::False);
    }

    #[test]
    fn style_is_empty() {
        assert!(Style::new().is_empty());

        let style = Style {
            italic: StyleFlag::False,
            ..Default::default()
        };
        assert!(!style.is_empty());

        let style = Style {
            color: Some(Color::RED),
            ..Default::default()
        };
        assert!(!style.is_empty());
    }

    #[test]
    fn inherit_keeps_explicit_values() {
        let parent = Style {
            bold: StyleFlag::True,
            underlined: StyleFlag::True,
            color: Some(Color::RED),
            ..Default::default()
        };
        let child = Style {
            bold: StyleFlag::False,
            color: Some(Color::BLUE),
            ..Default::default()
        };

        let resolved = child.inherit_from(&parent);
        assert_eq!(resolved.bold, StyleFlag::False);
        assert_eq!(resolved.underlined, StyleFlag::True);
        assert_eq!(resolved.italic, StyleFlag::Unset);
        assert_eq!(resolved.color, Some(Color::BLUE));
    }

    #[test]
    fn inherit_takes_parent_color_when_missing() {
        let parent = Style {
            color: Some(Color::GOLD),
            ..Default::default()
        };
        assert_eq!(Style::new().inherit_from(&parent).color, Some(Color::GOLD));
    }
}
