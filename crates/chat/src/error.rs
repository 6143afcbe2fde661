//! Error types for chat component parsing.

use thiserror::Error;

/// Errors that can occur when parsing a color.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorError {
    /// The text after `#` is empty, too long, or holds a non-hex character.
    #[error("invalid hex color: {0}")]
    InvalidHexDigits(String),
}

/// Errors that can occur when parsing a chat component.
///
/// Parsing is fail-fast: the first problem found anywhere in the tree is
/// returned and nothing else is reported.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    /// The input is not valid JSON, or its root is not an object.
    #[error("invalid JSON: {0}")]
    JsonSyntaxError(String),

    /// An `extra` entry is valid JSON but not an object.
    #[error("component must be an object, found {found}")]
    NotAnObject {
        /// JSON type that was found instead.
        found: &'static str,
    },

    /// `text` is absent or is not a string.
    #[error("incomplete component: property \"text\" must be a string")]
    MissingOrInvalidText,

    /// A property holds a value of the wrong JSON type.
    #[error("property \"{field}\" must be a {expected}")]
    FieldTypeError {
        /// Name of the offending property.
        field: &'static str,
        /// JSON type the property must have.
        expected: &'static str,
    },

    /// `color` starts with `#` but is not a valid hex color.
    #[error("invalid \"color\" hexadecimal property ({raw})")]
    InvalidColorHex {
        /// The color string as written in the input.
        raw: String,
    },

    /// `color` does not name one of the catalog colors.
    #[error("invalid \"color\" name property ({raw})")]
    InvalidColorName {
        /// The color string as written in the input.
        raw: String,
    },

    /// `extra` is present but is not an array.
    #[error("property \"extra\" must be an array")]
    ExtraNotArray,

    /// An entry of `extra` failed to parse.
    #[error("extra[{index}]: {source}")]
    ChildError {
        /// Position of the failing entry in its `extra` array.
        index: usize,
        /// The child's own error.
        source: Box<ParseError>,
    },

    /// Components are nested deeper than the configured limit.
    #[error("component nesting exceeds the limit of {limit} levels")]
    DepthLimitExceeded {
        /// The depth limit in effect.
        limit: usize,
    },

    /// The tree holds more components than the configured limit.
    #[error("component tree exceeds the limit of {limit} nodes")]
    NodeLimitExceeded {
        /// The node limit in effect.
        limit: usize,
    },

    /// The object describes a component kind this parser does not build.
    #[error("unsupported component kind: {kind}")]
    UnsupportedKind {
        /// The kind's key in the input (`translate`, `keybind`, ...).
        kind: &'static str,
    },
}

impl ParseError {
    /// Returns the innermost error, skipping any `ChildError` wrappers.
    ///
    /// This is the error the failing child reported, unchanged.
    pub fn root_cause(&self) -> &ParseError {
        let mut current = self;
        while let ParseError::ChildError { source, .. } = current {
            current = source;
        }
        current
    }

    /// Returns the `extra` indices leading from the root to the failing node.
    pub fn path(&self) -> Vec<usize> {
        let mut path = Vec::new();
        let mut current = self;
        while let ParseError::ChildError { index, source } = current {
            path.push(*index);
            current = source;
        }
        path
    }
}
