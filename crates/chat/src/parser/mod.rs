//! Parser for chat component JSON.
//!
//! This module validates an untyped JSON value and builds a [`Component`]
//! tree from it, or reports the first problem it finds.
//!
//! Nesting is bounded by [`ParseLimits`] so that hostile input cannot
//! exhaust the stack or memory.

mod component;
mod fields;

use serde_json::Value;

use crate::component::Component;
use crate::error::ParseError;

use component::ComponentParser;

/// Default maximum number of nested component levels.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Default maximum number of components in one tree.
pub const DEFAULT_MAX_NODES: usize = 100_000;

/// Deepest component nesting that serde_json will decode from text.
///
/// serde_json refuses input nested more than 128 values deep, and each
/// component level takes two of those (the object and its `extra` array).
pub const TEXT_MAX_DEPTH: usize = 64;

/// Resource limits applied while building a tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseLimits {
    /// Maximum nesting depth; the root is depth 1.
    pub max_depth: usize,
    /// Maximum number of components in the whole tree.
    pub max_nodes: usize,
}

impl ParseLimits {
    /// Limits that never trigger. Only use these for trusted input.
    pub fn unbounded() -> Self {
        Self {
            max_depth: usize::MAX,
            max_nodes: usize::MAX,
        }
    }
}

impl Default for ParseLimits {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_nodes: DEFAULT_MAX_NODES,
        }
    }
}

/// Builds a component tree from a JSON value using the default limits.
///
/// # Examples
///
/// ```
/// use chat::parser::parse;
/// use serde_json::json;
///
/// let component = parse(&json!({"text": "Hi", "bold": true})).unwrap();
/// assert_eq!(component.text(), "Hi");
/// ```
pub fn parse(value: &Value) -> Result<Component, ParseError> {
    parse_with_limits(value, &ParseLimits::default())
}

/// Builds a component tree from a JSON value.
pub fn parse_with_limits(value: &Value, limits: &ParseLimits) -> Result<Component, ParseError> {
    let mut parser = ComponentParser::new(limits);
    match parser.parse_root(value) {
        Ok(component) => {
            log::debug!(
                "parsed component tree: {} nodes, depth {}",
                parser.nodes(),
                parser.max_depth_seen()
            );
            Ok(component)
        }
        Err(err) => {
            log::debug!("component parse failed: {}", err);
            Err(err)
        }
    }
}

/// Parses JSON text into a component tree using the default limits.
pub fn parse_str(input: &str) -> Result<Component, ParseError> {
    parse_str_with_limits(input, &ParseLimits::default())
}

/// Parses JSON text into a component tree.
pub fn parse_str_with_limits(input: &str, limits: &ParseLimits) -> Result<Component, ParseError> {
    let value: Value =
        serde_json::from_str(input).map_err(|err| json_error(&err, limits))?;
    parse_with_limits(&value, limits)
}

fn json_error(err: &serde_json::Error, limits: &ParseLimits) -> ParseError {
    // serde_json has no error code for its nesting guard, only this message
    // (serde_json 1.x `ErrorCode::RecursionLimitExceeded`). Pinned by
    // `serde_recursion_limit_is_a_depth_error`.
    let message = err.to_string();
    if err.is_syntax() && message.starts_with("recursion limit exceeded") {
        return ParseError::DepthLimitExceeded {
            limit: limits.max_depth.min(TEXT_MAX_DEPTH),
        };
    }
    ParseError::JsonSyntaxError(message)
}
