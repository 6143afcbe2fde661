//! Recursive construction of the component tree.

use serde_json::Value;

use crate::component::Component;
use crate::error::ParseError;
use crate::style::Style;

use super::ParseLimits;
use super::fields::{json_type, read_color, read_extra, read_flag, read_text};

/// Parser state shared across one tree.
pub(super) struct ComponentParser<'a> {
    limits: &'a ParseLimits,
    /// Components started so far.
    nodes: usize,
    deepest: usize,
}

impl<'a> ComponentParser<'a> {
    pub(super) fn new(limits: &'a ParseLimits) -> Self {
        Self {
            limits,
            nodes: 0,
            deepest: 0,
        }
    }

    pub(super) fn nodes(&self) -> usize {
        self.nodes
    }

    pub(super) fn max_depth_seen(&self) -> usize {
        self.deepest
    }

    /// A root that is valid JSON but not an object is rejected as a syntax
    /// error; only `extra` entries report `NotAnObject`.
    pub(super) fn parse_root(&mut self, value: &Value) -> Result<Component, ParseError> {
        if !value.is_object() {
            return Err(ParseError::JsonSyntaxError(format!(
                "component must be an object, found {}",
                json_type(value)
            )));
        }
        self.parse_component(value, 1)
    }

    fn parse_component(&mut self, value: &Value, depth: usize) -> Result<Component, ParseError> {
        if depth > self.limits.max_depth {
            return Err(ParseError::DepthLimitExceeded {
                limit: self.limits.max_depth,
            });
        }
        self.nodes += 1;
        if self.nodes > self.limits.max_nodes {
            return Err(ParseError::NodeLimitExceeded {
                limit: self.limits.max_nodes,
            });
        }
        self.deepest = self.deepest.max(depth);

        let object = value.as_object().ok_or(ParseError::NotAnObject {
            found: json_type(value),
        })?;

        let text = read_text(object)?;
        let style = Style {
            bold: read_flag(object, "bold")?,
            italic: read_flag(object, "italic")?,
            underlined: read_flag(object, "underlined")?,
            strikethrough: read_flag(object, "strikethrough")?,
            obfuscated: read_flag(object, "obfuscated")?,
            color: read_color(object)?,
        };
        let extra = read_extra(object)?;

        log::trace!("component at depth {}: {:?}", depth, text);

        let mut children = Vec::with_capacity(extra.len());
        for (index, child) in extra.iter().enumerate() {
            let child = self
                .parse_component(child, depth + 1)
                .map_err(|err| wrap_child_error(index, err))?;
            children.push(child);
        }

        Ok(Component::new(text).with_style(style).with_children(children))
    }
}

/// Records which entry of `extra` failed.
///
/// Limit errors describe the whole tree rather than one node, so they pass
/// through unwrapped.
fn wrap_child_error(index: usize, err: ParseError) -> ParseError {
    match err {
        ParseError::DepthLimitExceeded { .. } | ParseError::NodeLimitExceeded { .. } => err,
        err => ParseError::ChildError {
            index,
            source: Box::new(err),
        },
    }
}
