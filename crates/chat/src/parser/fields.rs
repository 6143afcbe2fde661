//! Validation of individual component properties.

use serde_json::{Map, Value};

use crate::color::Color;
use crate::component::ComponentKind;
use crate::error::ParseError;
use crate::style::StyleFlag;

/// Kinds that are recognised but not built.
const UNSUPPORTED_KINDS: [ComponentKind; 4] = [
    ComponentKind::Translation,
    ComponentKind::Keybind,
    ComponentKind::Score,
    ComponentKind::Selector,
];

/// Name of a JSON value's type, for error messages.
pub(super) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Reads the required `text` property.
///
/// An object without `text` that carries another kind's key is reported as
/// that kind being unsupported rather than as missing text.
pub(super) fn read_text(object: &Map<String, Value>) -> Result<String, ParseError> {
    match object.get("text") {
        Some(Value::String(text)) => Ok(text.clone()),
        Some(_) => Err(ParseError::MissingOrInvalidText),
        None => {
            let kind = UNSUPPORTED_KINDS
                .iter()
                .find(|kind| object.contains_key(kind.key()));
            match kind {
                Some(kind) => Err(ParseError::UnsupportedKind { kind: kind.key() }),
                None => Err(ParseError::MissingOrInvalidText),
            }
        }
    }
}

/// Reads an optional boolean style property.
pub(super) fn read_flag(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<StyleFlag, ParseError> {
    match object.get(field) {
        None => Ok(StyleFlag::Unset),
        Some(Value::Bool(value)) => Ok(StyleFlag::from(*value)),
        Some(_) => Err(ParseError::FieldTypeError {
            field,
            expected: "boolean",
        }),
    }
}

/// Reads the optional `color` property.
pub(super) fn read_color(object: &Map<String, Value>) -> Result<Option<Color>, ParseError> {
    let raw = match object.get("color") {
        None => return Ok(None),
        Some(Value::String(raw)) => raw,
        Some(_) => {
            return Err(ParseError::FieldTypeError {
                field: "color",
                expected: "string",
            });
        }
    };

    if raw.starts_with('#') {
        Color::parse_hex(raw)
            .map(Some)
            .map_err(|_| ParseError::InvalidColorHex { raw: raw.clone() })
    } else {
        Color::lookup_by_name(raw)
            .map(Some)
            .ok_or_else(|| ParseError::InvalidColorName { raw: raw.clone() })
    }
}

/// Reads the optional `extra` property as a slice of child values.
pub(super) fn read_extra(object: &Map<String, Value>) -> Result<&[Value], ParseError> {
    match object.get("extra") {
        None => Ok(&[]),
        Some(Value::Array(children)) => Ok(children),
        Some(_) => Err(ParseError::ExtraNotArray),
    }
}
