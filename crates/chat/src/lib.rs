//! Chat component parsing and rendering.
//!
//! This crate reads the JSON chat component format, where a message is a
//! tree of styled text fragments, and renders it as ANSI terminal text or
//! as HTML.
//!
//! # Overview
//!
//! A component is a JSON object:
//!
//! ```text
//! {
//!   "text": "Hello ",                 required
//!   "bold": true,                     optional, also italic, underlined,
//!                                     strikethrough and obfuscated
//!   "color": "gold",                  optional, a name or "#rrggbb"
//!   "extra": [ { "text": "world" } ]  optional child components
//! }
//! ```
//!
//! Style attributes are tri-state ([`StyleFlag`]): a component sets them,
//! clears them, or leaves them to whatever renders it.
//!
//! # Usage
//!
//! ```
//! use chat::{Color, Component};
//!
//! let component = Component::parse(
//!     r#"{"text":"A","color":"red","extra":[{"text":"B","color":"blue"}]}"#,
//! )
//! .unwrap();
//!
//! assert_eq!(component.plain_text(), "AB");
//! assert_eq!(component.color(), Some(&Color::RED));
//! assert_eq!(
//!     component.to_ansi_string(),
//!     "\u{1b}[31;1mA\u{1b}[34;1mB\u{1b}[31;1m\u{1b}[0m"
//! );
//! ```

pub mod color;
pub mod component;
pub mod encode;
pub mod error;
pub mod parser;
pub mod present;
pub mod style;

// Re-export main types at crate root
pub use color::Color;
pub use component::{Component, ComponentKind};
pub use error::{ColorError, ParseError};
pub use parser::ParseLimits;
pub use present::{FontStyle, Presenter};
pub use style::{Style, StyleFlag};
