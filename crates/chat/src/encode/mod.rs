//! Text encoders for component trees.
//!
//! Both encoders are pure functions of the tree: they never fail and
//! encoding the same tree twice gives identical output.

mod ansi;
mod html;

pub use ansi::{ESCAPE, ESCAPE_LITERAL, RESET_CODE, to_ansi};
pub use html::to_html;
