//! ANSI terminal encoding.
//!
//! Only color is encoded. Each colored node switches the terminal to its
//! SGR code before its text; after each child subtree the encoder switches
//! back to the color that was active for the parent, so later siblings and
//! the parent's own text are not left in the child's color.

use crate::color::Color;
use crate::component::Component;

/// The escape character that starts a control sequence.
pub const ESCAPE: &str = "\u{1b}";

/// The escape character written as source-code text, for output that will
/// be pasted into a string literal.
pub const ESCAPE_LITERAL: &str = "\\u001b";

/// SGR code that resets all attributes.
pub const RESET_CODE: &str = "0";

/// Encodes a component tree as text with ANSI color sequences.
///
/// `ancestor_color` is the color active around this tree; it is restored
/// after each child when the root itself has no terminal color. With
/// `emit_trailing_reset` a reset sequence is appended once, at the end.
///
/// Every node restores after each of its children, including nodes that
/// set no color of their own: they re-emit the nearest colored ancestor's
/// code. Text that follows a child is therefore always in the color it
/// would have had without that child.
///
/// # Examples
///
/// ```
/// use chat::{Color, Component, encode::to_ansi};
///
/// let component = Component::new("A")
///     .with_color(Color::RED)
///     .with_child(Component::new("B").with_color(Color::BLUE));
///
/// assert_eq!(
///     to_ansi(&component, false, true, None),
///     "\u{1b}[31;1mA\u{1b}[34;1mB\u{1b}[31;1m\u{1b}[0m"
/// );
/// ```
pub fn to_ansi(
    component: &Component,
    escape_literal: bool,
    emit_trailing_reset: bool,
    ancestor_color: Option<&Color>,
) -> String {
    let mut encoder = AnsiEncoder {
        marker: if escape_literal { ESCAPE_LITERAL } else { ESCAPE },
        out: String::new(),
    };

    encoder.encode(component, ancestor_color.and_then(Color::ansi_code));
    if emit_trailing_reset {
        encoder.sgr(RESET_CODE);
    }

    log::trace!("encoded component as {} bytes of ANSI", encoder.out.len());
    encoder.out
}

struct AnsiEncoder {
    marker: &'static str,
    out: String,
}

impl AnsiEncoder {
    fn sgr(&mut self, code: &str) {
        self.out.push_str(self.marker);
        self.out.push('[');
        self.out.push_str(code);
        self.out.push('m');
    }

    /// `restore` is the SGR code active around this node, if any.
    fn encode(&mut self, component: &Component, restore: Option<&'static str>) {
        let own = component.color().and_then(Color::ansi_code);
        if let Some(code) = own {
            self.sgr(code);
        }

        self.out.push_str(component.text());

        let active = own.or(restore);
        for child in component.children() {
            self.encode(child, active);
            if let Some(code) = active {
                self.sgr(code);
            }
        }
    }
}
