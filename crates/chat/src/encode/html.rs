//! HTML encoding.
//!
//! Each component becomes one `<span>` whose inline style lists only what
//! that component sets. Children are nested inside the parent's span, so
//! the browser's cascade supplies inheritance for color and underline.
//! Bold and italic are written as explicit `normal` when turned off, which
//! stops them from inheriting at that node.

use crate::component::Component;
use crate::style::{Style, StyleFlag};

/// Encodes a component tree as nested HTML spans.
///
/// # Examples
///
/// ```
/// use chat::{Color, Component, encode::to_html};
///
/// let component = Component::new("Hi").with_color(Color::GOLD).with_bold(true);
/// assert_eq!(
///     to_html(&component),
///     r#"<span style="color: #ffaa00;font-weight: bold;">Hi</span>"#
/// );
/// ```
pub fn to_html(component: &Component) -> String {
    let mut out = String::new();
    write_span(component, &mut out);
    log::trace!("encoded component as {} bytes of HTML", out.len());
    out
}

fn write_span(component: &Component, out: &mut String) {
    out.push_str("<span style=\"");
    out.push_str(&inline_style(component.style()));
    out.push_str("\">");
    push_escaped(out, component.text());

    for child in component.children() {
        write_span(child, out);
    }

    out.push_str("</span>");
}

/// Builds the CSS declarations for one component's own attributes.
fn inline_style(style: &Style) -> String {
    let mut css = String::new();

    if let Some(color) = &style.color {
        css.push_str("color: ");
        css.push_str(&color.to_css_hex());
        css.push(';');
    }

    let declarations = [
        declaration(style.bold, "font-weight", "bold", "normal"),
        declaration(style.italic, "font-style", "italic", "normal"),
        declaration(style.underlined, "text-decoration-line", "underline", "inherit"),
    ];
    for (property, value) in declarations.into_iter().flatten() {
        css.push_str(property);
        css.push_str(": ");
        css.push_str(value);
        css.push(';');
    }

    css
}

/// Maps a flag to a CSS declaration; unset flags produce none.
fn declaration(
    flag: StyleFlag,
    property: &'static str,
    on: &'static str,
    off: &'static str,
) -> Option<(&'static str, &'static str)> {
    flag.value()
        .map(|enabled| (property, if enabled { on } else { off }))
}

fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
}
