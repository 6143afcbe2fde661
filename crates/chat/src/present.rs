//! Presentation adapter boundary.
//!
//! Front ends (a terminal preview, a GUI) draw components by implementing
//! [`Presenter`] and handing it to [`present`]. The walk is read-only and
//! keeps font and color changes balanced: everything pushed for a node is
//! popped once its subtree has been drawn.

use crate::color::Color;
use crate::component::Component;
use crate::style::StyleFlag;

/// Font face chosen for a component.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontStyle {
    #[default]
    Regular,
    Bold,
    Italic,
    BoldItalic,
}

impl FontStyle {
    /// Picks the face for a node from its own bold and italic flags.
    ///
    /// Ancestors are not consulted: an unset flag counts as off. Callers that
    /// want inherited faces resolve the flags first, e.g. with
    /// [`Style::inherit_from`](crate::style::Style::inherit_from).
    pub fn resolve(bold: StyleFlag, italic: StyleFlag) -> FontStyle {
        match (bold.resolve(false), italic.resolve(false)) {
            (false, false) => FontStyle::Regular,
            (true, false) => FontStyle::Bold,
            (false, true) => FontStyle::Italic,
            (true, true) => FontStyle::BoldItalic,
        }
    }

    /// The face for `component`.
    pub fn of(component: &Component) -> FontStyle {
        FontStyle::resolve(component.bold(), component.italic())
    }
}

/// A drawing surface driven by [`present`].
pub trait Presenter {
    /// Make `color` the current text color until the matching `pop_color`.
    fn push_color(&mut self, color: &Color);

    /// Restore the text color that was current before the last `push_color`.
    fn pop_color(&mut self);

    /// Make `font` the current face until the matching `pop_font`.
    fn push_font(&mut self, font: FontStyle);

    /// Restore the face that was current before the last `push_font`.
    fn pop_font(&mut self);

    /// Draw one component's text. `same_line` is true for every child, which
    /// continues on the line where the previous text ended.
    fn draw_text(&mut self, component: &Component, same_line: bool);
}

/// Draws a component tree onto `presenter`.
pub fn present<P: Presenter + ?Sized>(component: &Component, presenter: &mut P) {
    present_node(component, presenter, false);
}

fn present_node<P: Presenter + ?Sized>(component: &Component, presenter: &mut P, same_line: bool) {
    if let Some(color) = component.color() {
        presenter.push_color(color);
    }
    presenter.push_font(FontStyle::of(component));

    presenter.draw_text(component, same_line);
    for child in component.children() {
        present_node(child, presenter, true);
    }

    presenter.pop_font();
    if component.color().is_some() {
        presenter.pop_color();
    }
}
