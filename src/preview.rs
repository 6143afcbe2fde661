//! Terminal preview of a component.
//!
//! Draws the tree with crossterm styling commands: true-color foreground,
//! bold and italic from the component's font, and per-node underline and
//! strike-through. Colors and fonts are kept on stacks so that every node
//! hands the terminal back to its parent's state when it is done.

use std::io::{self, Write};

use chat::present::{self, FontStyle, Presenter};
use chat::{Color, Component};
use crossterm::queue;
use crossterm::style::{
    Attribute, Color as TermColor, Print, ResetColor, SetAttribute, SetForegroundColor,
};

/// Writes a styled rendering of `component` followed by a newline.
pub fn preview<W: Write>(component: &Component, out: &mut W) -> io::Result<()> {
    let mut presenter = TerminalPresenter::new(out);
    present::present(component, &mut presenter);
    presenter.finish()
}

struct TerminalPresenter<'a, W: Write> {
    out: &'a mut W,
    colors: Vec<TermColor>,
    fonts: Vec<FontStyle>,
    started: bool,
    /// First write error; later writes are skipped.
    error: Option<io::Error>,
}

impl<'a, W: Write> TerminalPresenter<'a, W> {
    fn new(out: &'a mut W) -> Self {
        Self {
            out,
            colors: Vec::new(),
            fonts: Vec::new(),
            started: false,
            error: None,
        }
    }

    fn run(&mut self, write: impl FnOnce(&mut W) -> io::Result<()>) {
        if self.error.is_none() {
            if let Err(err) = write(&mut *self.out) {
                self.error = Some(err);
            }
        }
    }

    fn apply_color(&mut self) {
        let color = self.colors.last().copied();
        self.run(|out| match color {
            Some(color) => queue!(out, SetForegroundColor(color)),
            None => queue!(out, ResetColor),
        });
    }

    fn apply_font(&mut self) {
        let font = self.fonts.last().copied().unwrap_or_default();
        let bold = matches!(font, FontStyle::Bold | FontStyle::BoldItalic);
        let italic = matches!(font, FontStyle::Italic | FontStyle::BoldItalic);
        self.run(|out| {
            queue!(
                out,
                SetAttribute(Attribute::NormalIntensity),
                SetAttribute(Attribute::NoItalic)
            )?;
            if bold {
                queue!(out, SetAttribute(Attribute::Bold))?;
            }
            if italic {
                queue!(out, SetAttribute(Attribute::Italic))?;
            }
            Ok(())
        });
    }

    fn finish(mut self) -> io::Result<()> {
        self.run(|out| {
            queue!(out, SetAttribute(Attribute::Reset), ResetColor, Print("\n"))?;
            out.flush()
        });
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl<W: Write> Presenter for TerminalPresenter<'_, W> {
    fn push_color(&mut self, color: &Color) {
        let (r, g, b) = color.to_rgb();
        self.colors.push(TermColor::Rgb { r, g, b });
        self.apply_color();
    }

    fn pop_color(&mut self) {
        self.colors.pop();
        self.apply_color();
    }

    fn push_font(&mut self, font: FontStyle) {
        self.fonts.push(font);
        self.apply_font();
    }

    fn pop_font(&mut self) {
        self.fonts.pop();
        self.apply_font();
    }

    fn draw_text(&mut self, component: &Component, same_line: bool) {
        let newline = self.started && !same_line;
        self.started = true;

        let underlined = component.underlined().resolve(false);
        let struck = component.strikethrough().resolve(false);
        let text = component.text();

        self.run(|out| {
            if newline {
                queue!(out, Print("\n"))?;
            }
            if underlined {
                queue!(out, SetAttribute(Attribute::Underlined))?;
            }
            if struck {
                queue!(out, SetAttribute(Attribute::CrossedOut))?;
            }
            queue!(out, Print(text))?;
            if underlined {
                queue!(out, SetAttribute(Attribute::NoUnderline))?;
            }
            if struck {
                queue!(out, SetAttribute(Attribute::NotCrossedOut))?;
            }
            Ok(())
        });
    }
}
