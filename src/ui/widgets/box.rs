use std::borrow::Cow;

use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoxStyle {
    #[default]
    Info,
    Error,
}

/// Rounded (or ASCII) frame around a block of lines.
#[derive(Debug, Default, Clone)]
pub struct Box {
    title: Option<String>,
    content: Vec<String>,
    style: BoxStyle,
}

struct Borders {
    top_left: &'static str,
    top_right: &'static str,
    bottom_left: &'static str,
    bottom_right: &'static str,
    horizontal: &'static str,
    vertical: &'static str,
}

impl Borders {
    fn new(supports_unicode: bool) -> Self {
        if supports_unicode {
            use theme::borders as b;
            Self {
                top_left: b::TOP_LEFT,
                top_right: b::TOP_RIGHT,
                bottom_left: b::BOTTOM_LEFT,
                bottom_right: b::BOTTOM_RIGHT,
                horizontal: b::HORIZONTAL,
                vertical: b::VERTICAL,
            }
        } else {
            use theme::borders_ascii as b;
            Self {
                top_left: b::TOP_LEFT,
                top_right: b::TOP_RIGHT,
                bottom_left: b::BOTTOM_LEFT,
                bottom_right: b::BOTTOM_RIGHT,
                horizontal: b::HORIZONTAL,
                vertical: b::VERTICAL,
            }
        }
    }
}

impl Box {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn style(mut self, style: BoxStyle) -> Self {
        self.style = style;
        self
    }

    /// Add a line; embedded newlines become separate rows.
    pub fn add_line(&mut self, line: impl Into<String>) {
        let line = line.into();
        for part in line.lines() {
            self.content.push(part.to_string());
        }
    }

    pub fn add_empty(&mut self) {
        self.content.push(String::new());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let borders = Borders::new(supports_unicode);

        let mut lines: Vec<&str> = Vec::new();
        if let Some(title) = &self.title {
            lines.push(title);
        }
        lines.extend(self.content.iter().map(String::as_str));

        let inner_width = lines
            .iter()
            .map(|l| visible_width(l))
            .max()
            .unwrap_or(0)
            .saturating_add(2)
            .max(2);

        let paint = |s: &str| color_border(s, supports_color, self.style);

        let mut out = String::new();
        out.push_str(&paint(&format!(
            "{}{}{}",
            borders.top_left,
            borders.horizontal.repeat(inner_width),
            borders.top_right
        )));
        out.push('\n');

        for line in &lines {
            let pad = inner_width - 1 - visible_width(line);
            out.push_str(&paint(borders.vertical));
            out.push(' ');
            out.push_str(line);
            out.push_str(&" ".repeat(pad));
            out.push_str(&paint(borders.vertical));
            out.push('\n');
        }

        out.push_str(&paint(&format!(
            "{}{}{}",
            borders.bottom_left,
            borders.horizontal.repeat(inner_width),
            borders.bottom_right
        )));
        out.push('\n');
        out
    }
}

fn color_border(s: &str, supports_color: bool, style: BoxStyle) -> String {
    if !supports_color {
        return s.to_string();
    }

    let color = match style {
        BoxStyle::Info => theme::colors::WATER,
        BoxStyle::Error => theme::colors::ERROR,
    };
    format!("{}", s.with(color))
}

fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.contains('\u{1b}') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            // ESC [ ... <final byte>
            if matches!(chars.peek(), Some('[') | Some(']')) {
                let _ = chars.next();
            }
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }

    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_pads_rows_to_common_width() {
        let mut b = Box::with_title("Result");
        b.add_line("a\nlonger line");
        let rendered = b.render(false, false);

        let widths: Vec<usize> = rendered.lines().map(|l| l.len()).collect();
        assert!(widths.iter().all(|&w| w == widths[0]), "{rendered}");
        assert!(rendered.starts_with('+'));
        assert!(rendered.contains("| a"));
    }

    #[test]
    fn box_ignores_ansi_in_width() {
        let mut b = Box::with_title("x");
        b.add_line("\u{1b}[36m≈≈\u{1b}[39m");
        let rendered = b.render(false, true);
        let first = rendered.lines().next().unwrap();
        // "≈≈" is two columns wide, plus one space each side
        assert_eq!(first.chars().count(), 2 + 4);
    }
}
