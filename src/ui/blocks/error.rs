use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

/// Boxed error report with optional input excerpt and fix hint.
#[derive(Debug, Clone)]
pub struct ErrorBlock {
    origin: String,
    message: String,
    excerpt: Option<(String, usize, usize)>, // (input, column, width)
    fix: Option<String>,
}

impl ErrorBlock {
    pub fn new(origin: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            message: message.into(),
            excerpt: None,
            fix: None,
        }
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    /// Point at the `index`-th comma-separated token of `input`.
    pub fn with_token_context(mut self, input: &str, index: usize) -> Self {
        let Some((column, width)) = token_span(input, index) else { return self };
        self.excerpt = Some((input.to_string(), column, width));
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let title = format!(
            "{} {}",
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error("ERROR").bold().render(supports_color)
        );
        let mut b = Box::with_title(title).style(BoxStyle::Error);

        b.add_line(ColoredText::dim(self.origin.as_str()).render(supports_color));
        b.add_empty();
        b.add_line(self.message.clone());

        if let Some((input, column, width)) = &self.excerpt {
            b.add_empty();
            b.add_line(format!("  {}", input));
            let marker = "^".repeat((*width).max(1));
            b.add_line(format!(
                "  {}{}",
                " ".repeat(*column),
                ColoredText::error(marker).render(supports_color)
            ));
        }

        if let Some(fix) = &self.fix {
            b.add_empty();
            b.add_line(format!("FIX: {}", fix));
        }

        b.render(supports_color, supports_unicode)
    }
}

/// Character column and width of the trimmed `index`-th token.
fn token_span(input: &str, index: usize) -> Option<(usize, usize)> {
    let mut start = 0;
    for (i, raw) in input.split(',').enumerate() {
        if i == index {
            let leading = raw.len() - raw.trim_start().len();
            let column = input[..start + leading].chars().count();
            return Some((column, raw.trim().chars().count()));
        }
        start += raw.len() + 1;
    }
    None
}
