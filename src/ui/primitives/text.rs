use std::fmt;

use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticColor {
    Success,
    Error,
    Water,
    Dim,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredText {
    text: String,
    color: Option<SemanticColor>,
    bold: bool,
}

impl ColoredText {
    fn with_color(text: impl Into<String>, color: SemanticColor) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
            bold: false,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
            bold: false,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::with_color(text, SemanticColor::Success)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::with_color(text, SemanticColor::Error)
    }

    pub fn water(text: impl Into<String>) -> Self {
        Self::with_color(text, SemanticColor::Water)
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Self::with_color(text, SemanticColor::Dim)
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn render(&self, supports_color: bool) -> String {
        if !supports_color {
            return self.text.clone();
        }

        let Some(color) = self.color else {
            if self.bold {
                return format!("{}", self.text.as_str().bold());
            }
            return self.text.clone();
        };

        let mut styled = match color {
            SemanticColor::Success => self.text.as_str().with(theme::colors::SUCCESS),
            SemanticColor::Error => self.text.as_str().with(theme::colors::ERROR),
            SemanticColor::Water => self.text.as_str().with(theme::colors::WATER),
            SemanticColor::Dim => self.text.as_str().with(theme::colors::DIM),
        };

        if self.bold {
            styled = styled.bold();
        }

        format!("{}", styled)
    }
}

impl fmt::Display for ColoredText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
