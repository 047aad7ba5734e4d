use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Droplet,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Droplet) => theme::icons::DROPLET,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Droplet) => theme::icons_ascii::DROPLET,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning => theme::colors::WARNING,
            Icon::Droplet => theme::colors::WATER,
        };
        format!("{}", s.with(color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_renders_ascii_when_unicode_unsupported() {
        assert_eq!(Icon::Success.render(false), theme::icons_ascii::SUCCESS);
        assert_eq!(Icon::Droplet.render(false), "[~]");
    }

    #[test]
    fn icon_renders_unicode_when_supported() {
        assert_eq!(Icon::Warning.render(true), theme::icons::WARNING);
    }
}
