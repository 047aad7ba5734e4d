use waterblocks::config::{ColorMode, Config};

use crate::cli::ColorWhen;
use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

/// Resolved output settings for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, cli_color: Option<ColorWhen>, config: &Config) -> Self {
        Self::from_caps(json, cli_color, config, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
        cli_color: Option<ColorWhen>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = config.output.unicode && caps.supports_unicode;

        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        Self {
            json,
            caps,
            color,
            unicode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tty_caps() -> TerminalCapabilities {
        TerminalCapabilities {
            supports_color: true,
            supports_unicode: true,
            is_ci: false,
            width: 120,
        }
    }

    #[test]
    fn cli_color_flag_overrides_config() {
        let mut config = Config::default();
        config.output.color = ColorMode::Always;
        let ctx = UiContext::from_caps(false, Some(ColorWhen::Never), &config, tty_caps());
        assert!(!ctx.color);
    }

    #[test]
    fn auto_color_disabled_in_ci() {
        let caps = TerminalCapabilities {
            is_ci: true,
            ..tty_caps()
        };
        let ctx = UiContext::from_caps(false, None, &Config::default(), caps);
        assert!(!ctx.color);
    }

    #[test]
    fn config_can_disable_unicode() {
        let mut config = Config::default();
        config.output.unicode = false;
        let ctx = UiContext::from_caps(false, None, &config, tty_caps());
        assert!(!ctx.unicode);
        assert!(ctx.color);
    }
}
