use waterblocks::config::ConfigWarning;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Unknown-key warnings from config loading, one line each.
pub fn render_config_warnings(
    warnings: &[ConfigWarning],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();
    for warning in warnings {
        let location = match warning.line {
            Some(line) => format!("{}:{}", warning.file.display(), line),
            None => warning.file.display().to_string(),
        };
        out.push_str(&format!(
            "{} {} unknown config key '{}'",
            Icon::Warning.colored(supports_color, supports_unicode),
            ColoredText::dim(location).render(supports_color),
            warning.key
        ));
        if let Some(suggestion) = &warning.suggestion {
            out.push_str(&format!(" (did you mean '{}'?)", suggestion));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn warning_includes_suggestion() {
        let warnings = vec![ConfigWarning {
            key: "colour".to_string(),
            file: PathBuf::from("waterblocks.toml"),
            line: Some(3),
            suggestion: Some("color".to_string()),
        }];

        let rendered = render_config_warnings(&warnings, false, false);
        assert_eq!(
            rendered,
            "[WARN] waterblocks.toml:3 unknown config key 'colour' (did you mean 'color'?)\n"
        );
    }
}
