use waterblocks::BlocksError;

use crate::commands::HeightInput;
use crate::ui::blocks::error::ErrorBlock;

const HEIGHTS_FIX: &str = "Enter whole, non-negative numbers separated by commas, e.g. 4, 2, 0, 3, 2, 5";

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let Some(blocks) = err.downcast_ref::<BlocksError>() else {
        return format!("[ERROR] {:#}\n", err);
    };
    let input = err.downcast_ref::<HeightInput>().map(|i| i.0.as_str());

    let block = match blocks {
        BlocksError::EmptyInput | BlocksError::NoValidHeights => {
            ErrorBlock::new("input", blocks.to_string()).with_fix(HEIGHTS_FIX)
        }
        BlocksError::InvalidToken { index, .. } | BlocksError::NegativeHeight { index, .. } => {
            let block = ErrorBlock::new("input", blocks.to_string()).with_fix(HEIGHTS_FIX);
            match input {
                Some(input) => block.with_token_context(input, *index),
                None => block,
            }
        }
        BlocksError::InvalidConfig { file, message } => {
            ErrorBlock::new(file.display().to_string(), message.clone())
                .with_fix("Fix the TOML config and try again.")
        }
        BlocksError::Io(_) => ErrorBlock::new("io", format!("{:#}", err)),
    };

    block.render(supports_color, supports_unicode)
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "message": format!("{:#}", err),
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    let caps = crate::ui::terminal::detect_capabilities();
    eprint!(
        "{}",
        format_error(err, caps.supports_color, caps.supports_unicode)
    );
}
