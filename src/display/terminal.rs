//! TTY detection and color support logic

use std::io::IsTerminal;

use crate::config::ColorChoice;

/// Decide whether Markdown output gets colors.
///
/// `always` and `never` are final. In `auto`, `NO_COLOR` wins over
/// `CLICOLOR_FORCE`, which wins over `CLICOLOR=0`, then stdout must be a TTY.
pub fn should_use_colors(choice: ColorChoice) -> bool {
    match choice {
        ColorChoice::Always => return true,
        ColorChoice::Never => return false,
        ColorChoice::Auto => {}
    }

    // https://no-color.org/
    if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        return false;
    }

    if std::env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0") {
        return true;
    }

    if std::env::var("CLICOLOR").is_ok_and(|v| v == "0") {
        return false;
    }

    std::io::stdout().is_terminal()
}
