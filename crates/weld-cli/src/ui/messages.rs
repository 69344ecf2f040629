//! Status message functions for terminal output.

use owo_colors::OwoColorize;

use super::colors_enabled;

fn line(symbol: &str, message: &str, paint: impl Fn(&str) -> String) -> String {
    if colors_enabled() {
        paint(message)
    } else {
        format!("{symbol} {message}")
    }
}

/// Print a success message to stderr.
///
/// ```no_run
/// weld_cli::ui::success("Created react.ts source");
/// ```
pub fn success(message: &str) {
    eprintln!(
        "{}",
        line("✓", message, |m| format!("{} {}", "✓".green().bold(), m))
    );
}

/// Print an info message to stderr.
pub fn info(message: &str) {
    eprintln!(
        "{}",
        line("ℹ", message, |m| format!("{} {}", "ℹ".blue().bold(), m))
    );
}

/// Print a warning message to stderr.
pub fn warning(message: &str) {
    eprintln!(
        "{}",
        line("⚠", message, |m| format!("{} {}", "⚠".yellow().bold(), m.yellow()))
    );
}

/// Print an error message to stderr.
pub fn error(message: &str) {
    eprintln!(
        "{}",
        line("✗", message, |m| format!("{} {}", "✗".red().bold(), m.red()))
    );
}
