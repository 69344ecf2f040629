//! Formatting utilities for sizes, durations, and build summaries.

use std::path::Path;
use std::time::Duration;

use console::Term;
use owo_colors::OwoColorize;

use super::colors_enabled;

/// Format file size in human-readable format.
///
/// # Examples
///
/// ```
/// use weld_cli::ui::format_size;
///
/// assert_eq!(format_size(0), "0 B");
/// assert_eq!(format_size(500), "500 B");
/// assert_eq!(format_size(1536), "1.50 KB");
/// ```
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];

    let mut size = bytes as f64;
    let mut unit_idx = 0;
    while size >= 1024.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }

    if unit_idx == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.2} {}", size, UNITS[unit_idx])
    }
}

/// Format duration in human-readable format.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use weld_cli::ui::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(50)), "50ms");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
/// assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms < 1000 {
        format!("{}ms", total_ms)
    } else if total_ms < 60_000 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        let secs = duration.as_secs();
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

/// Print the files in `out_dir` with their sizes, then the total build time.
///
/// Files that cannot be read are skipped.
pub fn print_artifact_summary(out_dir: &Path, elapsed: Duration) {
    let mut entries: Vec<(String, u64)> = std::fs::read_dir(out_dir)
        .into_iter()
        .flatten()
        .flatten()
        .filter_map(|entry| {
            let meta = entry.metadata().ok()?;
            meta.is_file()
                .then(|| (entry.file_name().to_string_lossy().into_owned(), meta.len()))
        })
        .collect();
    entries.sort();

    let width = (Term::stderr().size().1 as usize).clamp(20, 60);
    let rule = "─".repeat(width);
    let color = colors_enabled();

    eprintln!("{rule}");
    for (name, size) in &entries {
        if color {
            eprintln!("  {} {} {}", "▸".blue(), name.bold(), format_size(*size).dimmed());
        } else {
            eprintln!("  ▸ {} {}", name, format_size(*size));
        }
    }
    eprintln!("{rule}");
    eprintln!("  Done in {}", format_duration(elapsed));
}
