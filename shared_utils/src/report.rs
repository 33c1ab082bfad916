//! Report Module
//!
//! Summary reporting for batch runs.

use crate::batch::BatchResult;
use console::{measure_text_width, pad_str, style, Alignment};
use std::time::Duration;

/// Display columns between the box borders.
const BOX_WIDTH: usize = 50;

pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs >= 3600 {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    } else if secs >= 60 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else if secs >= 1 {
        format!("{}s", secs)
    } else {
        format!("{}ms", duration.as_millis())
    }
}

/// One `║ ... ║` line, padded (or truncated) by display width so the right
/// border lines up regardless of emoji or styling.
fn boxed_row(content: &str) -> String {
    format!(
        "║{}║",
        pad_str(content, BOX_WIDTH, Alignment::Left, Some("…"))
    )
}

fn stat_row(icon: &str, label: &str, value: &str) -> String {
    let padding = 10usize.saturating_sub(measure_text_width(value));
    boxed_row(&format!(
        "  {} {:<18}{}{}",
        icon,
        label,
        " ".repeat(padding),
        value
    ))
}

fn summary_lines(result: &BatchResult, duration: Duration, operation_name: &str) -> Vec<String> {
    let border = "═".repeat(BOX_WIDTH);
    vec![
        format!("╔{}╗", border),
        boxed_row(&format!("  📊 {} Summary", operation_name)),
        format!("╠{}╣", border),
        stat_row("📁", "Candidates:", &result.total.to_string()),
        stat_row(
            "✅",
            "Converted:",
            &style(result.succeeded).green().to_string(),
        ),
        stat_row("⏩", "Skipped:", &style(result.skipped).yellow().to_string()),
        stat_row("📈", "Success Rate:", &format!("{:.1}%", result.success_rate())),
        stat_row("⏳", "Total Time:", &format_duration(duration)),
        format!("╚{}╝", border),
    ]
}

pub fn print_summary_report(result: &BatchResult, duration: Duration, operation_name: &str) {
    println!();
    for line in summary_lines(result, duration, operation_name) {
        println!("{}", line);
    }

    if !result.notices.is_empty() {
        println!();
        println!("{}", style("⚠️  Skipped files:").yellow().bold());
        for (path, reason) in &result.notices {
            println!("   {} → {}", path.display(), reason);
        }
    }
}
