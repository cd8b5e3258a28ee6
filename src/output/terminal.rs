//! Terminal output formatting with colors and box drawing.

use colored::Colorize;

use crate::study::StudySummary;

/// Format a StudySummary for human-readable terminal output.
///
/// Uses ANSI colors and Unicode box drawing. Power is color-graded:
/// green at or above the conventional 0.8 threshold, yellow when the
/// study is a coin flip or better, red below.
pub fn format_summary(summary: &StudySummary) -> String {
    let mut output = String::new();

    let header = "POWER STUDY".bold().to_string();
    output.push_str(&format_box_top());
    output.push_str(&format_box_line(&header));
    output.push_str(&format_box_separator());

    let power_pct = summary.empirical_power * 100.0;
    let power_str = format!("Empirical Power: {power_pct:.1}%");
    let power_colored = if summary.empirical_power >= 0.8 {
        power_str.green()
    } else if summary.empirical_power >= 0.5 {
        power_str.yellow()
    } else {
        power_str.red()
    };
    output.push_str(&format_box_line(&power_colored.to_string()));

    let significant_str = format!(
        "Significant: {}/{} trials",
        summary.significant_count(),
        summary.n_trials
    );
    output.push_str(&format_box_line(&significant_str));

    let estimate_str = format!("Mean Estimate: r = {:.3}", summary.mean_estimate());
    output.push_str(&format_box_line(&estimate_str));

    output.push_str(&format_box_separator());

    let sample_str = format!("Sample Size: {} per trial", summary.sample_size);
    output.push_str(&format_box_line(&sample_str));

    let alpha_str = format!("Alpha: {:.3}", summary.alpha);
    output.push_str(&format_box_line(&alpha_str));

    let seed_str = format!("Seed: {}", summary.seed);
    output.push_str(&format_box_line(&seed_str));

    output.push_str(&format_box_bottom());
    output
}

// Box drawing helpers

const BOX_WIDTH: usize = 60;

fn format_box_top() -> String {
    format!("\u{250C}{}\u{2510}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_bottom() -> String {
    format!("\u{2514}{}\u{2518}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_separator() -> String {
    format!("\u{251C}{}\u{2524}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_line(content: &str) -> String {
    // Strip ANSI codes for length calculation
    let visible_len = strip_ansi_codes(content).chars().count();
    let padding = if visible_len < BOX_WIDTH - 2 {
        BOX_WIDTH - 2 - visible_len
    } else {
        0
    };
    format!("\u{2502} {}{} \u{2502}\n", content, " ".repeat(padding))
}

/// Strip ANSI escape codes for accurate length calculation.
fn strip_ansi_codes(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Skip until 'm' (end of ANSI sequence)
            while let Some(&next) = chars.peek() {
                chars.next();
                if next == 'm' {
                    break;
                }
            }
        } else {
            result.push(c);
        }
    }
    result
}
