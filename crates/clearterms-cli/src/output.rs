//! Terminal output formatting.

use std::time::Duration;

use clearterms_core::{
    AnalysisView, PolicyAnalysis, RiskFlag, ScoreTier, Section, UserRight, VerdictTone,
};
use colored::{ColoredString, Colorize};
use indicatif::{ProgressBar, ProgressStyle};
use unicode_width::UnicodeWidthStr;

/// Indentation for body lines under a heading.
const INDENT: &str = "    ";

/// Print a full analysis report.
pub fn print_analysis(analysis: &PolicyAnalysis) {
    print!("{}", render_analysis(analysis, term_width()));
}

/// Print the error panel for a failed analysis.
pub fn print_error_panel(message: &str) {
    println!("{}", render_error_panel(message));
}

/// Spinner shown while a submission is in flight.
pub fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        bar.set_style(style);
    }
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

/// Render a report for the given terminal width.
pub fn render_analysis(analysis: &PolicyAnalysis, width: usize) -> String {
    let view = AnalysisView::new(analysis);
    let body_width = width.saturating_sub(INDENT.len()).max(20);
    let mut out = String::new();

    out.push_str(&format!(
        "{} {} {}\n",
        pad_right("Transparency Score", 20).dimmed(),
        tier_colored(&view.score.to_string(), view.score_tier).bold(),
        "out of 100".dimmed()
    ));
    out.push_str(&format!(
        "{} {}\n",
        pad_right("Verdict", 20).dimmed(),
        tone_colored(view.verdict, view.verdict_tone).bold()
    ));
    out.push('\n');

    out.push_str(&format!("{}\n", "Summary".bold()));
    for line in wrap(view.summary, body_width) {
        out.push_str(&format!("{}{}\n", INDENT, line));
    }
    out.push('\n');

    out.push_str(&format!("{} {}\n", "⚠".red(), "Potential Risks".bold()));
    match view.risks {
        Section::Entries(risks) => {
            for risk in risks {
                render_risk(&mut out, risk, body_width);
            }
        }
        Section::Placeholder(text) => out.push_str(&format!("{}{}\n", INDENT, text.dimmed().italic())),
    }
    out.push('\n');

    out.push_str(&format!("{} {}\n", "✓".green(), "Your Rights".bold()));
    match view.rights {
        Section::Entries(rights) => {
            for right in rights {
                render_right(&mut out, right, body_width);
            }
        }
        Section::Placeholder(text) => out.push_str(&format!("{}{}\n", INDENT, text.dimmed().italic())),
    }

    out
}

fn render_risk(out: &mut String, risk: &RiskFlag, width: usize) {
    out.push_str(&format!(
        "{}{} {} {}\n",
        INDENT,
        "▸".red(),
        risk.category.red().bold(),
        format!("[{}]", risk.severity).red()
    ));
    for line in wrap(&risk.description, width.saturating_sub(2).max(10)) {
        out.push_str(&format!("{}  {}\n", INDENT, line.dimmed()));
    }
}

fn render_right(out: &mut String, right: &UserRight, width: usize) {
    out.push_str(&format!("{}{} {}\n", INDENT, "▸".green(), right.right.green().bold()));
    for line in wrap(&right.details, width.saturating_sub(2).max(10)) {
        out.push_str(&format!("{}  {}\n", INDENT, line.dimmed()));
    }
}

/// Render the error panel.
pub fn render_error_panel(message: &str) -> String {
    format!("{} {}", "✗".red().bold(), message.red())
}

fn tier_colored(text: &str, tier: ScoreTier) -> ColoredString {
    match tier {
        ScoreTier::High => text.green(),
        ScoreTier::Medium => text.yellow(),
        ScoreTier::Low => text.red(),
    }
}

fn tone_colored(text: &str, tone: VerdictTone) -> ColoredString {
    match tone {
        VerdictTone::Positive => text.green(),
        VerdictTone::Caution => text.yellow(),
        VerdictTone::Negative => text.red(),
    }
}

/// Get terminal width, defaulting to 80.
fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

/// Pad a plain string to a given visual width (right-padded).
fn pad_right(s: &str, width: usize) -> String {
    let visual = UnicodeWidthStr::width(s);
    if visual >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visual))
    }
}

/// Greedy word wrap by visual width. Words longer than `width` get their own line.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = UnicodeWidthStr::width(word);
            if current_width > 0 && current_width + 1 + word_width > width {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            if current_width > 0 {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(word);
            current_width += word_width;
        }

        lines.push(current);
    }

    lines
}
