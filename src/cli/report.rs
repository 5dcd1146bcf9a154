//! Report formatting and printing utilities.
//!
//! Issues are printed in cargo-style format. Separate from core logic so
//! glossa can be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CommandResult, CommandSummary, DuplicatesSummary, FindSummary, InitSummary, ScanSummary,
    ValidateSummary, WriteSummary,
};
use crate::issues::{Issue, Report, ReportLocation, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format, sorted by location, followed by a
/// problem count.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort_by(compare_issues);

    // Calculate max line number width for alignment
    let max_line_width = calculate_max_line_width(&sorted);

    for issue in &sorted {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(&sorted, writer);
}

/// Print a warning about files that could not be parsed.
pub fn print_parse_warning(count: usize, verbose: bool) {
    print_parse_warning_to(count, verbose, &mut io::stderr().lock());
}

/// Print a parse warning to a custom writer.
pub fn print_parse_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

/// Print the "nothing to do" note for an informational outcome.
pub fn print_note(message: &str) {
    println!("{} {}", "note:".bold().cyan(), message);
}

/// Print the outcome of a command to stdout.
pub fn print(result: &CommandResult, verbose: bool) {
    print_to(result, &mut io::stdout().lock());
    print_parse_warning(result.parse_error_count, verbose);
}

pub fn print_to<W: Write>(result: &CommandResult, writer: &mut W) {
    report_to(&result.issues, writer);

    match &result.summary {
        CommandSummary::Scan(summary) => print_scan(result, summary, writer),
        CommandSummary::Write(summary) => print_write(summary, writer),
        CommandSummary::Validate(summary) => print_validate(result, summary, writer),
        CommandSummary::Duplicates(summary) => print_duplicates(result, summary, writer),
        CommandSummary::Find(summary) => print_find(summary, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let loc = issue.location();
    let path = loc.path();
    let (line, col) = loc.position();

    // Print severity and message (cargo-style)
    let severity = issue.report_severity();
    let severity_str = match severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    // Print clickable location: --> path:line:col
    match loc {
        ReportLocation::File { .. } => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), path);
        }
        _ => {
            let _ = writeln!(writer, "  {} {}:{}:{}", "-->".blue(), path, line, col);
        }
    }

    // Print source context if available
    if let ReportLocation::Source { source_line, .. } = loc {
        let caret_char = match severity {
            Severity::Error => "^".red(),
            Severity::Warning => "^".yellow(),
        };

        let _ = writeln!(
            writer,
            "{:>width$} {}",
            "",
            "|".blue(),
            width = max_line_width
        );
        let _ = writeln!(
            writer,
            "{:>width$} {} {}",
            line.to_string().blue(),
            "|".blue(),
            source_line,
            width = max_line_width
        );

        // Caret pointing to the column (col is 1-based)
        let prefix: String = source_line.chars().take(col.saturating_sub(1)).collect();
        let caret_padding = UnicodeWidthStr::width(prefix.as_str());
        let _ = writeln!(
            writer,
            "{:>width$} {} {:>padding$}{}",
            "",
            "|".blue(),
            "",
            caret_char,
            width = max_line_width,
            padding = caret_padding
        );
    }

    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            hint,
            width = max_line_width
        );
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Warning)
        .count();
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "{} {} ({} {}, {} {})",
            FAILURE_MARK.red(),
            plural(total_problems, "problem"),
            total_errors,
            if total_errors == 1 { "error" } else { "errors" }.red(),
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    }
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| match i.location() {
            ReportLocation::Source { line, .. } => Some(line),
            _ => None,
        })
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

fn compare_issues(a: &Issue, b: &Issue) -> std::cmp::Ordering {
    let a_loc = a.location();
    let b_loc = b.location();

    a_loc
        .path()
        .cmp(b_loc.path())
        .then_with(|| a_loc.position().cmp(&b_loc.position()))
        .then_with(|| a.report_rule().cmp(&b.report_rule()))
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}

fn print_success<W: Write>(message: String, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), message.green());
}

fn print_scan<W: Write>(result: &CommandResult, summary: &ScanSummary, writer: &mut W) {
    if result.issues.is_empty() {
        print_success(
            format!(
                "Scanned {} - no hardcoded strings found",
                plural(result.files_checked, "source file")
            ),
            writer,
        );
    }
    if let Some(path) = &summary.export {
        let _ = writeln!(
            writer,
            "{} scan report to {}",
            "Wrote".green().bold(),
            path.display()
        );
    }
}

fn print_write<W: Write>(summary: &WriteSummary, writer: &mut W) {
    print_success(
        format!(
            "{} {} in {}",
            summary.kind.verb(),
            plural(summary.key_count, "key"),
            summary.output.display()
        ),
        writer,
    );
    if let Some(path) = &summary.keymap {
        let _ = writeln!(writer, "  - key map: {}", path.display());
    }
    if let Some(merge) = &summary.baseline {
        let _ = writeln!(
            writer,
            "  - merged with {}: {} added, {} kept",
            merge.path.display(),
            merge.added,
            merge.kept
        );
        for key in &merge.preserved {
            let _ = writeln!(
                writer,
                "  - {} existing text kept under _value to add '{}'",
                "note:".bold(),
                key
            );
        }
    }
}

fn print_validate<W: Write>(result: &CommandResult, summary: &ValidateSummary, writer: &mut W) {
    if result.issues.is_empty() {
        print_success(
            format!(
                "Checked {} against {} ({} defined, {} used) - no issues found",
                plural(result.files_checked, "source file"),
                summary.baseline,
                plural(summary.defined_count, "key"),
                summary.used_count
            ),
            writer,
        );
    }
}

fn print_duplicates<W: Write>(result: &CommandResult, summary: &DuplicatesSummary, writer: &mut W) {
    if result.issues.is_empty() {
        print_success(
            format!(
                "Checked {} in {} - no duplicates found",
                plural(summary.entry_count, "key"),
                summary.baseline
            ),
            writer,
        );
    }
}

fn print_find<W: Write>(summary: &FindSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {} and {} for '{}':",
        "Found".green().bold(),
        plural(summary.strings.len(), "string"),
        plural(summary.keys.len(), "key usage"),
        summary.query
    );
    for occurrence in &summary.strings {
        let _ = writeln!(
            writer,
            "  {} {}:{}:{}  \"{}\"  {}",
            "-->".blue(),
            occurrence.file,
            occurrence.line,
            occurrence.column,
            occurrence.raw_value,
            format!("({})", occurrence.kind).dimmed()
        );
    }
    for usage in &summary.keys {
        let _ = writeln!(
            writer,
            "  {} {}:{}:{}  {}(\"{}\")",
            "-->".blue(),
            usage.file,
            usage.line,
            usage.column,
            usage.invoked_function,
            usage.key
        );
    }
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    let name = summary
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    print_success(format!("Created {}", name), writer);
}

// ============================================================
// Tests
// ============================================================
