//! Output formatting utilities

use crate::application::{ApplyReport, FileOutcome};

/// Status shown next to a file name
pub fn outcome_label(outcome: &FileOutcome, dry_run: bool) -> String {
    match outcome {
        FileOutcome::Updated if dry_run => "would update".to_string(),
        FileOutcome::Updated => "updated".to_string(),
        FileOutcome::AlreadyTagged => "skipped (already tagged)".to_string(),
        FileOutcome::NoAnchor => "skipped (no anchor)".to_string(),
        FileOutcome::Unmapped => "skipped (unmapped)".to_string(),
        FileOutcome::Error(msg) => format!("error ({})", msg),
    }
}

/// Format a batch report: one line per file, missing pages, then a summary
pub fn format_report(report: &ApplyReport) -> String {
    let mut output = String::new();

    if report.files.is_empty() {
        output.push_str("No templates found\n");
    }

    for file in &report.files {
        output.push_str(&format!(
            "{}: {}\n",
            file.name,
            outcome_label(&file.outcome, report.dry_run)
        ));
    }

    for name in &report.missing_pages {
        output.push_str(&format!("{}: not found (configured page)\n", name));
    }

    if report.dry_run {
        output.push_str(&format!(
            "Dry run: {} file(s) would be updated, {} skipped, {} error(s).",
            report.updated(),
            report.skipped(),
            report.errored()
        ));
    } else {
        output.push_str(&format!(
            "Updated {} file(s), {} skipped, {} error(s).",
            report.updated(),
            report.skipped(),
            report.errored()
        ));
    }

    output
}
