//! Output formatting helpers.

use colored::Colorize;

use lectern_core::traits::CallLogger;
use lectern_core::{CallRecord, RunSummary};

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Logger that prints one colored console line per recorded call.
pub struct ConsoleLogger;

impl CallLogger for ConsoleLogger {
    fn on_call(&self, call: &CallRecord) {
        println!("{}", call.console_line());
    }
}

/// Print the end-of-run summary block.
pub fn print_summary(summary: &RunSummary) {
    println!();
    if summary.all_checks_passed() {
        success("All checks passed");
    } else {
        error(&format!("{} of {} checks failed", summary.checks_failed, summary.requests));
    }
    field("Iterations", &summary.iterations.to_string());
    field("Requests", &summary.requests.to_string());
    field(
        "Checks",
        &format!(
            "{} passed, {} failed",
            summary.checks_passed, summary.checks_failed
        ),
    );
    field("Duration", &format!("{}ms", summary.duration_ms));
    for group in &summary.groups {
        field(
            &group.name,
            &format!("{}/{} passed", group.passed, group.requests),
        );
    }
}
