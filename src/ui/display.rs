//! Status lines printed around a generation run

use console::Style;

use crate::config::GeneratorConfig;
use crate::emit::WriteOutcome;
use crate::generator::GenerationReport;

/// File names produced by a run, one per line, declarations first
pub fn display_output_files() {
    for name in GeneratorConfig::output_files() {
        println!("{name}");
    }
}

fn outcome_label(outcome: WriteOutcome) -> String {
    match outcome {
        WriteOutcome::Created => Style::new().green().apply_to("created").to_string(),
        WriteOutcome::Updated => Style::new().yellow().apply_to("updated").to_string(),
        WriteOutcome::Unchanged => Style::new().dim().apply_to("unchanged").to_string(),
    }
}

/// Summary after a successful run
pub fn display_summary(report: &GenerationReport) {
    println!(
        "{} {} transaction(s), {} indexed ({} bytes -> {} compressed)",
        Style::new().bold().green().apply_to("Embedded"),
        report.names.len(),
        report.indexed.len(),
        report.raw_bytes,
        report.compressed_bytes
    );
    println!(
        "{} {} ({})",
        Style::new().bold().apply_to("Declarations generated:"),
        report.declarations.display(),
        outcome_label(report.declarations_outcome)
    );
    println!(
        "{} {} ({})",
        Style::new().bold().apply_to("Definitions generated:"),
        report.definitions.display(),
        outcome_label(report.definitions_outcome)
    );
}
