//! Report rendering for the `check` subcommand.

use lockstep_analysis::RunReport;
use lockstep_core::types::diagnostic::Diagnostic;

/// One line per violation, compiler style, then a summary unless quiet:
///
/// ```text
/// app/models/user.rb:4:1: error: Unmatched feature revision [id user-profiles, revision 4]
/// ```
pub fn print_text(report: &RunReport, quiet: bool) {
    for diagnostic in &report.diagnostics {
        println!(
            "{}: {}: {} [id {}, revision {}]",
            diagnostic.location,
            diagnostic.severity,
            diagnostic.message,
            diagnostic.feature_id,
            diagnostic.revision
        );
    }

    if quiet {
        return;
    }

    let stats = &report.stats;
    if !report.diagnostics.is_empty() {
        println!();
    }
    println!(
        "{} files scanned, {} skipped, {} feature ids, {} violation{}",
        stats.files_scanned,
        stats.files_skipped,
        stats.features_tracked,
        report.diagnostics.len(),
        if report.diagnostics.len() == 1 { "" } else { "s" }
    );
}

#[derive(serde::Serialize)]
struct JsonReport<'a> {
    violations: &'a [Diagnostic],
    files_scanned: usize,
    files_skipped: usize,
    features_tracked: usize,
}

/// Machine-readable report on stdout.
pub fn print_json(report: &RunReport) {
    let out = JsonReport {
        violations: &report.diagnostics,
        files_scanned: report.stats.files_scanned,
        files_skipped: report.stats.files_skipped,
        features_tracked: report.stats.features_tracked,
    };
    match serde_json::to_string_pretty(&out) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("lockstep: failed to serialize report: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lockstep_analysis::scanner::ScanStats;
    use lockstep_core::types::diagnostic::{Severity, SourceLocation};

    #[test]
    fn test_json_report_shape() {
        let report = RunReport {
            diagnostics: vec![Diagnostic {
                location: SourceLocation {
                    file: "b.rb".to_string(),
                    line: 4,
                    column: 1,
                    end_line: 4,
                    end_column: 44,
                },
                feature_id: "user-profiles".to_string(),
                revision: "4".to_string(),
                message: "Unmatched feature revision".to_string(),
                severity: Severity::Error,
            }],
            stats: ScanStats {
                files_scanned: 2,
                ..Default::default()
            },
        };

        let out = JsonReport {
            violations: &report.diagnostics,
            files_scanned: report.stats.files_scanned,
            files_skipped: report.stats.files_skipped,
            features_tracked: report.stats.features_tracked,
        };
        let json = serde_json::to_string(&out).unwrap();
        assert!(json.contains("\"user-profiles\""));
        assert!(json.contains("\"files_scanned\":2"));
        assert!(json.contains("\"severity\":\"error\""));
    }
}
