//! Identity health checks.
//!
//! The `doctor` command verifies the invariants of the identity surface:
//! the version string, the record fields, and the export manifest.
//!
//! ## Usage
//!
//! ```bash
//! opencowork doctor               # Quick check
//! opencowork doctor --verbose     # Detailed output
//! ```
//!
//! ## Checks Performed
//!
//! - Version parses as a plain three-component semver
//! - Record fields are non-empty
//! - Contact address looks like an email address
//! - Export manifest is free of duplicates and unanchored symbols
//! - Metadata markers mirror the record fields

use crate::core::metadata::{Metadata, METADATA};
use crate::core::surface::{ExportSurface, SymbolKind};

/// Result of a single health check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Name of the check
    pub name: String,

    /// Whether the check passed
    pub passed: bool,

    /// Human-readable status message
    pub message: String,
}

impl CheckResult {
    /// Create a passing check result.
    pub fn pass(name: impl Into<String>, message: impl Into<String>) -> Self {
        CheckResult {
            name: name.into(),
            passed: true,
            message: message.into(),
        }
    }

    /// Create a failing check result.
    pub fn fail(name: impl Into<String>, message: impl Into<String>) -> Self {
        CheckResult {
            name: name.into(),
            passed: false,
            message: message.into(),
        }
    }
}

/// Summary of all health checks.
#[derive(Debug, Clone, Default)]
pub struct DoctorReport {
    /// Individual check results
    pub checks: Vec<CheckResult>,
}

impl DoctorReport {
    /// Create a new empty report.
    pub fn new() -> Self {
        DoctorReport::default()
    }

    /// Add a check result.
    pub fn add(&mut self, check: CheckResult) {
        self.checks.push(check);
    }

    /// Check if every check passed.
    pub fn healthy(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    /// Get the count of passed checks.
    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    /// Get the count of failed checks.
    pub fn failed_count(&self) -> usize {
        self.checks.iter().filter(|c| !c.passed).count()
    }
}

/// Run all identity checks against the distribution record and surface.
pub fn doctor() -> DoctorReport {
    let report = run_checks(&METADATA, ExportSurface::declared());
    tracing::debug!(
        "ran {} identity checks, {} failed",
        report.checks.len(),
        report.failed_count()
    );
    report
}

fn run_checks(meta: &Metadata, surface: ExportSurface) -> DoctorReport {
    let mut report = DoctorReport::new();

    report.add(check_version(meta));
    report.add(check_fields(meta));
    report.add(check_email(meta));
    report.add(check_surface(surface));
    report.add(check_markers(surface));

    report
}

/// Check that the version string parses as plain semver.
fn check_version(meta: &Metadata) -> CheckResult {
    match meta.semver() {
        Ok(version) => CheckResult::pass("Version", format!("{} parses as semver", version)),
        Err(e) => CheckResult::fail("Version", e.to_string()),
    }
}

/// Check that no record field is empty.
fn check_fields(meta: &Metadata) -> CheckResult {
    let mut empty = Vec::new();

    if meta.version.is_empty() {
        empty.push("version");
    }
    if meta.author.is_empty() {
        empty.push("author");
    }
    if meta.contact_email.is_empty() {
        empty.push("contact_email");
    }
    if meta.description.is_empty() {
        empty.push("description");
    }

    if empty.is_empty() {
        CheckResult::pass("Record", "All record fields are populated")
    } else {
        CheckResult::fail("Record", format!("Empty fields: {}", empty.join(", ")))
    }
}

/// Check that the contact address is shaped like an email address.
fn check_email(meta: &Metadata) -> CheckResult {
    match meta.contact_email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => {
            CheckResult::pass("Contact", format!("{} looks reachable", meta.contact_email))
        }
        _ => CheckResult::fail(
            "Contact",
            format!("`{}` is not an email address", meta.contact_email),
        ),
    }
}

/// Check the export manifest invariants.
fn check_surface(surface: ExportSurface) -> CheckResult {
    match surface.validate() {
        Ok(()) => CheckResult::pass(
            "Surface",
            format!("{} declared symbols, no conflicts", surface.len()),
        ),
        Err(e) => CheckResult::fail("Surface", e.to_string()),
    }
}

/// Check that the metadata markers mirror the record fields.
fn check_markers(surface: ExportSurface) -> CheckResult {
    let expected = ["version", "author", "email", "description"];

    let missing: Vec<&str> = expected
        .iter()
        .filter(|name| {
            surface
                .get(name)
                .map_or(true, |s| s.kind != SymbolKind::Metadata)
        })
        .copied()
        .collect();

    if missing.is_empty() {
        CheckResult::pass("Markers", "All metadata markers are declared")
    } else {
        CheckResult::fail(
            "Markers",
            format!("Missing or misdeclared markers: {}", missing.join(", ")),
        )
    }
}

/// Format the report for terminal output.
pub fn format_report(report: &DoctorReport, verbose: bool) -> String {
    use std::fmt::Write;

    let mut output = String::new();

    writeln!(output, "OpenCowork Doctor").unwrap();
    writeln!(output, "=================\n").unwrap();

    writeln!(output, "Checks:").unwrap();
    for check in &report.checks {
        let status = if check.passed { "[OK]" } else { "[!!]" };
        writeln!(output, "  {} {}", status, check.name).unwrap();

        if verbose || !check.passed {
            writeln!(output, "      {}", check.message).unwrap();
        }
    }

    writeln!(output).unwrap();
    writeln!(
        output,
        "Summary: {} passed, {} failed",
        report.passed_count(),
        report.failed_count()
    )
    .unwrap();

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::surface::PublicSymbol;

    #[test]
    fn test_distribution_is_healthy() {
        let report = doctor();
        assert!(report.healthy());
        assert_eq!(report.passed_count(), 5);
        assert_eq!(report.failed_count(), 0);
    }

    #[test]
    fn test_bad_version_fails_check() {
        let meta = Metadata {
            version: "2.x",
            ..METADATA
        };
        let check = check_version(&meta);
        assert!(!check.passed);
        assert!(check.message.contains("2.x"));
    }

    #[test]
    fn test_empty_field_fails_check() {
        let meta = Metadata {
            author: "",
            ..METADATA
        };
        let check = check_fields(&meta);
        assert!(!check.passed);
        assert!(check.message.contains("author"));
    }

    #[test]
    fn test_bad_email_fails_check() {
        let meta = Metadata {
            contact_email: "not-an-address",
            ..METADATA
        };
        let check = check_email(&meta);
        assert!(!check.passed);
    }

    #[test]
    fn test_marker_drift_fails_check() {
        // A surface that dropped the `email` marker
        const DRIFTED: [PublicSymbol; 6] = [
            PublicSymbol::ty("OpenCoworkClient", "client"),
            PublicSymbol::function("create_client", "client"),
            PublicSymbol::ty("OpenCoworkMain", "entry"),
            PublicSymbol::metadata("version"),
            PublicSymbol::metadata("author"),
            PublicSymbol::metadata("description"),
        ];
        let surface = ExportSurface::with_symbols(&DRIFTED);

        let check = check_markers(surface);
        assert!(!check.passed);
        assert!(check.message.contains("email"));
    }

    #[test]
    fn test_format_report_lists_checks() {
        let report = doctor();
        let output = format_report(&report, false);
        assert!(output.contains("OpenCowork Doctor"));
        assert!(output.contains("[OK] Version"));
        assert!(output.contains("Summary: 5 passed, 0 failed"));
    }

    #[test]
    fn test_format_report_verbose_shows_messages() {
        let report = doctor();
        let output = format_report(&report, true);
        assert!(output.contains("parses as semver"));
    }
}
