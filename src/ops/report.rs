//! Identity report assembly.
//!
//! Snapshots the metadata record and the export surface into a form
//! suitable for the `about` banner and for machine-readable output.

use std::fmt::Write;

use serde::Serialize;

use crate::core::metadata::{Metadata, METADATA};
use crate::core::surface::{ExportSurface, PublicSymbol};

/// A snapshot of the distribution identity.
#[derive(Debug, Clone, Serialize)]
pub struct IdentityReport {
    /// Package name
    pub name: &'static str,

    /// The metadata record
    pub metadata: Metadata,

    /// Declared public symbols, in surface order
    pub symbols: Vec<PublicSymbol>,
}

/// Assemble the identity report for this distribution.
pub fn identity_report() -> IdentityReport {
    IdentityReport {
        name: env!("CARGO_PKG_NAME"),
        metadata: METADATA,
        symbols: ExportSurface::declared().iter().copied().collect(),
    }
}

/// Format the report as a terminal banner.
pub fn format_banner(report: &IdentityReport) -> String {
    let mut output = String::new();

    writeln!(output, "{} {}", report.name, report.metadata.version).unwrap();
    writeln!(output, "{}", report.metadata.description).unwrap();
    writeln!(output).unwrap();
    writeln!(output, "  Author:  {}", report.metadata.author).unwrap();
    writeln!(output, "  Contact: {}", report.metadata.contact_email).unwrap();

    let deferred = report.symbols.iter().filter(|s| s.is_deferred()).count();
    writeln!(
        output,
        "  Exports: {} declared symbols ({} deferred)",
        report.symbols.len(),
        deferred
    )
    .unwrap();

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_snapshot() {
        let report = identity_report();
        assert_eq!(report.name, "opencowork");
        assert_eq!(report.metadata, METADATA);
        assert_eq!(report.symbols.len(), 7);
        assert_eq!(report.symbols[0].name, "OpenCoworkClient");
    }

    #[test]
    fn test_banner_contains_identity() {
        let banner = format_banner(&identity_report());
        assert!(banner.contains("opencowork 1.2.0"));
        assert!(banner.contains("OpenCowork Team"));
        assert!(banner.contains("contact@agia.ai"));
        assert!(banner.contains("7 declared symbols (3 deferred)"));
    }

    #[test]
    fn test_report_serializes() {
        let json = serde_json::to_value(identity_report()).unwrap();
        assert_eq!(json["metadata"]["version"], "1.2.0");
        assert_eq!(json["symbols"][0]["name"], "OpenCoworkClient");
        assert_eq!(json["symbols"][0]["module"], "client");
        // Markers carry no module key at all
        assert!(json["symbols"][3].get("module").is_none());
    }
}
