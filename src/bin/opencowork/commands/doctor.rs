//! `opencowork doctor` command

use anyhow::Result;

use opencowork::ops::{doctor, format_report};

pub fn execute(verbose: bool) -> Result<()> {
    let report = doctor();

    // Print the formatted report
    print!("{}", format_report(&report, verbose));

    // Exit with error code if checks failed
    if !report.healthy() {
        std::process::exit(1);
    }

    Ok(())
}
