//! `opencowork about` command
//!
//! Prints the identity banner, or the full identity report as JSON.

use anyhow::Result;

use crate::cli::AboutArgs;
use opencowork::ops::{format_banner, identity_report};

pub fn execute(args: AboutArgs) -> Result<()> {
    let report = identity_report();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", format_banner(&report));
    }

    Ok(())
}
