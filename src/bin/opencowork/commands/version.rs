//! `opencowork version` command

use anyhow::Result;

use crate::cli::VersionArgs;
use opencowork::core::metadata;

pub fn execute(args: VersionArgs) -> Result<()> {
    if args.json {
        println!("{}", serde_json::json!({ "version": metadata::version() }));
    } else {
        println!("{}", metadata::version());
    }

    Ok(())
}
