//! `opencowork symbols` command
//!
//! Lists the declared public symbols. For deferred symbols the explicit
//! import form is shown; metadata markers are listed bare.

use anyhow::Result;

use crate::cli::SymbolsArgs;
use opencowork::core::surface::{ExportSurface, PublicSymbol};

pub fn execute(args: SymbolsArgs) -> Result<()> {
    let surface = ExportSurface::declared();

    let symbols: Vec<&PublicSymbol> = if args.deferred {
        surface.deferred().collect()
    } else {
        surface.iter().collect()
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&symbols)?);
    } else {
        for symbol in symbols {
            match symbol.import_hint() {
                Some(hint) => println!("{:<20} {}", symbol.name, hint),
                None => println!("{}", symbol.name),
            }
        }
    }

    Ok(())
}
