//! Core data structures for the OpenCowork identity surface.
//!
//! This module contains the foundational types:
//! - The package metadata record (version, author, contact, description)
//! - The export surface (declared public symbols and their deferred homes)

pub mod metadata;
pub mod surface;

pub use metadata::{Metadata, MetadataError, METADATA};
pub use surface::{ExportSurface, PublicSymbol, SurfaceError, SymbolKind, PUBLIC_SYMBOLS};
