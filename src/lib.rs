//! OpenCowork - AI-powered intelligent code generation and autonomous task execution system
//!
//! This crate is the identity surface of the OpenCowork distribution:
//! the package metadata record and the declared public-symbol manifest.
//!
//! The heavy collaborator modules the manifest points at (the client, the
//! entry point, the config loader, the tool executor) are never loaded
//! from here. Consumers import those explicitly from their defining
//! crates when needed:
//!
//! ```text
//! use opencowork::client::{OpenCoworkClient, create_client};
//! use opencowork::entry::OpenCoworkMain;
//! ```

pub mod core;
pub mod ops;

pub use crate::core::{
    metadata::{author, contact_email, description, version, Metadata, MetadataError, METADATA},
    surface::{ExportSurface, PublicSymbol, SurfaceError, SymbolKind},
};
