//! Package metadata record.
//!
//! The record is the single source of identity for the OpenCowork
//! distribution. It is built at compile time and never mutated; every
//! accessor is a constant-time read.

use semver::Version;
use serde::Serialize;
use thiserror::Error;

/// Static identity of the OpenCowork distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Metadata {
    /// Version string (plain three-component semver)
    pub version: &'static str,

    /// Display name of the authoring team
    pub author: &'static str,

    /// Contact address for the distribution
    pub contact_email: &'static str,

    /// Human-readable summary
    pub description: &'static str,
}

/// The one metadata record for this distribution.
pub const METADATA: Metadata = Metadata {
    version: "1.2.0",
    author: "OpenCowork Team",
    contact_email: "contact@agia.ai",
    description: "AI Code Auto-Generator - Intelligent code generation and task \
                  execution system based on Claude Sonnet",
};

/// Errors raised when interpreting the metadata record.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// The version string does not parse as a semantic version.
    #[error("invalid version `{version}`: {source}")]
    InvalidVersion {
        version: &'static str,
        #[source]
        source: semver::Error,
    },

    /// The version carries pre-release or build components.
    #[error("version `{version}` is not a plain MAJOR.MINOR.PATCH version")]
    NotPlainVersion { version: &'static str },
}

impl Metadata {
    /// Parse the version string as semver.
    ///
    /// The distribution commits to plain `MAJOR.MINOR.PATCH` versions, so
    /// pre-release and build metadata are rejected.
    pub fn semver(&self) -> Result<Version, MetadataError> {
        let version = Version::parse(self.version).map_err(|source| {
            MetadataError::InvalidVersion {
                version: self.version,
                source,
            }
        })?;

        if !version.pre.is_empty() || !version.build.is_empty() {
            return Err(MetadataError::NotPlainVersion {
                version: self.version,
            });
        }

        Ok(version)
    }
}

/// Get the fixed version string.
pub const fn version() -> &'static str {
    METADATA.version
}

/// Get the authoring team name.
pub const fn author() -> &'static str {
    METADATA.author
}

/// Get the contact address.
pub const fn contact_email() -> &'static str {
    METADATA.contact_email
}

/// Get the human-readable summary.
pub const fn description() -> &'static str {
    METADATA.description
}
