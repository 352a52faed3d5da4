//! Version-gated construction surfaces for target descriptors.
//!
//! A manifest declares the format version it is written against, and the
//! surrounding tool hands author code the matching surface: [`v1`] for
//! the original format, [`v2`] for the format that added per-language
//! build settings and system library targets. Both surfaces funnel into
//! the same descriptor shape; none of the shared code branches on
//! version, so a `v1` and a `v2` declaration with the same inputs are
//! indistinguishable on the wire.

use std::str::FromStr;

use thiserror::Error;

pub mod v1;
pub mod v2;

/// The manifest format version a package declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ManifestFormat {
    /// Original format
    V1,

    /// Adds per-language build settings and system library targets
    V2,
}

impl ManifestFormat {
    /// Check if this format accepts per-language build settings.
    pub fn supports_build_settings(&self) -> bool {
        *self >= ManifestFormat::V2
    }

    /// Check if this format accepts system library targets.
    pub fn supports_system_libraries(&self) -> bool {
        *self >= ManifestFormat::V2
    }

    /// Get the version as the string a manifest declares.
    pub fn as_str(&self) -> &'static str {
        match self {
            ManifestFormat::V1 => "1",
            ManifestFormat::V2 => "2",
        }
    }
}

impl FromStr for ManifestFormat {
    type Err = ManifestFormatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" | "v1" => Ok(ManifestFormat::V1),
            "2" | "v2" => Ok(ManifestFormat::V2),
            _ => Err(ManifestFormatParseError(s.to_string())),
        }
    }
}

impl std::fmt::Display for ManifestFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an invalid manifest format string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid manifest format '{0}', valid values: 1, 2")]
pub struct ManifestFormatParseError(pub String);
