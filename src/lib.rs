//! Berth manifest core - declarative target descriptors.
//!
//! This crate is the data model a Berth package manifest evaluates into:
//! target descriptors built through a format-versioned construction
//! surface, normalized to one canonical shape, and serialized to the
//! JSON form the external build-graph builder consumes.
//!
//! The crate deliberately stops at the descriptor boundary. Source
//! discovery, dependency-graph resolution, compiler invocation, and
//! system package-manager lookups all happen downstream of the
//! serialized manifest.

pub mod dependency;
pub mod errors;
pub mod formats;
pub mod package;
pub mod provider;
pub mod settings;
pub mod target;

pub use dependency::Dependency;
pub use errors::TargetError;
pub use formats::{v1, v2, ManifestFormat, ManifestFormatParseError};
pub use package::Package;
pub use provider::SystemPackageProvider;
pub use settings::{CSetting, CxxSetting, LinkerSetting, SwiftSetting};
pub use target::{TargetDescriptor, TargetKind};
