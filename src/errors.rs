//! Target configuration error types.

use thiserror::Error;

/// Error raised when a target descriptor is assembled with an invalid
/// combination of fields.
///
/// This is the only runtime-checked condition in the manifest core.
/// Everything else that can be wrong with a declaration (paths escaping
/// the package root, unresolved dependency names, missing source files)
/// is diagnosed by the build graph after manifest evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetError {
    /// `pkgConfig` supplied for a target that is not a system library.
    #[error("target `{name}` is not a system library and cannot set `pkgConfig`")]
    PkgConfigOnNonSystem { name: String },

    /// `providers` supplied for a target that is not a system library.
    #[error("target `{name}` is not a system library and cannot set `providers`")]
    ProvidersOnNonSystem { name: String },
}
