//! The target descriptor aggregate and its construction-time invariant.

use serde::Serialize;

use crate::dependency::Dependency;
use crate::errors::TargetError;
use crate::provider::SystemPackageProvider;
use crate::settings::{CSetting, CxxSetting, LinkerSetting, SwiftSetting};

/// The kind of target being declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    /// Library or executable, compiled from sources
    Regular,

    /// Test suite
    Test,

    /// Adapter around a library installed by the system package manager
    System,
}

impl TargetKind {
    /// Check if this is a system library target.
    pub fn is_system(&self) -> bool {
        matches!(self, TargetKind::System)
    }
}

/// One compilation unit declared in a package manifest.
///
/// Descriptors are created through the construction surfaces in
/// [`crate::formats`]; author code may keep reconfiguring the public
/// fields afterwards, up until the manifest is evaluated. `kind`,
/// `pkg_config`, and `providers` are fixed at construction.
///
/// The serialized form is the canonical shape the build-graph builder
/// consumes: field order is fixed, absent optional fields are emitted as
/// `null`, and the four settings groups are omitted entirely when not
/// supplied. Serialize with [`TargetDescriptor::to_wire`] (or any
/// streaming serializer); converting through `serde_json::Value` would
/// re-sort the keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetDescriptor {
    /// Target name
    pub name: String,

    /// Custom source root, relative to the package root; preserved
    /// verbatim (the build graph rejects escaping paths, not this core)
    pub path: Option<String>,

    /// Explicit source list. `None` means sources are inferred from
    /// `path` by the discovery engine; `Some` bypasses discovery.
    pub sources: Option<Vec<String>>,

    /// Paths excluded during source inference; wins over `sources`
    pub exclude: Vec<String>,

    /// Dependency list, order preserved. Duplicates are allowed; the
    /// resolver disambiguates them.
    pub dependencies: Vec<Dependency>,

    /// Public headers directory for non-system targets. `None` leaves
    /// the discovery engine to apply its `include` default.
    pub public_headers_path: Option<String>,

    #[serde(rename = "type")]
    pub(crate) kind: TargetKind,

    pub(crate) pkg_config: Option<String>,

    pub(crate) providers: Option<Vec<SystemPackageProvider>>,

    /// C compile settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub c_settings: Option<Vec<CSetting>>,

    /// C++ compile settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cxx_settings: Option<Vec<CxxSetting>>,

    /// Swift compile settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swift_settings: Option<Vec<SwiftSetting>>,

    /// Link settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linker_settings: Option<Vec<LinkerSetting>>,
}

impl TargetDescriptor {
    /// Create an empty descriptor of the given kind.
    pub(crate) fn new(name: String, kind: TargetKind) -> Self {
        TargetDescriptor {
            name,
            path: None,
            sources: None,
            exclude: Vec::new(),
            dependencies: Vec::new(),
            public_headers_path: None,
            kind,
            pkg_config: None,
            providers: None,
            c_settings: None,
            cxx_settings: None,
            swift_settings: None,
            linker_settings: None,
        }
    }

    /// Get the target kind.
    pub fn kind(&self) -> TargetKind {
        self.kind
    }

    /// Check if this is a test target.
    pub fn is_test(&self) -> bool {
        self.kind == TargetKind::Test
    }

    /// Get the pkg-config name for system library targets.
    pub fn pkg_config(&self) -> Option<&str> {
        self.pkg_config.as_deref()
    }

    /// Get the system package provider hints.
    pub fn providers(&self) -> Option<&[SystemPackageProvider]> {
        self.providers.as_deref()
    }

    /// Validate the descriptor's field combination.
    ///
    /// `pkg_config` and `providers` describe how to locate an
    /// already-built system library and are meaningless on targets the
    /// build graph compiles itself. Every construction path runs this
    /// check before yielding a descriptor.
    pub fn validate(&self) -> Result<(), TargetError> {
        if !self.kind.is_system() {
            if self.pkg_config.is_some() {
                return Err(TargetError::PkgConfigOnNonSystem {
                    name: self.name.clone(),
                });
            }
            if self.providers.is_some() {
                return Err(TargetError::ProvidersOnNonSystem {
                    name: self.name.clone(),
                });
            }
        }
        Ok(())
    }

    /// Serialize to the canonical wire form.
    pub fn to_wire(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_test_tracks_kind() {
        assert!(!TargetDescriptor::new("a".to_string(), TargetKind::Regular).is_test());
        assert!(TargetDescriptor::new("b".to_string(), TargetKind::Test).is_test());
        assert!(!TargetDescriptor::new("c".to_string(), TargetKind::System).is_test());
    }

    #[test]
    fn test_validate_rejects_pkg_config_on_regular() {
        let mut target = TargetDescriptor::new("Core".to_string(), TargetKind::Regular);
        target.pkg_config = Some("zlib".to_string());

        let err = target.validate().unwrap_err();
        assert_eq!(
            err,
            TargetError::PkgConfigOnNonSystem {
                name: "Core".to_string()
            }
        );
    }

    #[test]
    fn test_validate_rejects_providers_on_test() {
        let mut target = TargetDescriptor::new("CoreTests".to_string(), TargetKind::Test);
        target.providers = Some(vec![SystemPackageProvider::apt(["zlib1g-dev"])]);

        let err = target.validate().unwrap_err();
        assert_eq!(
            err,
            TargetError::ProvidersOnNonSystem {
                name: "CoreTests".to_string()
            }
        );
    }

    #[test]
    fn test_validate_accepts_system_library_fields() {
        let mut target = TargetDescriptor::new("CZlib".to_string(), TargetKind::System);
        target.pkg_config = Some("zlib".to_string());
        target.providers = Some(vec![SystemPackageProvider::brew(["zlib"])]);

        assert!(target.validate().is_ok());
    }

    #[test]
    fn test_empty_descriptor_wire_shape() {
        let target = TargetDescriptor::new("Core".to_string(), TargetKind::Regular);
        assert_eq!(
            target.to_wire().unwrap(),
            r#"{"name":"Core","path":null,"sources":null,"exclude":[],"dependencies":[],"publicHeadersPath":null,"type":"regular","pkgConfig":null,"providers":null}"#
        );
    }

    #[test]
    fn test_single_settings_group_emits_single_key() {
        let mut target = TargetDescriptor::new("Core".to_string(), TargetKind::Regular);
        target.linker_settings = Some(vec![LinkerSetting::linked_library("z")]);

        let wire = target.to_wire().unwrap();
        assert!(wire.contains(r#""linkerSettings":[{"kind":"linkedLibrary","name":"z"}]"#));
        assert!(!wire.contains("cSettings"));
        assert!(!wire.contains("cxxSettings"));
        assert!(!wire.contains("swiftSettings"));
    }

    #[test]
    fn test_empty_settings_group_still_emitted() {
        // An explicitly supplied empty group is present, not omitted.
        let mut target = TargetDescriptor::new("Core".to_string(), TargetKind::Regular);
        target.c_settings = Some(Vec::new());

        let wire = target.to_wire().unwrap();
        assert!(wire.ends_with(r#""cSettings":[]}"#));
    }
}
