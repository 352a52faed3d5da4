//! Format 2 construction surface.
//!
//! Format 2 extends the library, executable, and test builders with the
//! four per-language settings groups and adds system library targets.
//! With no settings supplied, a format 2 declaration produces exactly
//! the descriptor its format 1 counterpart would.

use crate::dependency::Dependency;
use crate::errors::TargetError;
use crate::provider::SystemPackageProvider;
use crate::settings::{CSetting, CxxSetting, LinkerSetting, SwiftSetting};
use crate::target::{TargetDescriptor, TargetKind};

/// Declare a library or executable target.
pub fn target(name: impl Into<String>) -> TargetBuilder {
    TargetBuilder {
        target: TargetDescriptor::new(name.into(), TargetKind::Regular),
    }
}

/// Declare a test-suite target.
pub fn test_target(name: impl Into<String>) -> TestTargetBuilder {
    TestTargetBuilder {
        target: TargetDescriptor::new(name.into(), TargetKind::Test),
    }
}

/// Declare a system library target wrapping a library installed on the
/// host.
///
/// System libraries are not compiled by the build graph, so the builder
/// carries no sources, dependencies, or settings; it locates the library
/// through `pkg-config` and names the package managers able to install
/// it.
pub fn system_library(name: impl Into<String>) -> SystemLibraryBuilder {
    SystemLibraryBuilder {
        target: TargetDescriptor::new(name.into(), TargetKind::System),
    }
}

/// Builder for library and executable targets.
#[derive(Debug, Clone)]
pub struct TargetBuilder {
    target: TargetDescriptor,
}

impl TargetBuilder {
    /// Set the dependency list. Bare strings become by-name references.
    pub fn with_dependencies(
        mut self,
        deps: impl IntoIterator<Item = impl Into<Dependency>>,
    ) -> Self {
        self.target.dependencies = deps.into_iter().map(Into::into).collect();
        self
    }

    /// Set a custom source root directory.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.target.path = Some(path.into());
        self
    }

    /// Set paths excluded from source inference.
    pub fn with_exclude(mut self, paths: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.target.exclude = paths.into_iter().map(|p| p.into()).collect();
        self
    }

    /// Set an explicit source list, bypassing inference.
    pub fn with_sources(mut self, sources: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.target.sources = Some(sources.into_iter().map(|s| s.into()).collect());
        self
    }

    /// Set the public headers directory.
    pub fn with_public_headers_path(mut self, path: impl Into<String>) -> Self {
        self.target.public_headers_path = Some(path.into());
        self
    }

    /// Supply the C settings group.
    pub fn with_c_settings(mut self, settings: impl IntoIterator<Item = CSetting>) -> Self {
        self.target.c_settings = Some(settings.into_iter().collect());
        self
    }

    /// Supply the C++ settings group.
    pub fn with_cxx_settings(mut self, settings: impl IntoIterator<Item = CxxSetting>) -> Self {
        self.target.cxx_settings = Some(settings.into_iter().collect());
        self
    }

    /// Supply the Swift settings group.
    pub fn with_swift_settings(mut self, settings: impl IntoIterator<Item = SwiftSetting>) -> Self {
        self.target.swift_settings = Some(settings.into_iter().collect());
        self
    }

    /// Supply the linker settings group.
    pub fn with_linker_settings(
        mut self,
        settings: impl IntoIterator<Item = LinkerSetting>,
    ) -> Self {
        self.target.linker_settings = Some(settings.into_iter().collect());
        self
    }

    /// Validate and produce the descriptor.
    pub fn finish(self) -> Result<TargetDescriptor, TargetError> {
        self.target.validate()?;
        Ok(self.target)
    }
}

/// Builder for test-suite targets.
///
/// Test suites have no public headers; the builder differs from
/// [`TargetBuilder`] only in leaving that field absent.
#[derive(Debug, Clone)]
pub struct TestTargetBuilder {
    target: TargetDescriptor,
}

impl TestTargetBuilder {
    /// Set the dependency list. Bare strings become by-name references.
    pub fn with_dependencies(
        mut self,
        deps: impl IntoIterator<Item = impl Into<Dependency>>,
    ) -> Self {
        self.target.dependencies = deps.into_iter().map(Into::into).collect();
        self
    }

    /// Set a custom source root directory.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.target.path = Some(path.into());
        self
    }

    /// Set paths excluded from source inference.
    pub fn with_exclude(mut self, paths: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.target.exclude = paths.into_iter().map(|p| p.into()).collect();
        self
    }

    /// Set an explicit source list, bypassing inference.
    pub fn with_sources(mut self, sources: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.target.sources = Some(sources.into_iter().map(|s| s.into()).collect());
        self
    }

    /// Supply the C settings group.
    pub fn with_c_settings(mut self, settings: impl IntoIterator<Item = CSetting>) -> Self {
        self.target.c_settings = Some(settings.into_iter().collect());
        self
    }

    /// Supply the C++ settings group.
    pub fn with_cxx_settings(mut self, settings: impl IntoIterator<Item = CxxSetting>) -> Self {
        self.target.cxx_settings = Some(settings.into_iter().collect());
        self
    }

    /// Supply the Swift settings group.
    pub fn with_swift_settings(mut self, settings: impl IntoIterator<Item = SwiftSetting>) -> Self {
        self.target.swift_settings = Some(settings.into_iter().collect());
        self
    }

    /// Supply the linker settings group.
    pub fn with_linker_settings(
        mut self,
        settings: impl IntoIterator<Item = LinkerSetting>,
    ) -> Self {
        self.target.linker_settings = Some(settings.into_iter().collect());
        self
    }

    /// Validate and produce the descriptor.
    pub fn finish(self) -> Result<TargetDescriptor, TargetError> {
        self.target.validate()?;
        Ok(self.target)
    }
}

/// Builder for system library targets.
#[derive(Debug, Clone)]
pub struct SystemLibraryBuilder {
    target: TargetDescriptor,
}

impl SystemLibraryBuilder {
    /// Set a custom directory for the library's module map.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.target.path = Some(path.into());
        self
    }

    /// Set the pkg-config name used to locate the library.
    pub fn with_pkg_config(mut self, name: impl Into<String>) -> Self {
        self.target.pkg_config = Some(name.into());
        self
    }

    /// Name the package managers able to install the library.
    pub fn with_providers(
        mut self,
        providers: impl IntoIterator<Item = SystemPackageProvider>,
    ) -> Self {
        self.target.providers = Some(providers.into_iter().collect());
        self
    }

    /// Validate and produce the descriptor.
    pub fn finish(self) -> Result<TargetDescriptor, TargetError> {
        self.target.validate()?;
        Ok(self.target)
    }
}
