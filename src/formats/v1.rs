//! Format 1 construction surface.
//!
//! Format 1 predates per-language build settings and system library
//! targets, so its builders expose only the shared target fields.

use crate::dependency::Dependency;
use crate::errors::TargetError;
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

    /// Validate and produce the descriptor.
    pub fn finish(self) -> Result<TargetDescriptor, TargetError> {
        self.target.validate()?;
        Ok(self.target)
    }
}
