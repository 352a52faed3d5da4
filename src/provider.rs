//! System package manager providers.
//!
//! A system library target can name the package managers able to install
//! the library it wraps. The hints are advisory: the system
//! package-manager integration surfaces them in diagnostics when the
//! library is missing, it never installs anything on its own.

use serde::{Deserialize, Serialize};

/// A package manager that can supply a system library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SystemPackageProvider {
    /// Homebrew packages
    Brew { packages: Vec<String> },

    /// APT packages
    Apt { packages: Vec<String> },
}

impl SystemPackageProvider {
    /// Homebrew provider hint.
    pub fn brew(packages: impl IntoIterator<Item = impl Into<String>>) -> Self {
        SystemPackageProvider::Brew {
            packages: packages.into_iter().map(|p| p.into()).collect(),
        }
    }

    /// APT provider hint.
    pub fn apt(packages: impl IntoIterator<Item = impl Into<String>>) -> Self {
        SystemPackageProvider::Apt {
            packages: packages.into_iter().map(|p| p.into()).collect(),
        }
    }

    /// Get the named packages.
    pub fn packages(&self) -> &[String] {
        match self {
            SystemPackageProvider::Brew { packages }
            | SystemPackageProvider::Apt { packages } => packages,
        }
    }
}
