//! Dependency references between targets.
//!
//! A target names the things it builds against in one of three ways:
//! another target in the same package, a product vended by a package
//! dependency, or a bare name left for the resolver to classify once the
//! whole package graph is known.

use serde::{Deserialize, Serialize};

/// A reference from one target to another buildable entity.
///
/// The serialized form tags each shape (`target`, `product`, `byName`)
/// so the build-graph resolver can pattern-match on it. No name syntax
/// is validated here; that is the resolver's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Dependency {
    /// A target declared in the same package.
    Target {
        /// Target name
        name: String,
    },

    /// A product vended by a package dependency.
    Product {
        /// Product name
        name: String,

        /// Owning package, when the product name alone is ambiguous
        package: Option<String>,
    },

    /// A bare name, classified as a target or product by the resolver.
    ByName {
        /// Target or product name
        name: String,
    },
}

impl Dependency {
    /// Reference a target in the same package.
    pub fn target(name: impl Into<String>) -> Self {
        Dependency::Target { name: name.into() }
    }

    /// Reference a product, optionally qualified by its owning package.
    pub fn product(name: impl Into<String>, package: Option<&str>) -> Self {
        Dependency::Product {
            name: name.into(),
            package: package.map(|p| p.to_string()),
        }
    }

    /// Reference a target or product by bare name.
    pub fn by_name(name: impl Into<String>) -> Self {
        Dependency::ByName { name: name.into() }
    }

    /// Get the referenced name, whatever the shape.
    pub fn name(&self) -> &str {
        match self {
            Dependency::Target { name }
            | Dependency::Product { name, .. }
            | Dependency::ByName { name } => name,
        }
    }

    /// Get the owning package for product references.
    pub fn package(&self) -> Option<&str> {
        match self {
            Dependency::Product { package, .. } => package.as_deref(),
            _ => None,
        }
    }
}

impl From<&str> for Dependency {
    fn from(name: &str) -> Self {
        Dependency::by_name(name)
    }
}

impl From<String> for Dependency {
    fn from(name: String) -> Self {
        Dependency::ByName { name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_string_is_by_name() {
        let shorthand: Dependency = "Utils".into();
        assert_eq!(shorthand, Dependency::by_name("Utils"));
        assert_eq!(shorthand.name(), "Utils");
    }

    #[test]
    fn test_owned_string_is_by_name() {
        let shorthand: Dependency = String::from("Utils").into();
        assert_eq!(shorthand, Dependency::by_name("Utils"));
    }

    #[test]
    fn test_product_package_qualifier() {
        let dep = Dependency::product("Logging", Some("swift-log"));
        assert_eq!(dep.name(), "Logging");
        assert_eq!(dep.package(), Some("swift-log"));

        let unqualified = Dependency::product("Logging", None);
        assert_eq!(unqualified.package(), None);
    }

    #[test]
    fn test_wire_tags() {
        let target = serde_json::to_string(&Dependency::target("Core")).unwrap();
        assert_eq!(target, r#"{"type":"target","name":"Core"}"#);

        let by_name = serde_json::to_string(&Dependency::by_name("Utils")).unwrap();
        assert_eq!(by_name, r#"{"type":"byName","name":"Utils"}"#);

        let product =
            serde_json::to_string(&Dependency::product("Logging", Some("swift-log"))).unwrap();
        assert_eq!(
            product,
            r#"{"type":"product","name":"Logging","package":"swift-log"}"#
        );
    }
}
