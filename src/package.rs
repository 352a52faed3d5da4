//! Package - the manifest aggregate a package author populates.
//!
//! A package is a name plus an ordered list of target descriptors. The
//! manifest program builds one up and the surrounding tool serializes it
//! for the build-graph builder once evaluation finishes.

use std::collections::HashMap;

use serde::Serialize;

use crate::target::TargetDescriptor;

/// A package manifest under evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    /// Package name
    pub name: String,

    /// Declared targets, in declaration order
    pub targets: Vec<TargetDescriptor>,
}

impl Package {
    /// Create an empty package.
    pub fn new(name: impl Into<String>) -> Self {
        Package {
            name: name.into(),
            targets: Vec::new(),
        }
    }

    /// Set the target list.
    pub fn with_targets(mut self, targets: impl IntoIterator<Item = TargetDescriptor>) -> Self {
        self.targets = targets.into_iter().collect();
        self
    }

    /// Append a target.
    pub fn add_target(&mut self, target: TargetDescriptor) {
        self.targets.push(target);
    }

    /// Get a target by name.
    pub fn target(&self, name: &str) -> Option<&TargetDescriptor> {
        self.targets.iter().find(|t| t.name == name)
    }

    /// Warn about targets sharing a name.
    ///
    /// Name uniqueness is enforced by the build graph, which can report
    /// it with full package context; this only surfaces the problem
    /// early in the evaluating tool's log.
    pub fn warn_duplicate_targets(&self) {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for target in &self.targets {
            *counts.entry(target.name.as_str()).or_insert(0) += 1;
        }
        for (name, count) in counts {
            if count > 1 {
                tracing::warn!(
                    "package `{}` declares {} targets named `{}`",
                    self.name,
                    count,
                    name
                );
            }
        }
    }

    /// Serialize to the canonical wire form.
    pub fn to_wire(&self) -> serde_json::Result<String> {
        tracing::debug!(
            "serializing package `{}` with {} targets",
            self.name,
            self.targets.len()
        );
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::v1;

    #[test]
    fn test_target_lookup() {
        let mut package = Package::new("berth");
        package.add_target(v1::target("Core").finish().unwrap());
        package.add_target(v1::test_target("CoreTests").finish().unwrap());

        assert_eq!(package.target("Core").map(|t| t.is_test()), Some(false));
        assert_eq!(package.target("CoreTests").map(|t| t.is_test()), Some(true));
        assert!(package.target("Missing").is_none());
    }

    #[test]
    fn test_wire_emits_name_before_targets() {
        let package = Package::new("berth").with_targets([v1::target("Core").finish().unwrap()]);

        let wire = package.to_wire().unwrap();
        assert!(wire.starts_with(r#"{"name":"berth","targets":["#));
    }

    #[test]
    fn test_declaration_order_preserved() {
        let package = Package::new("berth").with_targets([
            v1::target("B").finish().unwrap(),
            v1::target("A").finish().unwrap(),
        ]);

        let names: Vec<&str> = package.targets.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["B", "A"]);
    }
}
