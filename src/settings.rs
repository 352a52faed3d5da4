//! Per-language build settings attached to a target.
//!
//! Settings are declared per language family and carried through the
//! descriptor untouched; the compiler driver on the other side of the
//! build graph interprets them. Each group is independently optional on
//! a target, and an absent group never reaches the wire.

use serde::{Deserialize, Serialize};

/// A single C compile option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CSetting {
    /// Header search path relative to the target's source root
    HeaderSearchPath { path: String },

    /// Preprocessor define, with an optional value
    Define {
        name: String,
        value: Option<String>,
    },

    /// Compiler flags passed through without interpretation
    UnsafeFlags { flags: Vec<String> },
}

impl CSetting {
    /// Add a header search path.
    pub fn header_search_path(path: impl Into<String>) -> Self {
        CSetting::HeaderSearchPath { path: path.into() }
    }

    /// Define a macro without a value.
    pub fn define(name: impl Into<String>) -> Self {
        CSetting::Define {
            name: name.into(),
            value: None,
        }
    }

    /// Define a macro with a value.
    pub fn define_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        CSetting::Define {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// Pass raw compiler flags through.
    pub fn unsafe_flags(flags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        CSetting::UnsafeFlags {
            flags: flags.into_iter().map(|f| f.into()).collect(),
        }
    }
}

/// A single C++ compile option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CxxSetting {
    /// Header search path relative to the target's source root
    HeaderSearchPath { path: String },

    /// Preprocessor define, with an optional value
    Define {
        name: String,
        value: Option<String>,
    },

    /// Compiler flags passed through without interpretation
    UnsafeFlags { flags: Vec<String> },
}

impl CxxSetting {
    /// Add a header search path.
    pub fn header_search_path(path: impl Into<String>) -> Self {
        CxxSetting::HeaderSearchPath { path: path.into() }
    }

    /// Define a macro without a value.
    pub fn define(name: impl Into<String>) -> Self {
        CxxSetting::Define {
            name: name.into(),
            value: None,
        }
    }

    /// Define a macro with a value.
    pub fn define_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        CxxSetting::Define {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// Pass raw compiler flags through.
    pub fn unsafe_flags(flags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        CxxSetting::UnsafeFlags {
            flags: flags.into_iter().map(|f| f.into()).collect(),
        }
    }
}

/// A single Swift compile option.
///
/// Swift defines are bare condition names, never name=value pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SwiftSetting {
    /// Compilation condition define
    Define { name: String },

    /// Compiler flags passed through without interpretation
    UnsafeFlags { flags: Vec<String> },
}

impl SwiftSetting {
    /// Define a compilation condition.
    pub fn define(name: impl Into<String>) -> Self {
        SwiftSetting::Define { name: name.into() }
    }

    /// Pass raw compiler flags through.
    pub fn unsafe_flags(flags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        SwiftSetting::UnsafeFlags {
            flags: flags.into_iter().map(|f| f.into()).collect(),
        }
    }
}

/// A single link option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LinkerSetting {
    /// System library to link (-l)
    LinkedLibrary { name: String },

    /// Framework to link (platforms that support them)
    LinkedFramework { name: String },

    /// Linker flags passed through without interpretation
    UnsafeFlags { flags: Vec<String> },
}

impl LinkerSetting {
    /// Link a system library.
    pub fn linked_library(name: impl Into<String>) -> Self {
        LinkerSetting::LinkedLibrary { name: name.into() }
    }

    /// Link a framework.
    pub fn linked_framework(name: impl Into<String>) -> Self {
        LinkerSetting::LinkedFramework { name: name.into() }
    }

    /// Pass raw linker flags through.
    pub fn unsafe_flags(flags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        LinkerSetting::UnsafeFlags {
            flags: flags.into_iter().map(|f| f.into()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_define_constructors() {
        let bare = CSetting::define("NDEBUG");
        assert_eq!(
            bare,
            CSetting::Define {
                name: "NDEBUG".to_string(),
                value: None
            }
        );

        let valued = CSetting::define_value("API_LEVEL", "3");
        assert_eq!(
            valued,
            CSetting::Define {
                name: "API_LEVEL".to_string(),
                value: Some("3".to_string())
            }
        );
    }

    #[test]
    fn test_setting_wire_tags() {
        let path = serde_json::to_string(&CxxSetting::header_search_path("vendor/include")).unwrap();
        assert_eq!(path, r#"{"kind":"headerSearchPath","path":"vendor/include"}"#);

        let swift = serde_json::to_string(&SwiftSetting::define("TRACE")).unwrap();
        assert_eq!(swift, r#"{"kind":"define","name":"TRACE"}"#);

        let linker = serde_json::to_string(&LinkerSetting::linked_library("sqlite3")).unwrap();
        assert_eq!(linker, r#"{"kind":"linkedLibrary","name":"sqlite3"}"#);
    }

    #[test]
    fn test_unsafe_flags_preserve_order() {
        let flags = LinkerSetting::unsafe_flags(["-L/opt/lib", "-lz"]);
        assert_eq!(
            flags,
            LinkerSetting::UnsafeFlags {
                flags: vec!["-L/opt/lib".to_string(), "-lz".to_string()]
            }
        );
    }
}
