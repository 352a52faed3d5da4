//! Target descriptors - what a package declares to be built.
//!
//! A target descriptor is one compilation unit in a package manifest:
//! a library or executable, a test suite, or an adapter around a
//! system-installed library.

mod descriptor;

pub use self::descriptor::{TargetDescriptor, TargetKind};
