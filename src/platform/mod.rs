//! Platform detection module
//!
//! This module resolves the runtime-reported operating system and CPU
//! architecture identifiers onto the closed set of build targets the
//! binary catalog ships entries for.

mod detection;

pub use detection::{Arch, Os, PlatformError, PlatformKey};
