//! Caller-supplied dump options.
//!
//! Options are constructed before a dump and read-only afterwards. The only
//! option with structural meaning is `base_dir`: its presence selects
//! directory mode, its absence selects archive mode (see
//! [`crate::destination::Destination::resolve`]). `package_name` merely moves
//! the generated source under a package-qualified path.

use std::path::PathBuf;

/// Options for a single dump invocation.
///
/// Absent options are a valid "dump to archive" signal, so every consumer
/// takes `Option<&DumpOptions>` rather than requiring a default value.
#[derive(Debug, Clone, Default)]
pub struct DumpOptions {
    /// Target base directory. Present → directory mode, absent → archive mode.
    pub base_dir: Option<PathBuf>,
    /// Dotted package name for the generated source (e.g. `com.acme.reports`).
    pub package_name: Option<String>,
}

impl DumpOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }

    pub fn with_package_name(mut self, package: impl Into<String>) -> Self {
        self.package_name = Some(package.into());
        self
    }
}
