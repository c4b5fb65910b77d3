//! Project layout conventions.
//!
//! A layout is two relative paths: where resource artifacts (document, data,
//! metadata) go and where generated source goes. Different build tools have
//! different conventions, so the layout is a plain value handed to the
//! dumper rather than a trait hierarchy — a new convention is a constructor
//! call, not a new type.
//!
//! In directory mode the paths become subdirectories of the base directory;
//! in archive mode they become entry-name prefixes.

/// Relative resource/source path pair for a target project convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    resources_path: String,
    source_path: String,
}

impl ProjectLayout {
    /// Custom layout. Trailing slashes are stripped so directory joins and
    /// archive entry names stay clean either way.
    pub fn new(resources_path: impl Into<String>, source_path: impl Into<String>) -> Self {
        fn trim(path: String) -> String {
            path.trim_end_matches('/').to_string()
        }
        Self {
            resources_path: trim(resources_path.into()),
            source_path: trim(source_path.into()),
        }
    }

    /// Maven convention: `src/main/resources` + `src/main/java`.
    pub fn maven() -> Self {
        Self::new("src/main/resources", "src/main/java")
    }

    /// Flat convention for plain IDE projects: `resources` + `src`.
    pub fn flat() -> Self {
        Self::new("resources", "src")
    }

    /// Relative path for the document, data, and metadata artifacts.
    pub fn resources_path(&self) -> &str {
        &self.resources_path
    }

    /// Relative path for the generated source artifact.
    pub fn source_path(&self) -> &str {
        &self.source_path
    }
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self::maven()
    }
}
