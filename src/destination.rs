//! Destination resolution: directory tree or archive stream.
//!
//! A dump has exactly one destination, chosen once at the entry point from
//! the presence of the `base_dir` option and never re-inspected afterwards.
//! Making the choice an explicit variant keeps the two orchestration paths
//! free of option null-checks.

use std::path::PathBuf;

use crate::options::DumpOptions;

/// The resolved output mode of a dump invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Materialize artifacts as real files under this base directory.
    Directory(PathBuf),
    /// Append artifacts as entries to an archive wrapping the caller's sink.
    Archive,
}

impl Destination {
    /// Pure decision: absent options or an absent base directory means the
    /// caller's output sink backs an archive; a present base directory wins
    /// regardless of any other option.
    pub fn resolve(options: Option<&DumpOptions>) -> Destination {
        match options.and_then(|opts| opts.base_dir.as_ref()) {
            Some(base) => Destination::Directory(base.clone()),
            None => Destination::Archive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_options_resolve_to_archive() {
        assert_eq!(Destination::resolve(None), Destination::Archive);
    }

    #[test]
    fn options_without_base_dir_resolve_to_archive() {
        let opts = DumpOptions::new().with_package_name("com.acme");
        assert_eq!(Destination::resolve(Some(&opts)), Destination::Archive);
    }

    #[test]
    fn base_dir_resolves_to_directory() {
        let opts = DumpOptions::new().with_base_dir("/tmp/out");
        assert_eq!(
            Destination::resolve(Some(&opts)),
            Destination::Directory(PathBuf::from("/tmp/out"))
        );
    }

    #[test]
    fn base_dir_wins_over_other_options() {
        let opts = DumpOptions::new()
            .with_base_dir("/tmp/out")
            .with_package_name("com.acme");
        assert!(matches!(
            Destination::resolve(Some(&opts)),
            Destination::Directory(_)
        ));
    }
}
