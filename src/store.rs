//! Artifact stores: one write interface over folders and archive entries.
//!
//! Each generator writes its artifact through [`ArtifactStore`] without
//! knowing whether the bytes land in a real file or a zip entry. Names are
//! relative and may contain `/` separators; the directory store creates
//! missing parents (package paths), the archive store folds the name into a
//! prefixed entry name.

use std::fs;
use std::io::{self, Read, Seek, Write};
use std::path::PathBuf;

use thiserror::Error;
use zip::write::FileOptions;
use zip::ZipWriter;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// Destination-agnostic sink for one artifact at a time.
pub trait ArtifactStore {
    /// Stream an artifact's bytes under a relative name, overwriting any
    /// previous artifact at that name.
    fn put_stream(&mut self, name: &str, reader: &mut dyn Read) -> Result<(), StoreError>;

    /// Convenience for artifacts already held in memory.
    fn put(&mut self, name: &str, contents: &[u8]) -> Result<(), StoreError> {
        self.put_stream(name, &mut &contents[..])
    }
}

/// Writes artifacts as files under a root directory.
///
/// Parent directories of a nested name are created on demand; creation is
/// idempotent, so re-running a dump against the same tree never fails on
/// pre-existing folders.
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ArtifactStore for DirectoryStore {
    fn put_stream(&mut self, name: &str, reader: &mut dyn Read) -> Result<(), StoreError> {
        let path = self.root.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = fs::File::create(&path)?;
        io::copy(reader, &mut file)?;
        Ok(())
    }
}

/// Appends artifacts as entries to an open zip writer, each named
/// `<prefix>/<name>`. Entry order is the call order.
pub struct ArchiveStore<'a, W: Write + Seek> {
    writer: &'a mut ZipWriter<W>,
    prefix: String,
}

impl<'a, W: Write + Seek> ArchiveStore<'a, W> {
    pub fn new(writer: &'a mut ZipWriter<W>, prefix: &str) -> Self {
        Self {
            writer,
            prefix: prefix.trim_matches('/').to_string(),
        }
    }

    fn entry_name(&self, name: &str) -> String {
        if self.prefix.is_empty() {
            name.to_string()
        } else {
            format!("{}/{}", self.prefix, name)
        }
    }
}

impl<W: Write + Seek> ArtifactStore for ArchiveStore<'_, W> {
    fn put_stream(&mut self, name: &str, reader: &mut dyn Read) -> Result<(), StoreError> {
        self.writer
            .start_file(self.entry_name(name), FileOptions::default())?;
        io::copy(reader, self.writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn directory_store_creates_nested_parents() {
        let tmp = tempfile::TempDir::new().unwrap();
        let mut store = DirectoryStore::new(tmp.path());
        store.put("com/acme/Main.java", b"class Main {}").unwrap();
        let written = fs::read_to_string(tmp.path().join("com/acme/Main.java")).unwrap();
        assert_eq!(written, "class Main {}");
    }

    #[test]
    fn directory_store_overwrites_existing_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let mut store = DirectoryStore::new(tmp.path());
        store.put("data.json", b"{\"v\":1}").unwrap();
        store.put("data.json", b"{\"v\":2}").unwrap();
        let written = fs::read_to_string(tmp.path().join("data.json")).unwrap();
        assert_eq!(written, "{\"v\":2}");
    }

    #[test]
    fn archive_store_prefixes_entries_in_order() {
        let mut cursor = Cursor::new(Vec::new());
        let mut writer = ZipWriter::new(&mut cursor);
        {
            let mut store = ArchiveStore::new(&mut writer, "resources");
            store.put("a.txt", b"first").unwrap();
            store.put("b.txt", b"second").unwrap();
        }
        writer.finish().unwrap();
        drop(writer);

        cursor.set_position(0);
        let mut archive = zip::ZipArchive::new(cursor).unwrap();
        assert_eq!(archive.len(), 2);
        assert_eq!(archive.by_index(0).unwrap().name(), "resources/a.txt");
        assert_eq!(archive.by_index(1).unwrap().name(), "resources/b.txt");
    }

    #[test]
    fn archive_store_empty_prefix_uses_bare_name() {
        let mut cursor = Cursor::new(Vec::new());
        let mut writer = ZipWriter::new(&mut cursor);
        {
            let mut store = ArchiveStore::new(&mut writer, "");
            store.put("a.txt", b"bytes").unwrap();
        }
        writer.finish().unwrap();
        drop(writer);

        cursor.set_position(0);
        let mut archive = zip::ZipArchive::new(cursor).unwrap();
        assert_eq!(archive.by_index(0).unwrap().name(), "a.txt");
    }
}
