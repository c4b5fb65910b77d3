//! Project dump orchestration.
//!
//! [`ProjectDumper`] turns a rendered report into a ready-to-build project
//! skeleton: the document, its data, the field metadata, and a generated
//! entry-point source, laid out under the layout's resources/source paths.
//! Depending on the resolved [`Destination`] the four artifacts land as real
//! files under a base directory or as entries in a zip archive written to
//! the caller's sink.
//!
//! The whole dump is synchronous and fail-fast: steps run in a fixed order,
//! the first failure aborts the call, and nothing written so far is rolled
//! back. In archive mode the zip writer is finished on every exit path; a
//! failing finish is logged and swallowed so it can never mask an earlier,
//! more meaningful error.

use std::fs;
use std::io::{Read, Seek, Write};
use std::path::Path;

use thiserror::Error;
use tracing::{debug, warn};
use zip::ZipWriter;

use crate::context::DumpContext;
use crate::destination::Destination;
use crate::engine::TemplateEngine;
use crate::generate::{
    DataGenerator, DocumentCopier, DocumentGenerator, FieldsMetadataGenerator, GenerateError,
    JsonDataGenerator, MainSourceGenerator, MetadataGenerator, SourceGenerator,
};
use crate::layout::ProjectLayout;
use crate::options::DumpOptions;
use crate::report::{DataContext, Report};
use crate::store::{ArchiveStore, ArtifactStore, DirectoryStore, StoreError};

/// Which artifact's generator failed, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    Document,
    Data,
    Metadata,
    Source,
}

impl std::fmt::Display for Artifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Artifact::Document => "document",
            Artifact::Data => "data",
            Artifact::Metadata => "metadata",
            Artifact::Source => "source",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum DumpError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("{artifact} generator failed: {source}")]
    Generate {
        artifact: Artifact,
        source: GenerateError,
    },
}

impl DumpError {
    fn generate(artifact: Artifact) -> impl FnOnce(GenerateError) -> DumpError {
        move |source| DumpError::Generate { artifact, source }
    }
}

/// Dumps a report's artifacts into a project skeleton.
///
/// Holds a [`ProjectLayout`] and the four generators. The stock generators
/// cover the common case; any of them can be swapped for a custom one.
pub struct ProjectDumper {
    layout: ProjectLayout,
    document: Box<dyn DocumentGenerator>,
    data: Box<dyn DataGenerator>,
    metadata: Box<dyn MetadataGenerator>,
    source: Box<dyn SourceGenerator>,
}

impl ProjectDumper {
    /// Dumper with the stock generators for the given layout.
    pub fn new(layout: ProjectLayout) -> Self {
        Self {
            layout,
            document: Box::new(DocumentCopier),
            data: Box::new(JsonDataGenerator),
            metadata: Box::new(FieldsMetadataGenerator),
            source: Box::new(MainSourceGenerator::new()),
        }
    }

    pub fn with_document_generator(mut self, generator: Box<dyn DocumentGenerator>) -> Self {
        self.document = generator;
        self
    }

    pub fn with_data_generator(mut self, generator: Box<dyn DataGenerator>) -> Self {
        self.data = generator;
        self
    }

    pub fn with_metadata_generator(mut self, generator: Box<dyn MetadataGenerator>) -> Self {
        self.metadata = generator;
        self
    }

    pub fn with_source_generator(mut self, generator: Box<dyn SourceGenerator>) -> Self {
        self.source = generator;
        self
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// Dump `report` to the destination resolved from `options`.
    ///
    /// The dump context is built first, independent of the mode. Directory
    /// mode ignores `sink`; archive mode ignores nothing written by earlier
    /// steps — the zip writer wrapping `sink` is finished on every exit path.
    pub fn dump<W: Write + Seek>(
        &self,
        report: &Report,
        document: &mut dyn Read,
        data: &DataContext,
        options: Option<&DumpOptions>,
        engine: &dyn TemplateEngine,
        sink: W,
    ) -> Result<(), DumpError> {
        let ctx = DumpContext::build(report, engine, options);
        match Destination::resolve(options) {
            Destination::Directory(base) => {
                debug!(base = %base.display(), report = %ctx.report_id, "dumping to directory");
                fs::create_dir_all(&base)?;
                self.dump_to_directory(report, document, data, engine, &ctx, &base)
            }
            Destination::Archive => {
                debug!(report = %ctx.report_id, "dumping to archive");
                let mut writer = ZipWriter::new(sink);
                let result =
                    self.dump_to_archive(report, document, data, engine, &ctx, &mut writer);
                // Finish regardless of the result; a finish failure must not
                // mask a generator error, so it is only logged.
                if let Err(err) = writer.finish() {
                    warn!(report = %ctx.report_id, "archive close failed: {err}");
                }
                result
            }
        }
    }

    /// Directory mode: two idempotent folder creations, four artifact
    /// writes, in this fixed order.
    fn dump_to_directory(
        &self,
        report: &Report,
        document: &mut dyn Read,
        data: &DataContext,
        engine: &dyn TemplateEngine,
        ctx: &DumpContext,
        base: &Path,
    ) -> Result<(), DumpError> {
        let resources = base.join(self.layout.resources_path());
        fs::create_dir_all(&resources)?;
        let mut store = DirectoryStore::new(&resources);
        self.document
            .write(report, document, ctx, &mut store)
            .map_err(DumpError::generate(Artifact::Document))?;
        self.data
            .write(report, data, ctx, &mut store)
            .map_err(DumpError::generate(Artifact::Data))?;
        self.metadata
            .write(report, ctx, &mut store)
            .map_err(DumpError::generate(Artifact::Metadata))?;

        let sources = base.join(self.layout.source_path());
        fs::create_dir_all(&sources)?;
        let mut store = DirectoryStore::new(&sources);
        self.source
            .write(engine, ctx, &mut store)
            .map_err(DumpError::generate(Artifact::Source))?;
        debug!(base = %base.display(), "dumped 4 artifacts");
        Ok(())
    }

    /// Archive mode: exactly four entries, appended in this fixed order
    /// under the resources/source prefixes.
    fn dump_to_archive<W: Write + Seek>(
        &self,
        report: &Report,
        document: &mut dyn Read,
        data: &DataContext,
        engine: &dyn TemplateEngine,
        ctx: &DumpContext,
        writer: &mut ZipWriter<W>,
    ) -> Result<(), DumpError> {
        let mut store = ArchiveStore::new(writer, self.layout.resources_path());
        self.document
            .write(report, document, ctx, &mut store)
            .map_err(DumpError::generate(Artifact::Document))?;
        self.data
            .write(report, data, ctx, &mut store)
            .map_err(DumpError::generate(Artifact::Data))?;
        self.metadata
            .write(report, ctx, &mut store)
            .map_err(DumpError::generate(Artifact::Metadata))?;

        let mut store = ArchiveStore::new(writer, self.layout.source_path());
        self.source
            .write(engine, ctx, &mut store)
            .map_err(DumpError::generate(Artifact::Source))?;
        debug!("appended 4 archive entries");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_display_names_the_stage() {
        assert_eq!(Artifact::Document.to_string(), "document");
        assert_eq!(Artifact::Source.to_string(), "source");
    }

    #[test]
    fn generate_error_names_failing_artifact() {
        let err = DumpError::Generate {
            artifact: Artifact::Metadata,
            source: GenerateError::Render(crate::engine::RenderError("boom".into())),
        };
        let message = err.to_string();
        assert!(message.starts_with("metadata generator failed"));
        assert!(message.contains("boom"));
    }
}
