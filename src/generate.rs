//! Artifact generators.
//!
//! Four independent producers, one per artifact kind. Each writes through an
//! [`ArtifactStore`], so the same generator serves both directory and archive
//! dumps. The traits are the collaborator seams; the structs below are the
//! stock implementations the dumper wires in by default:
//!
//! - [`DocumentCopier`] — streams the rendered document bytes unchanged
//! - [`JsonDataGenerator`] — pretty-printed JSON of the caller's context
//! - [`FieldsMetadataGenerator`] — JSON manifest of the field descriptors
//! - [`MainSourceGenerator`] — entry-point source rendered from an embedded
//!   template via the caller's [`TemplateEngine`]
//!
//! Replacing any of them (a different data format, a different runner
//! skeleton) is a [`crate::dump::ProjectDumper::with_source_generator`]-style
//! swap, not a fork of the orchestration.

use std::io::Read;

use thiserror::Error;

use crate::context::DumpContext;
use crate::engine::{RenderError, TemplateEngine};
use crate::report::{DataContext, Report};
use crate::store::{ArtifactStore, StoreError};

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Produces the document artifact from the rendered document stream.
pub trait DocumentGenerator {
    fn write(
        &self,
        report: &Report,
        document: &mut dyn Read,
        ctx: &DumpContext,
        store: &mut dyn ArtifactStore,
    ) -> Result<(), GenerateError>;
}

/// Produces the data artifact from the caller's rendering context.
pub trait DataGenerator {
    fn write(
        &self,
        report: &Report,
        data: &DataContext,
        ctx: &DumpContext,
        store: &mut dyn ArtifactStore,
    ) -> Result<(), GenerateError>;
}

/// Produces the metadata artifact from the report's field descriptors.
pub trait MetadataGenerator {
    fn write(
        &self,
        report: &Report,
        ctx: &DumpContext,
        store: &mut dyn ArtifactStore,
    ) -> Result<(), GenerateError>;
}

/// Produces the generated entry-point source file.
pub trait SourceGenerator {
    fn write(
        &self,
        engine: &dyn TemplateEngine,
        ctx: &DumpContext,
        store: &mut dyn ArtifactStore,
    ) -> Result<(), GenerateError>;
}

/// Streams the rendered document bytes to the canonical document name.
pub struct DocumentCopier;

impl DocumentGenerator for DocumentCopier {
    fn write(
        &self,
        _report: &Report,
        document: &mut dyn Read,
        ctx: &DumpContext,
        store: &mut dyn ArtifactStore,
    ) -> Result<(), GenerateError> {
        store.put_stream(&ctx.document_file, document)?;
        Ok(())
    }
}

/// Serializes the caller's context as pretty-printed JSON.
pub struct JsonDataGenerator;

impl DataGenerator for JsonDataGenerator {
    fn write(
        &self,
        _report: &Report,
        data: &DataContext,
        ctx: &DumpContext,
        store: &mut dyn ArtifactStore,
    ) -> Result<(), GenerateError> {
        let json = serde_json::to_vec_pretty(data)?;
        store.put(&ctx.data_file, &json)?;
        Ok(())
    }
}

/// Serializes the field descriptors into a small JSON manifest keyed by the
/// report id, so a consumer can sanity-check which report the metadata
/// belongs to.
pub struct FieldsMetadataGenerator;

impl MetadataGenerator for FieldsMetadataGenerator {
    fn write(
        &self,
        report: &Report,
        ctx: &DumpContext,
        store: &mut dyn ArtifactStore,
    ) -> Result<(), GenerateError> {
        let manifest = serde_json::json!({
            "report": ctx.report_id,
            "fields": report.fields,
        });
        let json = serde_json::to_vec_pretty(&manifest)?;
        store.put(&ctx.fields_file, &json)?;
        Ok(())
    }
}

/// Default entry-point template: a Java main that reloads the three resource
/// artifacts and re-runs the report.
const MAIN_TEMPLATE: &str = include_str!("../static/main.java.jinja");

/// Renders the entry-point source through the template engine and places it
/// at the package-qualified path from the dump context.
pub struct MainSourceGenerator {
    template: String,
}

impl MainSourceGenerator {
    /// Generator using the embedded runner template.
    pub fn new() -> Self {
        Self {
            template: MAIN_TEMPLATE.to_string(),
        }
    }

    /// Generator using a caller-supplied template. The template sees the
    /// variables from [`DumpContext::render_vars`].
    pub fn with_template(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }
}

impl Default for MainSourceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceGenerator for MainSourceGenerator {
    fn write(
        &self,
        engine: &dyn TemplateEngine,
        ctx: &DumpContext,
        store: &mut dyn ArtifactStore,
    ) -> Result<(), GenerateError> {
        let source = engine.render(&self.template, &ctx.render_vars())?;
        store.put(&ctx.source_file, source.as_bytes())?;
        Ok(())
    }
}
