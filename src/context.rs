//! Dump context: state derived once per dump call.
//!
//! Distinct from the caller's rendering context ([`crate::report::DataContext`]):
//! the dump context carries everything the four generators must agree on —
//! artifact file names, the generated class name, the package-relative source
//! path, and which engine produced the document. Built once at the entry
//! point and threaded read-only through every generator, so no generator can
//! derive a conflicting name.

use crate::engine::TemplateEngine;
use crate::naming;
use crate::options::DumpOptions;
use crate::report::{DataContext, Report};

/// Per-invocation derived context. No state survives the dump call.
#[derive(Debug, Clone)]
pub struct DumpContext {
    /// Report identifier the artifact names derive from.
    pub report_id: String,
    /// Kind of the template engine that renders the report.
    pub engine_kind: String,
    /// Dotted package name for the generated source, if any.
    pub package_name: Option<String>,
    /// Document artifact file name (`<id>.<extension>`).
    pub document_file: String,
    /// Data artifact file name (`<id>.json`).
    pub data_file: String,
    /// Metadata artifact file name (`<id>.fields.json`).
    pub fields_file: String,
    /// Class name of the generated entry point.
    pub main_class: String,
    /// Source file path relative to the source folder, package-qualified.
    pub source_file: String,
}

impl DumpContext {
    /// Derive the context from the report, the engine, and the options.
    /// Always runs, independent of the destination mode.
    pub fn build(
        report: &Report,
        engine: &dyn TemplateEngine,
        options: Option<&DumpOptions>,
    ) -> Self {
        let package_name = options
            .and_then(|opts| opts.package_name.as_deref())
            .filter(|pkg| !pkg.is_empty())
            .map(str::to_string);
        let main_class = naming::main_class_name(&report.id);
        let source_file = naming::source_file_path(&main_class, package_name.as_deref());
        Self {
            report_id: report.id.clone(),
            engine_kind: engine.kind().to_string(),
            package_name,
            document_file: naming::document_file_name(&report.id, &report.extension),
            data_file: naming::data_file_name(&report.id),
            fields_file: naming::fields_file_name(&report.id),
            main_class,
            source_file,
        }
    }

    /// Expose the context as template variables for the source generator.
    ///
    /// `package_name` is always present (null when unset) so strict engines
    /// can branch on it without tripping undefined-variable checks.
    pub fn render_vars(&self) -> DataContext {
        use serde_json::Value;
        let mut vars = DataContext::new();
        vars.insert("report_id".into(), Value::from(self.report_id.as_str()));
        vars.insert("engine_kind".into(), Value::from(self.engine_kind.as_str()));
        vars.insert(
            "package_name".into(),
            self.package_name
                .as_deref()
                .map(Value::from)
                .unwrap_or(Value::Null),
        );
        vars.insert("document_file".into(), Value::from(self.document_file.as_str()));
        vars.insert("data_file".into(), Value::from(self.data_file.as_str()));
        vars.insert("fields_file".into(), Value::from(self.fields_file.as_str()));
        vars.insert("main_class".into(), Value::from(self.main_class.as_str()));
        vars
    }
}
