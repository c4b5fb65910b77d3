//! # docdump
//!
//! Materializes a document-report dump into a ready-to-build project
//! skeleton. Given a rendered document, its data context, and the report's
//! dynamic-field metadata, docdump emits four artifacts — the document, a
//! JSON data file, a JSON metadata file, and a generated entry-point source
//! file — laid out under a project convention's resources and source paths.
//!
//! # One Dump, One Destination
//!
//! A dump writes either a real directory tree or a single zip archive, never
//! both. The choice is made once, at the entry point, from the presence of
//! the `base_dir` option:
//!
//! ```text
//! base_dir set      →  <base>/src/main/resources/invoice.odt
//!                      <base>/src/main/resources/invoice.json
//!                      <base>/src/main/resources/invoice.fields.json
//!                      <base>/src/main/java/com/acme/InvoiceMain.java
//!
//! base_dir unset    →  zip entries with the same names, written to the
//!                      caller's output sink, in exactly that order
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`dump`] | The core — [`dump::ProjectDumper`] orchestrates folder creation, archive lifecycle, and the four generators |
//! | [`destination`] | Resolves directory vs. archive mode from the options, once |
//! | [`generate`] | The four artifact generator traits and their stock implementations |
//! | [`store`] | One write interface over directories and zip entries |
//! | [`layout`] | Resources/source path conventions ([`layout::ProjectLayout::maven`] etc.) |
//! | [`context`] | Per-dump derived context shared by all generators |
//! | [`engine`] | Template engine seam + minijinja default |
//! | [`naming`] | Artifact file name and class name conventions |
//! | [`report`] | Report handle, field descriptors, data context |
//! | [`options`] | Caller-supplied dump options |
//!
//! # Design Decisions
//!
//! ## Layout as a Value, Not a Hierarchy
//!
//! Target conventions (Maven, flat IDE projects, anything custom) differ only
//! in two relative paths, so [`layout::ProjectLayout`] is a plain struct with
//! preset constructors. Supporting a new build tool is one constructor call.
//!
//! ## Fail-Fast, No Rollback
//!
//! Operations run in a fixed order and the first failure aborts the dump.
//! Artifacts already written stay where they are; callers that need
//! all-or-nothing semantics should dump into a fresh directory and move it
//! into place. The one exception to propagation is closing the archive
//! writer: a close failure is logged and swallowed so it never hides the
//! error that actually ended the dump.
//!
//! ## Generators Behind Traits
//!
//! Rendering the document, encoding the data, and shaping the generated
//! source are all collaborator concerns. The dumper only sequences them, so
//! each is a trait object that can be swapped without touching the
//! orchestration — and tests exercise failure paths with throwaway doubles.

pub mod context;
pub mod destination;
pub mod dump;
pub mod engine;
pub mod generate;
pub mod layout;
pub mod naming;
pub mod options;
pub mod report;
pub mod store;

pub use context::DumpContext;
pub use destination::Destination;
pub use dump::{DumpError, ProjectDumper};
pub use engine::{MinijinjaEngine, RenderError, TemplateEngine};
pub use layout::ProjectLayout;
pub use options::DumpOptions;
pub use report::{DataContext, FieldDescriptor, Report};
