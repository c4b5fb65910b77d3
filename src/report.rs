//! Shared types threaded through the dump pipeline.
//!
//! These types describe *what* gets dumped, not *where*: the report handle,
//! the dynamic-field descriptors serialized into the metadata artifact, and
//! the caller's rendering context. Destination decisions live in
//! [`crate::destination`] and [`crate::dump`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The caller's rendering context: variable name → value.
///
/// A `BTreeMap` keeps the serialized data artifact stable across runs, so
/// re-dumping the same report produces byte-identical output.
pub type DataContext = BTreeMap<String, serde_json::Value>;

/// Handle to a document-report definition (template + bindings).
///
/// The dumper only reads it: the identifier names the produced artifacts, the
/// extension names the document file, and the field descriptors feed the
/// metadata artifact. How the document itself is rendered is the template
/// engine's business.
#[derive(Debug, Clone)]
pub struct Report {
    /// Report identifier, used as the stem of every artifact file name.
    pub id: String,
    /// Document file extension without the dot (e.g. `odt`, `docx`).
    pub extension: String,
    /// Dynamic-field descriptors for the metadata artifact.
    pub fields: Vec<FieldDescriptor>,
}

impl Report {
    pub fn new(id: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            extension: extension.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_fields(mut self, fields: Vec<FieldDescriptor>) -> Self {
        self.fields = fields;
        self
    }
}

/// Descriptor for one dynamic field of a report template.
///
/// Serialized verbatim into the metadata artifact so a generated runner can
/// rebuild the field configuration without re-parsing the template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Variable name as referenced by the template.
    pub name: String,
    /// Whether the field is iterated (one value per row).
    #[serde(default)]
    pub list: bool,
    /// Whether the field holds image data rather than text.
    #[serde(default)]
    pub image: bool,
    /// Free-form description, kept for the generated project's readers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            list: false,
            image: false,
            description: None,
        }
    }

    pub fn list(mut self) -> Self {
        self.list = true;
        self
    }

    pub fn image(mut self) -> Self {
        self.image = true;
        self
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_descriptor_builder_sets_flags() {
        let field = FieldDescriptor::new("rows").list().describe("table rows");
        assert_eq!(field.name, "rows");
        assert!(field.list);
        assert!(!field.image);
        assert_eq!(field.description.as_deref(), Some("table rows"));
    }

    #[test]
    fn field_descriptor_omits_empty_description() {
        let json = serde_json::to_string(&FieldDescriptor::new("title")).unwrap();
        assert!(!json.contains("description"));
    }

    #[test]
    fn field_descriptor_round_trips() {
        let field = FieldDescriptor::new("logo").image();
        let json = serde_json::to_string(&field).unwrap();
        let back: FieldDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, field);
    }
}
