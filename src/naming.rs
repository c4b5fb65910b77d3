//! Centralized naming conventions for dumped artifacts.
//!
//! Every artifact file name derives from the report identifier, and the
//! generated entry point derives its class name from the same identifier.
//! Keeping all of it here means the dumper, the generators, and the render
//! context can never disagree about a file name.
//!
//! ## Artifact Names
//!
//! - `invoice` + `odt` → `invoice.odt` (document)
//! - `invoice` → `invoice.json` (data)
//! - `invoice` → `invoice.fields.json` (metadata)
//!
//! ## Class Names
//!
//! Report ids are free-form strings; class names are not. The id is split on
//! every non-alphanumeric character, each segment is capitalized, and `Main`
//! is appended:
//! - `invoice` → `InvoiceMain`
//! - `sales-report 2024` → `SalesReport2024Main`
//! - `42-summary` → `_42SummaryMain` (identifiers cannot start with a digit)

/// Canonical document artifact name: `<id>.<extension>`.
pub fn document_file_name(id: &str, extension: &str) -> String {
    format!("{id}.{extension}")
}

/// Canonical data artifact name: `<id>.json`.
pub fn data_file_name(id: &str) -> String {
    format!("{id}.json")
}

/// Canonical metadata artifact name: `<id>.fields.json`.
pub fn fields_file_name(id: &str) -> String {
    format!("{id}.fields.json")
}

/// Derive the generated entry point's class name from a report id.
///
/// Ids that sanitize to nothing fall back to `ReportMain`.
pub fn main_class_name(id: &str) -> String {
    let mut name = String::new();
    for segment in id.split(|c: char| !c.is_ascii_alphanumeric()) {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            name.extend(first.to_uppercase());
            name.push_str(chars.as_str());
        }
    }
    if name.is_empty() {
        name.push_str("Report");
    }
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    name.push_str("Main");
    name
}

/// Convert a dotted package name into a relative directory path.
///
/// `com.acme.reports` → `com/acme/reports`. Empty segments are dropped so a
/// stray trailing dot cannot produce an empty path component.
pub fn package_dir(package: &str) -> String {
    package
        .split('.')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Relative path of the generated source file, package-qualified when a
/// package name is present.
pub fn source_file_path(class_name: &str, package: Option<&str>) -> String {
    match package.map(package_dir) {
        Some(dir) if !dir.is_empty() => format!("{dir}/{class_name}.java"),
        _ => format!("{class_name}.java"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_names_derive_from_id() {
        assert_eq!(document_file_name("invoice", "odt"), "invoice.odt");
        assert_eq!(data_file_name("invoice"), "invoice.json");
        assert_eq!(fields_file_name("invoice"), "invoice.fields.json");
    }

    #[test]
    fn class_name_simple() {
        assert_eq!(main_class_name("invoice"), "InvoiceMain");
    }

    #[test]
    fn class_name_splits_on_separators() {
        assert_eq!(main_class_name("sales-report 2024"), "SalesReport2024Main");
        assert_eq!(main_class_name("my.report"), "MyReportMain");
    }

    #[test]
    fn class_name_leading_digit_gets_underscore() {
        assert_eq!(main_class_name("42-summary"), "_42SummaryMain");
    }

    #[test]
    fn class_name_empty_id_falls_back() {
        assert_eq!(main_class_name(""), "ReportMain");
        assert_eq!(main_class_name("---"), "ReportMain");
    }

    #[test]
    fn package_dir_converts_dots() {
        assert_eq!(package_dir("com.acme.reports"), "com/acme/reports");
        assert_eq!(package_dir("com.acme."), "com/acme");
        assert_eq!(package_dir(""), "");
    }

    #[test]
    fn source_path_with_and_without_package() {
        assert_eq!(
            source_file_path("InvoiceMain", Some("com.acme")),
            "com/acme/InvoiceMain.java"
        );
        assert_eq!(source_file_path("InvoiceMain", None), "InvoiceMain.java");
        assert_eq!(source_file_path("InvoiceMain", Some("")), "InvoiceMain.java");
    }
}
