//! Serialization of the exportable metadata document.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io;
use std::path::Path;

use crate::types::MetadataExport;

/// Serialize a value as a 4-space-indented JSON document.
///
/// The export contract fixes the indentation, so this does not use the
/// default two-space pretty printer.
pub fn to_json_document<T: Serialize>(value: &T) -> io::Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer).map_err(io::Error::other)?;
    String::from_utf8(buf).map_err(io::Error::other)
}

/// Write the metadata export document to disk as UTF-8.
pub fn write_export(path: &Path, export: &MetadataExport) -> io::Result<()> {
    std::fs::write(path, to_json_document(export)?)
}
