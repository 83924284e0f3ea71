use serde::Serialize;
use std::io::Write;
use tempfile::NamedTempFile;

/// Writes `value` as YAML to a temporary file kept alive by the returned handle
pub fn write_yaml<T: Serialize>(value: &T) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    let text = serde_yaml::to_string(value).expect("serializable value");
    file.write_all(text.as_bytes()).expect("writable temp file");
    file
}

/// Writes raw YAML text to a temporary file
pub fn write_text(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(text.as_bytes()).expect("writable temp file");
    file
}
