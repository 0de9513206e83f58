//! Snapshot import/export file contracts.
//!
//! # Responsibility
//! - Validate imported files before any state is replaced.
//! - Produce deterministic, dated export files.
//!
//! # Invariants
//! - Import is all-or-nothing: a shape or parse failure leaves the current
//!   state untouched.
//! - Export serializes the current list verbatim; re-importing an export
//!   reproduces the same tasks.

use crate::model::Task;
use chrono::NaiveDate;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

/// Import rejections. Each leaves the caller's state unchanged.
#[derive(Debug)]
pub enum ImportError {
    /// The file's top-level JSON shape was not an array.
    NotAnArray,
    /// The file was not valid JSON, or an element was not task-shaped.
    Parse(serde_json::Error),
    Io(std::io::Error),
}

impl Display for ImportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAnArray => write!(f, "import must be a JSON array of tasks"),
            Self::Parse(err) => write!(f, "import is not task-shaped: {err}"),
            Self::Io(err) => write!(f, "import file unreadable: {err}"),
        }
    }
}

impl Error for ImportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotAnArray => None,
            Self::Parse(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

/// Export failures (serialization or file I/O).
#[derive(Debug)]
pub enum ExportError {
    Serialize(serde_json::Error),
    Io(std::io::Error),
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Serialize(err) => write!(f, "export serialization failed: {err}"),
            Self::Io(err) => write!(f, "export file write failed: {err}"),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Serialize(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

/// Parses a serialized task list, rejecting anything but a top-level array.
///
/// The shape check runs before element deserialization so that an object
/// or scalar file is reported as `NotAnArray` rather than a parse error on
/// some inner field.
pub fn import_snapshot(body: &str) -> Result<Vec<Task>, ImportError> {
    let value: Value = serde_json::from_str(body).map_err(ImportError::Parse)?;
    if !value.is_array() {
        return Err(ImportError::NotAnArray);
    }
    serde_json::from_value(value).map_err(ImportError::Parse)
}

/// Reads and validates an import file.
pub fn import_from_file(path: impl AsRef<Path>) -> Result<Vec<Task>, ImportError> {
    let body = fs::read_to_string(path).map_err(ImportError::Io)?;
    import_snapshot(&body)
}

/// Serializes the current list verbatim.
pub fn export_snapshot(tasks: &[Task]) -> Result<String, ExportError> {
    serde_json::to_string_pretty(tasks).map_err(ExportError::Serialize)
}

/// Deterministic export file name for a given date.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("fivetask-export-{}.json", date.format("%Y-%m-%d"))
}

/// Writes a dated export file into `dir` and returns its path.
pub fn export_to_dir(
    tasks: &[Task],
    dir: impl AsRef<Path>,
    date: NaiveDate,
) -> Result<PathBuf, ExportError> {
    let path = dir.as_ref().join(export_file_name(date));
    fs::write(&path, export_snapshot(tasks)?).map_err(ExportError::Io)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::{export_file_name, export_snapshot, import_snapshot, ImportError};
    use crate::model::Task;
    use chrono::NaiveDate;

    #[test]
    fn import_rejects_non_array_shapes() {
        for body in [r#"{"tasks": []}"#, r#""just a string""#, "42", "true"] {
            match import_snapshot(body) {
                Err(ImportError::NotAnArray) => {}
                other => panic!("expected NotAnArray for {body}, got {other:?}"),
            }
        }
    }

    #[test]
    fn import_rejects_malformed_json() {
        assert!(matches!(
            import_snapshot("[{not json"),
            Err(ImportError::Parse(_))
        ));
    }

    #[test]
    fn import_accepts_empty_array() {
        assert!(import_snapshot("[]").unwrap().is_empty());
    }

    #[test]
    fn export_then_import_round_trips() {
        let tasks = vec![Task::new("keep me")];
        let body = export_snapshot(&tasks).unwrap();
        assert_eq!(import_snapshot(&body).unwrap(), tasks);
    }

    #[test]
    fn export_file_name_is_deterministic() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
        assert_eq!(export_file_name(date), "fivetask-export-2026-08-24.json");
    }
}
