//! Theme file loading and saving.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::core::{Rgb, ThemeDocument};

/// Startup theme file, relative to the working directory.
pub const DEFAULT_THEME_PATH: &str = "sample-theme.json";

/// Errors from theme file operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ThemeError {
    /// The file does not exist.
    #[error("file not found: {}", path.display())]
    NotFound {
        /// Requested path.
        path: PathBuf,
    },
    /// The file is not valid JSON, or not a theme object at all.
    #[error("invalid JSON in {}: {source}", path.display())]
    Parse {
        /// Offending file.
        path: PathBuf,
        /// Underlying parser error.
        source: serde_json::Error,
    },
    /// Valid JSON, but missing or mistyped `Name`/`Theme` fields.
    #[error("invalid theme file format in {}: {reason}", path.display())]
    InvalidFormat {
        /// Offending file.
        path: PathBuf,
        /// What was wrong.
        reason: String,
    },
    /// The file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Offending file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Target file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

/// Coarse classification of [`ThemeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// See [`ThemeError::NotFound`].
    NotFound,
    /// See [`ThemeError::Parse`].
    ParseError,
    /// See [`ThemeError::InvalidFormat`].
    InvalidFormat,
    /// See [`ThemeError::Read`].
    ReadError,
    /// See [`ThemeError::Write`].
    WriteError,
}

impl ThemeError {
    /// Error kind without the payload.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ThemeError::NotFound { .. } => ErrorKind::NotFound,
            ThemeError::Parse { .. } => ErrorKind::ParseError,
            ThemeError::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            ThemeError::Read { .. } => ErrorKind::ReadError,
            ThemeError::Write { .. } => ErrorKind::WriteError,
        }
    }

    /// Path the failed operation was working on.
    pub fn path(&self) -> &Path {
        match self {
            ThemeError::NotFound { path }
            | ThemeError::Parse { path, .. }
            | ThemeError::InvalidFormat { path, .. }
            | ThemeError::Read { path, .. }
            | ThemeError::Write { path, .. } => path,
        }
    }

    fn invalid_format(path: &Path, reason: impl Into<String>) -> Self {
        ThemeError::InvalidFormat {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }
}

fn read_file(path: &Path) -> Result<String, ThemeError> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ThemeError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ThemeError::Read {
            path: path.to_path_buf(),
            source: e,
        },
    })
}

/// Load a theme leniently.
///
/// Missing `Name` or `Theme` fields get defaults. Used for the startup file;
/// see [`load_or_default`] for the fail-soft wrapper.
pub fn load(path: &Path) -> Result<ThemeDocument, ThemeError> {
    let _timer = crate::metrics::Timer::start("theme_load");
    let content = read_file(path)?;
    serde_json::from_str(&content).map_err(|source| ThemeError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a theme, substituting [`ThemeDocument::fallback`] on any failure.
///
/// The error, if any, is handed back so the caller can warn about it.
pub fn load_or_default(path: &Path) -> (ThemeDocument, Option<ThemeError>) {
    match load(path) {
        Ok(doc) => (doc, None),
        Err(e) => (ThemeDocument::fallback(), Some(e)),
    }
}

/// Load a user-supplied theme file, requiring `Name` and `Theme` fields.
pub fn load_from(path: &Path) -> Result<ThemeDocument, ThemeError> {
    let _timer = crate::metrics::Timer::start("theme_import");
    let content = read_file(path)?;
    let value: Value = serde_json::from_str(&content).map_err(|source| ThemeError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let Some(object) = value.as_object() else {
        return Err(ThemeError::invalid_format(
            path,
            "top level must be a JSON object",
        ));
    };
    if !object.contains_key("Name") || !object.contains_key("Theme") {
        return Err(ThemeError::invalid_format(
            path,
            "file must contain 'Name' and 'Theme' fields",
        ));
    }
    if !object["Name"].is_string() {
        return Err(ThemeError::invalid_format(path, "'Name' must be a string"));
    }
    if !object["Theme"].is_object() {
        return Err(ThemeError::invalid_format(path, "'Theme' must be an object"));
    }

    serde_json::from_value(value).map_err(|e| ThemeError::invalid_format(path, e.to_string()))
}

/// Serialize a document as 4-space indented JSON.
pub fn to_json_bytes(doc: &ThemeDocument) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    doc.serialize(&mut ser)?;
    Ok(buf)
}

/// Write a document to `path` (atomic: temp file + rename).
pub fn save(doc: &ThemeDocument, path: &Path) -> Result<(), ThemeError> {
    let _timer = crate::metrics::Timer::start("theme_save");
    write_atomic(doc, path).map_err(|source| ThemeError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn write_atomic(doc: &ThemeDocument, path: &Path) -> io::Result<()> {
    let content = to_json_bytes(doc).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let temp_path = temp_path_for(path);
    fs::write(&temp_path, content)?;
    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

/// Replace an existing control's color. See [`ThemeDocument::set_color`].
pub fn set_color(doc: &mut ThemeDocument, control: &str, rgb: Rgb) -> bool {
    doc.set_color(control, rgb).is_some()
}

/// Deep copy for a later [`reset_to`].
pub fn snapshot(doc: &ThemeDocument) -> ThemeDocument {
    doc.clone()
}

/// Fresh deep copy of a snapshot.
pub fn reset_to(snapshot: &ThemeDocument) -> ThemeDocument {
    snapshot.clone()
}
