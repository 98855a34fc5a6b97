//! Editing session: the current document plus its startup snapshot.

use std::path::{Path, PathBuf};

use crate::core::{load_from, load_or_default, save, Rgb, ThemeDocument, ThemeError};

/// The state a presentation layer edits.
///
/// Owns the current document and the snapshot taken right after the initial
/// load. Imports replace the document but never the snapshot.
#[derive(Debug, Clone)]
pub struct ThemeSession {
    document: ThemeDocument,
    original: ThemeDocument,
    source_path: Option<PathBuf>,
}

impl ThemeSession {
    /// Start a session from an already loaded document.
    pub fn new(document: ThemeDocument, source_path: Option<PathBuf>) -> Self {
        Self {
            original: document.clone(),
            document,
            source_path,
        }
    }

    /// Start a session from the startup file, failing soft.
    ///
    /// On failure the session holds [`ThemeDocument::fallback`] and the error
    /// is returned alongside for the caller to report.
    pub fn open(path: &Path) -> (Self, Option<ThemeError>) {
        let (document, err) = load_or_default(path);
        let source = err.is_none().then(|| path.to_path_buf());
        (Self::new(document, source), err)
    }

    /// Current document.
    pub fn document(&self) -> &ThemeDocument {
        &self.document
    }

    /// Document as it was right after the initial load.
    pub fn original(&self) -> &ThemeDocument {
        &self.original
    }

    /// File the current document came from, if any.
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Whether the document differs from the startup snapshot.
    pub fn is_modified(&self) -> bool {
        self.document != self.original
    }

    /// Rename the theme.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.document.set_name(name);
    }

    /// Set a control's color. Returns false if the control doesn't exist.
    pub fn set_color(&mut self, control: &str, r: u8, g: u8, b: u8) -> bool {
        self.document.set_color(control, Rgb::new(r, g, b)).is_some()
    }

    /// Write the current document to `path`.
    pub fn export_to(&self, path: &Path) -> Result<(), ThemeError> {
        save(&self.document, path)
    }

    /// Replace the document with a validated file. Unchanged on error.
    pub fn import_from(&mut self, path: &Path) -> Result<&ThemeDocument, ThemeError> {
        let document = load_from(path)?;
        self.document = document;
        self.source_path = Some(path.to_path_buf());
        Ok(&self.document)
    }

    /// Discard all edits and imports, restoring the startup document.
    pub fn reset_to_original(&mut self) -> &ThemeDocument {
        self.document = self.original.clone();
        &self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ColorSpec, ErrorKind};
    use tempfile::TempDir;

    fn session() -> ThemeSession {
        let doc = ThemeDocument::new("T")
            .with_entry("Btn", ColorSpec::rgb(10, 20, 30))
            .with_entry("Bg", ColorSpec::named("Black"));
        ThemeSession::new(doc, None)
    }

    #[test]
    fn edits_mark_modified_and_reset_restores() {
        let mut s = session();
        assert!(!s.is_modified());

        assert!(s.set_color("Btn", 1, 2, 3));
        s.set_name("Other");
        assert!(s.set_color("Bg", 4, 5, 6));
        assert!(s.is_modified());

        let restored = s.reset_to_original().clone();
        assert_eq!(&restored, s.original());
        assert_eq!(restored.get("Bg"), Some(&ColorSpec::named("Black")));
        assert!(!s.is_modified());
    }

    #[test]
    fn set_color_unknown_control() {
        let mut s = session();
        assert!(!s.set_color("Missing", 1, 2, 3));
        assert!(!s.is_modified());
    }

    #[test]
    fn failed_import_leaves_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.eot");
        std::fs::write(&path, r#"{"Name": "X"}"#).unwrap();

        let mut s = session();
        s.set_color("Btn", 1, 1, 1);
        let before = s.document().clone();

        let err = s.import_from(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
        assert_eq!(s.document(), &before);
        assert_eq!(s.source_path(), None);
    }

    #[test]
    fn import_keeps_original_snapshot() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("other.eot");
        std::fs::write(&path, r#"{"Name": "Imported", "Theme": {}}"#).unwrap();

        let mut s = session();
        assert_eq!(s.import_from(&path).unwrap().name, "Imported");
        assert_eq!(s.source_path(), Some(path.as_path()));
        assert_eq!(s.reset_to_original().name, "T");
    }

    #[test]
    fn open_missing_file_falls_back() {
        let dir = TempDir::new().unwrap();
        let (s, err) = ThemeSession::open(&dir.path().join("nope.json"));
        assert_eq!(err.map(|e| e.kind()), Some(ErrorKind::NotFound));
        assert_eq!(s.document(), &ThemeDocument::fallback());
        assert_eq!(s.source_path(), None);
    }
}
