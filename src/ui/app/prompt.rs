use std::path::{Path, PathBuf};

use super::{App, Mode, PromptKind, PromptState};

/// Extension added to export paths given without one.
pub const THEME_EXTENSION: &str = "eot";

impl App {
    /// Prompt for a new theme name, prefilled with the current one.
    pub fn start_rename(&mut self) {
        let input = self.document().name.clone();
        self.open_prompt(PromptKind::Rename, input);
    }

    /// Prompt for an export path.
    pub fn start_export(&mut self) {
        let input = self
            .recent
            .as_ref()
            .and_then(|r| r.last_export())
            .map(str::to_string)
            .unwrap_or_else(|| format!("theme.{}", THEME_EXTENSION));
        self.open_prompt(PromptKind::Export, input);
    }

    /// Prompt for a theme file to import.
    pub fn start_import(&mut self) {
        let input = self
            .recent
            .as_ref()
            .and_then(|r| r.last_import())
            .map(str::to_string)
            .unwrap_or_default();
        self.open_prompt(PromptKind::Import, input);
    }

    fn open_prompt(&mut self, kind: PromptKind, input: String) {
        self.prompt = PromptState { kind, input };
        self.ui.mode = Mode::Prompt;
        self.ui.dirty = true;
    }

    /// Append a character to the prompt input.
    pub fn prompt_push(&mut self, c: char) {
        self.prompt.input.push(c);
        self.ui.dirty = true;
    }

    /// Delete the last character of the prompt input.
    pub fn prompt_pop(&mut self) {
        self.prompt.input.pop();
        self.ui.dirty = true;
    }

    /// Close the prompt without acting.
    pub fn cancel_prompt(&mut self) {
        self.prompt = PromptState::default();
        self.ui.mode = Mode::Normal;
        self.ui.dirty = true;
    }

    /// Act on the prompt input.
    pub fn submit_prompt(&mut self) {
        let PromptState { kind, input } = std::mem::take(&mut self.prompt);
        self.ui.mode = Mode::Normal;
        self.ui.dirty = true;

        match kind {
            PromptKind::Rename => {
                self.session.set_name(input.as_str());
                self.set_status(format!("Theme renamed to {}", input));
            }
            PromptKind::Export => self.export_to(input.trim()),
            PromptKind::Import => self.import_from(input.trim()),
        }
    }

    fn export_to(&mut self, input: &str) {
        if input.is_empty() {
            self.set_error("No file name given");
            return;
        }
        let path = with_default_extension(Path::new(input));
        match self.session.export_to(&path) {
            Ok(()) => {
                self.set_status(format!("Theme exported to {}", path.display()));
                self.remember(|r| r.set_last_export(&path));
            }
            Err(e) => self.set_error(format!("Failed to export theme: {}", e)),
        }
    }

    fn import_from(&mut self, input: &str) {
        if input.is_empty() {
            self.set_error("No file name given");
            return;
        }
        let path = PathBuf::from(input);
        match self.session.import_from(&path) {
            Ok(doc) => {
                let message = format!("Loaded '{}' from {}", doc.name, path.display());
                self.document_replaced();
                self.set_status(message);
                self.remember(|r| r.set_last_import(&path));
            }
            Err(e) => self.set_error(format!("Failed to load theme: {}", e)),
        }
    }

    fn remember(&mut self, update: impl FnOnce(&mut crate::core::RecentPaths)) {
        let Some(recent) = self.recent.as_mut() else {
            return;
        };
        update(recent);
        if let Err(e) = recent.save() {
            self.ui.error = Some(format!("Could not save recent paths: {}", e));
        }
    }

    /// Ask for confirmation before resetting.
    pub fn request_reset(&mut self) {
        self.ui.mode = Mode::ConfirmReset;
        self.ui.dirty = true;
    }

    /// Restore the theme as it was at startup.
    pub fn confirm_reset(&mut self) {
        self.session.reset_to_original();
        self.ui.mode = Mode::Normal;
        self.document_replaced();
        self.set_status("Theme reset to original");
    }

    /// Dismiss the reset confirmation.
    pub fn cancel_reset(&mut self) {
        self.ui.mode = Mode::Normal;
        self.ui.dirty = true;
    }
}

/// Add `.eot` when the path has no extension.
fn with_default_extension(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(THEME_EXTENSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_extension() {
        assert_eq!(with_default_extension(Path::new("out")), PathBuf::from("out.eot"));
        assert_eq!(
            with_default_extension(Path::new("out.json")),
            PathBuf::from("out.json")
        );
        assert_eq!(
            with_default_extension(Path::new("dir/out")),
            PathBuf::from("dir/out.eot")
        );
    }
}
