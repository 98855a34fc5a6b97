//! Application state and lifecycle.

use crate::core::{ColorSpec, FuzzyMatcher, RecentPaths, ThemeDocument, ThemeSession};

mod external;
mod filter;
mod navigation;
mod picker;
mod prompt;
mod state;

pub use picker::COARSE_STEP;
pub use state::{Channel, ListState, Mode, PickerState, PromptKind, PromptState, UiState};

/// Application state.
pub struct App {
    /// Current document and its startup snapshot.
    pub session: ThemeSession,
    /// Recently used paths, when the per-user store is available.
    pub recent: Option<RecentPaths>,
    /// Control list state.
    pub list: ListState,
    /// Color picker state.
    pub picker: PickerState,
    /// Text prompt state.
    pub prompt: PromptState,
    /// UI state (mode, messages).
    pub ui: UiState,
    /// Should the app quit?
    pub should_quit: bool,

    /// Fuzzy matcher for control filtering.
    fuzzy_matcher: FuzzyMatcher,
}

impl App {
    /// Create an app editing `session`.
    pub fn new(session: ThemeSession, recent: Option<RecentPaths>) -> Self {
        Self {
            session,
            recent,
            list: ListState::default(),
            picker: PickerState::default(),
            prompt: PromptState::default(),
            ui: UiState {
                dirty: true,
                ..UiState::default()
            },
            should_quit: false,
            fuzzy_matcher: FuzzyMatcher::new(),
        }
    }

    /// Current document.
    pub fn document(&self) -> &ThemeDocument {
        self.session.document()
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.ui.mode
    }

    /// Selected control name and spec.
    pub fn selected_entry(&self) -> Option<(&str, &ColorSpec)> {
        if !self.is_entry_visible(self.list.selected_idx) {
            return None;
        }
        self.document().get_index(self.list.selected_idx)
    }

    /// Selected control name.
    pub fn selected_control(&self) -> Option<&str> {
        self.selected_entry().map(|(name, _)| name)
    }

    /// Whether a redraw is pending.
    pub fn dirty(&self) -> bool {
        self.ui.dirty
    }

    /// Request a redraw.
    pub fn mark_dirty(&mut self) {
        self.ui.dirty = true;
    }

    /// Clear the redraw flag after drawing.
    pub fn clear_dirty(&mut self) {
        self.ui.dirty = false;
    }

    /// Show an error in the bottom bar.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.ui.error = Some(message.into());
        self.ui.status = None;
        self.ui.dirty = true;
    }

    /// Show a status message in the bottom bar.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.ui.status = Some(message.into());
        self.ui.error = None;
        self.ui.dirty = true;
    }

    /// Clear bottom-bar messages.
    pub fn clear_messages(&mut self) {
        if self.ui.error.is_some() || self.ui.status.is_some() {
            self.ui.error = None;
            self.ui.status = None;
            self.ui.dirty = true;
        }
    }

    /// Reset list state after the document was replaced.
    fn document_replaced(&mut self) {
        self.list.filter.clear();
        self.list.filtered_indices.clear();
        self.list.scroll = 0;
        let len = self.document().len();
        if self.list.selected_idx >= len {
            self.list.selected_idx = len.saturating_sub(1);
        }
        self.ui.dirty = true;
    }
}
