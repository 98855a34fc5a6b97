use super::{App, Mode};

impl App {
    /// Start filtering controls.
    pub fn start_filter(&mut self) {
        self.ui.mode = Mode::Filter;
        self.list.filter.clear();
        self.ui.dirty = true;
    }

    /// Apply the current filter query and return to normal mode.
    pub fn apply_filter(&mut self) {
        self.recompute_filter();
        self.ui.mode = Mode::Normal;
        self.ui.dirty = true;
    }

    fn recompute_filter(&mut self) {
        let query = self.list.filter.trim();
        if query.is_empty() {
            self.list.filtered_indices.clear();
        } else {
            self.list.filtered_indices = self
                .fuzzy_matcher
                .filter_sorted(query, self.session.document().controls().enumerate());
        }

        if !self.list.filtered_indices.is_empty()
            && !self.list.filtered_indices.contains(&self.list.selected_idx)
        {
            self.list.selected_idx = self.list.filtered_indices[0];
        }
    }

    /// Update filter live as the user types.
    pub fn update_filter_live(&mut self) {
        self.recompute_filter();
        self.ui.dirty = true;
    }

    /// Cancel filter and restore the full list.
    pub fn cancel_filter(&mut self) {
        self.ui.mode = Mode::Normal;
        self.list.filter.clear();
        self.list.filtered_indices.clear();
        self.ui.dirty = true;
    }

    /// Clear filter while in normal mode.
    pub fn clear_filter(&mut self) {
        if !self.list.filtered_indices.is_empty() || !self.list.filter.is_empty() {
            self.list.filtered_indices.clear();
            self.list.filter.clear();
            self.ui.dirty = true;
        }
    }

    /// True while a non-empty query matches nothing.
    pub fn filter_has_no_matches(&self) -> bool {
        !self.list.filter.trim().is_empty() && self.list.filtered_indices.is_empty()
    }

    /// Entry indices shown in the list, in display order.
    pub fn visible_indices(&self) -> Vec<usize> {
        if self.filter_has_no_matches() {
            Vec::new()
        } else if self.list.filtered_indices.is_empty() {
            (0..self.document().len()).collect()
        } else {
            self.list.filtered_indices.clone()
        }
    }

    /// Check if an entry index passes the filter.
    pub fn is_entry_visible(&self, idx: usize) -> bool {
        if self.filter_has_no_matches() {
            return false;
        }
        idx < self.document().len()
            && (self.list.filtered_indices.is_empty() || self.list.filtered_indices.contains(&idx))
    }
}
