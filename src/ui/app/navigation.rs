use super::App;

impl App {
    /// Move selection up in the control list.
    pub fn select_prev(&mut self) {
        if self.filter_has_no_matches() {
            return;
        }
        if self.list.filtered_indices.is_empty() {
            if self.list.selected_idx > 0 {
                self.list.selected_idx -= 1;
                self.ui.dirty = true;
            }
        } else if let Some(pos) = self.filtered_position() {
            if pos > 0 {
                self.list.selected_idx = self.list.filtered_indices[pos - 1];
                self.ui.dirty = true;
            }
        }
    }

    /// Move selection down in the control list.
    pub fn select_next(&mut self) {
        if self.filter_has_no_matches() {
            return;
        }
        if self.list.filtered_indices.is_empty() {
            if self.list.selected_idx + 1 < self.document().len() {
                self.list.selected_idx += 1;
                self.ui.dirty = true;
            }
        } else if let Some(pos) = self.filtered_position() {
            if pos + 1 < self.list.filtered_indices.len() {
                self.list.selected_idx = self.list.filtered_indices[pos + 1];
                self.ui.dirty = true;
            }
        }
    }

    /// Jump to the first visible control.
    pub fn select_first(&mut self) {
        let first = self.visible_indices().first().copied();
        if let Some(idx) = first {
            self.list.selected_idx = idx;
            self.ui.dirty = true;
        }
    }

    /// Jump to the last visible control.
    pub fn select_last(&mut self) {
        let last = self.visible_indices().last().copied();
        if let Some(idx) = last {
            self.list.selected_idx = idx;
            self.ui.dirty = true;
        }
    }

    fn filtered_position(&self) -> Option<usize> {
        self.list
            .filtered_indices
            .iter()
            .position(|&i| i == self.list.selected_idx)
    }
}
