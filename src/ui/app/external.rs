use super::App;
use crate::core::to_hex;
use arboard::Clipboard;

impl App {
    /// Copy the selected control's hex color to the clipboard.
    pub fn copy_selected_hex(&mut self) {
        let Some((control, spec)) = self.selected_entry() else {
            self.set_error("No control selected to copy");
            return;
        };
        let hex = to_hex(spec);
        let control = control.to_string();

        match Clipboard::new() {
            Ok(mut clipboard) => {
                if let Err(e) = clipboard.set_text(hex.clone()) {
                    self.set_error(format!("Clipboard error: {}", e));
                } else {
                    self.set_status(format!("Copied {} ({}) to clipboard", hex, control));
                }
            }
            Err(e) => {
                self.set_error(format!("Clipboard unavailable: {}", e));
            }
        }
    }
}
