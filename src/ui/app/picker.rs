use super::{App, Channel, Mode, PickerState};
use crate::core::{parse_hex, resolve};

/// Step used by PageUp/PageDown in the picker.
pub const COARSE_STEP: i16 = 16;

impl App {
    /// Open the color picker for the selected control.
    pub fn open_picker(&mut self) {
        let Some((control, spec)) = self.selected_entry() else {
            self.set_error("No control selected");
            return;
        };
        let rgb = resolve(spec);
        self.picker = PickerState {
            control: control.to_string(),
            initial: rgb,
            rgb,
            ..PickerState::default()
        };
        self.ui.mode = Mode::Picker;
        self.ui.dirty = true;
    }

    /// Focus the next channel.
    pub fn picker_next_channel(&mut self) {
        self.focus_channel(self.picker.channel.next());
    }

    /// Focus the previous channel.
    pub fn picker_prev_channel(&mut self) {
        self.focus_channel(self.picker.channel.prev());
    }

    fn focus_channel(&mut self, channel: Channel) {
        self.picker.channel = channel;
        self.picker.typing = false;
        self.ui.dirty = true;
    }

    /// Nudge the focused channel, clamping to 0-255.
    pub fn picker_adjust(&mut self, delta: i16) {
        let channel = self.picker.channel;
        let value = (i16::from(channel.get(self.picker.rgb)) + delta).clamp(0, 255);
        channel.set(&mut self.picker.rgb, value as u8);
        self.picker.typing = false;
        self.ui.dirty = true;
    }

    /// Type a decimal digit into the focused channel.
    ///
    /// The first digit replaces the value; later digits append until the
    /// value would exceed 255, at which point entry restarts.
    pub fn picker_push_digit(&mut self, digit: u8) {
        let channel = self.picker.channel;
        let digit = u16::from(digit.min(9));
        let value = if self.picker.typing {
            let next = u16::from(channel.get(self.picker.rgb)) * 10 + digit;
            if next > 255 {
                digit
            } else {
                next
            }
        } else {
            digit
        };
        channel.set(&mut self.picker.rgb, value as u8);
        self.picker.typing = true;
        self.ui.dirty = true;
    }

    /// Delete the last typed digit of the focused channel.
    pub fn picker_backspace(&mut self) {
        let channel = self.picker.channel;
        let value = channel.get(self.picker.rgb) / 10;
        channel.set(&mut self.picker.rgb, value);
        self.picker.typing = true;
        self.ui.dirty = true;
    }

    /// Switch to hex entry.
    pub fn picker_start_hex(&mut self) {
        self.picker.hex_input = Some(String::new());
        self.ui.dirty = true;
    }

    /// Type a character of the hex value. Non-hex characters are ignored.
    pub fn picker_hex_push(&mut self, c: char) {
        if let Some(input) = self.picker.hex_input.as_mut() {
            if c.is_ascii_hexdigit() && input.len() < 6 {
                input.push(c.to_ascii_lowercase());
                self.ui.dirty = true;
            }
        }
    }

    /// Delete the last hex character.
    pub fn picker_hex_pop(&mut self) {
        if let Some(input) = self.picker.hex_input.as_mut() {
            input.pop();
            self.ui.dirty = true;
        }
    }

    /// Leave hex entry, applying the value if it is complete.
    pub fn picker_finish_hex(&mut self) {
        let Some(input) = self.picker.hex_input.take() else {
            return;
        };
        match parse_hex(&input) {
            Some(rgb) => {
                self.picker.rgb = rgb;
                self.picker.typing = false;
                self.ui.error = None;
            }
            None => {
                self.ui.error = Some(format!("Invalid hex color: #{}", input));
            }
        }
        self.ui.dirty = true;
    }

    /// Leave hex entry without changing the color.
    pub fn picker_cancel_hex(&mut self) {
        self.picker.hex_input = None;
        self.ui.dirty = true;
    }

    /// Write the picked color into the theme.
    pub fn apply_picker(&mut self) {
        let rgb = self.picker.rgb;
        let control = std::mem::take(&mut self.picker.control);
        self.ui.mode = Mode::Normal;
        if self.session.set_color(&control, rgb.r, rgb.g, rgb.b) {
            self.set_status(format!("{} set to {}", control, rgb.to_hex()));
        } else {
            self.set_error(format!("Control '{}' no longer exists", control));
        }
    }

    /// Close the picker without changing the theme.
    pub fn cancel_picker(&mut self) {
        self.picker = PickerState::default();
        self.ui.mode = Mode::Normal;
        self.ui.dirty = true;
    }
}
