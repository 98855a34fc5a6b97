use crate::core::{Rgb, FALLBACK_GRAY};

/// UI mode (normal vs input modes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Normal navigation mode.
    #[default]
    Normal,
    /// Typing a fuzzy filter for the control list.
    Filter,
    /// Editing a control's color.
    Picker,
    /// Typing into a text prompt (name, export path, import path).
    Prompt,
    /// Waiting for confirmation before resetting the theme.
    ConfirmReset,
    /// Viewing help overlay.
    Help,
}

/// Color channel focused in the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Channel {
    /// Red.
    #[default]
    Red,
    /// Green.
    Green,
    /// Blue.
    Blue,
}

impl Channel {
    /// Channels in display order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Single-letter label.
    pub fn label(self) -> &'static str {
        match self {
            Channel::Red => "R",
            Channel::Green => "G",
            Channel::Blue => "B",
        }
    }

    /// Next channel, wrapping.
    pub fn next(self) -> Self {
        match self {
            Channel::Red => Channel::Green,
            Channel::Green => Channel::Blue,
            Channel::Blue => Channel::Red,
        }
    }

    /// Previous channel, wrapping.
    pub fn prev(self) -> Self {
        match self {
            Channel::Red => Channel::Blue,
            Channel::Green => Channel::Red,
            Channel::Blue => Channel::Green,
        }
    }

    /// This channel's value in `rgb`.
    pub fn get(self, rgb: Rgb) -> u8 {
        match self {
            Channel::Red => rgb.r,
            Channel::Green => rgb.g,
            Channel::Blue => rgb.b,
        }
    }

    /// Set this channel's value in `rgb`.
    pub fn set(self, rgb: &mut Rgb, value: u8) {
        match self {
            Channel::Red => rgb.r = value,
            Channel::Green => rgb.g = value,
            Channel::Blue => rgb.b = value,
        }
    }
}

/// Control list navigation and filter state.
#[derive(Debug, Default)]
pub struct ListState {
    /// Selected entry index (into the document's entries).
    pub selected_idx: usize,
    /// Scroll offset (first visible row).
    pub scroll: usize,
    /// Filter query string.
    pub filter: String,
    /// Filtered entry indices (empty = show all).
    pub filtered_indices: Vec<usize>,
}

/// Color picker state.
#[derive(Debug)]
pub struct PickerState {
    /// Control being edited.
    pub control: String,
    /// Color before editing started.
    pub initial: Rgb,
    /// Color being edited.
    pub rgb: Rgb,
    /// Focused channel.
    pub channel: Channel,
    /// True once a digit was typed for the focused channel.
    pub typing: bool,
    /// Hex entry buffer, `Some` while in hex mode.
    pub hex_input: Option<String>,
}

impl Default for PickerState {
    fn default() -> Self {
        Self {
            control: String::new(),
            initial: FALLBACK_GRAY,
            rgb: FALLBACK_GRAY,
            channel: Channel::default(),
            typing: false,
            hex_input: None,
        }
    }
}

/// What a text prompt is collecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptKind {
    /// New theme name.
    #[default]
    Rename,
    /// Path to export to.
    Export,
    /// Path to import from.
    Import,
}

impl PromptKind {
    /// Overlay title.
    pub fn title(self) -> &'static str {
        match self {
            PromptKind::Rename => " Theme Name ",
            PromptKind::Export => " Export Theme As ",
            PromptKind::Import => " Load Theme File ",
        }
    }
}

/// Text prompt state.
#[derive(Debug, Default)]
pub struct PromptState {
    /// What the prompt is for.
    pub kind: PromptKind,
    /// Current input.
    pub input: String,
}

/// UI mode and message state.
#[derive(Debug, Default)]
pub struct UiState {
    /// Current mode.
    pub mode: Mode,
    /// Error message.
    pub error: Option<String>,
    /// Status message.
    pub status: Option<String>,
    /// Dirty flag for redraw.
    pub dirty: bool,
}
