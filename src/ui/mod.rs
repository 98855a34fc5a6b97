//! Terminal UI using ratatui.

mod app;
mod input;
pub mod render;

pub use app::{
    App, Channel, ListState, Mode, PickerState, PromptKind, PromptState, UiState, COARSE_STEP,
};
pub use input::handle_input;
pub use render::render;
