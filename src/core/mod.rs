//! Core theme model and file handling (no TUI dependencies).

mod color;
mod document;
mod fuzzy;
mod recent;
mod session;
mod store;

pub use color::*;
pub use document::*;
pub use fuzzy::*;
pub use recent::*;
pub use session::*;
pub use store::*;
