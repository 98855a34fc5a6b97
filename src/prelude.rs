//! Common re-exports for convenient importing.
//!
//! # Example
//!
//! ```rust,ignore
//! use themedit::prelude::*;
//! ```

pub use crate::core::{
    contrasting_text_color, display_label, resolve, to_hex, ColorSpec, ErrorKind, Rgb, TextColor,
    ThemeDocument, ThemeError, ThemeSession,
};
