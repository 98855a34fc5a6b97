//! themedit - A terminal editor for JSON UI color themes.
//!
//! Themes map control names to colors, either explicit RGB channels or one of
//! twelve named colors. The [`core`] module resolves and stores them with no UI
//! dependencies; [`ui`] and [`cli`] are the two front ends.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use themedit::prelude::*;
//!
//! let (mut session, _warning) = ThemeSession::open(std::path::Path::new("sample-theme.json"));
//! session.set_color("ButtonFace", 10, 20, 30);
//! session.export_to(std::path::Path::new("mine.eot"))?;
//! ```

#![deny(missing_docs)]

pub mod cli;
pub mod core;
pub mod metrics;
pub mod prelude;
pub mod ui;
