//! Non-interactive theme commands.

mod commands;

pub use commands::{execute, run_theme_command, Command};
