//! CLI commands for inspecting and editing a theme file.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{anyhow, bail, Context, Result};
use clap::Subcommand;
use serde::Serialize;

use crate::core::{
    display_label, load, load_from, named_colors, parse_color_input, resolve, save, to_hex,
    ThemeDocument,
};

/// Theme subcommands. Without one, the interactive editor starts.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List every control with its resolved color
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show one control's color, label, and legible text color
    Show {
        /// Control name
        control: String,
    },
    /// Set a control's color (#rrggbb, r,g,b, or a named color) and save
    Set {
        /// Control name
        control: String,
        /// New color
        color: String,
    },
    /// Rename the theme and save
    Rename {
        /// New theme name
        name: String,
    },
    /// Check that a file is an importable theme
    Validate {
        /// Theme file to check
        path: PathBuf,
    },
    /// Print the named-color table
    Colors,
}

#[derive(Debug, Serialize)]
struct ListEntry<'a> {
    control: &'a str,
    hex: String,
    label: String,
    text: &'static str,
}

/// Run a command, printing errors to stderr.
pub fn run_theme_command(file: &Path, command: &Command) -> ExitCode {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match execute(file, command, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

/// Run a command against `file`, writing output to `out`.
pub fn execute(file: &Path, command: &Command, out: &mut dyn Write) -> Result<()> {
    match command {
        Command::List { json } => cmd_list(&load(file)?, *json, out),
        Command::Show { control } => cmd_show(&load(file)?, control, out),
        Command::Set { control, color } => cmd_set(file, control, color, out),
        Command::Rename { name } => cmd_rename(file, name, out),
        Command::Validate { path } => cmd_validate(path, out),
        Command::Colors => cmd_colors(out),
    }
}

fn cmd_list(doc: &ThemeDocument, json: bool, out: &mut dyn Write) -> Result<()> {
    let entries: Vec<ListEntry> = doc
        .entries
        .iter()
        .map(|(control, spec)| ListEntry {
            control,
            hex: to_hex(spec),
            label: display_label(spec),
            text: resolve(spec).contrasting_text().as_str(),
        })
        .collect();

    if json {
        let value = serde_json::json!({ "name": doc.name, "controls": entries });
        writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        return Ok(());
    }

    writeln!(out, "{}", doc.name)?;
    let width = entries
        .iter()
        .map(|e| e.control.chars().count())
        .max()
        .unwrap_or(0);
    for e in &entries {
        writeln!(out, "  {:<width$}  {}  {}", e.control, e.hex, e.label)?;
    }
    Ok(())
}

fn cmd_show(doc: &ThemeDocument, control: &str, out: &mut dyn Write) -> Result<()> {
    let spec = doc
        .get(control)
        .ok_or_else(|| anyhow!("no control named '{}'", control))?;
    let rgb = resolve(spec);
    writeln!(out, "{}", control)?;
    writeln!(out, "  hex:   {}", rgb.to_hex())?;
    writeln!(out, "  label: {}", display_label(spec))?;
    writeln!(out, "  text:  {}", rgb.contrasting_text())?;
    Ok(())
}

fn cmd_set(file: &Path, control: &str, color: &str, out: &mut dyn Write) -> Result<()> {
    let Some(rgb) = parse_color_input(color) else {
        bail!("invalid color '{}': use #rrggbb, r,g,b, or a named color", color);
    };
    let mut doc = load(file)?;
    if doc.set_color(control, rgb).is_none() {
        bail!("no control named '{}'", control);
    }
    save(&doc, file)?;
    writeln!(out, "{}: {}", control, rgb.to_hex())?;
    Ok(())
}

fn cmd_rename(file: &Path, name: &str, out: &mut dyn Write) -> Result<()> {
    let mut doc = load(file)?;
    doc.set_name(name);
    save(&doc, file)?;
    writeln!(out, "Renamed theme to {}", name)?;
    Ok(())
}

fn cmd_validate(path: &Path, out: &mut dyn Write) -> Result<()> {
    let doc = load_from(path).with_context(|| format!("{} is not a valid theme", path.display()))?;
    write!(out, "ok: {} ({} controls", doc.name, doc.len())?;
    match doc.malformed_count() {
        0 => writeln!(out, ")")?,
        n => writeln!(out, ", {} invalid colors shown as gray)", n)?,
    }
    Ok(())
}

fn cmd_colors(out: &mut dyn Write) -> Result<()> {
    for (name, rgb) in named_colors() {
        writeln!(out, "  {:<10} {}  {}", name, rgb.to_hex(), rgb)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ColorSpec, ErrorKind, ThemeError};
    use tempfile::TempDir;

    const SAMPLE: &str = r#"{
        "Name": "Sample",
        "Theme": {
            "ButtonFace": {"Name": "LightGray"},
            "Window": {"R": 10, "G": 20, "B": 30},
            "Broken": {"R": 1}
        }
    }"#;

    fn fixture() -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("theme.json");
        std::fs::write(&path, SAMPLE).unwrap();
        (dir, path)
    }

    fn run(file: &Path, command: Command) -> Result<String> {
        let mut out = Vec::new();
        execute(file, &command, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn list_table() {
        let (_dir, path) = fixture();
        let out = run(&path, Command::List { json: false }).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Sample");
        assert_eq!(lines[1], "  ButtonFace  #d3d3d3  Named Color: LightGray");
        assert_eq!(lines[2], "  Window      #0a141e  RGB(10, 20, 30)");
        assert_eq!(lines[3], "  Broken      #808080  Invalid Color");
    }

    #[test]
    fn list_json() {
        let (_dir, path) = fixture();
        let out = run(&path, Command::List { json: true }).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["name"], "Sample");
        assert_eq!(value["controls"][0]["control"], "ButtonFace");
        assert_eq!(value["controls"][0]["text"], "black");
        assert_eq!(value["controls"][1]["text"], "white");
    }

    #[test]
    fn show_unknown_control_fails() {
        let (_dir, path) = fixture();
        let err = run(&path, Command::Show { control: "Nope".into() }).unwrap_err();
        assert!(err.to_string().contains("Nope"));
    }

    #[test]
    fn set_writes_rgb_and_keeps_others() {
        let (_dir, path) = fixture();
        let out = run(
            &path,
            Command::Set {
                control: "ButtonFace".into(),
                color: "1,2,3".into(),
            },
        )
        .unwrap();
        assert_eq!(out.trim(), "ButtonFace: #010203");

        let doc = load(&path).unwrap();
        assert_eq!(doc.get("ButtonFace"), Some(&ColorSpec::rgb(1, 2, 3)));
        assert_eq!(doc.get("Window"), Some(&ColorSpec::rgb(10, 20, 30)));
        assert!(doc.get("Broken").unwrap().is_malformed());
    }

    #[test]
    fn set_rejects_bad_color_without_writing() {
        let (_dir, path) = fixture();
        let before = std::fs::read_to_string(&path).unwrap();
        assert!(run(
            &path,
            Command::Set {
                control: "Window".into(),
                color: "chartreuse".into(),
            },
        )
        .is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn rename_saves() {
        let (_dir, path) = fixture();
        run(&path, Command::Rename { name: "Night".into() }).unwrap();
        assert_eq!(load(&path).unwrap().name, "Night");
    }

    #[test]
    fn validate_reports_kind() {
        let (dir, path) = fixture();
        let out = run(&path, Command::Validate { path: path.clone() }).unwrap();
        assert_eq!(out.trim(), "ok: Sample (3 controls, 1 invalid colors shown as gray)");

        let bad = dir.path().join("bad.eot");
        std::fs::write(&bad, r#"{"Name": "x"}"#).unwrap();
        let err = run(&path, Command::Validate { path: bad }).unwrap_err();
        let theme_err = err.downcast_ref::<ThemeError>().unwrap();
        assert_eq!(theme_err.kind(), ErrorKind::InvalidFormat);
    }

    #[test]
    fn colors_lists_table() {
        let (_dir, path) = fixture();
        let out = run(&path, Command::Colors).unwrap();
        assert_eq!(out.lines().count(), 12);
        assert!(out.contains("DimGray    #696969  RGB(105, 105, 105)"));
    }
}
