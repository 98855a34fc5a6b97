use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use themedit::core::{
    display_label, load, load_from, resolve, save, to_json_bytes, ColorSpec, ErrorKind, Rgb,
    ThemeDocument, ThemeSession, FALLBACK_GRAY,
};

fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn edit_export_and_reimport() {
    let dir = TempDir::new().unwrap();
    let source = write(
        dir.path(),
        "start.json",
        r#"{"Name":"T","Theme":{"Btn":{"R":10,"G":20,"B":30}}}"#,
    );

    let (mut session, warning) = ThemeSession::open(&source);
    assert!(warning.is_none());
    assert!(session.set_color("Btn", 1, 2, 3));

    let exported = dir.path().join("out.eot");
    session.export_to(&exported).unwrap();

    let reloaded = load_from(&exported).unwrap();
    assert_eq!(reloaded.name, "T");
    assert_eq!(reloaded.get("Btn"), Some(&ColorSpec::rgb(1, 2, 3)));
    assert_eq!(
        read_json(&exported),
        json!({"Name": "T", "Theme": {"Btn": {"R": 1, "G": 2, "B": 3}}})
    );
}

#[test]
fn export_is_four_space_indented() {
    let dir = TempDir::new().unwrap();
    let doc = ThemeDocument::new("Indented").with_entry("Btn", ColorSpec::named("Red"));
    let path = dir.path().join("nested/dir/theme.eot");

    save(&doc, &path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("\n    \"Name\": \"Indented\""));
    assert!(text.contains("\n        \"Btn\": {"));
    assert!(!dir.path().join("nested/dir/theme.eot.tmp").exists());
}

#[test]
fn import_missing_theme_leaves_document_unchanged() {
    let dir = TempDir::new().unwrap();
    let source = write(
        dir.path(),
        "start.json",
        r#"{"Name":"Keep","Theme":{"A":{"Name":"Blue"}}}"#,
    );
    let bad = write(dir.path(), "bad.eot", r#"{"Name":"No colors"}"#);

    let (mut session, _) = ThemeSession::open(&source);
    let before = session.document().clone();

    let err = session.import_from(&bad).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidFormat);
    assert_eq!(session.document(), &before);
}

#[test]
fn import_invalid_json_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let bad = write(dir.path(), "bad.eot", "{ not json");

    let mut session = ThemeSession::new(ThemeDocument::fallback(), None);
    let err = session.import_from(&bad).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ParseError);
    assert_eq!(session.document(), &ThemeDocument::fallback());
}

#[test]
fn import_does_not_move_reset_point() {
    let dir = TempDir::new().unwrap();
    let source = write(
        dir.path(),
        "start.json",
        r#"{"Name":"Start","Theme":{"A":{"Name":"Blue"}}}"#,
    );
    let other = write(
        dir.path(),
        "other.eot",
        r#"{"Name":"Other","Theme":{"B":{"R":1,"G":1,"B":1}}}"#,
    );

    let (mut session, _) = ThemeSession::open(&source);
    let original = session.document().clone();

    session.import_from(&other).unwrap();
    assert_eq!(session.document().name, "Other");
    assert!(session.is_modified());

    let restored = session.reset_to_original().clone();
    assert_eq!(restored, original);
    assert!(!session.is_modified());
}

#[test]
fn missing_startup_file_uses_fallback_theme() {
    let dir = TempDir::new().unwrap();
    let (session, warning) = ThemeSession::open(&dir.path().join("absent.json"));

    assert_eq!(warning.map(|e| e.kind()), Some(ErrorKind::NotFound));
    assert_eq!(session.document().name, "Default Theme");
    assert!(session.document().is_empty());
    assert!(session.source_path().is_none());
}

#[test]
fn malformed_entries_and_order_survive_round_trip() {
    let dir = TempDir::new().unwrap();
    let source = write(
        dir.path(),
        "odd.json",
        r#"{
            "Name": "Odd",
            "Author": "someone",
            "Theme": {
                "Zeta": {"Name": "Red"},
                "Alpha": {"R": 300, "G": 0, "B": 0},
                "Mid": "not an object",
                "Beta": {"R": 1, "G": 2, "B": 3, "A": 4},
                "Both": {"Name": "Red", "R": 1},
                "Last": {"Name": "Chartreuse"}
            }
        }"#,
    );

    let doc = load(&source).unwrap();
    let controls: Vec<&str> = doc.controls().collect();
    assert_eq!(controls, ["Zeta", "Alpha", "Mid", "Beta", "Both", "Last"]);
    assert_eq!(doc.malformed_count(), 2);
    assert_eq!(resolve(doc.get("Alpha").unwrap()), FALLBACK_GRAY);
    assert_eq!(resolve(doc.get("Beta").unwrap()), Rgb::new(1, 2, 3));
    assert_eq!(display_label(doc.get("Beta").unwrap()), "RGB(1, 2, 3)");
    assert_eq!(resolve(doc.get("Both").unwrap()), Rgb::new(255, 0, 0));
    assert_eq!(display_label(doc.get("Both").unwrap()), "Named Color: Red");
    assert_eq!(resolve(doc.get("Last").unwrap()), FALLBACK_GRAY);

    let out = dir.path().join("odd.eot");
    save(&doc, &out).unwrap();

    let original = read_json(&source);
    let written = read_json(&out);
    assert_eq!(written, original);

    let reloaded = load(&out).unwrap();
    let reloaded_controls: Vec<&str> = reloaded.controls().collect();
    assert_eq!(reloaded_controls, controls);
}

#[test]
fn serialization_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let source = write(
        dir.path(),
        "theme.json",
        r#"{"Name":"I","Theme":{"A":{"Name":"Green"},"B":{"R":9,"G":8,"B":7},"C":[1,2]}}"#,
    );

    let first = to_json_bytes(&load(&source).unwrap()).unwrap();
    let second_path = dir.path().join("again.json");
    fs::write(&second_path, &first).unwrap();
    let second = to_json_bytes(&load(&second_path).unwrap()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn set_color_is_idempotent_and_targeted() {
    let mut session = ThemeSession::new(
        ThemeDocument::new("S")
            .with_entry("A", ColorSpec::named("Black"))
            .with_entry("B", ColorSpec::named("White")),
        None,
    );

    assert!(session.set_color("A", 5, 6, 7));
    let once = session.document().clone();
    assert!(session.set_color("A", 5, 6, 7));
    assert_eq!(session.document(), &once);
    assert_eq!(session.document().get("B"), Some(&ColorSpec::named("White")));
    assert_eq!(
        session.document().get("A"),
        Some(&ColorSpec::from(Rgb::new(5, 6, 7)))
    );

    assert!(!session.set_color("Missing", 1, 1, 1));
    assert_eq!(session.document(), &once);
}

#[test]
fn bundled_sample_theme_loads() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("sample-theme.json");
    let doc = load_from(&path).unwrap();
    assert!(!doc.is_empty());
    assert_eq!(doc.malformed_count(), 0);
}
