use proptest::prelude::*;
use serde_json::Value;
use themedit::core::{
    contrasting_text_color, named_colors, parse_hex, resolve, to_hex, to_json_bytes, ColorSpec,
    TextColor, ThemeDocument,
};

fn color_spec() -> impl Strategy<Value = ColorSpec> {
    let names: Vec<&'static str> = named_colors().iter().map(|(name, _)| *name).collect();
    prop_oneof![
        (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| ColorSpec::rgb(r, g, b)),
        prop::sample::select(names).prop_map(ColorSpec::named),
        "[A-Za-z]{1,12}".prop_map(ColorSpec::named),
        any::<i64>().prop_map(|n| ColorSpec::Malformed(Value::from(n))),
    ]
}

fn theme_document() -> impl Strategy<Value = ThemeDocument> {
    (
        "[ -~]{0,24}",
        prop::collection::vec(("[A-Za-z][A-Za-z0-9]{0,15}", color_spec()), 0..24),
    )
        .prop_map(|(name, entries)| {
            entries
                .into_iter()
                .fold(ThemeDocument::new(name), |doc, (control, spec)| {
                    doc.with_entry(control, spec)
                })
        })
}

proptest! {
    #[test]
    fn rgb_resolves_to_itself(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let rgb = resolve(&ColorSpec::rgb(r, g, b));
        prop_assert_eq!(rgb.channels(), (r, g, b));
    }

    #[test]
    fn hex_round_trips(spec in color_spec()) {
        prop_assert_eq!(parse_hex(&to_hex(&spec)), Some(resolve(&spec)));
    }

    #[test]
    fn hex_is_lowercase_and_seven_chars(spec in color_spec()) {
        let hex = to_hex(&spec);
        prop_assert_eq!(hex.len(), 7);
        prop_assert!(hex.starts_with('#'));
        prop_assert_eq!(hex.to_lowercase(), hex);
    }

    #[test]
    fn contrast_matches_luma_threshold(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let luma = 299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b);
        let expected = if luma > 128_000 { TextColor::Black } else { TextColor::White };
        prop_assert_eq!(contrasting_text_color(r, g, b), expected);
    }

    #[test]
    fn serialize_parse_serialize_is_stable(doc in theme_document()) {
        let first = to_json_bytes(&doc).unwrap();
        let parsed: ThemeDocument = serde_json::from_slice(&first).unwrap();
        let second = to_json_bytes(&parsed).unwrap();
        prop_assert_eq!(&parsed.name, &doc.name);
        prop_assert_eq!(parsed.len(), doc.len());
        prop_assert_eq!(first, second);
    }
}
