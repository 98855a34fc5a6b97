//! Theme document model.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::core::Rgb;

/// Name given to a document whose file has no `Name` field.
pub const UNNAMED_THEME: &str = "New Theme";

/// Name of the empty document substituted when startup loading fails.
pub const FALLBACK_THEME_NAME: &str = "Default Theme";

/// Reference into the named-color table, `{"Name": "..."}` on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedColor {
    /// Table label, e.g. `DimGray`.
    #[serde(rename = "Name")]
    pub name: String,
    /// Sibling keys next to `Name`, written back untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NamedColor {
    /// Create a named reference. The name is not checked against the table.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: Map::new(),
        }
    }
}

/// Explicit channels, `{"R": .., "G": .., "B": ..}` on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RgbColor {
    /// The channels.
    #[serde(flatten)]
    pub rgb: Rgb,
    /// Sibling keys next to `R`/`G`/`B`, written back untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<Rgb> for RgbColor {
    fn from(rgb: Rgb) -> Self {
        Self {
            rgb,
            extra: Map::new(),
        }
    }
}

/// Color of a single control.
///
/// An object with a string `Name` is a named reference. Otherwise an object
/// with integer `R`, `G` and `B` in 0-255 is explicit RGB. Other keys on either
/// shape are carried along. Anything else is kept verbatim as
/// [`ColorSpec::Malformed`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color from the fixed table.
    Named(NamedColor),
    /// Explicit channels.
    Rgb(RgbColor),
    /// Unrecognized JSON, preserved for round trip.
    Malformed(Value),
}

impl ColorSpec {
    /// Named spec.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(NamedColor::new(name))
    }

    /// RGB spec.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from(Rgb::new(r, g, b))
    }

    /// Classify a raw JSON color value. `Name` wins over `R`/`G`/`B`.
    pub fn from_json(value: Value) -> Self {
        let Value::Object(fields) = value else {
            return Self::Malformed(value);
        };

        if let Some(name) = fields.get("Name") {
            return match name.as_str() {
                Some(name) => Self::Named(NamedColor {
                    name: name.to_string(),
                    extra: other_fields(&fields, &["Name"]),
                }),
                None => Self::Malformed(Value::Object(fields)),
            };
        }

        let channel = |key: &str| {
            fields
                .get(key)
                .and_then(Value::as_u64)
                .and_then(|n| u8::try_from(n).ok())
        };
        match (channel("R"), channel("G"), channel("B")) {
            (Some(r), Some(g), Some(b)) => Self::Rgb(RgbColor {
                rgb: Rgb::new(r, g, b),
                extra: other_fields(&fields, &["R", "G", "B"]),
            }),
            _ => Self::Malformed(Value::Object(fields)),
        }
    }

    /// Whether this spec is an unrecognized shape.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed(_))
    }
}

fn other_fields(fields: &Map<String, Value>, known: &[&str]) -> Map<String, Value> {
    fields
        .iter()
        .filter(|(key, _)| !known.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

impl<'de> Deserialize<'de> for ColorSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from_json)
    }
}

impl From<Rgb> for ColorSpec {
    fn from(rgb: Rgb) -> Self {
        Self::Rgb(RgbColor::from(rgb))
    }
}

/// A theme: a name plus an ordered control → color mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeDocument {
    /// Free-form label.
    #[serde(rename = "Name", default = "unnamed")]
    pub name: String,
    /// Control colors in file order.
    #[serde(rename = "Theme", default)]
    pub entries: IndexMap<String, ColorSpec>,
    /// Other top-level fields, written back untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn unnamed() -> String {
    UNNAMED_THEME.to_string()
}

impl Default for ThemeDocument {
    fn default() -> Self {
        Self::fallback()
    }
}

impl ThemeDocument {
    /// Empty document with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: IndexMap::new(),
            extra: Map::new(),
        }
    }

    /// Empty document used when the startup file can't be read.
    pub fn fallback() -> Self {
        Self::new(FALLBACK_THEME_NAME)
    }

    /// Builder-style insert, for constructing documents in code.
    #[must_use]
    pub fn with_entry(mut self, control: impl Into<String>, spec: ColorSpec) -> Self {
        self.entries.insert(control.into(), spec);
        self
    }

    /// Number of controls.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when there are no controls.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Color spec of a control.
    pub fn get(&self, control: &str) -> Option<&ColorSpec> {
        self.entries.get(control)
    }

    /// Whether the control exists.
    pub fn contains(&self, control: &str) -> bool {
        self.entries.contains_key(control)
    }

    /// Control at a display position.
    pub fn get_index(&self, idx: usize) -> Option<(&str, &ColorSpec)> {
        self.entries.get_index(idx).map(|(k, v)| (k.as_str(), v))
    }

    /// Control names in display order.
    pub fn controls(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Rename the theme.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Replace an existing control's color with an RGB spec.
    ///
    /// The control must already exist; edits never add controls. Returns the
    /// previous spec, or `None` (document untouched) if the control is absent.
    pub fn set_color(&mut self, control: &str, rgb: Rgb) -> Option<ColorSpec> {
        let slot = self.entries.get_mut(control)?;
        Some(std::mem::replace(slot, ColorSpec::from(rgb)))
    }

    /// Number of entries that fall back to gray because they are malformed.
    pub fn malformed_count(&self) -> usize {
        self.entries.values().filter(|s| s.is_malformed()).count()
    }
}
