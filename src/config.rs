//! Icon configuration: the caller-supplied side of the rendering contract.
//!
//! An [`IconConfig`] carries a color, a size and a bag of extra attributes.
//! Every field is optional and serializes to a compact camelCase JSON form so
//! hosts can pass it across process or language boundaries:
//!
//! ```json
//! {
//!   "color": "#ff0000",
//!   "size": 64,
//!   "extraAttributes": { "data-testid": "alarm" }
//! }
//! ```
//!
//! Values are never validated. A color or size the drawing surface does not
//! understand is forwarded as-is and the surface decides what to do with it.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Size applied when the configuration does not set one, in logical units.
pub const DEFAULT_SIZE: f64 = 32.0;

/// Extra root attributes, forwarded verbatim.
pub type Attributes = BTreeMap<String, String>;

// ============================================================================
// IconColor
// ============================================================================

/// The color used by the color-bearing parts of a glyph.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IconColor {
    /// Inherit from the surrounding context (`currentColor`).
    #[default]
    Inherit,
    /// Any color value the drawing surface accepts, passed through.
    Value(String),
}

impl IconColor {
    /// The SVG keyword for the inherit sentinel.
    pub const CURRENT_COLOR: &'static str = "currentColor";

    pub fn new(value: impl Into<String>) -> Self {
        Self::from(value.into())
    }

    /// The paint value emitted into the drawing.
    pub fn as_paint(&self) -> &str {
        match self {
            Self::Inherit => Self::CURRENT_COLOR,
            Self::Value(value) => value,
        }
    }

    pub fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl From<String> for IconColor {
    fn from(value: String) -> Self {
        if value == Self::CURRENT_COLOR {
            Self::Inherit
        } else {
            Self::Value(value)
        }
    }
}

impl From<&str> for IconColor {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<IconColor> for String {
    fn from(color: IconColor) -> Self {
        match color {
            IconColor::Inherit => IconColor::CURRENT_COLOR.to_string(),
            IconColor::Value(value) => value,
        }
    }
}

impl fmt::Display for IconColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_paint())
    }
}

// ============================================================================
// IconSize
// ============================================================================

/// A linear dimension applied to the icon's width; height follows the glyph's
/// aspect ratio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IconSize {
    /// Plain logical units.
    Units(f64),
    /// A length with a unit, e.g. `"2em"` or `"24px"`.
    Length(String),
}

impl Default for IconSize {
    fn default() -> Self {
        Self::Units(DEFAULT_SIZE)
    }
}

impl IconSize {
    /// Returns the dimensions `(width, height)` for a canvas with the given
    /// height/width ratio.
    ///
    /// `height` is `None` when the glyph is not square and the size is either
    /// a length this crate cannot read or a percentage, which resolves against
    /// the parent's height rather than the width. The surface then derives the
    /// height from the viewBox.
    pub fn dimensions(&self, aspect_ratio: f64) -> (String, Option<String>) {
        match self {
            Self::Units(width) => (format_number(*width), Some(format_number(width * aspect_ratio))),
            Self::Length(raw) => {
                if aspect_ratio == 1.0 {
                    return (raw.clone(), Some(raw.clone()));
                }
                match split_length(raw) {
                    Some((value, unit)) if unit != "%" => (
                        raw.clone(),
                        Some(format!("{}{}", format_number(value * aspect_ratio), unit)),
                    ),
                    _ => (raw.clone(), None),
                }
            }
        }
    }
}

impl From<f64> for IconSize {
    fn from(units: f64) -> Self {
        Self::Units(units)
    }
}

impl From<u32> for IconSize {
    fn from(units: u32) -> Self {
        Self::Units(units as f64)
    }
}

impl From<&str> for IconSize {
    fn from(length: &str) -> Self {
        Self::Length(length.to_string())
    }
}

impl From<String> for IconSize {
    fn from(length: String) -> Self {
        Self::Length(length)
    }
}

/// Splits `"2.5em"` into `(2.5, "em")`. Returns `None` for anything that does
/// not start with a finite number.
fn split_length(raw: &str) -> Option<(f64, &str)> {
    let trimmed = raw.trim();
    let end = trimmed
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-' || c == '+'))
        .unwrap_or(trimmed.len());
    let (number, unit) = trimmed.split_at(end);
    let value: f64 = number.parse().ok()?;
    value.is_finite().then_some((value, unit.trim()))
}

/// Formats a dimension without a trailing `.0` and with float noise rounded
/// away.
fn format_number(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    format!("{}", rounded)
}

// ============================================================================
// IconConfig
// ============================================================================

/// Render-time parameters for a glyph.
///
/// All fields default: color inherits, size is [`DEFAULT_SIZE`], no extra
/// attributes.
///
/// ```
/// use facility_icons::{IconColor, IconConfig, IconSize};
///
/// let config = IconConfig::new()
///     .with_color("#ff0000")
///     .with_size(64.0)
///     .with_attribute("data-testid", "alarm");
///
/// assert_eq!(config.color, IconColor::Value("#ff0000".into()));
/// assert_eq!(config.size, IconSize::Units(64.0));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "tsify", derive(tsify_next::Tsify))]
pub struct IconConfig {
    /// Color for fills and strokes that follow the icon color.
    #[cfg_attr(feature = "jsonschema", schemars(with = "String"))]
    #[cfg_attr(feature = "tsify", tsify(type = "string", optional))]
    pub color: IconColor,

    /// Width of the rendered icon; height follows the glyph's aspect ratio.
    #[cfg_attr(feature = "jsonschema", schemars(with = "serde_json::Value"))]
    #[cfg_attr(feature = "tsify", tsify(type = "number | string", optional))]
    pub size: IconSize,

    /// Attributes forwarded to the root element without interpretation.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    #[cfg_attr(feature = "tsify", tsify(type = "Record<string, string>", optional))]
    pub extra_attributes: Attributes,
}

impl IconConfig {
    /// Creates a configuration with every field at its default.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, color: impl Into<IconColor>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_size(mut self, size: impl Into<IconSize>) -> Self {
        self.size = size.into();
        self
    }

    /// Adds one pass-through attribute for the root element.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_attributes.insert(name.into(), value.into());
        self
    }

    /// Serializes the configuration to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the configuration to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// ============================================================================
// Tests
// ============================================================================
