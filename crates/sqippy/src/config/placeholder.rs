//! Caller-facing placeholder options, as a build script would pass them.
//!
//! Keys are camelCase to match the plugin option names (`primitives`, `blur`,
//! `mode`, `type`, `includeSource`, `prependName`, `appendName`). Values are
//! accepted leniently where callers historically passed loose types.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Options supplied by the caller. Every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderConfig {
    /// Number of primitive shapes to fit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primitives: Option<PrimitiveCount>,

    /// Gaussian blur standard deviation applied to the SVG
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur: Option<i64>,

    /// Primitive shape strategy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<ShapeMode>,

    /// Which part of the vectorizer result becomes the output file
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub artifact_kind: Option<ArtifactKind>,

    /// Whether the original image is passed through after the artifact
    #[serde(default, skip_serializing_if = "IncludeSource::is_unset")]
    pub include_source: IncludeSource,

    /// Text placed before the output base name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prepend_name: Option<Affix>,

    /// Text placed after the output base name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub append_name: Option<Affix>,
}

impl PlaceholderConfig {
    /// Parse options from a JSON object, e.g. `{"type": "svg_base64encoded"}`.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Primitive shape strategies understood by `primitive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ModeValue", into = "u8")]
pub enum ShapeMode {
    Combo,
    Triangle,
    Rect,
    Ellipse,
    Circle,
    RotatedRect,
    Beziers,
    RotatedEllipse,
    Polygon,
}

impl ShapeMode {
    /// All modes, ordered by code.
    pub const ALL: [ShapeMode; 9] = [
        Self::Combo,
        Self::Triangle,
        Self::Rect,
        Self::Ellipse,
        Self::Circle,
        Self::RotatedRect,
        Self::Beziers,
        Self::RotatedEllipse,
        Self::Polygon,
    ];

    /// Numeric code passed to `primitive -m`.
    pub fn code(self) -> u8 {
        match self {
            Self::Combo => 0,
            Self::Triangle => 1,
            Self::Rect => 2,
            Self::Ellipse => 3,
            Self::Circle => 4,
            Self::RotatedRect => 5,
            Self::Beziers => 6,
            Self::RotatedEllipse => 7,
            Self::Polygon => 8,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Combo => "combo",
            Self::Triangle => "triangle",
            Self::Rect => "rect",
            Self::Ellipse => "ellipse",
            Self::Circle => "circle",
            Self::RotatedRect => "rotatedrect",
            Self::Beziers => "beziers",
            Self::RotatedEllipse => "rotatedellipse",
            Self::Polygon => "polygon",
        }
    }
}

impl fmt::Display for ShapeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ShapeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        if let Ok(code) = lower.parse::<i64>() {
            return Self::from_code(code)
                .ok_or_else(|| format!("unknown shape mode code {code}"));
        }
        Self::ALL
            .into_iter()
            .find(|mode| mode.name() == lower)
            .ok_or_else(|| format!("unknown shape mode '{s}'"))
    }
}

impl From<ShapeMode> for u8 {
    fn from(mode: ShapeMode) -> Self {
        mode.code()
    }
}

/// Wire form of a shape mode: its code or its name.
#[derive(Deserialize)]
#[serde(untagged)]
enum ModeValue {
    Code(i64),
    Name(String),
}

impl TryFrom<ModeValue> for ShapeMode {
    type Error = String;

    fn try_from(value: ModeValue) -> Result<Self, Self::Error> {
        match value {
            ModeValue::Code(code) => {
                Self::from_code(code).ok_or_else(|| format!("unknown shape mode code {code}"))
            }
            ModeValue::Name(name) => name.parse(),
        }
    }
}

/// Which field of the vectorizer result is published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArtifactKind {
    /// Full SVG markup
    #[serde(rename = "final_svg")]
    FinalSvg,
    /// Source image dimensions
    #[serde(rename = "img_dimensions")]
    ImageDimensions,
    /// Base64-encoded SVG
    #[serde(rename = "svg_base64encoded")]
    Base64Svg,
}

impl ArtifactKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FinalSvg => "final_svg",
            Self::ImageDimensions => "img_dimensions",
            Self::Base64Svg => "svg_base64encoded",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `includeSource` flag before resolution.
///
/// Only an explicit `false` disables passthrough. A missing key stays
/// distinguishable from an explicit value until the resolver collapses it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "serde_json::Value")]
pub enum IncludeSource {
    #[default]
    Unset,
    Disabled,
    Enabled,
}

impl IncludeSource {
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Collapse to the flag the publisher consumes.
    pub fn resolve(self) -> bool {
        !matches!(self, Self::Disabled)
    }
}

impl From<serde_json::Value> for IncludeSource {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Bool(false) => Self::Disabled,
            _ => Self::Enabled,
        }
    }
}

impl From<bool> for IncludeSource {
    fn from(flag: bool) -> Self {
        if flag {
            Self::Enabled
        } else {
            Self::Disabled
        }
    }
}

impl Serialize for IncludeSource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(self.resolve())
    }
}

/// A filename affix. Non-string values collapse to an empty affix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "serde_json::Value")]
pub struct Affix(pub String);

impl Affix {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<serde_json::Value> for Affix {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => Self(s),
            _ => Self::default(),
        }
    }
}

impl From<&str> for Affix {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Primitive count as supplied: a whole number, a float, or numeric text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrimitiveCount {
    Int(i64),
    Float(f64),
    Text(String),
}

impl PrimitiveCount {
    /// Integer value, read leniently: floats truncate and text is parsed from
    /// its leading digits. `None` when nothing numeric is present.
    pub fn to_count(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Float(f) if f.is_finite() => Some(f.trunc() as i64),
            Self::Float(_) => None,
            Self::Text(s) => leading_int(s),
        }
    }
}

impl From<i64> for PrimitiveCount {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

fn leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (sign, rest) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse::<i64>().ok().map(|n| sign * n)
}
