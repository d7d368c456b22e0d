//! Typed value encoding: raw attribute text to C literal text.
//!
//! Enumerated types (colors, dock positions, orientations) match
//! case-sensitively against fixed tables; unmatched input encodes the
//! documented fallback and carries a non-fatal note instead of failing
//! the run.

use nkgen_schema::ValueType;

/// The fixed named-color table. Anything else falls back to transparent.
pub const COLOR_NAMES: &[&str] = &[
    "Black",
    "White",
    "Red",
    "Green",
    "Blue",
    "Yellow",
    "Cyan",
    "Orange",
    "Magenta",
    "Gray",
    "LightGray",
    "DarkGray",
];

const COLOR_FALLBACK: &str = "nkColor_Transparent";
const DOCK_FALLBACK: &str = "NK_DOCK_LEFT";
const ORIENTATION_FALLBACK: &str = "NK_ORIENTATION_HORIZONTAL";

/// An encoded literal, optionally carrying a fallback note when the
/// raw text did not match and a default was substituted.
#[derive(Debug, Clone)]
pub struct Encoded {
    pub literal: String,
    pub fallback: Option<String>,
}

impl Encoded {
    fn ok(literal: impl Into<String>) -> Self {
        Self {
            literal: literal.into(),
            fallback: None,
        }
    }

    fn substituted(literal: impl Into<String>, note: String) -> Self {
        Self {
            literal: literal.into(),
            fallback: Some(note),
        }
    }
}

/// Look up a color name in the fixed table (case-sensitive).
pub fn color_constant(name: &str) -> Option<String> {
    COLOR_NAMES
        .contains(&name)
        .then(|| format!("nkColor_{}", name))
}

/// Look up a dock position: Left (default), Right, Top, Bottom.
pub fn dock_constant(name: &str) -> Option<&'static str> {
    match name {
        "Left" => Some("NK_DOCK_LEFT"),
        "Right" => Some("NK_DOCK_RIGHT"),
        "Top" => Some("NK_DOCK_TOP"),
        "Bottom" => Some("NK_DOCK_BOTTOM"),
        _ => None,
    }
}

/// Look up a stack orientation: Horizontal (default), Vertical.
pub fn orientation_constant(name: &str) -> Option<&'static str> {
    match name {
        "Horizontal" => Some("NK_ORIENTATION_HORIZONTAL"),
        "Vertical" => Some("NK_ORIENTATION_VERTICAL"),
        _ => None,
    }
}

/// Encode raw attribute text as a C literal for the given value type.
pub fn encode_value(value_type: ValueType, raw: &str) -> Encoded {
    match value_type {
        ValueType::String => Encoded::ok(c_string(raw)),
        ValueType::Float => match float_literal(raw) {
            Some(lit) => Encoded::ok(lit),
            None => Encoded::substituted(
                "0.0f",
                format!("\"{}\" is not a number, substituting 0.0f", raw),
            ),
        },
        ValueType::Thickness => {
            let (edge, fallback) = match float_literal(raw) {
                Some(lit) => (lit, None),
                None => (
                    "0.0f".to_string(),
                    Some(format!(
                        "\"{}\" is not a thickness value, substituting 0.0f",
                        raw
                    )),
                ),
            };
            Encoded {
                literal: format!(
                    "(nkThickness_t){{ .left = {edge}, .top = {edge}, .right = {edge}, .bottom = {edge} }}"
                ),
                fallback,
            }
        }
        ValueType::Color => match color_constant(raw) {
            Some(constant) => Encoded::ok(constant),
            None => Encoded::substituted(
                COLOR_FALLBACK,
                format!("unrecognized Color \"{}\", substituting {}", raw, COLOR_FALLBACK),
            ),
        },
        ValueType::Boolean => Encoded::ok(raw),
        ValueType::DockPosition => match dock_constant(raw) {
            Some(constant) => Encoded::ok(constant),
            None => Encoded::substituted(
                DOCK_FALLBACK,
                format!(
                    "unrecognized DockPosition \"{}\", substituting {}",
                    raw, DOCK_FALLBACK
                ),
            ),
        },
        ValueType::StackOrientation => match orientation_constant(raw) {
            Some(constant) => Encoded::ok(constant),
            None => Encoded::substituted(
                ORIENTATION_FALLBACK,
                format!(
                    "unrecognized StackOrientation \"{}\", substituting {}",
                    raw, ORIENTATION_FALLBACK
                ),
            ),
        },
        // Callback values are symbol references, not literals.
        ValueType::GenericCallback | ValueType::ButtonCallback => Encoded::ok(raw),
    }
}

/// Quote and escape text as a C string literal.
fn c_string(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 2);
    out.push('"');
    for c in raw.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Format raw text as a C float literal, e.g. "320" -> "320.0f".
fn float_literal(raw: &str) -> Option<String> {
    let value: f64 = raw.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    if value.fract() == 0.0 {
        Some(format!("{:.1}f", value))
    } else {
        Some(format!("{}f", value))
    }
}
