//! Widget style and behaviour overrides.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A primitive customization value.
///
/// Nested objects and arrays are rejected at deserialization time; the
/// customization set is flat by contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CustomValue {
    Flag(bool),
    Number(f64),
    Text(String),
}

impl CustomValue {
    /// Numeric value under JavaScript's `Number(value)` coercion.
    ///
    /// Text that is not a numeric literal yields NaN.
    #[must_use]
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Flag(b) => f64::from(u8::from(*b)),
            Self::Number(n) => *n,
            Self::Text(s) => parse_js_number(s),
        }
    }

    /// `value + n` the way a template literal sees it: text concatenates,
    /// everything else adds.
    #[must_use]
    pub fn js_add(&self, n: f64) -> String {
        match self {
            Self::Text(s) => format!("{s}{}", JsNumber(n)),
            other => JsNumber(other.to_number() + n).to_string(),
        }
    }

    /// `value - n`, always numeric.
    #[must_use]
    pub fn js_sub(&self, n: f64) -> String {
        JsNumber(self.to_number() - n).to_string()
    }
}

#[allow(clippy::cast_precision_loss)]
fn parse_js_number(s: &str) -> f64 {
    let s = s.trim();
    if s.is_empty() {
        return 0.0;
    }

    let (negative, unsigned) = match s.as_bytes().first() {
        Some(b'-') => (true, s.get(1..).unwrap_or_default()),
        Some(b'+') => (false, s.get(1..).unwrap_or_default()),
        _ => (false, s),
    };

    if unsigned == "Infinity" {
        return if negative { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    // Radix prefixes are only valid unsigned
    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = s.strip_prefix(prefix) {
            return u64::from_str_radix(digits, radix).map_or(f64::NAN, |v| v as f64);
        }
    }

    // Rust also accepts "inf" and "nan"; JS does not
    if unsigned
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'))
    {
        s.parse().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

impl fmt::Display for CustomValue {
    /// Stringifies the way a browser would when the value lands in an
    /// attribute: `true`, `8`, `1.5`, `#005BD3`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{}", JsNumber(*n)),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for CustomValue {
    fn from(b: bool) -> Self {
        Self::Flag(b)
    }
}

impl From<f64> for CustomValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for CustomValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for CustomValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Formats an `f64` like JavaScript's `Number.prototype.toString()`.
///
/// Digits are the shortest round-trip representation; magnitudes of `1e21`
/// and above or below `1e-6` switch to exponent form (`1e+21`, `1.5e-7`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsNumber(pub f64);

impl fmt::Display for JsNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.0;
        if n.is_nan() {
            return f.write_str("NaN");
        }
        if n.is_infinite() {
            return f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" });
        }
        if n == 0.0 {
            // -0 prints as "0" in JS
            return f.write_str("0");
        }

        let magnitude = n.abs();
        if (1e-6..1e21).contains(&magnitude) {
            return write!(f, "{n}");
        }

        let exponent = format!("{n:e}");
        match exponent.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => write!(f, "{mantissa}e+{exp}"),
            _ => f.write_str(&exponent),
        }
    }
}

/// Flat mapping of style/behaviour keys to primitive values.
///
/// Keys keep the order they were supplied in, which is the order their
/// `data-*` attributes and component props are emitted. Values are not
/// checked against the key: `borderRadius: "12"` is as valid as
/// `borderRadius: 12`. Absent keys fall back to generator defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Customization {
    entries: Vec<(String, CustomValue)>,
}

impl Customization {
    pub const PRIMARY_COLOR: &'static str = "primaryColor";
    pub const BACKGROUND_COLOR: &'static str = "backgroundColor";
    pub const TEXT_COLOR: &'static str = "textColor";
    /// Pixels.
    pub const BORDER_RADIUS: &'static str = "borderRadius";
    /// Pixels.
    pub const FONT_SIZE: &'static str = "fontSize";
    pub const SHOW_PHOTOS: &'static str = "showPhotos";
    pub const SHOW_DATES: &'static str = "showDates";
    pub const SHOW_RATINGS: &'static str = "showRatings";
    pub const AUTO_ROTATE: &'static str = "autoRotate";
    /// Seconds per slide.
    pub const ROTATION_SPEED: &'static str = "rotationSpeed";

    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Set a key. An existing key keeps its position and takes the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<CustomValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder form of [`Customization::insert`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<CustomValue>) -> Self {
        self.insert(key, value);
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&CustomValue> {
        self.entries
            .iter()
            .find_map(|(k, v)| (k == key).then_some(v))
    }

    /// Every supplied key with its value, in supplied order.
    #[must_use]
    pub fn entries(&self) -> &[(String, CustomValue)] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no key at all was supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<CustomValue>> FromIterator<(K, V)> for Customization {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut customization = Self::new();
        for (key, value) in iter {
            customization.insert(key, value);
        }
        customization
    }
}

impl Serialize for Customization {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Customization {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CustomizationVisitor;

        impl<'de> Visitor<'de> for CustomizationVisitor {
            type Value = Customization;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a flat map of customization keys to primitive values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut customization = Customization::new();
                while let Some((key, value)) = access.next_entry::<String, CustomValue>()? {
                    customization.insert(key, value);
                }
                Ok(customization)
            }
        }

        deserializer.deserialize_map(CustomizationVisitor)
    }
}
