//! Widget identifiers.
//!
//! Stored widget records use string IDs while older exports and hand-written
//! configs often use integers, so [`WidgetId`] accepts either on the wire and
//! always renders as plain text.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::JsNumber;

/// Opaque widget identifier.
///
/// The ID namespaces DOM elements (`trustloop-widget-{id}`) and runtime
/// registrations (`TrustLoop.init('{id}')`) in generated snippets, so it must
/// be unique per embed on a page. Uniqueness is the caller's responsibility.
///
/// # Example
///
/// ```rust
/// # use trustloop_core::WidgetId;
/// let from_text: WidgetId = serde_json::from_str("\"w42\"").unwrap();
/// let from_number: WidgetId = serde_json::from_str("42").unwrap();
///
/// assert_eq!(from_text.as_str(), "w42");
/// assert_eq!(from_number.to_string(), "42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawWidgetId")]
#[serde(into = "String")]
pub struct WidgetId(String);

/// Wire representation accepted when deserializing a [`WidgetId`].
#[derive(Deserialize)]
#[serde(untagged)]
enum RawWidgetId {
    Signed(i64),
    Unsigned(u64),
    Float(f64),
    Text(String),
}

impl From<RawWidgetId> for WidgetId {
    fn from(raw: RawWidgetId) -> Self {
        match raw {
            RawWidgetId::Signed(n) => Self(n.to_string()),
            RawWidgetId::Unsigned(n) => Self(n.to_string()),
            // Non-integers and integers past u64 render as a browser would print them
            RawWidgetId::Float(n) => Self(JsNumber(n).to_string()),
            RawWidgetId::Text(s) => Self(s),
        }
    }
}

impl WidgetId {
    /// Create a new ID from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WidgetId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for WidgetId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<i64> for WidgetId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl From<WidgetId> for String {
    fn from(id: WidgetId) -> Self {
        id.0
    }
}

impl AsRef<str> for WidgetId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_string() {
        let id: WidgetId = serde_json::from_str("\"widget-1\"").unwrap();
        assert_eq!(id, WidgetId::from("widget-1"));
    }

    #[test]
    fn test_deserialize_integer() {
        let id: WidgetId = serde_json::from_str("9").unwrap();
        assert_eq!(id.as_str(), "9");
        assert_eq!(id, WidgetId::from(9_i64));
    }

    #[test]
    fn test_deserialize_wide_and_fractional_numbers() {
        let id: WidgetId = serde_json::from_str("18446744073709551615").unwrap();
        assert_eq!(id.as_str(), "18446744073709551615");

        let id: WidgetId = serde_json::from_str("1.5").unwrap();
        assert_eq!(id.as_str(), "1.5");

        let id: WidgetId = serde_json::from_str("3.0").unwrap();
        assert_eq!(id.as_str(), "3");

        let id: WidgetId = serde_json::from_str("1e21").unwrap();
        assert_eq!(id.as_str(), "1e+21");
    }

    #[test]
    fn test_deserialize_yaml_numbers() {
        let ids: Vec<WidgetId> = serde_yaml::from_str("[7, 2.5, -3]").unwrap();
        let ids: Vec<&str> = ids.iter().map(WidgetId::as_str).collect();
        assert_eq!(ids, ["7", "2.5", "-3"]);
    }

    #[test]
    fn test_serializes_as_string() {
        let json = serde_json::to_string(&WidgetId::from(7_i64)).unwrap();
        assert_eq!(json, "\"7\"");
    }

    #[test]
    fn test_display_is_verbatim() {
        assert_eq!(WidgetId::new("a b").to_string(), "a b");
    }
}
