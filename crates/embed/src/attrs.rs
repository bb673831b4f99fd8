//! Customization rendering: `data-*` attributes and component props.

use trustloop_core::{CustomValue, Customization};

use crate::escaping::Escaping;

/// Separator between attributes, aligning each under the container's first
/// attribute.
const ATTR_SEPARATOR: &str = "\n     ";

/// Convert a camelCase key to its kebab-case attribute suffix.
///
/// Every ASCII uppercase letter gets a leading `-`, then the whole key is
/// lowercased: `primaryColor` → `primary-color`, `customCSS` → `custom-c-s-s`.
#[must_use]
pub fn kebab_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

/// One `data-<kebab-key>="<value>"` attribute per supplied customization key.
///
/// Empty when there is no customization.
#[must_use]
pub fn data_attributes(customization: Option<&Customization>, escaping: Escaping) -> String {
    let Some(customization) = customization else {
        return String::new();
    };

    customization
        .entries()
        .iter()
        .map(|(key, value)| {
            format!(
                "data-{}=\"{}\"",
                kebab_case(&escaping.name(key)),
                escaping.attr(&value.to_string())
            )
        })
        .collect::<Vec<_>>()
        .join(ATTR_SEPARATOR)
}

/// One JSX prop line per supplied customization key.
///
/// Strings become `key={"value"}`; numbers and flags are emitted bare.
#[must_use]
pub fn component_props(customization: Option<&Customization>, escaping: Escaping) -> String {
    let Some(customization) = customization else {
        return String::new();
    };

    customization
        .entries()
        .iter()
        .map(|(key, value)| {
            let key = escaping.name(key);
            match value {
                CustomValue::Text(s) => format!("  {key}={{\"{}\"}}", escaping.js(s)),
                other => format!("  {key}={{{other}}}"),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
