//! Opt-in escaping of values interpolated into snippets.
//!
//! Widget configs are written by the merchant who installs the snippet, so
//! the default is to interpolate values exactly as supplied. [`Escaping::Html`]
//! makes every value safe for the context it lands in instead.

use std::borrow::Cow;
use std::fmt::Write as _;

/// How interpolated values are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Escaping {
    /// Interpolate values exactly as supplied.
    #[default]
    Verbatim,
    /// Escape each value for its output context.
    Html,
}

impl Escaping {
    /// Map the `TRUSTLOOP_ESCAPE_VALUES` flag onto a mode.
    #[must_use]
    pub const fn from_flag(escape: bool) -> Self {
        if escape { Self::Html } else { Self::Verbatim }
    }

    /// Value placed inside a double-quoted HTML attribute.
    #[must_use]
    pub fn attr(self, value: &str) -> Cow<'_, str> {
        match self {
            Self::Verbatim => Cow::Borrowed(value),
            Self::Html => escape_html(value),
        }
    }

    /// Value placed inside a quoted JavaScript string literal.
    #[must_use]
    pub fn js(self, value: &str) -> Cow<'_, str> {
        match self {
            Self::Verbatim => Cow::Borrowed(value),
            Self::Html => escape_js(value),
        }
    }

    /// Customization key used as an attribute or property name.
    ///
    /// Only ASCII alphanumerics, `-` and `_` survive in `Html` mode.
    #[must_use]
    pub fn name(self, key: &str) -> Cow<'_, str> {
        let allowed = |c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_';
        match self {
            Self::Html if !key.chars().all(allowed) => {
                Cow::Owned(key.chars().filter(|&c| allowed(c)).collect())
            }
            _ => Cow::Borrowed(key),
        }
    }

    /// Value placed in a CSS declaration.
    ///
    /// `Html` mode drops characters that could close the declaration or
    /// the enclosing rule.
    #[must_use]
    pub fn css(self, value: &str) -> Cow<'_, str> {
        const BREAKOUT: [char; 9] = ['{', '}', ';', '<', '>', '"', '\'', '\\', '\n'];
        match self {
            Self::Html if value.contains(BREAKOUT) || value.contains('\r') => Cow::Owned(
                value
                    .chars()
                    .filter(|c| !BREAKOUT.contains(c) && *c != '\r')
                    .collect(),
            ),
            _ => Cow::Borrowed(value),
        }
    }
}

fn escape_html(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'', '\n', '\r']) {
        return Cow::Borrowed(value);
    }

    let mut out = String::with_capacity(value.len() + 16);
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

fn escape_js(value: &str) -> Cow<'_, str> {
    let needs_escape = |c: char| {
        matches!(c, '\\' | '\'' | '"' | '<' | '>' | '&' | '\u{2028}' | '\u{2029}') || c.is_control()
    };
    if !value.chars().any(needs_escape) {
        return Cow::Borrowed(value);
    }

    let mut out = String::with_capacity(value.len() + 16);
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            // `</script>` and HTML entities inside inline scripts
            '<' | '>' | '&' | '\u{2028}' | '\u{2029}' => {
                let _ = write!(out, "\\u{:04x}", u32::from(c));
            }
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", u32::from(c));
            }
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}
