//! Output formats and generated artifacts.

use serde::{Deserialize, Serialize};
use trustloop_core::WidgetType;

/// Snippet flavours a merchant can install.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbedFormat {
    /// Theme template for the host storefront.
    #[default]
    Liquid,
    /// Self-contained HTML with an inline bootstrap script.
    Html,
    /// React function component.
    React,
}

impl EmbedFormat {
    /// All formats, in install-guide tab order.
    pub const ALL: [Self; 3] = [Self::Liquid, Self::Html, Self::React];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Liquid => "liquid",
            Self::Html => "html",
            Self::React => "react",
        }
    }

    /// Tab label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Liquid => "Liquid Template",
            Self::Html => "HTML/JavaScript",
            Self::React => "React Component",
        }
    }

    /// Extension used when a snippet is written to disk.
    #[must_use]
    pub const fn file_extension(self) -> &'static str {
        match self {
            Self::Liquid => "liquid",
            Self::Html => "html",
            Self::React => "jsx",
        }
    }
}

impl std::fmt::Display for EmbedFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EmbedFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "liquid" => Ok(Self::Liquid),
            "html" => Ok(Self::Html),
            "react" | "jsx" => Ok(Self::React),
            _ => Err(format!("invalid embed format: {s} (expected liquid, html or react)")),
        }
    }
}

/// Result of the templated-embed generator.
///
/// Unrecognised widget types still produce a usable snippet (the generic
/// embed), but callers can tell that it is not the variant they asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplatedEmbed {
    /// The type-specific template was rendered.
    Variant {
        widget_type: WidgetType,
        snippet: String,
    },
    /// The type tag was not recognised; `snippet` is the generic embed.
    Fallback { requested: String, snippet: String },
}

impl TemplatedEmbed {
    #[must_use]
    pub fn snippet(&self) -> &str {
        match self {
            Self::Variant { snippet, .. } | Self::Fallback { snippet, .. } => snippet,
        }
    }

    #[must_use]
    pub fn into_snippet(self) -> String {
        match self {
            Self::Variant { snippet, .. } | Self::Fallback { snippet, .. } => snippet,
        }
    }

    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// Everything a merchant needs to install one widget in one format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedArtifact {
    pub format: EmbedFormat,
    pub snippet: String,
    pub instructions: Vec<String>,
    pub stylesheet: String,
    /// Set when a Liquid snippet was requested for an unrecognised type and
    /// the generic embed was returned instead.
    #[serde(default)]
    pub fallback_used: bool,
}
