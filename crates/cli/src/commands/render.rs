//! Single-widget rendering commands.
//!
//! # Usage
//!
//! ```bash
//! trustloop render widget.yaml --format html
//! trustloop stylesheet widget.yaml
//! trustloop steps collection
//! ```
//!
//! A widget config file holds one generator input:
//!
//! ```yaml
//! id: w42
//! type: popup
//! shopDomain: acme.myshopify.com
//! customization:
//!   primaryColor: "#ff0000"
//! trigger: { type: time, value: 5000 }
//! ```

use std::fmt::Write;
use std::path::Path;

use trustloop_core::{WidgetConfig, WidgetKind};
use trustloop_embed::{EmbedFormat, WidgetCodeGenerator, installation_steps};

/// Read a widget config file. JSON is accepted as YAML.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub async fn read_config(path: &Path) -> Result<WidgetConfig, Box<dyn std::error::Error>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let config: WidgetConfig = serde_yaml::from_str(&content)?;

    tracing::debug!(widget_id = %config.id, widget_type = %config.kind, "Loaded widget config");
    Ok(config)
}

/// Render one snippet.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded or rendering fails.
pub async fn snippet(
    generator: &WidgetCodeGenerator,
    config_path: &Path,
    format: EmbedFormat,
) -> Result<String, Box<dyn std::error::Error>> {
    let config = read_config(config_path).await?;
    let artifact = generator.generate_artifact(&config, format)?;

    if artifact.fallback_used {
        tracing::warn!(
            widget_type = %config.kind,
            "No Liquid template for this widget type, rendered the generic embed"
        );
    }
    Ok(artifact.snippet)
}

/// Render the stylesheet for a config, or the defaults when none is given.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded or rendering fails.
pub async fn stylesheet(
    generator: &WidgetCodeGenerator,
    config_path: Option<&Path>,
) -> Result<String, Box<dyn std::error::Error>> {
    let config = match config_path {
        Some(path) => Some(read_config(path).await?),
        None => None,
    };
    let customization = config.as_ref().and_then(|c| c.customization.as_ref());

    Ok(generator.generate_stylesheet(customization)?)
}

/// Numbered install steps for a type tag.
#[must_use]
pub fn steps(widget_type: &str) -> String {
    let kind = WidgetKind::from(widget_type);
    let mut out = String::new();

    for (i, step) in installation_steps(&kind).iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = write!(out, "{}. {step}", i + 1);
    }
    out
}
