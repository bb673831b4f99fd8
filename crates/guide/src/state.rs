//! Application state shared across handlers.

use std::path::Path;
use std::sync::Arc;

use trustloop_core::{CatalogError, WidgetCatalog};
use trustloop_embed::WidgetCodeGenerator;

use crate::config::GuideConfig;

/// Error loading the widget catalog at startup.
#[derive(Debug, thiserror::Error)]
pub enum CatalogLoadError {
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse catalog {path}: {source}")]
    Parse { path: String, source: CatalogError },
}

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The catalog is loaded once
/// at startup and never mutated.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: GuideConfig,
    generator: WidgetCodeGenerator,
    catalog: WidgetCatalog,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: GuideConfig, catalog: WidgetCatalog) -> Self {
        let generator = WidgetCodeGenerator::new(config.embed.clone());

        Self {
            inner: Arc::new(AppStateInner {
                config,
                generator,
                catalog,
            }),
        }
    }

    /// Get a reference to the guide configuration.
    #[must_use]
    pub fn config(&self) -> &GuideConfig {
        &self.inner.config
    }

    /// Get a reference to the snippet generator.
    #[must_use]
    pub fn generator(&self) -> &WidgetCodeGenerator {
        &self.inner.generator
    }

    /// Get a reference to the widget catalog.
    #[must_use]
    pub fn catalog(&self) -> &WidgetCatalog {
        &self.inner.catalog
    }
}

/// Read and parse the catalog file.
///
/// # Errors
///
/// Returns `CatalogLoadError` if the file cannot be read or parsed.
pub async fn load_catalog(path: &Path) -> Result<WidgetCatalog, CatalogLoadError> {
    let display = path.display().to_string();
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CatalogLoadError::Read {
            path: display.clone(),
            source,
        })?;

    let catalog = WidgetCatalog::from_yaml_str(&text)
        .map_err(|source| CatalogLoadError::Parse {
            path: display,
            source,
        })?;

    tracing::info!(
        shop = %catalog.shop_domain,
        widgets = catalog.len(),
        "Widget catalog loaded"
    );
    Ok(catalog)
}
