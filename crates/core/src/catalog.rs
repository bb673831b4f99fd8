//! File-backed widget catalog.
//!
//! A catalog is one tenant's shop domain plus its widget records, written as
//! YAML or JSON. It stands in for the hosted storage layer wherever widgets
//! need to be listed or looked up by ID.
//!
//! ```yaml
//! shopDomain: acme.myshopify.com
//! widgets:
//!   - id: w42
//!     name: Exit Popup
//!     type: popup
//!     configuration:
//!       primaryColor: "#ff0000"
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::types::{ShopDomain, WidgetId};
use crate::widget::Widget;

/// Errors that can occur when loading a [`WidgetCatalog`].
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The document is not valid YAML/JSON or does not match the schema.
    #[error("invalid catalog document: {0}")]
    Parse(#[from] serde_yaml::Error),
    /// Two widgets share an ID; snippets for both would collide on the page.
    #[error("duplicate widget id: {0}")]
    DuplicateId(WidgetId),
}

/// A tenant's widgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetCatalog {
    pub shop_domain: ShopDomain,
    #[serde(default)]
    pub widgets: Vec<Widget>,
}

impl WidgetCatalog {
    /// Parse a catalog from YAML (or JSON, which YAML accepts).
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] for malformed documents or an invalid
    /// shop domain, and [`CatalogError::DuplicateId`] if two widgets share an ID.
    pub fn from_yaml_str(s: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_yaml::from_str(s)?;
        catalog.check_unique_ids()?;
        Ok(catalog)
    }

    fn check_unique_ids(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::with_capacity(self.widgets.len());
        for widget in &self.widgets {
            if !seen.insert(&widget.id) {
                return Err(CatalogError::DuplicateId(widget.id.clone()));
            }
        }
        Ok(())
    }

    /// Look up a widget by ID.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.id.as_str() == id)
    }

    /// Number of widgets in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Whether the catalog has no widgets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}
