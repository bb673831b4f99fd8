//! Persisted widget records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Customization, PopupTrigger, WidgetConfig, WidgetId, WidgetKind};

/// A stored widget as the storage layer hands it out.
///
/// `views` and `clicks` are lifetime counters maintained by the runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Widget {
    pub id: WidgetId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: WidgetKind,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub configuration: Customization,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<PopupTrigger>,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub clicks: u64,
    /// Free-form placement label; defaults to the type's usual placement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

const fn default_active() -> bool {
    true
}

impl Widget {
    /// Build the ephemeral generator input for this widget.
    ///
    /// An empty configuration is passed as no customization at all.
    #[must_use]
    pub fn to_config(&self, shop_domain: &str) -> WidgetConfig {
        WidgetConfig {
            id: self.id.clone(),
            kind: self.kind.clone(),
            shop_domain: shop_domain.to_owned(),
            customization: (!self.configuration.is_empty()).then(|| self.configuration.clone()),
            trigger: self.trigger,
        }
    }

    /// Placement label, falling back to the widget type's default.
    #[must_use]
    pub fn placement_label(&self) -> &str {
        match (&self.placement, self.kind.widget_type()) {
            (Some(p), _) => p,
            (None, Some(t)) => t.default_placement(),
            (None, None) => "Custom",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::WidgetType;

    fn sample() -> Widget {
        serde_json::from_str(
            r##"{
                "id": "wdg_1",
                "name": "Homepage Carousel",
                "type": "carousel",
                "isActive": true,
                "configuration": {"primaryColor": "#005BD3", "maxReviews": 10},
                "views": 15420,
                "clicks": 890,
                "createdAt": "2024-01-15T10:00:00Z"
            }"##,
        )
        .unwrap()
    }

    #[test]
    fn test_deserialize_record() {
        let widget = sample();
        assert_eq!(widget.kind.widget_type(), Some(WidgetType::Carousel));
        assert_eq!(widget.views, 15420);
        assert!(widget.created_at.is_some());
        assert!(widget.updated_at.is_none());
    }

    #[test]
    fn test_to_config() {
        let config = sample().to_config("acme.myshopify.com");
        assert_eq!(config.id.as_str(), "wdg_1");
        assert_eq!(config.shop_domain, "acme.myshopify.com");
        assert!(config.customization.is_some());
    }

    #[test]
    fn test_to_config_empty_configuration() {
        let mut widget = sample();
        widget.configuration = Customization::default();
        assert!(widget.to_config("acme.myshopify.com").customization.is_none());
    }

    #[test]
    fn test_defaults() {
        let widget: Widget =
            serde_json::from_str(r#"{"id": 3, "name": "Bubble", "type": "floating"}"#).unwrap();
        assert!(widget.is_active);
        assert_eq!(widget.views, 0);
        assert_eq!(widget.placement_label(), "All Pages");
    }

    #[test]
    fn test_placement_label_unknown_type() {
        let widget: Widget =
            serde_json::from_str(r#"{"id": 3, "name": "Banner", "type": "banner"}"#).unwrap();
        assert_eq!(widget.placement_label(), "Custom");
    }
}
