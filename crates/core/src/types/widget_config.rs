//! Input contract of the snippet generator.

use serde::{Deserialize, Serialize};

use super::{Customization, PopupTrigger, WidgetId, WidgetKind, WidgetType};

/// Everything the generator needs to produce a snippet for one widget.
///
/// Built fresh from a stored [`crate::Widget`] each time a snippet is
/// requested; never persisted. Values are trusted and interpolated into the
/// output as-is unless the generator is configured to escape them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetConfig {
    pub id: WidgetId,
    #[serde(rename = "type")]
    pub kind: WidgetKind,
    /// Embedded verbatim so the runtime knows which tenant to load.
    pub shop_domain: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customization: Option<Customization>,
    /// Only read for popup widgets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<PopupTrigger>,
}

impl WidgetConfig {
    /// Create a config with no customization.
    #[must_use]
    pub fn new(
        id: impl Into<WidgetId>,
        kind: impl Into<WidgetKind>,
        shop_domain: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            shop_domain: shop_domain.into(),
            customization: None,
            trigger: None,
        }
    }

    /// Attach a customization set.
    #[must_use]
    pub fn with_customization(mut self, customization: Customization) -> Self {
        self.customization = Some(customization);
        self
    }

    /// Attach a popup trigger.
    #[must_use]
    pub fn with_trigger(mut self, trigger: PopupTrigger) -> Self {
        self.trigger = Some(trigger);
        self
    }

    /// The recognised widget type, if the config's tag is one.
    #[must_use]
    pub const fn widget_type(&self) -> Option<WidgetType> {
        self.kind.widget_type()
    }
}
