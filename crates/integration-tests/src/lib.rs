//! Integration tests for TrustLoop.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p trustloop-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `golden` - Generated snippets compared byte-for-byte with `tests/golden/`
//! - `catalog_guide` - Catalog file through the guide service router
//!
//! Golden files have no trailing newline; regenerate them from the
//! generator's output rather than editing by hand.

use trustloop_core::{Customization, WidgetConfig, WidgetId, WidgetKind};

/// Shop used by the shared catalog fixture.
pub const SHOP: &str = "demo.myshopify.com";

/// Catalog fixture covering every widget type plus an unrecognised one.
pub const SAMPLE_CATALOG: &str = r##"shopDomain: demo.myshopify.com
widgets:
  - id: c1
    name: Homepage carousel
    type: carousel
    views: 2400
    clicks: 264
  - id: p7
    name: Product reviews
    type: product
    configuration:
      primaryColor: "#123456"
      showPhotos: true
      rotationSpeed: 5
    views: 900
    clicks: 9
  - id: col3
    name: Collection stars
    type: collection
    configuration:
      showRatings: true
  - id: 9
    name: Floating tab
    type: floating
    isActive: false
  - id: ty1
    name: Thank you
    type: thankyou
    configuration:
      backgroundColor: "#fafafa"
      borderRadius: 12
  - id: w42
    name: Exit popup
    type: popup
    trigger: { type: exit, value: 0 }
  - id: b1
    name: Announcement bar
    type: banner
    placement: Header
"##;

/// Build a generator input.
///
/// # Panics
///
/// Panics if `customization` is not a valid customization object.
#[must_use]
pub fn widget_config(
    id: impl Into<WidgetId>,
    kind: impl Into<WidgetKind>,
    shop_domain: &str,
    customization: Option<serde_json::Value>,
) -> WidgetConfig {
    let config = WidgetConfig::new(id, kind, shop_domain);
    match customization {
        Some(value) => {
            let customization: Customization =
                serde_json::from_value(value).expect("valid customization");
            config.with_customization(customization)
        }
        None => config,
    }
}
