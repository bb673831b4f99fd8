//! Installation steps and theme placement guidance.

use serde::Serialize;
use trustloop_core::{WidgetKind, WidgetType};

/// Steps shown when the widget type is not recognised.
pub const GENERIC_STEPS: &[&str] = &[
    "Log in to your Shopify admin panel",
    "Navigate to Online Store → Themes",
    "Click 'Actions' → 'Edit code' for your active theme",
    "Find the appropriate template file",
    "Add the TrustLoop widget code",
    "Save the file and test the widget",
];

const CAROUSEL_STEPS: &[&str] = &[
    "Log in to your Shopify admin panel",
    "Navigate to Online Store → Themes",
    "Click 'Actions' → 'Edit code' for your active theme",
    "Find and open the 'index.liquid' file (Homepage template)",
    "Add the carousel widget code where you want reviews to appear (usually after the hero section)",
    "Save the file and visit your homepage to test",
    "Customize the widget position and styling as needed",
];

const PRODUCT_STEPS: &[&str] = &[
    "Log in to your Shopify admin panel",
    "Navigate to Online Store → Themes",
    "Click 'Actions' → 'Edit code' for your active theme",
    "Find and open the 'product.liquid' file (Product template)",
    "Add the product reviews widget code below the product description or in a new tab",
    "Save the file and visit any product page to test",
    "Ensure the widget appears correctly on all product pages",
];

const COLLECTION_STEPS: &[&str] = &[
    "Log in to your Shopify admin panel",
    "Navigate to Online Store → Themes",
    "Click 'Actions' → 'Edit code' for your active theme",
    "Find and open the 'collection.liquid' file (Collection template)",
    "Add the rating snippet code within the product loop (inside the {% for product in collection.products %} loop)",
    "Save the file and visit your collection pages to test",
    "Verify that rating snippets appear for each product",
];

const FLOATING_STEPS: &[&str] = &[
    "Log in to your Shopify admin panel",
    "Navigate to Online Store → Themes",
    "Click 'Actions' → 'Edit code' for your active theme",
    "Find and open the 'theme.liquid' file (Main layout template)",
    "Add the floating widget code just before the closing </body> tag",
    "Save the file and visit any page to test",
    "The floating widget should appear on all pages",
];

const THANK_YOU_STEPS: &[&str] = &[
    "Log in to your Shopify admin panel",
    "Navigate to Online Store → Themes",
    "Click 'Actions' → 'Edit code' for your active theme",
    "Find and open the 'checkout/thank_you.liquid' file (Thank you page template)",
    "Add the thank you widget code at the bottom of the page content",
    "Save the file and make a test purchase to verify",
    "The widget should appear after completing a purchase",
];

const POPUP_STEPS: &[&str] = &[
    "Log in to your Shopify admin panel",
    "Navigate to Online Store → Themes",
    "Click 'Actions' → 'Edit code' for your active theme",
    "Find and open the 'theme.liquid' file (Main layout template)",
    "Add the popup widget code just before the closing </body> tag",
    "Save the file and visit any page to test",
    "Configure the popup trigger settings (scroll, time, or exit intent)",
];

/// Ordered install steps for a widget type.
#[must_use]
pub const fn steps_for(widget_type: WidgetType) -> &'static [&'static str] {
    match widget_type {
        WidgetType::Carousel => CAROUSEL_STEPS,
        WidgetType::Product => PRODUCT_STEPS,
        WidgetType::Collection => COLLECTION_STEPS,
        WidgetType::Floating => FLOATING_STEPS,
        WidgetType::ThankYou => THANK_YOU_STEPS,
        WidgetType::Popup => POPUP_STEPS,
    }
}

/// Ordered install steps for whatever type tag a config carries.
///
/// Unrecognised tags get [`GENERIC_STEPS`].
#[must_use]
pub const fn installation_steps(kind: &WidgetKind) -> &'static [&'static str] {
    match kind.widget_type() {
        Some(widget_type) => steps_for(widget_type),
        None => GENERIC_STEPS,
    }
}

/// Where in the theme a snippet goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement {
    /// Theme file(s) to edit.
    pub file: &'static str,
    /// Insertion point within the file.
    pub location: &'static str,
    #[serde(skip)]
    markers: Option<Markers>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Markers {
    begin: &'static str,
    end: &'static str,
    /// Empty mount point some themes expect ahead of the snippet.
    anchor: Option<&'static str>,
}

impl Placement {
    const LAYOUT: Self = Self {
        file: "layout/theme.liquid",
        location: "Before the closing </body> tag",
        markers: None,
    };

    /// Placement for a widget type.
    #[must_use]
    pub const fn of(widget_type: WidgetType) -> Self {
        let (file, location, begin, end, anchor) = match widget_type {
            WidgetType::Carousel => (
                "sections/index.liquid or templates/index.liquid",
                "After the hero section or before the footer",
                "TrustLoop Homepage Carousel",
                "End TrustLoop Carousel",
                Some("trustloop-carousel"),
            ),
            WidgetType::Product => (
                "sections/product-form.liquid or templates/product.liquid",
                "After the product description or in the product tabs",
                "TrustLoop Product Reviews",
                "End TrustLoop Product Reviews",
                Some("trustloop-product-reviews"),
            ),
            WidgetType::Collection => (
                "sections/collection-template.liquid or templates/collection.liquid",
                "In the product grid loop or after product cards",
                "TrustLoop Collection Ratings",
                "End TrustLoop Collection Ratings",
                Some("trustloop-collection-ratings"),
            ),
            WidgetType::Floating => (
                Self::LAYOUT.file,
                Self::LAYOUT.location,
                "TrustLoop Floating Widget",
                "End TrustLoop Floating Widget",
                None,
            ),
            WidgetType::Popup => (
                Self::LAYOUT.file,
                Self::LAYOUT.location,
                "TrustLoop Popup Widget",
                "End TrustLoop Popup Widget",
                None,
            ),
            WidgetType::ThankYou => (
                "templates/orders/order.liquid",
                "After the order details",
                "TrustLoop Thank You Widget",
                "End TrustLoop Thank You Widget",
                Some("trustloop-thankyou"),
            ),
        };

        Self {
            file,
            location,
            markers: Some(Markers { begin, end, anchor }),
        }
    }

    /// Placement for whatever type tag a config carries.
    ///
    /// Unrecognised tags go in the main layout, unwrapped.
    #[must_use]
    pub const fn for_kind(kind: &WidgetKind) -> Self {
        match kind.widget_type() {
            Some(widget_type) => Self::of(widget_type),
            None => Self::LAYOUT,
        }
    }

    /// Surround a snippet with the begin/end marker comments merchants
    /// search for when updating or removing a widget.
    #[must_use]
    pub fn wrap(&self, snippet: &str) -> String {
        let Some(markers) = self.markers else {
            return snippet.to_owned();
        };

        let anchor = markers
            .anchor
            .map(|id| format!("<div id=\"{id}\"></div>\n"))
            .unwrap_or_default();
        format!(
            "<!-- {} -->\n{anchor}{snippet}\n<!-- {} -->",
            markers.begin, markers.end
        )
    }
}
