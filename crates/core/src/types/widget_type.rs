//! Widget type enums.

use serde::{Deserialize, Serialize};

/// The closed set of embeddable review surfaces.
///
/// Every generator matches on this exhaustively, so adding a variant forces
/// each output format to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetType {
    /// Rotating featured reviews on the homepage.
    Carousel,
    /// Full review list on product pages.
    Product,
    /// Star-rating snippets inside collection product grids.
    Collection,
    /// Collapsible review bubble pinned to the viewport corner.
    Floating,
    /// Review prompt on the post-checkout confirmation page.
    #[serde(rename = "thankyou")]
    ThankYou,
    /// Modal overlay shown on a scroll, time or exit trigger.
    Popup,
}

impl WidgetType {
    /// All widget types, in gallery order.
    pub const ALL: [Self; 6] = [
        Self::Carousel,
        Self::Product,
        Self::Collection,
        Self::Floating,
        Self::Popup,
        Self::ThankYou,
    ];

    /// The lowercase wire tag (`"thankyou"`, not `"thank_you"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Carousel => "carousel",
            Self::Product => "product",
            Self::Collection => "collection",
            Self::Floating => "floating",
            Self::ThankYou => "thankyou",
            Self::Popup => "popup",
        }
    }

    /// Human-readable name shown in the widget gallery.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Carousel => "Homepage Carousel",
            Self::Product => "Product Page Reviews",
            Self::Collection => "Collection Rating Snippets",
            Self::Floating => "Floating Review Widget",
            Self::ThankYou => "Thank You Page Widget",
            Self::Popup => "Social Proof Popup",
        }
    }

    /// One-line description of the surface.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Carousel => "Showcase top reviews in a beautiful carousel format",
            Self::Product => "Display reviews directly on product pages",
            Self::Collection => "Show star ratings in collection/category pages",
            Self::Floating => "Sticky widget that follows user scroll",
            Self::ThankYou => "Encourage reviews on post-purchase pages",
            Self::Popup => "Show recent reviews in popup notifications",
        }
    }

    /// Where on the storefront the widget typically lives.
    #[must_use]
    pub const fn default_placement(self) -> &'static str {
        match self {
            Self::Carousel => "Homepage",
            Self::Product => "Product Pages",
            Self::Collection => "Collection Pages",
            Self::Floating => "All Pages",
            Self::ThankYou => "Thank You Page",
            Self::Popup => "Site-wide",
        }
    }

    /// Marketing feature bullets for the gallery card.
    #[must_use]
    pub const fn features(self) -> &'static [&'static str] {
        match self {
            Self::Carousel => &["Auto-rotating", "Photo support", "Mobile responsive"],
            Self::Product => &["Filtered by product", "Pagination", "Sort options"],
            Self::Collection => &["Compact design", "Quick loading", "SEO friendly"],
            Self::Floating => &["Always visible", "Customizable position", "Expandable"],
            Self::ThankYou => &["Review request", "Incentive offers", "Social sharing"],
            Self::Popup => &["Real-time updates", "Exit intent", "Timed display"],
        }
    }
}

impl std::fmt::Display for WidgetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for WidgetType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "carousel" => Ok(Self::Carousel),
            "product" => Ok(Self::Product),
            "collection" => Ok(Self::Collection),
            "floating" => Ok(Self::Floating),
            "thankyou" => Ok(Self::ThankYou),
            "popup" => Ok(Self::Popup),
            _ => Err(format!("invalid widget type: {s}")),
        }
    }
}

/// The type tag a widget config actually carries.
///
/// Stored configs are not schema-checked, so the tag may name a type this
/// build does not know. Such configs keep their raw tag and take the generic
/// embed path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WidgetKind {
    Known(WidgetType),
    Other(String),
}

impl WidgetKind {
    /// The recognised widget type, if any.
    #[must_use]
    pub const fn widget_type(&self) -> Option<WidgetType> {
        match self {
            Self::Known(t) => Some(*t),
            Self::Other(_) => None,
        }
    }

    /// The raw tag as written in the config.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(t) => t.as_str(),
            Self::Other(s) => s,
        }
    }
}

impl From<WidgetType> for WidgetKind {
    fn from(t: WidgetType) -> Self {
        Self::Known(t)
    }
}

impl From<String> for WidgetKind {
    fn from(s: String) -> Self {
        s.parse::<WidgetType>().map_or(Self::Other(s), Self::Known)
    }
}

impl From<&str> for WidgetKind {
    fn from(s: &str) -> Self {
        Self::from(s.to_owned())
    }
}

impl From<WidgetKind> for String {
    fn from(kind: WidgetKind) -> Self {
        match kind {
            WidgetKind::Known(t) => t.as_str().to_owned(),
            WidgetKind::Other(s) => s,
        }
    }
}

impl std::fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What opens a popup widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TriggerKind {
    /// Scroll depth, value in percent.
    #[default]
    Scroll,
    /// Dwell time, value in milliseconds.
    Time,
    /// Exit intent; value is ignored by the runtime.
    Exit,
}

impl TriggerKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scroll => "scroll",
            Self::Time => "time",
            Self::Exit => "exit",
        }
    }
}

impl std::fmt::Display for TriggerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Popup trigger emitted as the `trigger: {type, value}` literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PopupTrigger {
    #[serde(rename = "type", default)]
    pub kind: TriggerKind,
    pub value: u32,
}

impl Default for PopupTrigger {
    fn default() -> Self {
        Self {
            kind: TriggerKind::Scroll,
            value: 50,
        }
    }
}
