//! Widget performance analytics.
//!
//! Simple reductions over widget counters, the same figures the merchant
//! dashboard shows: click-through rate, a rating band, advisory insights and
//! catalog-wide totals.

use serde::Serialize;

use crate::widget::Widget;

/// CTR at or above which a widget is rated excellent.
const EXCELLENT_CTR: f64 = 10.0;
/// CTR at or above which a widget is rated good.
const GOOD_CTR: f64 = 5.0;
/// CTR below which conversion is considered low.
const LOW_CTR: f64 = 2.0;
/// Views above which a widget counts as high visibility.
const HIGH_VISIBILITY_VIEWS: u64 = 1000;

/// Click-through rate in percent; zero when there are no views.
#[must_use]
#[allow(clippy::cast_precision_loss)] // counters stay far below 2^52
pub fn click_through_rate(views: u64, clicks: u64) -> f64 {
    if views == 0 {
        0.0
    } else {
        clicks as f64 / views as f64 * 100.0
    }
}

/// Performance band derived from CTR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceRating {
    Excellent,
    Good,
    Average,
    Poor,
}

impl PerformanceRating {
    #[must_use]
    pub fn from_ctr(ctr: f64) -> Self {
        if ctr >= EXCELLENT_CTR {
            Self::Excellent
        } else if ctr >= GOOD_CTR {
            Self::Good
        } else if ctr >= LOW_CTR {
            Self::Average
        } else {
            Self::Poor
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::Poor => "Poor",
        }
    }
}

impl std::fmt::Display for PerformanceRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Advisory notes attached to a widget's performance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Insight {
    ExcellentConversion,
    LowConversion,
    HighVisibility,
}

impl Insight {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::ExcellentConversion => {
                "Excellent conversion rate! This widget is performing very well."
            }
            Self::LowConversion => {
                "Low conversion rate. Consider optimizing the widget placement or design."
            }
            Self::HighVisibility => "High visibility widget with strong engagement.",
        }
    }
}

/// Performance figures for one widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetPerformance {
    pub views: u64,
    pub clicks: u64,
    pub ctr: f64,
    pub rating: PerformanceRating,
    pub insights: Vec<Insight>,
}

impl WidgetPerformance {
    #[must_use]
    pub fn from_counters(views: u64, clicks: u64) -> Self {
        let ctr = click_through_rate(views, clicks);

        let mut insights = Vec::new();
        if ctr > EXCELLENT_CTR {
            insights.push(Insight::ExcellentConversion);
        }
        if ctr < LOW_CTR {
            insights.push(Insight::LowConversion);
        }
        if views > HIGH_VISIBILITY_VIEWS {
            insights.push(Insight::HighVisibility);
        }

        Self {
            views,
            clicks,
            ctr,
            rating: PerformanceRating::from_ctr(ctr),
            insights,
        }
    }

    #[must_use]
    pub fn of(widget: &Widget) -> Self {
        Self::from_counters(widget.views, widget.clicks)
    }
}

/// Totals across a set of widgets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSummary {
    pub total_views: u64,
    pub total_clicks: u64,
    pub active_widgets: usize,
    /// Mean of per-widget CTRs (not total clicks over total views).
    pub average_ctr: f64,
}

impl CatalogSummary {
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // widget counts are small
    pub fn of(widgets: &[Widget]) -> Self {
        let total_views = widgets.iter().map(|w| w.views).sum();
        let total_clicks = widgets.iter().map(|w| w.clicks).sum();
        let active_widgets = widgets.iter().filter(|w| w.is_active).count();
        let average_ctr = if widgets.is_empty() {
            0.0
        } else {
            widgets
                .iter()
                .map(|w| click_through_rate(w.views, w.clicks))
                .sum::<f64>()
                / widgets.len() as f64
        };

        Self {
            total_views,
            total_clicks,
            active_widgets,
            average_ctr,
        }
    }
}
