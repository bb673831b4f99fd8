//! Install guide pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use tracing::instrument;
use trustloop_core::{CatalogSummary, Widget, WidgetPerformance};
use trustloop_embed::InstallGuide;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Widget row for the list page.
#[derive(Clone)]
pub struct WidgetRow {
    pub id: String,
    pub name: String,
    pub type_label: String,
    pub placement: String,
    pub is_active: bool,
    pub views: u64,
    pub clicks: u64,
    /// One decimal place.
    pub ctr: String,
    pub rating: &'static str,
}

impl From<&Widget> for WidgetRow {
    fn from(widget: &Widget) -> Self {
        let performance = WidgetPerformance::of(widget);
        Self {
            id: widget.id.to_string(),
            name: widget.name.clone(),
            type_label: type_label(widget),
            placement: widget.placement_label().to_string(),
            is_active: widget.is_active,
            views: widget.views,
            clicks: widget.clicks,
            ctr: format!("{:.1}", performance.ctr),
            rating: performance.rating.label(),
        }
    }
}

fn type_label(widget: &Widget) -> String {
    widget.kind.widget_type().map_or_else(
        || widget.kind.as_str().to_string(),
        |t| t.display_name().to_string(),
    )
}

/// Widget list page template.
#[derive(Template, WebTemplate)]
#[template(path = "widgets/index.html")]
pub struct WidgetsIndexTemplate {
    pub shop_domain: String,
    pub widgets: Vec<WidgetRow>,
    pub summary: CatalogSummary,
    /// Average CTR, one decimal place.
    pub average_ctr: String,
}

/// Install page template.
#[derive(Template, WebTemplate)]
#[template(path = "widgets/show.html")]
pub struct WidgetShowTemplate {
    pub shop_domain: String,
    pub widget: WidgetRow,
    pub guide: InstallGuide,
    pub insights: Vec<&'static str>,
}

/// Display the widget list.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> WidgetsIndexTemplate {
    let catalog = state.catalog();
    let summary = CatalogSummary::of(&catalog.widgets);

    WidgetsIndexTemplate {
        shop_domain: catalog.shop_domain.to_string(),
        widgets: catalog.widgets.iter().map(WidgetRow::from).collect(),
        summary,
        average_ctr: format!("{:.1}", summary.average_ctr),
    }
}

/// Display the install page for one widget.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<WidgetShowTemplate> {
    let catalog = state.catalog();
    let widget = catalog
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("widget {id}")))?;

    let guide = InstallGuide::build(state.generator(), widget, catalog.shop_domain.as_str())?;
    let insights = WidgetPerformance::of(widget)
        .insights
        .iter()
        .map(|insight| insight.message())
        .collect();

    Ok(WidgetShowTemplate {
        shop_domain: catalog.shop_domain.to_string(),
        widget: WidgetRow::from(widget),
        guide,
        insights,
    })
}
