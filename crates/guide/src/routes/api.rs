//! JSON API for generated snippets.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use trustloop_core::{CatalogSummary, Widget, WidgetId, WidgetKind, WidgetPerformance};
use trustloop_embed::{EmbedFormat, GeneratedArtifact, InstallGuide};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Response for `GET /api/widgets`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetListResponse {
    pub shop_domain: String,
    pub summary: CatalogSummary,
    pub widgets: Vec<WidgetSummary>,
}

/// One widget in the list response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetSummary {
    pub id: WidgetId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: WidgetKind,
    pub is_active: bool,
    pub placement: String,
    pub performance: WidgetPerformance,
}

impl From<&Widget> for WidgetSummary {
    fn from(widget: &Widget) -> Self {
        Self {
            id: widget.id.clone(),
            name: widget.name.clone(),
            kind: widget.kind.clone(),
            is_active: widget.is_active,
            placement: widget.placement_label().to_string(),
            performance: WidgetPerformance::of(widget),
        }
    }
}

/// Query for `GET /api/widgets/{id}/artifact`.
#[derive(Debug, Deserialize)]
pub struct ArtifactQuery {
    pub format: Option<String>,
}

/// List widgets with performance figures.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Json<WidgetListResponse> {
    let catalog = state.catalog();

    Json(WidgetListResponse {
        shop_domain: catalog.shop_domain.to_string(),
        summary: CatalogSummary::of(&catalog.widgets),
        widgets: catalog.widgets.iter().map(WidgetSummary::from).collect(),
    })
}

/// Full install guide for one widget.
#[instrument(skip(state))]
pub async fn guide(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<InstallGuide>> {
    let catalog = state.catalog();
    let widget = find_widget(&state, &id)?;

    Ok(Json(InstallGuide::build(
        state.generator(),
        widget,
        catalog.shop_domain.as_str(),
    )?))
}

/// Snippet, steps and stylesheet for one widget in one format.
///
/// Defaults to Liquid when no format is given.
#[instrument(skip(state))]
pub async fn artifact(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ArtifactQuery>,
) -> Result<Json<GeneratedArtifact>> {
    let format = query
        .format
        .as_deref()
        .map_or(Ok(EmbedFormat::default()), str::parse)
        .map_err(AppError::BadRequest)?;

    let widget = find_widget(&state, &id)?;
    let config = widget.to_config(state.catalog().shop_domain.as_str());
    let artifact = state.generator().generate_artifact(&config, format)?;

    if artifact.fallback_used {
        tracing::warn!(widget_id = %id, widget_type = %widget.kind, "Served generic embed for Liquid request");
    }

    Ok(Json(artifact))
}

fn find_widget<'a>(state: &'a AppState, id: &str) -> Result<&'a Widget> {
    state
        .catalog()
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("widget {id}")))
}
