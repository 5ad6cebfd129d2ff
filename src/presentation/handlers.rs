// HTTP request handlers
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::application::chart_service::{CAMPAIGN_CHART_TITLE, FOLLOWER_CHART_TITLE};
use crate::domain::dashboard::{ChartResult, ControlCatalog, SummarySnapshot};
use crate::domain::records::{Channel, Metric, Region};
use crate::presentation::app_state::AppState;

#[derive(Deserialize)]
pub struct RangeQuery {
    pub region: Region,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

#[derive(Deserialize)]
pub struct CampaignChartQuery {
    /// Comma-separated campaign names; absent means nothing selected.
    pub campaigns: Option<String>,
    /// Comma-separated metric labels; absent means nothing selected.
    pub metrics: Option<String>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct SelectionResponse {
    pub selected: Vec<Channel>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Options for the rendering layer's controls
pub async fn control_catalog(State(state): State<Arc<AppState>>) -> Json<ControlCatalog> {
    Json(state.catalog_service.catalog())
}

/// Summary cards for the selected region and date range
pub async fn summary_cards(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RangeQuery>,
) -> Json<SummarySnapshot> {
    let Some((start, end)) = resolve_range(&state, query.start, query.end) else {
        return Json(SummarySnapshot::NoData);
    };
    Json(state.summary_service.cards(query.region, start, end))
}

/// Campaign performance chart for the selected campaigns and metrics
pub async fn campaign_chart(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CampaignChartQuery>,
) -> Result<Json<ChartResult>, (StatusCode, String)> {
    let campaigns = split_list(query.campaigns.as_deref());
    let mut metrics = Vec::new();
    for label in split_list(query.metrics.as_deref()) {
        match Metric::from_label(&label) {
            Some(metric) => metrics.push(metric),
            None => {
                return Err((
                    StatusCode::BAD_REQUEST,
                    format!("unknown metric \"{label}\""),
                ));
            }
        }
    }

    let Some((start, end)) = resolve_range(&state, query.start, query.end) else {
        return Ok(Json(ChartResult::empty(CAMPAIGN_CHART_TITLE)));
    };
    Ok(Json(
        state
            .chart_service
            .campaign_chart(&campaigns, &metrics, start, end),
    ))
}

/// Follower trends chart for the currently latched channels
pub async fn follower_chart(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RangeQuery>,
) -> Json<ChartResult> {
    let Some((start, end)) = resolve_range(&state, query.start, query.end) else {
        return Json(ChartResult::empty(FOLLOWER_CHART_TITLE));
    };
    let selection = state.selection.read();
    Json(
        state
            .chart_service
            .follower_chart(query.region, start, end, &selection),
    )
}

/// Card click: advances the one-way selection latch, never a deselect
pub async fn record_card_click(
    State(state): State<Arc<AppState>>,
    Path(channel): Path<String>,
) -> Result<Json<SelectionResponse>, (StatusCode, String)> {
    let Some(channel) = Channel::from_label(&channel) else {
        return Err((
            StatusCode::BAD_REQUEST,
            format!("unknown channel \"{channel}\""),
        ));
    };
    let mut selection = state.selection.write();
    selection.record_click(channel);
    Ok(Json(SelectionResponse {
        selected: selection.selected(),
    }))
}

/// Absent ends of the range fall back to the ad table's date bounds, the
/// date picker's initial state. None only when the ad table is empty and no
/// explicit range was given.
fn resolve_range(
    state: &AppState,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Option<(NaiveDate, NaiveDate)> {
    let bounds = state.repository.date_bounds();
    let start = start.or(bounds.map(|(min, _)| min))?;
    let end = end.or(bounds.map(|(_, max)| max))?;
    Some((start, end))
}

fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or("")
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
