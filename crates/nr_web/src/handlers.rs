use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};
use nr_core::{DateRangeQuery, ScoreReport, SummaryRequest, SummaryType};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub urls: Vec<String>,
    #[serde(default)]
    pub summary_type: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct SummarizeByDateRequest {
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub summary_type: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

fn summary_type_or_default(raw: &Option<String>) -> &str {
    raw.as_deref().unwrap_or(SummaryType::Headline.as_str())
}

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

pub async fn summarize(
    State(state): State<Arc<AppState>>,
    body: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Result<Json<ScoreReport>, ApiError> {
    let Json(body) = body?;
    let request = SummaryRequest::new(
        body.urls,
        summary_type_or_default(&body.summary_type),
        &body.keywords,
    )?;
    let batch = state.pipeline.score_urls(&request).await?;
    Ok(Json(batch.into_report()))
}

pub async fn summarize_by_date(
    State(state): State<Arc<AppState>>,
    body: Result<Json<SummarizeByDateRequest>, JsonRejection>,
) -> Result<Json<ScoreReport>, ApiError> {
    let Json(body) = body?;
    let query = DateRangeQuery::parse(
        body.start_date.as_deref(),
        body.end_date.as_deref(),
        &body.keywords,
        summary_type_or_default(&body.summary_type),
    )?;
    let batch = state.pipeline.score_date_range(&query).await?;
    Ok(Json(batch.into_report()))
}
