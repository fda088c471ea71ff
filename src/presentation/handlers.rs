// HTTP request handlers
use crate::application::bank_service::BankOverview;
use crate::domain::integrations::{
    GeneratedSummary, StripeMetrics, TileVisionResult, VisionAnalysis,
};
use crate::domain::metrics::{SimpleTile, TileDetail};
use crate::presentation::app_state::AppState;
use crate::presentation::error::ApiError;
use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsListResponse {
    pub success: bool,
    pub company_name: String,
    pub last_updated: String,
    pub tiles: Vec<SimpleTile>,
}

#[derive(Serialize)]
pub struct TileDetailResponse {
    pub success: bool,
    pub data: TileDetail,
}

#[derive(Serialize)]
pub struct SummariesResponse {
    pub success: bool,
    pub source: String,
    pub summaries: HashMap<String, GeneratedSummary>,
}

#[derive(Serialize)]
pub struct IntegrationResponse<T> {
    pub success: bool,
    pub source: String,
    pub data: T,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileAnalysisResponse {
    pub success: bool,
    pub tile_id: String,
    pub source: String,
    pub data: TileVisionResult,
}

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub image: Option<String>,
}

impl AnalyzeRequest {
    fn image(self) -> Result<String, ApiError> {
        self.image
            .filter(|image| !image.is_empty())
            .ok_or(ApiError::MissingImage)
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// List the three dashboard tiles
pub async fn list_metrics(State(state): State<Arc<AppState>>) -> Json<MetricsListResponse> {
    let list = state.metrics_service.list_tiles();
    Json(MetricsListResponse {
        success: true,
        company_name: list.company_name,
        last_updated: list.last_updated,
        tiles: list.tiles,
    })
}

/// Detailed data for a specific tile
pub async fn tile_detail(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<TileDetailResponse>, ApiError> {
    let detail = state
        .metrics_service
        .tile_detail(&id)
        .ok_or(ApiError::TileNotFound)?;
    Ok(Json(TileDetailResponse {
        success: true,
        data: detail,
    }))
}

/// Generated summaries for all tiles based on current metrics
pub async fn ai_summaries(State(state): State<Arc<AppState>>) -> Json<SummariesResponse> {
    let batch = state
        .summary_service
        .all_summaries(state.metrics_service.snapshot())
        .await;
    Json(SummariesResponse {
        success: true,
        source: batch.origin.label("openai").to_string(),
        summaries: batch.value,
    })
}

/// Cash balance and cash health metrics from the bank integration
pub async fn bank_integration(
    State(state): State<Arc<AppState>>,
) -> Json<IntegrationResponse<BankOverview>> {
    let overview = state.bank_service.overview().await;
    Json(IntegrationResponse {
        success: true,
        source: overview.origin.label("plaid").to_string(),
        data: overview.value,
    })
}

/// Revenue metrics from the Stripe integration
pub async fn stripe_integration(
    State(state): State<Arc<AppState>>,
) -> Json<IntegrationResponse<StripeMetrics>> {
    let metrics = state.stripe_service.metrics().await;
    Json(IntegrationResponse {
        success: true,
        source: metrics.origin.label("stripe").to_string(),
        data: metrics.value,
    })
}

/// Analyze an uploaded screenshot
pub async fn analyze_screenshot(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AnalyzeRequest>,
) -> Result<Json<IntegrationResponse<VisionAnalysis>>, ApiError> {
    let image = body.image()?;
    let analysis = state.vision_service.analyze_screenshot(&image).await;
    Ok(Json(IntegrationResponse {
        success: analysis.value.success,
        source: analysis.origin.label("openai").to_string(),
        data: analysis.value,
    }))
}

/// Analyze a screenshot against a specific tile's prompt
pub async fn analyze_tile(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(body): Json<AnalyzeRequest>,
) -> Result<Json<TileAnalysisResponse>, ApiError> {
    let image = body.image()?;
    let result = state.vision_service.analyze_tile(&id, &image).await;
    Ok(Json(TileAnalysisResponse {
        success: result.value.success,
        tile_id: id,
        source: result.origin.label("openai").to_string(),
        data: result.value,
    }))
}
