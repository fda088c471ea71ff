// Router assembly
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    ai_summaries, analyze_screenshot, analyze_tile, bank_integration, health_check,
    list_metrics, stripe_integration, tile_detail,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn api_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/api/metrics", get(list_metrics))
        .route("/api/metrics/:id", get(tile_detail))
        .route("/api/ai/summaries", get(ai_summaries))
        .route("/api/integrations/bank", get(bank_integration))
        .route("/api/integrations/stripe", get(stripe_integration))
        .route("/api/integrations/vision", post(analyze_screenshot))
        .route("/api/tile/:id/analyze", post(analyze_tile))
        // The dashboard UI is served from another origin
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
