// Endpoint contract tests against the served router in demo mode
use cfo_insight::infrastructure::config::AppConfig;
use cfo_insight::infrastructure::fixtures;
use cfo_insight::presentation::router::api_router;
use serde_json::Value;

async fn spawn_app(config: AppConfig) -> String {
    let state = cfo_insight::build_state(&config).unwrap();
    let router = api_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn spawn_demo_app() -> String {
    spawn_app(AppConfig::default()).await
}

#[tokio::test]
async fn test_health_check() {
    let base = spawn_demo_app().await;
    let response = reqwest::get(format!("{base}/healthz")).await.unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn test_metrics_list() {
    let base = spawn_demo_app().await;
    let body: Value = reqwest::get(format!("{base}/api/metrics"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["success"], true);
    assert_eq!(body["companyName"], "QuickKart");
    assert!(body["lastUpdated"].is_string());

    let tiles = body["tiles"].as_array().unwrap();
    assert_eq!(tiles.len(), 3);
    assert_eq!(tiles[0]["id"], "cash-health");
    assert_eq!(tiles[0]["title"], "Cash Health");
    assert_eq!(tiles[0]["status"], "green");
    assert_eq!(tiles[1]["id"], "fulfillment-flow");
    assert_eq!(tiles[2]["id"], "unit-economics");
}

#[tokio::test]
async fn test_tile_detail_round_trips_snapshot() {
    let base = spawn_demo_app().await;
    let body: Value = reqwest::get(format!("{base}/api/metrics/cash-health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["success"], true);
    let data = &body["data"];
    assert_eq!(data["id"], "cash-health");
    assert_eq!(data["trendData"].as_array().unwrap().len(), 7);
    assert!(data["aiSummary"].is_string());

    let snapshot = fixtures::load_snapshot().unwrap();
    let expected = serde_json::to_value(&snapshot.cash_health.details).unwrap();
    assert_eq!(data["details"], expected);
}

#[tokio::test]
async fn test_unknown_tile_is_404() {
    let base = spawn_demo_app().await;
    let response = reqwest::get(format!("{base}/api/metrics/unknown-tile"))
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Tile not found");
}

#[tokio::test]
async fn test_ai_summaries_demo() {
    let base = spawn_demo_app().await;
    let body: Value = reqwest::get(format!("{base}/api/ai/summaries"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["success"], true);
    assert_eq!(body["source"], "demo");

    let summaries = body["summaries"].as_object().unwrap();
    assert_eq!(summaries.len(), 3);
    assert_eq!(
        summaries["cash-health"]["message"],
        "Runway is 8 months. Cash stable."
    );
    assert_eq!(summaries["cash-health"]["status"], "green");
    assert_eq!(
        summaries["fulfillment-flow"]["message"],
        "2 stores slow. Rider wait 5 min."
    );
    assert_eq!(
        summaries["unit-economics"]["message"],
        "Margins healthy. Promos controlled."
    );
}

#[tokio::test]
async fn test_bank_integration_demo() {
    let base = spawn_demo_app().await;
    let body: Value = reqwest::get(format!("{base}/api/integrations/bank"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["success"], true);
    assert_eq!(body["source"], "demo");
    assert_eq!(body["data"]["cashBalance"], 150000000.0);
    assert_eq!(body["data"]["monthlyOutflow"], 18000000.0);
    assert_eq!(body["data"]["runwayMonths"], 8.3);
    assert_eq!(body["data"]["healthStatus"], "green");
}

#[tokio::test]
async fn test_stripe_integration_demo() {
    let base = spawn_demo_app().await;
    let body: Value = reqwest::get(format!("{base}/api/integrations/stripe"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["success"], true);
    assert_eq!(body["source"], "demo");
    assert_eq!(body["data"]["mrr"], 4500000.0);
    assert_eq!(body["data"]["transactionCount"], 125000);
}

#[tokio::test]
async fn test_vision_requires_image() {
    let base = spawn_demo_app().await;
    let client = reqwest::Client::new();
    let response = client
        .post(format!("{base}/api/integrations/vision"))
        .json(&serde_json::json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "No image provided");
}

#[tokio::test]
async fn test_vision_demo_analysis() {
    let base = spawn_demo_app().await;
    let client = reqwest::Client::new();
    let body: Value = client
        .post(format!("{base}/api/integrations/vision"))
        .json(&serde_json::json!({"image": "data:image/png;base64,iVBORw0KGgo="}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["success"], true);
    assert_eq!(body["source"], "demo");
    assert_eq!(body["data"]["sourceType"], "AWS Billing Dashboard");
    assert!(body["data"]["extractedData"].is_object());
}

#[tokio::test]
async fn test_tile_analyze_demo() {
    let base = spawn_demo_app().await;
    let client = reqwest::Client::new();
    let body: Value = client
        .post(format!("{base}/api/tile/fulfillment-flow/analyze"))
        .json(&serde_json::json!({"image": "iVBORw0KGgo="}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["success"], true);
    assert_eq!(body["tileId"], "fulfillment-flow");
    assert_eq!(body["source"], "demo");
    assert_eq!(body["data"]["status"], "amber");
    assert_eq!(body["data"]["confidence"], 78);
}

#[tokio::test]
async fn test_tile_analyze_requires_image() {
    let base = spawn_demo_app().await;
    let client = reqwest::Client::new();
    let response = client
        .post(format!("{base}/api/tile/cash-health/analyze"))
        .json(&serde_json::json!({"image": ""}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
}
