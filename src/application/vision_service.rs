// Vision analyzers - screenshot metric extraction
use crate::application::gateways::ChatCompletions;
use crate::domain::integrations::{
    FallbackCause, IntegrationMode, Sourced, TileVisionResult, VisionAnalysis,
};
use crate::domain::metrics::{Status, TileId};
use serde_json::Value;
use std::sync::Arc;

const GENERIC_VISION_PROMPT: &str = r#"You are a CFO assistant analyzing dashboard screenshots.
Extract key financial/operational metrics from the image.
Return a JSON object with:
- sourceType: what kind of dashboard this is (e.g., "AWS Billing", "Stripe Dashboard", "Shopify Analytics")
- extractedData: key-value pairs of important numbers/metrics you see
- summary: a 2-sentence CEO-friendly summary of what this shows

Always respond with valid JSON only."#;

const CASH_HEALTH_VISION_PROMPT: &str = r#"You are a CFO assistant analyzing a financial document or dashboard screenshot.
Extract cash/banking metrics. Look for:
- Account balance / Cash balance
- Monthly expenses / Burn rate
- Income / Revenue
- Any dates shown

Return JSON with:
- extractedMetrics: key-value pairs of numbers found (in INR/USD)
- status: "green" if balance is healthy, "amber" if concerning, "red" if critical
- message: One sentence summary for a CEO (e.g., "Cash at 2.5 Cr, burn rate stable")
- confidence: 0-100 how confident you are in the extraction"#;

const FULFILLMENT_VISION_PROMPT: &str = r#"You are a CFO assistant analyzing an operations/logistics dashboard screenshot.
Extract fulfillment metrics. Look for:
- Order counts / Pending orders
- Delivery times / Wait times
- Store/warehouse metrics
- Any backlogs or delays

Return JSON with:
- extractedMetrics: key-value pairs of numbers found
- status: "green" if operations smooth, "amber" if delays exist, "red" if critical
- message: One sentence summary for a CEO (e.g., "45 orders pending, avg wait 8 min")
- confidence: 0-100 how confident you are in the extraction"#;

const UNIT_ECONOMICS_VISION_PROMPT: &str = r#"You are a CFO assistant analyzing a revenue/sales dashboard screenshot.
Extract unit economics metrics. Look for:
- Revenue / Sales figures
- Margins / Profit percentages
- Order values / AOV
- Discounts / Promo costs

Return JSON with:
- extractedMetrics: key-value pairs of numbers found
- status: "green" if margins healthy, "amber" if concerning, "red" if losing money
- message: One sentence summary for a CEO (e.g., "Revenue 4.5 Cr, margin 12%")
- confidence: 0-100 how confident you are in the extraction"#;

fn tile_vision_prompt(tile: TileId) -> &'static str {
    match tile {
        TileId::CashHealth => CASH_HEALTH_VISION_PROMPT,
        TileId::FulfillmentFlow => FULFILLMENT_VISION_PROMPT,
        TileId::UnitEconomics => UNIT_ECONOMICS_VISION_PROMPT,
    }
}

fn demo_extracted(pairs: &[(&str, Value)]) -> serde_json::Map<String, Value> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

pub fn demo_vision_analysis() -> VisionAnalysis {
    VisionAnalysis {
        success: true,
        extracted_data: demo_extracted(&[
            ("Total Cost", Value::from("$2,847.32")),
            ("Month", Value::from("February 2026")),
            ("Top Service", Value::from("EC2 Instances")),
            ("Trend", Value::from("Up 12% from last month")),
        ]),
        summary: "This appears to be an AWS billing dashboard. Monthly cost is $2,847.32, up 12% from last month. EC2 instances are the primary cost driver.".to_string(),
        source_type: "AWS Billing Dashboard".to_string(),
    }
}

pub fn demo_tile_vision_result(tile: TileId) -> TileVisionResult {
    match tile {
        TileId::CashHealth => TileVisionResult {
            success: true,
            extracted_metrics: demo_extracted(&[
                ("Cash Balance", Value::from("₹15,00,00,000")),
                ("Monthly Expenses", Value::from("₹1,80,00,000")),
                ("Last Updated", Value::from("Feb 2026")),
            ]),
            status: Status::Green,
            message: "Cash at 15 Cr, runway 8+ months. Looking healthy.".to_string(),
            confidence: 85,
        },
        TileId::FulfillmentFlow => TileVisionResult {
            success: true,
            extracted_metrics: demo_extracted(&[
                ("Pending Orders", Value::from(156)),
                ("Avg Wait Time", Value::from("5.2 min")),
                ("Stores Active", Value::from(45)),
            ]),
            status: Status::Amber,
            message: "156 pending orders, 2 stores showing delays.".to_string(),
            confidence: 78,
        },
        TileId::UnitEconomics => TileVisionResult {
            success: true,
            extracted_metrics: demo_extracted(&[
                ("Daily Revenue", Value::from("₹48,50,000")),
                ("Contribution Margin", Value::from("12.4%")),
                ("Avg Order Value", Value::from("₹385")),
            ]),
            status: Status::Green,
            message: "Daily revenue 48.5L, margins at 12.4%. Promos under control.".to_string(),
            confidence: 82,
        },
    }
}

/// Strip a `data:image/...;base64,` prefix so the payload is bare base64.
pub fn strip_data_url_prefix(image: &str) -> &str {
    if image.starts_with("data:image/") {
        if let Some(idx) = image.find(";base64,") {
            return &image[idx + ";base64,".len()..];
        }
    }
    image
}

fn parse_vision_reply(content: &str) -> anyhow::Result<VisionAnalysis> {
    let parsed: Value = serde_json::from_str(content)?;
    Ok(VisionAnalysis {
        success: true,
        extracted_data: parsed
            .get("extractedData")
            .and_then(|v| v.as_object())
            .cloned()
            .unwrap_or_default(),
        summary: parsed
            .get("summary")
            .and_then(|v| v.as_str())
            .unwrap_or("Unable to analyze image")
            .to_string(),
        source_type: parsed
            .get("sourceType")
            .and_then(|v| v.as_str())
            .unwrap_or("Unknown")
            .to_string(),
    })
}

fn parse_tile_vision_reply(content: &str) -> anyhow::Result<TileVisionResult> {
    let parsed: Value = serde_json::from_str(content)?;
    Ok(TileVisionResult {
        success: true,
        extracted_metrics: parsed
            .get("extractedMetrics")
            .and_then(|v| v.as_object())
            .cloned()
            .unwrap_or_default(),
        status: parsed
            .get("status")
            .and_then(|v| v.as_str())
            .and_then(Status::parse)
            .unwrap_or(Status::Amber),
        message: parsed
            .get("message")
            .and_then(|v| v.as_str())
            .unwrap_or("Analysis complete")
            .to_string(),
        confidence: parsed
            .get("confidence")
            .and_then(|v| v.as_f64())
            .map(|c| c.round().clamp(0.0, 100.0) as u32)
            .unwrap_or(70),
    })
}

fn failed_vision_analysis() -> VisionAnalysis {
    VisionAnalysis {
        success: false,
        extracted_data: serde_json::Map::new(),
        summary: "Failed to analyze image. Please try again.".to_string(),
        source_type: "Error".to_string(),
    }
}

fn failed_tile_vision_result() -> TileVisionResult {
    TileVisionResult {
        success: false,
        extracted_metrics: serde_json::Map::new(),
        status: Status::Amber,
        message: "Failed to analyze screenshot. Please try again.".to_string(),
        confidence: 0,
    }
}

#[derive(Clone)]
pub struct VisionService {
    completions: Arc<dyn ChatCompletions>,
    mode: IntegrationMode,
}

impl VisionService {
    pub fn new(completions: Arc<dyn ChatCompletions>, mode: IntegrationMode) -> Self {
        Self { completions, mode }
    }

    pub async fn analyze_screenshot(&self, image: &str) -> Sourced<VisionAnalysis> {
        let Some(cause) = self.mode.fallback_cause() else {
            let image = strip_data_url_prefix(image);
            let result = async {
                let reply = self
                    .completions
                    .complete_with_image(
                        GENERIC_VISION_PROMPT,
                        image,
                        "Analyze this dashboard screenshot and extract the key metrics.",
                    )
                    .await?;
                parse_vision_reply(&reply)
            }
            .await;
            return match result {
                Ok(analysis) => Sourced::live(analysis),
                Err(e) => {
                    tracing::warn!("screenshot analysis failed: {e:#}");
                    Sourced::demo(
                        failed_vision_analysis(),
                        FallbackCause::UpstreamFailed(e.to_string()),
                    )
                }
            };
        };
        tracing::debug!("demo screenshot analysis: {cause:?}");
        Sourced::demo(demo_vision_analysis(), cause)
    }

    /// Tile-specialized analysis. Unknown ids use the cash-health prompt
    /// and demo result.
    pub async fn analyze_tile(&self, tile_id: &str, image: &str) -> Sourced<TileVisionResult> {
        let tile = TileId::parse(tile_id).unwrap_or(TileId::CashHealth);
        let Some(cause) = self.mode.fallback_cause() else {
            let image = strip_data_url_prefix(image);
            let system = format!(
                "{}\n\nRespond with valid JSON only, no markdown.",
                tile_vision_prompt(tile)
            );
            let result = async {
                let reply = self
                    .completions
                    .complete_with_image(
                        &system,
                        image,
                        "Analyze this screenshot and extract the relevant metrics.",
                    )
                    .await?;
                parse_tile_vision_reply(&reply)
            }
            .await;
            return match result {
                Ok(analysis) => Sourced::live(analysis),
                Err(e) => {
                    tracing::warn!("tile screenshot analysis failed for {tile_id}: {e:#}");
                    Sourced::demo(
                        failed_tile_vision_result(),
                        FallbackCause::UpstreamFailed(e.to_string()),
                    )
                }
            };
        };
        tracing::debug!("demo tile analysis for {tile_id}: {cause:?}");
        Sourced::demo(demo_tile_vision_result(tile), cause)
    }
}
