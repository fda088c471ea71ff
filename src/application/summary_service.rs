// Summary generator - CEO-friendly one-liners per tile
use crate::application::gateways::ChatCompletions;
use crate::domain::integrations::{
    FallbackCause, GeneratedSummary, IntegrationMode, Sourced,
};
use crate::domain::metrics::{MetricsSnapshot, Status, TileId, Trend};
use futures::future::join_all;
use std::collections::HashMap;
use std::sync::Arc;

const CASH_HEALTH_PROMPT: &str = r#"You are a CFO advisor generating a one-line summary for a CEO.
Given the cash metrics below, create:
- message: max 8 words, mention runway or cash status
- status: "green" if runway > 6 months, "amber" if 3-6 months, "red" if < 3 months
- trend: "up" if improving, "down" if declining, "stable" if unchanged

Examples:
- "Runway is 8 months. Cash stable." (green)
- "Burn increased. 4 months runway left." (amber)
- "Cash critical. 2 months runway." (red)

Respond with JSON only."#;

const FULFILLMENT_PROMPT: &str = r#"You are a CFO advisor generating a one-line summary for a CEO.
Given the fulfillment metrics below, create:
- message: max 8 words, focus on stores at risk or rider delays
- status: "green" if all stores normal, "amber" if 1-3 stores slow, "red" if > 3 stores or critical delays
- trend: based on whether situation is improving or worsening

Examples:
- "All stores flowing. No delays." (green)
- "2 stores slow. Rider wait 5 min." (amber)
- "5 stores congested. Orders piling up." (red)

Respond with JSON only."#;

const UNIT_ECONOMICS_PROMPT: &str = r#"You are a CFO advisor generating a one-line summary for a CEO.
Given the unit economics metrics below, create:
- message: max 8 words, focus on margins or promos
- status: "green" if margin > 10%, "amber" if 5-10%, "red" if < 5%
- trend: based on whether margins are improving

Examples:
- "Margins healthy. Promos controlled." (green)
- "Margins dipped. Watch promo spend." (amber)
- "Losing money per order. Urgent fix needed." (red)

Respond with JSON only."#;

fn summary_prompt(tile: TileId) -> &'static str {
    match tile {
        TileId::CashHealth => CASH_HEALTH_PROMPT,
        TileId::FulfillmentFlow => FULFILLMENT_PROMPT,
        TileId::UnitEconomics => UNIT_ECONOMICS_PROMPT,
    }
}

pub fn demo_summary(tile: TileId) -> GeneratedSummary {
    match tile {
        TileId::CashHealth => GeneratedSummary {
            message: "Runway is 8 months. Cash stable.".to_string(),
            status: Status::Green,
            trend: Trend::Stable,
        },
        TileId::FulfillmentFlow => GeneratedSummary {
            message: "2 stores slow. Rider wait 5 min.".to_string(),
            status: Status::Amber,
            trend: Trend::Down,
        },
        TileId::UnitEconomics => GeneratedSummary {
            message: "Margins healthy. Promos controlled.".to_string(),
            status: Status::Green,
            trend: Trend::Up,
        },
    }
}

/// Parse the model's JSON reply, defaulting any missing field.
pub fn parse_summary_reply(content: &str) -> anyhow::Result<GeneratedSummary> {
    let parsed: serde_json::Value = serde_json::from_str(content)?;
    Ok(GeneratedSummary {
        message: parsed
            .get("message")
            .and_then(|v| v.as_str())
            .unwrap_or("Status updated.")
            .to_string(),
        status: parsed
            .get("status")
            .and_then(|v| v.as_str())
            .and_then(Status::parse)
            .unwrap_or(Status::Amber),
        trend: parsed
            .get("trend")
            .and_then(|v| v.as_str())
            .and_then(Trend::parse)
            .unwrap_or(Trend::Stable),
    })
}

#[derive(Clone)]
pub struct SummaryService {
    completions: Arc<dyn ChatCompletions>,
    mode: IntegrationMode,
}

impl SummaryService {
    pub fn new(completions: Arc<dyn ChatCompletions>, mode: IntegrationMode) -> Self {
        Self { completions, mode }
    }

    pub async fn tile_summary(
        &self,
        tile: TileId,
        metrics: &serde_json::Value,
    ) -> Sourced<GeneratedSummary> {
        let Some(cause) = self.mode.fallback_cause() else {
            return match self.generate(tile, metrics).await {
                Ok(summary) => Sourced::live(summary),
                Err(e) => {
                    tracing::warn!(
                        "summary generation failed for {}, serving demo summary: {e:#}",
                        tile.as_str()
                    );
                    Sourced::demo(
                        demo_summary(tile),
                        FallbackCause::UpstreamFailed(e.to_string()),
                    )
                }
            };
        };
        tracing::debug!("demo summary for tile {}", tile.as_str());
        Sourced::demo(demo_summary(tile), cause)
    }

    /// Generate summaries for all tiles concurrently, keyed by tile id.
    /// No partial-failure handling is needed; each per-tile call already
    /// swallows its own errors.
    pub async fn all_summaries(
        &self,
        snapshot: &MetricsSnapshot,
    ) -> Sourced<HashMap<String, GeneratedSummary>> {
        let results = join_all(TileId::ALL.iter().map(|&tile| async move {
            let metrics = snapshot.details_json(tile);
            let summary = self.tile_summary(tile, &metrics).await;
            (tile.as_str().to_string(), summary.value)
        }))
        .await;

        let summaries = results.into_iter().collect();
        match self.mode.fallback_cause() {
            None => Sourced::live(summaries),
            Some(cause) => Sourced::demo(summaries, cause),
        }
    }

    async fn generate(
        &self,
        tile: TileId,
        metrics: &serde_json::Value,
    ) -> anyhow::Result<GeneratedSummary> {
        let user = format!(
            "Generate a summary for these metrics:\n{}",
            serde_json::to_string_pretty(metrics)?
        );
        let reply = self
            .completions
            .complete_text(summary_prompt(tile), &user)
            .await?;
        parse_summary_reply(&reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::integrations::DataOrigin;
    use crate::infrastructure::fixtures;
    use async_trait::async_trait;

    #[test]
    fn test_parse_full_reply() {
        let summary =
            parse_summary_reply(r#"{"message":"Cash strong.","status":"green","trend":"up"}"#)
                .unwrap();
        assert_eq!(summary.message, "Cash strong.");
        assert_eq!(summary.status, Status::Green);
        assert_eq!(summary.trend, Trend::Up);
    }

    #[test]
    fn test_parse_defaults_missing_fields() {
        let summary = parse_summary_reply("{}").unwrap();
        assert_eq!(summary.message, "Status updated.");
        assert_eq!(summary.status, Status::Amber);
        assert_eq!(summary.trend, Trend::Stable);
    }

    #[test]
    fn test_parse_rejects_non_json() {
        assert!(parse_summary_reply("not json").is_err());
    }

    struct CannedCompletions(String);

    #[async_trait]
    impl ChatCompletions for CannedCompletions {
        async fn complete_text(&self, _system: &str, _user: &str) -> anyhow::Result<String> {
            Ok(self.0.clone())
        }

        async fn complete_with_image(
            &self,
            _system: &str,
            _image_base64: &str,
            _instruction: &str,
        ) -> anyhow::Result<String> {
            anyhow::bail!("not used")
        }
    }

    #[tokio::test]
    async fn test_demo_batch_has_three_known_tiles() {
        let service = SummaryService::new(
            Arc::new(CannedCompletions(String::new())),
            IntegrationMode::NotConfigured,
        );
        let snapshot = fixtures::load_snapshot().unwrap();
        let batch = service.all_summaries(&snapshot).await;

        assert!(!batch.origin.is_live());
        assert_eq!(batch.value.len(), 3);
        assert_eq!(
            batch.value["cash-health"].message,
            "Runway is 8 months. Cash stable."
        );
        assert_eq!(
            batch.value["fulfillment-flow"].message,
            "2 stores slow. Rider wait 5 min."
        );
        assert_eq!(
            batch.value["unit-economics"].message,
            "Margins healthy. Promos controlled."
        );
    }

    #[tokio::test]
    async fn test_live_reply_is_parsed() {
        let service = SummaryService::new(
            Arc::new(CannedCompletions(
                r#"{"message":"Burn increased. 4 months runway left.","status":"amber","trend":"down"}"#
                    .to_string(),
            )),
            IntegrationMode::Live,
        );
        let summary = service
            .tile_summary(TileId::CashHealth, &serde_json::json!({"cashBalance": 1}))
            .await;
        assert_eq!(summary.origin, DataOrigin::Live);
        assert_eq!(summary.value.status, Status::Amber);
        assert_eq!(summary.value.trend, Trend::Down);
    }

    #[tokio::test]
    async fn test_unparseable_live_reply_falls_back() {
        let service = SummaryService::new(
            Arc::new(CannedCompletions("sorry, I can't do that".to_string())),
            IntegrationMode::Live,
        );
        let summary = service
            .tile_summary(TileId::UnitEconomics, &serde_json::json!({}))
            .await;
        assert!(matches!(
            summary.origin,
            DataOrigin::Demo(FallbackCause::UpstreamFailed(_))
        ));
        assert_eq!(summary.value, demo_summary(TileId::UnitEconomics));
    }
}
