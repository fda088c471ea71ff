// Stripe charges gateway
use crate::application::gateways::{Charge, ChargeGateway};
use crate::infrastructure::config::StripeSettings;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Datelike, Utc};
use serde::Deserialize;

const PAGE_LIMIT: &str = "100";

#[derive(Debug, Clone)]
pub struct StripeGateway {
    client: reqwest::Client,
    base_url: String,
    secret_key: String,
}

#[derive(Debug, Deserialize)]
struct ChargePage {
    data: Vec<ApiCharge>,
}

#[derive(Debug, Deserialize)]
struct ApiCharge {
    amount: i64,
    #[serde(default)]
    amount_refunded: i64,
    status: String,
    #[serde(default)]
    refunded: bool,
}

impl StripeGateway {
    pub fn new(settings: StripeSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            secret_key: settings.secret_key.unwrap_or_default(),
        }
    }
}

/// Unix timestamp of midnight UTC on the first of the given instant's month.
fn start_of_month_timestamp(now: DateTime<Utc>) -> i64 {
    let first = now
        .date_naive()
        .with_day(1)
        .unwrap_or_else(|| now.date_naive());
    first
        .and_hms_opt(0, 0, 0)
        .unwrap_or_default()
        .and_utc()
        .timestamp()
}

#[async_trait]
impl ChargeGateway for StripeGateway {
    async fn list_current_month_charges(&self) -> Result<Vec<Charge>> {
        let since = start_of_month_timestamp(Utc::now());
        let url = format!("{}/charges", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("created[gte]", since.to_string().as_str()), ("limit", PAGE_LIMIT)])
            .bearer_auth(&self.secret_key)
            .send()
            .await
            .context("Failed to send request to Stripe")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Stripe charges request failed with status {}: {}", status, body);
        }

        let page = response
            .json::<ChargePage>()
            .await
            .context("Failed to parse Stripe charges response")?;

        Ok(page
            .data
            .into_iter()
            .map(|c| Charge {
                amount_minor: c.amount,
                refunded_minor: c.amount_refunded,
                succeeded: c.status == "succeeded",
                refunded: c.refunded,
            })
            .collect())
    }
}
