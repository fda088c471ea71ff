// Gateway traits for external integrations
use crate::domain::integrations::BankMetrics;
use async_trait::async_trait;
use thiserror::Error;

/// Errors a gateway can raise deliberately, as opposed to transport or
/// parse failures surfaced through `anyhow`.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("live integration not implemented")]
    Unimplemented,
}

/// One charge from the payment provider, reduced to what the revenue
/// metrics need. Amounts are in minor units (paise/cents).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charge {
    pub amount_minor: i64,
    pub refunded_minor: i64,
    pub succeeded: bool,
    pub refunded: bool,
}

#[async_trait]
pub trait BankGateway: Send + Sync {
    /// Fetch balance and cash-flow metrics from the bank integration.
    async fn fetch_metrics(&self) -> anyhow::Result<BankMetrics>;
}

#[async_trait]
pub trait ChargeGateway: Send + Sync {
    /// List the first page of this month's charges.
    async fn list_current_month_charges(&self) -> anyhow::Result<Vec<Charge>>;
}

#[async_trait]
pub trait ChatCompletions: Send + Sync {
    /// One text completion round trip; returns the assistant's raw reply.
    async fn complete_text(&self, system: &str, user: &str) -> anyhow::Result<String>;

    /// One multimodal completion round trip with an inline base64 image.
    async fn complete_with_image(
        &self,
        system: &str,
        image_base64: &str,
        instruction: &str,
    ) -> anyhow::Result<String>;
}
