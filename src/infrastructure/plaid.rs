// Plaid bank gateway
use crate::application::gateways::{BankGateway, GatewayError};
use crate::domain::integrations::BankMetrics;
use crate::infrastructure::config::PlaidSettings;
use async_trait::async_trait;

/// Holds live credentials but has no live path yet: the Plaid flow (Link
/// token exchange, /accounts/balance/get, /transactions/get) is not built.
/// It errors explicitly so callers record the unimplemented cause instead
/// of pretending a live fetch happened.
#[derive(Debug, Clone)]
pub struct PlaidGateway {
    _settings: PlaidSettings,
}

impl PlaidGateway {
    pub fn new(settings: PlaidSettings) -> Self {
        Self {
            _settings: settings,
        }
    }
}

#[async_trait]
impl BankGateway for PlaidGateway {
    async fn fetch_metrics(&self) -> anyhow::Result<BankMetrics> {
        Err(GatewayError::Unimplemented.into())
    }
}
