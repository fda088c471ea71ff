// Bank integration use case - cash metrics with runway and health status
use crate::application::gateways::{BankGateway, GatewayError};
use crate::domain::cash::{calculate_runway, cash_health_status};
use crate::domain::integrations::{
    BankMetrics, FallbackCause, IntegrationMode, Sourced,
};
use crate::domain::metrics::Status;
use serde::Serialize;
use std::sync::Arc;

/// Bank metrics enriched with the derived runway and health status.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BankOverview {
    #[serde(flatten)]
    pub metrics: BankMetrics,
    pub runway_months: f64,
    pub health_status: Status,
}

pub fn demo_bank_metrics() -> BankMetrics {
    BankMetrics {
        cash_balance: 150000000.0,
        monthly_inflow: 48000000.0,
        monthly_outflow: 18000000.0,
        net_cash_flow: 30000000.0,
        account_count: 3,
    }
}

#[derive(Clone)]
pub struct BankService {
    gateway: Arc<dyn BankGateway>,
    mode: IntegrationMode,
}

impl BankService {
    pub fn new(gateway: Arc<dyn BankGateway>, mode: IntegrationMode) -> Self {
        Self { gateway, mode }
    }

    pub async fn overview(&self) -> Sourced<BankOverview> {
        let fetched = self.fetch_metrics().await;
        let runway = calculate_runway(
            fetched.value.cash_balance,
            fetched.value.monthly_outflow,
        );
        Sourced {
            value: BankOverview {
                metrics: fetched.value,
                runway_months: runway,
                health_status: cash_health_status(runway),
            },
            origin: fetched.origin,
        }
    }

    async fn fetch_metrics(&self) -> Sourced<BankMetrics> {
        let Some(cause) = self.mode.fallback_cause() else {
            return match self.gateway.fetch_metrics().await {
                Ok(metrics) => Sourced::live(metrics),
                Err(e) => {
                    let cause = if e.downcast_ref::<GatewayError>().is_some() {
                        FallbackCause::Unimplemented
                    } else {
                        FallbackCause::UpstreamFailed(e.to_string())
                    };
                    tracing::warn!("bank metrics unavailable, serving demo data: {e:#}");
                    Sourced::demo(demo_bank_metrics(), cause)
                }
            };
        };
        tracing::debug!("bank integration in demo mode: {cause:?}");
        Sourced::demo(demo_bank_metrics(), cause)
    }
}
