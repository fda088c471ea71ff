// Stripe integration use case - revenue metrics for the current month
use crate::application::gateways::{Charge, ChargeGateway};
use crate::domain::integrations::{FallbackCause, IntegrationMode, Sourced, StripeMetrics};
use std::sync::Arc;

pub fn demo_stripe_metrics() -> StripeMetrics {
    StripeMetrics {
        mrr: 4500000.0,
        total_revenue: 45000000.0,
        refunds: 225000.0,
        net_revenue: 44775000.0,
        transaction_count: 125000,
        avg_transaction_value: 360.0,
    }
}

/// Reduce a page of charges to the revenue metrics record. Minor units are
/// converted to major units.
pub fn metrics_from_charges(charges: &[Charge]) -> StripeMetrics {
    let mut revenue_minor: i64 = 0;
    let mut refunds_minor: i64 = 0;
    let mut succeeded: u64 = 0;

    for charge in charges {
        if charge.succeeded {
            revenue_minor += charge.amount_minor;
            succeeded += 1;
        }
        if charge.refunded {
            refunds_minor += charge.refunded_minor;
        }
    }

    let total_revenue = revenue_minor as f64 / 100.0;
    let refunds = refunds_minor as f64 / 100.0;

    StripeMetrics {
        // TODO: derive MRR from subscription data instead of this flat
        // 10%-of-revenue placeholder.
        mrr: total_revenue * 0.1,
        total_revenue,
        refunds,
        net_revenue: total_revenue - refunds,
        transaction_count: succeeded,
        avg_transaction_value: if succeeded > 0 {
            total_revenue / succeeded as f64
        } else {
            0.0
        },
    }
}

#[derive(Clone)]
pub struct StripeService {
    gateway: Arc<dyn ChargeGateway>,
    mode: IntegrationMode,
}

impl StripeService {
    pub fn new(gateway: Arc<dyn ChargeGateway>, mode: IntegrationMode) -> Self {
        Self { gateway, mode }
    }

    pub async fn metrics(&self) -> Sourced<StripeMetrics> {
        let Some(cause) = self.mode.fallback_cause() else {
            return match self.gateway.list_current_month_charges().await {
                Ok(charges) => Sourced::live(metrics_from_charges(&charges)),
                Err(e) => {
                    tracing::warn!("stripe metrics unavailable, serving demo data: {e:#}");
                    Sourced::demo(
                        demo_stripe_metrics(),
                        FallbackCause::UpstreamFailed(e.to_string()),
                    )
                }
            };
        };
        tracing::debug!("stripe integration in demo mode: {cause:?}");
        Sourced::demo(demo_stripe_metrics(), cause)
    }
}
