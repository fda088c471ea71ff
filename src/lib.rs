// CFO Insight - financial dashboard API
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

use crate::application::bank_service::BankService;
use crate::application::gateways::{BankGateway, ChargeGateway, ChatCompletions};
use crate::application::metrics_service::MetricsService;
use crate::application::stripe_service::StripeService;
use crate::application::summary_service::SummaryService;
use crate::application::vision_service::VisionService;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::fixtures;
use crate::infrastructure::openai::OpenAiClient;
use crate::infrastructure::plaid::PlaidGateway;
use crate::infrastructure::stripe::StripeGateway;
use crate::presentation::app_state::AppState;
use std::sync::Arc;

/// Wire the services and gateways for the given configuration.
pub fn build_state(config: &AppConfig) -> anyhow::Result<Arc<AppState>> {
    let snapshot = fixtures::load_snapshot()?;
    let trends = fixtures::load_trends()?;
    let metrics_service = MetricsService::new(snapshot, trends);

    let completions: Arc<dyn ChatCompletions> =
        Arc::new(OpenAiClient::new(config.openai.clone()));
    let bank_gateway: Arc<dyn BankGateway> = Arc::new(PlaidGateway::new(config.plaid.clone()));
    let charge_gateway: Arc<dyn ChargeGateway> =
        Arc::new(StripeGateway::new(config.stripe.clone()));

    Ok(Arc::new(AppState {
        metrics_service,
        summary_service: SummaryService::new(completions.clone(), config.openai.mode()),
        vision_service: VisionService::new(completions, config.openai.mode()),
        bank_service: BankService::new(bank_gateway, config.plaid.mode()),
        stripe_service: StripeService::new(charge_gateway, config.stripe.mode()),
    }))
}
