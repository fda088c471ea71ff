// Application state for HTTP handlers
use crate::application::bank_service::BankService;
use crate::application::metrics_service::MetricsService;
use crate::application::stripe_service::StripeService;
use crate::application::summary_service::SummaryService;
use crate::application::vision_service::VisionService;

#[derive(Clone)]
pub struct AppState {
    pub metrics_service: MetricsService,
    pub summary_service: SummaryService,
    pub vision_service: VisionService,
    pub bank_service: BankService,
    pub stripe_service: StripeService,
}
