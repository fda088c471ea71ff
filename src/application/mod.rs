// Application layer - Use cases and gateway seams
pub mod bank_service;
pub mod gateways;
pub mod metrics_service;
pub mod stripe_service;
pub mod summary_service;
pub mod vision_service;
