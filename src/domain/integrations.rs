// Integration result shapes and data-origin tracking
use serde::{Deserialize, Serialize};

use super::metrics::{Status, Trend};

/// How an integration is configured to run. Derived once from configuration;
/// a credential that is absent or the literal "demo" means demo mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrationMode {
    Live,
    NotConfigured,
    DemoConfigured,
}

impl IntegrationMode {
    pub fn is_live(self) -> bool {
        self == IntegrationMode::Live
    }

    pub fn fallback_cause(self) -> Option<FallbackCause> {
        match self {
            IntegrationMode::Live => None,
            IntegrationMode::NotConfigured => Some(FallbackCause::NotConfigured),
            IntegrationMode::DemoConfigured => Some(FallbackCause::DemoConfigured),
        }
    }
}

/// Why a demo value was served instead of a live one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackCause {
    NotConfigured,
    DemoConfigured,
    Unimplemented,
    UpstreamFailed(String),
}

/// Whether a value came from the real integration or the demo fallback.
/// Unlike a configuration-derived flag, this records masked upstream
/// failures: a live call that fell back still reports `Demo` with its cause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataOrigin {
    Live,
    Demo(FallbackCause),
}

impl DataOrigin {
    pub fn is_live(&self) -> bool {
        matches!(self, DataOrigin::Live)
    }

    /// The wire `source` label: the live integration's name, or "demo".
    pub fn label<'a>(&self, live_name: &'a str) -> &'a str {
        match self {
            DataOrigin::Live => live_name,
            DataOrigin::Demo(_) => "demo",
        }
    }
}

/// A value together with where it came from.
#[derive(Debug, Clone)]
pub struct Sourced<T> {
    pub value: T,
    pub origin: DataOrigin,
}

impl<T> Sourced<T> {
    pub fn live(value: T) -> Self {
        Self {
            value,
            origin: DataOrigin::Live,
        }
    }

    pub fn demo(value: T, cause: FallbackCause) -> Self {
        Self {
            value,
            origin: DataOrigin::Demo(cause),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankMetrics {
    pub cash_balance: f64,
    pub monthly_inflow: f64,
    pub monthly_outflow: f64,
    pub net_cash_flow: f64,
    pub account_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StripeMetrics {
    pub mrr: f64,
    pub total_revenue: f64,
    pub refunds: f64,
    pub net_revenue: f64,
    pub transaction_count: u64,
    pub avg_transaction_value: f64,
}

/// Generated one-line tile summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedSummary {
    pub message: String,
    pub status: Status,
    pub trend: Trend,
}

/// Result of generic screenshot analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisionAnalysis {
    pub success: bool,
    pub extracted_data: serde_json::Map<String, serde_json::Value>,
    pub summary: String,
    pub source_type: String,
}

/// Result of tile-specialized screenshot analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileVisionResult {
    pub success: bool,
    pub extracted_metrics: serde_json::Map<String, serde_json::Value>,
    pub status: Status,
    pub message: String,
    pub confidence: u32,
}
