// Compiled-in metrics and trends fixtures
use crate::domain::metrics::{MetricsSnapshot, TileTrends};
use anyhow::{Context, Result};
use std::collections::HashMap;

/// The static metrics snapshot backing the dashboard. In production this
/// would be assembled from the bank, CV processing and OMS feeds.
pub fn load_snapshot() -> Result<MetricsSnapshot> {
    serde_json::from_str(include_str!("../../data/snapshot.json"))
        .context("Failed to parse bundled metrics snapshot")
}

/// Per-tile trend history, insights and summary text for the detail view.
pub fn load_trends() -> Result<HashMap<String, TileTrends>> {
    serde_json::from_str(include_str!("../../data/trends.json"))
        .context("Failed to parse bundled trends fixture")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cash::calculate_runway;
    use crate::domain::metrics::TileId;

    #[test]
    fn test_snapshot_parses() {
        let snapshot = load_snapshot().unwrap();
        assert_eq!(snapshot.company_name, "QuickKart");
        assert_eq!(snapshot.cash_health.details.cash_balance, 150000000.0);
    }

    #[test]
    fn test_snapshot_runway_is_consistent() {
        let details = load_snapshot().unwrap().cash_health.details;
        assert_eq!(
            calculate_runway(details.cash_balance, details.monthly_burn_rate),
            details.runway_months
        );
    }

    #[test]
    fn test_trends_cover_all_tiles() {
        let trends = load_trends().unwrap();
        for tile in TileId::ALL {
            let entry = trends.get(tile.as_str()).unwrap();
            assert_eq!(entry.trend_data.len(), 7);
            assert!(!entry.insights.is_empty());
            assert!(!entry.ai_summary.is_empty());
        }
    }
}
