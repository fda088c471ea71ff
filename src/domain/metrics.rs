// Dashboard metrics domain models
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Green,
    Amber,
    Red,
}

impl Status {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "green" => Some(Status::Green),
            "amber" => Some(Status::Amber),
            "red" => Some(Status::Red),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "up" => Some(Trend::Up),
            "down" => Some(Trend::Down),
            "stable" => Some(Trend::Stable),
            _ => None,
        }
    }
}

/// The three dashboard tiles. String form is the wire identifier used in
/// URLs and response maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileId {
    CashHealth,
    FulfillmentFlow,
    UnitEconomics,
}

impl TileId {
    pub const ALL: [TileId; 3] = [
        TileId::CashHealth,
        TileId::FulfillmentFlow,
        TileId::UnitEconomics,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "cash-health" => Some(TileId::CashHealth),
            "fulfillment-flow" => Some(TileId::FulfillmentFlow),
            "unit-economics" => Some(TileId::UnitEconomics),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TileId::CashHealth => "cash-health",
            TileId::FulfillmentFlow => "fulfillment-flow",
            TileId::UnitEconomics => "unit-economics",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            TileId::CashHealth => "Cash Health",
            TileId::FulfillmentFlow => "Fulfillment Flow",
            TileId::UnitEconomics => "Unit Economics",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashHealthDetails {
    pub cash_balance: f64,
    pub monthly_burn_rate: f64,
    pub runway_months: f64,
    pub payroll: f64,
    pub liquidity_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FulfillmentDetails {
    pub total_stores: u32,
    pub stores_at_risk: u32,
    pub avg_rider_wait_minutes: f64,
    #[serde(rename = "ordersAging15Min")]
    pub orders_aging_15_min: u32,
    pub avg_congestion_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitEconomicsDetails {
    pub contribution_margin_percent: f64,
    pub avg_order_value: f64,
    pub delivery_cost_per_order: f64,
    pub promo_leakage_percent: f64,
    pub total_orders_today: u32,
}

/// Status/trend/message triple plus the tile-specific detail record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileBlock<D> {
    pub status: Status,
    pub trend: Trend,
    pub message: String,
    pub details: D,
}

/// Full metrics snapshot for all three tiles. Read-only; sourced from a
/// compiled-in fixture and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub company_name: String,
    pub last_updated: String,
    pub cash_health: TileBlock<CashHealthDetails>,
    pub fulfillment_flow: TileBlock<FulfillmentDetails>,
    pub unit_economics: TileBlock<UnitEconomicsDetails>,
}

impl MetricsSnapshot {
    pub fn tile_status(&self, tile: TileId) -> (Status, Trend, &str) {
        match tile {
            TileId::CashHealth => (
                self.cash_health.status,
                self.cash_health.trend,
                &self.cash_health.message,
            ),
            TileId::FulfillmentFlow => (
                self.fulfillment_flow.status,
                self.fulfillment_flow.trend,
                &self.fulfillment_flow.message,
            ),
            TileId::UnitEconomics => (
                self.unit_economics.status,
                self.unit_economics.trend,
                &self.unit_economics.message,
            ),
        }
    }

    /// Tile details as a JSON object, for detail projections and prompt
    /// payloads.
    pub fn details_json(&self, tile: TileId) -> serde_json::Value {
        let value = match tile {
            TileId::CashHealth => serde_json::to_value(&self.cash_health.details),
            TileId::FulfillmentFlow => serde_json::to_value(&self.fulfillment_flow.details),
            TileId::UnitEconomics => serde_json::to_value(&self.unit_economics.details),
        };
        value.unwrap_or(serde_json::Value::Null)
    }
}

/// Projection of one tile for the list view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimpleTile {
    pub id: String,
    pub title: String,
    pub status: Status,
    pub trend: Trend,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub day: String,
    pub value: f64,
}

/// Per-tile history fixture merged into the detail projection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileTrends {
    pub trend_data: Vec<TrendPoint>,
    pub insights: Vec<String>,
    pub ai_summary: String,
}

/// Projection of one tile for the detail view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileDetail {
    pub id: String,
    pub title: String,
    pub status: Status,
    pub trend: Trend,
    pub message: String,
    pub trend_data: Vec<TrendPoint>,
    pub insights: Vec<String>,
    pub ai_summary: String,
    pub details: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_id_round_trip() {
        for tile in TileId::ALL {
            assert_eq!(TileId::parse(tile.as_str()), Some(tile));
        }
        assert_eq!(TileId::parse("unknown-tile"), None);
    }

    #[test]
    fn test_status_wire_format() {
        assert_eq!(serde_json::to_string(&Status::Green).unwrap(), "\"green\"");
        assert_eq!(Status::parse("red"), Some(Status::Red));
        assert_eq!(Status::parse("blue"), None);
    }

    #[test]
    fn test_details_serialize_camel_case() {
        let details = CashHealthDetails {
            cash_balance: 150000000.0,
            monthly_burn_rate: 18000000.0,
            runway_months: 8.3,
            payroll: 9500000.0,
            liquidity_ratio: 15.8,
        };
        let value = serde_json::to_value(&details).unwrap();
        assert_eq!(value["cashBalance"], 150000000.0);
        assert_eq!(value["monthlyBurnRate"], 18000000.0);
    }
}
