// Metrics aggregator - list and detail projections over the snapshot
use crate::domain::metrics::{
    MetricsSnapshot, SimpleTile, TileDetail, TileId, TileTrends,
};
use std::collections::HashMap;

/// Company header plus the three tile projections for the home page.
#[derive(Debug, Clone)]
pub struct TileList {
    pub company_name: String,
    pub last_updated: String,
    pub tiles: Vec<SimpleTile>,
}

#[derive(Clone)]
pub struct MetricsService {
    snapshot: MetricsSnapshot,
    trends: HashMap<String, TileTrends>,
}

impl MetricsService {
    pub fn new(snapshot: MetricsSnapshot, trends: HashMap<String, TileTrends>) -> Self {
        Self { snapshot, trends }
    }

    pub fn snapshot(&self) -> &MetricsSnapshot {
        &self.snapshot
    }

    pub fn list_tiles(&self) -> TileList {
        let tiles = TileId::ALL
            .iter()
            .map(|&tile| {
                let (status, trend, message) = self.snapshot.tile_status(tile);
                SimpleTile {
                    id: tile.as_str().to_string(),
                    title: tile.title().to_string(),
                    status,
                    trend,
                    message: message.to_string(),
                }
            })
            .collect();

        TileList {
            company_name: self.snapshot.company_name.clone(),
            last_updated: self.snapshot.last_updated.clone(),
            tiles,
        }
    }

    /// Detail projection for a known tile id; `None` for anything else.
    pub fn tile_detail(&self, id: &str) -> Option<TileDetail> {
        let tile = TileId::parse(id)?;
        let (status, trend, message) = self.snapshot.tile_status(tile);
        let trends = self
            .trends
            .get(tile.as_str())
            .cloned()
            .unwrap_or_default();

        Some(TileDetail {
            id: tile.as_str().to_string(),
            title: tile.title().to_string(),
            status,
            trend,
            message: message.to_string(),
            trend_data: trends.trend_data,
            insights: trends.insights,
            ai_summary: trends.ai_summary,
            details: self.snapshot.details_json(tile),
        })
    }
}
