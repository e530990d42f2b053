use axum::Json;
use serde::Serialize;

use crate::services::statistics::{self, Insight, ParameterStats};

#[derive(Debug, Serialize)]
pub struct StatsView {
    pub stats: &'static [ParameterStats],
    pub insights: &'static [Insight],
}

/// GET /api/stats
pub async fn dataset_overview() -> Json<StatsView> {
    Json(StatsView {
        stats: statistics::dataset_stats(),
        insights: statistics::insights(),
    })
}
