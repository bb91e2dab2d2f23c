use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inbound trip request, matching what the frontend would otherwise send to
/// the planner service directly.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PlanRequest {
    pub destination: String,
    pub country: Option<String>,
    pub days: i32,
    #[serde(default)]
    pub preferences: Vec<String>,
    pub budget: Option<f64>,
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlanResponse {
    pub run_id: String,
    pub status: String,
    /// "ai" when the planner service produced the itinerary, "fallback" when
    /// it was synthesized locally.
    pub source: String,
    pub generated_at: DateTime<Utc>,
    pub citations: Vec<String>,
    pub itinerary: Value,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RefineRequest {
    pub run_id: String,
    pub current_itinerary: Value,
    pub refinement: String,
    pub user_id: Option<String>,
}
