use serde::{Deserialize, Serialize};

/// Full itinerary returned to the frontend, whether synthesized locally or
/// reshaped from the planner service response.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Itinerary {
    pub title: String,
    pub description: String,
    pub daily_plans: Vec<DayPlan>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DayPlan {
    pub day: i32,
    pub title: String,
    pub theme: String,
    pub activities: Vec<ScheduledActivity>,
    pub meals: Meals,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ScheduledActivity {
    pub time: String,
    pub name: String,
    pub description: String,
    pub location: ActivityLocation,
    pub estimated_duration: String,
    pub estimated_cost: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ActivityLocation {
    pub address: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(rename = "priceRange", skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Meals {
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
}
