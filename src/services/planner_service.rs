//! Client for the external agentic planning service. The service is
//! optional: when `PLANNER_SERVICE_URL` is unset the API runs in
//! fallback-only mode and every generation request is synthesized locally.

use std::{env, time::Duration};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::plan::{PlanRequest, RefineRequest};

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
const PING_TIMEOUT_SECONDS: u64 = 5;

#[derive(Debug, Serialize)]
struct GeneratePayload<'a> {
    city: &'a str,
    country: &'a str,
    days: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    budget: Option<f64>,
    preferences: &'a [String],
    user_id: &'a str,
}

#[derive(Debug, Serialize)]
struct RefinePayload<'a> {
    run_id: &'a str,
    current_itinerary: &'a Value,
    refinement: &'a str,
    user_id: &'a str,
}

/// Planner response envelope: `{run_id, tour, cost, citations, status}`.
/// The `cost` telemetry object is deliberately not modeled; this proxy does
/// not forward it.
#[derive(Debug, Deserialize)]
pub struct RemotePlan {
    pub run_id: String,
    pub tour: Value,
    #[serde(default)]
    pub citations: Vec<String>,
    pub status: String,
}

pub struct PlannerService {
    http: reqwest::Client,
    base_url: Option<String>,
}

impl PlannerService {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let base_url = env::var("PLANNER_SERVICE_URL").ok();
        let timeout_seconds = env::var("PLANNER_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS);

        match &base_url {
            Some(url) => println!("Planner service configured at {}", url),
            None => println!(
                "PLANNER_SERVICE_URL not set. Running in fallback-only mode."
            ),
        }

        Self::new(base_url, timeout_seconds)
    }

    pub fn new(
        base_url: Option<String>,
        timeout_seconds: u64,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.map(|u| u.trim_end_matches('/').to_string()),
        })
    }

    pub fn is_remote_enabled(&self) -> bool {
        self.base_url.is_some()
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Ask the planner service for an itinerary. Any transport failure,
    /// non-2xx status, or failed run is an error; the caller decides whether
    /// to fall back to local synthesis.
    pub async fn generate_itinerary(
        &self,
        request: &PlanRequest,
    ) -> Result<RemotePlan, Box<dyn std::error::Error>> {
        let base = self
            .base_url
            .as_ref()
            .ok_or("Planner service is not configured")?;

        let payload = GeneratePayload {
            city: &request.destination,
            country: request.country.as_deref().unwrap_or(""),
            days: request.days,
            budget: request.budget,
            preferences: &request.preferences,
            user_id: request.user_id.as_deref().unwrap_or("anonymous"),
        };

        let response = self
            .http
            .post(format!("{}/api/v1/agentic/generate-itinerary", base))
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(format!("Planner service returned {}", response.status()).into());
        }

        let plan: RemotePlan = response.json().await?;
        if plan.status != "completed" {
            return Err(format!(
                "Planner run {} finished with status '{}'",
                plan.run_id, plan.status
            )
            .into());
        }

        Ok(plan)
    }

    /// Refine an existing itinerary. There is no local fallback for
    /// refinement; failures surface to the route handler.
    pub async fn refine_itinerary(
        &self,
        request: &RefineRequest,
    ) -> Result<RemotePlan, Box<dyn std::error::Error>> {
        let base = self
            .base_url
            .as_ref()
            .ok_or("Planner service is not configured")?;

        let payload = RefinePayload {
            run_id: &request.run_id,
            current_itinerary: &request.current_itinerary,
            refinement: &request.refinement,
            user_id: request.user_id.as_deref().unwrap_or("anonymous"),
        };

        let response = self
            .http
            .post(format!("{}/api/v1/agentic/refine-itinerary", base))
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(format!("Planner service returned {}", response.status()).into());
        }

        let plan: RemotePlan = response.json().await?;
        if plan.status != "completed" {
            return Err(format!(
                "Planner run {} finished with status '{}'",
                plan.run_id, plan.status
            )
            .into());
        }

        Ok(plan)
    }

    /// Reachability probe for health reporting, with a short deadline so the
    /// health endpoint stays responsive.
    pub async fn ping(&self) -> Result<(), Box<dyn std::error::Error>> {
        let base = self
            .base_url
            .as_ref()
            .ok_or("Planner service is not configured")?;

        let response = tokio::time::timeout(
            Duration::from_secs(PING_TIMEOUT_SECONDS),
            self.http.get(format!("{}/", base)).send(),
        )
        .await
        .map_err(|_| "Planner health check timed out")??;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(format!("Planner service returned {}", response.status()).into())
        }
    }
}
