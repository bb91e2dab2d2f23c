use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::collections::HashMap;
use std::env;
use std::sync::Arc;

use crate::services::planner_service::PlannerService;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

pub async fn health_check(data: web::Data<Arc<PlannerService>>) -> impl Responder {
    let planner = data.into_inner();

    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let planner_result = check_planner(&planner).await;
    health
        .services
        .insert("planner".to_string(), planner_result.clone());

    // Local synthesis is catalog-driven and always available.
    health.services.insert(
        "fallback_generator".to_string(),
        ServiceStatus {
            status: "ok".to_string(),
            details: Some("Local itinerary synthesis available".to_string()),
        },
    );

    // Generation keeps working through the fallback, so a missing planner
    // degrades the service rather than taking it down.
    if planner_result.status != "ok" {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}

async fn check_planner(planner: &PlannerService) -> ServiceStatus {
    if !planner.is_remote_enabled() {
        return ServiceStatus {
            status: "disabled".to_string(),
            details: Some("PLANNER_SERVICE_URL not configured".to_string()),
        };
    }

    match planner.ping().await {
        Ok(_) => ServiceStatus {
            status: "ok".to_string(),
            details: Some("Planner service reachable".to_string()),
        },
        Err(e) => {
            eprintln!("Planner health check failed: {}", e);

            ServiceStatus {
                status: "error".to_string(),
                details: Some(format!("Failed to reach planner service: {}", e)),
            }
        }
    }
}
