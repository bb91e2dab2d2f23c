use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::models::plan::{PlanRequest, PlanResponse, RefineRequest};
use crate::services::fallback_service;
use crate::services::planner_service::PlannerService;

const MAX_TRIP_DAYS: i32 = 30;

/*
    /api/itineraries/generate
*/
pub async fn generate(
    data: web::Data<Arc<PlannerService>>,
    input: web::Json<PlanRequest>,
) -> impl Responder {
    let planner = data.into_inner();
    let request = input.into_inner();

    if request.destination.trim().is_empty() {
        return HttpResponse::BadRequest().body("Destination is required");
    }
    if request.days < 1 || request.days > MAX_TRIP_DAYS {
        return HttpResponse::BadRequest()
            .body(format!("Days must be between 1 and {}", MAX_TRIP_DAYS));
    }

    match planner.generate_itinerary(&request).await {
        Ok(plan) => HttpResponse::Ok().json(PlanResponse {
            run_id: plan.run_id,
            status: "completed".to_string(),
            source: "ai".to_string(),
            generated_at: Utc::now(),
            citations: plan.citations,
            itinerary: plan.tour,
        }),
        Err(err) => {
            eprintln!(
                "Planner service unavailable: {}. Falling back to local itinerary.",
                err
            );

            let itinerary = fallback_service::generate_with_entropy(&request);
            match serde_json::to_value(&itinerary) {
                Ok(value) => HttpResponse::Ok().json(PlanResponse {
                    run_id: Uuid::new_v4().to_string(),
                    status: "completed".to_string(),
                    source: "fallback".to_string(),
                    generated_at: Utc::now(),
                    citations: vec![
                        "Synthesized locally from the built-in activity catalog".to_string(),
                    ],
                    itinerary: value,
                }),
                Err(err) => {
                    eprintln!("Failed to serialize fallback itinerary: {:?}", err);
                    HttpResponse::InternalServerError().body("Failed to generate itinerary")
                }
            }
        }
    }
}

/*
    /api/itineraries/refine
*/
pub async fn refine(
    data: web::Data<Arc<PlannerService>>,
    input: web::Json<RefineRequest>,
) -> impl Responder {
    let planner = data.into_inner();
    let request = input.into_inner();

    if request.refinement.trim().is_empty() {
        return HttpResponse::BadRequest().body("Refinement request is required");
    }

    match planner.refine_itinerary(&request).await {
        Ok(plan) => HttpResponse::Ok().json(PlanResponse {
            run_id: plan.run_id,
            status: "completed".to_string(),
            source: "ai".to_string(),
            generated_at: Utc::now(),
            citations: plan.citations,
            itinerary: plan.tour,
        }),
        Err(err) => {
            eprintln!("Failed to refine itinerary: {}", err);
            HttpResponse::ServiceUnavailable()
                .body("Planning service is unavailable; refinement cannot run right now")
        }
    }
}
