use actix_web::{HttpResponse, Responder};
use serde::Serialize;

use crate::models::preference::PreferenceTag;

#[derive(Serialize)]
struct PreferenceInfo {
    tag: &'static str,
    label: &'static str,
    description: &'static str,
}

/*
    /api/preferences (supported travel-style tags for the frontend picker)
*/
pub async fn get_preferences() -> impl Responder {
    let preferences: Vec<PreferenceInfo> = PreferenceTag::ALL
        .iter()
        .map(|tag| PreferenceInfo {
            tag: tag.as_str(),
            label: tag.label(),
            description: tag.blurb(),
        })
        .collect();

    HttpResponse::Ok().json(preferences)
}
