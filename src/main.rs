use std::{env, sync::Arc};

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use wayfarer_api::routes;
use wayfarer_api::services::planner_service::PlannerService;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
const DEFAULT_FRONTEND_ORIGIN: &str = "http://localhost:3000";

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Application starting...");

    env_logger::init_from_env(Env::default().default_filter_or("info"));
    println!("Logger initialized");

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    } else {
        println!("Release mode");
    }

    let host = env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);
    println!("Attempting to bind to {}:{}", host, port);

    let planner = Arc::new(PlannerService::from_env().expect("Failed to build planner client"));

    println!("Starting HTTP server...");

    HttpServer::new(move || {
        let frontend_origin =
            env::var("FRONTEND_ORIGIN").unwrap_or_else(|_| DEFAULT_FRONTEND_ORIGIN.to_string());

        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allowed_origin(&frontend_origin)
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .app_data(web::Data::new(planner.clone()))
            .route("/health", web::get().to(routes::health::health_check))
            .service(
                web::scope("/api")
                    .route(
                        "/preferences",
                        web::get().to(routes::preference::get_preferences),
                    )
                    .service(
                        web::scope("/itineraries")
                            .route("/generate", web::post().to(routes::itinerary::generate))
                            .route("/refine", web::post().to(routes::itinerary::refine)),
                    ),
            )
    })
    .bind((host, port))?
    .run()
    .await
}
