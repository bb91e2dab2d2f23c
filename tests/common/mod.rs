use actix_web::{web, App};
use std::sync::Arc;

use wayfarer_api::routes;
use wayfarer_api::services::planner_service::PlannerService;

// Nothing listens on this port, so upstream calls fail fast.
#[allow(dead_code)]
pub const UNREACHABLE_PLANNER_URL: &str = "http://127.0.0.1:1";

#[allow(dead_code)]
pub fn planner(base_url: Option<&str>) -> Arc<PlannerService> {
    Arc::new(
        PlannerService::new(base_url.map(|s| s.to_string()), 2)
            .expect("failed to build planner client"),
    )
}

/// Minimal planner stand-in: accepts connections on an ephemeral port and
/// answers every request with the given status line and JSON body. Returns
/// the base URL to point the client at.
#[allow(dead_code)]
pub fn spawn_stub_planner(status_line: &'static str, body: &'static str) -> String {
    use std::io::{Read, Write};

    let listener =
        std::net::TcpListener::bind("127.0.0.1:0").expect("failed to bind stub listener");
    let addr = listener.local_addr().expect("failed to read stub address");

    std::thread::spawn(move || {
        for stream in listener.incoming() {
            let mut stream = match stream {
                Ok(stream) => stream,
                Err(_) => break,
            };

            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            while let Ok(n) = stream.read(&mut buf) {
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                if request_complete(&request) {
                    break;
                }
            }

            let response = format!(
                "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    format!("http://{}", addr)
}

#[allow(dead_code)]
fn request_complete(request: &[u8]) -> bool {
    let header_end = match request.windows(4).position(|w| w == b"\r\n\r\n") {
        Some(pos) => pos,
        None => return false,
    };

    let headers = String::from_utf8_lossy(&request[..header_end]);
    let content_length = headers
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.eq_ignore_ascii_case("content-length") {
                value.trim().parse::<usize>().ok()
            } else {
                None
            }
        })
        .unwrap_or(0);

    request.len() >= header_end + 4 + content_length
}

#[allow(dead_code)]
pub fn create_app(
    planner: Arc<PlannerService>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(planner))
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
}
