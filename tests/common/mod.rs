use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpResponse, Responder};
use chrono::Utc;
use tokio::time::{sleep, Duration};

use charter_api::models::quote::{QuoteDates, QuoteRequest, RateCard};
use charter_api::services::pricing_service::PricingService;

pub struct TestApp;

impl TestApp {
    pub fn new() -> Self {
        TestApp
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .route("/health", web::get().to(health_check))
            .service(
                web::scope("/api")
                    .service(
                        web::scope("/auth")
                            .route("/signup", web::post().to(signup))
                            .route("/signin", web::post().to(signin))
                            .route("/session", web::get().to(unauthorized_handler)),
                    )
                    .service(
                        web::scope("/admin")
                            .route("/yachts", web::post().to(unauthorized_handler))
                            .route("/yachts/{id}", web::put().to(unauthorized_handler))
                            .route("/yachts/{id}", web::delete().to(unauthorized_handler))
                            .route("/yachts/{id}/images", web::put().to(unauthorized_handler))
                            .route("/destinations", web::post().to(unauthorized_handler))
                            .route("/destinations/{id}", web::put().to(unauthorized_handler))
                            .route("/destinations/{id}", web::delete().to(unauthorized_handler))
                            .route("/milestones", web::post().to(unauthorized_handler))
                            .route("/milestones/{id}", web::put().to(unauthorized_handler))
                            .route("/milestones/{id}", web::delete().to(unauthorized_handler))
                            .route("/contacts", web::get().to(unauthorized_handler))
                            .route("/contacts/{id}", web::put().to(unauthorized_handler))
                            .route("/contacts/{id}", web::delete().to(unauthorized_handler)),
                    )
                    .service(
                        web::scope("")
                            .route("/yachts", web::get().to(get_yachts))
                            .route("/yachts/{slug}", web::get().to(get_yacht_by_slug))
                            .route("/yachts/{slug}/quote", web::post().to(quote_charter))
                            .route("/destinations", web::get().to(get_destinations))
                            .route("/destinations/{slug}", web::get().to(not_found_handler))
                            .route("/reviews", web::get().to(get_reviews))
                            .route("/milestones", web::get().to(get_milestones))
                            .route("/settings", web::get().to(get_settings))
                            .route("/contact", web::post().to(submit_inquiry)),
                    ),
            )
    }
}

/// Rate card used by the mock quote handler: the worked example from
/// the pricing tests.
pub fn demo_rate_card() -> RateCard {
    RateCard {
        low_season_price: Some(1000.0),
        medium_season_price: Some(1500.0),
        high_season_price: Some(2000.0),
        tax_percentage: None,
        apa_percentage: None,
        crew_service_fee: Some(500.0),
        cleaning_fee: Some(250.0),
    }
}

// Mock handler functions for testing
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({"status": "ok"}))
}

async fn get_yachts() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!([]))
}

async fn get_yacht_by_slug() -> impl Responder {
    HttpResponse::NotFound().body("Yacht not found")
}

// Same validation and pricing path as the live handler, minus the
// database lookup.
async fn quote_charter(input: web::Json<QuoteRequest>) -> impl Responder {
    let (start, end) = match (input.start_date, input.end_date) {
        (Some(start), Some(end)) => (start, end),
        _ => return HttpResponse::BadRequest().body("Select charter start and end dates"),
    };

    let dates = match QuoteDates::new(start, end) {
        Some(dates) => dates,
        None => return HttpResponse::BadRequest().body("End date precedes start date"),
    };

    let booking_date = input.booking_date.unwrap_or_else(|| Utc::now().date_naive());
    let breakdown = PricingService::charter_quote(dates, &demo_rate_card(), booking_date);
    HttpResponse::Ok().json(breakdown)
}

async fn get_destinations() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!([]))
}

async fn get_reviews() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!([]))
}

async fn get_milestones() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!([]))
}

async fn get_settings() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "company_name": "Meridian Yacht Charters",
        "contact_email": "charter@meridianyachts.example",
        "default_currency": "EUR"
    }))
}

async fn submit_inquiry(input: web::Json<serde_json::Value>) -> impl Responder {
    let email = input
        .get("email")
        .and_then(|value| value.as_str())
        .unwrap_or("");
    if charter_api::routes::auth::is_valid_email(email) {
        HttpResponse::Ok().json(input.into_inner())
    } else {
        HttpResponse::BadRequest().body("Invalid email address")
    }
}

async fn signup() -> impl Responder {
    HttpResponse::BadRequest().json(serde_json::json!({"error": "Invalid input"}))
}

async fn signin() -> impl Responder {
    HttpResponse::Unauthorized().json(serde_json::json!({"error": "Invalid credentials"}))
}

async fn not_found_handler() -> impl Responder {
    HttpResponse::NotFound().body("Not found")
}

async fn unauthorized_handler() -> impl Responder {
    HttpResponse::Unauthorized().json(serde_json::json!({"error": "Unauthorized"}))
}

pub fn get_test_email() -> String {
    "test@example.com".to_string()
}

pub async fn wait_for_server_ready(port: u16) {
    for _ in 0..30 {
        if let Ok(_) = reqwest::get(&format!("http://localhost:{}/health", port)).await {
            return;
        }
        sleep(Duration::from_millis(100)).await;
    }
    panic!("Server failed to start within timeout");
}
