use actix_web::{web, HttpResponse, Responder};
use bson::doc;
use chrono::Utc;
use mongodb::Client;
use std::sync::Arc;

use crate::db::mongo::DB_NAME;
use crate::models::quote::{QuoteDates, QuoteRequest};
use crate::models::yacht::Yacht;
use crate::services::pricing_service::PricingService;

/*
    /api/yachts/{slug}/quote
*/
pub async fn quote_charter(
    path: web::Path<String>,
    data: web::Data<Arc<Client>>,
    input: web::Json<QuoteRequest>,
) -> impl Responder {
    let (start, end) = match (input.start_date, input.end_date) {
        (Some(start), Some(end)) => (start, end),
        _ => return HttpResponse::BadRequest().body("Select charter start and end dates"),
    };

    let dates = match QuoteDates::new(start, end) {
        Some(dates) => dates,
        None => return HttpResponse::BadRequest().body("End date precedes start date"),
    };

    let client = data.into_inner();
    let collection: mongodb::Collection<Yacht> = client.database(DB_NAME).collection("Yachts");

    let slug = path.into_inner();

    match collection.find_one(doc! { "slug": &slug }).await {
        Ok(Some(yacht)) => {
            let booking_date = input.booking_date.unwrap_or_else(|| Utc::now().date_naive());
            let breakdown = PricingService::charter_quote(dates, &yacht.rate_card(), booking_date);
            HttpResponse::Ok().json(breakdown)
        }
        Ok(None) => HttpResponse::NotFound().body("Yacht not found"),
        Err(err) => {
            eprintln!("Failed to retrieve yacht {}: {:?}", slug, err);
            HttpResponse::InternalServerError().body("Failed to retrieve yacht")
        }
    }
}
