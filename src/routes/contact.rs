use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use mongodb::{bson::doc, Client};
use std::sync::Arc;

use crate::db::mongo::DB_NAME;
use crate::models::contact::ContactInquiry;
use crate::models::settings::SiteSettings;
use crate::routes::auth::is_valid_email;

/*
    /api/contact
*/
pub async fn submit_inquiry(
    data: web::Data<Arc<Client>>,
    settings: web::Data<SiteSettings>,
    input: web::Json<ContactInquiry>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<ContactInquiry> =
        client.database(DB_NAME).collection("ContactInquiries");

    if !is_valid_email(&input.email) {
        return HttpResponse::BadRequest().body("Invalid email address");
    }

    let curr_time = Utc::now();
    let mut submission = input.into_inner();
    submission.handled = false;
    submission.created_at = Some(curr_time);
    submission.updated_at = Some(curr_time);

    match collection.insert_one(&submission).await {
        Ok(_) => {
            // Follow-up happens by hand; the office inbox is where
            // these get picked up.
            println!(
                "New charter inquiry from {} for {}",
                submission.email, settings.contact_email
            );
            HttpResponse::Ok().json(submission)
        }
        Err(err) => {
            eprintln!("Failed to insert document: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to submit inquiry.")
        }
    }
}
