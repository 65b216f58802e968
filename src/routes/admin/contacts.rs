use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::Client;
use serde::Deserialize;
use std::sync::Arc;

use crate::db::mongo::DB_NAME;
use crate::models::contact::ContactInquiry;

#[derive(Deserialize)]
pub struct QueryParams {
    handled: Option<bool>,
}

/*
    /api/admin/contacts
*/
pub async fn list_inquiries(
    data: web::Data<Arc<Client>>,
    params: web::Query<QueryParams>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<ContactInquiry> =
        client.database(DB_NAME).collection("ContactInquiries");

    let filter = match params.handled {
        Some(handled) => doc! { "handled": handled },
        None => doc! {},
    };

    match collection.find(filter).sort(doc! { "created_at": -1 }).await {
        Ok(cursor) => match cursor.try_collect::<Vec<ContactInquiry>>().await {
            Ok(inquiries) => HttpResponse::Ok().json(inquiries),
            Err(err) => {
                eprintln!("Failed to collect documents: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to collect inquiries.")
            }
        },
        Err(err) => {
            eprintln!("Failed to find documents: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to find inquiries.")
        }
    }
}

#[derive(Deserialize)]
pub struct InquiryUpdate {
    pub handled: bool,
}

pub async fn update_inquiry(
    path: web::Path<String>,
    data: web::Data<Arc<Client>>,
    input: web::Json<InquiryUpdate>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<ContactInquiry> =
        client.database(DB_NAME).collection("ContactInquiries");

    let id: ObjectId = match ObjectId::parse_str(path.into_inner().as_str()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid ID"),
    };

    let update = doc! {
        "$set": {
            "handled": input.handled,
            "updated_at": Utc::now().to_rfc3339()
        }
    };

    match collection.update_one(doc! { "_id": id }, update).await {
        Ok(result) if result.matched_count == 0 => {
            HttpResponse::NotFound().body("Inquiry not found")
        }
        Ok(_) => HttpResponse::Ok().body("Inquiry updated"),
        Err(err) => {
            eprintln!("Failed to update document: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to update inquiry.")
        }
    }
}

pub async fn delete_inquiry(
    path: web::Path<String>,
    data: web::Data<Arc<Client>>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<ContactInquiry> =
        client.database(DB_NAME).collection("ContactInquiries");

    let id: ObjectId = match ObjectId::parse_str(path.into_inner().as_str()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid ID"),
    };

    match collection.delete_one(doc! { "_id": id }).await {
        Ok(result) if result.deleted_count == 0 => {
            HttpResponse::NotFound().body("Inquiry not found")
        }
        Ok(_) => HttpResponse::Ok().body("Inquiry deleted"),
        Err(err) => {
            eprintln!("Failed to delete document: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to delete inquiry.")
        }
    }
}
