use actix_web::{web, HttpResponse, Responder};
use mongodb::bson::{doc, oid::ObjectId, DateTime};
use mongodb::Client;
use std::sync::Arc;

use crate::db::mongo::DB_NAME;
use crate::models::yacht::Yacht;

/*
    /api/admin/yachts
*/
pub async fn create_yacht(data: web::Data<Arc<Client>>, input: web::Json<Yacht>) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<Yacht> = client.database(DB_NAME).collection("Yachts");

    let curr_time = DateTime::now();
    let mut submission = input.into_inner();
    submission.created_at = Some(curr_time);
    submission.updated_at = Some(curr_time);

    match collection.insert_one(&submission).await {
        Ok(_) => HttpResponse::Ok().json(submission),
        Err(err) => {
            eprintln!("Failed to insert document: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to create yacht.")
        }
    }
}

pub async fn update_yacht(
    path: web::Path<String>,
    data: web::Data<Arc<Client>>,
    input: web::Json<Yacht>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<Yacht> = client.database(DB_NAME).collection("Yachts");

    let id: ObjectId = match ObjectId::parse_str(path.into_inner().as_str()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid ID"),
    };

    let mut submission = input.into_inner();
    submission.id = Some(id);
    submission.updated_at = Some(DateTime::now());

    match collection.replace_one(doc! { "_id": id }, &submission).await {
        Ok(result) if result.matched_count == 0 => {
            HttpResponse::NotFound().body("Yacht not found")
        }
        Ok(_) => HttpResponse::Ok().json(submission),
        Err(err) => {
            eprintln!("Failed to update document: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to update yacht.")
        }
    }
}

pub async fn delete_yacht(path: web::Path<String>, data: web::Data<Arc<Client>>) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<Yacht> = client.database(DB_NAME).collection("Yachts");

    let id: ObjectId = match ObjectId::parse_str(path.into_inner().as_str()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid ID"),
    };

    match collection.delete_one(doc! { "_id": id }).await {
        Ok(result) if result.deleted_count == 0 => HttpResponse::NotFound().body("Yacht not found"),
        Ok(_) => HttpResponse::Ok().body("Yacht deleted"),
        Err(err) => {
            eprintln!("Failed to delete document: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to delete yacht.")
        }
    }
}
