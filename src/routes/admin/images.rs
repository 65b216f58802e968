use actix_web::{web, HttpResponse, Responder};
use mongodb::bson::{doc, oid::ObjectId, DateTime};
use mongodb::Client;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::db::mongo::DB_NAME;
use crate::models::yacht::Yacht;
use crate::services::image_service::{GalleryImage, GalleryService};

#[derive(Debug, Deserialize)]
pub struct UploadRequest {
    pub images: Vec<GalleryImage>,
}

/*
    /api/admin/yachts/{id}/images
*/
pub async fn upload_images(
    path: web::Path<String>,
    data: web::Data<Arc<Client>>,
    input: web::Json<UploadRequest>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<Yacht> = client.database(DB_NAME).collection("Yachts");

    let id: ObjectId = match ObjectId::parse_str(path.into_inner().as_str()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid ID"),
    };

    match collection.find_one(doc! { "_id": id }).await {
        Ok(Some(_)) => {}
        Ok(None) => return HttpResponse::NotFound().body("Yacht not found"),
        Err(err) => {
            eprintln!("Failed to retrieve yacht: {:?}", err);
            return HttpResponse::InternalServerError().body("Failed to retrieve yacht");
        }
    }

    let service = match GalleryService::new().await {
        Ok(service) => service,
        Err(err) => {
            eprintln!("Failed to initialize image service: {}", err);
            return HttpResponse::InternalServerError().body("Image storage unavailable");
        }
    };

    let results = service
        .upload_images(input.into_inner().images, &id.to_string())
        .await;

    let uploaded: Vec<String> = results
        .iter()
        .filter_map(|result| result.as_ref().ok().cloned())
        .collect();
    let failed = results.len() - uploaded.len();

    if !uploaded.is_empty() {
        let update = doc! {
            "$push": { "images": { "$each": uploaded.clone() } },
            "$set": { "updated_at": DateTime::now() }
        };

        if let Err(err) = collection.update_one(doc! { "_id": id }, update).await {
            eprintln!("Failed to record uploaded images: {:?}", err);
            return HttpResponse::InternalServerError().body("Failed to record uploaded images");
        }
    }

    HttpResponse::Ok().json(json!({
        "uploaded": uploaded,
        "failed": failed
    }))
}
