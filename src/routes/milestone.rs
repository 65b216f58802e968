use actix_web::{web, HttpResponse, Responder};
use futures::TryStreamExt;
use mongodb::{bson::doc, Client};
use std::sync::Arc;

use crate::db::mongo::DB_NAME;
use crate::models::milestone::Milestone;

pub async fn get_milestones(data: web::Data<Arc<Client>>) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<Milestone> =
        client.database(DB_NAME).collection("Milestones");

    match collection
        .find(doc! {})
        .sort(doc! { "sort_order": 1, "year": 1 })
        .await
    {
        Ok(cursor) => match cursor.try_collect::<Vec<Milestone>>().await {
            Ok(milestones) => HttpResponse::Ok().json(milestones),
            Err(err) => {
                eprintln!("Failed to collect documents: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to collect milestones.")
            }
        },
        Err(err) => {
            eprintln!("Failed to find documents: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to find milestones.")
        }
    }
}
