use actix_web::{web, HttpResponse, Responder};
use futures::TryStreamExt;
use mongodb::{bson::doc, Client};
use std::sync::Arc;

use crate::db::mongo::DB_NAME;
use crate::models::review::Review;

#[derive(serde::Deserialize)]
pub struct QueryParams {
    yacht: Option<String>,
}

pub async fn get_reviews(
    data: web::Data<Arc<Client>>,
    params: web::Query<QueryParams>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<Review> = client.database(DB_NAME).collection("Reviews");

    let mut filter = doc! { "published": true };
    if let Some(yacht_slug) = &params.yacht {
        filter.insert("yacht_slug", yacht_slug);
    }

    match collection.find(filter).sort(doc! { "date": -1 }).await {
        Ok(cursor) => match cursor.try_collect::<Vec<Review>>().await {
            Ok(reviews) => HttpResponse::Ok().json(reviews),
            Err(err) => {
                eprintln!("Failed to collect documents: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to collect reviews.")
            }
        },
        Err(err) => {
            eprintln!("Failed to find documents: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to find reviews.")
        }
    }
}
