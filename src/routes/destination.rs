use actix_web::{web, HttpResponse, Responder};
use futures::TryStreamExt;
use mongodb::{bson::doc, options::FindOptions, Client};
use std::sync::Arc;

use crate::db::mongo::DB_NAME;
use crate::models::destination::Destination;

#[derive(serde::Deserialize)]
pub struct QueryParams {
    limit: Option<u16>,
    featured: Option<bool>,
}

pub async fn get_destinations(
    data: web::Data<Arc<Client>>,
    params: web::Query<QueryParams>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<Destination> =
        client.database(DB_NAME).collection("Destinations");

    let mut options = FindOptions::default();
    if let Some(limit) = params.limit {
        options.limit = Some(limit.into());
    }

    let filter = match params.featured {
        Some(featured) => doc! { "featured": featured },
        None => doc! {},
    };

    match collection.find(filter).with_options(options).await {
        Ok(cursor) => match cursor.try_collect::<Vec<Destination>>().await {
            Ok(destinations) => HttpResponse::Ok().json(destinations),
            Err(err) => {
                eprintln!("Failed to collect documents: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to collect destinations.")
            }
        },
        Err(err) => {
            eprintln!("Failed to find documents: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to find destinations.")
        }
    }
}

pub async fn get_destination_by_slug(
    path: web::Path<String>,
    data: web::Data<Arc<Client>>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<Destination> =
        client.database(DB_NAME).collection("Destinations");

    let slug = path.into_inner();

    match collection.find_one(doc! { "slug": &slug }).await {
        Ok(Some(destination)) => HttpResponse::Ok().json(destination),
        Ok(None) => HttpResponse::NotFound().body("Destination not found"),
        Err(err) => {
            eprintln!("Failed to retrieve destination {}: {:?}", slug, err);
            HttpResponse::InternalServerError().body("Failed to retrieve destination")
        }
    }
}
