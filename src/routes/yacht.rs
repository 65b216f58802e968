use actix_web::{web, HttpResponse, Responder};
use futures::TryStreamExt;
use mongodb::{bson::doc, options::FindOptions, Client};
use std::sync::Arc;

use crate::db::mongo::DB_NAME;
use crate::models::yacht::Yacht;

#[derive(serde::Deserialize)]
pub struct QueryParams {
    limit: Option<u16>,
    search: Option<String>,
    featured: Option<bool>,
}

pub async fn get_yachts(
    data: web::Data<Arc<Client>>,
    params: web::Query<QueryParams>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<Yacht> = client.database(DB_NAME).collection("Yachts");

    let mut options = FindOptions::default();
    if let Some(limit) = params.limit {
        options.limit = Some(limit.into());
    }

    let mut filter = doc! {};
    if let Some(search_text) = &params.search {
        if !search_text.is_empty() {
            filter.insert(
                "name",
                doc! {
                    "$regex": format!("^{}", regex::escape(search_text)),
                    "$options": "i"
                },
            );
        }
    }
    if let Some(featured) = params.featured {
        filter.insert("featured", featured);
    }

    match collection.find(filter).with_options(options).await {
        Ok(cursor) => match cursor.try_collect::<Vec<Yacht>>().await {
            Ok(yachts) => HttpResponse::Ok().json(yachts),
            Err(err) => {
                eprintln!("Failed to collect documents: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to collect yachts.")
            }
        },
        Err(err) => {
            eprintln!("Failed to find documents: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to find yachts.")
        }
    }
}

pub async fn get_yacht_by_slug(
    path: web::Path<String>,
    data: web::Data<Arc<Client>>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<Yacht> = client.database(DB_NAME).collection("Yachts");

    let slug = path.into_inner();

    match collection.find_one(doc! { "slug": &slug }).await {
        Ok(Some(yacht)) => HttpResponse::Ok().json(yacht),
        Ok(None) => HttpResponse::NotFound().body("Yacht not found"),
        Err(err) => {
            eprintln!("Failed to retrieve yacht {}: {:?}", slug, err);
            HttpResponse::InternalServerError().body("Failed to retrieve yacht")
        }
    }
}
