use actix_web::{web, HttpResponse, Responder};

use crate::models::settings::SiteSettings;

pub async fn get_settings(settings: web::Data<SiteSettings>) -> impl Responder {
    HttpResponse::Ok().json(settings.get_ref())
}
