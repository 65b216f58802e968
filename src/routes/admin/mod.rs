use actix_web::web;

use crate::middleware::auth::AuthMiddleware;
use crate::middleware::role_auth::RequireRole;
use crate::models::account::UserRole;

pub mod contacts;
pub mod destinations;
pub mod images;
pub mod milestones;
pub mod yachts;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        // Later wrap runs first: AuthMiddleware decodes the token and
        // stashes the claims RequireRole reads.
        web::scope("/admin")
            .wrap(RequireRole::new(UserRole::Admin))
            .wrap(AuthMiddleware)
            .route("/yachts", web::post().to(yachts::create_yacht))
            .route("/yachts/{id}", web::put().to(yachts::update_yacht))
            .route("/yachts/{id}", web::delete().to(yachts::delete_yacht))
            .route("/yachts/{id}/images", web::put().to(images::upload_images))
            .route(
                "/destinations",
                web::post().to(destinations::create_destination),
            )
            .route(
                "/destinations/{id}",
                web::put().to(destinations::update_destination),
            )
            .route(
                "/destinations/{id}",
                web::delete().to(destinations::delete_destination),
            )
            .route("/milestones", web::post().to(milestones::create_milestone))
            .route(
                "/milestones/{id}",
                web::put().to(milestones::update_milestone),
            )
            .route(
                "/milestones/{id}",
                web::delete().to(milestones::delete_milestone),
            )
            .route("/contacts", web::get().to(contacts::list_inquiries))
            .route("/contacts/{id}", web::put().to(contacts::update_inquiry))
            .route("/contacts/{id}", web::delete().to(contacts::delete_inquiry)),
    );
}
