use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use charter_api::db;
use charter_api::middleware;
use charter_api::models::settings::SiteSettings;
use charter_api::routes;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Application starting...");

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    } else {
        println!("Release mode");
    }

    let host = std::env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);
    println!("Attempting to bind to {}:{}", host, port);

    let mongo_uri = std::env::var("MONGODB_URI").expect("MONGODB_URI must be set");
    let client = db::mongo::create_mongo_client(&mongo_uri).await;
    println!("MongoDB connection established");

    let settings = SiteSettings::load(&client).await;
    println!("Site settings loaded for {}", settings.company_name);

    println!("Starting HTTP server...");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .route("/health", web::get().to(routes::health::health_check))
            .app_data(web::Data::new(client.clone()))
            .app_data(web::Data::new(settings.clone()))
            .service(
                web::scope("/api")
                    .service(
                        web::scope("/auth")
                            .route("/signup", web::post().to(routes::auth::signup))
                            .route("/signin", web::post().to(routes::auth::signin))
                            .service(
                                web::scope("")
                                    .wrap(middleware::auth::AuthMiddleware)
                                    .route("/session", web::get().to(routes::auth::session)),
                            ),
                    )
                    .configure(routes::admin::config)
                    .service(
                        web::scope("")
                            .route("/yachts", web::get().to(routes::yacht::get_yachts))
                            .route(
                                "/yachts/{slug}",
                                web::get().to(routes::yacht::get_yacht_by_slug),
                            )
                            .route(
                                "/yachts/{slug}/quote",
                                web::post().to(routes::quote::quote_charter),
                            )
                            .route(
                                "/destinations",
                                web::get().to(routes::destination::get_destinations),
                            )
                            .route(
                                "/destinations/{slug}",
                                web::get().to(routes::destination::get_destination_by_slug),
                            )
                            .route("/reviews", web::get().to(routes::review::get_reviews))
                            .route(
                                "/milestones",
                                web::get().to(routes::milestone::get_milestones),
                            )
                            .route("/settings", web::get().to(routes::settings::get_settings))
                            .route("/contact", web::post().to(routes::contact::submit_inquiry)),
                    ),
            )
    })
    .bind((host, port))?
    .run()
    .await
}
