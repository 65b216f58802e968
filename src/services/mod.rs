pub mod early_bird;
pub mod image_service;
pub mod pricing_service;
