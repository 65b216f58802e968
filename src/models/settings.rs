use mongodb::bson::doc;
use mongodb::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::db::mongo::DB_NAME;

/// Site-wide configuration, loaded once at startup and handed to the
/// handlers that need it as an explicit value. Nothing re-reads the
/// collection after boot.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SiteSettings {
    pub company_name: String,
    pub contact_email: String,
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
    pub instagram: Option<String>,
    pub default_currency: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        SiteSettings {
            company_name: "Meridian Yacht Charters".to_string(),
            contact_email: "charter@meridianyachts.example".to_string(),
            phone: None,
            whatsapp: None,
            instagram: None,
            default_currency: "EUR".to_string(),
        }
    }
}

impl SiteSettings {
    pub async fn load(client: &Arc<Client>) -> Self {
        let collection: mongodb::Collection<SiteSettings> =
            client.database(DB_NAME).collection("Settings");

        match collection.find_one(doc! {}).await {
            Ok(Some(settings)) => settings,
            Ok(None) => {
                println!("No site settings document found, using defaults");
                SiteSettings::default()
            }
            Err(err) => {
                eprintln!("Failed to load site settings: {:?}", err);
                SiteSettings::default()
            }
        }
    }
}
