use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::quote::RateCard;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Amenities {
    #[serde(default)]
    pub air_conditioning: bool,
    #[serde(default)]
    pub wifi: bool,
    #[serde(default)]
    pub jacuzzi: bool,
    #[serde(default)]
    pub stabilizers: bool,
    #[serde(default)]
    pub tender: bool,
    #[serde(default)]
    pub water_toys: bool,
    #[serde(default)]
    pub snorkeling_gear: bool,
    #[serde(default)]
    pub paddleboards: bool,
}

// Admin forms occasionally post rates as numeric strings. Parse once
// here so the rate card only ever carries valid numbers.
fn deserialize_optional_money<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::Number(n)) => Ok(n.as_f64().filter(|f| f.is_finite())),
        Some(serde_json::Value::String(s)) => Ok(s.trim().parse::<f64>().ok().filter(|f| f.is_finite())),
        _ => Ok(None),
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Yacht {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub builder: Option<String>,
    pub length_meters: Option<f64>,
    pub year_built: Option<u16>,
    pub year_refit: Option<u16>,
    pub cabins: Option<u8>,
    pub guests: Option<u8>,
    pub crew: Option<u8>,
    pub home_port: Option<String>,
    pub cruising_area: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub amenities: Amenities,
    // Ordered gallery; the admin UI persists drag-and-drop order here
    pub images: Option<Vec<String>>,
    // Rate card
    #[serde(default, deserialize_with = "deserialize_optional_money")]
    pub low_season_price: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_money")]
    pub medium_season_price: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_money")]
    pub high_season_price: Option<f64>,
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_money")]
    pub tax_percentage: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_money")]
    pub apa_percentage: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_money")]
    pub crew_service_fee: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_money")]
    pub cleaning_fee: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime>,
}

impl Yacht {
    pub fn rate_card(&self) -> RateCard {
        RateCard {
            low_season_price: self.low_season_price,
            medium_season_price: self.medium_season_price,
            high_season_price: self.high_season_price,
            tax_percentage: self.tax_percentage,
            apa_percentage: self.apa_percentage,
            crew_service_fee: self.crew_service_fee,
            cleaning_fee: self.cleaning_fee,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rates_accept_numeric_strings() {
        let yacht: Yacht = serde_json::from_value(serde_json::json!({
            "name": "Aurora",
            "slug": "aurora",
            "description": "Classic ketch",
            "low_season_price": "1500",
            "medium_season_price": 2000,
            "high_season_price": null,
        }))
        .unwrap();

        assert_eq!(yacht.low_season_price, Some(1500.0));
        assert_eq!(yacht.medium_season_price, Some(2000.0));
        assert_eq!(yacht.high_season_price, None);
    }

    #[test]
    fn junk_rates_parse_to_none() {
        let yacht: Yacht = serde_json::from_value(serde_json::json!({
            "name": "Aurora",
            "slug": "aurora",
            "description": "Classic ketch",
            "low_season_price": "not a number",
            "tax_percentage": [21],
        }))
        .unwrap();

        assert_eq!(yacht.low_season_price, None);
        assert_eq!(yacht.tax_percentage, None);
    }
}
