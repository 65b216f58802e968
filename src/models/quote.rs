use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Low,
    Medium,
    High,
}

impl Season {
    // Iteration order matters: ties on the primary season go to the
    // first season encountered in this order.
    pub const ALL: [Season; 3] = [Season::Low, Season::Medium, Season::High];

    pub fn label(&self) -> &'static str {
        match self {
            Season::Low => "low",
            Season::Medium => "medium",
            Season::High => "high",
        }
    }
}

/// Inclusive charter date range, validated on construction. Handlers
/// reject missing or out-of-order dates before any pricing runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteDates {
    start: NaiveDate,
    end: NaiveDate,
}

impl QuoteDates {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        if end < start {
            return None;
        }
        Some(QuoteDates { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Inclusive day count; a same-day charter counts as one day.
    pub fn days(&self) -> u32 {
        ((self.end - self.start).num_days() + 1) as u32
    }

    pub fn iter_days(&self) -> impl Iterator<Item = NaiveDate> {
        self.start.iter_days().take(self.days() as usize)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct RateCard {
    pub low_season_price: Option<f64>,
    pub medium_season_price: Option<f64>,
    pub high_season_price: Option<f64>,
    pub tax_percentage: Option<f64>,
    pub apa_percentage: Option<f64>,
    pub crew_service_fee: Option<f64>,
    pub cleaning_fee: Option<f64>,
}

impl RateCard {
    pub fn rate_for(&self, season: Season) -> Option<f64> {
        match season {
            Season::Low => self.low_season_price,
            Season::Medium => self.medium_season_price,
            Season::High => self.high_season_price,
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct SeasonRow {
    pub season: Season,
    pub days: u32,
    pub daily_rate: f64,
    pub subtotal: f64,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct EarlyBirdDiscount {
    pub original_fee: f64,
    pub discount_amount: f64,
    pub discounted_fee: f64,
    pub percentage: f64,
}

/// Itemized charter quote. `base_fee` is the charter fee after any
/// early-bird discount; `rows` itemize the pre-discount season math.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PriceBreakdown {
    pub base_fee: f64,
    pub tax_amount: f64,
    pub apa_amount: f64,
    pub fixed_fees: f64,
    pub total: f64,
    pub days: u32,
    pub daily_rate: f64,
    pub primary_season: Season,
    pub rows: Vec<SeasonRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub early_bird: Option<EarlyBirdDiscount>,
}

#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    // Defaults to today; tests and re-quotes pin it explicitly.
    pub booking_date: Option<NaiveDate>,
}
