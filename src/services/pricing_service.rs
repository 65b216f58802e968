use chrono::{Datelike, NaiveDate};

use crate::models::quote::{PriceBreakdown, QuoteDates, RateCard, Season, SeasonRow};
use crate::services::early_bird;

pub const DEFAULT_TAX_PERCENTAGE: f64 = 21.0;
pub const DEFAULT_APA_PERCENTAGE: f64 = 30.0;

pub struct PricingService;

impl PricingService {
    /// Season bucket for a single calendar day. Fixed marketing-season
    /// boundaries; note that September 1 still prices as high season
    /// while September 2 drops to medium.
    pub fn season_for_day(date: NaiveDate) -> Season {
        match (date.month(), date.day()) {
            (7, _) | (8, _) | (9, 1) => Season::High,
            (6, _) | (9, _) => Season::Medium,
            (5, d) if d >= 2 => Season::Medium,
            _ => Season::Low,
        }
    }

    /// Itemized quote for a validated date range and rate card. Pure:
    /// same inputs, same breakdown. Missing rates and fees price as 0.
    pub fn charter_quote(
        dates: QuoteDates,
        rates: &RateCard,
        booking_date: NaiveDate,
    ) -> PriceBreakdown {
        let mut day_counts = [0u32; 3];
        for day in dates.iter_days() {
            match Self::season_for_day(day) {
                Season::Low => day_counts[0] += 1,
                Season::Medium => day_counts[1] += 1,
                Season::High => day_counts[2] += 1,
            }
        }

        let mut rows = Vec::new();
        for (i, season) in Season::ALL.iter().enumerate() {
            if day_counts[i] == 0 {
                continue;
            }
            let daily_rate = rates.rate_for(*season).unwrap_or(0.0);
            rows.push(SeasonRow {
                season: *season,
                days: day_counts[i],
                daily_rate,
                subtotal: day_counts[i] as f64 * daily_rate,
            });
        }

        let base_fee: f64 = rows.iter().map(|row| row.subtotal).sum();

        // Season with the most days; a tie keeps the first season in
        // iteration order (low before medium before high).
        let mut primary_season = Season::Low;
        let mut most_days = 0;
        for (i, season) in Season::ALL.iter().enumerate() {
            if day_counts[i] > most_days {
                most_days = day_counts[i];
                primary_season = *season;
            }
        }

        let early_bird =
            early_bird::calculate_early_bird_price(base_fee, dates.start(), booking_date);
        let discounted_base = early_bird
            .as_ref()
            .map(|discount| discount.discounted_fee)
            .unwrap_or(base_fee);

        let tax_percentage = rates.tax_percentage.unwrap_or(DEFAULT_TAX_PERCENTAGE);
        let apa_percentage = rates.apa_percentage.unwrap_or(DEFAULT_APA_PERCENTAGE);

        let tax_amount = discounted_base * tax_percentage / 100.0;
        let apa_amount = discounted_base * apa_percentage / 100.0;
        let fixed_fees =
            rates.crew_service_fee.unwrap_or(0.0) + rates.cleaning_fee.unwrap_or(0.0);

        PriceBreakdown {
            base_fee: discounted_base,
            tax_amount,
            apa_amount,
            fixed_fees,
            total: discounted_base + tax_amount + apa_amount + fixed_fees,
            days: dates.days(),
            daily_rate: rates.rate_for(primary_season).unwrap_or(0.0),
            primary_season,
            rows,
            early_bird,
        }
    }
}
