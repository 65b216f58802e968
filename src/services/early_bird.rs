use chrono::{Datelike, NaiveDate};

use crate::models::quote::EarlyBirdDiscount;

pub const EARLY_BIRD_PERCENTAGE: f64 = 10.0;

/// Flat percentage off the base charter fee, available only while the
/// booking is made before April 1 of the charter's start year.
pub fn calculate_early_bird_price(
    base_fee: f64,
    charter_start: NaiveDate,
    booking_date: NaiveDate,
) -> Option<EarlyBirdDiscount> {
    if base_fee <= 0.0 {
        return None;
    }

    let cutoff = NaiveDate::from_ymd_opt(charter_start.year(), 4, 1)?;
    if booking_date >= cutoff {
        return None;
    }

    let discount_amount = base_fee * EARLY_BIRD_PERCENTAGE / 100.0;
    Some(EarlyBirdDiscount {
        original_fee: base_fee,
        discount_amount,
        discounted_fee: base_fee - discount_amount,
        percentage: EARLY_BIRD_PERCENTAGE,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn booking_before_cutoff_is_discounted() {
        let discount =
            calculate_early_bird_price(10000.0, date(2025, 7, 10), date(2025, 1, 15)).unwrap();

        assert_eq!(discount.original_fee, 10000.0);
        assert_eq!(discount.discount_amount, 1000.0);
        assert_eq!(discount.discounted_fee, 9000.0);
        assert_eq!(discount.percentage, EARLY_BIRD_PERCENTAGE);
    }

    #[test]
    fn booking_on_cutoff_day_is_not_discounted() {
        assert!(calculate_early_bird_price(10000.0, date(2025, 7, 10), date(2025, 4, 1)).is_none());
    }

    #[test]
    fn booking_after_cutoff_is_not_discounted() {
        assert!(calculate_early_bird_price(10000.0, date(2025, 7, 10), date(2025, 6, 1)).is_none());
    }

    #[test]
    fn cutoff_follows_the_charter_year() {
        // Booked in October for next summer: still before next year's cutoff.
        let discount = calculate_early_bird_price(8000.0, date(2026, 7, 1), date(2025, 10, 20));
        assert!(discount.is_some());
    }

    #[test]
    fn zero_base_fee_yields_no_discount() {
        assert!(calculate_early_bird_price(0.0, date(2025, 7, 10), date(2025, 1, 15)).is_none());
    }
}
