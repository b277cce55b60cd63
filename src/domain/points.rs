//! Receipt scoring.
//!
//! A receipt's score is the sum of seven independent rules. Every rule parses
//! only the fields it needs; a field that does not parse makes that one rule
//! contribute zero and never fails the whole calculation.

use super::receipt::{Item, Receipt};
use chrono::{NaiveTime, Timelike};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use serde::Serialize;

pub const ROUND_DOLLAR_POINTS: u64 = 50;
pub const QUARTER_MULTIPLE_POINTS: u64 = 25;
pub const ITEM_PAIR_POINTS: u64 = 5;
pub const ODD_DAY_POINTS: u64 = 6;
pub const AFTERNOON_POINTS: u64 = 10;

/// Start of the afternoon bonus window, inclusive (14:00).
pub const AFTERNOON_WINDOW_START: u32 = 14 * 60;
/// End of the afternoon bonus window, exclusive (16:00).
pub const AFTERNOON_WINDOW_END: u32 = 16 * 60;

const QUARTER: Decimal = dec!(0.25);
const DESCRIPTION_PRICE_MULTIPLIER: Decimal = dec!(0.2);

const TIME_FORMAT: &str = "%H:%M";

/// Per-rule contributions to a receipt's score.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy, Default)]
pub struct PointsBreakdown {
    pub retailer: u64,
    pub round_dollar: u64,
    pub quarter_multiple: u64,
    pub item_pairs: u64,
    pub descriptions: u64,
    pub odd_day: u64,
    pub afternoon: u64,
}

impl PointsBreakdown {
    pub fn for_receipt(receipt: &Receipt) -> Self {
        Self {
            retailer: retailer_points(&receipt.retailer),
            round_dollar: round_dollar_points(&receipt.total),
            quarter_multiple: quarter_multiple_points(&receipt.total),
            item_pairs: item_pair_points(&receipt.items),
            descriptions: description_points(&receipt.items),
            odd_day: odd_day_points(&receipt.purchase_date),
            afternoon: afternoon_points(&receipt.purchase_time),
        }
    }

    pub fn total(&self) -> u64 {
        [
            self.retailer,
            self.round_dollar,
            self.quarter_multiple,
            self.item_pairs,
            self.descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .fold(0, u64::saturating_add)
    }
}

/// Computes the points awarded for a receipt. Deterministic and infallible.
pub fn calculate_points(receipt: &Receipt) -> u64 {
    PointsBreakdown::for_receipt(receipt).total()
}

/// One point per ASCII letter or digit in the retailer name.
pub fn retailer_points(retailer: &str) -> u64 {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as u64
}

/// 50 points if the total has no cents.
pub fn round_dollar_points(total: &str) -> u64 {
    match parse_money(total) {
        Some(total) if total.fract().is_zero() => ROUND_DOLLAR_POINTS,
        _ => 0,
    }
}

/// 25 points if the total is a multiple of 0.25.
pub fn quarter_multiple_points(total: &str) -> u64 {
    match parse_money(total) {
        Some(total) if (total % QUARTER).is_zero() => QUARTER_MULTIPLE_POINTS,
        _ => 0,
    }
}

/// 5 points for every full pair of items.
pub fn item_pair_points(items: &[Item]) -> u64 {
    (items.len() / 2) as u64 * ITEM_PAIR_POINTS
}

/// Sum of [`item_description_points`] over all items.
pub fn description_points(items: &[Item]) -> u64 {
    items
        .iter()
        .map(item_description_points)
        .fold(0, u64::saturating_add)
}

/// `ceil(price * 0.2)` when the trimmed description length is a multiple of 3.
///
/// Length is measured in UTF-8 bytes. Prices that do not parse, or that round
/// up to a negative amount, earn nothing.
pub fn item_description_points(item: &Item) -> u64 {
    if item.short_description.trim().len() % 3 != 0 {
        return 0;
    }
    parse_money(&item.price)
        .map(|price| (price * DESCRIPTION_PRICE_MULTIPLIER).ceil())
        .filter(|bonus| bonus.is_sign_positive())
        .and_then(|bonus| bonus.to_u64())
        .unwrap_or(0)
}

/// 6 points if the day of the purchase date is odd.
///
/// Only the `YYYY-MM-DD` shape is checked; the day is not validated against
/// the month, so `2022-02-31` still counts as odd.
pub fn odd_day_points(purchase_date: &str) -> u64 {
    match purchase_day(purchase_date) {
        Some(day) if day % 2 == 1 => ODD_DAY_POINTS,
        _ => 0,
    }
}

fn purchase_day(purchase_date: &str) -> Option<u32> {
    let mut parts = purchase_date.split('-');
    let (year, month, day) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    let digits = |part: &str, width: usize| {
        part.len() == width && part.bytes().all(|b| b.is_ascii_digit())
    };
    if !(digits(year, 4) && digits(month, 2) && digits(day, 2)) {
        return None;
    }
    day.parse().ok()
}

/// 10 points if the purchase time falls in `[14:00, 16:00)`.
pub fn afternoon_points(purchase_time: &str) -> u64 {
    let Ok(time) = NaiveTime::parse_from_str(purchase_time, TIME_FORMAT) else {
        return 0;
    };
    let minutes = time.hour() * 60 + time.minute();
    if (AFTERNOON_WINDOW_START..AFTERNOON_WINDOW_END).contains(&minutes) {
        AFTERNOON_POINTS
    } else {
        0
    }
}

/// Parses a plain decimal amount. Values beyond `Decimal`'s range or with more
/// than 28 fractional digits are rejected rather than rounded.
fn parse_money(value: &str) -> Option<Decimal> {
    Decimal::from_str_exact(value).ok()
}
