#![allow(dead_code)]

use rand::Rng;
use rand::seq::SliceRandom;
use receipt_points::domain::receipt::{Item, Receipt};

const RETAILERS: &[&str] = &["Target", "M&M Corner Market", "Walgreens", "7-Eleven", "", "Café Ñandú"];
const DESCRIPTIONS: &[&str] = &["Gatorade", "Emils Cheese Pizza", "  Pepsi - 12-oz  ", "", "abc", "Dasani"];

pub fn item(description: &str, price: &str) -> Item {
    Item {
        short_description: description.to_string(),
        price: price.to_string(),
    }
}

pub fn target_receipt() -> Receipt {
    Receipt {
        retailer: "Target".to_string(),
        purchase_date: "2022-01-01".to_string(),
        purchase_time: "13:01".to_string(),
        items: vec![
            item("Mountain Dew 12PK", "6.49"),
            item("Emils Cheese Pizza", "12.25"),
            item("Knorr Creamy Chicken", "1.26"),
            item("Doritos Nacho Cheese", "3.35"),
            item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
        ],
        total: "35.35".to_string(),
    }
}

fn random_money(rng: &mut impl Rng) -> String {
    match rng.gen_range(0..10) {
        0 => "not-a-number".to_string(),
        1 => format!("-{}.{:02}", rng.gen_range(0..100), rng.gen_range(0..100)),
        _ => format!("{}.{:02}", rng.gen_range(0..1000), rng.gen_range(0..100)),
    }
}

/// Builds a receipt with a mix of valid and malformed fields.
pub fn random_receipt(rng: &mut impl Rng) -> Receipt {
    let item_count = rng.gen_range(0..8);
    let items = (0..item_count)
        .map(|_| Item {
            short_description: DESCRIPTIONS.choose(rng).unwrap().to_string(),
            price: random_money(rng),
        })
        .collect();

    let purchase_date = if rng.gen_bool(0.9) {
        format!("2022-{:02}-{:02}", rng.gen_range(1..=12), rng.gen_range(1..=28))
    } else {
        "2022-13-45".to_string()
    };
    let purchase_time = if rng.gen_bool(0.9) {
        format!("{:02}:{:02}", rng.gen_range(0..24), rng.gen_range(0..60))
    } else {
        "noon".to_string()
    };

    Receipt {
        retailer: RETAILERS.choose(rng).unwrap().to_string(),
        purchase_date,
        purchase_time,
        items,
        total: random_money(rng),
    }
}
