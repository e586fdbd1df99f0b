//! Service-specific tests
//!
//! Each service has its own test file; shared fixtures live here.


use std::sync::Arc;
use shared::{FixedClock, MenuItemDraft};

/// Clock pinned to a known instant (2024-06-03 12:00, a Monday)
pub fn test_clock() -> Arc<FixedClock> {
    Arc::new(FixedClock::on_date(2024, 6, 3).expect("valid test date"))
}

/// A complete, valid create request
pub fn draft(name: &str, price: u64) -> MenuItemDraft {
    serde_json::from_value(serde_json::json!({
        "name": name,
        "price": price,
        "image": format!("https://img.example/{}.jpg", name.to_lowercase().replace(' ', "-")),
        "category": "Main",
        "complimentaryDrink": "Masala Chai"
    }))
    .expect("valid draft")
}
