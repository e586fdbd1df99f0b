//! Promotion rules evaluated against a moment in time
//!
//! Three independent rules: a percentage discount on the discount weekday, a
//! complimentary drink for large groups, and a free sweet on weekend bills
//! whose discounted total reaches a threshold.

use chrono::{Datelike, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};
use shared::MenuItem;

/// Promotion configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionRules {
    pub discount_day: Weekday,
    pub weekend_days: Vec<Weekday>,
    /// Percent taken off every price on the discount day (0-100)
    pub discount_percent: u8,
    /// Smallest group size that earns the complimentary drink
    pub group_threshold: u32,
    /// Smallest discounted weekend bill that earns the free sweet
    pub sweet_threshold: u64,
}

impl Default for PromotionRules {
    fn default() -> Self {
        Self {
            discount_day: Weekday::Mon,
            weekend_days: vec![Weekday::Sat, Weekday::Sun],
            discount_percent: 15,
            group_threshold: 4,
            sweet_threshold: 1000,
        }
    }
}

/// One item as it should be displayed at a given moment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedItem {
    pub item: MenuItem,
    pub original_price: u64,
    pub discounted_price: u64,
    pub discount_applied: bool,
    /// Granted drink, present only for qualifying groups
    pub free_drink: Option<String>,
}

/// Whole-catalog view with bill-level perks
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedMenu {
    pub items: Vec<PricedItem>,
    pub bill_total: u64,
    pub discount_active: bool,
    pub weekend: bool,
    pub free_sweet: bool,
    pub group_size: u32,
}

/// Stateless promotion calculator
#[derive(Debug, Clone, Default)]
pub struct PromotionEngine {
    rules: PromotionRules,
}

impl PromotionEngine {
    pub fn new(rules: PromotionRules) -> Self {
        Self { rules }
    }

    pub fn is_discount_day(&self, moment: NaiveDateTime) -> bool {
        moment.weekday() == self.rules.discount_day
    }

    pub fn is_weekend(&self, moment: NaiveDateTime) -> bool {
        self.rules.weekend_days.contains(&moment.weekday())
    }

    /// Displayed price, rounded toward zero after the discount is applied
    pub fn discounted_price(&self, price: u64, moment: NaiveDateTime) -> u64 {
        if !self.is_discount_day(moment) {
            return price;
        }
        let keep_percent = 100u128.saturating_sub(u128::from(self.rules.discount_percent));
        // u128 keeps price * keep_percent from overflowing
        (u128::from(price) * keep_percent / 100) as u64
    }

    pub fn complimentary_drink<'a>(&self, item: &'a MenuItem, group_size: u32) -> Option<&'a str> {
        (group_size >= self.rules.group_threshold).then_some(item.complimentary_drink.as_str())
    }

    pub fn price_item(&self, item: &MenuItem, moment: NaiveDateTime, group_size: u32) -> PricedItem {
        let discounted_price = self.discounted_price(item.price, moment);
        PricedItem {
            item: item.clone(),
            original_price: item.price,
            discounted_price,
            discount_applied: self.is_discount_day(moment),
            free_drink: self.complimentary_drink(item, group_size).map(str::to_string),
        }
    }

    /// Sum of discounted prices
    pub fn bill_total(&self, items: &[MenuItem], moment: NaiveDateTime) -> u64 {
        items
            .iter()
            .map(|item| self.discounted_price(item.price, moment))
            .fold(0u64, u64::saturating_add)
    }

    pub fn free_sweet(&self, items: &[MenuItem], moment: NaiveDateTime) -> bool {
        self.is_weekend(moment) && self.bill_total(items, moment) >= self.rules.sweet_threshold
    }

    pub fn evaluate_menu(&self, items: &[MenuItem], moment: NaiveDateTime, group_size: u32) -> PricedMenu {
        let priced: Vec<PricedItem> = items
            .iter()
            .map(|item| self.price_item(item, moment, group_size))
            .collect();
        let bill_total = priced
            .iter()
            .map(|p| p.discounted_price)
            .fold(0u64, u64::saturating_add);
        let weekend = self.is_weekend(moment);

        PricedMenu {
            items: priced,
            bill_total,
            discount_active: self.is_discount_day(moment),
            weekend,
            free_sweet: weekend && bill_total >= self.rules.sweet_threshold,
            group_size,
        }
    }
}
