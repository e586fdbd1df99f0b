//! Core catalog types and identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{ValidationError, ValidationResult};

/// Unique identifier for a stored menu item
///
/// Assigned by the catalog store at creation time and never reused. Serialized
/// as a bare JSON number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItemId(u64);

impl MenuItemId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MenuItemId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Self)
    }
}

/// A priced, categorized catalog entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub price: u64,
    pub image: String,
    pub category: String,
    pub complimentary_drink: String,
}

impl MenuItem {
    /// Attach a store-assigned id to a validated draft
    pub fn from_new(id: MenuItemId, item: NewMenuItem) -> Self {
        Self {
            id,
            name: item.name,
            price: item.price,
            image: item.image,
            category: item.category,
            complimentary_drink: item.complimentary_drink,
        }
    }

    /// Merge supplied fields onto this item, keeping everything else
    pub fn apply(&mut self, changes: MenuItemChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(price) = changes.price {
            self.price = price;
        }
        if let Some(image) = changes.image {
            self.image = image;
        }
        if let Some(category) = changes.category {
            self.category = category;
        }
        if let Some(drink) = changes.complimentary_drink {
            self.complimentary_drink = drink;
        }
    }
}

/// A fully populated menu item that has not been assigned an id yet
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMenuItem {
    pub name: String,
    pub price: u64,
    pub image: String,
    pub category: String,
    pub complimentary_drink: String,
}

/// Price as submitted by a client
///
/// Browser forms post numeric inputs as strings, so both JSON numbers and
/// numeric strings are accepted here and normalized by [`PriceInput::to_price`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    Exact(u64),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl PriceInput {
    pub fn to_price(&self) -> ValidationResult<u64> {
        match self {
            PriceInput::Exact(value) => Ok(*value),
            PriceInput::Integer(value) => u64::try_from(*value)
                .map_err(|_| ValidationError::invalid_price(format!("{value} is negative"))),
            PriceInput::Float(value) => {
                if value.is_finite() && *value >= 0.0 && value.fract() == 0.0 && *value <= u64::MAX as f64 {
                    Ok(*value as u64)
                } else {
                    Err(ValidationError::invalid_price(format!(
                        "{value} is not a non-negative integer"
                    )))
                }
            }
            PriceInput::Text(text) => text.trim().parse::<u64>().map_err(|_| {
                ValidationError::invalid_price(format!("'{text}' is not a non-negative integer"))
            }),
        }
    }
}

/// Raw create request body; every field is required by [`MenuItemDraft::validate`]
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemDraft {
    pub name: Option<String>,
    pub price: Option<PriceInput>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub complimentary_drink: Option<String>,
}

impl MenuItemDraft {
    /// Check that every field is present and well-formed
    pub fn validate(self) -> ValidationResult<NewMenuItem> {
        match (self.name, self.price, self.image, self.category, self.complimentary_drink) {
            (Some(name), Some(price), Some(image), Some(category), Some(complimentary_drink)) => {
                Ok(NewMenuItem {
                    name: non_empty("name", name)?,
                    price: price.to_price()?,
                    image,
                    category: non_empty("category", category)?,
                    complimentary_drink,
                })
            }
            (name, price, image, category, drink) => {
                let fields = [
                    ("name", name.is_none()),
                    ("price", price.is_none()),
                    ("image", image.is_none()),
                    ("category", category.is_none()),
                    ("complimentaryDrink", drink.is_none()),
                ]
                .into_iter()
                .filter_map(|(field, missing)| missing.then_some(field))
                .collect();
                Err(ValidationError::MissingFields { fields })
            }
        }
    }
}

impl From<NewMenuItem> for MenuItemDraft {
    fn from(item: NewMenuItem) -> Self {
        Self {
            name: Some(item.name),
            price: Some(PriceInput::Exact(item.price)),
            image: Some(item.image),
            category: Some(item.category),
            complimentary_drink: Some(item.complimentary_drink),
        }
    }
}

/// Raw partial update body; absent (or null) fields are left untouched
///
/// An `id` in the body is ignored because ids are immutable.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemPatch {
    pub name: Option<String>,
    pub price: Option<PriceInput>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub complimentary_drink: Option<String>,
}

impl MenuItemPatch {
    pub fn validate(self) -> ValidationResult<MenuItemChanges> {
        Ok(MenuItemChanges {
            name: self.name.map(|n| non_empty("name", n)).transpose()?,
            price: self.price.as_ref().map(PriceInput::to_price).transpose()?,
            image: self.image,
            category: self.category.map(|c| non_empty("category", c)).transpose()?,
            complimentary_drink: self.complimentary_drink,
        })
    }
}

/// Validated field changes for [`MenuItem::apply`]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuItemChanges {
    pub name: Option<String>,
    pub price: Option<u64>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub complimentary_drink: Option<String>,
}

impl MenuItemChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.price.is_none()
            && self.image.is_none()
            && self.category.is_none()
            && self.complimentary_drink.is_none()
    }
}

/// A recipe as returned by the external recipe source
///
/// Field aliases accept the upstream's own naming so a raw search hit can be
/// posted back for import unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalRecord {
    #[serde(default, alias = "idMeal")]
    pub external_id: Option<String>,
    #[serde(alias = "strMeal")]
    pub name: String,
    #[serde(default, alias = "strMealThumb")]
    pub thumbnail: Option<String>,
    #[serde(default, alias = "strCategory")]
    pub category: Option<String>,
}

fn non_empty(field: &'static str, value: String) -> ValidationResult<String> {
    if value.trim().is_empty() {
        Err(ValidationError::EmptyField { field })
    } else {
        Ok(value)
    }
}
