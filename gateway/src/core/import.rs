//! Mapping from an external record to a catalog candidate

use shared::{ExternalRecord, NewMenuItem};
use crate::traits::PricingStrategy;

/// Category used when the upstream record has none
pub const FALLBACK_CATEGORY: &str = "International";

/// Complimentary drink attached to every imported item
pub const DEFAULT_PERK: &str = "Premium Soda";

/// Build a menu item candidate from an external record
///
/// Never fails: absent or blank optional fields fall back to fixed defaults.
/// The price is a placeholder from `pricing`, not a real price.
pub fn to_import_candidate(record: &ExternalRecord, pricing: &dyn PricingStrategy) -> NewMenuItem {
    let category = record
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(FALLBACK_CATEGORY);

    NewMenuItem {
        name: record.name.clone(),
        price: pricing.placeholder_price(),
        image: record.thumbnail.clone().unwrap_or_default(),
        category: category.to_string(),
        complimentary_drink: DEFAULT_PERK.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::FixedPlaceholder;

    fn record(category: Option<&str>) -> ExternalRecord {
        ExternalRecord {
            external_id: Some("52771".to_string()),
            name: "Spicy Arrabiata Penne".to_string(),
            thumbnail: Some("https://img.example/penne.jpg".to_string()),
            category: category.map(str::to_string),
        }
    }

    #[test]
    fn test_maps_all_fields() {
        let candidate = to_import_candidate(&record(Some("Vegetarian")), &FixedPlaceholder(499));

        assert_eq!(candidate.name, "Spicy Arrabiata Penne");
        assert_eq!(candidate.image, "https://img.example/penne.jpg");
        assert_eq!(candidate.category, "Vegetarian");
        assert_eq!(candidate.price, 499);
        assert_eq!(candidate.complimentary_drink, DEFAULT_PERK);
    }

    #[test]
    fn test_missing_category_uses_fallback() {
        let candidate = to_import_candidate(&record(None), &FixedPlaceholder(300));
        assert_eq!(candidate.category, FALLBACK_CATEGORY);
    }

    #[test]
    fn test_blank_category_uses_fallback() {
        let candidate = to_import_candidate(&record(Some("  ")), &FixedPlaceholder(300));
        assert_eq!(candidate.category, FALLBACK_CATEGORY);
    }

    #[test]
    fn test_missing_thumbnail_becomes_empty_image() {
        let mut bare = record(Some("Beef"));
        bare.thumbnail = None;

        let candidate = to_import_candidate(&bare, &FixedPlaceholder(300));
        assert_eq!(candidate.image, "");
    }

    #[test]
    fn test_candidate_passes_catalog_validation() {
        let candidate = to_import_candidate(&record(None), &FixedPlaceholder(650));
        let draft = shared::MenuItemDraft::from(candidate.clone());

        assert_eq!(draft.validate(), Ok(candidate));
    }
}
