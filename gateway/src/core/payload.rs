//! Parsing of the upstream search payload

use serde_json::Value;

use shared::ExternalRecord;
use crate::error::{GatewayError, GatewayResult};

/// Field of the search payload that holds the result list
pub const RESULTS_FIELD: &str = "meals";

/// Extract external records from a search payload
///
/// A missing or null result list means no matches. Entries without a usable
/// name are skipped; any other shape is malformed.
pub fn parse_search_payload(payload: &Value) -> GatewayResult<Vec<ExternalRecord>> {
    let object = payload
        .as_object()
        .ok_or_else(|| GatewayError::malformed("search payload is not a JSON object"))?;

    let entries = match object.get(RESULTS_FIELD) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(entries)) => entries,
        Some(_) => {
            return Err(GatewayError::malformed(format!("'{RESULTS_FIELD}' is not a list")));
        }
    };

    Ok(entries
        .iter()
        .filter_map(|entry| serde_json::from_value::<ExternalRecord>(entry.clone()).ok())
        .filter(|record| !record.name.trim().is_empty())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_results_field_is_empty() {
        assert!(parse_search_payload(&json!({})).unwrap().is_empty());
    }

    #[test]
    fn test_null_results_field_is_empty() {
        assert!(parse_search_payload(&json!({ "meals": null })).unwrap().is_empty());
    }

    #[test]
    fn test_parses_upstream_records() {
        let payload = json!({
            "meals": [
                {
                    "idMeal": "52772",
                    "strMeal": "Teriyaki Chicken Casserole",
                    "strMealThumb": "https://img.example/teriyaki.jpg",
                    "strCategory": "Chicken",
                    "strArea": "Japanese"
                },
                { "idMeal": "52773", "strMeal": "Honey Teriyaki Salmon", "strCategory": null }
            ]
        });

        let records = parse_search_payload(&payload).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].external_id.as_deref(), Some("52772"));
        assert_eq!(records[0].name, "Teriyaki Chicken Casserole");
        assert_eq!(records[0].category.as_deref(), Some("Chicken"));
        assert_eq!(records[1].thumbnail, None);
        assert_eq!(records[1].category, None);
    }

    #[test]
    fn test_nameless_entries_are_skipped() {
        let payload = json!({
            "meals": [
                { "idMeal": "1" },
                { "idMeal": "2", "strMeal": null },
                { "idMeal": "3", "strMeal": "   " },
                { "idMeal": "4", "strMeal": "Dal Makhani" }
            ]
        });

        let records = parse_search_payload(&payload).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Dal Makhani");
    }

    #[test]
    fn test_non_object_payload_is_malformed() {
        let err = parse_search_payload(&json!(["meals"])).unwrap_err();
        assert!(matches!(err, GatewayError::Malformed { .. }));
    }

    #[test]
    fn test_non_list_results_field_is_malformed() {
        let err = parse_search_payload(&json!({ "meals": "none" })).unwrap_err();
        assert!(matches!(err, GatewayError::Malformed { .. }));
    }
}
