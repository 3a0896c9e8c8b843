use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::errors::FilterError;
use crate::filtering::values::FilterValues;

/// Query parameters for filtering a grid listing.
///
/// The `filters` parameter is a JSON-encoded object keyed by filter name.
/// Value shape depends on the filter's comparison kind:
/// - **Scalar filters (equality / substring):** `{"reference": "XKB"}`
/// - **Date ranges:** `{"date_add": {"from": "2020-01-01", "to": "2020-01-31"}}`,
///   either bound optional
/// - **Numeric ranges:** `{"total_paid": {"min_field": 10, "max_field": 50}}`,
///   either bound optional
///
/// Sorting and pagination parameters belong to the listing layer, not to
/// filtering, and are deliberately not part of this struct.
#[derive(Deserialize, IntoParams, ToSchema, Default)]
#[into_params(parameter_in = Query)]
pub struct GridFilterOptions {
    /// JSON-encoded filter values keyed by filter name.
    #[param(example = json!({
        "reference": "XKB",
        "date_add": {"from": "2020-01-01", "to": "2020-01-31"},
        "total_paid": {"min_field": 10, "max_field": 50}
    }))]
    pub filters: Option<String>,
}

impl GridFilterOptions {
    /// Parses the `filters` parameter into [`FilterValues`].
    ///
    /// An absent parameter yields an empty value set (the applicator treats
    /// that as a no-op).
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidFilterJson`] when the parameter is
    /// present but not a JSON object.
    pub fn filter_values(&self) -> Result<FilterValues, FilterError> {
        self.filters
            .as_deref()
            .map_or_else(|| Ok(FilterValues::new()), FilterValues::from_json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filtering::values::FilterValue;

    #[test]
    fn test_absent_parameter_yields_empty_values() {
        let options = GridFilterOptions::default();
        let values = options.filter_values().unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn test_present_parameter_is_parsed() {
        let options = GridFilterOptions {
            filters: Some(r#"{"reference": "XKB"}"#.to_string()),
        };
        let values = options.filter_values().unwrap();
        assert_eq!(values.get("reference"), Some(&FilterValue::scalar("XKB")));
    }

    #[test]
    fn test_malformed_parameter_is_an_error() {
        let options = GridFilterOptions {
            filters: Some("{broken".to_string()),
        };
        assert!(options.filter_values().is_err());
    }
}
