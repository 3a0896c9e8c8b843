//! Submitted filter values, parsed from the JSON-encoded `filters` query
//! parameter or assembled programmatically.

use std::collections::HashMap;
use std::fmt;

use uuid::Uuid;

use crate::errors::FilterError;

/// A single bindable parameter value.
///
/// Equality is the value's native equality, which is what decides whether a
/// min/max pair collapses into a single equality predicate.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Uuid(Uuid),
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Uuid(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for ScalarValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ScalarValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for ScalarValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for ScalarValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Uuid> for ScalarValue {
    fn from(value: Uuid) -> Self {
        Self::Uuid(value)
    }
}

impl From<ScalarValue> for sea_orm::Value {
    fn from(value: ScalarValue) -> Self {
        match value {
            ScalarValue::String(s) => Self::from(s),
            ScalarValue::Int(i) => Self::from(i),
            ScalarValue::Float(f) => Self::from(f),
            ScalarValue::Bool(b) => Self::from(b),
            ScalarValue::Uuid(u) => Self::from(u),
        }
    }
}

/// One submitted filter value; the shape must match the descriptor's
/// comparison kind for a predicate to be emitted.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    /// Value for `Strict`, `Like` and `HavingLike` filters
    Scalar(ScalarValue),
    /// Value for `DateRange` filters; either bound may be absent.
    /// Bounds are date strings (`YYYY-MM-DD`); the applicator appends the
    /// day's start/end time when binding.
    DateRange {
        from: Option<String>,
        to: Option<String>,
    },
    /// Value for `MinMax` filters; either bound may be absent
    MinMax {
        min: Option<ScalarValue>,
        max: Option<ScalarValue>,
    },
}

impl FilterValue {
    #[must_use]
    pub fn scalar(value: impl Into<ScalarValue>) -> Self {
        Self::Scalar(value.into())
    }

    #[must_use]
    pub fn date_range(from: Option<&str>, to: Option<&str>) -> Self {
        Self::DateRange {
            from: from.map(ToString::to_string),
            to: to.map(ToString::to_string),
        }
    }

    #[must_use]
    pub fn min_max(min: Option<ScalarValue>, max: Option<ScalarValue>) -> Self {
        Self::MinMax { min, max }
    }
}

/// The per-request mapping from filter name to submitted value.
///
/// Constructed fresh for every request, either programmatically or from the
/// JSON-encoded `filters` query parameter via [`FilterValues::from_json`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterValues {
    values: HashMap<String, FilterValue>,
}

impl FilterValues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn get(&self, filter_name: &str) -> Option<&FilterValue> {
        self.values.get(filter_name)
    }

    pub fn insert(&mut self, filter_name: impl Into<String>, value: FilterValue) {
        self.values.insert(filter_name.into(), value);
    }

    /// Chainable [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, filter_name: impl Into<String>, value: FilterValue) -> Self {
        self.insert(filter_name, value);
        self
    }

    /// Parses the JSON-encoded `filters` query parameter.
    ///
    /// The parameter is a JSON object keyed by filter name. Scalar entries
    /// become [`FilterValue::Scalar`] (strings that parse as UUIDs bind as
    /// UUIDs); objects carrying `min_field`/`max_field` become
    /// [`FilterValue::MinMax`]; objects carrying `from`/`to` become
    /// [`FilterValue::DateRange`]. Entries of any other shape are skipped.
    ///
    /// ```rust
    /// use gridfilter::FilterValues;
    ///
    /// let values = FilterValues::from_json(
    ///     r#"{"reference": "XKB", "total_paid": {"min_field": 10, "max_field": 50}}"#,
    /// ).unwrap();
    /// assert_eq!(values.len(), 2);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidFilterJson`] when the parameter is not a
    /// JSON object.
    pub fn from_json(raw: &str) -> Result<Self, FilterError> {
        let parsed: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(raw).map_err(|err| FilterError::invalid_filter_json(err.to_string()))?;

        let mut values = Self::new();
        for (filter_name, value) in parsed {
            match filter_value_from_json(&value) {
                Some(filter_value) => values.insert(filter_name, filter_value),
                None => {
                    tracing::debug!(filter = %filter_name, "unsupported filter value shape, skipping");
                }
            }
        }
        Ok(values)
    }
}

fn filter_value_from_json(value: &serde_json::Value) -> Option<FilterValue> {
    match value {
        serde_json::Value::Object(fields) => {
            if fields.contains_key("min_field") || fields.contains_key("max_field") {
                return Some(FilterValue::MinMax {
                    min: fields.get("min_field").and_then(scalar_from_json),
                    max: fields.get("max_field").and_then(scalar_from_json),
                });
            }
            if fields.contains_key("from") || fields.contains_key("to") {
                return Some(FilterValue::DateRange {
                    from: fields.get("from").and_then(date_bound_from_json),
                    to: fields.get("to").and_then(date_bound_from_json),
                });
            }
            None
        }
        _ => scalar_from_json(value).map(FilterValue::Scalar),
    }
}

fn scalar_from_json(value: &serde_json::Value) -> Option<ScalarValue> {
    match value {
        serde_json::Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            // Strings that look like UUIDs bind as UUIDs (id columns)
            if let Ok(uuid) = Uuid::parse_str(trimmed) {
                return Some(ScalarValue::Uuid(uuid));
            }
            Some(ScalarValue::String(trimmed.to_string()))
        }
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                Some(ScalarValue::Int(int))
            } else {
                number.as_f64().map(ScalarValue::Float)
            }
        }
        serde_json::Value::Bool(b) => Some(ScalarValue::Bool(*b)),
        _ => None,
    }
}

fn date_bound_from_json(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        _ => None,
    }
}
