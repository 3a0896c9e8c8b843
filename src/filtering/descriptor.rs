//! Grid filter configuration: which columns can be filtered, and how.

use std::collections::HashSet;

use crate::errors::FilterError;

/// The matching strategy for a single filterable column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonKind {
    /// Exact equality (`field = :name`)
    Strict,
    /// Substring match (`field LIKE :name`, value wrapped in `%` wildcards)
    Like,
    /// Substring match appended to the HAVING conjunction instead of WHERE,
    /// for columns computed in the SELECT clause
    HavingLike,
    /// Inclusive date range with independent `from`/`to` bounds
    DateRange,
    /// Inclusive numeric range with independent `min`/`max` bounds
    MinMax,
}

/// Static configuration describing how one grid column can be filtered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterDescriptor {
    /// The column or SQL expression the predicate targets (e.g. `o.reference`)
    pub sql_field: String,
    /// The key submitted values are looked up by; unique within a grid
    pub filter_name: String,
    /// The matching strategy
    pub comparison: ComparisonKind,
}

/// An ordered set of [`FilterDescriptor`]s for one grid.
///
/// Built once per listing at configuration time and reused across requests.
/// Descriptor order defines predicate order.
///
/// ```rust
/// use gridfilter::{ComparisonKind, SqlFilters};
///
/// let filters = SqlFilters::new()
///     .add_filter("o.id_order", "id_order", ComparisonKind::Strict)
///     .add_filter("c.company", "company", ComparisonKind::Like)
///     .add_filter("o.date_add", "date_add", ComparisonKind::DateRange);
///
/// assert_eq!(filters.filters().len(), 3);
/// filters.validate().expect("filter names are unique");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SqlFilters {
    filters: Vec<FilterDescriptor>,
}

impl SqlFilters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a descriptor to the set.
    #[must_use]
    pub fn add_filter(
        mut self,
        sql_field: impl Into<String>,
        filter_name: impl Into<String>,
        comparison: ComparisonKind,
    ) -> Self {
        self.filters.push(FilterDescriptor {
            sql_field: sql_field.into(),
            filter_name: filter_name.into(),
            comparison,
        });
        self
    }

    /// The descriptors, in the order they were added.
    #[must_use]
    pub fn filters(&self) -> &[FilterDescriptor] {
        &self.filters
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Checks the caller-owned invariant that every `filter_name` is unique
    /// within the set.
    ///
    /// Grid configuration code should call this at setup time; a duplicate
    /// name makes value lookup ambiguous.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::DuplicateFilterName`] naming the first
    /// duplicated filter name.
    pub fn validate(&self) -> Result<(), FilterError> {
        let mut seen = HashSet::new();
        for descriptor in &self.filters {
            if !seen.insert(descriptor.filter_name.as_str()) {
                return Err(FilterError::duplicate_filter_name(&descriptor.filter_name));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_filter_preserves_order() {
        let filters = SqlFilters::new()
            .add_filter("a.one", "one", ComparisonKind::Strict)
            .add_filter("a.two", "two", ComparisonKind::Like)
            .add_filter("a.three", "three", ComparisonKind::MinMax);

        let names: Vec<&str> = filters
            .filters()
            .iter()
            .map(|f| f.filter_name.as_str())
            .collect();
        assert_eq!(names, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_validate_accepts_unique_names() {
        let filters = SqlFilters::new()
            .add_filter("a.one", "one", ComparisonKind::Strict)
            .add_filter("a.two", "two", ComparisonKind::Strict);

        assert!(filters.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_duplicate_names() {
        let filters = SqlFilters::new()
            .add_filter("a.one", "one", ComparisonKind::Strict)
            .add_filter("b.one", "one", ComparisonKind::Like);

        let err = filters.validate().unwrap_err();
        assert!(matches!(
            err,
            FilterError::DuplicateFilterName { ref filter_name } if filter_name == "one"
        ));
    }

    #[test]
    fn test_validate_empty_set_is_ok() {
        assert!(SqlFilters::new().validate().is_ok());
        assert!(SqlFilters::new().is_empty());
    }

    #[test]
    fn test_same_sql_field_under_different_names_is_valid() {
        // Two filters may target the same column, e.g. a strict id filter and
        // a range filter over the same field.
        let filters = SqlFilters::new()
            .add_filter("o.total", "total_exact", ComparisonKind::Strict)
            .add_filter("o.total", "total_range", ComparisonKind::MinMax);

        assert!(filters.validate().is_ok());
    }
}
