//! The core filter application step.

use super::descriptor::{ComparisonKind, SqlFilters};
use super::min_max::{self, MinMaxCase};
use super::values::{FilterValue, FilterValues, ScalarValue};
use crate::query::builder::GridQueryBuilder;

/// Applies submitted filter values to a query-condition builder.
///
/// For every descriptor in `filters` that has a matching entry in `values`,
/// appends the predicate(s) for its comparison kind and binds the named
/// parameter(s). All predicates are conjunctive; WHERE and HAVING are
/// separate conjunctions. The builder is only appended to, never inspected,
/// and the call holds no state of its own; call it exactly once per request.
///
/// When `values` is empty the call is a no-op: no vacuous WHERE clause is
/// added. A value whose shape does not match the descriptor's comparison
/// kind contributes nothing.
pub fn apply_filters(
    builder: &mut impl GridQueryBuilder,
    filters: &SqlFilters,
    values: &FilterValues,
) {
    if values.is_empty() {
        return;
    }

    for descriptor in filters.filters() {
        let sql_field = &descriptor.sql_field;
        let filter_name = &descriptor.filter_name;

        let Some(value) = values.get(filter_name) else {
            continue;
        };

        match (descriptor.comparison, value) {
            (ComparisonKind::Strict, FilterValue::Scalar(scalar)) => {
                builder.and_where(&format!("{sql_field} = :{filter_name}"));
                builder.set_parameter(filter_name, scalar.clone());
            }
            (ComparisonKind::Like, FilterValue::Scalar(scalar)) => {
                builder.and_where(&format!("{sql_field} LIKE :{filter_name}"));
                builder.set_parameter(filter_name, ScalarValue::String(format!("%{scalar}%")));
            }
            (ComparisonKind::HavingLike, FilterValue::Scalar(scalar)) => {
                builder.and_having(&format!("{sql_field} LIKE :{filter_name}"));
                builder.set_parameter(filter_name, ScalarValue::String(format!("%{scalar}%")));
            }
            (ComparisonKind::DateRange, FilterValue::DateRange { from, to }) => {
                // Each bound fires independently. Bounds are date strings;
                // the bound parameter covers the whole day on either end.
                if let Some(from) = from {
                    let name = format!("{filter_name}_from");
                    builder.and_where(&format!("{sql_field} >= :{name}"));
                    builder.set_parameter(&name, ScalarValue::String(format!("{from} 0:0:0")));
                }
                if let Some(to) = to {
                    let name = format!("{filter_name}_to");
                    builder.and_where(&format!("{sql_field} <= :{name}"));
                    builder.set_parameter(&name, ScalarValue::String(format!("{to} 23:59:59")));
                }
            }
            (ComparisonKind::MinMax, FilterValue::MinMax { min, max }) => {
                let min_condition = format!("{sql_field} >= :{filter_name}_min");
                let max_condition = format!("{sql_field} <= :{filter_name}_max");

                match (min_max::resolve(min.as_ref(), max.as_ref()), min, max) {
                    (Some(MinMaxCase::BothDistinct), Some(min), Some(max)) => {
                        builder.and_where(&format!("{min_condition} AND {max_condition}"));
                        builder.set_parameter(&format!("{filter_name}_min"), min.clone());
                        builder.set_parameter(&format!("{filter_name}_max"), max.clone());
                    }
                    (Some(MinMaxCase::OnlyMin), Some(min), _) => {
                        builder.and_where(&min_condition);
                        builder.set_parameter(&format!("{filter_name}_min"), min.clone());
                    }
                    (Some(MinMaxCase::OnlyMax), _, Some(max)) => {
                        builder.and_where(&max_condition);
                        builder.set_parameter(&format!("{filter_name}_max"), max.clone());
                    }
                    (Some(MinMaxCase::BothEqual), Some(min), _) => {
                        builder.and_where(&format!("{sql_field} = :{filter_name}"));
                        builder.set_parameter(filter_name, min.clone());
                    }
                    _ => {}
                }
            }
            (comparison, _) => {
                tracing::debug!(
                    filter = %filter_name,
                    kind = ?comparison,
                    "filter value shape does not match comparison kind, skipping"
                );
            }
        }
    }
}
