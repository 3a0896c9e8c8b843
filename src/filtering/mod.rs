//! # Grid Filtering
//!
//! This module translates declarative grid filter configuration plus submitted
//! filter values into SQL predicates and named bound parameters.
//!
//! ## Main Components
//!
//! - **[`SqlFilters`](descriptor::SqlFilters)**: the per-grid filter
//!   configuration (one descriptor per filterable column)
//! - **[`FilterValues`](values::FilterValues)**: the per-request submitted
//!   values, keyed by filter name
//! - **[`apply_filters`](applicator::apply_filters)**: the core application
//!   step, appending predicates to a query-condition builder
//!
//! ## Comparison kinds
//!
//! | Kind | Predicate |
//! |---|---|
//! | `Strict` | `field = :name` |
//! | `Like` | `field LIKE :name` with the value wrapped in `%` wildcards |
//! | `HavingLike` | as `Like`, but on the HAVING conjunction |
//! | `DateRange` | `field >= :name_from` and/or `field <= :name_to` |
//! | `MinMax` | closed range, one-sided bound, or collapsed equality |
//!
//! All predicates are conjunctive; the order they are appended in follows the
//! descriptor order of the grid configuration.

pub mod applicator;
pub mod descriptor;
pub mod min_max;
pub mod values;

pub use applicator::apply_filters;
pub use descriptor::{ComparisonKind, FilterDescriptor, SqlFilters};
pub use values::{FilterValue, FilterValues, ScalarValue};
