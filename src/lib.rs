//! # gridfilter
//!
//! Types and functions for applying admin grid filters to SQL queries.
//!
//! An admin listing ("grid") declares once which of its columns are
//! filterable and how ([`SqlFilters`]); each request carries the submitted
//! filter values ([`FilterValues`]); [`apply_filters`] translates the two
//! into SQL predicates and named bound parameters on a query-condition
//! builder ([`GridQueryBuilder`]). The bundled [`SqlConditionBuilder`]
//! renders the accumulated conditions into a `sea_orm::Statement` ready for
//! execution.
//!
//! ```rust
//! use gridfilter::{
//!     apply_filters, ComparisonKind, FilterValue, FilterValues, SqlConditionBuilder, SqlFilters,
//! };
//! use sea_orm::DatabaseBackend;
//!
//! let filters = SqlFilters::new()
//!     .add_filter("o.reference", "reference", ComparisonKind::Like)
//!     .add_filter("o.total_paid", "total_paid", ComparisonKind::MinMax);
//!
//! let values = FilterValues::new()
//!     .with("reference", FilterValue::scalar("XKB"))
//!     .with("total_paid", FilterValue::min_max(Some(10.into()), Some(50.into())));
//!
//! let mut builder = SqlConditionBuilder::new();
//! apply_filters(&mut builder, &filters, &values);
//!
//! let statement = builder.into_statement(
//!     DatabaseBackend::MySql,
//!     "SELECT o.* FROM orders o",
//! );
//! assert!(statement.sql.contains("WHERE"));
//! ```

pub mod errors;
pub mod filtering;
pub mod models;
pub mod query;

pub use errors::FilterError;
pub use filtering::applicator::apply_filters;
pub use filtering::descriptor::{ComparisonKind, FilterDescriptor, SqlFilters};
pub use filtering::values::{FilterValue, FilterValues, ScalarValue};
pub use models::GridFilterOptions;
pub use query::builder::GridQueryBuilder;
pub use query::statement::SqlConditionBuilder;
