//! Query-condition accumulation and statement rendering.

pub mod builder;
pub mod statement;

pub use builder::GridQueryBuilder;
pub use statement::SqlConditionBuilder;
