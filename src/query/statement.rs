//! A concrete condition builder that renders into a `sea_orm::Statement`.

use sea_orm::{DatabaseBackend, Statement, Value};

use super::builder::GridQueryBuilder;
use crate::filtering::values::ScalarValue;

/// Accumulates WHERE conditions, HAVING conditions and named parameters, and
/// renders them onto a caller-supplied base SELECT.
///
/// Named `:name` placeholders are rewritten to the backend's positional form
/// (`$1`, `$2`, … for Postgres, `?` elsewhere) when the statement is built.
///
/// ```rust
/// use gridfilter::{GridQueryBuilder, SqlConditionBuilder};
/// use sea_orm::DatabaseBackend;
///
/// let mut builder = SqlConditionBuilder::new();
/// builder.and_where("o.reference LIKE :reference");
/// builder.set_parameter("reference", "%XKB%".into());
///
/// let statement = builder.into_statement(
///     DatabaseBackend::Postgres,
///     "SELECT o.* FROM orders o",
/// );
/// assert_eq!(
///     statement.sql,
///     "SELECT o.* FROM orders o WHERE o.reference LIKE $1"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct SqlConditionBuilder {
    where_conditions: Vec<String>,
    having_conditions: Vec<String>,
    group_by: Option<String>,
    parameters: Vec<(String, ScalarValue)>,
}

impl GridQueryBuilder for SqlConditionBuilder {
    fn and_where(&mut self, predicate: &str) {
        self.where_conditions.push(predicate.to_string());
    }

    fn and_having(&mut self, predicate: &str) {
        self.having_conditions.push(predicate.to_string());
    }

    fn set_parameter(&mut self, name: &str, value: ScalarValue) {
        if let Some(bound) = self.parameters.iter_mut().find(|(bound, _)| bound == name) {
            bound.1 = value;
        } else {
            self.parameters.push((name.to_string(), value));
        }
    }
}

impl SqlConditionBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn has_conditions(&self) -> bool {
        !self.where_conditions.is_empty() || !self.having_conditions.is_empty()
    }

    /// The WHERE conjunction as a single fragment, if any predicate was added.
    #[must_use]
    pub fn where_sql(&self) -> Option<String> {
        if self.where_conditions.is_empty() {
            None
        } else {
            Some(self.where_conditions.join(" AND "))
        }
    }

    /// The HAVING conjunction as a single fragment, if any predicate was added.
    #[must_use]
    pub fn having_sql(&self) -> Option<String> {
        if self.having_conditions.is_empty() {
            None
        } else {
            Some(self.having_conditions.join(" AND "))
        }
    }

    /// The bound parameters, in first-bind order.
    #[must_use]
    pub fn parameters(&self) -> &[(String, ScalarValue)] {
        &self.parameters
    }

    /// Sets the GROUP BY expression, rendered between WHERE and HAVING.
    /// Grids filtering on aggregated columns (`HavingLike`) need one.
    #[must_use]
    pub fn with_group_by(mut self, expression: impl Into<String>) -> Self {
        self.group_by = Some(expression.into());
        self
    }

    /// Appends the accumulated WHERE, GROUP BY and HAVING clauses to
    /// `base_sql` and produces an executable [`Statement`] for `backend`.
    ///
    /// With no accumulated conditions the base SQL is returned untouched:
    /// an empty filter set must not add a vacuous WHERE clause.
    #[must_use]
    pub fn into_statement(self, backend: DatabaseBackend, base_sql: impl Into<String>) -> Statement {
        let mut sql = base_sql.into();
        if let Some(where_sql) = self.where_sql() {
            sql.push_str(" WHERE ");
            sql.push_str(&where_sql);
        }
        if let Some(group_by) = &self.group_by {
            sql.push_str(" GROUP BY ");
            sql.push_str(group_by);
        }
        if let Some(having_sql) = self.having_sql() {
            sql.push_str(" HAVING ");
            sql.push_str(&having_sql);
        }

        let (sql, values) = bind_named_parameters(&sql, &self.parameters, backend);
        Statement::from_sql_and_values(backend, sql, values)
    }
}

/// Rewrites `:name` placeholders to the backend's positional form, collecting
/// the bound values in occurrence order.
///
/// `::` sequences are SQL type casts and are left alone. A `:name` with no
/// bound value is left verbatim so the database reports it instead of the
/// rewrite silently mangling the query.
fn bind_named_parameters(
    sql: &str,
    parameters: &[(String, ScalarValue)],
    backend: DatabaseBackend,
) -> (String, Vec<Value>) {
    let bytes = sql.as_bytes();
    let mut rewritten = String::with_capacity(sql.len());
    let mut values: Vec<Value> = Vec::new();
    // Start of the span not yet copied into `rewritten`; splits only happen
    // at ASCII ':' so slicing stays on char boundaries.
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b':' {
            i += 1;
            continue;
        }
        if i + 1 < bytes.len() && bytes[i + 1] == b':' {
            i += 2;
            continue;
        }

        let start = i + 1;
        let mut end = start;
        while end < bytes.len() && (bytes[end].is_ascii_alphanumeric() || bytes[end] == b'_') {
            end += 1;
        }
        if end == start {
            i += 1;
            continue;
        }

        let name = &sql[start..end];
        if let Some((_, value)) = parameters.iter().find(|(bound, _)| bound == name) {
            rewritten.push_str(&sql[copied..i]);
            values.push(value.clone().into());
            match backend {
                DatabaseBackend::Postgres => {
                    rewritten.push('$');
                    rewritten.push_str(&values.len().to_string());
                }
                _ => rewritten.push('?'),
            }
            copied = end;
        } else {
            tracing::warn!(
                parameter = name,
                "named parameter has no bound value, leaving placeholder in place"
            );
        }
        i = end;
    }

    rewritten.push_str(&sql[copied..]);
    (rewritten, values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_parameter_overwrites_by_name() {
        let mut builder = SqlConditionBuilder::new();
        builder.set_parameter("reference", "first".into());
        builder.set_parameter("reference", "second".into());

        assert_eq!(builder.parameters().len(), 1);
        assert_eq!(builder.parameters()[0].1, ScalarValue::from("second"));
    }

    #[test]
    fn test_where_sql_joins_with_and() {
        let mut builder = SqlConditionBuilder::new();
        builder.and_where("a = :a");
        builder.and_where("b = :b");

        assert_eq!(builder.where_sql().unwrap(), "a = :a AND b = :b");
        assert_eq!(builder.having_sql(), None);
    }

    #[test]
    fn test_into_statement_without_conditions_keeps_base_sql() {
        let builder = SqlConditionBuilder::new();
        let statement =
            builder.into_statement(DatabaseBackend::MySql, "SELECT o.* FROM orders o");

        assert_eq!(statement.sql, "SELECT o.* FROM orders o");
        assert_eq!(statement.values.unwrap().0.len(), 0);
    }

    #[test]
    fn test_postgres_placeholders_numbered_by_occurrence() {
        let mut builder = SqlConditionBuilder::new();
        builder.and_where("a = :a");
        builder.and_where("b = :b");
        builder.set_parameter("a", 1.into());
        builder.set_parameter("b", 2.into());

        let statement = builder.into_statement(DatabaseBackend::Postgres, "SELECT * FROM t");
        assert_eq!(statement.sql, "SELECT * FROM t WHERE a = $1 AND b = $2");
        assert_eq!(statement.values.unwrap().0.len(), 2);
    }

    #[test]
    fn test_mysql_placeholders_are_question_marks() {
        let mut builder = SqlConditionBuilder::new();
        builder.and_where("a = :a");
        builder.set_parameter("a", 1.into());

        let statement = builder.into_statement(DatabaseBackend::MySql, "SELECT * FROM t");
        assert_eq!(statement.sql, "SELECT * FROM t WHERE a = ?");
    }

    #[test]
    fn test_type_casts_are_not_placeholders() {
        let mut builder = SqlConditionBuilder::new();
        builder.and_where("a::text LIKE :a");
        builder.set_parameter("a", "%x%".into());

        let statement = builder.into_statement(DatabaseBackend::Postgres, "SELECT * FROM t");
        assert_eq!(statement.sql, "SELECT * FROM t WHERE a::text LIKE $1");
        assert_eq!(statement.values.unwrap().0.len(), 1);
    }

    #[test]
    fn test_unbound_placeholder_is_left_verbatim() {
        let mut builder = SqlConditionBuilder::new();
        builder.and_where("a = :missing");

        let statement = builder.into_statement(DatabaseBackend::Postgres, "SELECT * FROM t");
        assert_eq!(statement.sql, "SELECT * FROM t WHERE a = :missing");
        assert_eq!(statement.values.unwrap().0.len(), 0);
    }

    #[test]
    fn test_repeated_placeholder_binds_per_occurrence() {
        let mut builder = SqlConditionBuilder::new();
        builder.and_where("(a = :v OR b = :v)");
        builder.set_parameter("v", 7.into());

        let statement = builder.into_statement(DatabaseBackend::Postgres, "SELECT * FROM t");
        assert_eq!(statement.sql, "SELECT * FROM t WHERE (a = $1 OR b = $2)");
        assert_eq!(statement.values.unwrap().0.len(), 2);
    }

    #[test]
    fn test_clause_order_is_where_group_by_having() {
        let mut builder = SqlConditionBuilder::new().with_group_by("o.id");
        builder.and_where("o.state = :state");
        builder.and_having("product_count LIKE :product_count");
        builder.set_parameter("state", 2.into());
        builder.set_parameter("product_count", "%3%".into());

        let statement = builder.into_statement(
            DatabaseBackend::MySql,
            "SELECT o.*, COUNT(d.id) AS product_count FROM orders o",
        );
        assert_eq!(
            statement.sql,
            "SELECT o.*, COUNT(d.id) AS product_count FROM orders o \
             WHERE o.state = ? GROUP BY o.id HAVING product_count LIKE ?"
        );
    }
}
