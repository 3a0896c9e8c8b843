//! The builder capability the filter applicator writes through.

use crate::filtering::values::ScalarValue;

/// A query-condition builder that accumulates predicate clauses and named
/// bound parameters.
///
/// This is the whole surface [`apply_filters`](crate::apply_filters) needs:
/// an AND conjunction for WHERE, a separate AND conjunction for HAVING, and
/// named parameter binding. Implementations decide how the accumulated state
/// turns into an executable query; the applicator never inspects it.
///
/// Predicates reference parameters with `:name` placeholders.
pub trait GridQueryBuilder {
    /// Appends a predicate to the WHERE conjunction.
    fn and_where(&mut self, predicate: &str);

    /// Appends a predicate to the HAVING conjunction.
    fn and_having(&mut self, predicate: &str);

    /// Binds a named parameter. Binding the same name again replaces the
    /// previous value.
    fn set_parameter(&mut self, name: &str, value: ScalarValue);
}
