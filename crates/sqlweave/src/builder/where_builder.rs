//! Predicate surface of the builder: thin delegation onto the root
//! condition tree. See [`crate::condition`] for rendering semantics.

use super::QueryBuilder;
use crate::condition::Condition;
use crate::value::Value;

impl QueryBuilder {
    /// Append `field <relation> ?` to the WHERE tree, joined with AND.
    ///
    /// `relation` must be one of `=`, `>`, `<`, `>=`, `<=`, `<>`, `!=`;
    /// anything else surfaces as an error from [`as_sql`](Self::as_sql).
    pub fn where_(&mut self, field: &str, relation: &str, value: impl Into<Value>) -> &mut Self {
        self.where_tree.where_(field, relation, value);
        self
    }

    /// Append `field <relation> ?`, joined with OR.
    pub fn or_where(&mut self, field: &str, relation: &str, value: impl Into<Value>) -> &mut Self {
        self.where_tree.or_where(field, relation, value);
        self
    }

    /// Append a comparison whose field is emitted verbatim (no quoting).
    pub fn raw_where(&mut self, field: &str, relation: &str, value: impl Into<Value>) -> &mut Self {
        self.where_tree.raw_where(field, relation, value);
        self
    }

    /// Append a verbatim-field comparison, joined with OR.
    pub fn raw_or_where(
        &mut self,
        field: &str,
        relation: &str,
        value: impl Into<Value>,
    ) -> &mut Self {
        self.where_tree.raw_or_where(field, relation, value);
        self
    }

    /// Append `field BETWEEN ? AND ?`, joined with AND.
    pub fn between(
        &mut self,
        field: &str,
        low: impl Into<Value>,
        high: impl Into<Value>,
    ) -> &mut Self {
        self.where_tree.between(field, low, high);
        self
    }

    /// Append `field BETWEEN ? AND ?`, joined with OR.
    pub fn or_between(
        &mut self,
        field: &str,
        low: impl Into<Value>,
        high: impl Into<Value>,
    ) -> &mut Self {
        self.where_tree.or_between(field, low, high);
        self
    }

    /// Append `field IS NULL`, joined with AND.
    pub fn is_null(&mut self, field: &str) -> &mut Self {
        self.where_tree.is_null(field);
        self
    }

    /// Append `field IS NOT NULL`, joined with AND.
    pub fn is_not_null(&mut self, field: &str) -> &mut Self {
        self.where_tree.is_not_null(field);
        self
    }

    /// Append `field IS NULL`, joined with OR.
    pub fn or_is_null(&mut self, field: &str) -> &mut Self {
        self.where_tree.or_is_null(field);
        self
    }

    /// Append `field IS NOT NULL`, joined with OR.
    pub fn or_is_not_null(&mut self, field: &str) -> &mut Self {
        self.where_tree.or_is_not_null(field);
        self
    }

    /// Append `field IN (?,...)`, joined with AND.
    pub fn in_list<V: Into<Value>>(&mut self, field: &str, values: Vec<V>) -> &mut Self {
        self.where_tree.in_list(field, values);
        self
    }

    /// Append `field NOT IN (?,...)`, joined with AND.
    pub fn not_in<V: Into<Value>>(&mut self, field: &str, values: Vec<V>) -> &mut Self {
        self.where_tree.not_in(field, values);
        self
    }

    /// Append `field IN (?,...)`, joined with OR.
    pub fn or_in<V: Into<Value>>(&mut self, field: &str, values: Vec<V>) -> &mut Self {
        self.where_tree.or_in(field, values);
        self
    }

    /// Append `field NOT IN (?,...)`, joined with OR.
    pub fn or_not_in<V: Into<Value>>(&mut self, field: &str, values: Vec<V>) -> &mut Self {
        self.where_tree.or_not_in(field, values);
        self
    }

    /// Open a parenthesized sub-group joined with AND; `configure` receives
    /// the new group node and applies further predicate calls to it.
    ///
    /// ```
    /// use sqlweave::QueryBuilder;
    ///
    /// let mut qb = QueryBuilder::new();
    /// qb.select("t").where_("a", "=", 1).or_where_group(|g| {
    ///     g.where_("b", "=", 2).where_("c", "=", 3);
    /// });
    /// assert_eq!(
    ///     qb.as_sql().unwrap(),
    ///     "SELECT * FROM `t` WHERE `a`=? OR (`b`=? AND `c`=?)"
    /// );
    /// ```
    pub fn where_group(&mut self, configure: impl FnOnce(&mut Condition)) -> &mut Self {
        self.where_tree.where_group(configure);
        self
    }

    /// Open a parenthesized sub-group joined with OR.
    pub fn or_where_group(&mut self, configure: impl FnOnce(&mut Condition)) -> &mut Self {
        self.where_tree.or_where_group(configure);
        self
    }
}
