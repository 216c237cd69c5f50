//! Recursive condition tree for WHERE and JOIN-ON predicates.
//!
//! A [`Condition`] is an n-ary group of predicates; each predicate is either a
//! concrete leaf (comparison, BETWEEN, NULL check, IN list) or a nested group,
//! joined to its left sibling by AND or OR. Mutators append in call order and
//! never rewrite existing children, so call order defines left-to-right
//! precedence in the emitted SQL.
//!
//! Rendering and parameter collection walk the tree in the exact same
//! depth-first, left-to-right order. That shared order is the correctness
//! invariant of the whole crate: binder tokens and bound values pair up purely
//! by position and a driver cannot cross-check them by name.

use crate::dialect::{BinderSequence, Dialect};
use crate::error::{BuildError, BuildResult};
use crate::value::Value;
use std::str::FromStr;

/// Joining operator a predicate contributes when it is not the first child of
/// its group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connector {
    And,
    Or,
}

impl Connector {
    fn keyword(self) -> &'static str {
        match self {
            Connector::And => "AND",
            Connector::Or => "OR",
        }
    }
}

/// Comparison operator of a leaf predicate.
///
/// The set is closed; anything else fails at construction time instead of
/// producing invalid SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// `=`
    Eq,
    /// `>`
    Gt,
    /// `<`
    Lt,
    /// `>=`
    Gte,
    /// `<=`
    Lte,
    /// `<>`
    Ne,
    /// `!=`
    NotEq,
}

impl Relation {
    pub fn as_str(self) -> &'static str {
        match self {
            Relation::Eq => "=",
            Relation::Gt => ">",
            Relation::Lt => "<",
            Relation::Gte => ">=",
            Relation::Lte => "<=",
            Relation::Ne => "<>",
            Relation::NotEq => "!=",
        }
    }
}

impl FromStr for Relation {
    type Err = BuildError;

    fn from_str(s: &str) -> BuildResult<Self> {
        match s {
            "=" => Ok(Relation::Eq),
            ">" => Ok(Relation::Gt),
            "<" => Ok(Relation::Lt),
            ">=" => Ok(Relation::Gte),
            "<=" => Ok(Relation::Lte),
            "<>" => Ok(Relation::Ne),
            "!=" => Ok(Relation::NotEq),
            _ => Err(BuildError::InvalidRelation(s.to_string())),
        }
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
enum PredicateBody {
    /// `field <relation> <binder>`; `raw` emits the field verbatim.
    Compare {
        field: String,
        relation: Relation,
        value: Value,
        raw: bool,
    },
    /// `field BETWEEN <binder> AND <binder>`
    Between {
        field: String,
        low: Value,
        high: Value,
    },
    /// `field IS NULL` / `field IS NOT NULL`; binds nothing.
    NullCheck { field: String, is_null: bool },
    /// `field IN (<binder>,...)` / `field NOT IN (...)`
    InList {
        field: String,
        values: Vec<Value>,
        negated: bool,
    },
    /// Parenthesized nested group.
    Group(Condition),
}

#[derive(Debug, Clone)]
struct Predicate {
    connector: Connector,
    body: PredicateBody,
}

/// An n-ary predicate group: the root WHERE tree of a statement, the ON
/// extension of a join, or a nested group created by `where_group`.
///
/// Lives only for the duration of one statement build; the owning builder
/// discards it on the next statement-entry call.
#[derive(Debug, Clone, Default)]
pub struct Condition {
    items: Vec<Predicate>,
    /// First construction-time failure, surfaced by the terminal render call
    /// so chained calls stay control-flow free.
    error: Option<BuildError>,
}

impl Condition {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the group has no predicates. An empty root tree suppresses
    /// the whole WHERE clause.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn push(&mut self, connector: Connector, body: PredicateBody) -> &mut Self {
        self.items.push(Predicate { connector, body });
        self
    }

    fn fail(&mut self, err: BuildError) -> &mut Self {
        if self.error.is_none() {
            self.error = Some(err);
        }
        self
    }

    fn compare(
        &mut self,
        connector: Connector,
        field: &str,
        relation: &str,
        value: impl Into<Value>,
        raw: bool,
    ) -> &mut Self {
        match relation.parse::<Relation>() {
            Ok(relation) => self.push(
                connector,
                PredicateBody::Compare {
                    field: field.to_string(),
                    relation,
                    value: value.into(),
                    raw,
                },
            ),
            Err(err) => self.fail(err),
        }
    }

    /// Append `field <relation> ?` joined with AND.
    pub fn where_(&mut self, field: &str, relation: &str, value: impl Into<Value>) -> &mut Self {
        self.compare(Connector::And, field, relation, value, false)
    }

    /// Append `field <relation> ?` joined with OR.
    pub fn or_where(&mut self, field: &str, relation: &str, value: impl Into<Value>) -> &mut Self {
        self.compare(Connector::Or, field, relation, value, false)
    }

    /// Like [`where_`](Self::where_) but `field` is emitted verbatim, for
    /// caller-provided SQL expressions such as `LOWER(name)`.
    pub fn raw_where(&mut self, field: &str, relation: &str, value: impl Into<Value>) -> &mut Self {
        self.compare(Connector::And, field, relation, value, true)
    }

    /// Like [`or_where`](Self::or_where) but `field` is emitted verbatim.
    pub fn raw_or_where(
        &mut self,
        field: &str,
        relation: &str,
        value: impl Into<Value>,
    ) -> &mut Self {
        self.compare(Connector::Or, field, relation, value, true)
    }

    fn between_inner(
        &mut self,
        connector: Connector,
        field: &str,
        low: impl Into<Value>,
        high: impl Into<Value>,
    ) -> &mut Self {
        self.push(
            connector,
            PredicateBody::Between {
                field: field.to_string(),
                low: low.into(),
                high: high.into(),
            },
        )
    }

    /// Append `field BETWEEN ? AND ?` joined with AND.
    pub fn between(
        &mut self,
        field: &str,
        low: impl Into<Value>,
        high: impl Into<Value>,
    ) -> &mut Self {
        self.between_inner(Connector::And, field, low, high)
    }

    /// Append `field BETWEEN ? AND ?` joined with OR.
    pub fn or_between(
        &mut self,
        field: &str,
        low: impl Into<Value>,
        high: impl Into<Value>,
    ) -> &mut Self {
        self.between_inner(Connector::Or, field, low, high)
    }

    fn null_check(&mut self, connector: Connector, field: &str, is_null: bool) -> &mut Self {
        self.push(
            connector,
            PredicateBody::NullCheck {
                field: field.to_string(),
                is_null,
            },
        )
    }

    /// Append `field IS NULL` joined with AND.
    pub fn is_null(&mut self, field: &str) -> &mut Self {
        self.null_check(Connector::And, field, true)
    }

    /// Append `field IS NOT NULL` joined with AND.
    pub fn is_not_null(&mut self, field: &str) -> &mut Self {
        self.null_check(Connector::And, field, false)
    }

    /// Append `field IS NULL` joined with OR.
    pub fn or_is_null(&mut self, field: &str) -> &mut Self {
        self.null_check(Connector::Or, field, true)
    }

    /// Append `field IS NOT NULL` joined with OR.
    pub fn or_is_not_null(&mut self, field: &str) -> &mut Self {
        self.null_check(Connector::Or, field, false)
    }

    fn in_inner<V: Into<Value>>(
        &mut self,
        connector: Connector,
        field: &str,
        values: Vec<V>,
        negated: bool,
    ) -> &mut Self {
        self.push(
            connector,
            PredicateBody::InList {
                field: field.to_string(),
                values: values.into_iter().map(Into::into).collect(),
                negated,
            },
        )
    }

    /// Append `field IN (?,...)` joined with AND.
    ///
    /// An empty `values` list is accepted here but rejected by the terminal
    /// render call, since an empty parenthesis list is not portable SQL.
    pub fn in_list<V: Into<Value>>(&mut self, field: &str, values: Vec<V>) -> &mut Self {
        self.in_inner(Connector::And, field, values, false)
    }

    /// Append `field NOT IN (?,...)` joined with AND.
    pub fn not_in<V: Into<Value>>(&mut self, field: &str, values: Vec<V>) -> &mut Self {
        self.in_inner(Connector::And, field, values, true)
    }

    /// Append `field IN (?,...)` joined with OR.
    pub fn or_in<V: Into<Value>>(&mut self, field: &str, values: Vec<V>) -> &mut Self {
        self.in_inner(Connector::Or, field, values, false)
    }

    /// Append `field NOT IN (?,...)` joined with OR.
    pub fn or_not_in<V: Into<Value>>(&mut self, field: &str, values: Vec<V>) -> &mut Self {
        self.in_inner(Connector::Or, field, values, true)
    }

    fn group(&mut self, connector: Connector, configure: impl FnOnce(&mut Condition)) -> &mut Self {
        // The group node is appended before the closure runs, so the tree
        // already contains it while its children are being added. A closure
        // that adds nothing leaves an empty group rendering as `()`.
        self.items.push(Predicate {
            connector,
            body: PredicateBody::Group(Condition::new()),
        });
        if let Some(Predicate {
            body: PredicateBody::Group(inner),
            ..
        }) = self.items.last_mut()
        {
            configure(inner);
        }
        self
    }

    /// Append a parenthesized sub-group joined with AND; `configure` receives
    /// the new group and applies further predicate calls to it.
    pub fn where_group(&mut self, configure: impl FnOnce(&mut Condition)) -> &mut Self {
        self.group(Connector::And, configure)
    }

    /// Append a parenthesized sub-group joined with OR.
    pub fn or_where_group(&mut self, configure: impl FnOnce(&mut Condition)) -> &mut Self {
        self.group(Connector::Or, configure)
    }

    /// Report the first construction-time failure recorded on this group.
    ///
    /// A failed mutator records its error without appending a predicate, so
    /// the group can be empty and still carry an error; callers must check
    /// before skipping an empty tree.
    pub(crate) fn check(&self) -> BuildResult<()> {
        match &self.error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    /// Render this group to a SQL fragment, drawing binder tokens from the
    /// statement-wide sequence.
    ///
    /// Depth-first, left-to-right; the first child of a group renders no
    /// leading connector. Must stay in lock-step with
    /// [`collect_params`](Self::collect_params).
    pub(crate) fn render(
        &self,
        dialect: Dialect,
        binders: &mut BinderSequence,
    ) -> BuildResult<String> {
        self.check()?;

        let mut out = String::new();
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                out.push(' ');
                out.push_str(item.connector.keyword());
                out.push(' ');
            }

            match &item.body {
                PredicateBody::Compare {
                    field,
                    relation,
                    raw,
                    ..
                } => {
                    if *raw {
                        out.push_str(field);
                    } else {
                        dialect.push_quoted(&mut out, field);
                    }
                    out.push_str(relation.as_str());
                    binders.push(&mut out);
                }
                PredicateBody::Between { field, .. } => {
                    dialect.push_quoted(&mut out, field);
                    out.push_str(" BETWEEN ");
                    binders.push(&mut out);
                    out.push_str(" AND ");
                    binders.push(&mut out);
                }
                PredicateBody::NullCheck { field, is_null } => {
                    dialect.push_quoted(&mut out, field);
                    out.push_str(if *is_null { " IS NULL" } else { " IS NOT NULL" });
                }
                PredicateBody::InList {
                    field,
                    values,
                    negated,
                } => {
                    if values.is_empty() {
                        return Err(BuildError::EmptyInList(field.clone()));
                    }
                    dialect.push_quoted(&mut out, field);
                    out.push_str(if *negated { " NOT IN (" } else { " IN (" });
                    for j in 0..values.len() {
                        if j > 0 {
                            out.push(',');
                        }
                        binders.push(&mut out);
                    }
                    out.push(')');
                }
                PredicateBody::Group(inner) => {
                    out.push('(');
                    out.push_str(&inner.render(dialect, binders)?);
                    out.push(')');
                }
            }
        }
        Ok(out)
    }

    /// Collect bound values in the exact order their binder tokens appear in
    /// the rendered fragment. NULL checks contribute nothing; BETWEEN
    /// contributes low then high; IN contributes its list in stored order.
    pub(crate) fn collect_params(&self, out: &mut Vec<Value>) {
        for item in &self.items {
            match &item.body {
                PredicateBody::Compare { value, .. } => out.push(value.clone()),
                PredicateBody::Between { low, high, .. } => {
                    out.push(low.clone());
                    out.push(high.clone());
                }
                PredicateBody::NullCheck { .. } => {}
                PredicateBody::InList { values, .. } => out.extend(values.iter().cloned()),
                PredicateBody::Group(inner) => inner.collect_params(out),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::BinderSequence;

    fn render(cond: &Condition, dialect: Dialect) -> BuildResult<String> {
        let mut binders = BinderSequence::new(dialect.binder_style());
        cond.render(dialect, &mut binders)
    }

    fn params(cond: &Condition) -> Vec<Value> {
        let mut out = Vec::new();
        cond.collect_params(&mut out);
        out
    }

    #[test]
    fn leaf_comparison() {
        let mut cond = Condition::new();
        cond.where_("age", ">=", 18);
        assert_eq!(render(&cond, Dialect::MySql).unwrap(), "`age`>=?");
        assert_eq!(params(&cond), vec![Value::Int(18)]);
    }

    #[test]
    fn mixed_and_or_leaves() {
        let mut cond = Condition::new();
        cond.where_("a", "=", 1).or_where("b", "<", 2);
        assert_eq!(render(&cond, Dialect::MySql).unwrap(), "`a`=? OR `b`<?");
        assert_eq!(params(&cond), vec![Value::Int(1), Value::Int(2)]);
    }

    #[test]
    fn between_binds_low_then_high() {
        let mut cond = Condition::new();
        cond.between("age", 18, 65);
        assert_eq!(
            render(&cond, Dialect::Postgres).unwrap(),
            "\"age\" BETWEEN $1 AND $2"
        );
        assert_eq!(params(&cond), vec![Value::Int(18), Value::Int(65)]);
    }

    #[test]
    fn null_checks_bind_nothing() {
        let mut cond = Condition::new();
        cond.is_null("deleted_at").or_is_not_null("archived_at");
        assert_eq!(
            render(&cond, Dialect::MySql).unwrap(),
            "`deleted_at` IS NULL OR `archived_at` IS NOT NULL"
        );
        assert!(params(&cond).is_empty());
    }

    #[test]
    fn in_list_sizes_binders_to_values() {
        let mut cond = Condition::new();
        cond.in_list("id", vec![1, 2, 3]).or_not_in("id", vec![9]);
        assert_eq!(
            render(&cond, Dialect::Postgres).unwrap(),
            "\"id\" IN ($1,$2,$3) OR \"id\" NOT IN ($4)"
        );
        assert_eq!(params(&cond).len(), 4);
    }

    #[test]
    fn empty_in_list_is_an_error() {
        let mut cond = Condition::new();
        cond.in_list::<i32>("id", vec![]);
        assert_eq!(
            render(&cond, Dialect::MySql),
            Err(BuildError::EmptyInList("id".to_string()))
        );
    }

    #[test]
    fn group_renders_parenthesized() {
        let mut cond = Condition::new();
        cond.where_("a", "=", 1)
            .or_where_group(|g| {
                g.where_("b", "=", 2).where_("c", "=", 3);
            });
        assert_eq!(
            render(&cond, Dialect::MySql).unwrap(),
            "`a`=? OR (`b`=? AND `c`=?)"
        );
    }

    #[test]
    fn group_as_first_child_has_no_leading_connector() {
        let mut cond = Condition::new();
        cond.where_group(|g| {
            g.where_("a", "=", 1);
        })
        .where_("b", "=", 2);
        assert_eq!(render(&cond, Dialect::MySql).unwrap(), "(`a`=?) AND `b`=?");
    }

    #[test]
    fn empty_group_renders_empty_parens() {
        let mut cond = Condition::new();
        cond.where_group(|_| {});
        assert_eq!(render(&cond, Dialect::MySql).unwrap(), "()");
        assert!(params(&cond).is_empty());
    }

    #[test]
    fn nested_groups_recurse() {
        let mut cond = Condition::new();
        cond.where_("a", "=", 1).where_group(|g| {
            g.where_("b", "=", 2).or_where_group(|inner| {
                inner.where_("c", "=", 3);
            });
        });
        assert_eq!(
            render(&cond, Dialect::MySql).unwrap(),
            "`a`=? AND (`b`=? OR (`c`=?))"
        );
        assert_eq!(params(&cond).len(), 3);
    }

    #[test]
    fn raw_field_skips_quoting() {
        let mut cond = Condition::new();
        cond.raw_where("LOWER(name)", "=", "bob");
        assert_eq!(render(&cond, Dialect::MySql).unwrap(), "LOWER(name)=?");
    }

    #[test]
    fn invalid_relation_fails_at_render() {
        let mut cond = Condition::new();
        cond.where_("a", "~=", 5);
        assert_eq!(
            render(&cond, Dialect::MySql),
            Err(BuildError::InvalidRelation("~=".to_string()))
        );
    }

    #[test]
    fn invalid_relation_inside_group_fails_at_render() {
        let mut cond = Condition::new();
        cond.where_group(|g| {
            g.where_("a", "=~", 5);
        });
        assert_eq!(
            render(&cond, Dialect::MySql),
            Err(BuildError::InvalidRelation("=~".to_string()))
        );
    }

    #[test]
    fn relation_set_is_closed() {
        for op in ["=", ">", "<", ">=", "<=", "<>", "!="] {
            assert!(op.parse::<Relation>().is_ok(), "{op} should parse");
        }
        assert!("LIKE".parse::<Relation>().is_err());
        assert!("==".parse::<Relation>().is_err());
    }

    #[test]
    fn render_and_params_stay_in_lockstep() {
        let mut cond = Condition::new();
        cond.where_("a", "=", 1)
            .between("b", 2, 3)
            .is_null("c")
            .in_list("d", vec![4, 5, 6])
            .or_where_group(|g| {
                g.where_("e", "!=", 7).or_between("f", 8, 9);
            });
        let sql = render(&cond, Dialect::MySql).unwrap();
        let binder_count = sql.matches('?').count();
        assert_eq!(binder_count, params(&cond).len());
    }
}
