//! Fluent statement builder.
//!
//! One [`QueryBuilder`] instance composes one statement at a time. Every
//! mutating operation takes `&mut self` and returns `&mut Self` so calls
//! chain; the statement-entry operations (`select`, `insert`, `update`,
//! `delete`) reset all state except the dialect, which makes the same
//! instance reusable across independent statements. The builder is plain
//! mutable state: it is not safe for concurrent callers, use one instance
//! per thread or synchronize externally.

mod delete;
mod insert;
mod join;
mod select;
mod update;
mod where_builder;

use crate::condition::Condition;
use crate::dialect::Dialect;
use crate::error::{BuildError, BuildResult};
use crate::value::Value;
use join::Join;

/// Terminal statement kinds a builder can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Select,
    Insert,
    Update,
    Delete,
}

/// Fluent builder producing a parameterized SQL string plus its ordered
/// bound values.
///
/// # Example
/// ```
/// use sqlweave::QueryBuilder;
///
/// let mut qb = QueryBuilder::new();
/// qb.select("users").where_("status", "=", "active").limit(10);
///
/// assert_eq!(
///     qb.as_sql().unwrap(),
///     "SELECT * FROM `users` WHERE `status`=? LIMIT 10"
/// );
/// assert_eq!(qb.params().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    kind: Option<StatementKind>,
    table: String,
    fields: Vec<String>,
    fields_are_raw: bool,
    values: Vec<Value>,
    where_tree: Condition,
    group_by: Vec<String>,
    order_by: Vec<String>,
    limit: i64,
    offset: i64,
    joins: Vec<Join>,
    dialect: Dialect,
}

impl QueryBuilder {
    /// Create a builder with the default dialect (MySQL: backticks, `?`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the SQL dialect used for quoting and binder tokens.
    ///
    /// Rejected with [`BuildError::DialectLocked`] once the current statement
    /// has predicates, fields, values, or joins; mixing binder styles inside
    /// one statement would desynchronize tokens and values. On error the
    /// previous dialect is left unchanged.
    pub fn set_dialect(&mut self, dialect: Dialect) -> BuildResult<&mut Self> {
        if self.statement_in_progress() {
            return Err(BuildError::DialectLocked);
        }
        self.dialect = dialect;
        Ok(self)
    }

    /// The currently selected dialect.
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// The statement kind selected by the last entry call, if any.
    pub fn statement_kind(&self) -> Option<StatementKind> {
        self.kind
    }

    fn statement_in_progress(&self) -> bool {
        self.kind.is_some()
            && (!self.where_tree.is_empty()
                || !self.fields.is_empty()
                || !self.values.is_empty()
                || !self.joins.is_empty())
    }

    /// Clear all statement state except the dialect. Called by every
    /// statement-entry operation.
    pub(crate) fn reset(&mut self) {
        self.kind = None;
        self.table.clear();
        self.fields.clear();
        self.fields_are_raw = false;
        self.values.clear();
        self.where_tree = Condition::new();
        self.group_by.clear();
        self.order_by.clear();
        self.limit = 0;
        self.offset = 0;
        self.joins.clear();
    }

    pub(crate) fn start(&mut self, kind: StatementKind, table: &str) -> &mut Self {
        self.reset();
        self.kind = Some(kind);
        self.table = table.to_string();
        self
    }

    /// Render the current statement.
    ///
    /// Side-effect free: calling twice without intervening mutations returns
    /// identical strings, and the binder numbering restarts at `$1` on every
    /// call. Read [`params`](Self::params) against the same build state.
    pub fn as_sql(&self) -> BuildResult<String> {
        let sql = match self.kind {
            Some(StatementKind::Select) => self.render_select()?,
            Some(StatementKind::Insert) => self.render_insert()?,
            Some(StatementKind::Update) => self.render_update()?,
            Some(StatementKind::Delete) => self.render_delete()?,
            None => return Err(BuildError::NoStatement),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(kind = ?self.kind, sql = %sql, "rendered statement");

        Ok(sql)
    }

    /// Bound values in the order their binder tokens appear in
    /// [`as_sql`](Self::as_sql) output.
    ///
    /// SELECT: join ON params in join order, then WHERE params. INSERT: the
    /// values list. UPDATE: values, then WHERE params. DELETE: WHERE params.
    pub fn params(&self) -> Vec<Value> {
        match self.kind {
            Some(StatementKind::Select) => self.select_params(),
            Some(StatementKind::Insert) => self.values.clone(),
            Some(StatementKind::Update) => {
                let mut params = self.values.clone();
                self.where_tree.collect_params(&mut params);
                params
            }
            Some(StatementKind::Delete) => self.where_params(),
            None => Vec::new(),
        }
    }

    pub(crate) fn where_params(&self) -> Vec<Value> {
        let mut params = Vec::new();
        self.where_tree.collect_params(&mut params);
        params
    }

    /// Append ` WHERE <tree>` when the root tree has predicates.
    ///
    /// A construction error must surface even when it left the tree empty,
    /// so the check precedes the emptiness short-circuit.
    pub(crate) fn render_where(
        &self,
        out: &mut String,
        binders: &mut crate::dialect::BinderSequence,
    ) -> BuildResult<()> {
        self.where_tree.check()?;
        if self.where_tree.is_empty() {
            return Ok(());
        }
        out.push_str(" WHERE ");
        out.push_str(&self.where_tree.render(self.dialect, binders)?);
        Ok(())
    }

    /// Render a comma-joined list of quoted identifiers.
    pub(crate) fn quoted_field_list(&self, fields: &[String]) -> String {
        let mut out = String::new();
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            self.dialect.push_quoted(&mut out, field);
        }
        out
    }

    /// The statement field list: verbatim in raw mode, quoted otherwise.
    pub(crate) fn field_list(&self) -> String {
        if self.fields_are_raw {
            self.fields.join(",")
        } else {
            self.quoted_field_list(&self.fields)
        }
    }

    /// Check the INSERT/UPDATE field/value shape.
    pub(crate) fn check_field_values(&self) -> BuildResult<()> {
        if self.fields.len() != self.values.len() {
            return Err(BuildError::FieldValueMismatch {
                fields: self.fields.len(),
                values: self.values.len(),
            });
        }
        if self.fields.is_empty() {
            return Err(BuildError::NoFields);
        }
        Ok(())
    }
}
