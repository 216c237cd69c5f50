//! SELECT statement assembly and result shaping.

use super::{QueryBuilder, StatementKind};
use crate::dialect::BinderSequence;
use crate::error::BuildResult;
use crate::value::Value;

impl QueryBuilder {
    /// Start a `SELECT ... FROM table` statement, discarding prior state.
    pub fn select(&mut self, table: &str) -> &mut Self {
        self.start(StatementKind::Select, table)
    }

    /// Set the `GROUP BY` field list.
    pub fn group_by(&mut self, fields: &[&str]) -> &mut Self {
        self.group_by = fields.iter().map(|f| f.to_string()).collect();
        self
    }

    /// Set the `ORDER BY` field list.
    pub fn order_by(&mut self, fields: &[&str]) -> &mut Self {
        self.order_by = fields.iter().map(|f| f.to_string()).collect();
        self
    }

    /// Set `LIMIT`; values <= 0 omit the clause.
    pub fn limit(&mut self, limit: i64) -> &mut Self {
        self.limit = limit;
        self
    }

    /// Set `OFFSET`; values <= 0 omit the clause.
    pub fn offset(&mut self, offset: i64) -> &mut Self {
        self.offset = offset;
        self
    }

    pub(crate) fn render_select(&self) -> BuildResult<String> {
        let mut binders = BinderSequence::new(self.dialect.binder_style());
        let mut sql = String::from("SELECT ");

        if self.fields.is_empty() {
            sql.push('*');
        } else {
            sql.push_str(&self.field_list());
        }
        sql.push_str(" FROM ");
        self.dialect.push_quoted(&mut sql, &self.table);

        self.render_joins(&mut sql, &mut binders)?;
        self.render_where(&mut sql, &mut binders)?;

        if !self.group_by.is_empty() {
            sql.push_str(" GROUP BY ");
            sql.push_str(&self.quoted_field_list(&self.group_by));
        }
        if !self.order_by.is_empty() {
            sql.push_str(" ORDER BY ");
            sql.push_str(&self.quoted_field_list(&self.order_by));
        }
        if self.limit > 0 {
            sql.push_str(" LIMIT ");
            sql.push_str(&self.limit.to_string());
        }
        if self.offset > 0 {
            sql.push_str(" OFFSET ");
            sql.push_str(&self.offset.to_string());
        }

        Ok(sql)
    }

    /// Join ON params in join order, then WHERE params, matching the render
    /// order of [`render_select`](Self::render_select).
    pub(crate) fn select_params(&self) -> Vec<Value> {
        let mut params = Vec::new();
        for join in &self.joins {
            join.on.collect_params(&mut params);
        }
        self.where_tree.collect_params(&mut params);
        params
    }
}
