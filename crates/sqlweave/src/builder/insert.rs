//! INSERT statement assembly plus the field/value surface shared with UPDATE.

use super::{QueryBuilder, StatementKind};
use crate::dialect::BinderSequence;
use crate::error::BuildResult;
use crate::value::Value;

impl QueryBuilder {
    /// Start an `INSERT INTO table` statement, discarding prior state.
    pub fn insert(&mut self, table: &str) -> &mut Self {
        self.start(StatementKind::Insert, table)
    }

    /// Set the field list; each name is quoted at render time.
    ///
    /// Mutually exclusive with [`raw_fields`](Self::raw_fields): the later
    /// call's mode wins for the whole statement.
    pub fn fields(&mut self, fields: &[&str]) -> &mut Self {
        self.fields_are_raw = false;
        self.fields = fields.iter().map(|f| f.to_string()).collect();
        self
    }

    /// Set the field list, emitted verbatim (no quoting).
    pub fn raw_fields(&mut self, fields: &[&str]) -> &mut Self {
        self.fields_are_raw = true;
        self.fields = fields.iter().map(|f| f.to_string()).collect();
        self
    }

    /// Set the bound values matching [`fields`](Self::fields), in order.
    pub fn values<V: Into<Value>>(&mut self, values: Vec<V>) -> &mut Self {
        self.values = values.into_iter().map(Into::into).collect();
        self
    }

    pub(crate) fn render_insert(&self) -> BuildResult<String> {
        self.check_field_values()?;

        let mut binders = BinderSequence::new(self.dialect.binder_style());
        let mut sql = String::from("INSERT INTO ");
        self.dialect.push_quoted(&mut sql, &self.table);
        sql.push_str(" (");
        sql.push_str(&self.field_list());
        sql.push_str(") VALUES (");
        for i in 0..self.values.len() {
            if i > 0 {
                sql.push(',');
            }
            binders.push(&mut sql);
        }
        sql.push(')');

        Ok(sql)
    }
}
