//! UPDATE statement assembly.

use super::{QueryBuilder, StatementKind};
use crate::dialect::BinderSequence;
use crate::error::BuildResult;

impl QueryBuilder {
    /// Start an `UPDATE table` statement, discarding prior state.
    pub fn update(&mut self, table: &str) -> &mut Self {
        self.start(StatementKind::Update, table)
    }

    pub(crate) fn render_update(&self) -> BuildResult<String> {
        self.check_field_values()?;

        // SET binders come first so WHERE numbering continues after them.
        let mut binders = BinderSequence::new(self.dialect.binder_style());
        let mut sql = String::from("UPDATE ");
        self.dialect.push_quoted(&mut sql, &self.table);
        sql.push_str(" SET ");
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                sql.push(',');
            }
            if self.fields_are_raw {
                sql.push_str(field);
            } else {
                self.dialect.push_quoted(&mut sql, field);
            }
            sql.push('=');
            binders.push(&mut sql);
        }

        self.render_where(&mut sql, &mut binders)?;

        Ok(sql)
    }
}
