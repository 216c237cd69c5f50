//! DELETE statement assembly.

use super::{QueryBuilder, StatementKind};
use crate::dialect::BinderSequence;
use crate::error::BuildResult;

impl QueryBuilder {
    /// Start a `DELETE FROM table` statement, discarding prior state.
    pub fn delete(&mut self, table: &str) -> &mut Self {
        self.start(StatementKind::Delete, table)
    }

    pub(crate) fn render_delete(&self) -> BuildResult<String> {
        let mut binders = BinderSequence::new(self.dialect.binder_style());
        let mut sql = String::from("DELETE FROM ");
        self.dialect.push_quoted(&mut sql, &self.table);
        self.render_where(&mut sql, &mut binders)?;
        Ok(sql)
    }
}
