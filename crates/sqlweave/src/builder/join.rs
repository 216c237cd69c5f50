//! Join clauses and their embedded ON-extension predicate trees.

use super::QueryBuilder;
use crate::condition::Condition;
use crate::dialect::BinderSequence;
use crate::error::BuildResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum JoinKind {
    Inner,
    Left,
    Right,
}

impl JoinKind {
    fn keyword(self) -> &'static str {
        match self {
            JoinKind::Inner => "JOIN",
            JoinKind::Left => "LEFT JOIN",
            JoinKind::Right => "RIGHT JOIN",
        }
    }
}

/// One join clause, rendered in builder call order.
#[derive(Debug, Clone)]
pub(crate) struct Join {
    kind: JoinKind,
    table: String,
    left_key: String,
    right_key: String,
    /// Extension predicates ANDed onto the key equality.
    pub(crate) on: Condition,
}

impl QueryBuilder {
    /// Add an inner join: `JOIN table ON left_key=right_key`. `configure`
    /// receives the ON-extension tree and works like
    /// [`where_group`](Self::where_group); leave it empty for a plain
    /// key-equality join.
    pub fn join(
        &mut self,
        table: &str,
        left_key: &str,
        right_key: &str,
        configure: impl FnOnce(&mut Condition),
    ) -> &mut Self {
        self.add_join(JoinKind::Inner, table, left_key, right_key, configure)
    }

    /// Add a `LEFT JOIN`.
    pub fn left_join(
        &mut self,
        table: &str,
        left_key: &str,
        right_key: &str,
        configure: impl FnOnce(&mut Condition),
    ) -> &mut Self {
        self.add_join(JoinKind::Left, table, left_key, right_key, configure)
    }

    /// Add a `RIGHT JOIN`.
    pub fn right_join(
        &mut self,
        table: &str,
        left_key: &str,
        right_key: &str,
        configure: impl FnOnce(&mut Condition),
    ) -> &mut Self {
        self.add_join(JoinKind::Right, table, left_key, right_key, configure)
    }

    fn add_join(
        &mut self,
        kind: JoinKind,
        table: &str,
        left_key: &str,
        right_key: &str,
        configure: impl FnOnce(&mut Condition),
    ) -> &mut Self {
        let mut on = Condition::new();
        configure(&mut on);
        self.joins.push(Join {
            kind,
            table: table.to_string(),
            left_key: left_key.to_string(),
            right_key: right_key.to_string(),
            on,
        });
        self
    }

    /// Append all join clauses. Binder tokens for ON extensions draw from the
    /// statement-wide sequence, ahead of the WHERE tree.
    pub(crate) fn render_joins(
        &self,
        out: &mut String,
        binders: &mut BinderSequence,
    ) -> BuildResult<()> {
        for join in &self.joins {
            join.on.check()?;
            out.push(' ');
            out.push_str(join.kind.keyword());
            out.push(' ');
            self.dialect.push_quoted(out, &join.table);
            out.push_str(" ON ");
            self.dialect.push_quoted(out, &join.left_key);
            out.push('=');
            self.dialect.push_quoted(out, &join.right_key);
            if !join.on.is_empty() {
                out.push_str(" AND ");
                out.push_str(&join.on.render(self.dialect, binders)?);
            }
        }
        Ok(())
    }
}
