//! Error types for sqlweave

use thiserror::Error;

/// Result type alias for build operations
pub type BuildResult<T> = Result<T, BuildError>;

/// Errors reported while composing or rendering a statement.
///
/// Every variant is deterministic and caller-correctable: fix the call
/// arguments and rebuild. There is no transient-failure class.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// A leaf predicate was given a relation outside `=`, `>`, `<`, `>=`,
    /// `<=`, `<>`, `!=`.
    #[error("invalid relation operator: {0}")]
    InvalidRelation(String),

    /// A dialect name could not be resolved to a supported dialect.
    #[error("unknown SQL dialect: {0}")]
    UnknownDialect(String),

    /// The dialect cannot change while the current statement already has
    /// predicates, fields, values, or joins.
    #[error("dialect cannot be changed while a statement is being built")]
    DialectLocked,

    /// INSERT/UPDATE field list and value list have different lengths.
    #[error("field and value count mismatch: {fields} fields, {values} values")]
    FieldValueMismatch { fields: usize, values: usize },

    /// INSERT/UPDATE was rendered with an empty field list.
    #[error("at least one field is required")]
    NoFields,

    /// `as_sql` was called before any statement-selecting call.
    #[error("no statement selected")]
    NoStatement,

    /// An IN/NOT IN predicate was rendered with an empty value list, which
    /// is not portable SQL.
    #[error("IN list for field '{0}' is empty")]
    EmptyInList(String),
}
